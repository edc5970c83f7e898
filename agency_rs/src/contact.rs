//! State of the contact section: the form plus its submission status.

use tracing::debug;

use crate::error::ApiError;
use crate::form::{LeadField, LeadForm, ServiceOption};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Sequence number handed out when a submission is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// What [`ContactState::settle`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied(SubmissionStatus),
    /// A later submission was dispatched; this response was dropped.
    Superseded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    form: LeadForm,
    status: SubmissionStatus,
    last_dispatched: u64,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn set_field(&mut self, field: LeadField, value: impl Into<String>) {
        self.form = self.form.with_field(field, value);
    }

    /// Toggle by display label; labels outside [`ServiceOption::ALL`] are ignored.
    pub fn toggle_service(&mut self, name: &str) {
        match name.parse::<ServiceOption>() {
            Ok(option) => self.form = self.form.toggle_service(option),
            Err(()) => debug!(name, "ignoring unknown service option"),
        }
    }

    /// Enter `Sending` and hand back the snapshot to post.
    pub fn begin_submission(&mut self) -> (SubmissionTicket, LeadForm) {
        self.last_dispatched += 1;
        self.status = SubmissionStatus::Sending;
        (SubmissionTicket(self.last_dispatched), self.form.clone())
    }

    /// Fold a response into the state.
    ///
    /// Only the most recently dispatched ticket may change anything. Success
    /// resets the form; failure keeps it for a retry.
    pub fn settle(&mut self, ticket: SubmissionTicket, result: &Result<(), ApiError>) -> Settlement {
        if ticket.0 != self.last_dispatched {
            return Settlement::Superseded;
        }
        self.status = match result {
            Ok(()) => {
                self.form = LeadForm::default();
                SubmissionStatus::Success
            }
            Err(_) => SubmissionStatus::Error,
        };
        Settlement::Applied(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn jo() -> ContactState {
        let mut state = ContactState::new();
        state.set_field(LeadField::Name, "Jo");
        state.set_field(LeadField::Email, "jo@x.com");
        state.toggle_service("Paid Social");
        state
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = ContactState::new();
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.form(), &LeadForm::default());
    }

    #[test]
    fn unknown_service_names_are_ignored() {
        let mut state = jo();
        let before = state.form().clone();
        state.toggle_service("Billboards");
        assert_eq!(state.form(), &before);
    }

    #[test]
    fn toggle_by_name_is_its_own_inverse() {
        let mut state = jo();
        let before = state.form().services.clone();
        state.toggle_service("CRO");
        state.toggle_service("CRO");
        assert_eq!(state.form().services, before);
    }

    #[test]
    fn begin_submission_enters_sending_with_fresh_ticket() {
        let mut state = jo();
        let (first, snapshot) = state.begin_submission();
        let (second, _) = state.begin_submission();

        assert_eq!(state.status(), SubmissionStatus::Sending);
        assert_eq!(&snapshot, state.form());
        assert!(second > first);
        assert_eq!(second.seq(), first.seq() + 1);
    }

    #[test]
    fn success_resets_form() {
        let mut state = jo();
        let (ticket, _) = state.begin_submission();

        let outcome = state.settle(ticket, &Ok(()));

        assert_eq!(outcome, Settlement::Applied(SubmissionStatus::Success));
        assert_eq!(state.form(), &LeadForm::default());
    }

    #[test]
    fn failure_keeps_form_for_retry() {
        let mut state = jo();
        let before = state.form().clone();
        let (ticket, _) = state.begin_submission();

        let outcome = state.settle(ticket, &Err(ApiError::Status { status: 500 }));

        assert_eq!(outcome, Settlement::Applied(SubmissionStatus::Error));
        assert_eq!(state.form(), &before);
    }

    #[test]
    fn stale_ticket_is_superseded_in_either_order() {
        let mut state = jo();
        let (first, _) = state.begin_submission();
        let (second, _) = state.begin_submission();

        // older attempt resolves first: still waiting on the newer one
        assert_eq!(state.settle(first, &Ok(())), Settlement::Superseded);
        assert_eq!(state.status(), SubmissionStatus::Sending);
        assert_eq!(state.form().name, "Jo");

        assert_eq!(
            state.settle(second, &Err(ApiError::Transport("reset".into()))),
            Settlement::Applied(SubmissionStatus::Error)
        );

        // newer attempt already settled; a late older one changes nothing
        let (third, _) = state.begin_submission();
        let (fourth, _) = state.begin_submission();
        assert_eq!(
            state.settle(fourth, &Ok(())),
            Settlement::Applied(SubmissionStatus::Success)
        );
        assert_eq!(
            state.settle(third, &Err(ApiError::Status { status: 502 })),
            Settlement::Superseded
        );
        assert_eq!(state.status(), SubmissionStatus::Success);
    }
}
