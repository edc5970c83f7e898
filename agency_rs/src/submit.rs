//! Lead submission lifecycle: idle → sending → success / error.

use std::future::Future;

use tracing::{debug, info, warn};

use crate::api::AgencyApi;
use crate::cell::StateCell;
use crate::contact::{ContactState, Settlement, SubmissionStatus};

/// Posts lead form snapshots and folds the outcome back into [`ContactState`].
#[derive(Debug, Clone)]
pub struct LeadSubmitter<A> {
    api: A,
}

impl<A: AgencyApi + Clone> LeadSubmitter<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Start a submission.
    ///
    /// The status is `Sending` by the time this returns, before the returned
    /// future is first polled. The future performs the single request and
    /// resolves to the status it applied, or `None` when a newer submission
    /// superseded it (or the cell is gone). No retry, no timeout.
    pub fn submit<S>(&self, cell: &S) -> impl Future<Output = Option<SubmissionStatus>> + use<A, S>
    where
        S: StateCell<ContactState> + Clone,
    {
        let dispatched = cell.modify(ContactState::begin_submission);
        let api = self.api.clone();
        let cell = cell.clone();

        async move {
            let (ticket, snapshot) = dispatched?;
            debug!(ticket = ticket.seq(), "lead submission dispatched");

            let result = api.submit_lead(&snapshot).await;
            if let Err(err) = &result {
                warn!(ticket = ticket.seq(), error = %err, "lead submission failed");
            }

            match cell.modify(|state| state.settle(ticket, &result))? {
                Settlement::Applied(status) => {
                    info!(ticket = ticket.seq(), ?status, "lead submission settled");
                    Some(status)
                }
                Settlement::Superseded => {
                    debug!(ticket = ticket.seq(), "superseded by a newer submission");
                    None
                }
            }
        }
    }
}
