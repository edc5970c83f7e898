//! View-models for the page sections.
//!
//! Pure functions from state to what the Leptos components print. Keeping
//! them here lets the copy and the state → markup decisions be tested
//! without a browser.

use crate::case_studies::{CaseStudy, CaseStudyLoadState};
use crate::contact::SubmissionStatus;
use crate::form::{BudgetRange, LeadForm, ServiceOption};

pub const LOADING_CASE_STUDIES: &str = "Loading case studies...";
pub const NO_CASE_STUDIES: &str = "No case studies yet. Add some via the database.";
pub const MISSING_INDUSTRY: &str = "—";
pub const BUDGET_PLACEHOLDER: &str = "Monthly budget";
pub const SUBMIT_LABEL: &str = "Request proposal";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_NOTICE: &str = "Thanks! We’ll be in touch within 24 hours.";
pub const ERROR_NOTICE: &str = "Something went wrong. Please try again.";

/// One rendered case study card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudyCard {
    pub key: String,
    pub industry: String,
    pub title: String,
    pub summary: String,
    pub impact: Option<String>,
    pub image: Option<CardImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
}

impl From<&CaseStudy> for CaseStudyCard {
    fn from(study: &CaseStudy) -> Self {
        Self {
            key: study.id.to_string(),
            industry: study
                .industry
                .clone()
                .filter(|i| !i.is_empty())
                .unwrap_or_else(|| MISSING_INDUSTRY.to_string()),
            title: study.title.clone(),
            summary: study.summary.clone(),
            impact: study.impact.clone().filter(|i| !i.is_empty()),
            image: study
                .image_url
                .as_ref()
                .filter(|url| !url.is_empty())
                .map(|url| CardImage {
                    src: url.clone(),
                    alt: study.title.clone(),
                }),
        }
    }
}

/// What the case study section shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStudiesView {
    Loading,
    Empty,
    Cards(Vec<CaseStudyCard>),
}

impl CaseStudiesView {
    /// Marker text for the non-card states.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            CaseStudiesView::Loading => Some(LOADING_CASE_STUDIES),
            CaseStudiesView::Empty => Some(NO_CASE_STUDIES),
            CaseStudiesView::Cards(_) => None,
        }
    }
}

impl From<&CaseStudyLoadState> for CaseStudiesView {
    fn from(state: &CaseStudyLoadState) -> Self {
        match state {
            CaseStudyLoadState::Loading => CaseStudiesView::Loading,
            CaseStudyLoadState::Loaded(items) if items.is_empty() => CaseStudiesView::Empty,
            CaseStudyLoadState::Loaded(items) => {
                CaseStudiesView::Cards(items.iter().map(CaseStudyCard::from).collect())
            }
        }
    }
}

/// Submit button copy. The button stays clickable while sending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub busy: bool,
}

impl SubmitButton {
    pub fn for_status(status: SubmissionStatus) -> Self {
        match status {
            SubmissionStatus::Sending => Self {
                label: SENDING_LABEL,
                busy: true,
            },
            _ => Self {
                label: SUBMIT_LABEL,
                busy: false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message under the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusNotice {
    pub kind: NoticeKind,
    pub text: &'static str,
}

impl StatusNotice {
    pub fn for_status(status: SubmissionStatus) -> Option<Self> {
        match status {
            SubmissionStatus::Success => Some(Self {
                kind: NoticeKind::Success,
                text: SUCCESS_NOTICE,
            }),
            SubmissionStatus::Error => Some(Self {
                kind: NoticeKind::Error,
                text: ERROR_NOTICE,
            }),
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceChip {
    pub option: ServiceOption,
    pub selected: bool,
}

/// Service chips in the fixed option order, regardless of selection order.
pub fn service_chips(form: &LeadForm) -> Vec<ServiceChip> {
    ServiceOption::ALL
        .into_iter()
        .map(|option| ServiceChip {
            option,
            selected: form.has_service(option),
        })
        .collect()
}

/// One `<option>` of the budget select. `value` is `""` for the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetChoice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

pub fn budget_choices(form: &LeadForm) -> Vec<BudgetChoice> {
    let placeholder = BudgetChoice {
        value: "",
        label: BUDGET_PLACEHOLDER,
        selected: form.budget.is_none(),
    };
    std::iter::once(placeholder)
        .chain(BudgetRange::ALL.into_iter().map(|range| BudgetChoice {
            value: range.label(),
            label: range.label(),
            selected: form.budget == Some(range),
        }))
        .collect()
}
