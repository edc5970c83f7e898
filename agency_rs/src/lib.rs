//! # agency
//!
//! Behaviour behind the agency marketing page: the lead capture form, its
//! submission lifecycle, and the one-shot case study fetch.
//!
//! The crate compiles for native targets and for `wasm32-unknown-unknown`;
//! the Leptos page in `landing/` drives it through signals.
//!
//! ## Architecture
//!
//! - [`form`] - [`form::LeadForm`] value type, fixed option lists, validation
//! - [`contact`] - form + [`contact::SubmissionStatus`] state and its transitions
//! - [`submit`] - [`submit::LeadSubmitter`], the `POST /api/leads` lifecycle
//! - [`case_studies`] - [`case_studies::CaseStudyLoader`] and load state
//! - [`api`] - [`api::AgencyApi`] seam and the `reqwest`-backed [`api::HttpApi`]
//! - [`cell`] - [`cell::StateCell`], where lifecycle code writes state
//! - [`view`] - view-models the page sections render
//! - [`config`], [`error`], [`logging`] - ambient plumbing
//!
//! ## Example
//!
//! ```rust,no_run
//! use agency::{
//!     CaseStudyLoadState, CaseStudyLoader, ContactState, HttpApi, LeadField, LeadSubmitter,
//!     LocalCell, SiteConfig, StateCell,
//! };
//!
//! # async fn run() -> Result<(), agency::ConfigError> {
//! agency::logging::init_native();
//! let api = HttpApi::new(SiteConfig::from_env(None)?);
//!
//! let studies = LocalCell::new(CaseStudyLoadState::Loading);
//! CaseStudyLoader::new(api.clone()).load_into(&studies).await;
//!
//! let contact = LocalCell::new(ContactState::new());
//! contact.modify(|s| {
//!     s.set_field(LeadField::Name, "Jo");
//!     s.set_field(LeadField::Email, "jo@x.com");
//! });
//! let status = LeadSubmitter::new(api).submit(&contact).await;
//! println!("{status:?}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod case_studies;
pub mod cell;
pub mod config;
pub mod contact;
pub mod error;
pub mod form;
pub mod logging;
pub mod submit;
pub mod view;

pub use api::{AgencyApi, HttpApi};
pub use case_studies::{CaseStudy, CaseStudyFetch, CaseStudyId, CaseStudyLoadState, CaseStudyLoader};
pub use cell::{LocalCell, StateCell};
pub use config::SiteConfig;
pub use contact::{ContactState, Settlement, SubmissionStatus, SubmissionTicket};
pub use error::{ApiError, ConfigError, ValidationError};
pub use form::{BudgetRange, LeadField, LeadForm, LeadPayload, ServiceOption};
pub use submit::LeadSubmitter;
