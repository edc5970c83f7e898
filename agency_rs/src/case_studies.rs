//! Case study list: wire types, load state and the one-shot loader.
//!
//! A failed fetch is rendered exactly like an empty one. [`CaseStudyFetch`]
//! keeps the two apart so the failure can still be logged.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::api::AgencyApi;
use crate::cell::StateCell;
use crate::error::ApiError;

/// Backend identifier, opaque to the page. Any JSON number is kept as sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseStudyId {
    Number(serde_json::Number),
    Text(String),
}

impl From<i64> for CaseStudyId {
    fn from(n: i64) -> Self {
        CaseStudyId::Number(n.into())
    }
}

impl fmt::Display for CaseStudyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStudyId::Number(n) => write!(f, "{n}"),
            CaseStudyId::Text(s) => f.write_str(s),
        }
    }
}

/// A published client outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: CaseStudyId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `GET /api/case-studies`. A missing or `null` `items` means none.
///
/// Records are decoded one at a time; one that does not fit [`CaseStudy`] is
/// skipped without taking its siblings down with it.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CaseStudyList {
    #[serde(default)]
    items: Option<Vec<Value>>,
}

impl CaseStudyList {
    pub(crate) fn into_items(self) -> Vec<CaseStudy> {
        self.items
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| match serde_json::from_value(raw) {
                Ok(study) => Some(study),
                Err(err) => {
                    warn!(index, error = %err, "skipping malformed case study");
                    None
                }
            })
            .collect()
    }
}

/// What the case study section renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CaseStudyLoadState {
    #[default]
    Loading,
    Loaded(Vec<CaseStudy>),
}

impl CaseStudyLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, CaseStudyLoadState::Loading)
    }

    /// Move to `Loaded`. Only the first call has an effect; returns whether
    /// this call made the transition.
    pub fn resolve(&mut self, fetch: CaseStudyFetch) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = CaseStudyLoadState::Loaded(fetch.into_items());
        true
    }
}

/// Outcome of one fetch, before it is folded into [`CaseStudyLoadState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStudyFetch {
    Fetched(Vec<CaseStudy>),
    Failed(ApiError),
}

impl CaseStudyFetch {
    pub fn is_failure(&self) -> bool {
        matches!(self, CaseStudyFetch::Failed(_))
    }

    /// Items to display; a failure displays as an empty list.
    pub fn into_items(self) -> Vec<CaseStudy> {
        match self {
            CaseStudyFetch::Fetched(items) => items,
            CaseStudyFetch::Failed(_) => Vec::new(),
        }
    }
}

impl From<Result<Vec<CaseStudy>, ApiError>> for CaseStudyFetch {
    fn from(result: Result<Vec<CaseStudy>, ApiError>) -> Self {
        match result {
            Ok(items) => CaseStudyFetch::Fetched(items),
            Err(err) => CaseStudyFetch::Failed(err),
        }
    }
}

/// Fetches the case study list once per mount.
#[derive(Debug, Clone)]
pub struct CaseStudyLoader<A> {
    api: A,
}

impl<A: AgencyApi + Clone> CaseStudyLoader<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// One request, no retry.
    pub async fn fetch(&self) -> CaseStudyFetch {
        let fetch = CaseStudyFetch::from(self.api.fetch_case_studies().await);
        match &fetch {
            CaseStudyFetch::Fetched(items) => info!(count = items.len(), "case studies loaded"),
            CaseStudyFetch::Failed(err) => {
                warn!(error = %err, "case study fetch failed, showing empty list")
            }
        }
        fetch
    }

    /// Fetch and resolve `cell`. Resolves with `false` when the cell had
    /// already left `Loading` (or its storage is gone).
    pub fn load_into<S>(&self, cell: &S) -> impl Future<Output = bool> + use<A, S>
    where
        S: StateCell<CaseStudyLoadState> + Clone,
    {
        let loader = self.clone();
        let cell = cell.clone();
        async move {
            let fetch = loader.fetch().await;
            cell.modify(|state| state.resolve(fetch)).unwrap_or(false)
        }
    }
}
