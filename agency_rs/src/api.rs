//! Backend API client.
//!
//! [`AgencyApi`] is the seam between the lifecycle code and the network.
//! [`HttpApi`] talks to the real backend through `reqwest`, which uses the
//! browser's `fetch` on wasm32 and hyper natively.

use std::future::Future;

use tracing::debug;

use crate::case_studies::{CaseStudy, CaseStudyList};
use crate::config::SiteConfig;
use crate::error::ApiError;
use crate::form::LeadForm;

pub const CASE_STUDIES_PATH: &str = "/api/case-studies";
pub const LEADS_PATH: &str = "/api/leads";

/// The two backend calls the page makes.
pub trait AgencyApi {
    /// `GET /api/case-studies`, decoded from `{ "items": [...] }`.
    fn fetch_case_studies(&self) -> impl Future<Output = Result<Vec<CaseStudy>, ApiError>>;

    /// `POST /api/leads` with the form snapshot plus `source = "website"`.
    /// Any 2xx counts as accepted; the body is ignored.
    fn submit_lead(&self, form: &LeadForm) -> impl Future<Output = Result<(), ApiError>>;
}

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: SiteConfig,
}

impl HttpApi {
    pub fn new(config: SiteConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: SiteConfig) -> Self {
        Self { client, config }
    }
}

fn ensure_success(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

impl AgencyApi for HttpApi {
    async fn fetch_case_studies(&self) -> Result<Vec<CaseStudy>, ApiError> {
        let url = self.config.endpoint(CASE_STUDIES_PATH);
        debug!(%url, "GET case studies");

        let response = self.client.get(&url).send().await?;
        ensure_success(&response)?;

        let body = response.bytes().await?;
        let list: CaseStudyList = serde_json::from_slice(&body)?;
        Ok(list.into_items())
    }

    async fn submit_lead(&self, form: &LeadForm) -> Result<(), ApiError> {
        let url = self.config.endpoint(LEADS_PATH);
        debug!(%url, services = form.services.len(), "POST lead");

        let response = self.client.post(&url).json(&form.payload()).send().await?;
        ensure_success(&response)
    }
}
