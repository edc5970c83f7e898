//! Lead form data model.
//!
//! [`LeadForm`] is a plain value. Mutations return a new snapshot so callers
//! can keep older snapshots around (the submitter does exactly that while a
//! request is in flight).

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;

/// Value of the `source` field attached to every lead posted from the page.
pub const LEAD_SOURCE: &str = "website";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email shape regex is valid")
});

/// Services a lead can ask about. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ServiceOption {
    #[serde(rename = "Paid Social")]
    PaidSocial,
    #[serde(rename = "Paid Search")]
    PaidSearch,
    #[serde(rename = "Creative")]
    Creative,
    #[serde(rename = "CRO")]
    Cro,
    #[serde(rename = "Email/SMS")]
    EmailSms,
}

impl ServiceOption {
    pub const ALL: [ServiceOption; 5] = [
        ServiceOption::PaidSocial,
        ServiceOption::PaidSearch,
        ServiceOption::Creative,
        ServiceOption::Cro,
        ServiceOption::EmailSms,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceOption::PaidSocial => "Paid Social",
            ServiceOption::PaidSearch => "Paid Search",
            ServiceOption::Creative => "Creative",
            ServiceOption::Cro => "CRO",
            ServiceOption::EmailSms => "Email/SMS",
        }
    }
}

impl fmt::Display for ServiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceOption::ALL
            .into_iter()
            .find(|opt| opt.label() == s)
            .ok_or(())
    }
}

/// Monthly budget brackets offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "Under $10k")]
    Under10k,
    #[serde(rename = "$10k - $25k")]
    From10kTo25k,
    #[serde(rename = "$25k - $50k")]
    From25kTo50k,
    #[serde(rename = "$50k - $100k")]
    From50kTo100k,
    #[serde(rename = "$100k+")]
    Over100k,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 5] = [
        BudgetRange::Under10k,
        BudgetRange::From10kTo25k,
        BudgetRange::From25kTo50k,
        BudgetRange::From50kTo100k,
        BudgetRange::Over100k,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetRange::Under10k => "Under $10k",
            BudgetRange::From10kTo25k => "$10k - $25k",
            BudgetRange::From25kTo50k => "$25k - $50k",
            BudgetRange::From50kTo100k => "$50k - $100k",
            BudgetRange::Over100k => "$100k+",
        }
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetRange {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BudgetRange::ALL
            .into_iter()
            .find(|range| range.label() == s)
            .ok_or(())
    }
}

/// Scalar fields addressable by [`LeadForm::with_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    Email,
    Company,
    Website,
    Budget,
    Phone,
    Message,
}

/// Contents of the lead capture form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: String,
    pub services: BTreeSet<ServiceOption>,
    pub budget: Option<BudgetRange>,
    pub phone: String,
    pub message: String,
}

impl LeadForm {
    /// Copy of `self` with one scalar field replaced.
    ///
    /// A budget value outside [`BudgetRange::ALL`] (including `""`) clears the
    /// budget.
    pub fn with_field(&self, field: LeadField, value: impl Into<String>) -> LeadForm {
        let value = value.into();
        let mut next = self.clone();
        match field {
            LeadField::Name => next.name = value,
            LeadField::Email => next.email = value,
            LeadField::Company => next.company = value,
            LeadField::Website => next.website = value,
            LeadField::Phone => next.phone = value,
            LeadField::Message => next.message = value,
            LeadField::Budget => {
                next.budget = value.parse().ok();
                if next.budget.is_none() && !value.is_empty() {
                    debug!(value = %value, "unknown budget range, clearing");
                }
            }
        }
        next
    }

    /// Copy of `self` with `option` added to, or removed from, `services`.
    pub fn toggle_service(&self, option: ServiceOption) -> LeadForm {
        let mut next = self.clone();
        if !next.services.remove(&option) {
            next.services.insert(option);
        }
        next
    }

    pub fn has_service(&self, option: ServiceOption) -> bool {
        self.services.contains(&option)
    }

    /// Pre-submit checks mirroring the form's `required` / `type=email` inputs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !EMAIL_SHAPE.is_match(email) {
            return Err(ValidationError::MalformedEmail);
        }
        Ok(())
    }

    /// Wire representation posted to `/api/leads`.
    pub fn payload(&self) -> LeadPayload<'_> {
        LeadPayload {
            name: &self.name,
            email: &self.email,
            company: &self.company,
            website: &self.website,
            services: self.services.iter().map(|s| s.label()).collect(),
            budget: self.budget.map(BudgetRange::label).unwrap_or(""),
            message: &self.message,
            phone: &self.phone,
            source: LEAD_SOURCE,
        }
    }
}

/// JSON body of `POST /api/leads`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub company: &'a str,
    pub website: &'a str,
    pub services: Vec<&'static str>,
    pub budget: &'static str,
    pub message: &'a str,
    #[serde(skip_serializing_if = "is_unset")]
    pub phone: &'a str,
    pub source: &'static str,
}

fn is_unset(value: &&str) -> bool {
    value.is_empty()
}
