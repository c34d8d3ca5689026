//! Submit-agent and newsletter forms.
//!
//! Nothing leaves the process: a valid form yields a receipt and the same
//! success message the site shows.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use uuid::Uuid;

pub const SUBMIT_SUCCESS: &str = "🎉 Agent submitted! We'll review it within 24 hours.";
pub const NEWSLETTER_SUCCESS: &str = "🎉 Welcome aboard! Check your inbox for a confirmation.";

/// Categories offered by the submit form.
pub const SUBMIT_CATEGORIES: [(&str, &str); 9] = [
    ("coding", "Coding"),
    ("research", "Research"),
    ("writing", "Writing"),
    ("sales", "Sales"),
    ("support", "Support"),
    ("data", "Data"),
    ("automation", "Automation"),
    ("frameworks", "Frameworks"),
    ("open-source", "Open Source"),
];

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingField(&'static str),
    InvalidEmail(String),
    UnknownCategory(String),
    UnknownTier(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField(field) => write!(f, "Missing required field: {}", field),
            FormError::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            FormError::UnknownCategory(c) => write!(f, "Unknown category: {}", c),
            FormError::UnknownTier(t) => {
                write!(f, "Unknown listing tier: {} (expected free, featured or premium)", t)
            }
        }
    }
}

impl std::error::Error for FormError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingTier {
    #[default]
    Free,
    Featured,
    Premium,
}

impl ListingTier {
    pub const ALL: [ListingTier; 3] = [ListingTier::Free, ListingTier::Featured, ListingTier::Premium];

    pub fn as_str(self) -> &'static str {
        match self {
            ListingTier::Free => "free",
            ListingTier::Featured => "featured",
            ListingTier::Premium => "premium",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingTier::Free => "Free",
            ListingTier::Featured => "Featured",
            ListingTier::Premium => "Premium",
        }
    }

    pub fn price(self) -> &'static str {
        match self {
            ListingTier::Free => "$0",
            ListingTier::Featured => "$99/mo",
            ListingTier::Premium => "$299/mo",
        }
    }

    pub fn perks(self) -> &'static [&'static str] {
        match self {
            ListingTier::Free => &["Basic listing", "Category placement", "Community reviews"],
            ListingTier::Featured => &[
                "Everything in Free",
                "Featured badge",
                "Homepage placement",
                "Analytics dashboard",
            ],
            ListingTier::Premium => &[
                "Everything in Featured",
                "Top of category",
                "Newsletter spotlight",
                "Dedicated support",
            ],
        }
    }
}

impl FromStr for ListingTier {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(ListingTier::Free),
            "featured" => Ok(ListingTier::Featured),
            "premium" => Ok(ListingTier::Premium),
            other => Err(FormError::UnknownTier(other.to_string())),
        }
    }
}

impl fmt::Display for ListingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionForm {
    pub name: String,
    pub company: String,
    pub tagline: String,
    pub description: String,
    pub category: String,
    pub pricing: String,
    pub website: String,
    pub email: String,
    pub tier: ListingTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub agent: String,
    pub tier: ListingTier,
    pub message: &'static str,
}

impl SubmissionForm {
    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            ("name", &self.name),
            ("company", &self.company),
            ("tagline", &self.tagline),
            ("description", &self.description),
            ("category", &self.category),
            ("pricing", &self.pricing),
            ("website", &self.website),
            ("email", &self.email),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(FormError::MissingField(field));
        }
        if !SUBMIT_CATEGORIES.iter().any(|(id, _)| *id == self.category.trim()) {
            return Err(FormError::UnknownCategory(self.category.clone()));
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Validate and accept the submission.
    pub fn submit(&self) -> Result<SubmissionReceipt, FormError> {
        self.validate()?;
        let receipt = SubmissionReceipt {
            id: Uuid::new_v4(),
            agent: self.name.trim().to_string(),
            tier: self.tier,
            message: SUBMIT_SUCCESS,
        };
        tracing::info!(receipt = %receipt.id, agent = %receipt.agent, tier = %receipt.tier, "agent submission accepted");
        Ok(receipt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    pub email: String,
    pub message: &'static str,
}

pub fn subscribe(email: &str) -> Result<Subscription, FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::MissingField("email"));
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail(email.to_string()));
    }
    tracing::info!(email, "newsletter subscription accepted");
    Ok(Subscription {
        email: email.to_string(),
        message: NEWSLETTER_SUCCESS,
    })
}
