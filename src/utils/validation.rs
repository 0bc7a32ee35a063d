use crate::domain::model::ContactForm;
use crate::utils::error::{PortfolioError, Result};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in your name, email and a short message.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

// Unanchored on purpose: a valid-looking address anywhere in the value passes.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^@\s]+@[^@\s]+\.[^@\s]+").expect("email pattern compiles"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PortfolioError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PortfolioError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PortfolioError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(PortfolioError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn is_plausible_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Contact form rules, first failure wins. Phone is never checked.
pub fn validate_contact_form(form: &ContactForm) -> Result<()> {
    if form.name.is_empty() || form.email.is_empty() || form.remarks.is_empty() {
        return Err(PortfolioError::validation(MISSING_FIELDS_MESSAGE));
    }
    if !is_plausible_email(&form.email) {
        return Err(PortfolioError::validation(INVALID_EMAIL_MESSAGE));
    }
    Ok(())
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<()> {
        validate_contact_form(self)
    }
}
