// src/core/validation.rs
use std::fmt;
use thiserror::Error;

use crate::models::AccountForm;

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_NOTES_LENGTH: usize = 500;

const URL_SCHEMES: [&str; 3] = ["http://", "https://", "ftp://"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("website must be a valid URL (e.g. https://example.com)")]
    InvalidUrl,

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Every problem found in a form, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Loose URL check: known scheme, a dotted host (or localhost), no spaces.
pub fn is_valid_url(input: &str) -> bool {
    let lower = input.to_lowercase();
    let Some(rest) = URL_SCHEMES
        .iter()
        .find_map(|scheme| lower.strip_prefix(scheme))
    else {
        return false;
    };

    if rest.chars().any(char::is_whitespace) {
        return false;
    }

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    let host = host_port.split(':').next().unwrap_or_default();

    if host.is_empty() || host.starts_with('.') || host.ends_with('.') || host.contains("..") {
        return false;
    }
    host == "localhost" || host.contains('.')
}

fn check_website(website: &str) -> Option<ValidationError> {
    if website.trim().is_empty() {
        Some(ValidationError::Required("website"))
    } else if !is_valid_url(website.trim()) {
        Some(ValidationError::InvalidUrl)
    } else {
        None
    }
}

fn check_min(field: &'static str, value: &str, min: usize) -> Option<ValidationError> {
    if value.is_empty() {
        Some(ValidationError::Required(field))
    } else if value.chars().count() < min {
        Some(ValidationError::TooShort { field, min })
    } else {
        None
    }
}

pub fn validate_account_form(form: &AccountForm) -> Result<(), ValidationErrors> {
    let notes_error = form
        .notes
        .as_deref()
        .filter(|notes| notes.chars().count() > MAX_NOTES_LENGTH)
        .map(|_| ValidationError::TooLong { field: "notes", max: MAX_NOTES_LENGTH });

    let errors: Vec<ValidationError> = [
        check_website(&form.website),
        check_min("username", &form.username, MIN_USERNAME_LENGTH),
        check_min("password", &form.password, MIN_PASSWORD_LENGTH),
        notes_error,
    ]
    .into_iter()
    .flatten()
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
