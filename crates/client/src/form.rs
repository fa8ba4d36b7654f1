//! Contact form validation.
//!
//! Submission never leaves the page: a valid form is acknowledged with a
//! fixed message and its contents are dropped.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

/// Shown to the visitor after a successful submission.
pub const ACKNOWLEDGMENT: &str = "お問い合わせありがとうございます。2営業日以内にご返信いたします。";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("必須項目を入力してください。")]
    MissingFields(Vec<&'static str>),

    #[error("正しいメールアドレスを入力してください。")]
    InvalidEmail,
}

impl FormError {
    pub fn code(&self) -> &'static str {
        match self {
            FormError::MissingFields(_) => "MISSING_FIELDS",
            FormError::InvalidEmail => "INVALID_EMAIL",
        }
    }
}

/// Values of the contact form. Optional fields like `phone` or `company`
/// are accepted and ignored by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Read an `application/x-www-form-urlencoded` body. Unknown keys are
    /// ignored; for repeated keys the last value wins.
    pub fn from_urlencoded(body: &str) -> Self {
        let mut form = Self::default();
        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            let slot = match key.as_ref() {
                "name" => &mut form.name,
                "email" => &mut form.email,
                "subject" => &mut form.subject,
                "message" => &mut form.message,
                _ => continue,
            };
            *slot = value.into_owned();
        }
        form
    }

    fn field(&self, name: &str) -> &str {
        match name {
            "name" => &self.name,
            "email" => &self.email,
            "subject" => &self.subject,
            "message" => &self.message,
            _ => "",
        }
    }

    /// Required fields that are empty or whitespace only, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS.into_iter().filter(|name| self.field(name).trim().is_empty()).collect()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }

    /// Validate and acknowledge. Nothing is transmitted.
    pub fn submit(self) -> Result<&'static str, FormError> {
        if let Err(error) = self.validate() {
            tracing::debug!(code = error.code(), "contact form rejected");
            return Err(error);
        }
        tracing::info!(subject = %self.subject.trim(), "contact form accepted");
        Ok(ACKNOWLEDGMENT)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
