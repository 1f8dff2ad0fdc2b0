//! Contact form: field validation and the simulated submission lifecycle.
//!
//! Errors are per field and non-fatal. Before the first submit attempt
//! fields are only checked on submit; after it every edited field is
//! revalidated, so errors appear and clear as the user types. A successful
//! submission resets the form to the untouched state.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{PortfolioError, Result};
use crate::types::{ContactForm, Field};

pub const NAME_MIN_LEN: usize = 2;
pub const SUBJECT_MIN_LEN: usize = 5;
pub const MESSAGE_MIN_LEN: usize = 10;

const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$";

/// Inline messages keyed by field
pub type FieldErrors = BTreeMap<Field, &'static str>;

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN)).as_ref().ok()
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(value))
}

/// Message for `value` in `field`, or `None` when valid.
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let len = value.chars().count();
    match field {
        Field::Name if len < NAME_MIN_LEN => Some("Name must be at least 2 characters"),
        Field::Email if !is_valid_email(value) => Some("Please enter a valid email address"),
        Field::Subject if len < SUBJECT_MIN_LEN => Some("Subject must be at least 5 characters"),
        Field::Message if len < MESSAGE_MIN_LEN => Some("Message must be at least 10 characters"),
        _ => None,
    }
}

/// Every failing field of `form`.
pub fn validate(form: &ContactForm) -> FieldErrors {
    Field::ALL
        .iter()
        .filter_map(|&field| validate_field(field, form.get(field)).map(|msg| (field, msg)))
        .collect()
}

/// Delivers a validated form somewhere.
pub trait ContactSubmitter {
    /// # Errors
    /// Returns [`PortfolioError::Submit`] when delivery fails.
    fn submit(&self, form: &ContactForm) -> Result<()>;
}

/// Stand-in for a real email service: logs the form and succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSubmitter;

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, form: &ContactForm) -> Result<()> {
        log::info!(
            "contact form submitted: name={:?} email={:?} subject={:?} ({} chars)",
            form.name,
            form.email,
            form.subject,
            form.message.chars().count()
        );
        Ok(())
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    /// Success banner showing
    Submitted,
}

/// Form contents, inline errors and submission status
#[derive(Debug, Clone)]
pub struct ContactState {
    form: ContactForm,
    errors: FieldErrors,
    status: SubmitStatus,
    last_failure: Option<String>,
    submit_attempted: bool,
    message_max_len: usize,
}

impl ContactState {
    pub fn new(message_max_len: usize) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::new(),
            status: SubmitStatus::Idle,
            last_failure: None,
            submit_attempted: false,
            message_max_len,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    /// True between a submit attempt and the next successful submission.
    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Remaining characters for the message counter.
    pub fn message_remaining(&self) -> usize {
        self.message_max_len
            .saturating_sub(self.form.message.chars().count())
    }

    /// Edit one field. The message is capped at the configured length.
    pub fn set_field(&mut self, field: Field, value: &str) {
        let value: String = match field {
            Field::Message => value.chars().take(self.message_max_len).collect(),
            _ => value.to_string(),
        };
        *self.form.slot_mut(field) = value;
        if self.submit_attempted || self.errors.contains_key(&field) {
            match validate_field(field, self.form.get(field)) {
                Some(msg) => {
                    self.errors.insert(field, msg);
                }
                None => {
                    self.errors.remove(&field);
                }
            }
        }
    }

    /// Validate everything and enter `Submitting`.
    ///
    /// Returns a snapshot of the form to hand to the submitter.
    ///
    /// # Errors
    /// [`PortfolioError::SubmitInFlight`] if a submission is already running.
    /// Validation failures are not errors: they return `Ok(Err(errors))` and
    /// leave the state `Idle` with the errors shown inline.
    pub fn begin_submit(&mut self) -> Result<std::result::Result<ContactForm, FieldErrors>> {
        if self.status == SubmitStatus::Submitting {
            return Err(PortfolioError::SubmitInFlight);
        }
        self.submit_attempted = true;
        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            self.status = SubmitStatus::Idle;
            return Ok(Err(self.errors.clone()));
        }
        self.status = SubmitStatus::Submitting;
        self.last_failure = None;
        Ok(Ok(self.form.clone()))
    }

    /// Record the submitter's outcome.
    ///
    /// Success clears the form and shows the banner; failure returns to
    /// `Idle` with the form intact so the user can retry.
    pub fn finish_submit(&mut self, outcome: Result<()>) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.form = ContactForm::default();
                self.errors.clear();
                self.submit_attempted = false;
                self.status = SubmitStatus::Submitted;
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.last_failure = Some(e.to_string());
                self.status = SubmitStatus::Idle;
            }
        }
    }

    /// Hide the success banner.
    pub fn dismiss_success(&mut self) {
        if self.status == SubmitStatus::Submitted {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Synchronous submit through `submitter`. Returns the resulting status.
    ///
    /// # Errors
    /// [`PortfolioError::SubmitInFlight`] if a submission is already running.
    pub fn submit_with<S>(&mut self, submitter: &S) -> Result<SubmitStatus>
    where
        S: ContactSubmitter + ?Sized,
    {
        if let Ok(form) = self.begin_submit()? {
            let outcome = submitter.submit(&form);
            self.finish_submit(outcome);
        }
        Ok(self.status)
    }
}
