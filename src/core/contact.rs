use crate::core::Backend;
use crate::domain::model::{ContactField, ContactForm};
use crate::utils::error::PortfolioError;
use crate::utils::validation::validate_contact_form;

pub const CONTACT_PATH: &str = "contact";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send. Please try again later.";
pub const CONFIRMATION_MESSAGE: &str = "Thanks! Your message has been sent.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
}

/// Display status derived from the phase, the submitted flag and the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Submitted,
}

/// Immutable snapshot of the contact form. Every transition returns a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactState {
    form: ContactForm,
    phase: Phase,
    submitted: bool,
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A send is already in flight; the trigger is disabled and nothing happens.
    Ignored(ContactState),
    /// Validation failed; the state carries the message and the untouched form.
    Rejected(ContactState),
    /// Validation passed; `payload` must be posted exactly once.
    Dispatch {
        state: ContactState,
        payload: ContactForm,
    },
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactState {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            phase: Phase::Editing,
            submitted: false,
            error: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> SubmissionStatus {
        match self.phase {
            Phase::Submitting => SubmissionStatus::Submitting,
            Phase::Editing if self.submitted && self.error.is_none() => SubmissionStatus::Submitted,
            Phase::Editing => SubmissionStatus::Idle,
        }
    }

    pub fn submit_enabled(&self) -> bool {
        self.phase == Phase::Editing
    }

    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            Phase::Submitting => "Sending…",
            Phase::Editing => "Send Message",
        }
    }

    pub fn confirmation(&self) -> Option<&'static str> {
        (self.status() == SubmissionStatus::Submitted).then_some(CONFIRMATION_MESSAGE)
    }

    pub fn with_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        Self {
            form: self.form.clone().with(field, value),
            ..self.clone()
        }
    }

    pub fn with_form(&self, form: ContactForm) -> Self {
        Self {
            form,
            ..self.clone()
        }
    }

    pub fn request_submit(&self) -> SubmitAttempt {
        if !self.submit_enabled() {
            return SubmitAttempt::Ignored(self.clone());
        }

        match validate_contact_form(&self.form) {
            Err(e) => SubmitAttempt::Rejected(Self {
                error: Some(e.to_string()),
                ..self.clone()
            }),
            Ok(()) => SubmitAttempt::Dispatch {
                state: Self {
                    phase: Phase::Submitting,
                    error: None,
                    ..self.clone()
                },
                payload: self.form.clone(),
            },
        }
    }

    /// The backend accepted the message.
    pub fn delivered(&self) -> Self {
        Self {
            form: ContactForm::default(),
            phase: Phase::Editing,
            submitted: true,
            error: None,
        }
    }

    /// The send failed; the form is kept for another attempt.
    pub fn failed(&self, message: impl Into<String>) -> Self {
        Self {
            phase: Phase::Editing,
            error: Some(message.into()),
            ..self.clone()
        }
    }
}

/// Message shown for a failed send. Non-2xx answers get the generic text,
/// anything else surfaces its own message.
pub fn failure_message(error: &PortfolioError) -> String {
    match error {
        PortfolioError::Status { .. } => SEND_FAILED_MESSAGE.to_string(),
        other => other.to_string(),
    }
}

pub struct ContactSubmitter<B: Backend> {
    backend: B,
}

impl<B: Backend> ContactSubmitter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Runs one submit event to completion and returns the resulting snapshot.
    pub async fn submit(&self, state: &ContactState) -> ContactState {
        let (submitting, payload) = match state.request_submit() {
            SubmitAttempt::Ignored(next) => {
                tracing::debug!("Submit ignored: a message is already being sent");
                return next;
            }
            SubmitAttempt::Rejected(next) => {
                tracing::info!("Contact form rejected: {}", next.error().unwrap_or_default());
                return next;
            }
            SubmitAttempt::Dispatch { state, payload } => (state, payload),
        };

        match self.backend.post_json(CONTACT_PATH, &payload).await {
            Ok(()) => {
                tracing::info!("Contact message delivered");
                submitting.delivered()
            }
            Err(e) => {
                tracing::warn!("Contact message failed: {}", e);
                submitting.failed(failure_message(&e))
            }
        }
    }
}
