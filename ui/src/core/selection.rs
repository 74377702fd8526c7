//! Page view state: the topic form and the quote dialog it opens.
//!
//! Both are plain values with explicit transitions. Components keep them in
//! signals and re-render after each mutation.

use super::catalog::{catalog, Topic, QUOTES_PER_TOPIC};
use super::validation::{validate_topic, ValidationError};

/// Quote dialog state machine: `Idle` until a valid submit, `Showing` until dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteDialog {
    #[default]
    Idle,
    Showing(Topic),
}

impl QuoteDialog {
    /// Show `topic`, replacing whatever was shown before.
    pub fn open(&mut self, topic: Topic) {
        *self = QuoteDialog::Showing(topic);
    }

    pub fn dismiss(&mut self) {
        if let QuoteDialog::Showing(topic) = *self {
            tracing::debug!(%topic, "quote dialog dismissed");
        }
        *self = QuoteDialog::Idle;
    }

    /// The submitted topic, if the dialog is showing.
    pub fn topic(&self) -> Option<Topic> {
        match self {
            QuoteDialog::Idle => None,
            QuoteDialog::Showing(topic) => Some(*topic),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, QuoteDialog::Showing(_))
    }

    /// Catalog entry for the shown topic.
    pub fn quotes(&self) -> Option<&'static [String; QUOTES_PER_TOPIC]> {
        self.topic().map(|topic| catalog().quotes(topic))
    }
}

/// Topic form: the raw selector value plus the inline error, if one is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicForm {
    value: String,
    error: Option<ValidationError>,
    // Set by the first submit; from then on every change re-validates.
    submitted: bool,
}

impl TopicForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(ValidationError::message)
    }

    /// Update the field. Once the form has been submitted the field
    /// re-validates on every change: picking a topic clears the message,
    /// going back to empty shows it again.
    pub fn select(&mut self, value: impl Into<String>) {
        self.value = value.into();
        if self.submitted {
            self.error = validate_topic(&self.value).err();
        }
    }

    /// Validate and, on success, open `dialog` with the chosen topic.
    /// A rejected submit leaves `dialog` untouched.
    pub fn submit(&mut self, dialog: &mut QuoteDialog) -> Result<Topic, ValidationError> {
        self.submitted = true;
        match validate_topic(&self.value) {
            Ok(topic) => {
                tracing::info!(%topic, "topic submitted");
                self.error = None;
                dialog.open(topic);
                Ok(topic)
            }
            Err(err) => {
                tracing::debug!(field = err.field(), "topic submit rejected");
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}
