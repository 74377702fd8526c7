//! Submission rule for the topic form: the `topic` field is required.

use thiserror::Error;

use super::catalog::Topic;

/// Name of the only form field.
pub const TOPIC_FIELD: &str = "topic";

/// Fixed message shown next to the field when nothing is selected.
pub const TOPIC_REQUIRED_MESSAGE: &str = "Please select a topic.";

/// Required-field-missing. The only validation failure the form produces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    field: &'static str,
    message: &'static str,
}

impl ValidationError {
    pub fn topic_required() -> Self {
        Self {
            field: TOPIC_FIELD,
            message: TOPIC_REQUIRED_MESSAGE,
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Validate a raw selector value: required, at least one character, and
/// exactly a catalog key.
///
/// The selector only offers catalog keys and an empty placeholder, so any
/// value that is not a catalog key counts as "nothing selected". No trimming:
/// `" Cricket "` is not `Cricket`.
pub fn validate_topic(candidate: &str) -> Result<Topic, ValidationError> {
    if candidate.is_empty() {
        return Err(ValidationError::topic_required());
    }
    candidate.parse::<Topic>().map_err(|err| {
        tracing::warn!(%err, "selector produced a value outside the catalog");
        ValidationError::topic_required()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_required_error() {
        let err = validate_topic("").unwrap_err();
        assert_eq!(err.message(), "Please select a topic.");
        assert_eq!(err.field(), "topic");
        assert_eq!(err.to_string(), "Please select a topic.");
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(validate_topic("   "), Err(ValidationError::topic_required()));
        assert_eq!(validate_topic(" Cricket "), Err(ValidationError::topic_required()));
        assert_eq!(validate_topic("Cricket\n"), Err(ValidationError::topic_required()));
        assert_eq!(validate_topic("Cricket"), Ok(Topic::Cricket));
    }

    #[test]
    fn every_catalog_key_validates_to_itself() {
        for topic in Topic::ALL {
            assert_eq!(validate_topic(topic.name()), Ok(topic));
        }
    }

    #[test]
    fn value_outside_catalog_is_rejected_with_same_message() {
        let err = validate_topic("Tennis").unwrap_err();
        assert_eq!(err, ValidationError::topic_required());
    }
}
