use serde::{Deserialize, Serialize};

/// Result of submitting an equipment listing
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Failure reported by the submission step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl SubmissionError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn external(message: impl Into<String>) -> Self {
        Self::new("EXTERNAL_ERROR", message)
    }
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for SubmissionError {}

impl From<anyhow::Error> for SubmissionError {
    fn from(err: anyhow::Error) -> Self {
        SubmissionError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_details() {
        let err = SubmissionError::external("Serveur indisponible").with_details("503");
        assert_eq!(err.to_string(), "[EXTERNAL_ERROR] Serveur indisponible: 503");
    }

    #[test]
    fn test_from_anyhow() {
        let err: SubmissionError = anyhow::anyhow!("boom").into();
        assert_eq!(err.code, "INTERNAL_ERROR");
        assert_eq!(err.message, "boom");
        assert_eq!(err.details, None);
    }
}
