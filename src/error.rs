/// Error types for distro-finder
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for distro-finder operations
#[derive(Error, Debug)]
pub enum FinderError {
    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Answer doesn't belong to any known question/option pair
    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    /// Hardware facts record couldn't be interpreted
    #[error("Invalid hardware facts: {0}")]
    InvalidHardware(String),

    /// A distro's score vector doesn't line up with the user's vector
    #[error("Axis mismatch for '{distro}': expected {expected} {kind} scores, found {found}")]
    AxisMismatch {
        distro: String,
        kind: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Result type alias for distro-finder operations
pub type Result<T> = std::result::Result<T, FinderError>;

/// Convert FinderError to a user-friendly error message
impl FinderError {
    pub fn user_message(&self) -> String {
        match self {
            FinderError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            FinderError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            FinderError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            FinderError::InvalidAnswer(reason) => {
                format!("That answer wasn't recorded: {}", reason)
            }
            FinderError::InvalidHardware(reason) => {
                format!("Hardware information is unusable: {}", reason)
            }
            FinderError::AxisMismatch { distro, .. } => {
                format!(
                    "Scores for '{}' don't match the survey. Check marking.json and distro.json agree. Details: {}",
                    distro, self
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = FinderError::InvalidAnswer("question 7 has no option 9".to_string());
        assert!(err.user_message().contains("question 7"));

        let err = FinderError::AxisMismatch {
            distro: "Fedora".to_string(),
            kind: "preference",
            expected: 5,
            found: 4,
        };
        assert!(err.user_message().contains("Fedora"));
        assert!(err.user_message().contains("marking.json"));
    }

    #[test]
    fn test_error_display() {
        let err = FinderError::AxisMismatch {
            distro: "Arch".to_string(),
            kind: "hardware",
            expected: 5,
            found: 3,
        };
        let display = format!("{}", err);
        assert_eq!(
            display,
            "Axis mismatch for 'Arch': expected 5 hardware scores, found 3"
        );
    }
}
