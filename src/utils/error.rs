use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failed run.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidConfigValueError { .. } => ErrorCategory::Input,
            CalcError::ConfigError { .. } | CalcError::ConfigValidationError { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::SerializationError(_)
            | CalcError::CsvError(_)
            | CalcError::RenderError { .. } => ErrorCategory::Output,
            CalcError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::InvalidConfigValueError { field, .. } => format!(
                "Check the value given for '{}', or re-run without --strict to clamp it into range",
                field
            ),
            CalcError::ConfigError { .. } | CalcError::ConfigValidationError { .. } => {
                "Make sure the scenario file exists and is valid TOML".to_string()
            }
            CalcError::SerializationError(_) | CalcError::CsvError(_) => {
                "Try a different --format".to_string()
            }
            CalcError::RenderError { .. } => "Try a different --format".to_string(),
            CalcError::IoError(_) => {
                "Check file permissions and that the path exists".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            CalcError::ConfigError { message } => format!("Could not load scenario: {}", message),
            CalcError::ConfigValidationError { field, message } => {
                format!("Scenario problem in {}: {}", field, message)
            }
            CalcError::IoError(e) => format!("File access failed: {}", e),
            other => format!("Could not produce the report: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_medium_severity() {
        let e = CalcError::InvalidConfigValueError {
            field: "customer_count".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 28".to_string(),
        };
        assert_eq!(e.category(), ErrorCategory::Input);
        assert_eq!(e.severity(), ErrorSeverity::Medium);
        assert_eq!(e.severity().exit_code(), 2);
        assert!(e.user_friendly_message().contains("customer_count"));
        assert!(e.recovery_suggestion().contains("customer_count"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let e = CalcError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(e.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            CalcError::InvalidConfigValueError {
                field: "walks".to_string(),
                value: "-1".to_string(),
                reason: "negative".to_string(),
            },
            CalcError::ConfigError {
                message: "missing".to_string(),
            },
            CalcError::RenderError {
                message: "broken".to_string(),
            },
            CalcError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk")),
        ];
        let codes: Vec<i32> = errors.iter().map(|e| e.severity().exit_code()).collect();
        assert_eq!(codes, vec![2, 1, 1, 3]);
    }
}
