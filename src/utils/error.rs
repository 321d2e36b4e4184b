use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },

    #[error("Invalid argument for {operation}: {reason}")]
    InvalidArgument { operation: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Time formatting failed: {message}")]
    TimeFormatError { message: String },
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Configuration,
    Io,
    Serialization,
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::DivisionByZero { .. } | CalcError::InvalidArgument { .. } => {
                ErrorCategory::Arithmetic
            }
            CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. }
            | CalcError::TomlError(_) => ErrorCategory::Configuration,
            CalcError::IoError(_) => ErrorCategory::Io,
            CalcError::SerializationError(_) => ErrorCategory::Serialization,
            CalcError::TimeFormatError { .. } => ErrorCategory::Time,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CalcError::DivisionByZero { .. } | CalcError::InvalidArgument { .. } => {
                ErrorSeverity::High
            }
            CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. }
            | CalcError::TomlError(_)
            | CalcError::TimeFormatError { .. } => ErrorSeverity::Medium,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::DivisionByZero { .. } => "Use a non-zero divisor".to_string(),
            CalcError::InvalidArgument { operation, .. } => {
                format!("Check the operands passed to '{}'", operation)
            }
            CalcError::IoError(_) => "Check file permissions and console availability".to_string(),
            CalcError::SerializationError(_) => {
                "Re-run with --format text to bypass JSON output".to_string()
            }
            CalcError::TomlError(_) | CalcError::ConfigError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            CalcError::InvalidConfigValueError { field, .. } => {
                format!("Correct the '{}' value in the configuration", field)
            }
            CalcError::MissingConfigError { field } => {
                format!("Add the '{}' field to the configuration", field)
            }
            CalcError::TimeFormatError { .. } => {
                "Use a valid chrono format string such as %H:%M:%S".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::DivisionByZero { .. } => "Cannot divide by zero".to_string(),
            CalcError::InvalidArgument { operation, reason } => {
                format!("Invalid input for {}: {}", operation, reason)
            }
            CalcError::IoError(e) => format!("Could not write output: {}", e),
            CalcError::SerializationError(_) => "Could not render the result as JSON".to_string(),
            CalcError::TomlError(e) => format!("Configuration file is not valid TOML: {}", e),
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            CalcError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            CalcError::TimeFormatError { message } => {
                format!("Could not format the current time: {}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_errors_are_high_severity() {
        let err = CalcError::DivisionByZero { dividend: 4.0 };
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = CalcError::InvalidArgument {
            operation: "square_root".to_string(),
            reason: "negative input".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Arithmetic);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_config_errors_are_medium_severity() {
        let err = CalcError::MissingConfigError {
            field: "greeting.greet_name".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_messages_mention_the_failing_field() {
        let err = CalcError::InvalidConfigValueError {
            field: "calculator.precision".to_string(),
            value: "99".to_string(),
            reason: "Value must be between 0 and 17".to_string(),
        };
        assert!(err.user_friendly_message().contains("calculator.precision"));
        assert!(err.recovery_suggestion().contains("calculator.precision"));
    }
}
