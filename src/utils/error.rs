use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Cannot compute {operation} of an empty sequence")]
    EmptyInput { operation: String },

    #[error("Invalid number '{value}': {reason}")]
    InvalidNumber { value: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl UtilsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            UtilsError::EmptyInput { .. } | UtilsError::InvalidNumber { .. } => {
                ErrorCategory::Input
            }
            UtilsError::IoError(_) | UtilsError::CsvError(_) => ErrorCategory::Io,
            UtilsError::SerializationError(_) => ErrorCategory::Serialization,
            UtilsError::ConfigValidationError { .. }
            | UtilsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Serialization => ErrorSeverity::Critical,
        }
    }

    /// Process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            UtilsError::EmptyInput { .. } => {
                "Pass at least one value, or a --file with at least one number".to_string()
            }
            UtilsError::InvalidNumber { .. } => {
                "Use plain decimal numbers such as 3, -1.5 or 2e3".to_string()
            }
            UtilsError::IoError(_) => "Check that the file exists and is readable".to_string(),
            UtilsError::CsvError(_) => {
                "Check the CSV delimiter and header settings in the [csv] section".to_string()
            }
            UtilsError::SerializationError(_) => "Retry with --format text".to_string(),
            UtilsError::ConfigValidationError { field, .. }
            | UtilsError::InvalidConfigValueError { field, .. } => {
                format!("Fix '{}' in the config file or override it on the command line", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input error: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("Could not read input: {}", self),
            ErrorCategory::Serialization => format!("Could not render output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilsError>;
