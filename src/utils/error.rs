use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExerciseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid input: expected {expected}, found '{found}'")]
    InvalidInputError { expected: String, found: String },

    #[error("Input ended while waiting for {expected}")]
    UnexpectedEofError { expected: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Age must be positive!")]
    InvalidAgeError { age: i32 },

    #[error("Cannot compute statistics of an empty score list")]
    EmptyInputError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
    Domain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ExerciseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExerciseError::IoError(_) => ErrorCategory::Io,
            ExerciseError::InvalidInputError { .. } | ExerciseError::UnexpectedEofError { .. } => {
                ErrorCategory::Input
            }
            ExerciseError::ConfigError { .. } | ExerciseError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ExerciseError::InvalidAgeError { .. } | ExerciseError::EmptyInputError => {
                ErrorCategory::Domain
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ExerciseError::ConfigError { .. } | ExerciseError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            ExerciseError::InvalidInputError { .. }
            | ExerciseError::UnexpectedEofError { .. }
            | ExerciseError::InvalidAgeError { .. }
            | ExerciseError::EmptyInputError => ErrorSeverity::High,
            ExerciseError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a failure of this severity.
    pub fn exit_code(&self) -> u8 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ExerciseError::IoError(e) => format!("Could not read from or write to the console: {}", e),
            ExerciseError::InvalidInputError { expected, found } => {
                format!("'{}' is not {}", found, expected)
            }
            ExerciseError::UnexpectedEofError { expected } => {
                format!("No more input was available while waiting for {}", expected)
            }
            ExerciseError::ConfigError { message } => format!("The configuration is invalid: {}", message),
            ExerciseError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            ExerciseError::InvalidAgeError { .. } => self.to_string(),
            ExerciseError::EmptyInputError => "There are no scores to summarize".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that standard input and output are attached and writable",
            ErrorCategory::Input => "Re-run the exercise and type a value of the requested kind",
            ErrorCategory::Configuration => "Fix the TOML configuration file or run without --config",
            ErrorCategory::Domain => "Use a value inside the allowed range",
        }
    }
}

pub type Result<T> = std::result::Result<T, ExerciseError>;
