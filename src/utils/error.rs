use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Upstream {resource} returned status {status}")]
    UpstreamStatus { resource: String, status: u16 },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Unknown gallery category: {0}")]
    InvalidCategory(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClinicError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClinicError::ApiError(_) => ErrorCategory::Network,
            ClinicError::UpstreamStatus { .. } | ClinicError::SerializationError(_) => {
                ErrorCategory::Upstream
            }
            ClinicError::ConfigValidationError { .. }
            | ClinicError::InvalidConfigValueError { .. }
            | ClinicError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ClinicError::ValidationError { .. } | ClinicError::InvalidCategory(_) => {
                ErrorCategory::Input
            }
            ClinicError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Whether a repeated request has a chance of succeeding.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClinicError::ApiError(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            ClinicError::UpstreamStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClinicError::ApiError(_) | ClinicError::UpstreamStatus { .. } => {
                "The clinic backend could not be reached".to_string()
            }
            ClinicError::SerializationError(_) => {
                "The clinic backend returned data in an unexpected format".to_string()
            }
            ClinicError::ConfigValidationError { field, .. }
            | ClinicError::InvalidConfigValueError { field, .. }
            | ClinicError::MissingConfigError { field } => {
                format!("Configuration problem with '{}'", field)
            }
            ClinicError::ValidationError { message } => message.clone(),
            ClinicError::InvalidCategory(category) => {
                format!("'{}' is not a gallery category", category)
            }
            ClinicError::IoError(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check network connectivity and the backend base URL",
            ErrorCategory::Upstream => "The backend may be starting up; try again later",
            ErrorCategory::Configuration => "Review the command line flags or configuration file",
            ErrorCategory::Input => "Correct the request and send it again",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClinicError>;
