use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    // Display passes the transport message through untouched; the contact form shows it verbatim.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// A contact message the backend did not accept, with the text shown to the sender.
    #[error("{message}")]
    Delivery { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
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

impl PortfolioError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Http(_) | Self::Status { .. } | Self::Delivery { .. } => ErrorCategory::Network,
            Self::Serialization(_) => ErrorCategory::Data,
            Self::Config { .. } | Self::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            Self::Validation { .. } => ErrorCategory::Input,
            Self::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Http(e) if e.is_timeout() => "The backend did not answer in time".to_string(),
            Self::Http(_) => "Could not reach the backend".to_string(),
            Self::Status { status, .. } => format!("The backend answered with status {}", status),
            Self::Delivery { message } => message.clone(),
            Self::Serialization(_) => "The backend sent data in an unexpected shape".to_string(),
            Self::Io(e) => format!("File access failed: {}", e),
            Self::Config { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::Validation { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the backend origin is correct and the service is running",
            ErrorCategory::Data => "Check that the backend returns JSON arrays in the documented shape",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags and try again",
            ErrorCategory::Input => "Correct the highlighted form fields and submit again",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
