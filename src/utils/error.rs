use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Invalid quantity: {value}")]
    InvalidQuantity { value: String },

    #[error("Search failed: {message}")]
    SearchFailed { message: String },

    #[error("Both Part Number and Volume are required.")]
    MissingSearchInput,

    #[error("Unrecognized input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("No cart line at position {index}")]
    LineNotFound { index: usize },

    #[error("No search result at position {index}")]
    ResultNotFound { index: usize },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
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
    Cart,
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CompareError {
    pub fn invalid_quantity(value: impl std::fmt::Display) -> Self {
        Self::InvalidQuantity {
            value: value.to_string(),
        }
    }

    pub fn search_failed(message: impl Into<String>) -> Self {
        Self::SearchFailed {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidQuantity { .. } | Self::MissingSearchInput | Self::InvalidInput { .. } => {
                ErrorCategory::Input
            }
            Self::LineNotFound { .. } | Self::ResultNotFound { .. } => ErrorCategory::Cart,
            Self::SearchFailed { .. } | Self::Http(_) => ErrorCategory::Network,
            Self::Csv(_) | Self::Serialization(_) => ErrorCategory::Data,
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Cart => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Short message suitable for showing directly to the person at the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidQuantity { value } => {
                format!("'{}' is not a usable quantity", value)
            }
            Self::SearchFailed { .. } | Self::Http(_) => {
                "Error fetching data from the server.".to_string()
            }
            Self::MissingSearchInput | Self::InvalidInput { .. } => self.to_string(),
            Self::LineNotFound { index } => format!("Cart has no item #{}", index + 1),
            Self::ResultNotFound { index } => format!("Results have no row #{}", index + 1),
            Self::Csv(_) | Self::Serialization(_) => "Could not format the output".to_string(),
            Self::ConfigValidationError { .. } | Self::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            Self::Io(e) => format!("System error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Enter a part number and a quantity greater than zero",
            ErrorCategory::Cart => "Run 'cart' or 'results' to see the valid positions",
            ErrorCategory::Network => {
                "Check that the pricing service is running and the endpoint is correct"
            }
            ErrorCategory::Data => "Try another output format",
            ErrorCategory::Configuration => "Check the config file and command line flags",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
