use thiserror::Error;

/// A single row could not be turned into a boat.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Boat name must be 1-{max} characters, got {len}")]
    InvalidName { len: usize, max: usize },

    #[error("Invalid boat length: '{value}'")]
    InvalidLength { value: String },

    #[error("Unknown location type: '{value}'")]
    UnknownLocation { value: String },

    #[error("Invalid {location} detail: '{value}'")]
    InvalidDetail { location: String, value: String },

    #[error("Invalid balance: '{value}'")]
    InvalidBalance { value: String },

    #[error("Missing field: {field}")]
    MissingField { field: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepoError {
    #[error("Marina has reached maximum capacity ({capacity} boats)")]
    CapacityExceeded { capacity: usize },

    #[error("No boat named '{name}'")]
    NotFound { name: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BillingError {
    #[error("Boat '{name}' has no billable location")]
    UnknownLocation { name: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaymentError {
    #[error("Payment of ${amount:.2} is more than the amount owed, ${balance:.2}")]
    Overpayment { amount: f64, balance: f64 },

    #[error("Invalid payment amount: {amount}")]
    InvalidAmount { amount: f64 },
}

#[derive(Error, Debug)]
pub enum MarinaError {
    #[error("Decode error: {0}")]
    DecodeError(#[from] DecodeError),

    #[error("Repository error: {0}")]
    RepoError(#[from] RepoError),

    #[error("Billing error: {0}")]
    BillingError(#[from] BillingError),

    #[error("Payment error: {0}")]
    PaymentError(#[from] PaymentError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Inventory,
    Billing,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MarinaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MarinaError::DecodeError(_) | MarinaError::ValidationError { .. } => {
                ErrorCategory::Input
            }
            MarinaError::RepoError(_) => ErrorCategory::Inventory,
            MarinaError::BillingError(_) | MarinaError::PaymentError(_) => ErrorCategory::Billing,
            MarinaError::CsvError(_)
            | MarinaError::IoError(_)
            | MarinaError::SerializationError(_) => ErrorCategory::Storage,
            MarinaError::ConfigError { .. }
            | MarinaError::ConfigValidationError { .. }
            | MarinaError::InvalidConfigValueError { .. }
            | MarinaError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Inventory | ErrorCategory::Billing => {
                ErrorSeverity::Low
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MarinaError::DecodeError(_) => {
                "Use the format name,length,location,detail,balance (e.g. Moby,40,slip,42,0.00)"
            }
            MarinaError::RepoError(RepoError::CapacityExceeded { .. }) => {
                "Remove a boat or raise the capacity in the configuration"
            }
            MarinaError::RepoError(RepoError::NotFound { .. }) => {
                "Check the boat name with the inventory command"
            }
            MarinaError::BillingError(_) => "Fix the boat's location in the data file",
            MarinaError::PaymentError(PaymentError::Overpayment { .. }) => {
                "Pay no more than the outstanding balance"
            }
            MarinaError::PaymentError(PaymentError::InvalidAmount { .. }) => {
                "Enter a positive amount such as 120.50"
            }
            MarinaError::CsvError(_) | MarinaError::IoError(_) => {
                "Check that the data file exists and is readable and writable"
            }
            MarinaError::SerializationError(_) => "Report this as a bug",
            MarinaError::ConfigError { .. }
            | MarinaError::ConfigValidationError { .. }
            | MarinaError::InvalidConfigValueError { .. }
            | MarinaError::MissingConfigError { .. } => {
                "Check the TOML configuration file and command-line arguments"
            }
            MarinaError::ValidationError { .. } => "Correct the highlighted value and try again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MarinaError::DecodeError(e) => format!("Invalid boat data: {}", e),
            MarinaError::RepoError(e) => e.to_string(),
            MarinaError::BillingError(e) => e.to_string(),
            MarinaError::PaymentError(e) => e.to_string(),
            MarinaError::IoError(e) => format!("Could not access the data file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MarinaError>;
