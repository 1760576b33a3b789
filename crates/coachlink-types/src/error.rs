use thiserror::Error;

/// Errors raised when request input fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be at most {max} bytes")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} contains invalid character '{ch}'")]
    InvalidCharacter { field: &'static str, ch: char },
}

/// Errors related to learner profile operations.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("learner profile not found")]
    NotFound,

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Errors from the hosted chat vendor.
#[derive(Debug, Error)]
pub enum VendorError {
    #[error("vendor request failed: {0}")]
    Request(String),

    #[error("vendor returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("vendor authentication failed")]
    AuthenticationFailed,

    #[error("token signing failed: {0}")]
    Signing(String),
}

/// Errors raised while loading configuration or credentials at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingEnv(String),

    #[error("environment variable {0} is empty")]
    EmptyEnv(String),
}

/// Error returned by the core services, wrapping the domain error that caused it.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Vendor(#[from] VendorError),

    #[error(transparent)]
    Llm(#[from] crate::llm::LlmError),
}
