use thiserror::Error;

/// Errors that can occur in the portal.
///
/// Game-domain endings (a snake crash, a rejected click) are not errors;
/// they are reported through each engine's own outcome types.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for portal operations
pub type Result<T> = std::result::Result<T, PortalError>;
