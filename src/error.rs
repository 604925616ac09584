use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the planner library
///
/// Normalization itself never fails (malformed schedules are repaired, not
/// rejected); errors can only come from the configuration file boundary.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(workshop_planner::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(workshop_planner::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(workshop_planner::serialization))]
    Serialization(String),
}

// Implement From for TOML serialization errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type PlannerResult<T> = Result<T, Error>;

/// Helper function to create a configuration error
#[allow(dead_code)]
pub fn config_error(msg: impl Into<String>) -> Error {
    Error::Config(msg.into())
}
