//! CLI error types

use thiserror::Error;

use crate::errors::ServiceError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Service or store failure
    #[error("{0}")]
    Service(#[from] ServiceError),

    /// Server I/O failure
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display_is_passthrough() {
        let err = CliError::from(ServiceError::NotFound(1));
        assert_eq!(err.to_string(), "Student with ID 1 does not exist.");
    }
}
