//! Error taxonomy for document retrieval, decoding, and validation.
//!
//! Retrieval and validation failures are collected into a
//! [`crate::validator::ValidationReport`] rather than thrown past the
//! validation entry point; anything unexpected propagates as
//! `anyhow::Error` and terminates the CLI with a non-zero status.

use thiserror::Error;

/// Everything that can go wrong before scoring starts.
#[derive(Error, Debug)]
pub enum GradeError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    #[error("Failed to parse {source_id}: {message}")]
    Syntax { source_id: String, message: String },

    #[error("Parser error: {0}")]
    Parser(String),

    #[error("Unresolvable reference '{reference}' at {location}")]
    ReferenceResolution { reference: String, location: String },

    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl GradeError {
    /// Map a filesystem error to the matching taxonomy entry.
    pub fn from_io(err: &std::io::Error, path: &str) -> GradeError {
        match err.kind() {
            std::io::ErrorKind::NotFound => GradeError::FileNotFound(path.to_string()),
            std::io::ErrorKind::PermissionDenied => GradeError::PermissionDenied(path.to_string()),
            _ => GradeError::Unknown(format!("{}: {}", path, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_to_taxonomy() {
        let not_found = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(matches!(
            GradeError::from_io(&not_found, "api.yaml"),
            GradeError::FileNotFound(_)
        ));

        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(
            GradeError::from_io(&denied, "api.yaml"),
            GradeError::PermissionDenied(_)
        ));

        let other = std::io::Error::other("disk on fire");
        assert!(matches!(
            GradeError::from_io(&other, "api.yaml"),
            GradeError::Unknown(_)
        ));
    }

    #[test]
    fn messages_name_the_source() {
        let err = GradeError::Syntax {
            source_id: "api.yaml".into(),
            message: "bad indent".into(),
        };
        assert!(err.to_string().contains("api.yaml"));
    }
}
