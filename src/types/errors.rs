use thiserror::Error;

/// Failure kinds of the export pipeline.
///
/// `Open` covers both an unreadable container and a container missing the
/// expected tables/columns, since sqlx reports both through the same
/// channel. `Contract` marks records that lack an attribute the model
/// format requires (`Name` on folders and modules, `$Type` on documents).
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Open error: {0}")]
    Open(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Contract violation: {0}")]
    Contract(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<sqlx::Error> for ExportError {
    fn from(error: sqlx::Error) -> Self {
        ExportError::Open(error.to_string())
    }
}

impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        ExportError::Io(error.to_string())
    }
}

impl From<serde_yaml::Error> for ExportError {
    fn from(error: serde_yaml::Error) -> Self {
        ExportError::Io(error.to_string())
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
