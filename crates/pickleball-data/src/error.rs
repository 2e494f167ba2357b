//! Error types for dataset loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset operations.
pub type DatasetResult<T> = std::result::Result<T, DatasetError>;

/// Errors that can occur while loading the facility dataset.
///
/// These are the only errors surfaced to the user. Once the dataset is loaded,
/// problems inside individual records degrade silently instead.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// I/O error while reading the dataset file.
    #[error("failed to read dataset '{path}': {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The dataset is not a JSON array of facility records.
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DatasetError {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DatasetError::Read { .. } => 3,
            DatasetError::Json(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display_includes_path() {
        let error = DatasetError::Read {
            path: PathBuf::from("/tmp/missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        let message = error.to_string();
        assert!(message.contains("/tmp/missing.json"));
        assert!(message.contains("no such file"));
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_json_error_from_serde() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error: DatasetError = source.into();

        assert!(matches!(error, DatasetError::Json(_)));
        assert!(error.to_string().starts_with("invalid dataset JSON"));
        assert_eq!(error.exit_code(), 1);
    }
}
