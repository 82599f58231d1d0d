//! Error types shared by the extractor, database and writers.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeoError {
    /// A source or destination path could not be opened, read or written.
    #[error("File error on '{}': {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record failed its required-field or parse expectations.
    #[error("Malformed record {} in '{}': {message}", describe_record(.record), .path.display())]
    MalformedRecord {
        path: PathBuf,
        record: Option<usize>,
        message: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported output file '{}': expected a .csv or .json extension", .0.display())]
    UnsupportedOutput(PathBuf),
}

impl NeoError {
    pub fn file(path: &Path, source: std::io::Error) -> Self {
        NeoError::File {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed(path: &Path, record: Option<usize>, message: impl Into<String>) -> Self {
        NeoError::MalformedRecord {
            path: path.to_path_buf(),
            record,
            message: message.into(),
        }
    }

    /// True for errors that come from the content of an input file rather than its access.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            NeoError::MalformedRecord { .. } | NeoError::Csv(_) | NeoError::Json(_)
        )
    }

    /// Process exit status for the `neo` binary: 2 for bad input content, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_malformed() { 2 } else { 1 }
    }
}

fn describe_record(record: &Option<usize>) -> String {
    match record {
        Some(r) => format!("#{r}"),
        None => String::from("(header)"),
    }
}

pub type Result<T> = std::result::Result<T, NeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_by_kind() {
        let path = Path::new("neos.csv");
        let missing = NeoError::file(path, std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(!missing.is_malformed());
        assert_eq!(missing.exit_code(), 1);

        let malformed = NeoError::malformed(path, Some(3), "empty designation");
        assert!(malformed.is_malformed());
        assert_eq!(malformed.exit_code(), 2);
        assert_eq!(
            malformed.to_string(),
            "Malformed record #3 in 'neos.csv': empty designation"
        );

        let unsupported = NeoError::UnsupportedOutput(PathBuf::from("out.txt"));
        assert_eq!(unsupported.exit_code(), 1);
    }
}
