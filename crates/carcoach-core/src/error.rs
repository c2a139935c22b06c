//! Error types for the carcoach core.
//!
//! Loading errors are tagged so callers can tell a missing data file apart
//! from a real I/O failure and render a placeholder instead of indexing
//! into bogus data.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a facts file or quiz bank.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file does not exist.
    #[error("{} file not found", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound { path }
        } else {
            LoadError::Io { path, source }
        }
    }

    /// Returns `true` if the data file was simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}

/// Invalid inputs to the loan calculator.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LoanError {
    /// The loan term must be at least one year.
    #[error("years must be positive")]
    NonPositiveTerm,

    /// The amount borrowed cannot be negative.
    #[error("principal cannot be negative")]
    NegativePrincipal,

    /// The deposit is larger than the purchase price.
    #[error("deposit cannot exceed price")]
    DepositExceedsPrice,

    /// An amount or rate was NaN or infinite.
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
}

/// Errors from the score log.
#[derive(Debug, Error)]
pub enum ScoreLogError {
    /// Writing or reading the log failed.
    #[error("score log {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_classified() {
        let err = LoadError::from_io(
            PathBuf::from("data/car_facts.txt"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "data/car_facts.txt file not found");
    }

    #[test]
    fn other_io_errors_are_kept() {
        let err = LoadError::from_io(
            PathBuf::from("bank.txt"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("failed to read bank.txt"));
    }

    #[test]
    fn loan_error_messages() {
        assert_eq!(LoanError::NonPositiveTerm.to_string(), "years must be positive");
        assert_eq!(
            LoanError::NotFinite("rate").to_string(),
            "rate must be a finite number"
        );
    }
}
