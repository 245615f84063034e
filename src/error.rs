//! Error handling for the vuegen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for vuegen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents malformed command-line input
    #[error("{0}")]
    UsageError(String),

    /// Represents errors that occur during template lookup or resolution
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents a registry whose placeholder values reference each other
    #[error("Cyclic template reference detected while resolving '{template}'.")]
    CyclicTemplateError { template: String },

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Represents errors in reading or parsing the project manifest
    #[error("Manifest error: {0}.")]
    ManifestError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Usage errors go to stdout with exit code 2; everything else goes to
/// stderr with exit code 1. No partial writes are attempted after a
/// usage error, and nothing already written is rolled back.
pub fn default_error_handler(err: Error) -> ! {
    match err {
        Error::UsageError(_) => {
            println!("{}", err);
            std::process::exit(2);
        }
        _ => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
