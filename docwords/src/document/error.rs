//! Error types for loading a document package

use thiserror::Error;

/// Errors that can occur while opening or parsing a `.docx` package
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a readable ZIP archive
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A required part is missing from the package
    #[error("Package is missing required part '{0}'")]
    MissingPart(&'static str),

    /// A package part is not well-formed XML
    #[error("Malformed XML in '{part}': {message}")]
    Xml {
        /// Name of the part being parsed
        part: &'static str,
        /// Parser message
        message: String,
    },
}
