//! Error types for the acquisition flow.
//!
//! Provides [`Error`], the failure taxonomy for one activation, with
//! [`ErrorKind`] for flat classification and the user-facing message
//! formatter [`Error::user_message`].

use thiserror::Error;

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can settle an acquisition.
///
/// Each variant carries the context needed to name the offending file in
/// user-facing output. None of these are retried automatically; acquisition
/// is a single user-driven attempt, and retry means the user activates the
/// trigger again.
///
/// # Examples
///
/// ```
/// use filepick::{Error, ErrorKind};
///
/// let err = Error::ParseFailure {
///     file: "data.json".to_string(),
///     message: "expected value at line 1 column 2".to_string(),
/// };
/// assert_eq!(err.kind(), ErrorKind::ParseFailure);
/// assert!(err.user_message().contains("data.json"));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The trigger element id did not resolve at bind time.
    #[error("trigger element '{element_id}' not found")]
    ElementNotFound {
        /// The element id that did not resolve.
        element_id: String,
    },

    /// The user completed the picker dialog without choosing any file.
    #[error("no file selected")]
    NoFileSelected,

    /// Auto-mode dispatch found no mapping for the file's extension.
    #[error("unsupported file type '{extension}' for '{file}'")]
    UnsupportedFileType {
        /// The offending file name.
        file: String,
        /// The unmapped, lower-cased extension. Empty when the name has none.
        extension: String,
    },

    /// Content could not be interpreted: malformed JSON, or an html-mode
    /// target container that did not resolve.
    #[error("failed to process '{file}': {message}")]
    ParseFailure {
        /// The offending file name.
        file: String,
        /// What went wrong.
        message: String,
    },

    /// The platform read primitive failed, e.g. a corrupted or
    /// inaccessible file.
    #[error("failed to read '{file}': {message}")]
    ReadFailure {
        /// The offending file name.
        file: String,
        /// The platform's description of the failure.
        message: String,
    },

    /// The platform blocked the operation, e.g. local-file sandboxing or
    /// a denied script channel.
    #[error("operation blocked by security policy: {message}")]
    SecurityRestriction {
        /// Why the operation was blocked.
        message: String,
    },
}

/// Flat classification of [`Error`] variants.
///
/// Useful for matching on the failure kind without destructuring the
/// context fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::ElementNotFound`].
    ElementNotFound,
    /// See [`Error::NoFileSelected`].
    NoFileSelected,
    /// See [`Error::UnsupportedFileType`].
    UnsupportedFileType,
    /// See [`Error::ParseFailure`].
    ParseFailure,
    /// See [`Error::ReadFailure`].
    ReadFailure,
    /// See [`Error::SecurityRestriction`].
    SecurityRestriction,
}

impl Error {
    /// Returns the flat [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ElementNotFound { .. } => ErrorKind::ElementNotFound,
            Self::NoFileSelected => ErrorKind::NoFileSelected,
            Self::UnsupportedFileType { .. } => ErrorKind::UnsupportedFileType,
            Self::ParseFailure { .. } => ErrorKind::ParseFailure,
            Self::ReadFailure { .. } => ErrorKind::ReadFailure,
            Self::SecurityRestriction { .. } => ErrorKind::SecurityRestriction,
        }
    }

    /// Formats this failure as a single human-readable message, one rule
    /// per kind, naming the offending file where one exists.
    ///
    /// This is the string surfaced to the user when an activation settles
    /// with a failure; [`std::fmt::Display`] remains the terser
    /// developer-facing form.
    ///
    /// # Examples
    ///
    /// ```
    /// use filepick::Error;
    ///
    /// let err = Error::ReadFailure {
    ///     file: "photo.png".to_string(),
    ///     message: "file is not readable".to_string(),
    /// };
    /// assert_eq!(
    ///     err.user_message(),
    ///     "Could not read 'photo.png': file is not readable."
    /// );
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            Self::ElementNotFound { element_id } => {
                format!("The trigger element '{element_id}' does not exist.")
            }
            Self::NoFileSelected => "No file was selected.".to_string(),
            Self::UnsupportedFileType { file, extension } if extension.is_empty() => {
                format!("'{file}' has no extension, so no handler could be chosen.")
            }
            Self::UnsupportedFileType { file, extension } => {
                format!("'{file}': files of type '.{extension}' are not supported.")
            }
            Self::ParseFailure { file, message } => {
                format!("Error while processing '{file}': {message}.")
            }
            Self::ReadFailure { file, message } => {
                format!("Could not read '{file}': {message}.")
            }
            Self::SecurityRestriction { message } => {
                format!("The platform blocked this operation: {message}.")
            }
        }
    }
}
