//! The single settlement of one activation.

use crate::types::file::FileResult;

/// The value an activation settles with on success.
///
/// A request without `multiple` settles with `Single`; a `multiple`
/// request settles with `Batch`, preserving the order files were
/// supplied by the platform (insertion order, not sorted).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Exactly one resolved file.
    Single(FileResult),
    /// All resolved files of one activation, in supplied order.
    Batch(Vec<FileResult>),
}

impl Outcome {
    /// Number of resolved files in this outcome.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Batch(results) => results.len(),
        }
    }

    /// Whether the outcome holds no files. Only possible for an empty
    /// batch, which the flow itself never produces.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The resolved files as a slice, regardless of variant.
    pub fn files(&self) -> &[FileResult] {
        match self {
            Self::Single(result) => std::slice::from_ref(result),
            Self::Batch(results) => results,
        }
    }

    /// Consumes the outcome into its files.
    pub fn into_files(self) -> Vec<FileResult> {
        match self {
            Self::Single(result) => vec![result],
            Self::Batch(results) => results,
        }
    }

    /// Consumes a `Single` outcome into its one result.
    ///
    /// Returns `None` for a batch, even a batch of one.
    pub fn into_single(self) -> Option<FileResult> {
        match self {
            Self::Single(result) => Some(result),
            Self::Batch(_) => None,
        }
    }
}
