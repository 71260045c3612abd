//! Platform file handles and resolved content.

use bytes::Bytes;
use serde_json::Value;

/// An opaque file handle supplied by the platform, prior to reading.
///
/// Carries the metadata the platform knows up front; the bytes live
/// behind the [`ContentReader`](crate::platform::ContentReader) seam and
/// are owned transiently by the read step.
///
/// # Examples
///
/// ```
/// use filepick::RawFile;
///
/// let file = RawFile::new("Report.PDF", 4096).with_mime_type("application/pdf");
/// assert_eq!(file.extension(), "pdf");
/// assert_eq!(file.size(), 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFile {
    name: String,
    size: u64,
    mime_type: Option<String>,
}

impl RawFile {
    /// Creates a handle with the given name and size in bytes.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: None,
        }
    }

    /// Sets the platform-reported MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// The file name as supplied by the platform.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes as reported by the platform.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The platform-reported MIME type, if any.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// The lower-cased text after the last `.` in the name; empty when
    /// the name has no dot.
    pub fn extension(&self) -> String {
        match self.name.rsplit_once('.') {
            Some((_, ext)) => ext.to_ascii_lowercase(),
            None => String::new(),
        }
    }
}

/// Resolved file content, shaped by the mode that produced it.
///
/// `Text` carries text, html, and script content (script content is the
/// source that was handed to the execution channel); `Json` the parsed
/// and optionally projected structure; `Binary` the opaque byte buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    /// Decoded text, returned unchanged.
    Text(String),
    /// Parsed JSON, after any key projection.
    Json(Value),
    /// Raw bytes.
    Binary(Bytes),
}

impl FileContent {
    /// The content as text, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The content as parsed JSON, if this is a `Json` value.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// The content as raw bytes, if this is a `Binary` value.
    pub fn as_binary(&self) -> Option<&Bytes> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// The value one file resolves to: metadata plus transformed content.
#[derive(Debug, Clone, PartialEq)]
pub struct FileResult {
    /// The file name as supplied by the platform.
    pub name: String,
    /// Lower-cased extension derived from the name.
    pub extension: String,
    /// The platform-reported MIME type, if any.
    pub mime_type: Option<String>,
    /// Size in bytes as reported by the platform.
    pub size: u64,
    /// The transformed content.
    pub content: FileContent,
}

impl FileResult {
    pub(crate) fn new(file: &RawFile, content: FileContent) -> Self {
        Self {
            name: file.name().to_string(),
            extension: file.extension(),
            mime_type: file.mime_type().map(str::to_string),
            size: file.size(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lower_cased_tail() {
        assert_eq!(RawFile::new("notes.TXT", 0).extension(), "txt");
        assert_eq!(RawFile::new("archive.tar.gz", 0).extension(), "gz");
        assert_eq!(RawFile::new("Makefile", 0).extension(), "");
        assert_eq!(RawFile::new("trailing.", 0).extension(), "");
        assert_eq!(RawFile::new(".gitignore", 0).extension(), "gitignore");
    }

    #[test]
    fn content_accessors() {
        let text = FileContent::Text("hello".to_string());
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_json().is_none());
        assert!(text.as_binary().is_none());

        let binary = FileContent::Binary(Bytes::from_static(b"\x89PNG"));
        assert_eq!(binary.as_binary().map(|b| b.len()), Some(4));
    }

    #[test]
    fn result_copies_handle_metadata() {
        let file = RawFile::new("photo.png", 12).with_mime_type("image/png");
        let result = FileResult::new(&file, FileContent::Binary(Bytes::new()));
        assert_eq!(result.name, "photo.png");
        assert_eq!(result.extension, "png");
        assert_eq!(result.mime_type.as_deref(), Some("image/png"));
        assert_eq!(result.size, 12);
    }
}
