//! Request types: interpretation mode, per-acquisition options, and the
//! request that binds them to a trigger element.
//!
//! # Serialization
//!
//! All types serialize with serde so a request can be described in a
//! caller's configuration. `Mode` uses `snake_case` on the wire.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content-interpretation strategy selected per acquisition request.
///
/// `Auto` is not a transform of its own: it inspects each file's extension
/// and dispatches to one of the concrete modes through the
/// [`dispatch`](crate::dispatch) table.
///
/// # Examples
///
/// ```
/// use filepick::Mode;
///
/// assert_eq!(Mode::Json.to_string(), "json");
/// let mode: Mode = serde_json::from_str("\"binary\"").unwrap();
/// assert_eq!(mode, Mode::Binary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Decode as text, return it unchanged.
    Text,
    /// Decode as text and parse as JSON, optionally projecting to the
    /// keys named in [`Options::filter`].
    Json,
    /// Decode as text and append it to every container named in
    /// [`Options::target_container_ids`].
    Html,
    /// Decode as text and hand it to the script-execution channel.
    Script,
    /// Read raw bytes, return them unchanged.
    Binary,
    /// Dispatch per file by extension.
    Auto,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Html => write!(f, "html"),
            Self::Script => write!(f, "script"),
            Self::Binary => write!(f, "binary"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Per-acquisition configuration.
///
/// All fields default to "off"; unrecognized concerns stay out of the
/// flow. `filter` only affects `Json` mode, `target_container_ids` only
/// `Html` mode, and `log` is diagnostic only with no behavioral effect.
///
/// # Examples
///
/// ```
/// use filepick::Options;
///
/// let options = Options::new()
///     .with_multiple(true)
///     .with_filter(["config", "data"])
///     .with_log(true);
/// assert!(options.multiple);
/// assert_eq!(options.filter.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Allow more than one file per activation. When false, only the
    /// first platform-supplied file is processed.
    pub multiple: bool,
    /// Ordered key list restricting JSON output to the named top-level
    /// keys. Empty means no projection. Keys absent from the content are
    /// silently omitted.
    pub filter: Vec<String>,
    /// Emit a `tracing` event describing the settled outcome. Diagnostic
    /// only.
    pub log: bool,
    /// Containers that receive the content in `Html` mode.
    pub target_container_ids: Vec<String>,
}

impl Options {
    /// Creates options with every field off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow (or disallow) more than one file per activation.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Restrict JSON output to the named top-level keys.
    pub fn with_filter<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Emit a diagnostic `tracing` event when the outcome settles.
    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    /// Name the containers that receive content in `Html` mode.
    pub fn with_target_containers<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_container_ids = ids.into_iter().map(Into::into).collect();
        self
    }
}

/// One acquisition: which element triggers it and how content is
/// interpreted. Immutable for the lifetime of the activation.
///
/// # Examples
///
/// ```
/// use filepick::{AcquisitionRequest, Mode, Options};
///
/// let request = AcquisitionRequest::new("import-button", Mode::Json)
///     .with_options(Options::new().with_filter(["settings"]));
/// assert_eq!(request.trigger_element_id, "import-button");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquisitionRequest {
    /// Id of the UI element that initiates acquisition.
    pub trigger_element_id: String,
    /// How content is interpreted.
    pub mode: Mode,
    /// Per-acquisition configuration.
    #[serde(default)]
    pub options: Options,
}

impl AcquisitionRequest {
    /// Creates a request with default options.
    pub fn new(trigger_element_id: impl Into<String>, mode: Mode) -> Self {
        Self {
            trigger_element_id: trigger_element_id.into(),
            mode,
            options: Options::default(),
        }
    }

    /// Replaces the request options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_serde_round_trip() {
        for mode in [
            Mode::Text,
            Mode::Json,
            Mode::Html,
            Mode::Script,
            Mode::Binary,
            Mode::Auto,
        ] {
            let json = serde_json::to_string(&mode).unwrap();
            let back: Mode = serde_json::from_str(&json).unwrap();
            assert_eq!(back, mode);
            assert_eq!(json.trim_matches('"'), mode.to_string());
        }
    }

    #[test]
    fn options_builder() {
        let options = Options::new()
            .with_multiple(true)
            .with_filter(["a", "b"])
            .with_target_containers(["preview"]);
        assert!(options.multiple);
        assert_eq!(options.filter, vec!["a", "b"]);
        assert_eq!(options.target_container_ids, vec!["preview"]);
        assert!(!options.log);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: Options = serde_json::from_str("{\"multiple\": true}").unwrap();
        assert!(options.multiple);
        assert!(options.filter.is_empty());
        assert!(options.target_container_ids.is_empty());
    }

    #[test]
    fn request_deserialize_without_options() {
        let request: AcquisitionRequest = serde_json::from_str(
            "{\"trigger_element_id\": \"open\", \"mode\": \"auto\"}",
        )
        .unwrap();
        assert_eq!(request.mode, Mode::Auto);
        assert_eq!(request.options, Options::default());
    }
}
