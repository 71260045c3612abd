//! Platform collaborator seams for the acquisition flow.
//!
//! The flow does not reimplement the platform pieces it depends on; each
//! is a trait the caller supplies an implementation of:
//!
//! - [`TriggerSurface`] - binds a trigger element to file selection and
//!   yields the files of one user activation
//! - [`ContentReader`] - asynchronous text/byte reads of a [`RawFile`]
//! - [`ContainerSink`] - DOM-like tree the html transform injects into
//! - [`ScriptChannel`] - the audited script-execution side channel
//!
//! The [`memory`] submodule provides in-memory implementations for
//! development and testing. Script execution is security-sensitive and
//! is an explicit opt-in: the flow's default channel is
//! [`DeniedScriptChannel`], which refuses every execution.

pub mod memory;

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::{Error, Result};
use crate::types::RawFile;

/// How the user supplied the files of one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationGesture {
    /// The user clicked the trigger and chose files in the picker dialog.
    Pick,
    /// The user dropped dragged files onto the trigger.
    Drop,
}

/// One user-triggered attempt to supply files through a bound trigger.
///
/// # Examples
///
/// ```
/// use filepick::platform::Activation;
/// use filepick::RawFile;
///
/// let activation = Activation::picked(vec![RawFile::new("notes.txt", 5)]);
/// assert_eq!(activation.files.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Activation {
    /// The gesture that produced the files.
    pub gesture: ActivationGesture,
    /// Files in the order the platform supplied them.
    pub files: Vec<RawFile>,
}

impl Activation {
    /// An activation from the picker dialog.
    pub fn picked(files: Vec<RawFile>) -> Self {
        Self {
            gesture: ActivationGesture::Pick,
            files,
        }
    }

    /// An activation from a drag-and-drop gesture.
    pub fn dropped(files: Vec<RawFile>) -> Self {
        Self {
            gesture: ActivationGesture::Drop,
            files,
        }
    }
}

/// The UI surface that binds a trigger element to file selection.
#[async_trait]
pub trait TriggerSurface: Send + Sync {
    /// Whether `element_id` resolves to an existing UI element.
    fn resolve(&self, element_id: &str) -> bool;

    /// Waits for one activation of the trigger: a click-pick or a drop of
    /// dragged files.
    ///
    /// The surface creates a transient, invisible file-selection control
    /// scoped to this call and discards it when the call returns, whether
    /// or not reading later succeeds. `accept_multiple` is a hint to the
    /// picker dialog; a drop gesture may supply several files regardless.
    async fn next_activation(
        &self,
        element_id: &str,
        accept_multiple: bool,
    ) -> Result<Activation>;
}

/// Asynchronous read primitive over a platform file handle.
///
/// Read failures surface as [`Error::ReadFailure`]; platform sandbox
/// refusals as [`Error::SecurityRestriction`].
#[async_trait]
pub trait ContentReader: Send + Sync {
    /// Reads and decodes the file as text.
    async fn read_text(&self, file: &RawFile) -> Result<String>;

    /// Reads the file as raw bytes.
    async fn read_bytes(&self, file: &RawFile) -> Result<Bytes>;
}

/// DOM-like tree the html transform injects into.
///
/// Both operations run on the single UI task; no locking is required of
/// implementations beyond their own interior mutability.
pub trait ContainerSink: Send + Sync {
    /// Whether `element_id` resolves to an existing container.
    fn resolve(&self, element_id: &str) -> bool;

    /// Appends `markup` as child content of the container.
    fn append(&self, element_id: &str, markup: &str) -> Result<()>;
}

/// A [`ContainerSink`] over an empty tree: nothing resolves.
///
/// The flow's default sink, so html-mode injection fails cleanly until a
/// real sink is supplied via
/// [`Acquirer::with_containers`](crate::Acquirer::with_containers).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullContainerSink;

impl ContainerSink for NullContainerSink {
    fn resolve(&self, _element_id: &str) -> bool {
        false
    }

    fn append(&self, element_id: &str, _markup: &str) -> Result<()> {
        Err(Error::ParseFailure {
            file: String::new(),
            message: format!("target container '{element_id}' not found"),
        })
    }
}

/// Scripting dialect of content handed to the execution channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptDialect {
    /// Script content executed by the host environment.
    JavaScript,
    /// Script content handed to an embedded interpreter.
    Python,
}

impl ScriptDialect {
    /// The dialect implied by a file extension: `py` selects Python,
    /// anything else JavaScript.
    pub fn for_extension(extension: &str) -> Self {
        if extension == "py" {
            Self::Python
        } else {
            Self::JavaScript
        }
    }
}

impl fmt::Display for ScriptDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JavaScript => write!(f, "javascript"),
            Self::Python => write!(f, "python"),
        }
    }
}

/// The audited script-execution side channel.
///
/// Implementations run arbitrary code and must be supplied explicitly via
/// [`Acquirer::with_scripts`](crate::Acquirer::with_scripts); the flow
/// never executes scripts through anything else. Audit implementations
/// accordingly.
#[async_trait]
pub trait ScriptChannel: Send + Sync {
    /// Executes `source` in the given dialect.
    async fn execute(&self, dialect: ScriptDialect, source: &str) -> Result<()>;
}

/// A [`ScriptChannel`] that refuses every execution with
/// [`Error::SecurityRestriction`].
///
/// The flow's default channel, making script execution an explicit
/// opt-in rather than a side effect of the generic acquisition path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedScriptChannel;

#[async_trait]
impl ScriptChannel for DeniedScriptChannel {
    async fn execute(&self, dialect: ScriptDialect, _source: &str) -> Result<()> {
        Err(Error::SecurityRestriction {
            message: format!("script execution is not enabled for {dialect} content"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn dialect_from_extension() {
        assert_eq!(ScriptDialect::for_extension("py"), ScriptDialect::Python);
        assert_eq!(
            ScriptDialect::for_extension("js"),
            ScriptDialect::JavaScript
        );
        assert_eq!(
            ScriptDialect::for_extension(""),
            ScriptDialect::JavaScript
        );
    }

    #[tokio::test]
    async fn denied_channel_rejects_everything() {
        let channel = DeniedScriptChannel;
        let err = channel
            .execute(ScriptDialect::Python, "print('hi')")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SecurityRestriction);
        assert!(err.to_string().contains("python"));
    }

    #[test]
    fn null_sink_resolves_nothing() {
        let sink = NullContainerSink;
        assert!(!sink.resolve("preview"));
        assert!(sink.append("preview", "<p>hi</p>").is_err());
    }
}
