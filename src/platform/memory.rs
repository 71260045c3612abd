//! In-memory platform collaborators for development and testing.
//!
//! [`MemorySurface`] plays back scripted activations against a declared
//! set of UI elements, [`MemoryReader`] serves file content from a map
//! with optional per-file latency and failure injection, and
//! [`MemoryContainerSink`] / [`RecordingScriptChannel`] capture the side
//! effects of the html and script transforms so tests can assert on them.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use filepick::platform::memory::{MemoryReader, MemorySurface};
//! use filepick::platform::Activation;
//! use filepick::{Acquirer, Options, RawFile};
//!
//! # async fn example() -> filepick::Result<()> {
//! let surface = MemorySurface::new()
//!     .with_element("open-button")
//!     .with_activation(Activation::picked(vec![RawFile::new("notes.txt", 5)]));
//! let reader = MemoryReader::new().with_text("notes.txt", "hello");
//!
//! let acquirer = Acquirer::new(Arc::new(surface), Arc::new(reader));
//! let outcome = acquirer.text("open-button", Options::new()).await?;
//! assert_eq!(outcome.files()[0].content.as_text(), Some("hello"));
//! # Ok(())
//! # }
//! ```

use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::platform::{
    Activation, ContainerSink, ContentReader, ScriptChannel, ScriptDialect, TriggerSurface,
};
use crate::types::RawFile;

/// In-memory [`TriggerSurface`] playing back scripted activations.
///
/// Elements are declared up front with [`with_element`](Self::with_element);
/// activations queue in FIFO order and one is consumed per
/// `next_activation` call. An empty queue behaves like a dialog the user
/// dismissed without choosing anything.
///
/// The surface also tracks the transient picker-control lifecycle so
/// tests can assert that every control created for an activation was
/// discarded again.
#[derive(Debug, Default)]
pub struct MemorySurface {
    elements: HashSet<String>,
    activations: Mutex<VecDeque<Activation>>,
    controls_created: Mutex<usize>,
    controls_active: Mutex<usize>,
}

impl MemorySurface {
    /// Creates a surface with no elements and no queued activations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an existing UI element.
    pub fn with_element(mut self, element_id: impl Into<String>) -> Self {
        self.elements.insert(element_id.into());
        self
    }

    /// Queues an activation for playback.
    pub fn with_activation(self, activation: Activation) -> Self {
        self.activations.lock().push_back(activation);
        self
    }

    /// Queues an activation after construction.
    pub fn push_activation(&self, activation: Activation) {
        self.activations.lock().push_back(activation);
    }

    /// How many transient picker controls have been created.
    pub fn controls_created(&self) -> usize {
        *self.controls_created.lock()
    }

    /// How many transient picker controls are currently attached.
    /// Zero whenever no activation is in flight.
    pub fn controls_active(&self) -> usize {
        *self.controls_active.lock()
    }
}

#[async_trait]
impl TriggerSurface for MemorySurface {
    fn resolve(&self, element_id: &str) -> bool {
        self.elements.contains(element_id)
    }

    async fn next_activation(
        &self,
        element_id: &str,
        _accept_multiple: bool,
    ) -> Result<Activation> {
        if !self.elements.contains(element_id) {
            return Err(Error::ElementNotFound {
                element_id: element_id.to_string(),
            });
        }
        *self.controls_created.lock() += 1;
        *self.controls_active.lock() += 1;
        let activation = self
            .activations
            .lock()
            .pop_front()
            .unwrap_or_else(|| Activation::picked(Vec::new()));
        // control is scoped to the activation, attached or not
        *self.controls_active.lock() -= 1;
        Ok(activation)
    }
}

/// What a [`MemoryReader`] serves for one file name.
#[derive(Debug, Clone)]
enum Stored {
    Bytes(Bytes),
    ReadError(String),
    Denied(String),
}

/// In-memory [`ContentReader`] keyed by file name.
///
/// Content is registered as text or bytes; reads of unregistered names
/// fail with [`Error::ReadFailure`]. Per-file latency lets tests reorder
/// read completions; failure and denial injection exercise the
/// [`ReadFailure`](Error::ReadFailure) and
/// [`SecurityRestriction`](Error::SecurityRestriction) paths.
#[derive(Debug, Default)]
pub struct MemoryReader {
    files: HashMap<String, Stored>,
    latencies: HashMap<String, Duration>,
}

impl MemoryReader {
    /// Creates a reader with no registered files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers text content for a file name.
    pub fn with_text(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.files
            .insert(name.into(), Stored::Bytes(Bytes::from(text.into())));
        self
    }

    /// Registers byte content for a file name.
    pub fn with_bytes(mut self, name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        self.files.insert(name.into(), Stored::Bytes(bytes.into()));
        self
    }

    /// Makes every read of the file fail with [`Error::ReadFailure`].
    pub fn with_read_error(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.files
            .insert(name.into(), Stored::ReadError(message.into()));
        self
    }

    /// Makes every read of the file fail with
    /// [`Error::SecurityRestriction`], as a sandboxing platform would.
    pub fn with_denied(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.files.insert(name.into(), Stored::Denied(message.into()));
        self
    }

    /// Delays reads of the file by `latency`.
    pub fn with_latency(mut self, name: impl Into<String>, latency: Duration) -> Self {
        self.latencies.insert(name.into(), latency);
        self
    }

    async fn fetch(&self, file: &RawFile) -> Result<Bytes> {
        if let Some(latency) = self.latencies.get(file.name()) {
            tokio::time::sleep(*latency).await;
        }
        match self.files.get(file.name()) {
            Some(Stored::Bytes(bytes)) => Ok(bytes.clone()),
            Some(Stored::ReadError(message)) => Err(Error::ReadFailure {
                file: file.name().to_string(),
                message: message.clone(),
            }),
            Some(Stored::Denied(message)) => Err(Error::SecurityRestriction {
                message: message.clone(),
            }),
            None => Err(Error::ReadFailure {
                file: file.name().to_string(),
                message: "file handle is no longer readable".to_string(),
            }),
        }
    }
}

#[async_trait]
impl ContentReader for MemoryReader {
    async fn read_text(&self, file: &RawFile) -> Result<String> {
        let bytes = self.fetch(file).await?;
        String::from_utf8(bytes.to_vec()).map_err(|_| Error::ReadFailure {
            file: file.name().to_string(),
            message: "content is not valid UTF-8".to_string(),
        })
    }

    async fn read_bytes(&self, file: &RawFile) -> Result<Bytes> {
        self.fetch(file).await
    }
}

/// In-memory [`ContainerSink`] accumulating appended markup per container.
#[derive(Debug, Default)]
pub struct MemoryContainerSink {
    containers: Mutex<HashMap<String, String>>,
}

impl MemoryContainerSink {
    /// Creates a sink with no containers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an empty container.
    pub fn with_container(self, element_id: impl Into<String>) -> Self {
        self.containers.lock().insert(element_id.into(), String::new());
        self
    }

    /// The accumulated content of a container, if it exists.
    pub fn content_of(&self, element_id: &str) -> Option<String> {
        self.containers.lock().get(element_id).cloned()
    }
}

impl ContainerSink for MemoryContainerSink {
    fn resolve(&self, element_id: &str) -> bool {
        self.containers.lock().contains_key(element_id)
    }

    fn append(&self, element_id: &str, markup: &str) -> Result<()> {
        let mut containers = self.containers.lock();
        match containers.get_mut(element_id) {
            Some(content) => {
                content.push_str(markup);
                Ok(())
            }
            None => Err(Error::ParseFailure {
                file: String::new(),
                message: format!("target container '{element_id}' not found"),
            }),
        }
    }
}

/// A [`ScriptChannel`] that records executions instead of running them.
#[derive(Debug, Default)]
pub struct RecordingScriptChannel {
    executed: Mutex<Vec<(ScriptDialect, String)>>,
}

impl RecordingScriptChannel {
    /// Creates a channel with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything executed so far, in execution order.
    pub fn executed(&self) -> Vec<(ScriptDialect, String)> {
        self.executed.lock().clone()
    }
}

#[async_trait]
impl ScriptChannel for RecordingScriptChannel {
    async fn execute(&self, dialect: ScriptDialect, source: &str) -> Result<()> {
        self.executed.lock().push((dialect, source.to_string()));
        Ok(())
    }
}
