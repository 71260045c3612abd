//! The acquisition flow: trigger binding, concurrent reads, and
//! mode-specific transforms settling one outcome per activation.
//!
//! [`Acquirer`] is the caller-facing entry point. It is stateless beyond
//! holding its collaborators; every operation takes explicit parameters
//! and returns a future with exactly one settlement.

mod transform;

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::dispatch;
use crate::error::{Error, Result};
use crate::platform::{
    ContainerSink, ContentReader, DeniedScriptChannel, NullContainerSink, ScriptChannel,
    TriggerSurface,
};
use crate::types::{AcquisitionRequest, FileResult, Mode, Options, Outcome, RawFile};

/// The file-acquisition-and-dispatch flow over a set of platform
/// collaborators.
///
/// Construction requires the two collaborators every mode needs: the
/// [`TriggerSurface`] supplying activations and the [`ContentReader`]
/// supplying bytes. The html container sink and the script channel are
/// optional opt-ins; their defaults resolve nothing and deny execution.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use filepick::platform::memory::{MemoryReader, MemorySurface};
/// use filepick::platform::Activation;
/// use filepick::{Acquirer, Options, RawFile};
///
/// # async fn example() -> filepick::Result<()> {
/// let surface = MemorySurface::new()
///     .with_element("open-button")
///     .with_activation(Activation::picked(vec![RawFile::new("notes.txt", 5)]));
/// let reader = MemoryReader::new().with_text("notes.txt", "hello");
///
/// let acquirer = Acquirer::new(Arc::new(surface), Arc::new(reader));
/// let outcome = acquirer.text("open-button", Options::new()).await?;
/// assert_eq!(outcome.files()[0].name, "notes.txt");
/// # Ok(())
/// # }
/// ```
pub struct Acquirer {
    surface: Arc<dyn TriggerSurface>,
    reader: Arc<dyn ContentReader>,
    containers: Arc<dyn ContainerSink>,
    scripts: Arc<dyn ScriptChannel>,
}

impl Acquirer {
    /// Creates an acquirer over a trigger surface and a content reader.
    ///
    /// Html injection and script execution stay disabled until their
    /// collaborators are supplied via [`with_containers`](Self::with_containers)
    /// and [`with_scripts`](Self::with_scripts).
    pub fn new(surface: Arc<dyn TriggerSurface>, reader: Arc<dyn ContentReader>) -> Self {
        Self {
            surface,
            reader,
            containers: Arc::new(NullContainerSink),
            scripts: Arc::new(DeniedScriptChannel),
        }
    }

    /// Supplies the container sink html mode injects into.
    pub fn with_containers(mut self, containers: Arc<dyn ContainerSink>) -> Self {
        self.containers = containers;
        self
    }

    /// Supplies the audited script-execution channel.
    pub fn with_scripts(mut self, scripts: Arc<dyn ScriptChannel>) -> Self {
        self.scripts = scripts;
        self
    }

    /// Acquires text content through the trigger element.
    pub async fn text(&self, trigger_element_id: &str, options: Options) -> Result<Outcome> {
        self.acquire(AcquisitionRequest::new(trigger_element_id, Mode::Text).with_options(options))
            .await
    }

    /// Acquires parsed JSON through the trigger element, projected to
    /// [`Options::filter`] when the list is non-empty.
    pub async fn json(&self, trigger_element_id: &str, options: Options) -> Result<Outcome> {
        self.acquire(AcquisitionRequest::new(trigger_element_id, Mode::Json).with_options(options))
            .await
    }

    /// Acquires markup through the trigger element and appends it to
    /// every container in [`Options::target_container_ids`].
    pub async fn html(&self, trigger_element_id: &str, options: Options) -> Result<Outcome> {
        self.acquire(AcquisitionRequest::new(trigger_element_id, Mode::Html).with_options(options))
            .await
    }

    /// Acquires script source through the trigger element and hands it to
    /// the script channel.
    pub async fn script(&self, trigger_element_id: &str, options: Options) -> Result<Outcome> {
        self.acquire(
            AcquisitionRequest::new(trigger_element_id, Mode::Script).with_options(options),
        )
        .await
    }

    /// Acquires raw bytes through the trigger element.
    pub async fn binary(&self, trigger_element_id: &str, options: Options) -> Result<Outcome> {
        self.acquire(
            AcquisitionRequest::new(trigger_element_id, Mode::Binary).with_options(options),
        )
        .await
    }

    /// Acquires content through the trigger element, dispatching each
    /// file by its extension.
    pub async fn auto(&self, trigger_element_id: &str, options: Options) -> Result<Outcome> {
        self.acquire(AcquisitionRequest::new(trigger_element_id, Mode::Auto).with_options(options))
            .await
    }

    /// Runs one acquisition: resolve the trigger, await one activation,
    /// read and transform the supplied files, settle once.
    ///
    /// When `multiple` is set, all reads of the activation proceed
    /// concurrently and the batch settles in platform-supplied order,
    /// with the first failure rejecting the whole batch. When it is not,
    /// only the first supplied file is processed.
    pub async fn acquire(&self, request: AcquisitionRequest) -> Result<Outcome> {
        let AcquisitionRequest {
            trigger_element_id,
            mode,
            options,
        } = request;

        if !self.surface.resolve(&trigger_element_id) {
            return Err(Error::ElementNotFound {
                element_id: trigger_element_id,
            });
        }

        let activation = self
            .surface
            .next_activation(&trigger_element_id, options.multiple)
            .await?;
        debug!(
            trigger = %trigger_element_id,
            gesture = ?activation.gesture,
            files = activation.files.len(),
            "activation received"
        );

        let files = activation.files;
        let outcome = match files.first() {
            None => return Err(Error::NoFileSelected),
            Some(first) if !options.multiple => {
                if files.len() > 1 {
                    debug!(
                        ignored = files.len() - 1,
                        "multiple files supplied to a single-file request, keeping the first"
                    );
                }
                Outcome::Single(self.resolve_file(mode, first, &options).await?)
            }
            Some(_) => {
                let reads = files
                    .iter()
                    .map(|file| self.resolve_file(mode, file, &options));
                Outcome::Batch(try_join_all(reads).await?)
            }
        };

        if options.log {
            let names: Vec<&str> = outcome.files().iter().map(|r| r.name.as_str()).collect();
            info!(mode = %mode, files = ?names, "acquisition settled");
        }
        Ok(outcome)
    }

    async fn resolve_file(
        &self,
        mode: Mode,
        file: &RawFile,
        options: &Options,
    ) -> Result<FileResult> {
        let mode = if mode == Mode::Auto {
            let extension = file.extension();
            match dispatch::mode_for_extension(&extension) {
                Some(concrete) => concrete,
                None => {
                    return Err(Error::UnsupportedFileType {
                        file: file.name().to_string(),
                        extension,
                    })
                }
            }
        } else {
            mode
        };

        let content = match mode {
            Mode::Text => transform::text(self.reader.as_ref(), file).await?,
            Mode::Json => transform::json(self.reader.as_ref(), file, &options.filter).await?,
            Mode::Html => {
                transform::html(
                    self.reader.as_ref(),
                    self.containers.as_ref(),
                    file,
                    &options.target_container_ids,
                )
                .await?
            }
            Mode::Script => {
                transform::script(self.reader.as_ref(), self.scripts.as_ref(), file).await?
            }
            Mode::Binary => transform::binary(self.reader.as_ref(), file).await?,
            // the dispatch table never yields Auto
            Mode::Auto => {
                return Err(Error::UnsupportedFileType {
                    file: file.name().to_string(),
                    extension: file.extension(),
                })
            }
        };
        Ok(FileResult::new(file, content))
    }
}

impl std::fmt::Debug for Acquirer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Acquirer").finish_non_exhaustive()
    }
}
