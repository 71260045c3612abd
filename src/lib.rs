//! UI-triggered file acquisition and content dispatch.
//!
//! `filepick` binds a caller-identified trigger element to a
//! file-selection surface, asynchronously reads the file(s) the user
//! supplies (click-pick or drag-and-drop), runs a mode-specific transform
//! (text, JSON with optional key projection, container injection, script
//! hand-off, or raw binary), and settles exactly one outcome per
//! activation.
//!
//! The platform pieces the flow depends on are not reimplemented; each is
//! a [`platform`] trait the caller supplies: the trigger surface, the
//! asynchronous reader, the container tree html content is injected into,
//! and the audited script-execution channel. In-memory implementations
//! live in [`platform::memory`] for development and testing.
//!
//! # Module Organization
//!
//! - [`types`] - data model: [`Mode`], [`Options`], [`AcquisitionRequest`],
//!   [`RawFile`], [`FileResult`], [`Outcome`]
//! - [`platform`] - collaborator traits and in-memory implementations
//! - [`dispatch`] - the fixed extension table behind [`Mode::Auto`]
//! - [`flow`] - the [`Acquirer`] running the acquisition pipeline
//! - [`error`] - failure taxonomy and the user-facing message formatter
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use filepick::platform::memory::{MemoryReader, MemorySurface};
//! use filepick::platform::Activation;
//! use filepick::{Acquirer, Options, RawFile};
//!
//! # async fn example() -> filepick::Result<()> {
//! // The surface and reader stand in for the real UI platform.
//! let surface = MemorySurface::new()
//!     .with_element("import-button")
//!     .with_activation(Activation::picked(vec![RawFile::new("settings.json", 18)]));
//! let reader = MemoryReader::new().with_text("settings.json", r#"{"theme":"dark"}"#);
//!
//! let acquirer = Acquirer::new(Arc::new(surface), Arc::new(reader));
//! let outcome = acquirer
//!     .json("import-button", Options::new().with_filter(["theme"]))
//!     .await?;
//! assert_eq!(outcome.files()[0].extension, "json");
//! # Ok(())
//! # }
//! ```
//!
//! # Guarantees and Non-Goals
//!
//! One activation settles exactly once, batches preserve the order files
//! were supplied in regardless of read completion order, and the first
//! failing read rejects a whole batch. There is no cancellation, timeout,
//! persistence, or streaming; a read that never completes leaves its
//! activation pending.

pub mod dispatch;
pub mod error;
pub mod flow;
pub mod platform;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use flow::Acquirer;
pub use types::{AcquisitionRequest, FileContent, FileResult, Mode, Options, Outcome, RawFile};
