//! Per-mode read-and-transform steps.
//!
//! Every step returns `Result<FileContent>` rather than throwing across
//! the asynchronous boundary; the flow's aggregation step propagates the
//! first failure uniformly.

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::platform::{ContainerSink, ContentReader, ScriptChannel, ScriptDialect};
use crate::types::{FileContent, RawFile};

/// Text mode: decode and return unchanged.
pub(crate) async fn text(reader: &dyn ContentReader, file: &RawFile) -> Result<FileContent> {
    Ok(FileContent::Text(reader.read_text(file).await?))
}

/// Json mode: parse, then project to `filter` keys when the list is
/// non-empty and the content is a JSON object. Keys absent from the
/// content are silently omitted.
pub(crate) async fn json(
    reader: &dyn ContentReader,
    file: &RawFile,
    filter: &[String],
) -> Result<FileContent> {
    let raw = reader.read_text(file).await?;
    let mut value: Value = serde_json::from_str(&raw).map_err(|err| Error::ParseFailure {
        file: file.name().to_string(),
        message: err.to_string(),
    })?;
    if !filter.is_empty() {
        if let Value::Object(map) = &mut value {
            map.retain(|key, _| filter.iter().any(|wanted| wanted == key));
        }
    }
    Ok(FileContent::Json(value))
}

/// Html mode: append the content to every target container.
///
/// All targets are resolved before any injection, so a missing one fails
/// the file with no partial writes.
pub(crate) async fn html(
    reader: &dyn ContentReader,
    sink: &dyn ContainerSink,
    file: &RawFile,
    targets: &[String],
) -> Result<FileContent> {
    let markup = reader.read_text(file).await?;
    for target in targets {
        if !sink.resolve(target) {
            return Err(Error::ParseFailure {
                file: file.name().to_string(),
                message: format!("target container '{target}' not found"),
            });
        }
    }
    for target in targets {
        sink.append(target, &markup).map_err(|err| match err {
            Error::ParseFailure { message, .. } => Error::ParseFailure {
                file: file.name().to_string(),
                message,
            },
            other => other,
        })?;
        debug!(container = %target, file = %file.name(), "content injected");
    }
    Ok(FileContent::Text(markup))
}

/// Script mode: hand the source to the execution channel; the `py`
/// extension selects the Python dialect, anything else JavaScript.
/// The content of the result is the source text.
pub(crate) async fn script(
    reader: &dyn ContentReader,
    channel: &dyn ScriptChannel,
    file: &RawFile,
) -> Result<FileContent> {
    let source = reader.read_text(file).await?;
    let dialect = ScriptDialect::for_extension(&file.extension());
    channel.execute(dialect, &source).await?;
    debug!(dialect = %dialect, file = %file.name(), "script handed to execution channel");
    Ok(FileContent::Text(source))
}

/// Binary mode: read raw bytes, return them unchanged.
pub(crate) async fn binary(reader: &dyn ContentReader, file: &RawFile) -> Result<FileContent> {
    Ok(FileContent::Binary(reader.read_bytes(file).await?))
}
