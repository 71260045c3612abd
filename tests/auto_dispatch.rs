//! Auto-mode dispatch: extension-based routing through the full flow.

use std::sync::Arc;

use serde_json::json;

use filepick::dispatch::BINARY_EXTENSIONS;
use filepick::platform::memory::{
    MemoryContainerSink, MemoryReader, MemorySurface, RecordingScriptChannel,
};
use filepick::platform::{Activation, ScriptDialect};
use filepick::{Acquirer, ErrorKind, FileContent, Options, RawFile};

/// Acquirer with one trigger, one queued single-file activation, and all
/// collaborators attached so every dispatch target is reachable.
fn rig_for(file: RawFile, reader: MemoryReader) -> (Acquirer, Arc<RecordingScriptChannel>) {
    let surface = MemorySurface::new()
        .with_element("open-button")
        .with_activation(Activation::picked(vec![file]));
    let sink = Arc::new(MemoryContainerSink::new());
    let channel = Arc::new(RecordingScriptChannel::new());
    let acquirer = Acquirer::new(Arc::new(surface), Arc::new(reader))
        .with_containers(sink)
        .with_scripts(channel.clone());
    (acquirer, channel)
}

#[tokio::test]
async fn json_extension_dispatches_to_json() {
    let (acquirer, _) = rig_for(
        RawFile::new("config.json", 7),
        MemoryReader::new().with_text("config.json", r#"{"a":1}"#),
    );
    let outcome = acquirer.auto("open-button", Options::new()).await.unwrap();
    assert_eq!(
        outcome.files()[0].content.as_json(),
        Some(&json!({"a": 1}))
    );
}

#[tokio::test]
async fn text_extensions_dispatch_to_text() {
    for name in ["notes.txt", "readme.md", "trace.log"] {
        let (acquirer, _) = rig_for(
            RawFile::new(name, 5),
            MemoryReader::new().with_text(name, "hello"),
        );
        let outcome = acquirer.auto("open-button", Options::new()).await.unwrap();
        assert_eq!(outcome.files()[0].content.as_text(), Some("hello"), "{name}");
    }
}

#[tokio::test]
async fn markup_extensions_dispatch_to_html() {
    for name in ["page.html", "page.htm"] {
        let (acquirer, _) = rig_for(
            RawFile::new(name, 9),
            MemoryReader::new().with_text(name, "<p>hi</p>"),
        );
        // no target containers configured: content is still returned
        let outcome = acquirer.auto("open-button", Options::new()).await.unwrap();
        assert_eq!(outcome.files()[0].content.as_text(), Some("<p>hi</p>"), "{name}");
    }
}

#[tokio::test]
async fn script_extensions_dispatch_with_matching_dialect() {
    let cases = [
        ("tool.js", "console.log(1)", ScriptDialect::JavaScript),
        ("tool.py", "print(1)", ScriptDialect::Python),
    ];
    for (name, source, dialect) in cases {
        let (acquirer, channel) = rig_for(
            RawFile::new(name, source.len() as u64),
            MemoryReader::new().with_text(name, source),
        );
        let outcome = acquirer.auto("open-button", Options::new()).await.unwrap();
        assert_eq!(outcome.files()[0].content.as_text(), Some(source));
        assert_eq!(channel.executed(), vec![(dialect, source.to_string())]);
    }
}

#[tokio::test]
async fn every_declared_binary_extension_dispatches_to_binary() {
    for ext in BINARY_EXTENSIONS {
        let name = format!("blob.{ext}");
        let (acquirer, _) = rig_for(
            RawFile::new(&name, 4),
            MemoryReader::new().with_bytes(&name, bytes::Bytes::from_static(b"\x00\x01\x02\x03")),
        );
        let outcome = acquirer.auto("open-button", Options::new()).await.unwrap();
        assert!(
            matches!(outcome.files()[0].content, FileContent::Binary(_)),
            "{name}"
        );
    }
}

#[tokio::test]
async fn upper_case_names_dispatch_through_lower_cased_extension() {
    let (acquirer, _) = rig_for(
        RawFile::new("NOTES.TXT", 5),
        MemoryReader::new().with_text("NOTES.TXT", "hello"),
    );
    let outcome = acquirer.auto("open-button", Options::new()).await.unwrap();
    assert_eq!(outcome.files()[0].extension, "txt");
    assert_eq!(outcome.files()[0].content.as_text(), Some("hello"));
}

#[tokio::test]
async fn unmapped_extension_rejects_as_unsupported() {
    let (acquirer, _) = rig_for(
        RawFile::new("archive.rar", 10),
        MemoryReader::new().with_bytes("archive.rar", bytes::Bytes::from_static(b"Rar!")),
    );
    let err = acquirer.auto("open-button", Options::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFileType);
    assert!(err.user_message().contains("archive.rar"));
}

#[tokio::test]
async fn extensionless_name_rejects_as_unsupported() {
    let (acquirer, _) = rig_for(
        RawFile::new("Makefile", 10),
        MemoryReader::new().with_text("Makefile", "all:"),
    );
    let err = acquirer.auto("open-button", Options::new()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFileType);
}

#[tokio::test]
async fn mixed_batch_dispatches_each_file_independently() {
    let surface = MemorySurface::new()
        .with_element("open-button")
        .with_activation(Activation::dropped(vec![
            RawFile::new("a.json", 7),
            RawFile::new("b.txt", 2),
            RawFile::new("c.png", 4),
        ]));
    let reader = MemoryReader::new()
        .with_text("a.json", r#"{"k":1}"#)
        .with_text("b.txt", "hi")
        .with_bytes("c.png", bytes::Bytes::from_static(b"\x89PNG"));
    let acquirer = Acquirer::new(Arc::new(surface), Arc::new(reader));

    let outcome = acquirer
        .auto("open-button", Options::new().with_multiple(true))
        .await
        .unwrap();
    let files = outcome.files();
    assert!(matches!(files[0].content, FileContent::Json(_)));
    assert!(matches!(files[1].content, FileContent::Text(_)));
    assert!(matches!(files[2].content, FileContent::Binary(_)));
}

#[tokio::test]
async fn one_unsupported_file_rejects_a_mixed_batch() {
    let surface = MemorySurface::new()
        .with_element("open-button")
        .with_activation(Activation::dropped(vec![
            RawFile::new("a.txt", 2),
            RawFile::new("b.xyz", 2),
        ]));
    let reader = MemoryReader::new()
        .with_text("a.txt", "hi")
        .with_text("b.xyz", "??");
    let acquirer = Acquirer::new(Arc::new(surface), Arc::new(reader));

    let err = acquirer
        .auto("open-button", Options::new().with_multiple(true))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFileType);
}
