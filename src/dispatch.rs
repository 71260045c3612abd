//! Extension-based dispatch for auto-mode acquisition.
//!
//! A fixed enumerated mapping from lower-cased file extension to the
//! concrete [`Mode`] auto-acquisition uses, with an explicit fallback:
//! unmapped extensions yield `None` and the flow settles with
//! [`UnsupportedFileType`](crate::Error::UnsupportedFileType).

use crate::types::Mode;

/// Extensions the auto-mode lookup dispatches to [`Mode::Binary`].
pub const BINARY_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "gif", "webp", "pdf", "zip", "bin"];

/// Maps a lower-cased extension to the mode auto-acquisition uses.
///
/// Never returns [`Mode::Auto`]. The empty extension is unmapped.
///
/// # Examples
///
/// ```
/// use filepick::{dispatch, Mode};
///
/// assert_eq!(dispatch::mode_for_extension("json"), Some(Mode::Json));
/// assert_eq!(dispatch::mode_for_extension("py"), Some(Mode::Script));
/// assert_eq!(dispatch::mode_for_extension("rar"), None);
/// ```
pub fn mode_for_extension(extension: &str) -> Option<Mode> {
    match extension {
        "json" => Some(Mode::Json),
        "txt" | "md" | "log" => Some(Mode::Text),
        "html" | "htm" => Some(Mode::Html),
        "js" | "py" => Some(Mode::Script),
        ext if BINARY_EXTENSIONS.contains(&ext) => Some(Mode::Binary),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_like_extensions() {
        assert_eq!(mode_for_extension("txt"), Some(Mode::Text));
        assert_eq!(mode_for_extension("md"), Some(Mode::Text));
        assert_eq!(mode_for_extension("log"), Some(Mode::Text));
    }

    #[test]
    fn structured_and_markup_extensions() {
        assert_eq!(mode_for_extension("json"), Some(Mode::Json));
        assert_eq!(mode_for_extension("html"), Some(Mode::Html));
        assert_eq!(mode_for_extension("htm"), Some(Mode::Html));
    }

    #[test]
    fn script_extensions() {
        assert_eq!(mode_for_extension("js"), Some(Mode::Script));
        assert_eq!(mode_for_extension("py"), Some(Mode::Script));
    }

    #[test]
    fn every_declared_binary_extension_maps() {
        for ext in BINARY_EXTENSIONS {
            assert_eq!(mode_for_extension(ext), Some(Mode::Binary), "{ext}");
        }
    }

    #[test]
    fn unmapped_extensions_fall_through() {
        assert_eq!(mode_for_extension("rar"), None);
        assert_eq!(mode_for_extension("exe"), None);
        assert_eq!(mode_for_extension(""), None);
        // the table is keyed on lower-cased input; raw upper-case misses
        assert_eq!(mode_for_extension("JSON"), None);
    }
}
