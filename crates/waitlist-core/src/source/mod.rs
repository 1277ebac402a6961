//! Document loading.
//!
//! Turns the report on disk into a plain, 0-indexed line stream. RTF input is
//! decoded with [`rtf_parser`]; anything else is taken as already-converted
//! plain text.

mod rtf;

pub use rtf::*;

use std::fs;
use std::path::Path;

use crate::RosterResult;

/// A report as an ordered list of lines. A line's identity is its index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<String>,
}

impl Document {
    /// Split plain text into lines, normalizing `\r\n` and `\r` endings.
    ///
    /// Blank lines are kept: the segmentation heuristics count positions.
    pub fn from_text(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        Self {
            lines: normalized.split('\n').map(str::to_string).collect(),
        }
    }

    /// Decode report content, choosing RTF or plain text by its signature.
    pub fn parse(content: &str) -> RosterResult<Self> {
        if is_rtf(content) {
            let text = rtf_to_text(content)?;
            Ok(Self::from_text(&text))
        } else {
            Ok(Self::from_text(content))
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Read and decode a report from disk.
pub fn load_document<P: AsRef<Path>>(path: P) -> RosterResult<Document> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let document = Document::parse(&content)?;
    log::debug!(
        "Loaded {} lines from {}",
        document.len(),
        path.display()
    );
    Ok(document)
}

/// RTF files open with a `{\rtf` group.
pub fn is_rtf(content: &str) -> bool {
    content.trim_start().starts_with("{\\rtf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RosterError;

    #[test]
    fn test_plain_text_lines() {
        let doc = Document::parse("101\r\nGARCIA LOPEZ, ANA\r\n\r\nX01").unwrap();
        assert_eq!(doc.lines, vec!["101", "GARCIA LOPEZ, ANA", "", "X01"]);
    }

    #[test]
    fn test_trailing_newline_kept_as_empty_line() {
        let doc = Document::from_text("a\nb\n");
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.lines[2], "");
    }

    #[test]
    fn test_rtf_detection() {
        assert!(is_rtf("{\\rtf1\\ansi hello}"));
        assert!(is_rtf("  \n{\\rtf1 hello}"));
        assert!(!is_rtf("101\nGARCIA"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_document("/definitely/not/here.rtf").unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }

    #[test]
    fn test_load_rtf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lista.rtf");
        fs::write(
            &path,
            "{\\rtf1\\ansi\\deff0 {\\fonttbl {\\f0 Arial;}}\n\\f0 101\\par\nGARCIA LOPEZ, ANA\\par\n}",
        )
        .unwrap();

        let doc = load_document(&path).unwrap();
        let trimmed: Vec<&str> = doc.lines.iter().map(|l| l.trim()).collect();
        assert!(trimmed.contains(&"101"));
        assert!(trimmed.contains(&"GARCIA LOPEZ, ANA"));
    }
}
