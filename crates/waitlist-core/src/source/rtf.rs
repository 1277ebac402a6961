//! RTF to plain text conversion.

use std::sync::LazyLock;

use regex::Regex;

use crate::{RosterError, RosterResult};

/// Paragraph and line-break control words (`\par`, `\line`, not `\pard`).
static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\(?:par|line)\b").expect("valid regex"));

/// Destination groups whose content is never document text.
const SKIPPED_DESTINATIONS: &[&str] = &[
    "fonttbl",
    "colortbl",
    "stylesheet",
    "info",
    "pict",
    "header",
    "footer",
    "listtable",
    "listoverridetable",
    "generator",
    "rsidtbl",
    "xmlnstbl",
];

/// Convert RTF content to plain text with one line per paragraph.
///
/// The document is parsed with `rtf-parser`; malformed RTF is an error. When
/// the parsed text carries no line breaks although the source has paragraph
/// marks, the raw source is scanned instead so the line structure survives.
pub fn rtf_to_text(content: &str) -> RosterResult<String> {
    let document = rtf_parser::RtfDocument::try_from(content)
        .map_err(|e| RosterError::Rtf(e.to_string()))?;

    let text: String = document
        .body
        .iter()
        .map(|block| block.text.as_str())
        .collect();

    if text.contains('\n') || !PARAGRAPH_RE.is_match(content) {
        return Ok(text);
    }

    log::debug!("RTF body has no line breaks, scanning raw paragraphs");
    Ok(plain_text_from_raw(content))
}

/// Strip control words and destination groups from raw RTF.
///
/// `\par` and `\line` become `\n`, `\tab` becomes `\t`, `\'hh` escapes are
/// decoded as Latin-1 and `\uN` as the Unicode scalar N. Empty paragraphs are
/// kept as empty lines.
pub fn plain_text_from_raw(raw: &str) -> String {
    let mut out = String::new();
    let mut chars = raw.chars().peekable();
    let mut depth = 0usize;
    // Depth of the destination group being skipped
    let mut skip_from: Option<usize> = None;
    let mut group_start = false;

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                depth += 1;
                group_start = true;
            }
            '}' => {
                if skip_from == Some(depth) {
                    skip_from = None;
                }
                depth = depth.saturating_sub(1);
                group_start = false;
            }
            '\\' => {
                let Some(&next) = chars.peek() else {
                    break;
                };

                if next.is_ascii_alphabetic() {
                    let mut word = String::new();
                    while let Some(&ch) = chars.peek() {
                        if !ch.is_ascii_alphabetic() {
                            break;
                        }
                        word.push(ch);
                        chars.next();
                    }

                    let mut param = String::new();
                    if chars.peek() == Some(&'-') {
                        param.push('-');
                        chars.next();
                    }
                    while let Some(&ch) = chars.peek() {
                        if !ch.is_ascii_digit() {
                            break;
                        }
                        param.push(ch);
                        chars.next();
                    }
                    // A single space delimits the control word
                    if chars.peek() == Some(&' ') {
                        chars.next();
                    }

                    if group_start
                        && skip_from.is_none()
                        && SKIPPED_DESTINATIONS.contains(&word.as_str())
                    {
                        skip_from = Some(depth);
                    }
                    group_start = false;

                    if skip_from.is_some() {
                        continue;
                    }

                    match word.as_str() {
                        "par" | "line" => out.push('\n'),
                        "tab" => out.push('\t'),
                        "u" => {
                            if let Some(ch) = unicode_escape(&param) {
                                out.push(ch);
                                // Skip the ANSI fallback character
                                if let Some(&fallback) = chars.peek() {
                                    if !matches!(fallback, '\\' | '{' | '}') {
                                        chars.next();
                                    }
                                }
                            }
                        }
                        _ => {}
                    }
                } else {
                    chars.next();
                    match next {
                        '*' => {
                            if group_start && skip_from.is_none() {
                                skip_from = Some(depth);
                            }
                        }
                        '\'' => {
                            let hex: String = chars.by_ref().take(2).collect();
                            if skip_from.is_none() {
                                if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                                    out.push(char::from(byte));
                                }
                            }
                        }
                        '\\' | '{' | '}' if skip_from.is_none() => out.push(next),
                        '~' if skip_from.is_none() => out.push(' '),
                        '\n' | '\r' if skip_from.is_none() => out.push('\n'),
                        _ => {}
                    }
                    group_start = false;
                }
            }
            // Source line breaks are not content
            '\n' | '\r' => {}
            _ => {
                group_start = false;
                if skip_from.is_none() {
                    out.push(c);
                }
            }
        }
    }

    out
}

fn unicode_escape(param: &str) -> Option<char> {
    let value: i32 = param.parse().ok()?;
    let code = if value < 0 { value + 65_536 } else { value };
    char::from_u32(u32::try_from(code).ok()?)
}
