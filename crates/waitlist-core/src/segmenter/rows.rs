//! Boundary detection and next-line classification.

use crate::config::ParserConfig;
use crate::models::{SegmentRow, Surgeon};

use super::patterns::{contains_date, is_boundary, is_digit_led_non_date, is_upper_case};

/// Scan the document for boundary lines and classify the line after each.
///
/// Returns one row per boundary line, in document order.
pub fn segment(lines: &[String], config: &ParserConfig) -> Vec<SegmentRow> {
    let mut rows = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let token = line.trim();
        if !is_boundary(token) {
            continue;
        }

        let next = lines.get(index + 1).map(|l| l.trim()).unwrap_or("");
        rows.push(classify(index, token, next, config));
    }

    log::debug!(
        "Segmented {} boundary rows from {} lines",
        rows.len(),
        lines.len()
    );
    rows
}

/// Classify the line following a boundary token.
pub fn classify(index: usize, token: &str, next: &str, config: &ParserConfig) -> SegmentRow {
    if next.is_empty() {
        return SegmentRow::surgeon(index, token, Surgeon::Unknown);
    }

    let looks_like_patient = is_upper_case(next) || is_digit_led_non_date(next);
    if looks_like_patient && !config.is_excluded_name(next) {
        SegmentRow::patient(index, token, next)
    } else if contains_date(next) {
        SegmentRow::surgeon(index, token, Surgeon::NullMarker)
    } else {
        SegmentRow::surgeon(index, token, Surgeon::Named(next.to_string()))
    }
}
