//! Intermediate row models produced by the segmenter.

use serde::{Deserialize, Serialize};

use super::record::Surgeon;

/// What the line after a boundary token was classified as.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RowSlot {
    /// Upper-case name, or a digit-led line that is not a date
    Patient(String),
    /// Surgeon name, null-marker, or nothing usable
    Surgeon(Surgeon),
    /// Blank row inserted by the spacing normalizer
    Padding,
}

/// One boundary token and the classification of the line after it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SegmentRow {
    /// Boundary line position; `None` for padding rows
    pub line_index: Option<usize>,
    /// Trimmed boundary line (history number or a code-led line)
    pub token: String,
    pub slot: RowSlot,
}

impl SegmentRow {
    pub fn patient(line_index: usize, token: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            line_index: Some(line_index),
            token: token.into(),
            slot: RowSlot::Patient(name.into()),
        }
    }

    pub fn surgeon(line_index: usize, token: impl Into<String>, surgeon: Surgeon) -> Self {
        Self {
            line_index: Some(line_index),
            token: token.into(),
            slot: RowSlot::Surgeon(surgeon),
        }
    }

    pub fn padding() -> Self {
        Self {
            line_index: None,
            token: String::new(),
            slot: RowSlot::Padding,
        }
    }

    /// Rows carrying a named or null-marker surgeon open a surgeon block.
    pub fn is_surgeon_attributed(&self) -> bool {
        matches!(&self.slot, RowSlot::Surgeon(surgeon) if surgeon.is_attributed())
    }

    /// Patient slot text, or an empty string for other rows.
    pub fn patient_text(&self) -> &str {
        match &self.slot {
            RowSlot::Patient(text) => text,
            _ => "",
        }
    }
}

/// A surgeon row plus the raw diagnosis/procedure captured from the row before it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurgeonBlock {
    pub surgeon: Surgeon,
    /// Token of the preceding row (code-led diagnosis line)
    pub raw_diagnosis: String,
    /// Patient slot of the preceding row (code-led procedure line)
    pub raw_procedure: String,
}

/// Output of the spacing normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTable {
    pub rows: Vec<SegmentRow>,
    pub blocks: Vec<SurgeonBlock>,
}
