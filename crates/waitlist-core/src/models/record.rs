//! Waiting-list record models.

use serde::{Deserialize, Serialize};

/// How the null-marker surgeon is rendered in the roster.
pub const NULL_SURGEON: &str = "Null";

/// Surgeon attribution for a record.
///
/// `NullMarker` and `Unknown` are distinct on purpose: the first means the
/// report explicitly carries no surgeon, the second that nothing was parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Surgeon {
    /// A surgeon name found in the report
    Named(String),
    /// A date appeared where the surgeon name was expected
    NullMarker,
    /// Not parsed, or padding
    Unknown,
}

impl Surgeon {
    /// The surgeon's name, if one was recorded.
    pub fn name(&self) -> Option<&str> {
        match self {
            Surgeon::Named(name) => Some(name),
            _ => None,
        }
    }

    /// True for rows that open a surgeon block (named or null-marker).
    pub fn is_attributed(&self) -> bool {
        !matches!(self, Surgeon::Unknown)
    }

    /// Roster cell value: the name, `Null`, or nothing.
    pub fn to_cell(&self) -> Option<String> {
        match self {
            Surgeon::Named(name) => Some(name.clone()),
            Surgeon::NullMarker => Some(NULL_SURGEON.to_string()),
            Surgeon::Unknown => None,
        }
    }
}

/// Where a field value came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Captured directly by pattern match or row adjacency
    Extracted,
    /// Recovered by a position-relative backfill; lower confidence
    Inferred,
}

/// A text field together with its provenance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub provenance: Provenance,
}

impl Field {
    pub fn extracted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            provenance: Provenance::Extracted,
        }
    }

    pub fn inferred(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            provenance: Provenance::Inferred,
        }
    }

    pub fn is_inferred(&self) -> bool {
        self.provenance == Provenance::Inferred
    }
}

/// One waiting-list entry, built once by assembly and refined by backfill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// History number (NºHª) taken from the boundary line
    pub history_number: String,
    /// 0-based position of the boundary line in the document
    pub line_index: usize,
    /// Patient name; always starts with a letter when present
    pub patient_name: Option<String>,
    /// Surgeon attribution
    pub surgeon: Surgeon,
    /// Diagnosis with its leading code word removed
    pub diagnosis: Option<Field>,
    /// Planned procedure with its leading code word removed
    pub procedure: Option<Field>,
    /// Raw inclusion date text (`dd/mm/yyyy` when well formed)
    pub inclusion_date: Option<Field>,
}

impl Record {
    /// Create a record with every optional field unset.
    pub fn new(history_number: impl Into<String>, line_index: usize) -> Self {
        Self {
            history_number: history_number.into(),
            line_index,
            patient_name: None,
            surgeon: Surgeon::Unknown,
            diagnosis: None,
            procedure: None,
            inclusion_date: None,
        }
    }

    /// Builder-style setter for the patient name.
    pub fn with_patient(mut self, name: impl Into<String>) -> Self {
        self.patient_name = Some(name.into());
        self
    }

    /// Patient name or an empty string.
    pub fn patient_or_empty(&self) -> &str {
        self.patient_name.as_deref().unwrap_or("")
    }

    /// Check whether any field came from a position-relative backfill.
    pub fn has_inferred_fields(&self) -> bool {
        [&self.diagnosis, &self.procedure, &self.inclusion_date]
            .iter()
            .any(|field| field.as_ref().is_some_and(Field::is_inferred))
    }
}

/// Remove the leading code word (`"K40.9 HERNIA INGUINAL"` → `"HERNIA INGUINAL"`).
///
/// Text without a space has nothing but the code and yields `None`.
pub fn strip_leading_code(text: &str) -> Option<String> {
    let (_, rest) = text.trim().split_once(' ')?;
    let rest = rest.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}
