//! Parser configuration.
//!
//! Every knob has a default matching the layout of the scheduling system's
//! report, so an empty TOML file (or no file at all) is a valid configuration.
//!
//! ```toml
//! excluded_names = ["SALVADOR HERRERA, CRISTINA"]
//! test_entry_prefixes = ["PRUEBA PRUEBA"]
//! separator_rows = 2
//! date_offset_from_end = 3
//! diagnosis_offset_from_end = 3
//! procedure_offset_from_end = 2
//! name_similarity_threshold = 0.9
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{RosterError, RosterResult};

/// Tunables for segmentation, backfill and export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParserConfig {
    /// Upper-case lines that look like patients but never are
    pub excluded_names: Vec<String>,
    /// Patient prefixes marking test entries dropped from the output
    pub test_entry_prefixes: Vec<String>,
    /// Separator rows required between consecutive surgeon rows
    pub separator_rows: usize,
    /// Position (from the end of a repeated-key block) of the inclusion date
    pub date_offset_from_end: usize,
    /// Position (from the end of a surgeon block) of the diagnosis line
    pub diagnosis_offset_from_end: usize,
    /// Position (from the end of a surgeon block) of the procedure line
    pub procedure_offset_from_end: usize,
    /// Jaro-Winkler score above which a diagnosis is flagged as a misplaced name
    pub name_similarity_threshold: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            excluded_names: vec!["SALVADOR HERRERA, CRISTINA".into()],
            test_entry_prefixes: vec!["PRUEBA PRUEBA".into()],
            separator_rows: 2,
            date_offset_from_end: 3,
            diagnosis_offset_from_end: 3,
            procedure_offset_from_end: 2,
            name_similarity_threshold: 0.9,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text, filling gaps with defaults.
    pub fn from_toml_str(content: &str) -> RosterResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make the positional heuristics meaningless.
    pub fn validate(&self) -> RosterResult<()> {
        for (name, offset) in [
            ("date_offset_from_end", self.date_offset_from_end),
            ("diagnosis_offset_from_end", self.diagnosis_offset_from_end),
            ("procedure_offset_from_end", self.procedure_offset_from_end),
        ] {
            if offset == 0 {
                return Err(RosterError::InvalidConfig(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.name_similarity_threshold) {
            return Err(RosterError::InvalidConfig(format!(
                "name_similarity_threshold must be within 0..=1, got {}",
                self.name_similarity_threshold
            )));
        }

        Ok(())
    }

    /// Check whether a line is one of the excluded literal names.
    pub fn is_excluded_name(&self, line: &str) -> bool {
        self.excluded_names.iter().any(|name| name == line)
    }

    /// Check whether a patient name marks a test entry.
    pub fn is_test_entry(&self, patient: &str) -> bool {
        self.test_entry_prefixes
            .iter()
            .any(|prefix| patient.starts_with(prefix.as_str()))
    }
}
