//! Position-relative repair of fields the segmenter could not bind.
//!
//! Handles:
//! - Inclusion dates (direct scan, repeated-key block fallback)
//! - Diagnosis / procedure (surgeon block fallback)
//!
//! The block offsets (third-from-last, second-from-last) are an approximation
//! of the report layout, not a guarantee. Everything filled here is tagged
//! [`Provenance::Inferred`](crate::models::Provenance::Inferred) so it can be
//! flagged for review.

mod dates;
mod diagnosis;

use std::collections::{BTreeMap, BTreeSet};

use crate::config::ParserConfig;
use crate::models::Record;

/// Shared context for the backfill passes.
pub struct Backfiller<'a> {
    lines: &'a [String],
    surgeon_names: &'a BTreeSet<String>,
    config: &'a ParserConfig,
}

impl<'a> Backfiller<'a> {
    /// Create a backfiller over the document lines and known surgeon names.
    pub fn new(
        lines: &'a [String],
        surgeon_names: &'a BTreeSet<String>,
        config: &'a ParserConfig,
    ) -> Self {
        Self {
            lines,
            surgeon_names,
            config,
        }
    }

    fn is_surgeon_name(&self, line: &str) -> bool {
        self.surgeon_names.contains(line)
    }
}

/// History numbers that occur on more than one record.
pub fn repeated_keys(records: &[Record]) -> BTreeSet<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.history_number.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, _)| key.to_string())
        .collect()
}

/// The line `offset` positions from the end of a block (1 = last line).
fn from_end<'b>(block: &[&'b str], offset: usize) -> Option<&'b str> {
    if offset == 0 || block.len() < offset {
        return None;
    }
    Some(block[block.len() - offset])
}
