//! Inclusion-date backfill.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Field, Record};
use crate::segmenter::is_strict_date;

use super::{from_end, repeated_keys, Backfiller};

impl<'a> Backfiller<'a> {
    /// Fill inclusion dates.
    ///
    /// Unique history numbers take the first strict date line that directly
    /// follows a known surgeon name, scanning forward from the boundary line.
    /// Repeated history numbers are ambiguous for that scan and are resolved
    /// from repeated-key blocks instead (see [`Self::repeated_key_dates`]).
    pub fn inclusion_dates(&self, records: Vec<Record>) -> Vec<Record> {
        let repeated = repeated_keys(&records);

        let mut records: Vec<Record> = records
            .into_iter()
            .map(|mut record| {
                if record.inclusion_date.is_none() && !repeated.contains(&record.history_number) {
                    record.inclusion_date = self.direct_date(record.line_index).map(Field::extracted);
                }
                record
            })
            .collect();

        let mut inferred = 0usize;
        for (key, value) in self.repeated_key_dates(&repeated) {
            let Some(value) = value else {
                continue;
            };
            if let Some(record) = records
                .iter_mut()
                .find(|r| r.history_number == key && r.inclusion_date.is_none())
            {
                record.inclusion_date = Some(Field::inferred(value));
                inferred += 1;
            }
        }

        log::debug!(
            "Inclusion dates: {} set, {} inferred from repeated-key blocks",
            records.iter().filter(|r| r.inclusion_date.is_some()).count(),
            inferred
        );
        records
    }

    /// First strict date after `line_index` whose previous line is a surgeon name.
    pub fn direct_date(&self, line_index: usize) -> Option<String> {
        let lines = self.lines;
        (line_index + 1..lines.len()).find_map(|j| {
            let line = lines[j].trim();
            let previous = lines[j - 1].trim();
            (is_strict_date(line) && self.is_surgeon_name(previous)).then(|| line.to_string())
        })
    }

    /// Resolve repeated keys from date blocks.
    ///
    /// A block starts at a line equal to a repeated key and runs until the
    /// next such line or the end of the document. The first block of each key
    /// decides: its line at `date_offset_from_end` becomes the date, or the key
    /// stays unresolved (`None`) when the block is too short.
    pub fn repeated_key_dates(
        &self,
        repeated: &BTreeSet<String>,
    ) -> BTreeMap<String, Option<String>> {
        let offset = self.config.date_offset_from_end;
        let mut resolved: BTreeMap<String, Option<String>> = BTreeMap::new();
        let mut close = |key: &str, block: &[&str]| {
            resolved
                .entry(key.to_string())
                .or_insert_with(|| from_end(block, offset).map(str::to_string));
        };

        let mut current: Option<(&str, Vec<&str>)> = None;
        for line in self.lines {
            let trimmed = line.trim();
            if repeated.contains(trimmed) {
                if let Some((key, block)) = current.take() {
                    close(key, &block);
                }
                current = Some((trimmed, Vec::new()));
            } else if let Some((_, block)) = current.as_mut() {
                block.push(trimmed);
            }
        }
        if let Some((key, block)) = current.take() {
            close(key, &block);
        }

        resolved
    }
}
