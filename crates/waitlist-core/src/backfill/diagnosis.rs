//! Diagnosis and procedure backfill.

use crate::models::{strip_leading_code, Field, Record};

use super::{from_end, Backfiller};

impl<'a> Backfiller<'a> {
    /// Fill diagnoses (and missing procedures) the spacing pass could not capture.
    ///
    /// For each record still lacking a diagnosis, the lines between its
    /// boundary line and the next surgeon name form a block; the line at
    /// `diagnosis_offset_from_end` is the diagnosis and the one at
    /// `procedure_offset_from_end` the procedure. Blocks too short for the
    /// diagnosis offset leave both fields untouched.
    pub fn diagnoses(&self, records: Vec<Record>) -> Vec<Record> {
        let mut inferred = 0usize;

        let records = records
            .into_iter()
            .map(|mut record| {
                if record.diagnosis.is_some() {
                    return record;
                }
                let Some(block) = self.block_before_surgeon(record.line_index) else {
                    return record;
                };
                let Some(diagnosis) = from_end(&block, self.config.diagnosis_offset_from_end)
                else {
                    return record;
                };

                record.diagnosis = strip_leading_code(diagnosis).map(Field::inferred);
                if record.procedure.is_none() {
                    record.procedure = from_end(&block, self.config.procedure_offset_from_end)
                        .and_then(strip_leading_code)
                        .map(Field::inferred);
                }
                if record.diagnosis.is_some() {
                    inferred += 1;
                }
                record
            })
            .collect();

        log::debug!("Diagnoses inferred from surgeon blocks: {}", inferred);
        records
    }

    /// Trimmed lines after `line_index` up to (excluding) the next surgeon name.
    ///
    /// `None` when no surgeon name follows.
    pub fn block_before_surgeon(&self, line_index: usize) -> Option<Vec<&'a str>> {
        let mut block = Vec::new();
        for line in self.lines.iter().skip(line_index + 1) {
            let trimmed = line.trim();
            if self.is_surgeon_name(trimmed) {
                return Some(block);
            }
            block.push(trimmed);
        }
        None
    }
}
