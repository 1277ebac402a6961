//! Record assembly from normalized rows.

use std::collections::BTreeSet;

use crate::models::{strip_leading_code, Field, NormalizedTable, Record, RowSlot};

use super::patterns::starts_with_letter;

/// Records plus the context the backfill passes need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub records: Vec<Record>,
    /// Every named surgeon seen in the report
    pub surgeon_names: BTreeSet<String>,
    /// Surgeon blocks left after the last patient
    pub unpaired_blocks: usize,
}

/// Materialize records from the normalized table.
///
/// Patient rows whose text starts with a letter become records, in order.
/// The n-th record is paired with the n-th surgeon block; records beyond the
/// last block keep an unknown surgeon and unset diagnosis/procedure.
pub fn assemble(table: &NormalizedTable) -> Assembly {
    let mut blocks = table.blocks.iter();

    let records: Vec<Record> = table
        .rows
        .iter()
        .filter_map(|row| match (&row.slot, row.line_index) {
            (RowSlot::Patient(name), Some(line_index)) if starts_with_letter(name) => {
                Some(Record::new(row.token.clone(), line_index).with_patient(name.clone()))
            }
            _ => None,
        })
        .map(|mut record| {
            if let Some(block) = blocks.next() {
                record.surgeon = block.surgeon.clone();
                record.diagnosis = strip_leading_code(&block.raw_diagnosis).map(Field::extracted);
                record.procedure = strip_leading_code(&block.raw_procedure).map(Field::extracted);
            }
            record
        })
        .collect();

    let unpaired_blocks = blocks.count();
    if unpaired_blocks > 0 {
        log::warn!(
            "{} surgeon block(s) left without a patient after pairing",
            unpaired_blocks
        );
    }

    let surgeon_names = table
        .blocks
        .iter()
        .filter_map(|block| block.surgeon.name())
        .map(str::to_string)
        .collect();

    Assembly {
        records,
        surgeon_names,
        unpaired_blocks,
    }
}
