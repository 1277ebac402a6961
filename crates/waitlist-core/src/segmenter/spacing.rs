//! Spacing normalization between surgeon blocks.

use crate::models::{NormalizedTable, RowSlot, SegmentRow, SurgeonBlock};

/// Guarantee `separator_rows` non-surgeon rows after every surgeon row.
///
/// Short gaps are padded just before the next surgeon row (or at the end of
/// the table); long gaps are left alone. The row right before each surgeon
/// row is captured as that block's raw diagnosis (its token) and raw
/// procedure (its patient slot). All original rows keep their relative order.
pub fn normalize_spacing(rows: &[SegmentRow], separator_rows: usize) -> NormalizedTable {
    let mut normalized: Vec<SegmentRow> = Vec::with_capacity(rows.len());
    let mut blocks = Vec::new();
    let mut padded = 0usize;
    let mut i = 0;

    while i < rows.len() {
        let row = &rows[i];
        let surgeon = match &row.slot {
            RowSlot::Surgeon(surgeon) if surgeon.is_attributed() => surgeon,
            _ => {
                normalized.push(row.clone());
                i += 1;
                continue;
            }
        };

        let (raw_diagnosis, raw_procedure) = normalized
            .last()
            .map(|prev| (prev.token.clone(), prev.patient_text().to_string()))
            .unwrap_or_default();

        blocks.push(SurgeonBlock {
            surgeon: surgeon.clone(),
            raw_diagnosis,
            raw_procedure,
        });
        normalized.push(row.clone());

        let mut j = i + 1;
        while j < rows.len() && !rows[j].is_surgeon_attributed() {
            normalized.push(rows[j].clone());
            j += 1;
        }

        let separators = j - i - 1;
        for _ in separators..separator_rows {
            normalized.push(SegmentRow::padding());
            padded += 1;
        }

        i = j;
    }

    if padded > 0 {
        log::debug!("Inserted {} padding rows between surgeon blocks", padded);
    }

    NormalizedTable {
        rows: normalized,
        blocks,
    }
}
