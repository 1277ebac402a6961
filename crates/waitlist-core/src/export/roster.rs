//! Roster building: test-entry filter, date parsing and sort.

use chrono::NaiveDate;

use crate::config::ParserConfig;
use crate::models::{Field, Record, Roster, RosterRow, Warning};
use crate::RosterResult;

/// Inclusion date format used in the report and in the output.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `dd/mm/yyyy` inclusion date.
pub fn parse_inclusion_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Build the sorted roster from backfilled records.
///
/// Test entries are dropped. Rows are sorted ascending by inclusion date
/// with a stable sort; rows without a parsable date go last, keeping their
/// relative order. Unparseable date text is reported and exported empty.
pub fn build_roster(
    records: &[Record],
    config: &ParserConfig,
    generated_on: NaiveDate,
) -> RosterResult<(Roster, Vec<Warning>)> {
    let mut warnings = Vec::new();
    let mut dated: Vec<(Option<NaiveDate>, RosterRow)> = Vec::with_capacity(records.len());

    for record in records {
        if config.is_test_entry(record.patient_or_empty()) {
            log::debug!("Dropping test entry {}", record.history_number);
            continue;
        }

        let date = record.inclusion_date.as_ref().and_then(|field| {
            let parsed = parse_inclusion_date(&field.value);
            if parsed.is_none() {
                warnings.push(Warning::UnparseableInclusionDate {
                    history_number: record.history_number.clone(),
                    value: field.value.clone(),
                });
            }
            parsed
        });

        dated.push((date, to_row(record, date)));
    }

    dated.sort_by_key(|(date, _)| (date.is_none(), *date));

    let rows = dated.into_iter().map(|(_, row)| row).collect();
    let roster = Roster::new(rows, generated_on)?;
    log::info!("Roster built with {} rows", roster.len());

    Ok((roster, warnings))
}

fn to_row(record: &Record, date: Option<NaiveDate>) -> RosterRow {
    let value = |field: &Option<Field>| field.as_ref().map(|f| f.value.clone());

    RosterRow {
        inclusion_date: date.map(|d| d.format(DATE_FORMAT).to_string()),
        surgeon: record.surgeon.to_cell(),
        patient: record.patient_or_empty().to_string(),
        history_number: record.history_number.clone(),
        diagnosis: value(&record.diagnosis),
        procedure: value(&record.procedure),
        cma: None,
        observations: None,
        planned_date: None,
    }
}
