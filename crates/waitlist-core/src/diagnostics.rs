//! Review of assembled records for manual follow-up.
//!
//! Nothing here changes a record. Every field that is missing, inferred from
//! block position, or looks misplaced is turned into a [`Warning`] so the
//! person completing the spreadsheet knows which cells to check.

use strsim::jaro_winkler;

use crate::backfill::repeated_keys;
use crate::config::ParserConfig;
use crate::models::{Record, Warning};

/// Collect warnings for every non-test record, in record order.
pub fn review(records: &[Record], config: &ParserConfig) -> Vec<Warning> {
    let repeated = repeated_keys(records);
    let mut warnings = Vec::new();

    for record in records
        .iter()
        .filter(|r| !config.is_test_entry(r.patient_or_empty()))
    {
        let history_number = record.history_number.clone();

        match &record.inclusion_date {
            None => warnings.push(Warning::MissingInclusionDate {
                repeated: repeated.contains(&history_number),
                history_number: history_number.clone(),
            }),
            Some(date) if date.is_inferred() => warnings.push(Warning::InferredInclusionDate {
                history_number: history_number.clone(),
                value: date.value.clone(),
            }),
            Some(_) => {}
        }

        match &record.diagnosis {
            None => warnings.push(Warning::MissingDiagnosis {
                history_number: history_number.clone(),
                patient: record.patient_or_empty().to_string(),
            }),
            Some(diagnosis) => {
                if diagnosis.is_inferred() {
                    warnings.push(Warning::InferredDiagnosis {
                        history_number: history_number.clone(),
                        patient: record.patient_or_empty().to_string(),
                    });
                }
                if let Some((name, score)) =
                    closest_name(&diagnosis.value, record, config.name_similarity_threshold)
                {
                    warnings.push(Warning::DiagnosisResemblesName {
                        history_number,
                        diagnosis: diagnosis.value.clone(),
                        name,
                        score,
                    });
                }
            }
        }
    }

    for warning in &warnings {
        log::warn!("{}", warning);
    }
    warnings
}

/// The record's surgeon or patient name closest to `text`, if above `threshold`.
fn closest_name(text: &str, record: &Record, threshold: f64) -> Option<(String, f64)> {
    let text = text.to_uppercase();

    [record.surgeon.name(), record.patient_name.as_deref()]
        .into_iter()
        .flatten()
        .map(|name| (name.to_string(), jaro_winkler(&text, &name.to_uppercase())))
        .filter(|(_, score)| *score >= threshold)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, Surgeon};

    fn complete(history_number: &str, line_index: usize) -> Record {
        let mut record = Record::new(history_number, line_index).with_patient("GARCIA LOPEZ, ANA");
        record.surgeon = Surgeon::Named("Dr. Martinez".into());
        record.diagnosis = Some(Field::extracted("HERNIA INGUINAL"));
        record.procedure = Some(Field::extracted("HERNIORRAFIA"));
        record.inclusion_date = Some(Field::extracted("14/03/2024"));
        record
    }

    #[test]
    fn test_complete_record_is_clean() {
        let warnings = review(&[complete("101", 0)], &ParserConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_date_on_repeated_key() {
        let first = complete("105", 0);
        let mut second = complete("105", 9);
        second.inclusion_date = None;

        let warnings = review(&[first, second], &ParserConfig::default());

        assert_eq!(
            warnings,
            vec![Warning::MissingInclusionDate {
                history_number: "105".into(),
                repeated: true,
            }]
        );
    }

    #[test]
    fn test_inferred_fields_flagged() {
        let mut record = complete("101", 0);
        record.inclusion_date = Some(Field::inferred("14/03/2024"));
        record.diagnosis = Some(Field::inferred("HERNIA INGUINAL"));

        let warnings = review(&[record], &ParserConfig::default());

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].needs_manual_date());
        assert!(warnings[1].suspect_diagnosis());
    }

    #[test]
    fn test_diagnosis_resembling_surgeon() {
        let mut record = complete("101", 0);
        record.diagnosis = Some(Field::extracted("Dr. Martinez"));

        let warnings = review(&[record], &ParserConfig::default());

        assert!(matches!(
            &warnings[0],
            Warning::DiagnosisResemblesName { name, .. } if name == "Dr. Martinez"
        ));
    }

    #[test]
    fn test_test_entries_skipped() {
        let mut record = Record::new("999", 0).with_patient("PRUEBA PRUEBA XYZ");
        record.inclusion_date = None;

        let warnings = review(&[record], &ParserConfig::default());
        assert!(warnings.is_empty());
    }
}
