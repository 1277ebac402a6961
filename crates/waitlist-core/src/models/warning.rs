//! Structured diagnostics reported instead of silently dropping data.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A degradation found while extracting the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// No inclusion date could be located; needs manual entry
    MissingInclusionDate {
        history_number: String,
        /// The history number occurs more than once in the report
        repeated: bool,
    },
    /// Inclusion date recovered from a repeated-key block position
    InferredInclusionDate {
        history_number: String,
        value: String,
    },
    /// Inclusion date text is not a valid `dd/mm/yyyy` date
    UnparseableInclusionDate {
        history_number: String,
        value: String,
    },
    /// No diagnosis could be located
    MissingDiagnosis {
        history_number: String,
        patient: String,
    },
    /// Diagnosis recovered from a surgeon block position
    InferredDiagnosis {
        history_number: String,
        patient: String,
    },
    /// Diagnosis reads like a surgeon or patient name
    DiagnosisResemblesName {
        history_number: String,
        diagnosis: String,
        name: String,
        score: f64,
    },
    /// Surgeon blocks left over after every patient was paired
    UnpairedSurgeonBlocks { count: usize },
}

impl Warning {
    /// History number the warning refers to, if any.
    pub fn history_number(&self) -> Option<&str> {
        match self {
            Warning::MissingInclusionDate { history_number, .. }
            | Warning::InferredInclusionDate { history_number, .. }
            | Warning::UnparseableInclusionDate { history_number, .. }
            | Warning::MissingDiagnosis { history_number, .. }
            | Warning::InferredDiagnosis { history_number, .. }
            | Warning::DiagnosisResemblesName { history_number, .. } => Some(history_number),
            Warning::UnpairedSurgeonBlocks { .. } => None,
        }
    }

    /// The inclusion date must be checked or typed in by hand.
    pub fn needs_manual_date(&self) -> bool {
        matches!(
            self,
            Warning::MissingInclusionDate { .. }
                | Warning::InferredInclusionDate { .. }
                | Warning::UnparseableInclusionDate { .. }
        )
    }

    /// The diagnosis may be wrong or missing.
    pub fn suspect_diagnosis(&self) -> bool {
        matches!(
            self,
            Warning::MissingDiagnosis { .. }
                | Warning::InferredDiagnosis { .. }
                | Warning::DiagnosisResemblesName { .. }
        )
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingInclusionDate {
                history_number,
                repeated,
            } => {
                write!(f, "{}: no inclusion date found", history_number)?;
                if *repeated {
                    write!(f, " (history number repeated)")?;
                }
                Ok(())
            }
            Warning::InferredInclusionDate {
                history_number,
                value,
            } => write!(
                f,
                "{}: inclusion date '{}' inferred from block position",
                history_number, value
            ),
            Warning::UnparseableInclusionDate {
                history_number,
                value,
            } => write!(f, "{}: '{}' is not a dd/mm/yyyy date", history_number, value),
            Warning::MissingDiagnosis {
                history_number,
                patient,
            } => write!(f, "{} ({}): no diagnosis found", patient, history_number),
            Warning::InferredDiagnosis {
                history_number,
                patient,
            } => write!(
                f,
                "{} ({}): diagnosis inferred from block position",
                patient, history_number
            ),
            Warning::DiagnosisResemblesName {
                history_number,
                diagnosis,
                name,
                score,
            } => write!(
                f,
                "{}: diagnosis '{}' resembles name '{}' (similarity {:.2})",
                history_number, diagnosis, name, score
            ),
            Warning::UnpairedSurgeonBlocks { count } => {
                write!(f, "{} surgeon block(s) had no matching patient", count)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        let missing = Warning::MissingInclusionDate {
            history_number: "105".into(),
            repeated: true,
        };
        assert!(missing.needs_manual_date());
        assert!(!missing.suspect_diagnosis());
        assert_eq!(missing.history_number(), Some("105"));

        let inferred = Warning::InferredDiagnosis {
            history_number: "101".into(),
            patient: "GARCIA LOPEZ, ANA".into(),
        };
        assert!(inferred.suspect_diagnosis());
        assert!(!inferred.needs_manual_date());

        let unpaired = Warning::UnpairedSurgeonBlocks { count: 2 };
        assert_eq!(unpaired.history_number(), None);
    }

    #[test]
    fn test_display() {
        let warning = Warning::MissingInclusionDate {
            history_number: "105".into(),
            repeated: true,
        };
        assert_eq!(
            warning.to_string(),
            "105: no inclusion date found (history number repeated)"
        );
    }

    #[test]
    fn test_json_tagging() {
        let warning = Warning::UnpairedSurgeonBlocks { count: 1 };
        let json = serde_json::to_string(&warning).unwrap();
        assert_eq!(json, r#"{"kind":"unpaired_surgeon_blocks","count":1}"#);
    }
}
