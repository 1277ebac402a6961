//! Final roster models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::RosterResult;

/// Output column headers, in order.
pub const ROSTER_COLUMNS: [&str; 9] = [
    "Fecha de Inclusion",
    "CIRUJANO",
    "PACIENTE",
    "NºHª",
    "DIAGNOSTICO",
    "CIRUGIA",
    "CMA",
    "OBSERVACIONES",
    "FECHA PREVISTA",
];

/// One output row. The last three columns are left for manual completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterRow {
    #[serde(rename = "Fecha de Inclusion")]
    pub inclusion_date: Option<String>,
    #[serde(rename = "CIRUJANO")]
    pub surgeon: Option<String>,
    #[serde(rename = "PACIENTE")]
    pub patient: String,
    #[serde(rename = "NºHª")]
    pub history_number: String,
    #[serde(rename = "DIAGNOSTICO")]
    pub diagnosis: Option<String>,
    #[serde(rename = "CIRUGIA")]
    pub procedure: Option<String>,
    #[serde(rename = "CMA")]
    pub cma: Option<String>,
    #[serde(rename = "OBSERVACIONES")]
    pub observations: Option<String>,
    #[serde(rename = "FECHA PREVISTA")]
    pub planned_date: Option<String>,
}

impl RosterRow {
    /// Cell values in [`ROSTER_COLUMNS`] order; unset cells are `None`.
    pub fn cells(&self) -> [Option<&str>; 9] {
        [
            self.inclusion_date.as_deref(),
            self.surgeon.as_deref(),
            Some(self.patient.as_str()),
            Some(self.history_number.as_str()),
            self.diagnosis.as_deref(),
            self.procedure.as_deref(),
            self.cma.as_deref(),
            self.observations.as_deref(),
            self.planned_date.as_deref(),
        ]
    }
}

/// The sorted waiting list ready for export.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Roster {
    /// Date embedded in the output file name
    pub generated_on: NaiveDate,
    /// SHA-256 of the serialized rows; identical input gives an identical value
    pub fingerprint: String,
    pub rows: Vec<RosterRow>,
}

impl Roster {
    /// Create a roster, fingerprinting its rows.
    pub fn new(rows: Vec<RosterRow>, generated_on: NaiveDate) -> RosterResult<Self> {
        let fingerprint = hash_data(&serde_json::to_vec(&rows)?);
        Ok(Self {
            generated_on,
            fingerprint,
            rows,
        })
    }

    /// `lista_espera-<YYYY-MM-DD>.<extension>`
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "lista_espera-{}.{}",
            self.generated_on.format("%Y-%m-%d"),
            extension
        )
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Hex-encoded SHA-256 of some bytes.
pub fn hash_data(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}
