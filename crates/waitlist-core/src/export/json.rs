//! JSON output.

use serde::Serialize;

use crate::models::{Roster, Warning};
use crate::RosterResult;

/// Roster plus the warnings raised while building it.
#[derive(Debug, Serialize)]
struct RosterExport<'a> {
    #[serde(flatten)]
    roster: &'a Roster,
    warnings: &'a [Warning],
}

/// Export to JSON.
pub fn to_json(roster: &Roster, warnings: &[Warning]) -> RosterResult<String> {
    Ok(serde_json::to_string_pretty(&RosterExport { roster, warnings })?)
}
