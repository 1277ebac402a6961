//! CSV output.

use std::io::Write;

use crate::models::{Roster, ROSTER_COLUMNS};
use crate::RosterResult;

/// Write the roster as CSV with a header row, even when it has no rows.
pub fn write_csv<W: Write>(roster: &Roster, writer: W) -> RosterResult<()> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(ROSTER_COLUMNS)?;
    for row in &roster.rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Export to CSV format.
pub fn to_csv(roster: &Roster) -> RosterResult<String> {
    let mut buffer = Vec::new();
    write_csv(roster, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RosterRow;
    use chrono::NaiveDate;

    fn roster(rows: Vec<RosterRow>) -> Roster {
        Roster::new(rows, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()).unwrap()
    }

    #[test]
    fn test_csv_rows() {
        let csv = to_csv(&roster(vec![RosterRow {
            inclusion_date: Some("14/03/2024".into()),
            surgeon: Some("Dr. Martinez".into()),
            patient: "GARCIA LOPEZ, ANA".into(),
            history_number: "101".into(),
            diagnosis: Some("HERNIA INGUINAL".into()),
            procedure: Some("HERNIORRAFIA".into()),
            cma: None,
            observations: None,
            planned_date: None,
        }]))
        .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Fecha de Inclusion,CIRUJANO,PACIENTE"));
        assert_eq!(
            lines[1],
            "14/03/2024,Dr. Martinez,\"GARCIA LOPEZ, ANA\",101,HERNIA INGUINAL,HERNIORRAFIA,,,"
        );
    }

    #[test]
    fn test_empty_roster_has_header() {
        let csv = to_csv(&roster(Vec::new())).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
