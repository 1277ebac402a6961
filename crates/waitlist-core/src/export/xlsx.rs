//! Spreadsheet output.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::models::{Roster, ROSTER_COLUMNS};
use crate::RosterResult;

/// Worksheet name used for the roster.
pub const SHEET_NAME: &str = "Lista de espera";

/// Write the roster as an `.xlsx` workbook with a bold header row.
///
/// Unset cells are left blank rather than written as empty strings.
pub fn write_xlsx(roster: &Roster, path: &Path) -> RosterResult<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    worksheet.set_freeze_panes(1, 0)?;

    for (col, title) in (0u16..).zip(ROSTER_COLUMNS) {
        worksheet.write_string_with_format(0, col, title, &header)?;
        worksheet.set_column_width(col, 20)?;
    }

    for (row_num, row) in (1u32..).zip(&roster.rows) {
        for (col, cell) in (0u16..).zip(row.cells()) {
            if let Some(value) = cell {
                worksheet.write_string(row_num, col, value)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RosterRow;
    use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
    use chrono::NaiveDate;

    #[test]
    fn test_write_xlsx() {
        let rows = vec![RosterRow {
            inclusion_date: Some("14/03/2024".into()),
            surgeon: Some("Dr. Martinez".into()),
            patient: "GARCIA LOPEZ, ANA".into(),
            history_number: "101".into(),
            diagnosis: None,
            procedure: None,
            cma: None,
            observations: None,
            planned_date: None,
        }];
        let roster = Roster::new(rows, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(roster.file_name("xlsx"));
        write_xlsx(&roster, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();

        assert_eq!(
            range.get_value((0, 3)),
            Some(&Data::String("NºHª".to_string()))
        );
        assert_eq!(
            range.get_value((1, 2)),
            Some(&Data::String("GARCIA LOPEZ, ANA".to_string()))
        );
        assert!(range.get_value((1, 4)).map_or(true, DataType::is_empty));
    }
}
