use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

use crate::excel::{Cell, Sheet};
use crate::report::ReportError;

/// Opens any calamine-readable workbook and loads its first worksheet.
pub fn open_sheet<P: AsRef<Path>>(path: P) -> Result<Sheet, ReportError> {
    let path = path.as_ref();
    let unreadable = |source: calamine::Error| ReportError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(unreadable)?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ReportError::NoWorksheet(path.to_path_buf()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ReportError::NoWorksheet(path.to_path_buf()))?
        .map_err(unreadable)?;

    let sheet = create_sheet_from_range(&name, &range);
    tracing::debug!(
        sheet = %sheet.name,
        rows = sheet.max_rows,
        cols = sheet.max_cols,
        "loaded input worksheet"
    );

    Ok(sheet)
}

fn create_sheet_from_range(name: &str, range: &Range<Data>) -> Sheet {
    let rows = range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect();

    Sheet::from_rows(name, rows)
}
