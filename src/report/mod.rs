//! Region/client sales report: reads a transactions sheet and writes one
//! pivot sheet (with a total and a bar chart) per region.

mod error;
mod pivot;
mod schema;
mod sheet_name;
mod writer;

use serde::Serialize;
use std::path::Path;

use crate::excel;

pub use error::ReportError;
pub use pivot::{pivot_by_region, ClientOrder, ClientTotal, RegionPivot};
pub use schema::{SalesTable, Transaction, AMOUNT, CLIENT, REGION};
pub use sheet_name::{sanitize_sheet_name, SheetNamer, MAX_SHEET_NAME_LEN};
pub use writer::{render_workbook, total_row, TOTAL_LABEL};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub client_order: ClientOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSummary {
    pub region: String,
    pub sheet_name: String,
    pub clients: usize,
    pub total: f64,
    pub chart: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub sheets: Vec<SheetSummary>,
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub rows_without_client: usize,
}

/// Reads `input`, builds the region report and writes it to `output`.
///
/// The destination is only written once the whole workbook has been rendered,
/// so a failure never leaves a half-written report behind. An existing file at
/// `output` is replaced.
pub fn generate_report<P, Q>(
    input: P,
    output: Q,
    options: &ReportOptions,
) -> Result<ReportSummary, ReportError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output = output.as_ref();

    let sheet = excel::open_sheet(input)?;
    let table = SalesTable::from_sheet(&sheet)?;
    drop(sheet);

    let pivots = pivot_by_region(&table.transactions, options.client_order);
    let (mut workbook, sheets) = render_workbook(&pivots)?;
    let buffer = workbook.save_to_buffer()?;

    std::fs::write(output, &buffer).map_err(|source| ReportError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        regions = sheets.len(),
        rows = table.rows_read,
        skipped = table.rows_skipped,
        without_client = table.rows_without_client,
        "report generated"
    );

    Ok(ReportSummary {
        sheets,
        rows_read: table.rows_read,
        rows_skipped: table.rows_skipped,
        rows_without_client: table.rows_without_client,
    })
}
