use rust_xlsxwriter::{Chart, ChartType, Color, Format, Workbook, Worksheet, XlsxError};

use crate::report::pivot::RegionPivot;
use crate::report::sheet_name::SheetNamer;
use crate::report::SheetSummary;

pub const TOTAL_LABEL: &str = "Total Sales:";
const HEADER_COLOR: u32 = 0x0000CC;
const CHART_STYLE: u8 = 10;
// E2
const CHART_ANCHOR: (u32, u16) = (1, 4);

/// Zero-based row of the "Total Sales:" line for a pivot with `client_count` rows.
/// The header is row 0, clients follow, then one blank spacer row.
pub fn total_row(client_count: usize) -> u32 {
    client_count as u32 + 2
}

/// Builds the output workbook in memory, one worksheet per pivot.
pub fn render_workbook(pivots: &[RegionPivot]) -> Result<(Workbook, Vec<SheetSummary>), XlsxError> {
    let mut workbook = Workbook::new();
    let mut namer = SheetNamer::new();
    let mut summaries = Vec::with_capacity(pivots.len());

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(HEADER_COLOR));
    let bold = Format::new().set_bold();

    for pivot in pivots {
        let sheet_name = namer.assign(&pivot.region);
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet_name)?;

        write_pivot_table(worksheet, pivot, &header_format, &bold)?;

        let chart = if pivot.clients.is_empty() {
            tracing::info!(region = %pivot.region, "region has no client rows, skipping chart");
            false
        } else {
            let chart = build_chart(&sheet_name, pivot);
            worksheet.insert_chart(CHART_ANCHOR.0, CHART_ANCHOR.1, &chart)?;
            true
        };

        summaries.push(SheetSummary {
            region: pivot.region.clone(),
            sheet_name,
            clients: pivot.clients.len(),
            total: pivot.total,
            chart,
        });
    }

    Ok((workbook, summaries))
}

fn write_pivot_table(
    worksheet: &mut Worksheet,
    pivot: &RegionPivot,
    header_format: &Format,
    bold: &Format,
) -> Result<(), XlsxError> {
    worksheet.set_column_width(0, 24)?;
    worksheet.set_column_width(1, 15)?;

    worksheet.write_string_with_format(0, 0, "Client", header_format)?;
    worksheet.write_string_with_format(0, 1, "Amount", header_format)?;

    for (idx, row) in pivot.clients.iter().enumerate() {
        let row_idx = idx as u32 + 1;
        worksheet.write_string(row_idx, 0, &row.client)?;
        worksheet.write_number(row_idx, 1, row.amount)?;
    }

    let total_row = total_row(pivot.clients.len());
    worksheet.write_string_with_format(total_row, 0, TOTAL_LABEL, bold)?;
    worksheet.write_number_with_format(total_row, 1, pivot.total, bold)?;

    Ok(())
}

fn build_chart(sheet_name: &str, pivot: &RegionPivot) -> Chart {
    let last_row = pivot.clients.len() as u32;
    let title = format!("{} - Sales by Client", pivot.region);

    // Excel's "bar chart" with vertical bars is the column type.
    let mut chart = Chart::new(ChartType::Column);
    chart.title().set_name(title.as_str());
    chart.x_axis().set_name("Client");
    chart.y_axis().set_name("Amount");
    chart
        .add_series()
        .set_name((sheet_name, 0, 1))
        .set_categories((sheet_name, 1, 0, last_row, 0))
        .set_values((sheet_name, 1, 1, last_row, 1));
    chart.set_style(CHART_STYLE);

    chart
}
