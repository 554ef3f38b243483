use crate::excel::{Cell, CellType, Sheet};
use crate::report::ReportError;

pub const REGION: &str = "Region";
pub const CLIENT: &str = "Client";
pub const AMOUNT: &str = "Amount";

/// One sales row after the header check. Client is `None` when the cell was blank.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    region: String,
    client: Option<String>,
    amount: f64,
}

impl Transaction {
    pub fn new(region: impl Into<String>, client: Option<String>, amount: f64) -> Self {
        Self {
            region: region.into(),
            client,
            amount,
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn client(&self) -> Option<&str> {
        self.client.as_deref()
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    region: usize,
    client: usize,
    amount: usize,
}

impl Columns {
    fn locate(header: &[Cell]) -> Result<Self, ReportError> {
        let find = |name: &str| {
            header
                .iter()
                .position(|cell| cell.cell_type == CellType::Text && cell.value == name)
        };

        match (find(REGION), find(CLIENT), find(AMOUNT)) {
            (Some(region), Some(client), Some(amount)) => Ok(Self {
                region,
                client,
                amount,
            }),
            (region, client, amount) => {
                let missing = [(REGION, region), (CLIENT, client), (AMOUNT, amount)]
                    .into_iter()
                    .filter(|(_, idx)| idx.is_none())
                    .map(|(name, _)| name.to_string())
                    .collect();
                Err(ReportError::MissingColumns(missing))
            }
        }
    }
}

/// The input table reduced to the three columns the report needs.
#[derive(Debug, Clone, Default)]
pub struct SalesTable {
    pub transactions: Vec<Transaction>,
    pub rows_read: usize,
    /// Rows dropped entirely because their Region was blank.
    pub rows_skipped: usize,
    /// Rows kept for their Region but contributing no client line.
    pub rows_without_client: usize,
}

impl SalesTable {
    pub fn from_sheet(sheet: &Sheet) -> Result<Self, ReportError> {
        let columns = Columns::locate(sheet.header())?;
        let blank = Cell::empty();

        let mut table = SalesTable::default();

        for (row_number, cells) in sheet.body() {
            if cells.iter().all(Cell::is_blank) {
                continue;
            }
            table.rows_read += 1;

            let region = cells.get(columns.region).unwrap_or(&blank);
            let client = cells.get(columns.client).unwrap_or(&blank);
            let amount = cells.get(columns.amount).unwrap_or(&blank);

            if region.is_blank() {
                tracing::warn!(row = row_number, "skipping row without a Region");
                table.rows_skipped += 1;
                continue;
            }

            let client = if client.is_blank() {
                tracing::warn!(row = row_number, region = %region.value, "row has no Client");
                table.rows_without_client += 1;
                None
            } else {
                Some(client.value.clone())
            };

            let amount = if amount.is_blank() {
                0.0
            } else {
                amount.as_number().ok_or_else(|| ReportError::InvalidAmount {
                    row: row_number,
                    value: amount.value.clone(),
                })?
            };

            table
                .transactions
                .push(Transaction::new(region.value.clone(), client, amount));
        }

        Ok(table)
    }
}
