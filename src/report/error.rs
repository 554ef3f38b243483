use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Excel must contain 'Region', 'Client', and 'Amount' columns (missing: {})", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Unable to parse Excel file: {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("No worksheets found in file: {}", .0.display())]
    NoWorksheet(PathBuf),

    #[error("Row {row}: Amount '{value}' is not a number")]
    InvalidAmount { row: usize, value: String },

    #[error("Failed to build workbook: {0}")]
    Render(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Whether the failure is caused by the uploaded data rather than the host.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumns(_)
                | Self::Unreadable { .. }
                | Self::NoWorksheet(_)
                | Self::InvalidAmount { .. }
        )
    }
}
