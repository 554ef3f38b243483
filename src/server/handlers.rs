use axum::{
    extract::{Multipart, State},
    http::header,
    response::{Html, IntoResponse},
};

use crate::report::generate_report;
use crate::server::error::UploadError;
use crate::server::upload::{has_spreadsheet_extension, report_filename, secure_filename};
use crate::server::AppState;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Sales report</title>
</head>
<body>
  <h1>Sales report</h1>
  <p>Upload a spreadsheet with <code>Region</code>, <code>Client</code> and <code>Amount</code> columns.</p>
  <form method="post" action="/" enctype="multipart/form-data">
    <input type="file" name="file" accept=".xlsx,.xlsm,.xlsb,.xls,.ods" required>
    <button type="submit">Generate report</button>
  </form>
</body>
</html>
"#;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /health
pub async fn health_check() -> &'static str {
    "ok"
}

/// POST /
pub async fn upload_report(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, UploadError> {
    let (original_name, bytes) = loop {
        let Some(field) = multipart.next_field().await? else {
            return Err(UploadError::MissingFile);
        };
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        if name.is_empty() {
            return Err(UploadError::MissingFile);
        }
        if !has_spreadsheet_extension(&name) {
            return Err(UploadError::InvalidExtension(name));
        }
        break (name.clone(), field.bytes().await?);
    };

    let filename = secure_filename(&original_name)
        .filter(|name| has_spreadsheet_extension(name))
        .ok_or_else(|| UploadError::InvalidFilename(original_name.clone()))?;
    let report_name = report_filename(&filename);

    let input_path = state.config.upload_dir.join(&filename);
    let output_path = state.config.upload_dir.join(&report_name);

    tracing::info!(
        file = %filename,
        bytes = bytes.len(),
        "received upload"
    );
    tokio::fs::write(&input_path, &bytes).await?;

    let options = state.config.report_options();
    let report_path = output_path.clone();
    let summary =
        tokio::task::spawn_blocking(move || generate_report(&input_path, &report_path, &options))
            .await??;
    tracing::debug!(
        file = %filename,
        sheets = summary.sheets.len(),
        skipped = summary.rows_skipped,
        "report ready"
    );

    let report = tokio::fs::read(&output_path).await?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", report_name),
            ),
        ],
        report,
    ))
}
