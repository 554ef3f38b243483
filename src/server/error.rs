use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::report::ReportError;
use crate::server::upload::SPREADSHEET_EXTENSIONS;

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No file was uploaded. Use the form field named 'file'.")]
    MissingFile,

    #[error(
        "'{0}' is not a spreadsheet. Please upload a valid file ({exts}).",
        exts = SPREADSHEET_EXTENSIONS.map(|ext| format!(".{ext}")).join(", ")
    )]
    InvalidExtension(String),

    #[error("The file name '{0}' cannot be used.")]
    InvalidFilename(String),

    #[error("Malformed upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("{0}")]
    Report(#[from] ReportError),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingFile | Self::InvalidExtension(_) | Self::InvalidFilename(_) => {
                StatusCode::BAD_REQUEST
            }
            // Body-limit overruns surface here as 413.
            Self::Multipart(e) => e.status(),
            Self::Report(e) if e.is_input_error() => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Report(_) | Self::Io(_) | Self::Join(_) => {
                tracing::error!("Internal error: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status != StatusCode::INTERNAL_SERVER_ERROR {
            tracing::warn!(status = status.as_u16(), "upload rejected: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_extension_lists_accepted_types() {
        let message = UploadError::InvalidExtension("sales.csv".into()).to_string();
        assert_eq!(
            message,
            "'sales.csv' is not a spreadsheet. Please upload a valid file \
             (.xlsx, .xlsm, .xlsb, .xls, .ods)."
        );
    }

    #[test]
    fn client_errors_map_to_bad_request() {
        let response = UploadError::InvalidExtension("a.txt".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = UploadError::Report(ReportError::MissingColumns(vec!["Client".into()]))
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
