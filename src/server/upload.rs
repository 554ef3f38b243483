use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Extensions the reader understands, compared case-insensitively.
pub const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

pub fn has_spreadsheet_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .is_some_and(|ext| SPREADSHEET_EXTENSIONS.contains(&ext.as_str()))
}

/// Reduces a client-supplied filename to a safe single path component.
///
/// Accented letters are decomposed first so `über` keeps its `u`. Keeps ASCII
/// letters, digits, `_`, `.` and `-`; path separators become spaces, whitespace
/// runs become `_`, and leading/trailing `.` and `_` are stripped. Returns
/// `None` when nothing usable is left.
pub fn secure_filename(filename: &str) -> Option<String> {
    let separated: String = filename
        .nfkd()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = separated.split_whitespace().collect::<Vec<_>>().join("_");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    let cleaned = cleaned.trim_matches(|c| c == '.' || c == '_');

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Name of the report written next to an upload: `report_<stem>.xlsx`.
pub fn report_filename(upload_name: &str) -> String {
    let stem = Path::new(upload_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("upload");
    format!("report_{}.xlsx", stem)
}
