use std::collections::HashSet;

/// Longest worksheet name Excel accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const INVALID_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];
const FALLBACK_NAME: &str = "Region";
const RESERVED_NAME: &str = "History";

/// Hands out valid, workbook-unique sheet names for region values.
///
/// Excel compares sheet names case-insensitively, so "North" and "north" get
/// separate sheets ("north (2)") instead of colliding.
#[derive(Debug, Default)]
pub struct SheetNamer {
    used: HashSet<String>,
}

impl SheetNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, region: &str) -> String {
        let base = sanitize_sheet_name(region);

        let mut candidate = base.clone();
        let mut n = 2;
        while self.used.contains(&candidate.to_lowercase()) {
            let suffix = format!(" ({})", n);
            candidate = format!(
                "{}{}",
                truncate_chars(&base, MAX_SHEET_NAME_LEN - suffix.chars().count()),
                suffix
            );
            n += 1;
        }

        if candidate != region {
            tracing::debug!(region, sheet = %candidate, "renamed region sheet");
        }

        self.used.insert(candidate.to_lowercase());
        candidate
    }
}

/// Maps an arbitrary value onto a legal worksheet name.
pub fn sanitize_sheet_name(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| {
            if INVALID_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = replaced.trim().trim_matches('\'');
    let mut name = truncate_chars(trimmed, MAX_SHEET_NAME_LEN)
        .trim_end_matches('\'')
        .to_string();

    if name.trim().is_empty() {
        name = FALLBACK_NAME.to_string();
    } else if name.eq_ignore_ascii_case(RESERVED_NAME) {
        name.push('_');
    }

    name
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_names_are_kept_verbatim() {
        assert_eq!(sanitize_sheet_name("North America"), "North America");
        assert_eq!(sanitize_sheet_name("Île-de-France"), "Île-de-France");
    }

    #[test]
    fn illegal_characters_are_replaced() {
        assert_eq!(sanitize_sheet_name("EMEA/APAC"), "EMEA_APAC");
        assert_eq!(sanitize_sheet_name("[Q1]: *?\\"), "_Q1__ ___");
        assert_eq!(sanitize_sheet_name("'quoted'"), "quoted");
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "A very long region name that keeps going";
        let name = sanitize_sheet_name(long);
        assert_eq!(name.chars().count(), MAX_SHEET_NAME_LEN);
        assert!(long.starts_with(&name));
    }

    #[test]
    fn empty_and_reserved_names_are_replaced() {
        assert_eq!(sanitize_sheet_name("   "), "Region");
        assert_eq!(sanitize_sheet_name("''"), "Region");
        assert_eq!(sanitize_sheet_name("history"), "history_");
    }

    #[test]
    fn collisions_get_numbered_suffixes() {
        let mut namer = SheetNamer::new();
        assert_eq!(namer.assign("North"), "North");
        assert_eq!(namer.assign("north"), "north (2)");
        assert_eq!(namer.assign("NORTH"), "NORTH (3)");
        assert_eq!(namer.assign("A/B"), "A_B");
        assert_eq!(namer.assign("A:B"), "A_B (2)");
    }

    #[test]
    fn suffixed_names_stay_within_limit() {
        let mut namer = SheetNamer::new();
        let long = "Z".repeat(40);
        assert_eq!(namer.assign(&long), "Z".repeat(31));

        let second = namer.assign(&long);
        assert_eq!(second, format!("{} (2)", "Z".repeat(27)));
        assert_eq!(second.chars().count(), MAX_SHEET_NAME_LEN);
    }
}
