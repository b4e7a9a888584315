//! Sheet-name sanitization and output-filename derivation.

use chrono::Local;

/// Characters Excel forbids in worksheet names.
const FORBIDDEN: [char; 7] = ['\\', '/', '*', '?', ':', '[', ']'];

/// Replace every character Excel forbids in worksheet names with `_`
///
/// All other characters, including non-ASCII text, pass through unchanged.
/// No length truncation is applied. Idempotent.
#[must_use]
pub fn sanitize_sheet_name(name: &str) -> String {
    name.chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect()
}

/// Strip the final extension from a filename (text up to the last `.`)
///
/// Filenames without a dot are returned unchanged.
#[must_use]
pub fn base_name(filename: &str) -> &str {
    filename.rsplit_once('.').map_or(filename, |(base, _)| base)
}

/// Textual format for a date stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `YYYYMMDD`
    Compact,
    /// `YYYY-MM-DD`
    Dashed,
}

/// Today's local date as a stamp string
#[must_use]
pub fn today(format: DateFormat) -> String {
    let now = Local::now();
    match format {
        DateFormat::Compact => now.format("%Y%m%d").to_string(),
        DateFormat::Dashed => now.format("%Y-%m-%d").to_string(),
    }
}

/// How a split output filename is derived from the source filename and the
/// sheet name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingRule {
    /// `{original}_{sheet}.xlsx`
    #[default]
    OriginalAndSheet,
    /// `{sheet}.xlsx`
    SheetOnly,
    /// `{YYYYMMDD}_{original}_{sheet}.xlsx`
    DateOriginalAndSheet,
    /// `{YYYYMMDD}_{sheet}.xlsx`
    DateAndSheet,
}

impl NamingRule {
    /// Derive the output filename for one sheet of a split
    ///
    /// The sheet name is sanitized and the original filename is stripped of
    /// its extension before substitution.
    #[must_use]
    pub fn filename(self, original_filename: &str, sheet_name: &str) -> String {
        let base = base_name(original_filename);
        let sheet = sanitize_sheet_name(sheet_name);
        match self {
            NamingRule::OriginalAndSheet => format!("{base}_{sheet}.xlsx"),
            NamingRule::SheetOnly => format!("{sheet}.xlsx"),
            NamingRule::DateOriginalAndSheet => {
                format!("{}_{base}_{sheet}.xlsx", today(DateFormat::Compact))
            }
            NamingRule::DateAndSheet => format!("{}_{sheet}.xlsx", today(DateFormat::Compact)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_forbidden() {
        assert_eq!(sanitize_sheet_name(r"a\b/c*d?e:f[g]h"), "a_b_c_d_e_f_g_h");
    }

    #[test]
    fn test_sanitize_passes_other_chars() {
        assert_eq!(sanitize_sheet_name("Revenue 2024 (final)"), "Revenue 2024 (final)");
        assert_eq!(sanitize_sheet_name("매출 시트"), "매출 시트");
    }

    #[test]
    fn test_sanitize_idempotent() {
        for input in ["plain", r"a\b:c", "[bracketed]", "시트/1", ""] {
            let once = sanitize_sheet_name(input);
            assert_eq!(sanitize_sheet_name(&once), once);
        }
    }

    #[test]
    fn test_sanitize_leaves_no_forbidden() {
        let sanitized = sanitize_sheet_name(r"\\//**??::[[]]");
        assert!(sanitized.chars().all(|c| c == '_'));
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("report.xlsx"), "report");
        assert_eq!(base_name("archive.2024.xlsx"), "archive.2024");
        assert_eq!(base_name("nodot"), "nodot");
        assert_eq!(base_name(".hidden"), "");
    }

    #[test]
    fn test_today_formats() {
        let compact = today(DateFormat::Compact);
        assert_eq!(compact.len(), 8);
        assert!(compact.chars().all(|c| c.is_ascii_digit()));

        let dashed = today(DateFormat::Dashed);
        assert_eq!(dashed.len(), 10);
        assert_eq!(dashed.replace('-', ""), compact);
    }

    #[test]
    fn test_naming_rules() {
        assert_eq!(
            NamingRule::OriginalAndSheet.filename("report.xlsx", "Q1"),
            "report_Q1.xlsx"
        );
        assert_eq!(
            NamingRule::SheetOnly.filename("report.xlsx", "Q1/Q2"),
            "Q1_Q2.xlsx"
        );

        let stamp = today(DateFormat::Compact);
        assert_eq!(
            NamingRule::DateOriginalAndSheet.filename("report.xlsx", "Q1"),
            format!("{stamp}_report_Q1.xlsx")
        );
        assert_eq!(
            NamingRule::DateAndSheet.filename("report.xlsx", "Q1"),
            format!("{stamp}_Q1.xlsx")
        );
    }
}
