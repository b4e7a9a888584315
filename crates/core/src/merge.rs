//! Merge several workbooks into one, with collision-safe sheet naming.

use crate::artifact::OutputArtifact;
use crate::book::Book;
use crate::error::Result;
use crate::naming::{base_name, sanitize_sheet_name, today, DateFormat};

/// Whether the merged output filename gets a date-stamp prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeDatePrefix {
    #[default]
    None,
    /// Prefix `{YYYYMMDD}_`
    Compact,
}

/// Merge a sequence of (filename, workbook bytes) pairs into one workbook
///
/// Sheets are copied in file-then-sheet order. A destination sheet keeps its
/// sanitized source name unless that name is taken, in which case it becomes
/// `{base(filename)}_{name}`, then `..._1`, `..._2`, and so on until unused.
/// The resolution is deterministic and depends only on input order.
///
/// The output filename is `merged_filename`, optionally date-prefixed, with
/// `.xlsx` appended when missing. Zero or one input files still merge; policy
/// on a minimum file count belongs to the caller.
///
/// # Errors
///
/// Returns [`crate::SheetError::Parse`] as soon as any input fails to parse;
/// no artifact is produced in that case.
pub fn merge(
    files: &[(String, Vec<u8>)],
    merged_filename: &str,
    date_prefix: MergeDatePrefix,
) -> Result<OutputArtifact> {
    let mut dest = Book::new();

    for (filename, bytes) in files {
        let book = Book::from_xlsx_bytes(bytes)?;
        let base = base_name(filename);

        for (name, sheet) in book.sheets() {
            let unique = resolve_sheet_name(&dest, base, name);
            tracing::debug!(file = %filename, sheet = %name, placed_as = %unique, "merged sheet");
            dest.add_sheet(&unique, sheet.clone())?;
        }
    }

    let mut filename = match date_prefix {
        MergeDatePrefix::Compact => {
            format!("{}_{merged_filename}", today(DateFormat::Compact))
        }
        MergeDatePrefix::None => merged_filename.to_string(),
    };
    if !filename.ends_with(".xlsx") {
        filename.push_str(".xlsx");
    }

    let bytes = dest.to_xlsx_bytes()?;
    Ok(OutputArtifact::new(filename, bytes))
}

/// Pick a destination sheet name that is not yet used in `dest`
///
/// The destination book's own sheet set doubles as the used-name set.
fn resolve_sheet_name(dest: &Book, file_base: &str, sheet_name: &str) -> String {
    let sanitized = sanitize_sheet_name(sheet_name);

    let candidate = if dest.has_sheet(&sanitized) {
        format!("{file_base}_{sanitized}")
    } else {
        sanitized
    };

    let mut unique = candidate.clone();
    let mut count = 1;
    while dest.has_sheet(&unique) {
        unique = format!("{candidate}_{count}");
        count += 1;
    }

    unique
}
