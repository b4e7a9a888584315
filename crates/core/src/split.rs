//! Split one workbook into one single-sheet workbook per source sheet.

use crate::artifact::OutputArtifact;
use crate::book::Book;
use crate::error::Result;
use crate::naming::{sanitize_sheet_name, NamingRule};

/// Split an uploaded workbook into one artifact per sheet
///
/// Each artifact holds a brand-new single-sheet workbook carrying a verbatim
/// value copy of the corresponding source sheet, named per `rule`. Artifacts
/// come back in source-sheet order. A workbook with zero sheets yields an
/// empty sequence, not an error.
///
/// The output workbook's in-document sheet title is sanitized the same way
/// the filename is; the xlsx writer rejects Excel-illegal titles outright, so
/// the source's raw title is not representable in the output document.
///
/// # Errors
///
/// Returns [`crate::SheetError::Parse`] if `workbook_bytes` is not a valid
/// xlsx workbook, or [`crate::SheetError::Workbook`] if an output sheet
/// cannot be written.
pub fn split(
    workbook_bytes: &[u8],
    original_filename: &str,
    rule: NamingRule,
) -> Result<Vec<OutputArtifact>> {
    let book = Book::from_xlsx_bytes(workbook_bytes)?;
    split_book(&book, original_filename, rule)
}

fn split_book(
    book: &Book,
    original_filename: &str,
    rule: NamingRule,
) -> Result<Vec<OutputArtifact>> {
    let mut artifacts = Vec::with_capacity(book.sheet_count());

    for (name, sheet) in book.sheets() {
        let mut single = Book::new();
        single.add_sheet(&sanitize_sheet_name(name), sheet.clone())?;

        let filename = rule.filename(original_filename, name);
        let bytes = single.to_xlsx_bytes()?;

        tracing::debug!(sheet = %name, filename = %filename, "split sheet");
        artifacts.push(OutputArtifact::new(filename, bytes));
    }

    Ok(artifacts)
}
