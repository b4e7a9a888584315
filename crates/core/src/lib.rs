//! Workbook split & merge core for sheetpack
//!
//! Pure data-transformation library: xlsx bytes in, xlsx bytes out. Splits a
//! workbook into one single-sheet workbook per sheet, or merges several
//! workbooks into one with deterministic sheet-name collision resolution.
//! Only literal cell values are copied; formulas (beyond cached results),
//! styles, charts, and images are not preserved. Nothing is persisted: every
//! call parses, transforms, serializes, and discards.
//!
//! # Examples
//!
//! ## Splitting a workbook
//!
//! ```
//! use sheetpack_core::{split, Book, NamingRule, Sheet};
//!
//! let mut book = Book::new();
//! book.add_sheet("Q1", Sheet::from_data(vec![vec![1.0, 2.0]]))?;
//! book.add_sheet("Q2", Sheet::from_data(vec![vec![3.0, 4.0]]))?;
//! let bytes = book.to_xlsx_bytes()?;
//!
//! let artifacts = split(&bytes, "report.xlsx", NamingRule::OriginalAndSheet)?;
//! assert_eq!(artifacts[0].filename, "report_Q1.xlsx");
//! assert_eq!(artifacts[1].filename, "report_Q2.xlsx");
//! # Ok::<(), sheetpack_core::SheetError>(())
//! ```
//!
//! ## Merging workbooks
//!
//! ```
//! use sheetpack_core::{merge, Book, MergeDatePrefix, Sheet};
//!
//! let mut first = Book::new();
//! first.add_sheet("Data", Sheet::from_data(vec![vec![1.0]]))?;
//! let mut second = Book::new();
//! second.add_sheet("Data", Sheet::from_data(vec![vec![2.0]]))?;
//!
//! let files = vec![
//!     ("a.xlsx".to_string(), first.to_xlsx_bytes()?),
//!     ("b.xlsx".to_string(), second.to_xlsx_bytes()?),
//! ];
//! let artifact = merge(&files, "combined", MergeDatePrefix::None)?;
//!
//! assert_eq!(artifact.filename, "combined.xlsx");
//! let merged = Book::from_xlsx_bytes(&artifact.bytes)?;
//! assert_eq!(merged.sheet_names(), vec!["Data", "b_Data"]);
//! # Ok::<(), sheetpack_core::SheetError>(())
//! ```

mod artifact;
mod book;
mod cell;
mod error;
mod merge;
mod naming;
mod sheet;
mod split;
mod xlsx;

/// Re-export artifact type.
pub use artifact::OutputArtifact;
/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export error types.
pub use error::{Result, SheetError};
/// Re-export the merge operation.
pub use merge::{merge, MergeDatePrefix};
/// Re-export naming utilities.
pub use naming::{base_name, sanitize_sheet_name, today, DateFormat, NamingRule};
/// Re-export sheet type.
pub use sheet::Sheet;
/// Re-export the split operation.
pub use split::split;
