use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use indexmap::IndexMap;

/// A book containing multiple sheets (preserves insertion order)
#[derive(Debug, Clone, Default)]
pub struct Book {
    sheets: IndexMap<String, Sheet>,
}

impl Book {
    /// Create a new empty book (no default sheet)
    #[must_use]
    pub fn new() -> Self {
        Book {
            sheets: IndexMap::new(),
        }
    }

    /// Get the number of sheets
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the book is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get all sheet names in order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Check if a sheet exists
    #[must_use]
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Add a sheet with the given name
    ///
    /// The sheet's own name is set to `name`. Sheet names must be unique
    /// within a book.
    pub fn add_sheet(&mut self, name: &str, mut sheet: Sheet) -> Result<()> {
        if self.sheets.contains_key(name) {
            return Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            });
        }

        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
        Ok(())
    }

    /// Iterate over (name, sheet) pairs in insertion order
    pub fn sheets(&self) -> impl Iterator<Item = (&String, &Sheet)> {
        self.sheets.iter()
    }

    /// Total number of populated (non-null) cells across all sheets
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.sheets
            .values()
            .flat_map(Sheet::rows)
            .flatten()
            .filter(|cell| !matches!(cell, CellValue::Null))
            .count()
    }
}
