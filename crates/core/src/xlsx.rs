//! In-memory xlsx codec: byte buffers in, byte buffers out.

use crate::book::Book;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::io::Cursor;

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            // Excel stores dates as serial days since 1899-12-30
            CellValue::Float(dt.as_f64())
        }
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

impl Book {
    /// Parse an xlsx byte buffer into a book (all sheets, values only)
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Parse`] if the bytes are not a well-formed xlsx
    /// workbook.
    pub fn from_xlsx_bytes(bytes: &[u8]) -> Result<Self> {
        let mut workbook: Xlsx<Cursor<&[u8]>> =
            Xlsx::new(Cursor::new(bytes)).map_err(|e| SheetError::Parse(e.to_string()))?;

        let sheet_names = workbook.sheet_names().to_vec();
        let mut book = Book::new();

        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| SheetError::Parse(e.to_string()))?;

            let mut data: Vec<Vec<CellValue>> = Vec::new();

            // The range is anchored at the first populated cell; pad so cell
            // addresses survive the round trip.
            if let Some((row_offset, col_offset)) = range.start() {
                data.resize_with(row_offset as usize, Vec::new);
                for row in range.rows() {
                    let mut row_data = vec![CellValue::Null; col_offset as usize];
                    row_data.extend(row.iter().map(data_to_cell_value));
                    data.push(row_data);
                }
            }

            let mut sheet = Sheet::with_name(&sheet_name);
            *sheet.data_mut() = data;

            book.add_sheet(&sheet_name, sheet)?;
        }

        tracing::debug!(sheets = book.sheet_count(), "parsed workbook");
        Ok(book)
    }

    /// Serialize the book to an xlsx byte buffer
    ///
    /// Sheets are written in insertion order; null cells are left empty.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Workbook`] if a sheet cannot be written, e.g.
    /// when a sheet name exceeds Excel's 31-character limit.
    pub fn to_xlsx_bytes(&self) -> Result<Vec<u8>> {
        let mut workbook = Workbook::new();

        for (name, sheet) in self.sheets() {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(name)
                .map_err(|e| SheetError::Workbook(e.to_string()))?;
            write_sheet_values(sheet, worksheet)?;
        }

        workbook
            .save_to_buffer()
            .map_err(|e| SheetError::Workbook(e.to_string()))
    }
}

/// Copy every populated cell value of a sheet into a worksheet, verbatim
fn write_sheet_values(sheet: &Sheet, worksheet: &mut Worksheet) -> Result<()> {
    for (row_idx, row) in sheet.rows().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let row_num = u32::try_from(row_idx)
                .map_err(|_| SheetError::Workbook("row index overflow".to_string()))?;
            let col_num = u16::try_from(col_idx)
                .map_err(|_| SheetError::Workbook("column index overflow".to_string()))?;

            match cell {
                CellValue::Null => {} // Leave empty
                CellValue::Bool(b) => {
                    worksheet
                        .write_boolean(row_num, col_num, *b)
                        .map_err(|e| SheetError::Workbook(e.to_string()))?;
                }
                CellValue::Int(i) => {
                    // Note: Excel stores all numbers as f64, so integers > 2^53
                    // may lose precision
                    worksheet
                        .write_number(row_num, col_num, *i as f64)
                        .map_err(|e| SheetError::Workbook(e.to_string()))?;
                }
                CellValue::Float(f) => {
                    worksheet
                        .write_number(row_num, col_num, *f)
                        .map_err(|e| SheetError::Workbook(e.to_string()))?;
                }
                CellValue::String(s) => {
                    worksheet
                        .write_string(row_num, col_num, s)
                        .map_err(|e| SheetError::Workbook(e.to_string()))?;
                }
            }
        }
    }

    Ok(())
}
