use crate::cell::CellValue;

/// A sheet representing a 2D grid of cells (row-major storage)
#[derive(Debug, Clone)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data: converted,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns (width of the widest row)
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the sheet is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a cell value by (row, column), if present
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    /// Get the underlying row-major data
    #[must_use]
    pub fn data(&self) -> &Vec<Vec<CellValue>> {
        &self.data
    }

    /// Get the underlying row-major data mutably
    pub fn data_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.data
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &Vec<CellValue>> {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data() {
        let sheet = Sheet::from_data(vec![vec![1, 2, 3], vec![4, 5, 6]]);

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.col_count(), 3);
        assert_eq!(sheet.get(0, 0), Some(&CellValue::Int(1)));
        assert_eq!(sheet.get(1, 2), Some(&CellValue::Int(6)));
        assert_eq!(sheet.get(2, 0), None);
    }

    #[test]
    fn test_ragged_rows() {
        let mut sheet = Sheet::with_name("Ragged");
        *sheet.data_mut() = vec![
            vec![CellValue::Int(1)],
            vec![CellValue::Int(2), CellValue::Int(3)],
        ];

        assert_eq!(sheet.col_count(), 2);
        assert_eq!(sheet.get(0, 1), None);
    }

    #[test]
    fn test_name() {
        let mut sheet = Sheet::with_name("Data");
        assert_eq!(sheet.name(), "Data");

        sheet.set_name("Renamed");
        assert_eq!(sheet.name(), "Renamed");
    }
}
