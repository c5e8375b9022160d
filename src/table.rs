use serde::{Deserialize, Serialize};

use crate::gateway::SheetRecords;

/// Number of fixed leading columns in the sheet: the "Items" identifier
/// column plus one other fixed column. Everything after these is a date
/// column.
pub const FIXED_COLUMNS: usize = 2;

/// A single cell of a date column, tagged once at parse time.
///
/// The sheet stores everything as text; a cell is a quantity only when the
/// raw text is a plain unsigned integer literal. Anything else - including
/// the empty string - is kept verbatim as a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellValue {
    Quantity(u32),
    Comment(String),
}

impl CellValue {
    /// Parse raw cell text into a tagged value.
    ///
    /// Mirrors a digits-only check: "12" is a quantity, but "-3", " 12" and
    /// "low stock" are all comments.
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(n) = raw.parse::<u32>() {
                return CellValue::Quantity(n);
            }
        }
        CellValue::Comment(raw.to_string())
    }

    /// Render the value back to the text form the sheet stores.
    pub fn to_raw(&self) -> String {
        match self {
            CellValue::Quantity(n) => n.to_string(),
            CellValue::Comment(s) => s.clone(),
        }
    }
}

/// The fetched inventory table: one row per item, one value per date column.
///
/// Row order and column order are both stable and positional; a row's index
/// is its identity for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryTable {
    items: Vec<String>,
    date_labels: Vec<String>,
    /// cells[row][date_column], aligned with `items` and `date_labels`.
    cells: Vec<Vec<CellValue>>,
}

impl InventoryTable {
    /// Build a table from the gateway's raw records.
    ///
    /// The first two record fields are the fixed identifier columns; the
    /// remaining field names become date labels. Short rows are padded with
    /// empty cells so every row is index-aligned with the labels.
    pub fn from_records(records: &SheetRecords) -> Self {
        let date_labels: Vec<String> = records
            .fields
            .iter()
            .skip(FIXED_COLUMNS)
            .cloned()
            .collect();

        let mut items = Vec::with_capacity(records.rows.len());
        let mut cells = Vec::with_capacity(records.rows.len());

        for row in &records.rows {
            items.push(row.first().cloned().unwrap_or_default());

            let mut row_cells = Vec::with_capacity(date_labels.len());
            for c in 0..date_labels.len() {
                let raw = row.get(FIXED_COLUMNS + c).map(String::as_str).unwrap_or("");
                row_cells.push(CellValue::parse(raw));
            }
            cells.push(row_cells);
        }

        InventoryTable {
            items,
            date_labels,
            cells,
        }
    }

    /// Number of item rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item names, in row order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Date column labels, in sheet order.
    pub fn date_labels(&self) -> &[String] {
        &self.date_labels
    }

    /// Position of a date label among the date columns.
    pub fn date_position(&self, date: &str) -> Option<usize> {
        self.date_labels.iter().position(|d| d == date)
    }

    /// Zero-based sheet column index of a date label, counting the fixed
    /// leading columns. This is the index the column-letter encoder takes.
    pub fn sheet_column_index(&self, date: &str) -> Option<u32> {
        self.date_position(date)
            .map(|p| (FIXED_COLUMNS + p) as u32)
    }

    /// The cell for `row` under the date column at `date_pos`.
    pub fn cell(&self, row: usize, date_pos: usize) -> Option<&CellValue> {
        self.cells.get(row).and_then(|r| r.get(date_pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::SheetRecords;

    fn sample_records() -> SheetRecords {
        SheetRecords {
            fields: vec![
                "Items".to_string(),
                "Unit".to_string(),
                "5/1".to_string(),
                "5/2".to_string(),
            ],
            rows: vec![
                vec![
                    "Milk".to_string(),
                    "qt".to_string(),
                    "3".to_string(),
                    "".to_string(),
                ],
                vec!["Eggs".to_string(), "doz".to_string(), "out".to_string()],
            ],
        }
    }

    #[test]
    fn parse_tags_digit_strings_as_quantities() {
        assert_eq!(CellValue::parse("12"), CellValue::Quantity(12));
        assert_eq!(CellValue::parse("0"), CellValue::Quantity(0));
        assert_eq!(
            CellValue::parse("low stock"),
            CellValue::Comment("low stock".to_string())
        );
        // Signs and padding disqualify a quantity, same as a digits-only check
        assert_eq!(CellValue::parse("-3"), CellValue::Comment("-3".to_string()));
        assert_eq!(
            CellValue::parse(" 12"),
            CellValue::Comment(" 12".to_string())
        );
        assert_eq!(CellValue::parse(""), CellValue::Comment(String::new()));
    }

    #[test]
    fn from_records_splits_fixed_and_date_columns() {
        let table = InventoryTable::from_records(&sample_records());
        assert_eq!(table.len(), 2);
        assert_eq!(table.items(), ["Milk", "Eggs"]);
        assert_eq!(table.date_labels(), ["5/1", "5/2"]);
        assert_eq!(table.cell(0, 0), Some(&CellValue::Quantity(3)));
        assert_eq!(
            table.cell(1, 0),
            Some(&CellValue::Comment("out".to_string()))
        );
    }

    #[test]
    fn short_rows_pad_with_empty_comments() {
        let table = InventoryTable::from_records(&sample_records());
        // Eggs has no 5/2 value at all; Milk has an explicit empty string
        assert_eq!(table.cell(0, 1), Some(&CellValue::Comment(String::new())));
        assert_eq!(table.cell(1, 1), Some(&CellValue::Comment(String::new())));
    }

    #[test]
    fn sheet_column_index_counts_fixed_columns() {
        let table = InventoryTable::from_records(&sample_records());
        assert_eq!(table.sheet_column_index("5/1"), Some(2));
        assert_eq!(table.sheet_column_index("5/2"), Some(3));
        assert_eq!(table.sheet_column_index("6/1"), None);
    }
}
