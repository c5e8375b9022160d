use std::collections::HashMap;

use serde::Serialize;

use crate::table::{CellValue, InventoryTable};

/// Editable state for one date column: a quantity and a comment per row,
/// index-aligned with the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateEdits {
    pub quantities: Vec<u32>,
    pub comments: Vec<String>,
}

impl DateEdits {
    /// Seed edits from the table's cells for the date column at `date_pos`.
    /// Quantity cells become the starting quantity; anything else becomes
    /// the starting comment, verbatim.
    fn seed(table: &InventoryTable, date_pos: usize) -> Self {
        let mut quantities = Vec::with_capacity(table.len());
        let mut comments = Vec::with_capacity(table.len());

        for row in 0..table.len() {
            match table.cell(row, date_pos) {
                Some(CellValue::Quantity(n)) => {
                    quantities.push(*n);
                    comments.push(String::new());
                }
                Some(CellValue::Comment(s)) => {
                    quantities.push(0);
                    comments.push(s.clone());
                }
                None => {
                    quantities.push(0);
                    comments.push(String::new());
                }
            }
        }

        DateEdits {
            quantities,
            comments,
        }
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Add one to a row's quantity. No ceiling. Returns false if the row
    /// does not exist.
    pub fn increment(&mut self, row: usize) -> bool {
        match self.quantities.get_mut(row) {
            Some(q) => {
                *q = q.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Subtract one from a row's quantity, clamped at zero.
    pub fn decrement(&mut self, row: usize) -> bool {
        match self.quantities.get_mut(row) {
            Some(q) => {
                *q = q.saturating_sub(1);
                true
            }
            None => false,
        }
    }

    pub fn set_quantity(&mut self, row: usize, quantity: u32) -> bool {
        match self.quantities.get_mut(row) {
            Some(q) => {
                *q = quantity;
                true
            }
            None => false,
        }
    }

    /// Overwrite a row's comment as free text, independent of its quantity.
    pub fn set_comment(&mut self, row: usize, comment: String) -> bool {
        match self.comments.get_mut(row) {
            Some(c) => {
                *c = comment;
                true
            }
            None => false,
        }
    }
}

/// One user session's edits, keyed by date label.
///
/// A date's entry is created lazily the first time that date is selected and
/// then reused for the rest of the session; nothing ever removes an entry.
/// The state is never persisted anywhere.
#[derive(Debug, Default)]
pub struct SessionState {
    edits: HashMap<String, DateEdits>,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }

    /// The edits for `date`, seeding them from the table on first access.
    /// Returns `None` when the date is not one of the table's columns.
    pub fn edits_for<'a>(
        &'a mut self,
        table: &InventoryTable,
        date: &str,
    ) -> Option<&'a mut DateEdits> {
        let date_pos = table.date_position(date)?;
        Some(
            self.edits
                .entry(date.to_string())
                .or_insert_with(|| DateEdits::seed(table, date_pos)),
        )
    }

    /// Already-seeded edits for `date`, if any.
    pub fn get(&self, date: &str) -> Option<&DateEdits> {
        self.edits.get(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::SheetRecords;

    fn table() -> InventoryTable {
        InventoryTable::from_records(&SheetRecords {
            fields: vec![
                "Items".to_string(),
                "Unit".to_string(),
                "5/1".to_string(),
            ],
            rows: vec![
                vec!["Milk".to_string(), "qt".to_string(), "3".to_string()],
                vec!["Eggs".to_string(), "doz".to_string(), "out".to_string()],
            ],
        })
    }

    #[test]
    fn seeding_splits_quantities_and_comments() {
        let table = table();
        let mut session = SessionState::new();
        let edits = session.edits_for(&table, "5/1").unwrap();

        assert_eq!(edits.quantities, [3, 0]);
        assert_eq!(edits.comments, ["", "out"]);
    }

    #[test]
    fn reselecting_a_date_reuses_state() {
        let table = table();
        let mut session = SessionState::new();

        session.edits_for(&table, "5/1").unwrap().increment(0);
        // Second selection sees the edit, not a fresh seed
        let edits = session.edits_for(&table, "5/1").unwrap();
        assert_eq!(edits.quantities[0], 4);
    }

    #[test]
    fn unknown_date_is_not_seeded() {
        let table = table();
        let mut session = SessionState::new();
        assert!(session.edits_for(&table, "6/9").is_none());
        assert!(session.get("6/9").is_none());
    }

    #[test]
    fn decrement_clamps_at_zero() {
        let table = table();
        let mut session = SessionState::new();
        let edits = session.edits_for(&table, "5/1").unwrap();

        assert!(edits.decrement(1));
        assert!(edits.decrement(1));
        assert_eq!(edits.quantities[1], 0);
    }

    #[test]
    fn direct_entry_overwrites() {
        let table = table();
        let mut session = SessionState::new();
        let edits = session.edits_for(&table, "5/1").unwrap();

        assert!(edits.set_quantity(0, 10));
        assert!(edits.set_comment(0, "spoiled".to_string()));
        assert_eq!(edits.quantities[0], 10);
        assert_eq!(edits.comments[0], "spoiled");
    }

    #[test]
    fn out_of_range_rows_are_rejected() {
        let table = table();
        let mut session = SessionState::new();
        let edits = session.edits_for(&table, "5/1").unwrap();

        assert!(!edits.increment(99));
        assert!(!edits.set_comment(99, "x".to_string()));
    }
}
