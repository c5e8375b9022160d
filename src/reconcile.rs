use crate::table::CellValue;

/// One line of the downloadable summary: item name plus the value that won
/// the precedence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub item: String,
    pub value: CellValue,
}

/// Derive the persisted column and the export rows from the current edits.
///
/// Per row: a non-empty comment wins over the quantity (they never coexist
/// in the persisted value); a row qualifies for export when its trimmed
/// comment is non-empty or its quantity is positive. Pure transform, no
/// hidden state.
///
/// # Arguments
/// * `items` - Item names, index-aligned with the edits
/// * `quantities` - Current quantity per row
/// * `comments` - Current comment per row
///
/// # Returns
/// * Persisted values for every row, and the filtered export rows
pub fn reconcile_rows(
    items: &[String],
    quantities: &[u32],
    comments: &[String],
) -> (Vec<CellValue>, Vec<ExportRow>) {
    let mut persisted = Vec::with_capacity(items.len());
    let mut exports = Vec::new();

    for (i, item) in items.iter().enumerate() {
        let quantity = quantities.get(i).copied().unwrap_or(0);
        let comment = comments.get(i).map(String::as_str).unwrap_or("");

        let value = if comment.is_empty() {
            CellValue::Quantity(quantity)
        } else {
            CellValue::Comment(comment.to_string())
        };

        if !comment.trim().is_empty() || quantity > 0 {
            exports.push(ExportRow {
                item: item.clone(),
                value: value.clone(),
            });
        }

        persisted.push(value);
    }

    (persisted, exports)
}
