use crate::reconcile::ExportRow;

/// Header of the downloadable summary.
pub const CSV_HEADER: &str = "Items,Quantity/Comment";

/// A finished export artifact, ready to hand to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvArtifact {
    pub filename: String,
    pub content: String,
}

/// Build the two-column CSV for the day's qualifying rows
///
/// Fields containing commas, quotes or newlines are quoted, with embedded
/// quotes doubled.
///
/// # Arguments
/// * `rows` - The export rows, already filtered by the reconciler
///
/// # Returns
/// * `String` - CSV content including the header row
///
/// # Examples
/// ```
/// use inventory_tracker::export::to_csv;
///
/// let csv = to_csv(&[]);
/// assert_eq!(csv, "Items,Quantity/Comment\n");
/// ```
pub fn to_csv(rows: &[ExportRow]) -> String {
    let mut csv_content = String::new();
    csv_content.push_str(CSV_HEADER);
    csv_content.push('\n');

    for row in rows {
        push_field(&mut csv_content, &row.item);
        csv_content.push(',');
        push_field(&mut csv_content, &row.value.to_raw());
        csv_content.push('\n');
    }

    csv_content
}

fn push_field(out: &mut String, value: &str) {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        let escaped = value.replace("\"", "\"\"");
        out.push('"');
        out.push_str(&escaped);
        out.push('"');
    } else {
        out.push_str(value);
    }
}

/// Filename for a date's export: slashes in the label become dashes.
pub fn export_filename(date: &str) -> String {
    format!("{}_inventory.csv", date.replace('/', "-"))
}

/// Bundle the rows for `date` into a named artifact.
pub fn build_artifact(date: &str, rows: &[ExportRow]) -> CsvArtifact {
    CsvArtifact {
        filename: export_filename(date),
        content: to_csv(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::CellValue;

    fn row(item: &str, value: CellValue) -> ExportRow {
        ExportRow {
            item: item.to_string(),
            value,
        }
    }

    #[test]
    fn header_and_rows() {
        let csv = to_csv(&[
            row("Milk", CellValue::Quantity(4)),
            row("Eggs", CellValue::Comment("out".to_string())),
        ]);
        assert_eq!(csv, "Items,Quantity/Comment\nMilk,4\nEggs,out\n");
    }

    #[test]
    fn escapes_commas_and_quotes() {
        let csv = to_csv(&[row(
            "Milk, whole",
            CellValue::Comment("say \"hi\"".to_string()),
        )]);
        assert_eq!(
            csv,
            "Items,Quantity/Comment\n\"Milk, whole\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn filename_replaces_slashes() {
        assert_eq!(export_filename("5/1"), "5-1_inventory.csv");
        assert_eq!(export_filename("12/31"), "12-31_inventory.csv");
    }
}
