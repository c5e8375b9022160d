/// Convert a zero-based column index to its spreadsheet letter label
///
/// Column labels follow the bijective base-26 scheme used by spreadsheet
/// applications: digit values run 1-26 (written A-Z) and there is no zero
/// digit, so the sequence goes A, B, ..., Z, AA, AB, ... The `n / 26 - 1`
/// step below is the borrow that distinguishes this from naive base
/// conversion.
///
/// # Arguments
/// * `index` - Zero-based column index (0 = "A")
///
/// # Returns
/// * `String` - The letter label for the column
///
/// # Examples
/// ```
/// use inventory_tracker::column::column_letter;
///
/// assert_eq!(column_letter(0), "A");
/// assert_eq!(column_letter(25), "Z");
/// assert_eq!(column_letter(26), "AA");
/// assert_eq!(column_letter(52), "BA");
/// ```
pub fn column_letter(index: u32) -> String {
    let mut label = String::new();
    let mut n = index as i64;

    while n >= 0 {
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        n = n / 26 - 1;
    }

    label
}

/// Convert a column letter label back to its zero-based index
///
/// Inverse of [`column_letter`]. Case-insensitive; returns `None` for the
/// empty string or any non-alphabetic character.
///
/// # Arguments
/// * `label` - Letter label such as "A" or "AZ"
///
/// # Returns
/// * `Option<u32>` - Zero-based column index, or `None` if the label is not
///   a valid column reference
///
/// # Examples
/// ```
/// use inventory_tracker::column::column_index;
///
/// assert_eq!(column_index("A"), Some(0));
/// assert_eq!(column_index("AA"), Some(26));
/// assert_eq!(column_index("a1"), None);
/// ```
pub fn column_index(label: &str) -> Option<u32> {
    if label.is_empty() {
        return None;
    }

    let mut value: u32 = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A' + 1) as u32;
        value = value.checked_mul(26)?.checked_add(digit)?;
    }

    Some(value - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        for n in 0..26u32 {
            let expected = ((b'A' + n as u8) as char).to_string();
            assert_eq!(column_letter(n), expected);
        }
    }

    #[test]
    fn double_letters() {
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(51), "AZ");
        assert_eq!(column_letter(52), "BA");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn index_inverts_letter() {
        for n in [0, 1, 25, 26, 51, 52, 700, 701, 702, 18277] {
            assert_eq!(column_index(&column_letter(n)), Some(n));
        }
    }

    #[test]
    fn index_is_case_insensitive() {
        assert_eq!(column_index("az"), Some(51));
        assert_eq!(column_index("Az"), Some(51));
    }

    #[test]
    fn index_rejects_garbage() {
        assert_eq!(column_index(""), None);
        assert_eq!(column_index("A1"), None);
        assert_eq!(column_index("-"), None);
    }
}
