/// Cell contents treated as a missing value when reading CSV data.
///
/// Mirrors the conventional NA markers written by spreadsheet and dataframe
/// tools, plus the empty cell.
const NA_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(value: &str) -> bool {
    NA_MARKERS.contains(&value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_and_blanks_are_missing() {
        assert!(is_missing(""));
        assert!(is_missing("   "));
        assert!(is_missing("NA"));
        assert!(is_missing(" NaN "));
        assert!(is_missing("null"));
    }

    #[test]
    fn test_values_are_not_missing() {
        assert!(!is_missing("0"));
        assert!(!is_missing("28.5"));
        assert!(!is_missing("na"));
    }
}
