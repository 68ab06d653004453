use crate::collections::SafeIndex;

/// Read-only, two-level store of display strings: sections of rows.
///
/// Constructed once at start-up and never mutated afterwards. Indices are
/// 0-based; an out-of-range section reads as empty, while direct item access
/// with an unvalidated position is a caller bug and panics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListModel {
    sections: Vec<Vec<String>>,
}

impl ListModel {
    pub fn new(sections: Vec<Vec<String>>) -> Self {
        Self { sections }
    }

    /// The fixed demo dataset.
    pub fn sample() -> Self {
        let sections = vec![
            vec!["one", "two", "three"],
            vec!["one", "two", "three", "four", "five", "six"],
            vec!["one", "two", "three"],
        ];

        Self::new(
            sections
                .into_iter()
                .map(|rows| rows.into_iter().map(String::from).collect())
                .collect(),
        )
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of rows in `section`. An out-of-range section is empty, not an
    /// error.
    pub fn row_count(&self, section: usize) -> usize {
        self.sections.safe_item(section).map(Vec::len).unwrap_or(0)
    }

    /// The text stored at the position.
    ///
    /// The position must have been validated against `section_count` and
    /// `row_count` first.
    pub fn item(&self, section: usize, row: usize) -> &str {
        self.get(section, row).expect("list position out of bounds")
    }

    /// Bounds-checked lookup.
    pub fn get(&self, section: usize, row: usize) -> Option<&str> {
        self.sections
            .safe_item(section)
            .and_then(|rows| rows.safe_item(row))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_model() {
        let model = ListModel::default();
        assert_eq!(model.section_count(), 0);
        assert_eq!(model.row_count(0), 0);
        assert_eq!(model.get(0, 0), None);
    }

    #[test]
    fn test_row_count_matches_section_length() {
        let model = ListModel::sample();
        assert_eq!(model.row_count(0), 3);
        assert_eq!(model.row_count(1), 6);
        assert_eq!(model.row_count(2), 3);
    }

    #[test]
    fn test_row_count_out_of_range_is_zero() {
        let model = ListModel::sample();
        assert_eq!(model.row_count(3), 0);
        assert_eq!(model.row_count(usize::MAX), 0);
    }

    #[test]
    fn test_item_returns_stored_text() {
        let model = ListModel::sample();
        assert_eq!(model.item(0, 0), "one");
        assert_eq!(model.item(1, 3), "four");
        assert_eq!(model.item(2, 2), "three");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_item_out_of_range_panics() {
        let model = ListModel::sample();
        let _ = model.item(0, 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_item_invalid_section_panics() {
        let model = ListModel::sample();
        let _ = model.item(3, 0);
    }

    #[test]
    fn test_get_is_bounds_checked() {
        let model = ListModel::sample();
        assert_eq!(model.get(1, 5), Some("six"));
        assert_eq!(model.get(1, 6), None);
        assert_eq!(model.get(9, 0), None);
    }
}
