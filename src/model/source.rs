use crate::model::ListModel;

/// Fixed secondary label shown next to every row.
pub const DETAIL_TEXT: &str = "Foop";

/// Content for a single rendered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellContent {
    pub text: String,
    pub detail: String,
}

/// Content for a section header.
///
/// `scale` grows linearly with the section index; the header widget turns it
/// into rendered height, so later sections carry visibly heavier headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderContent {
    pub text: String,
    pub scale: usize,
}

/// Render-data provider for a sectioned list.
///
/// The view layer drives rendering exclusively through these callbacks:
/// section count, then row count per section, then cell content per visible
/// row and header content per visible section.
pub trait ListSource {
    fn section_count(&self) -> usize;

    fn row_count(&self, section: usize) -> usize;

    /// Content for the row at the position.
    ///
    /// The position must have been validated against the counts first.
    fn cell_content(&self, section: usize, row: usize) -> CellContent;

    fn header_content(&self, section: usize) -> HeaderContent;

    fn total_rows(&self) -> usize {
        (0..self.section_count()).map(|s| self.row_count(s)).sum()
    }

    /// Maps a flat row index back to its `(section, row)` position.
    fn locate(&self, row: usize) -> Option<(usize, usize)> {
        let mut remaining = row;
        for section in 0..self.section_count() {
            let count = self.row_count(section);
            if remaining < count {
                return Some((section, remaining));
            }
            remaining -= count;
        }
        None
    }
}

impl ListSource for ListModel {
    fn section_count(&self) -> usize {
        ListModel::section_count(self)
    }

    fn row_count(&self, section: usize) -> usize {
        ListModel::row_count(self, section)
    }

    fn cell_content(&self, section: usize, row: usize) -> CellContent {
        CellContent {
            text: self.item(section, row).to_string(),
            detail: DETAIL_TEXT.to_string(),
        }
    }

    fn header_content(&self, section: usize) -> HeaderContent {
        HeaderContent {
            text: format!("Section {}", section + 1),
            scale: section + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_header_text_is_one_based() {
        let model = ListModel::sample();
        assert_eq!(model.header_content(0).text, "Section 1");
        assert_eq!(model.header_content(1).text, "Section 2");
        assert_eq!(model.header_content(2).text, "Section 3");
    }

    #[test]
    fn test_header_scale_grows_with_section() {
        let model = ListModel::sample();
        let scales: Vec<_> = (0..ListSource::section_count(&model))
            .map(|s| model.header_content(s).scale)
            .collect();
        assert_eq!(scales, vec![1, 2, 3]);
    }

    #[test]
    fn test_cell_content_carries_detail_label() {
        let model = ListModel::sample();
        let cell = model.cell_content(1, 3);
        assert_eq!(cell.text, "four");
        assert_eq!(cell.detail, DETAIL_TEXT);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_cell_content_out_of_range_panics() {
        let model = ListModel::sample();
        let _ = model.cell_content(0, 3);
    }

    #[test]
    fn test_total_rows() {
        let model = ListModel::sample();
        assert_eq!(model.total_rows(), 12);
        assert_eq!(ListModel::default().total_rows(), 0);
    }

    #[test]
    fn test_locate_inverts_flattening() {
        let model = ListModel::sample();
        assert_eq!(model.locate(0), Some((0, 0)));
        assert_eq!(model.locate(2), Some((0, 2)));
        assert_eq!(model.locate(3), Some((1, 0)));
        assert_eq!(model.locate(8), Some((1, 5)));
        assert_eq!(model.locate(9), Some((2, 0)));
        assert_eq!(model.locate(11), Some((2, 2)));
    }

    #[test]
    fn test_locate_out_of_range() {
        let model = ListModel::sample();
        assert_eq!(model.locate(12), None);
        assert_eq!(ListModel::default().locate(0), None);
    }

    #[test]
    fn test_locate_skips_empty_sections() {
        let model = ListModel::new(vec![
            vec![],
            vec!["only".to_string()],
            vec![],
            vec!["last".to_string()],
        ]);
        assert_eq!(model.locate(0), Some((1, 0)));
        assert_eq!(model.locate(1), Some((3, 0)));
        assert_eq!(model.locate(2), None);
    }
}
