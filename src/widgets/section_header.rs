use ratatui::prelude::*;

use crate::model::HeaderContent;

/// Section header block.
///
/// Header emphasis grows with the section index: the block is `scale` rows
/// tall, with the title on the last row.
#[derive(Clone, Debug)]
pub struct SectionHeader {
    content: HeaderContent,
}

impl SectionHeader {
    pub fn new(content: HeaderContent) -> Self {
        Self { content }
    }

    /// Rendered height in rows.
    pub fn height(&self) -> usize {
        self.content.scale.max(1)
    }
}

impl From<SectionHeader> for Text<'static> {
    fn from(value: SectionHeader) -> Self {
        let mut lines = vec![Line::default(); value.height() - 1];
        lines.push(Line::styled(
            value.content.text,
            Style::default().bold().underlined(),
        ));
        Text::from(lines)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{ListModel, ListSource};

    fn header(text: &str, scale: usize) -> SectionHeader {
        SectionHeader::new(HeaderContent {
            text: text.to_string(),
            scale,
        })
    }

    #[test]
    fn test_height_equals_scale() {
        assert_eq!(header("Section 1", 1).height(), 1);
        assert_eq!(header("Section 3", 3).height(), 3);
    }

    #[test]
    fn test_zero_scale_still_renders_one_row() {
        assert_eq!(header("Section ?", 0).height(), 1);
        let text = Text::from(header("Section ?", 0));
        assert_eq!(text.height(), 1);
    }

    #[test]
    fn test_title_sits_on_last_row() {
        let text = Text::from(header("Section 2", 2));
        assert_eq!(text.height(), 2);
        assert_eq!(text.lines[0].width(), 0);
        assert_eq!(text.lines[1].spans[0].content, "Section 2");
    }

    #[test]
    fn test_heights_grow_with_section_index() {
        let model = ListModel::sample();
        let heights: Vec<_> = (0..ListSource::section_count(&model))
            .map(|s| SectionHeader::new(model.header_content(s)).height())
            .collect();
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
    }
}
