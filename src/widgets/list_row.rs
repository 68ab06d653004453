use ratatui::prelude::*;

use crate::model::CellContent;

/// A single list row: primary text followed by its dimmed secondary label.
#[derive(Clone, Debug)]
pub struct ListRow {
    content: CellContent,
}

impl ListRow {
    pub fn new(content: CellContent) -> Self {
        Self { content }
    }
}

impl From<ListRow> for Text<'static> {
    fn from(value: ListRow) -> Self {
        Text::from(Line::from(vec![
            Span::raw(value.content.text),
            Span::raw("  "),
            Span::styled(
                value.content.detail,
                Style::default().fg(Color::DarkGray).italic(),
            ),
        ]))
    }
}
