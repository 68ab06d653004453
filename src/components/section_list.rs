use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::Component;
use crate::{
    action::Action,
    config::Config,
    model::ListSource,
    widgets::{ListRow, ScrollableList, SectionHeader},
};

/// The view-owning component.
///
/// Renders the injected source as one scrollable list, a header item per
/// section followed by that section's rows. Selection runs over rows only;
/// headers are skipped when translating it to a list-item index.
pub struct SectionList {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    source: Box<dyn ListSource>,
    list_state: ListState,
    selected: Option<usize>,
}

impl SectionList {
    pub fn new(source: Box<dyn ListSource>) -> Self {
        Self {
            command_tx: None,
            config: Config::default(),
            source,
            list_state: ListState::default(),
            selected: None,
        }
    }

    /// Index of a flat row in the rendered item list, where every section
    /// contributes one header item before its rows.
    fn item_index(&self, row: usize) -> Option<usize> {
        let (section, _) = self.source.locate(row)?;
        Some(row + section + 1)
    }

    fn announce_selection(&self) -> Result<()> {
        if let (Some(row), Some(tx)) = (self.selected, &self.command_tx) {
            if let Some((section, row_in_section)) = self.source.locate(row) {
                let header = self.source.header_content(section);
                let cell = self.source.cell_content(section, row_in_section);
                tx.send(Action::SystemMessage(format!(
                    "{}: {}",
                    header.text, cell.text
                )))?;
            }
        }
        Ok(())
    }
}

impl ScrollableList for SectionList {
    fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn len(&self) -> usize {
        self.source.total_rows()
    }
}

impl Component for SectionList {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollUp => {
                self.scroll_up();
                self.announce_selection()?;
            }
            Action::ScrollDown => {
                self.scroll_down();
                self.announce_selection()?;
            }
            Action::ScrollToTop => {
                self.scroll_to_top();
                self.announce_selection()?;
            }
            Action::ScrollToBottom => {
                self.scroll_to_bottom();
                self.announce_selection()?;
            }
            Action::Unselect => {
                self.select(None);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let padding = Padding::new(1, 1, 1, 1);

        if self.source.section_count() == 0 {
            let block = Block::default().padding(padding);
            let empty = Paragraph::new("Nothing to display")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(empty, inner);
            return Ok(());
        }

        let mut items: Vec<ListItem> = Vec::new();
        for section in 0..self.source.section_count() {
            let header = SectionHeader::new(self.source.header_content(section));
            items.push(ListItem::new(Text::from(header)));
            for row in 0..self.source.row_count(section) {
                let cell = ListRow::new(self.source.cell_content(section, row));
                items.push(ListItem::new(Text::from(cell)));
            }
        }

        self.list_state
            .select(self.selected.and_then(|row| self.item_index(row)));

        let list = List::new(items)
            .block(Block::default().padding(padding))
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().reversed())
            .direction(ListDirection::TopToBottom);

        f.render_stateful_widget(list, area, &mut self.list_state);

        Ok(())
    }
}
