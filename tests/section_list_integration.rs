use color_eyre::eyre::Result;
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc;

use sectui::{
    action::Action,
    components::{Component, SectionList},
    model::ListModel,
    widgets::ScrollableList,
};

fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect::<Vec<_>>()
        .join("")
}

#[test]
fn test_renders_headers_and_rows() -> Result<()> {
    let mut list = SectionList::new(Box::new(ListModel::sample()));
    let backend = TestBackend::new(40, 30);
    let mut terminal = Terminal::new(backend)?;

    terminal.draw(|frame| {
        list.draw(frame, frame.area()).unwrap();
    })?;

    let content = buffer_content(&terminal);
    assert!(content.contains("Section 1"));
    assert!(content.contains("Section 2"));
    assert!(content.contains("Section 3"));
    assert!(content.contains("one"));
    assert!(content.contains("four"));
    assert!(content.contains("Foop"));

    Ok(())
}

#[test]
fn test_renders_placeholder_without_sections() -> Result<()> {
    let mut list = SectionList::new(Box::new(ListModel::default()));
    let backend = TestBackend::new(40, 10);
    let mut terminal = Terminal::new(backend)?;

    terminal.draw(|frame| {
        list.draw(frame, frame.area()).unwrap();
    })?;

    let content = buffer_content(&terminal);
    assert!(content.contains("Nothing to display"));

    Ok(())
}

#[test]
fn test_scroll_actions_drive_selection() -> Result<()> {
    let mut list = SectionList::new(Box::new(ListModel::sample()));
    let (tx, mut rx) = mpsc::unbounded_channel();
    list.register_action_handler(tx)?;

    list.update(Action::ScrollDown)?;
    assert_eq!(list.selected(), Some(0));
    assert_eq!(
        rx.try_recv()?,
        Action::SystemMessage("Section 1: one".into())
    );

    list.update(Action::ScrollToBottom)?;
    assert_eq!(list.selected(), Some(11));
    assert_eq!(
        rx.try_recv()?,
        Action::SystemMessage("Section 3: three".into())
    );

    list.update(Action::Unselect)?;
    assert_eq!(list.selected(), None);

    Ok(())
}

#[test]
fn test_selection_survives_redraws() -> Result<()> {
    let mut list = SectionList::new(Box::new(ListModel::sample()));
    let backend = TestBackend::new(40, 30);
    let mut terminal = Terminal::new(backend)?;

    list.update(Action::ScrollDown)?;
    list.update(Action::ScrollDown)?;

    for _ in 0..3 {
        terminal.draw(|frame| {
            list.draw(frame, frame.area()).unwrap();
        })?;
    }

    assert_eq!(list.selected(), Some(1));

    Ok(())
}
