use color_eyre::eyre::Result;
use ratatui::{backend::TestBackend, Terminal};

use sectui::{
    action::Action,
    components::{Component, StatusBar},
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
fn test_shows_crate_name_and_hints() -> Result<()> {
    let mut bar = StatusBar::new();
    let backend = TestBackend::new(60, 6);
    let mut terminal = Terminal::new(backend)?;

    terminal.draw(|frame| {
        bar.draw(frame, frame.area()).unwrap();
    })?;

    let content = buffer_content(&terminal);
    assert!(content.contains("sectui"));
    assert!(content.contains("q quit"));

    Ok(())
}

#[test]
fn test_shows_latest_message() -> Result<()> {
    let mut bar = StatusBar::new();
    let backend = TestBackend::new(60, 6);
    let mut terminal = Terminal::new(backend)?;

    bar.update(Action::SystemMessage("Section 2: four".to_string()))?;
    terminal.draw(|frame| {
        bar.draw(frame, frame.area()).unwrap();
    })?;

    let content = buffer_content(&terminal);
    assert!(content.contains("Section 2: four"));

    Ok(())
}

#[test]
fn test_shows_errors() -> Result<()> {
    let mut bar = StatusBar::new();
    let backend = TestBackend::new(60, 6);
    let mut terminal = Terminal::new(backend)?;

    bar.update(Action::Error("draw failed".to_string()))?;
    terminal.draw(|frame| {
        bar.draw(frame, frame.area()).unwrap();
    })?;

    let content = buffer_content(&terminal);
    assert!(content.contains("Error: draw failed"));

    Ok(())
}
