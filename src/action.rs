use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    Help,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    Unselect,
    SystemMessage(String),
    Key(KeyEvent),
}
