//! Terminal abstraction
//!
//! [`TuiLike`] is implemented by the crossterm terminal in [`real`] and by the
//! headless [`test`] terminal, so the runner can be driven without a tty.

pub mod event_source;
pub mod real;

use std::{future::Future, pin::Pin};

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};

pub type IO = std::io::Stdout;
pub fn io() -> IO {
    std::io::stdout()
}
pub type Frame<'a> = ratatui::Frame<'a>;

/// Terminal input and timer events, as produced by [`TuiLike::next`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Init,
    Quit,
    Error,
    Closed,
    Tick,
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

pub trait TuiLike: Send {
    /// Switch to raw mode and start producing events
    fn enter(&mut self) -> Result<()>;
    /// Stop producing events and restore the terminal
    fn exit(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: ratatui::prelude::Rect) -> Result<()>;
    fn size(&self) -> Result<ratatui::prelude::Size>;
    /// Next event, or `None` once the terminal has no more input
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
