//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counter_context::context::Channel;
use counter_context::ui::counter_view::CounterView;
use counter_context::ui::provider::{CounterContext, CounterProvider};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use std::path::PathBuf;
use tempfile::TempDir;

/// Provider and view mounted on one channel, the way the app wires them.
pub fn mounted() -> (Channel<CounterContext>, CounterProvider, CounterView) {
    let channel = Channel::default();
    let provider = CounterProvider::mount(&channel);
    let view = CounterView::attach(&channel);
    (channel, provider, view)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Text of one buffer row with trailing blanks trimmed.
pub fn row_text(buf: &Buffer, y: u16) -> String {
    let area = buf.area;
    (area.x..area.x + area.width)
        .map(|x| buf[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
