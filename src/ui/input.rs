use crate::ui::app::App;
use crate::ui::counter_view::{CounterView, Trigger};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
            app.set_focus(Trigger::Increment);
            app.press(Trigger::Increment);
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => {
            app.set_focus(Trigger::Decrement);
            app.press(Trigger::Decrement);
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => app.focus_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.press_focused(),
        _ => {}
    }
}

/// Left click on a button presses it. Everything else is ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(area) = app.mount_area() else {
        return;
    };
    if let Some(trigger) = CounterView::button_at(area, mouse.column, mouse.row) {
        app.set_focus(trigger);
        app.press(trigger);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
