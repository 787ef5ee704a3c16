use crate::config::Config;
use crate::error::AppError;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the interactive terminal UI until the user quits.
pub fn run(config: &Config, provided: bool) -> Result<(), AppError> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = if provided {
        App::new(config.ui.mount_id.clone())
    } else {
        App::unprovided(config.ui.mount_id.clone())
    };
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    loop {
        if app.take_redraw() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::warn!("event source closed, leaving UI loop");
                break;
            }
        }
    }

    tracing::info!(
        count = ?app.view().count(),
        "UI loop finished"
    );
    drop(events);
    drop(guard);
    Ok(())
}
