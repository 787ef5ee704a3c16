//! Scripted, terminal-free run of the component tree.

use crate::error::AppError;
use crate::ui::app::App;
use crate::ui::counter_view::Trigger;
use std::io::Write;

/// Parse a trigger script: `+` increments, `-` decrements.
pub fn parse_sequence(sequence: &str) -> Result<Vec<Trigger>, AppError> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, ch)| match ch {
            '+' => Ok(Trigger::Increment),
            '-' => Ok(Trigger::Decrement),
            ch => Err(AppError::InvalidSequence { ch, position }),
        })
        .collect()
}

/// Mount the tree, press each trigger in `sequence`, and write the view's
/// label after the mount and after every press.
///
/// The script is validated before anything is mounted or written.
pub fn run_headless(
    mount_id: &str,
    provided: bool,
    sequence: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let triggers = parse_sequence(sequence)?;
    let mut app = if provided {
        App::new(mount_id)
    } else {
        App::unprovided(mount_id)
    };

    writeln!(out, "{}", app.view().label())?;
    for trigger in triggers {
        app.press(trigger);
        writeln!(out, "{}", app.view().label())?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(provided: bool, sequence: &str) -> String {
        let mut out = Vec::new();
        run_headless("root", provided, sequence, &mut out).expect("headless run");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn empty_sequence_prints_initial_label() {
        assert_eq!(run(true, ""), "count: 0\n");
    }

    #[test]
    fn prints_label_after_each_press() {
        assert_eq!(run(true, "++-"), "count: 0\ncount: 1\ncount: 2\ncount: 1\n");
    }

    #[test]
    fn unprovided_presses_change_nothing() {
        assert_eq!(run(false, "+-"), "count: \ncount: \ncount: \n");
    }

    #[test]
    fn invalid_char_reports_position_and_writes_nothing() {
        let mut out = Vec::new();
        let err = run_headless("root", true, "+x", &mut out).unwrap_err();
        assert!(matches!(err, AppError::InvalidSequence { ch: 'x', position: 1 }));
        assert!(out.is_empty());
    }
}
