//! Consumer of the counter channel.

use crate::context::{Channel, Subscription};
use crate::ui::provider::CounterContext;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BUTTON_TEXT, COUNT_TEXT, UNSET_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::cell::RefCell;
use std::rc::Rc;

pub const INCREMENT_LABEL: &str = "[ +1 ]";
pub const DECREMENT_LABEL: &str = "[ -1 ]";
const BUTTON_GAP: u16 = 2;
/// Buttons sit below the count line with one blank line between.
const BUTTON_ROW: u16 = 2;

/// The two on-screen controls.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trigger {
    Increment,
    Decrement,
}

impl Trigger {
    pub fn label(self) -> &'static str {
        match self {
            Trigger::Increment => INCREMENT_LABEL,
            Trigger::Decrement => DECREMENT_LABEL,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Trigger::Increment => Trigger::Decrement,
            Trigger::Decrement => Trigger::Increment,
        }
    }
}

#[derive(Default)]
struct Delivered {
    context: CounterContext,
    renders: u64,
    dirty: bool,
}

/// Renders whatever the channel last delivered.
///
/// The view keeps no counter state of its own. Pressing a trigger calls
/// through the delivered context; the displayed value only moves when the
/// provider publishes the result.
pub struct CounterView {
    delivered: Rc<RefCell<Delivered>>,
    _subscription: Subscription,
}

impl CounterView {
    pub fn attach(channel: &Channel<CounterContext>) -> Self {
        let delivered = Rc::new(RefCell::new(Delivered::default()));
        let slot = Rc::clone(&delivered);
        let subscription = channel.subscribe(move |context| {
            let mut slot = slot.borrow_mut();
            slot.context = context.clone();
            slot.renders += 1;
            slot.dirty = true;
        });
        Self {
            delivered,
            _subscription: subscription,
        }
    }

    /// A consumer with no provider above it: it only ever sees the unset
    /// placeholder.
    pub fn unprovided() -> Self {
        Self::attach(&Channel::default())
    }

    pub fn context(&self) -> CounterContext {
        self.delivered.borrow().context.clone()
    }

    pub fn count(&self) -> Option<i64> {
        self.delivered.borrow().context.count()
    }

    /// `count: N`, or `count: ` while unset.
    pub fn label(&self) -> String {
        match self.count() {
            Some(count) => format!("count: {count}"),
            None => "count: ".to_string(),
        }
    }

    /// Number of snapshots delivered so far, including the initial one.
    pub fn renders(&self) -> u64 {
        self.delivered.borrow().renders
    }

    /// Whether a snapshot arrived since the last call.
    pub fn take_dirty(&self) -> bool {
        std::mem::take(&mut self.delivered.borrow_mut().dirty)
    }

    pub fn press(&self, trigger: Trigger) {
        // Clone first: the trigger publishes back into our own slot.
        let context = self.context();
        match trigger {
            Trigger::Increment => context.increment(),
            Trigger::Decrement => context.decrement(),
        }
    }

    pub fn widget(&self, focus: Trigger) -> Paragraph<'static> {
        let count_line = match self.count() {
            Some(count) => Line::from(vec![
                Span::raw("count: "),
                Span::styled(
                    count.to_string(),
                    Style::default().fg(COUNT_TEXT).add_modifier(Modifier::BOLD),
                ),
            ]),
            None => Line::from(Span::styled("count: ", Style::default().fg(UNSET_TEXT))),
        };

        let button = |trigger: Trigger| {
            let style = if trigger == focus {
                Style::default()
                    .fg(BUTTON_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(BUTTON_TEXT)
            };
            Span::styled(trigger.label(), style)
        };
        let buttons = Line::from(vec![
            button(Trigger::Increment),
            Span::raw(" ".repeat(BUTTON_GAP as usize)),
            button(Trigger::Decrement),
        ]);

        Paragraph::new(vec![count_line, Line::from(""), buttons])
    }

    /// Which button, if any, covers `(column, row)` when drawn in `area`.
    pub fn button_at(area: Rect, column: u16, row: u16) -> Option<Trigger> {
        [Trigger::Increment, Trigger::Decrement]
            .into_iter()
            .find(|&trigger| {
                button_rect(area, trigger).is_some_and(|rect| {
                    column >= rect.x
                        && column < rect.x + rect.width
                        && row >= rect.y
                        && row < rect.y + rect.height
                })
            })
    }
}

fn button_rect(area: Rect, trigger: Trigger) -> Option<Rect> {
    if area.height <= BUTTON_ROW {
        return None;
    }
    let width = trigger.label().chars().count() as u16;
    let offset = match trigger {
        Trigger::Increment => 0,
        Trigger::Decrement => INCREMENT_LABEL.chars().count() as u16 + BUTTON_GAP,
    };
    let rect = Rect {
        x: area.x + offset,
        y: area.y + BUTTON_ROW,
        width,
        height: 1,
    };
    Some(rect.intersection(area)).filter(|r| r.width > 0)
}
