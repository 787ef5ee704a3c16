use crate::context::Channel;
use crate::ui::counter_view::{CounterView, Trigger};
use crate::ui::layout::mount_rect;
use crate::ui::provider::CounterProvider;
use ratatui::layout::Rect;

/// The mounted component tree plus the shell state around it.
pub struct App {
    provider: Option<CounterProvider>,
    view: CounterView,
    mount_id: String,
    focus: Trigger,
    size: Option<(u16, u16)>,
    should_quit: bool,
    needs_redraw: bool,
}

impl App {
    /// Mount a provider into a fresh channel and attach the view under it.
    pub fn new(mount_id: impl Into<String>) -> Self {
        let channel = Channel::default();
        let provider = CounterProvider::mount(&channel);
        let view = CounterView::attach(&channel);
        Self::assemble(Some(provider), view, mount_id.into())
    }

    /// Mount only the view, with nothing publishing above it.
    pub fn unprovided(mount_id: impl Into<String>) -> Self {
        Self::assemble(None, CounterView::unprovided(), mount_id.into())
    }

    fn assemble(provider: Option<CounterProvider>, view: CounterView, mount_id: String) -> Self {
        tracing::info!(
            mount_id = %mount_id,
            provided = provider.is_some(),
            "component tree mounted"
        );
        Self {
            provider,
            view,
            mount_id,
            focus: Trigger::Increment,
            size: None,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn view(&self) -> &CounterView {
        &self.view
    }

    pub fn provider(&self) -> Option<&CounterProvider> {
        self.provider.as_ref()
    }

    pub fn is_provided(&self) -> bool {
        self.provider.is_some()
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    pub fn focus(&self) -> Trigger {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.other();
        self.needs_redraw = true;
    }

    pub fn set_focus(&mut self, trigger: Trigger) {
        if self.focus != trigger {
            self.focus = trigger;
            self.needs_redraw = true;
        }
    }

    pub fn press(&mut self, trigger: Trigger) {
        self.view.press(trigger);
    }

    pub fn press_focused(&mut self) {
        self.press(self.focus);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.needs_redraw = true;
    }

    /// Area the view occupies on the last known screen size.
    pub fn mount_area(&self) -> Option<Rect> {
        self.size
            .map(|(cols, rows)| mount_rect(Rect::new(0, 0, cols, rows)))
    }

    /// Whether a frame should be drawn. Clears the pending flags.
    pub fn take_redraw(&mut self) -> bool {
        let published = self.view.take_dirty();
        std::mem::take(&mut self.needs_redraw) || published
    }
}
