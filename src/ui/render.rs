use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, mount_rect};
use crate::ui::theme::GLOBAL_BORDER;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.mount_id(), app.is_provided()).widget(), header);

    frame.render_widget(Clear, body);
    frame.render_widget(
        Block::default()
            .title(format!(" #{} ", app.mount_id()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
        body,
    );
    frame.render_widget(app.view().widget(app.focus()), mount_rect(area));

    frame.render_widget(Footer::new().widget(footer), footer);
}
