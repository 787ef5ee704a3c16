use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Region inside the bordered body where the counter tree is drawn.
pub fn mount_rect(area: Rect) -> Rect {
    let body = layout_regions(area).1;
    Rect {
        x: body.x.saturating_add(2),
        y: body.y.saturating_add(1),
        width: body.width.saturating_sub(4),
        height: body.height.saturating_sub(2),
    }
}
