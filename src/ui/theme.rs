use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x61, 0xaf, 0xef);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const COUNT_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const UNSET_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const BUTTON_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
