use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACCENT: Color = Color::Rgb(0x00, 0x7a, 0xff);
pub const MUTED: Color = Color::Rgb(0x6c, 0x75, 0x7d);
pub const STATUS_OK: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const STATUS_ERROR: Color = Color::Rgb(0xff, 0x3b, 0x30);
pub const BANNER_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
