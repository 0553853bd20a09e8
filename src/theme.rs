//! Color palette
//!
//! Feed colors are RGB triples so new notifications can be blended in from
//! the background.

pub mod feed {
    use ratatui::style::Color;

    pub const BACKGROUND: (u8, u8, u8) = (0, 0, 0);
    pub const USER: (u8, u8, u8) = (135, 206, 250);
    pub const TEXT: (u8, u8, u8) = (220, 220, 220);
    pub const REF: (u8, u8, u8) = (255, 215, 95);
    pub const REPO: (u8, u8, u8) = (175, 135, 255);
    pub const TIMESTAMP: (u8, u8, u8) = (128, 128, 128);
    pub const REVISIONS: (u8, u8, u8) = (110, 110, 110);

    pub const BORDER: Color = Color::Cyan;
    pub const PLACEHOLDER: Color = Color::DarkGray;
}

pub mod status {
    use ratatui::style::Color;

    pub const CONNECTING: Color = Color::Yellow;
    pub const OPEN: Color = Color::Green;
    pub const CLOSED: Color = Color::Red;
    pub const TEXT: Color = Color::DarkGray;
    pub const WARNING: Color = Color::Yellow;
}

pub mod help {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Cyan;
    pub const KEY: Color = Color::Yellow;
    pub const DESCRIPTION: Color = Color::White;
    pub const FOOTER: Color = Color::DarkGray;
    pub const BACKGROUND: Color = Color::Black;
}
