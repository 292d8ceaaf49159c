use crossterm::style::Color;

/// Design tokens for the qcompass terminal UI.
///
/// All glyphs and borders must be sourced from this module so the ASCII
/// fallback stays complete.
pub mod colors {
    use super::Color;

    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod glyphs {
    pub const DEGREE: &str = "°";
    pub const ARROW: &str = "→";
    pub const SWAP: &str = "↔";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
}

pub mod glyphs_ascii {
    pub const DEGREE: &str = " deg";
    pub const ARROW: &str = "->";
    pub const SWAP: &str = "<->";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Degree,
    Arrow,
    Swap,
    Error,
    Warning,
}

impl Glyph {
    pub fn render(self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Glyph::Degree) => glyphs::DEGREE,
            (true, Glyph::Arrow) => glyphs::ARROW,
            (true, Glyph::Swap) => glyphs::SWAP,
            (true, Glyph::Error) => glyphs::ERROR,
            (true, Glyph::Warning) => glyphs::WARNING,
            (false, Glyph::Degree) => glyphs_ascii::DEGREE,
            (false, Glyph::Arrow) => glyphs_ascii::ARROW,
            (false, Glyph::Swap) => glyphs_ascii::SWAP,
            (false, Glyph::Error) => glyphs_ascii::ERROR,
            (false, Glyph::Warning) => glyphs_ascii::WARNING,
        }
    }
}
