use crossterm::style::Stylize;

use crate::ui::theme::{self, Glyph};
use qcompass::Axis;

/// One-line summary of a successful conversion, e.g. `QCAD 90° → Compass 0.00°`.
pub fn render_conversion(
    from: Axis,
    input: &str,
    output: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let deg = Glyph::Degree.render(supports_unicode);
    let arrow = Glyph::Arrow.render(supports_unicode);
    let value = format!("{}{}", output, deg);
    let value = if supports_color {
        format!("{}", value.with(theme::colors::INFO).bold())
    } else {
        value
    };
    format!(
        "{} {}{} {} {} {}",
        from,
        input.trim(),
        deg,
        arrow,
        from.other(),
        value
    )
}

/// Hint for input that is not a number; the target field stays empty.
pub fn render_not_a_number(
    from: Axis,
    input: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Glyph::Warning.render(supports_unicode);
    let icon = if supports_color {
        format!("{}", icon.with(theme::colors::WARNING))
    } else {
        icon.to_string()
    };
    let message = format!(
        "{:?} is not a {} angle; {} left empty",
        input,
        from,
        from.other()
    );
    let message = if supports_color {
        format!("{}", message.with(theme::colors::DIM))
    } else {
        message
    };
    format!("{} {}", icon, message)
}
