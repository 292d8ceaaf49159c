use crossterm::style::Stylize;

use crate::ui::theme::{self, Glyph};
use qcompass::session::{DisabledAction, COMMAND_HELP};
use qcompass::{Axis, InteractionState};

fn field(axis: Axis, text: &str, supports_color: bool) -> String {
    let value = format!("[{}]", text);
    let value = if supports_color {
        format!("{}", value.with(theme::colors::INFO).bold())
    } else {
        value
    };
    format!("{} {}", axis, value)
}

/// `QCAD [90]  ↔  Compass [0.00]`; field texts are shown verbatim.
pub fn render_state(
    state: &InteractionState,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let separator = format!("  {}  ", Glyph::Swap.render(supports_unicode));
    Axis::ALL
        .iter()
        .map(|&axis| field(axis, state.text(axis), supports_color))
        .collect::<Vec<_>>()
        .join(&separator)
}

/// State plus provenance, for the `show` command.
pub fn render_state_detail(
    state: &InteractionState,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let last = state
        .last_edited()
        .map(|axis| axis.label())
        .unwrap_or("none");
    format!(
        "{}\nLast edited: {}",
        render_state(state, supports_color, supports_unicode),
        last
    )
}

pub fn render_disabled(action: DisabledAction, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Glyph::Warning.render(supports_unicode);
    let icon = if supports_color {
        format!("{}", icon.with(theme::colors::WARNING))
    } else {
        icon.to_string()
    };
    format!("{} nothing to {}: both fields are empty", icon, action.name())
}

pub fn render_help() -> String {
    let width = COMMAND_HELP
        .iter()
        .map(|(usage, _)| usage.len())
        .max()
        .unwrap_or(0);
    let mut out = String::from("Commands:\n");
    for (usage, description) in COMMAND_HELP {
        out.push_str(&format!("  {:<width$}  {}\n", usage, description, width = width));
    }
    out
}

pub fn render_error(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Glyph::Error.render(supports_unicode);
    if supports_color {
        format!("{} {}", icon.with(theme::colors::ERROR), message)
    } else {
        format!("{} {}", icon, message)
    }
}
