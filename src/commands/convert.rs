use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::json::{to_line, ConversionEvent};
use crate::ui::views::conversion::{render_conversion, render_not_a_number};
use qcompass::convert::convert_text;
use qcompass::Axis;

/// One-shot conversion of `input`, expressed in `from`.
///
/// Unparseable input is not an error: JSON carries an empty `output`, text
/// mode prints a hint on stderr and nothing on stdout.
pub fn cmd_convert(from: Axis, input: &str, ui: &UiContext) -> Result<()> {
    let output = convert_text(from, input);

    if ui.json {
        println!("{}", to_line(&ConversionEvent::new(from, input, &output)));
    } else if output.is_empty() {
        eprintln!(
            "{}",
            render_not_a_number(from, input, ui.color, ui.unicode)
        );
    } else {
        println!(
            "{}",
            render_conversion(from, input, &output, ui.color, ui.unicode)
        );
    }

    Ok(())
}
