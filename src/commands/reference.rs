use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::json::{to_line, ReferenceEvent};
use crate::ui::views::reference::render_reference;

pub fn cmd_reference(ui: &UiContext) -> Result<()> {
    if ui.json {
        println!("{}", to_line(&ReferenceEvent::new()));
    } else {
        print!("{}", render_reference(ui.color, ui.unicode));
    }
    Ok(())
}
