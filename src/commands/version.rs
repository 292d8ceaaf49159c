use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::json::{to_line, VersionEvent};
use crate::ui::views::version::render_version;

pub fn cmd_version(ui: &UiContext) -> Result<()> {
    if ui.json {
        println!("{}", to_line(&VersionEvent::new()));
    } else {
        print!(
            "{}",
            render_version(env!("CARGO_PKG_VERSION"), ui.color, ui.unicode)
        );
    }
    Ok(())
}
