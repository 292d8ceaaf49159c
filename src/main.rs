//! qcompass CLI - QCAD angle ↔ compass bearing converter
//!
//! Usage: qcompass [COMMAND]
//!
//! Commands:
//!   to-compass   Convert a QCAD angle to a compass bearing
//!   to-qcad      Convert a compass bearing to a QCAD angle
//!   reference    Show landmark angles and formulas
//!   interactive  Edit both fields line by line (default)
//!   version      Show version information

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use qcompass::config::{Config, LoadedConfig};
use qcompass::presentation::{Cli, Commands};
use qcompass::Axis;

use crate::ui::context::UiContext;
use crate::ui::json::{to_line, ErrorEvent, WarningEvent};
use crate::ui::theme::Glyph;
use crate::ui::views::session::render_error;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loaded = match Config::resolve(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            // No config to style the message with; fall back to defaults.
            let ui = UiContext::new(cli.json, cli.color, &Config::default());
            report_error(&anyhow::Error::new(e), &ui);
            std::process::exit(1);
        }
    };

    let ui = UiContext::new(cli.json, cli.color, &loaded.config);
    report_config_warnings(&loaded, &ui);

    if let Err(e) = run(cli.command, &ui) {
        report_error(&e, &ui);
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>, ui: &UiContext) -> Result<()> {
    match command {
        Some(Commands::ToCompass { angle }) => commands::convert::cmd_convert(Axis::Qcad, &angle, ui),
        Some(Commands::ToQcad { angle }) => commands::convert::cmd_convert(Axis::Compass, &angle, ui),
        Some(Commands::Reference) => commands::reference::cmd_reference(ui),
        Some(Commands::Version) => commands::version::cmd_version(ui),
        Some(Commands::Interactive) | None => commands::interactive::cmd_interactive(ui),
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::new().filter_or("QCOMPASS_LOG", default_filter))
        .format_timestamp(None)
        .init();
}

fn report_config_warnings(loaded: &LoadedConfig, ui: &UiContext) {
    for w in &loaded.warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        let mut message = format!("unknown config key '{}' in {}", w.key, location);
        if let Some(suggestion) = &w.suggestion {
            message.push_str(&format!(" (did you mean '{}'?)", suggestion));
        }

        if ui.json {
            println!("{}", to_line(&WarningEvent::new(message)));
        } else {
            eprintln!("{} {}", Glyph::Warning.render(ui.unicode), message);
        }
    }
}

fn report_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        println!("{}", to_line(&ErrorEvent::new(format!("{:#}", err))));
    } else {
        eprintln!("{}", render_error(&format!("{:#}", err), ui.color, ui.unicode));
    }
}
