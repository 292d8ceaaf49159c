use std::io::{BufRead, Write};

use anyhow::Result;

use crate::ui::context::UiContext;
use crate::ui::json::{to_line, DisabledEvent, ErrorEvent, HelpEvent, ReferenceEvent, StateEvent};
use crate::ui::views::reference::render_reference;
use crate::ui::views::session::{
    render_disabled, render_error, render_help, render_state, render_state_detail,
};
use qcompass::session::{Outcome, Session, SessionCommand};

pub fn cmd_interactive(ui: &UiContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_session(stdin.lock(), &mut stdout.lock(), &mut stderr.lock(), ui)
}

/// Drive a session until `quit` or end of input.
///
/// Each line is one event. Problems with a line are reported and the session
/// continues; only I/O failures end it early.
pub fn run_session(
    mut input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    ui: &UiContext,
) -> Result<()> {
    let mut session = Session::new();
    log::debug!("interactive session started");

    if ui.prompt {
        writeln!(out, "Type 'help' for a list of commands.")?;
    }

    let mut buf = Vec::new();
    loop {
        if ui.prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Bytes that are not UTF-8 become U+FFFD and fail to parse like any
        // other non-numeric text.
        let line = String::from_utf8_lossy(&buf);

        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                log::debug!("rejected input {:?}: {}", line, e);
                if ui.json {
                    writeln!(out, "{}", to_line(&ErrorEvent::new(e.to_string())))?;
                } else {
                    writeln!(err, "{}", render_error(&e.to_string(), ui.color, ui.unicode))?;
                }
                continue;
            }
        };

        match session.apply(command) {
            Outcome::Updated => {
                if ui.json {
                    writeln!(out, "{}", to_line(&StateEvent::new(session.state())))?;
                } else {
                    writeln!(out, "{}", render_state(session.state(), ui.color, ui.unicode))?;
                }
            }
            Outcome::Show => {
                if ui.json {
                    writeln!(out, "{}", to_line(&StateEvent::new(session.state())))?;
                } else {
                    writeln!(
                        out,
                        "{}",
                        render_state_detail(session.state(), ui.color, ui.unicode)
                    )?;
                }
            }
            Outcome::Disabled(action) => {
                if ui.json {
                    writeln!(out, "{}", to_line(&DisabledEvent::new(action.name())))?;
                } else {
                    writeln!(err, "{}", render_disabled(action, ui.color, ui.unicode))?;
                }
            }
            Outcome::Reference => {
                if ui.json {
                    writeln!(out, "{}", to_line(&ReferenceEvent::new()))?;
                } else {
                    write!(out, "{}", render_reference(ui.color, ui.unicode))?;
                }
            }
            Outcome::Help => {
                if ui.json {
                    writeln!(out, "{}", to_line(&HelpEvent::new()))?;
                } else {
                    write!(out, "{}", render_help())?;
                }
            }
            Outcome::Quit => break,
        }
    }

    log::debug!("interactive session ended");
    Ok(())
}
