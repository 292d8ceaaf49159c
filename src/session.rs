//! Interactive session commands
//!
//! One input line is one UI event. `SessionCommand::parse` turns a line into
//! an event and `Session::apply` runs it against the `InteractionState`,
//! honoring the rule that swap and clear are only actionable when a field
//! holds text.

use crate::error::{QcompassError, QcompassResult};
use crate::models::Axis;
use crate::state::InteractionState;

/// A parsed line of interactive input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Replace the text of one field (verbatim, may be empty)
    Edit { axis: Axis, text: String },
    Swap,
    Clear,
    Show,
    Reference,
    Help,
    Quit,
}

/// Help lines: (usage, description)
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("q <angle>", "set the QCAD field (alias: qcad)"),
    ("c <angle>", "set the compass field (alias: compass)"),
    ("swap", "exchange the two fields (alias: s)"),
    ("clear", "empty both fields (alias: x)"),
    ("show", "print the current fields"),
    ("ref", "print landmark angles and formulas (alias: reference)"),
    ("help", "print this list (alias: ?)"),
    ("quit", "end the session (alias: exit)"),
];

impl SessionCommand {
    /// Parse one line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> QcompassResult<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return Ok(None);
        }

        let (word, rest) = match trimmed.find(char::is_whitespace) {
            Some(idx) => (&trimmed[..idx], trimmed[idx..].trim_start()),
            None => (trimmed, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "q" | "qcad" => SessionCommand::Edit {
                axis: Axis::Qcad,
                text: rest.to_string(),
            },
            "c" | "compass" => SessionCommand::Edit {
                axis: Axis::Compass,
                text: rest.to_string(),
            },
            "swap" | "s" => no_argument("swap", rest, SessionCommand::Swap)?,
            "clear" | "x" => no_argument("clear", rest, SessionCommand::Clear)?,
            "show" => no_argument("show", rest, SessionCommand::Show)?,
            "ref" | "reference" => no_argument("ref", rest, SessionCommand::Reference)?,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            _ => {
                return Err(QcompassError::UnknownCommand {
                    input: trimmed.trim_end().to_string(),
                })
            }
        };

        Ok(Some(command))
    }
}

fn no_argument(
    command: &'static str,
    rest: &str,
    parsed: SessionCommand,
) -> QcompassResult<SessionCommand> {
    let rest = rest.trim_end();
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(QcompassError::UnexpectedArgument {
            command,
            argument: rest.to_string(),
        })
    }
}

/// An action the UI keeps disabled in the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledAction {
    Swap,
    Clear,
}

impl DisabledAction {
    pub fn name(self) -> &'static str {
        match self {
            DisabledAction::Swap => "swap",
            DisabledAction::Clear => "clear",
        }
    }
}

/// What applying a command did, for the caller to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed (or was rewritten); show it
    Updated,
    /// Action not enabled; state untouched
    Disabled(DisabledAction),
    Show,
    Reference,
    Help,
    Quit,
}

/// A single interactive session owning its state
#[derive(Debug, Default)]
pub struct Session {
    state: InteractionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn apply(&mut self, command: SessionCommand) -> Outcome {
        match command {
            SessionCommand::Edit { axis, text } => {
                self.state.edit(axis, text);
                Outcome::Updated
            }
            SessionCommand::Swap => {
                if !self.state.can_swap() {
                    return Outcome::Disabled(DisabledAction::Swap);
                }
                self.state.swap();
                Outcome::Updated
            }
            SessionCommand::Clear => {
                if !self.state.can_clear() {
                    return Outcome::Disabled(DisabledAction::Clear);
                }
                self.state.clear();
                Outcome::Updated
            }
            SessionCommand::Show => Outcome::Show,
            SessionCommand::Reference => Outcome::Reference,
            SessionCommand::Help => Outcome::Help,
            SessionCommand::Quit => Outcome::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        SessionCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_edit_commands() {
        assert_eq!(
            parse("q 90"),
            SessionCommand::Edit {
                axis: Axis::Qcad,
                text: "90".to_string()
            }
        );
        assert_eq!(
            parse("compass -12.5\n"),
            SessionCommand::Edit {
                axis: Axis::Compass,
                text: "-12.5".to_string()
            }
        );
    }

    #[test]
    fn test_parse_edit_without_text_is_empty_edit() {
        assert_eq!(
            parse("q"),
            SessionCommand::Edit {
                axis: Axis::Qcad,
                text: String::new()
            }
        );
    }

    #[test]
    fn test_parse_edit_keeps_text_verbatim() {
        assert_eq!(
            parse("c   1 2 "),
            SessionCommand::Edit {
                axis: Axis::Compass,
                text: "1 2 ".to_string()
            }
        );
    }

    #[test]
    fn test_parse_aliases_case_insensitive() {
        assert_eq!(parse("SWAP"), SessionCommand::Swap);
        assert_eq!(parse("s"), SessionCommand::Swap);
        assert_eq!(parse("x"), SessionCommand::Clear);
        assert_eq!(parse("Reference"), SessionCommand::Reference);
        assert_eq!(parse("?"), SessionCommand::Help);
        assert_eq!(parse("exit"), SessionCommand::Quit);
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(SessionCommand::parse("").unwrap(), None);
        assert_eq!(SessionCommand::parse("   \r\n").unwrap(), None);
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = SessionCommand::parse("rotate 90").unwrap_err();
        assert!(matches!(err, QcompassError::UnknownCommand { input } if input == "rotate 90"));
    }

    #[test]
    fn test_parse_swap_rejects_argument() {
        let err = SessionCommand::parse("swap now").unwrap_err();
        assert!(matches!(
            err,
            QcompassError::UnexpectedArgument { command: "swap", .. }
        ));
    }

    #[test]
    fn test_swap_disabled_when_empty() {
        let mut session = Session::new();
        assert_eq!(
            session.apply(SessionCommand::Swap),
            Outcome::Disabled(DisabledAction::Swap)
        );
        assert_eq!(
            session.apply(SessionCommand::Clear),
            Outcome::Disabled(DisabledAction::Clear)
        );
        assert!(session.state().is_empty());
    }

    #[test]
    fn test_session_scenario() {
        let mut session = Session::new();
        assert_eq!(session.apply(parse("q 90")), Outcome::Updated);
        assert_eq!(session.state().compass_text(), "0.00");

        assert_eq!(session.apply(parse("swap")), Outcome::Updated);
        assert_eq!(session.state().qcad_text(), "0.00");
        assert_eq!(session.state().compass_text(), "90");

        assert_eq!(session.apply(parse("clear")), Outcome::Updated);
        assert!(session.state().is_empty());

        assert_eq!(session.apply(parse("quit")), Outcome::Quit);
    }
}
