//! JSON event types for `--json` output.
//!
//! Every event is printed as one line on stdout and carries an `event` tag.

use serde::Serialize;

use qcompass::models::{Axis, Cardinal, Landmark, Rotation};
use qcompass::session::COMMAND_HELP;
use qcompass::InteractionState;

/// Result of a one-shot conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionEvent<'a> {
    pub event: &'static str,
    pub from: Axis,
    pub to: Axis,
    pub input: &'a str,
    /// Empty when the input is not a number
    pub output: &'a str,
}

impl<'a> ConversionEvent<'a> {
    pub fn new(from: Axis, input: &'a str, output: &'a str) -> Self {
        Self {
            event: "conversion",
            from,
            to: from.other(),
            input,
            output,
        }
    }
}

/// Current field pair of an interactive session
#[derive(Debug, Clone, Serialize)]
pub struct StateEvent<'a> {
    pub event: &'static str,
    pub qcad: &'a str,
    pub compass: &'a str,
    pub last_edited: Option<Axis>,
}

impl<'a> StateEvent<'a> {
    pub fn new(state: &'a InteractionState) -> Self {
        Self {
            event: "state",
            qcad: state.qcad_text(),
            compass: state.compass_text(),
            last_edited: state.last_edited(),
        }
    }
}

/// An action was requested while it is not enabled
#[derive(Debug, Clone, Serialize)]
pub struct DisabledEvent {
    pub event: &'static str,
    pub action: &'static str,
    pub reason: &'static str,
}

impl DisabledEvent {
    pub fn new(action: &'static str) -> Self {
        Self {
            event: "disabled",
            action,
            reason: "both fields are empty",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisReference {
    pub axis: Axis,
    pub zero: Cardinal,
    pub rotation: Rotation,
    pub landmarks: [Landmark; 4],
    pub formula: &'static str,
}

/// Static landmark and formula data
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceEvent {
    pub event: &'static str,
    pub axes: Vec<AxisReference>,
}

impl Default for ReferenceEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceEvent {
    pub fn new() -> Self {
        Self {
            event: "reference",
            axes: Axis::ALL
                .iter()
                .map(|&axis| AxisReference {
                    axis,
                    zero: axis.zero(),
                    rotation: axis.rotation(),
                    landmarks: axis.landmarks(),
                    formula: axis.formula(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HelpEntry {
    pub usage: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HelpEvent {
    pub event: &'static str,
    pub commands: Vec<HelpEntry>,
}

impl Default for HelpEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpEvent {
    pub fn new() -> Self {
        Self {
            event: "help",
            commands: COMMAND_HELP
                .iter()
                .map(|&(usage, description)| HelpEntry { usage, description })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionEvent {
    pub event: &'static str,
    pub version: &'static str,
}

impl Default for VersionEvent {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionEvent {
    pub fn new() -> Self {
        Self {
            event: "version",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "error",
            message: message.into(),
        }
    }
}

/// Non-fatal warning, e.g. an unknown config key.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub message: String,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            message: message.into(),
        }
    }
}

/// Serialize one event as a JSON line.
pub fn to_line<T: Serialize>(event: &T) -> String {
    serde_json::to_string(event).unwrap_or_else(|e| {
        format!(
            "{{\"event\":\"error\",\"message\":{:?}}}",
            format!("failed to serialize event: {}", e)
        )
    })
}
