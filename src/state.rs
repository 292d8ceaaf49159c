//! Two-field interaction state
//!
//! Holds the text of the QCAD field and the compass field and keeps them
//! consistent: every edit of one field re-derives the other from it.

use serde::Serialize;

use crate::convert::convert_text;
use crate::models::Axis;

/// The editable QCAD/compass field pair of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InteractionState {
    qcad: String,
    compass: String,
    /// Provenance only: which field the user typed into most recently.
    last_edited: Option<Axis>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn qcad_text(&self) -> &str {
        &self.qcad
    }

    pub fn compass_text(&self) -> &str {
        &self.compass
    }

    pub fn text(&self, axis: Axis) -> &str {
        match axis {
            Axis::Qcad => &self.qcad,
            Axis::Compass => &self.compass,
        }
    }

    pub fn last_edited(&self) -> Option<Axis> {
        self.last_edited
    }

    /// Both fields are empty.
    pub fn is_empty(&self) -> bool {
        self.qcad.is_empty() && self.compass.is_empty()
    }

    /// Swap is actionable only when there is something to exchange.
    pub fn can_swap(&self) -> bool {
        !self.is_empty()
    }

    /// Clear is actionable only when there is something to clear.
    pub fn can_clear(&self) -> bool {
        !self.is_empty()
    }

    pub fn edit_qcad(&mut self, text: impl Into<String>) {
        self.edit(Axis::Qcad, text);
    }

    pub fn edit_compass(&mut self, text: impl Into<String>) {
        self.edit(Axis::Compass, text);
    }

    /// Set the text of `axis` and re-derive the other field from it.
    ///
    /// Empty text clears the other field too; unparseable text leaves the
    /// other field empty.
    pub fn edit(&mut self, axis: Axis, text: impl Into<String>) {
        let text = text.into();
        let derived = if text.is_empty() {
            String::new()
        } else {
            convert_text(axis, &text)
        };

        match axis {
            Axis::Qcad => {
                self.qcad = text;
                self.compass = derived;
            }
            Axis::Compass => {
                self.compass = text;
                self.qcad = derived;
            }
        }
        self.last_edited = Some(axis);

        log::debug!(
            "edit {}: qcad={:?} compass={:?}",
            axis,
            self.qcad,
            self.compass
        );
    }

    /// Exchange the two texts verbatim. No re-derivation, no reformatting.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.qcad, &mut self.compass);
        log::debug!("swap: qcad={:?} compass={:?}", self.qcad, self.compass);
    }

    /// Empty both fields.
    pub fn clear(&mut self) {
        self.qcad.clear();
        self.compass.clear();
        log::debug!("clear");
    }
}
