//! qcompass - QCAD angle ↔ compass bearing converter
//!
//! QCAD measures angles from East, counterclockwise. Compass bearings are
//! measured from North, clockwise. The two are related by a single
//! reflection, `(90 - x) mod 360`, in either direction.
//!
//! The crate exposes the pure conversion (`convert`), the two-field state a
//! user interface keeps in sync (`state`), and the interactive line protocol
//! the `qcompass` binary drives it with (`session`).

pub mod config;
pub mod convert;
pub mod error;
pub mod models;
pub mod presentation;
pub mod session;
pub mod state;

// Re-exports for convenience
pub use config::{Config, OutputFormat};
pub use convert::{parse_degrees, to_compass, to_qcad};
pub use error::{QcompassError, QcompassResult};
pub use models::{Axis, Cardinal, Landmark};
pub use session::{Outcome, Session, SessionCommand};
pub use state::InteractionState;
