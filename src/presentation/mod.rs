//! Presentation Layer
//!
//! Command line definitions shared by the binary and its tests.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
