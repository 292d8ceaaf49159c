//! Configuration module for qcompass
//!
//! Output preferences only; nothing is ever written back. Priority:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (QCOMPASS_*)
//! 3. `--config <path>`, or the user config (`<config dir>/qcompass/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, LoadedConfig};
pub use types::{ColorMode, Config, OutputConfig, OutputFormat};
