//! Settings for the CPU ranking browser.
//!
//! Settings come from a YAML file. The first file found wins:
//!
//! 1. the path given with `--config` (must exist)
//! 2. `./cpu-compare.yaml`
//! 3. `config.yaml` in the user's config directory
//!
//! With no file, built-in defaults apply. Command-line flags override
//! individual fields after the file is read.

pub mod loader;
pub mod types;

pub use loader::SettingsLoader;
pub use types::{OutputFormat, Settings};

/// Settings file name looked up in the working directory.
pub const LOCAL_SETTINGS_FILE: &str = "cpu-compare.yaml";

/// Settings file name inside the user config directory.
pub const USER_SETTINGS_FILE: &str = "config.yaml";
