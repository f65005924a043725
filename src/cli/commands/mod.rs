#[cfg(feature = "tui")]
pub mod browse;
pub mod compare;
pub mod list;
pub mod search;
pub mod show;

use crate::catalog::CpuCatalog;
use crate::config::Settings;
use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Read the catalog named by the settings.
///
/// Parse failures are fatal for every command, so they are returned as-is.
pub fn load_catalog(settings: &Settings) -> Result<CpuCatalog> {
    Ok(CpuCatalog::load(&settings.data_file)?)
}
