/// Terminal User Interface module for interactive commands
pub mod browser;

use crate::catalog::CpuCatalog;
use crate::Result;

/// Run the interactive catalog browser
pub fn run_browser(catalog: CpuCatalog) -> Result<()> {
    browser::run(catalog)
}
