use super::{load_catalog, CommandHandler};
use crate::cli::tui;
use crate::config::Settings;
use crate::Result;

/// Handler for the `browse` command
pub struct BrowseCommand {
    pub settings: Settings,
}

impl CommandHandler for BrowseCommand {
    fn execute(&self) -> Result<()> {
        // Load before touching the terminal so parse errors print normally.
        let catalog = load_catalog(&self.settings)?;
        tui::run_browser(catalog)
    }

    fn name(&self) -> &'static str {
        "browse"
    }
}

impl BrowseCommand {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}
