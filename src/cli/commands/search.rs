use super::{load_catalog, CommandHandler};
use crate::catalog::CpuCatalog;
use crate::config::{OutputFormat, Settings};
use crate::selector::FilterableSelector;
use crate::Result;

/// Handler for the `search` command
pub struct SearchCommand {
    pub settings: Settings,
    pub query: String,
    pub format: OutputFormat,
}

impl CommandHandler for SearchCommand {
    fn execute(&self) -> Result<()> {
        let catalog = load_catalog(&self.settings)?;
        let output = self.render(&catalog)?;
        if !output.is_empty() {
            println!("{}", output);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

impl SearchCommand {
    pub fn new(settings: Settings, query: String, format: Option<OutputFormat>) -> Self {
        let format = format.unwrap_or(settings.format);
        Self {
            settings,
            query,
            format,
        }
    }

    /// Matching names, one per line (text) or as a JSON array
    pub fn render(&self, catalog: &CpuCatalog) -> Result<String> {
        let selector = FilterableSelector::from_catalog(catalog);
        let matches = selector.filter(&self.query);

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&matches)?),
            OutputFormat::Text => Ok(matches.join("\n")),
        }
    }
}
