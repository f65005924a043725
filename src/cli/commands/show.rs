use super::{load_catalog, CommandHandler};
use crate::catalog::CpuCatalog;
use crate::config::{OutputFormat, Settings};
use crate::error::CompareError;
use crate::Result;

/// Handler for the `show` command
pub struct ShowCommand {
    pub settings: Settings,
    pub cpu: String,
    pub format: OutputFormat,
}

impl CommandHandler for ShowCommand {
    fn execute(&self) -> Result<()> {
        let catalog = load_catalog(&self.settings)?;
        println!("{}", self.render(&catalog)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

impl ShowCommand {
    pub fn new(settings: Settings, cpu: String, format: Option<OutputFormat>) -> Self {
        let format = format.unwrap_or(settings.format);
        Self {
            settings,
            cpu,
            format,
        }
    }

    pub fn render(&self, catalog: &CpuCatalog) -> Result<String> {
        let entry = catalog
            .find(&self.cpu)
            .ok_or_else(|| CompareError::UnknownCpu(self.cpu.clone()))?;

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entry)?),
            OutputFormat::Text => Ok(format!("{}\nScore: {}", entry.name, entry.score)),
        }
    }
}
