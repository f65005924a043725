use super::{load_catalog, CommandHandler};
use crate::catalog::CpuCatalog;
use crate::config::{OutputFormat, Settings};
use crate::Result;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

/// Handler for the `list` command
pub struct ListCommand {
    pub settings: Settings,
    pub format: OutputFormat,
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "CPU Name")]
    name: String,
    #[tabled(rename = "Score")]
    score: i64,
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<()> {
        let catalog = load_catalog(&self.settings)?;
        println!("{}", self.render(&catalog)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    /// Create new list command; `format` falls back to the settings default
    pub fn new(settings: Settings, format: Option<OutputFormat>) -> Self {
        let format = format.unwrap_or(settings.format);
        Self { settings, format }
    }

    /// Render the catalog in the requested format
    pub fn render(&self, catalog: &CpuCatalog) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(catalog.entries())?),
            OutputFormat::Text => Ok(render_table(catalog)),
        }
    }
}

fn render_table(catalog: &CpuCatalog) -> String {
    if catalog.is_empty() {
        return "No CPUs in catalog.".to_string();
    }

    let rows: Vec<CatalogRow> = catalog
        .iter()
        .enumerate()
        .map(|(index, entry)| CatalogRow {
            row: index + 1,
            name: entry.name.clone(),
            score: entry.score,
        })
        .collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CpuCatalog {
        CpuCatalog::parse("Intel Core i9-13900K\n59623\nApple M2\n15201\n").unwrap()
    }

    #[test]
    fn test_text_table_lists_rows_in_file_order() {
        let command = ListCommand::new(Settings::default(), None);
        let output = command.render(&catalog()).unwrap();

        assert!(output.contains("CPU Name"));
        assert!(output.contains("Score"));
        let intel = output.find("Intel Core i9-13900K").unwrap();
        let apple = output.find("Apple M2").unwrap();
        assert!(intel < apple);
        assert!(output.contains("59623"));
    }

    #[test]
    fn test_json_output() {
        let command = ListCommand::new(Settings::default(), Some(OutputFormat::Json));
        let output = command.render(&catalog()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["name"], "Intel Core i9-13900K");
        assert_eq!(value[1]["score"], 15201);
    }

    #[test]
    fn test_settings_format_is_default() {
        let settings = Settings {
            format: OutputFormat::Json,
            ..Settings::default()
        };
        assert_eq!(ListCommand::new(settings.clone(), None).format, OutputFormat::Json);
        assert_eq!(
            ListCommand::new(settings, Some(OutputFormat::Text)).format,
            OutputFormat::Text
        );
    }

    #[test]
    fn test_empty_catalog_message() {
        let command = ListCommand::new(Settings::default(), None);
        let output = command.render(&CpuCatalog::default()).unwrap();
        assert_eq!(output, "No CPUs in catalog.");
    }
}
