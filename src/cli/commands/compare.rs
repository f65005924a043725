use super::{load_catalog, CommandHandler};
use crate::catalog::{CpuCatalog, CpuEntry};
use crate::compare::{compare, ComparisonResult, Outcome};
use crate::config::{OutputFormat, Settings};
use crate::Result;
use serde::Serialize;

/// Handler for the `compare` command
pub struct CompareCommand {
    pub settings: Settings,
    pub first: String,
    pub second: String,
    pub format: OutputFormat,
}

/// JSON shape of a finished comparison
#[derive(Debug, Serialize)]
struct CompareReport<'a> {
    outcome: Outcome,
    verdict: String,
    first: &'a CpuEntry,
    second: &'a CpuEntry,
    difference: i128,
}

impl<'a> From<&'a ComparisonResult> for CompareReport<'a> {
    fn from(result: &'a ComparisonResult) -> Self {
        Self {
            outcome: result.outcome,
            verdict: result.to_string(),
            first: &result.first,
            second: &result.second,
            difference: result.difference(),
        }
    }
}

impl CommandHandler for CompareCommand {
    fn execute(&self) -> Result<()> {
        let catalog = load_catalog(&self.settings)?;
        println!("{}", self.render(&catalog)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "compare"
    }
}

impl CompareCommand {
    pub fn new(
        settings: Settings,
        first: String,
        second: String,
        format: Option<OutputFormat>,
    ) -> Self {
        let format = format.unwrap_or(settings.format);
        Self {
            settings,
            first,
            second,
            format,
        }
    }

    /// Verdict text or JSON report; comparison failures come back as errors
    pub fn render(&self, catalog: &CpuCatalog) -> Result<String> {
        let result = compare(catalog, &self.first, &self.second)?;

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&CompareReport::from(&result))?),
            OutputFormat::Text => Ok(format!(
                "{}\n  {}: {}\n  {}: {}\n  Difference: {:+}",
                result,
                result.first.name,
                result.first.score,
                result.second.name,
                result.second.score,
                result.difference()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompareError;
    use crate::CpuCompareError;

    fn catalog() -> CpuCatalog {
        CpuCatalog::parse("A\n100\nB\n50\n").unwrap()
    }

    fn command(first: &str, second: &str, format: Option<OutputFormat>) -> CompareCommand {
        CompareCommand::new(
            Settings::default(),
            first.to_string(),
            second.to_string(),
            format,
        )
    }

    #[test]
    fn test_text_verdict() {
        let output = command("B", "A", None).render(&catalog()).unwrap();
        assert_eq!(
            output,
            "A has a higher score than B.\n  B: 50\n  A: 100\n  Difference: -50"
        );
    }

    #[test]
    fn test_json_report() {
        let output = command("A", "B", Some(OutputFormat::Json))
            .render(&catalog())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["outcome"], "first_higher");
        assert_eq!(value["verdict"], "A has a higher score than B.");
        assert_eq!(value["first"]["score"], 100);
        assert_eq!(value["second"]["name"], "B");
        assert_eq!(value["difference"], 50);
    }

    #[test]
    fn test_comparison_failure_is_returned() {
        let err = command("", "A", None).render(&catalog()).unwrap_err();
        assert!(matches!(
            err,
            CpuCompareError::Compare(CompareError::SelectionIncomplete)
        ));
        assert_eq!(err.to_string(), "Please select two CPUs to compare.");

        let err = command("Z", "A", None).render(&catalog()).unwrap_err();
        assert_eq!(err.to_string(), "CPU 'Z' was not found in the catalog.");
    }
}
