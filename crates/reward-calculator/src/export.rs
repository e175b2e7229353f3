use crate::types::RewardOutput;
use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format for calculation results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[value(name = "csv")]
    Csv,
    /// Single-line JSON, the format test harnesses consume
    #[default]
    #[value(name = "json")]
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::JsonPretty => write!(f, "json-pretty"),
        }
    }
}

/// Trait for types that can be exported to various formats
pub trait Exportable {
    fn export(&self, format: OutputFormat) -> Result<String>;

    /// Default implementation for CSV export
    fn to_csv(&self) -> Result<String>
    where
        Self: Serialize,
    {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(self)?;
        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?)
    }

    /// Default implementation for JSON export
    fn to_json(&self, pretty: bool) -> Result<String>
    where
        Self: Serialize,
    {
        if pretty {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }
}

impl Exportable for RewardOutput {
    fn export(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Csv => Ok(self.to_csv()?.trim_end().to_string()),
            OutputFormat::Json => self.to_json(false),
            OutputFormat::JsonPretty => self.to_json(true),
        }
    }
}
