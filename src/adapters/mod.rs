// Adapters layer: concrete presenters behind the `Presenter` port.

pub mod delimited;
pub mod json;
pub mod report;
pub mod table;

use crate::core::Presenter;
use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use self::delimited::CsvPresenter;
pub use self::json::JsonPresenter;
pub use self::table::TablePresenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 4] = ["text", "csv", "tsv", "json"];

    pub fn presenter(self) -> Box<dyn Presenter> {
        match self {
            OutputFormat::Text => Box::new(TablePresenter::new()),
            OutputFormat::Csv => Box::new(CsvPresenter::new()),
            OutputFormat::Tsv => Box::new(CsvPresenter::tsv()),
            OutputFormat::Json => Box::new(JsonPresenter::new()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CalcError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}
