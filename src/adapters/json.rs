use crate::adapters::report::{self, ReportTable};
use crate::core::{CostBreakdown, Presenter};
use crate::utils::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    heading: String,
    breakdown: &'a CostBreakdown,
    tables: Vec<ReportTable>,
}

/// Pretty-printed JSON with the raw breakdown alongside the rendered tables.
#[derive(Debug, Clone, Default)]
pub struct JsonPresenter {
    // fixed clock for reproducible output
    timestamp: Option<DateTime<Utc>>,
}

impl JsonPresenter {
    pub fn new() -> Self {
        Self { timestamp: None }
    }

    pub fn with_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp: Some(timestamp),
        }
    }
}

impl Presenter for JsonPresenter {
    fn render(&self, breakdown: &CostBreakdown) -> Result<String> {
        let generated_at = self
            .timestamp
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Secs, true);

        let doc = JsonReport {
            generated_at,
            heading: report::heading(breakdown),
            breakdown,
            tables: report::tables(breakdown),
        };

        Ok(serde_json::to_string_pretty(&doc)?)
    }
}
