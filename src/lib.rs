pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{ReportSink, ScenarioConfig};

pub use adapters::{CsvPresenter, JsonPresenter, OutputFormat, TablePresenter};
pub use crate::core::{calculator::Calculator, pricing::compute};
pub use domain::model::{AlaCarteInput, CostBreakdown, PlanInput, PlanType, Service};
pub use utils::error::{CalcError, Result};
