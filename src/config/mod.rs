#[cfg(feature = "cli")]
pub mod cli;
pub mod output;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use output::ReportSink;
pub use toml_config::ScenarioConfig;
