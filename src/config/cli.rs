use crate::adapters::OutputFormat;
use crate::core::collector::{self, CollectMode, RawAlaCarteForm, RawPlanForm};
use crate::core::{AlaCarteInput, InputSource, PlanInput};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tails-calc")]
#[command(about = "Tails on Trails - pet service subscription calculator")]
pub struct CliConfig {
    /// Plan type: Monthly, Quarterly or Half-Yearly
    #[arg(long, default_value = "Half-Yearly")]
    pub plan: String,

    /// Daily walks (per day, 0-2)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub daily_walks: i64,

    /// Walks per week (0-7)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub walks_per_week: i64,

    /// Grooming sessions per month (0-28)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub grooming: i64,

    /// Vet checkups per month (0-28)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub vet_checkups: i64,

    /// Training sessions per month (0-28)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub training: i64,

    /// Number of customers (1-28)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub customers: i64,

    /// Additional dog walks
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub extra_walks: i64,

    /// Additional grooming sessions
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub extra_grooming: i64,

    /// Additional vet checkups
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub extra_vet_checkups: i64,

    /// Additional training sessions
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub extra_training: i64,

    /// Output format: text, csv, tsv or json
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,

    /// Reject out-of-range values instead of clamping them
    #[arg(long)]
    pub strict: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn plan_form(&self) -> RawPlanForm {
        RawPlanForm {
            plan_type: self.plan.clone(),
            daily_walks: self.daily_walks,
            walks_per_week: self.walks_per_week,
            grooming: self.grooming,
            vet_checkups: self.vet_checkups,
            training: self.training,
            customers: self.customers,
        }
    }

    pub fn ala_carte_form(&self) -> RawAlaCarteForm {
        RawAlaCarteForm {
            walks: self.extra_walks,
            grooming: self.extra_grooming,
            vet_checkups: self.extra_vet_checkups,
            training: self.extra_training,
        }
    }

    pub fn collect_mode(&self) -> CollectMode {
        if self.strict {
            CollectMode::Strict
        } else {
            CollectMode::Clamp
        }
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }
}

impl InputSource for CliConfig {
    fn collect(&self) -> Result<(PlanInput, AlaCarteInput)> {
        collector::collect(&self.plan_form(), &self.ala_carte_form(), self.collect_mode())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("plan", &self.plan)?;
        self.output_format()?;
        if let Some(path) = &self.output {
            validation::validate_path("output", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PlanType;

    #[test]
    fn test_defaults_mirror_form() {
        let config = CliConfig::parse_from(["tails-calc"]);
        let (plan, extras) = config.collect().unwrap();

        assert_eq!(plan, PlanInput::default());
        assert_eq!(extras, AlaCarteInput::default());
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_and_negative_numbers() {
        let config = CliConfig::parse_from([
            "tails-calc",
            "--plan",
            "quarterly",
            "--walks-per-week",
            "-3",
            "--customers",
            "4",
            "--extra-walks",
            "2",
            "--format",
            "json",
        ]);
        let (plan, extras) = config.collect().unwrap();

        assert_eq!(plan.plan_type, PlanType::Quarterly);
        assert_eq!(plan.walks_per_week, 0);
        assert_eq!(plan.customer_count, 4);
        assert_eq!(extras.walks, 2);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_strict_flag_rejects() {
        let config = CliConfig::parse_from(["tails-calc", "--strict", "--daily-walks", "3"]);
        assert!(config.collect().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_format() {
        let config = CliConfig::parse_from(["tails-calc", "--format", "xml"]);
        assert!(config.validate().is_err());
    }
}
