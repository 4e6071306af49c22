use crate::adapters::OutputFormat;
use crate::core::collector::{self, CollectMode, RawAlaCarteForm, RawPlanForm};
use crate::core::{AlaCarteInput, InputSource, PlanInput};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub plan: PlanSection,
    #[serde(default)]
    pub ala_carte: AlaCarteSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanSection {
    pub r#type: String,
    pub daily_walks: i64,
    pub walks_per_week: i64,
    pub grooming: i64,
    pub vet_checkups: i64,
    pub training: i64,
    pub customers: i64,
}

impl Default for PlanSection {
    fn default() -> Self {
        let form = RawPlanForm::default();
        Self {
            r#type: form.plan_type,
            daily_walks: form.daily_walks,
            walks_per_week: form.walks_per_week,
            grooming: form.grooming,
            vet_checkups: form.vet_checkups,
            training: form.training,
            customers: form.customers,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AlaCarteSection {
    pub walks: i64,
    pub grooming: i64,
    pub vet_checkups: i64,
    pub training: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<String>,
    pub path: Option<String>,
    pub strict: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入情境
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CalcError::ConfigError {
            message: format!("Cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析情境
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CUSTOMERS})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn plan_form(&self) -> RawPlanForm {
        RawPlanForm {
            plan_type: self.plan.r#type.clone(),
            daily_walks: self.plan.daily_walks,
            walks_per_week: self.plan.walks_per_week,
            grooming: self.plan.grooming,
            vet_checkups: self.plan.vet_checkups,
            training: self.plan.training,
            customers: self.plan.customers,
        }
    }

    pub fn ala_carte_form(&self) -> RawAlaCarteForm {
        RawAlaCarteForm {
            walks: self.ala_carte.walks,
            grooming: self.ala_carte.grooming,
            vet_checkups: self.ala_carte.vet_checkups,
            training: self.ala_carte.training,
        }
    }

    /// 取得輸出格式，未設定時為 text
    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some(format) => format.parse(),
            None => Ok(OutputFormat::default()),
        }
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn is_strict(&self) -> bool {
        self.output.as_ref().and_then(|o| o.strict).unwrap_or(false)
    }

    pub fn set_strict(&mut self, strict: bool) {
        self.output.get_or_insert_with(OutputSection::default).strict = Some(strict);
    }

    pub fn set_format(&mut self, format: &str) {
        self.output.get_or_insert_with(OutputSection::default).format = Some(format.to_string());
    }

    pub fn collect_mode(&self) -> CollectMode {
        if self.is_strict() {
            CollectMode::Strict
        } else {
            CollectMode::Clamp
        }
    }

    /// 驗證情境的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("plan.type", &self.plan.r#type)?;

        self.output_format()?;

        if let Some(path) = self.output_path() {
            validation::validate_path("output.path", path)?;
        }

        // 未替換的環境變數只會留在字串欄位
        // 數值欄位在解析時就已失敗
        if env_var_pattern().is_match(&self.plan.r#type) {
            return Err(CalcError::ConfigValidationError {
                field: "plan.type".to_string(),
                message: format!("Unresolved environment variable in '{}'", self.plan.r#type),
            });
        }

        Ok(())
    }
}

impl InputSource for ScenarioConfig {
    fn collect(&self) -> Result<(PlanInput, AlaCarteInput)> {
        collector::collect(&self.plan_form(), &self.ala_carte_form(), self.collect_mode())
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
