use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Inclusive bounds for one form field. `max: None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: i64,
    pub max: Option<i64>,
}

impl FieldRange {
    pub const fn new(field: &'static str, min: i64, max: Option<i64>) -> Self {
        Self { field, min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    pub fn clamp(&self, value: i64) -> i64 {
        let value = value.max(self.min);
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }

    pub fn describe(&self) -> String {
        match self.max {
            Some(max) => format!("{}..={}", self.min, max),
            None => format!(">= {}", self.min),
        }
    }
}

pub const DAILY_WALKS: FieldRange = FieldRange::new("daily_walk_count", 0, Some(2));
pub const WALKS_PER_WEEK: FieldRange = FieldRange::new("walks_per_week", 0, Some(7));
pub const GROOMING_PER_MONTH: FieldRange = FieldRange::new("grooming_per_month", 0, Some(28));
pub const VET_CHECKUPS_PER_MONTH: FieldRange =
    FieldRange::new("vet_checkups_per_month", 0, Some(28));
pub const TRAINING_PER_MONTH: FieldRange = FieldRange::new("training_per_month", 0, Some(28));
pub const CUSTOMER_COUNT: FieldRange = FieldRange::new("customer_count", 1, Some(28));

pub const EXTRA_WALKS: FieldRange = FieldRange::new("ala_carte.walks", 0, None);
pub const EXTRA_GROOMING: FieldRange = FieldRange::new("ala_carte.grooming", 0, None);
pub const EXTRA_VET_CHECKUPS: FieldRange = FieldRange::new("ala_carte.vet_checkups", 0, None);
pub const EXTRA_TRAINING: FieldRange = FieldRange::new("ala_carte.training", 0, None);

pub fn validate_field(range: &FieldRange, value: i64) -> Result<()> {
    if !range.contains(value) {
        return Err(CalcError::InvalidConfigValueError {
            field: range.field.to_string(),
            value: value.to_string(),
            reason: format!("Value must be in range {}", range.describe()),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
