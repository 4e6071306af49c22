use crate::domain::model::{AlaCarteInput, PlanInput, PlanType};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{self, FieldRange};
use serde::{Deserialize, Serialize};

/// How out-of-range values are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectMode {
    /// Pull the value back into range and log a warning.
    #[default]
    Clamp,
    /// Reject the value.
    Strict,
}

/// Subscription fields as typed by a user, before range checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlanForm {
    pub plan_type: String,
    pub daily_walks: i64,
    pub walks_per_week: i64,
    pub grooming: i64,
    pub vet_checkups: i64,
    pub training: i64,
    pub customers: i64,
}

impl Default for RawPlanForm {
    fn default() -> Self {
        Self {
            plan_type: PlanType::default().label().to_string(),
            daily_walks: 1,
            walks_per_week: 1,
            grooming: 1,
            vet_checkups: 1,
            training: 1,
            customers: 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAlaCarteForm {
    pub walks: i64,
    pub grooming: i64,
    pub vet_checkups: i64,
    pub training: i64,
}

fn take(range: &FieldRange, value: i64, mode: CollectMode) -> Result<i64> {
    let applied = match mode {
        CollectMode::Strict => {
            validation::validate_field(range, value)?;
            value
        }
        CollectMode::Clamp => {
            let clamped = range.clamp(value);
            if clamped != value {
                tracing::warn!(
                    field = range.field,
                    given = value,
                    applied = clamped,
                    "Input out of range {}, clamped",
                    range.describe()
                );
            }
            clamped
        }
    };
    Ok(applied)
}

fn not_a_count(range: &FieldRange, value: i64) -> CalcError {
    CalcError::InvalidConfigValueError {
        field: range.field.to_string(),
        value: value.to_string(),
        reason: format!("Value must be in range {}", range.describe()),
    }
}

fn take_count(range: &FieldRange, value: i64, mode: CollectMode) -> Result<u32> {
    let applied = take(range, value, mode)?;
    u32::try_from(applied).map_err(|_| not_a_count(range, applied))
}

// A-la-carte counts have no upper bound, so they keep the full width of the raw value.
fn take_extra(range: &FieldRange, value: i64, mode: CollectMode) -> Result<u64> {
    let applied = take(range, value, mode)?;
    u64::try_from(applied).map_err(|_| not_a_count(range, applied))
}

/// Turns raw form values into engine inputs.
pub fn collect(
    plan: &RawPlanForm,
    ala_carte: &RawAlaCarteForm,
    mode: CollectMode,
) -> Result<(PlanInput, AlaCarteInput)> {
    let plan_type: PlanType = plan.plan_type.parse()?;

    let plan_input = PlanInput {
        daily_walk_count: take_count(&validation::DAILY_WALKS, plan.daily_walks, mode)?,
        walks_per_week: take_count(&validation::WALKS_PER_WEEK, plan.walks_per_week, mode)?,
        grooming_per_month: take_count(&validation::GROOMING_PER_MONTH, plan.grooming, mode)?,
        vet_checkups_per_month: take_count(
            &validation::VET_CHECKUPS_PER_MONTH,
            plan.vet_checkups,
            mode,
        )?,
        training_per_month: take_count(&validation::TRAINING_PER_MONTH, plan.training, mode)?,
        customer_count: take_count(&validation::CUSTOMER_COUNT, plan.customers, mode)?,
        plan_type,
    };

    let ala_carte_input = AlaCarteInput {
        walks: take_extra(&validation::EXTRA_WALKS, ala_carte.walks, mode)?,
        grooming: take_extra(&validation::EXTRA_GROOMING, ala_carte.grooming, mode)?,
        vet_checkups: take_extra(&validation::EXTRA_VET_CHECKUPS, ala_carte.vet_checkups, mode)?,
        training: take_extra(&validation::EXTRA_TRAINING, ala_carte.training, mode)?,
    };

    tracing::debug!("Collected inputs: {:?} / {:?}", plan_input, ala_carte_input);
    Ok((plan_input, ala_carte_input))
}
