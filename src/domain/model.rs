use crate::utils::error::{CalcError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currency label printed next to every amount.
pub const CURRENCY: &str = "rs";

/// Weeks counted per month when pricing walks. Not calendar accurate.
pub const WEEKS_PER_MONTH: u32 = 4;

/// GST rate (18%) applied to the grand total.
pub fn gst_rate() -> Decimal {
    Decimal::new(18, 2)
}

/// Subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlanType {
    Monthly,
    Quarterly,
    #[default]
    #[serde(rename = "Half-Yearly")]
    HalfYearly,
}

impl PlanType {
    pub const ALL: [PlanType; 3] = [PlanType::HalfYearly, PlanType::Quarterly, PlanType::Monthly];

    /// Billing duration covered by one subscription period.
    pub fn months(self) -> u32 {
        match self {
            PlanType::Monthly => 1,
            PlanType::Quarterly => 3,
            PlanType::HalfYearly => 6,
        }
    }

    /// Discount applied to the subscription total, in percent.
    pub fn discount_percent(self) -> u32 {
        match self {
            PlanType::Monthly => 10,
            PlanType::Quarterly => 20,
            PlanType::HalfYearly => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlanType::Monthly => "Monthly",
            PlanType::Quarterly => "Quarterly",
            PlanType::HalfYearly => "Half-Yearly",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlanType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(PlanType::Monthly),
            "quarterly" => Ok(PlanType::Quarterly),
            "half-yearly" | "half_yearly" | "halfyearly" | "half yearly" => {
                Ok(PlanType::HalfYearly)
            }
            _ => Err(CalcError::InvalidConfigValueError {
                field: "plan_type".to_string(),
                value: s.to_string(),
                reason: "Unknown plan type. Valid plans: Monthly, Quarterly, Half-Yearly"
                    .to_string(),
            }),
        }
    }
}

/// Billable service kinds. Subscription and a-la-carte pricing share one rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    Walk,
    Grooming,
    VetCheckup,
    Training,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Walk,
        Service::Grooming,
        Service::VetCheckup,
        Service::Training,
    ];

    pub fn unit_rate(self) -> u32 {
        match self {
            Service::Walk => 500,
            Service::Grooming => 3000,
            Service::VetCheckup => 3500,
            Service::Training => 2000,
        }
    }

    /// Row label used in the a-la-carte table.
    pub fn ala_carte_label(self) -> &'static str {
        match self {
            Service::Walk => "Additional Dog Walks",
            Service::Grooming => "Additional Grooming Sessions",
            Service::VetCheckup => "Additional Vet Checkups",
            Service::Training => "Additional Training Sessions",
        }
    }
}

/// Subscription quantities after range clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInput {
    pub daily_walk_count: u32,
    pub walks_per_week: u32,
    pub grooming_per_month: u32,
    pub vet_checkups_per_month: u32,
    pub training_per_month: u32,
    pub customer_count: u32,
    pub plan_type: PlanType,
}

impl Default for PlanInput {
    fn default() -> Self {
        Self {
            daily_walk_count: 1,
            walks_per_week: 1,
            grooming_per_month: 1,
            vet_checkups_per_month: 1,
            training_per_month: 1,
            customer_count: 1,
            plan_type: PlanType::default(),
        }
    }
}

/// Extra one-off services, billed at unit rate with no discount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlaCarteInput {
    pub walks: u64,
    pub grooming: u64,
    pub vet_checkups: u64,
    pub training: u64,
}

impl AlaCarteInput {
    pub fn quantity(&self, service: Service) -> u64 {
        match service {
            Service::Walk => self.walks,
            Service::Grooming => self.grooming,
            Service::VetCheckup => self.vet_checkups,
            Service::Training => self.training,
        }
    }
}

/// One priced service line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub service: Service,
    pub quantity: u64,
    pub unit_rate: Decimal,
    pub cost: Decimal,
}

/// Full result of one pricing run. Amounts are rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub plan: PlanInput,
    pub months: u32,
    pub discount_percent: u32,

    pub walk_cost: Decimal,
    pub grooming_cost: Decimal,
    pub vet_cost: Decimal,
    pub training_cost: Decimal,
    pub total_cost: Decimal,
    pub discount_amount: Decimal,
    pub discounted_cost: Decimal,

    pub ala_carte: Vec<LineItem>,
    pub total_ala_carte: Decimal,

    pub subscription_cost: Decimal,
    pub grand_total: Decimal,
    pub tax_amount: Decimal,
    pub final_total: Decimal,
}

impl CostBreakdown {
    pub fn plan_type(&self) -> PlanType {
        self.plan.plan_type
    }
}
