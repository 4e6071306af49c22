pub mod calculator;
pub mod collector;
pub mod pricing;

pub use crate::domain::model::{AlaCarteInput, CostBreakdown, PlanInput, PlanType, Service};
pub use crate::domain::ports::{InputSource, Presenter};
pub use crate::utils::error::Result;
