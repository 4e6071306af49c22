use crate::domain::model::{AlaCarteInput, CostBreakdown, PlanInput};
use crate::utils::error::Result;

/// Supplies range-checked inputs to the pricing engine.
pub trait InputSource {
    fn collect(&self) -> Result<(PlanInput, AlaCarteInput)>;
}

/// Turns a breakdown into a printable report.
pub trait Presenter {
    fn render(&self, breakdown: &CostBreakdown) -> Result<String>;
}

impl<T: Presenter + ?Sized> Presenter for Box<T> {
    fn render(&self, breakdown: &CostBreakdown) -> Result<String> {
        (**self).render(breakdown)
    }
}
