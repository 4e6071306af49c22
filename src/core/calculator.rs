use crate::core::pricing;
use crate::core::{InputSource, Presenter};
use crate::domain::model::CostBreakdown;
use crate::utils::error::Result;

pub struct Calculator<S: InputSource, P: Presenter> {
    source: S,
    presenter: P,
}

impl<S: InputSource, P: Presenter> Calculator<S, P> {
    pub fn new(source: S, presenter: P) -> Self {
        Self { source, presenter }
    }

    /// Collects inputs and prices them without rendering.
    pub fn quote(&self) -> Result<CostBreakdown> {
        tracing::debug!("Collecting inputs...");
        let (plan, ala_carte) = self.source.collect()?;

        tracing::debug!(
            "Pricing {} plan for {} customer(s)...",
            plan.plan_type,
            plan.customer_count
        );
        let breakdown = pricing::compute(&plan, &ala_carte);
        tracing::info!(
            "{} plan: subtotal {:.2}, GST {:.2}, total {:.2}",
            breakdown.plan_type(),
            breakdown.grand_total,
            breakdown.tax_amount,
            breakdown.final_total
        );

        Ok(breakdown)
    }

    pub fn run(&self) -> Result<String> {
        let breakdown = self.quote()?;

        tracing::debug!("Rendering report...");
        let report = self.presenter.render(&breakdown)?;
        tracing::debug!("Rendered {} bytes", report.len());

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AlaCarteInput, PlanInput, PlanType};
    use crate::utils::error::CalcError;
    use rust_decimal::Decimal;

    struct FixedSource(PlanInput, AlaCarteInput);

    impl InputSource for FixedSource {
        fn collect(&self) -> Result<(PlanInput, AlaCarteInput)> {
            Ok((self.0.clone(), self.1.clone()))
        }
    }

    struct FailingSource;

    impl InputSource for FailingSource {
        fn collect(&self) -> Result<(PlanInput, AlaCarteInput)> {
            Err(CalcError::ConfigError {
                message: "no input".to_string(),
            })
        }
    }

    struct TotalOnly;

    impl Presenter for TotalOnly {
        fn render(&self, breakdown: &CostBreakdown) -> Result<String> {
            Ok(breakdown.final_total.to_string())
        }
    }

    #[test]
    fn test_run_wires_source_engine_and_presenter() {
        let plan = PlanInput {
            plan_type: PlanType::Monthly,
            ..PlanInput::default()
        };
        let calculator = Calculator::new(FixedSource(plan, AlaCarteInput::default()), TotalOnly);

        assert_eq!(calculator.run().unwrap(), "11151.00");
        assert_eq!(calculator.quote().unwrap().final_total, Decimal::from(11151));
    }

    #[test]
    fn test_source_errors_propagate() {
        let calculator = Calculator::new(FailingSource, TotalOnly);
        assert!(matches!(
            calculator.run(),
            Err(CalcError::ConfigError { .. })
        ));
    }
}
