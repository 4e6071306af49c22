use crate::domain::model::{
    gst_rate, AlaCarteInput, CostBreakdown, LineItem, PlanInput, Service, WEEKS_PER_MONTH,
};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a money amount to 2 places using banker's rounding.
pub fn to_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    rounded
}

fn line_cost(service: Service, units: u64) -> Decimal {
    Decimal::from(units) * Decimal::from(service.unit_rate())
}

/// Prices one subscription plus a-la-carte extras.
///
/// Pure and total: every input is an unsigned count, so there is nothing to reject.
pub fn compute(plan: &PlanInput, ala_carte: &AlaCarteInput) -> CostBreakdown {
    let months = plan.plan_type.months();
    let discount_percent = plan.plan_type.discount_percent();

    let walk_units = Decimal::from(plan.daily_walk_count)
        * Decimal::from(plan.walks_per_week)
        * Decimal::from(WEEKS_PER_MONTH)
        * Decimal::from(months);
    let walk_cost = walk_units * Decimal::from(Service::Walk.unit_rate());
    let subscription_line = |service: Service, per_month: u32| {
        line_cost(service, u64::from(per_month)) * Decimal::from(months)
    };
    let grooming_cost = subscription_line(Service::Grooming, plan.grooming_per_month);
    let vet_cost = subscription_line(Service::VetCheckup, plan.vet_checkups_per_month);
    let training_cost = subscription_line(Service::Training, plan.training_per_month);

    let total_cost = walk_cost + grooming_cost + vet_cost + training_cost;
    let discount_amount = total_cost * Decimal::from(discount_percent) / Decimal::ONE_HUNDRED;
    let discounted_cost = total_cost - discount_amount;

    let ala_carte_items: Vec<LineItem> = Service::ALL
        .iter()
        .map(|&service| {
            let quantity = ala_carte.quantity(service);
            LineItem {
                service,
                quantity,
                unit_rate: to_money(Decimal::from(service.unit_rate())),
                cost: to_money(line_cost(service, quantity)),
            }
        })
        .collect();
    let total_ala_carte: Decimal = Service::ALL
        .iter()
        .map(|&service| line_cost(service, ala_carte.quantity(service)))
        .sum();

    let subscription_cost = discounted_cost * Decimal::from(plan.customer_count);
    let grand_total = subscription_cost + total_ala_carte;
    let tax_amount = grand_total * gst_rate();
    let final_total = grand_total + tax_amount;

    tracing::debug!(
        plan = %plan.plan_type,
        months,
        discount_percent,
        %total_cost,
        %grand_total,
        "Computed plan pricing"
    );

    CostBreakdown {
        plan: plan.clone(),
        months,
        discount_percent,
        walk_cost: to_money(walk_cost),
        grooming_cost: to_money(grooming_cost),
        vet_cost: to_money(vet_cost),
        training_cost: to_money(training_cost),
        total_cost: to_money(total_cost),
        discount_amount: to_money(discount_amount),
        discounted_cost: to_money(discounted_cost),
        ala_carte: ala_carte_items,
        total_ala_carte: to_money(total_ala_carte),
        subscription_cost: to_money(subscription_cost),
        grand_total: to_money(grand_total),
        tax_amount: to_money(tax_amount),
        final_total: to_money(final_total),
    }
}
