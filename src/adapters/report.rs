//! Format-neutral view of the three balance-sheet tables.

use crate::domain::model::{CostBreakdown, CURRENCY};
use rust_decimal::Decimal;
use serde::Serialize;

pub const FOOTER: &str = "Tails on Trails - Bringing the best care to your pets!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}

pub fn heading(breakdown: &CostBreakdown) -> String {
    format!("{} Plan Summary - Balance Sheet", breakdown.plan_type())
}

pub fn ala_carte_table(breakdown: &CostBreakdown) -> ReportTable {
    let rows = breakdown
        .ala_carte
        .iter()
        .map(|line| {
            vec![
                line.service.ala_carte_label().to_string(),
                money(line.unit_rate),
                line.quantity.to_string(),
                money(line.cost),
            ]
        })
        .collect();

    ReportTable {
        title: "A La Carte Services".to_string(),
        headers: vec![
            "Service".to_string(),
            format!("Unit Cost ({})", CURRENCY),
            "Quantity".to_string(),
            format!("Total Cost ({})", CURRENCY),
        ],
        rows,
    }
}

pub fn subscription_table(breakdown: &CostBreakdown) -> ReportTable {
    let plan = &breakdown.plan;
    let row = |label: String, amount: Decimal| vec![label, money(amount)];

    ReportTable {
        title: format!("{} Subscription Plan", breakdown.plan_type()),
        headers: vec!["Item".to_string(), format!("Cost ({})", CURRENCY)],
        rows: vec![
            row(
                format!("Daily Walks ({} walks/week)", plan.walks_per_week),
                breakdown.walk_cost,
            ),
            row(
                format!("Grooming ({} per month)", plan.grooming_per_month),
                breakdown.grooming_cost,
            ),
            row(
                format!("Vet Checkups ({} per month)", plan.vet_checkups_per_month),
                breakdown.vet_cost,
            ),
            row(
                format!("Training ({} per month)", plan.training_per_month),
                breakdown.training_cost,
            ),
            row("Total Cost (before discount)".to_string(), breakdown.total_cost),
            row(
                format!("Discount ({}% off)", breakdown.discount_percent),
                breakdown.discount_amount,
            ),
            row("Final Cost (after discount)".to_string(), breakdown.discounted_cost),
        ],
    }
}

pub fn final_balance_table(breakdown: &CostBreakdown) -> ReportTable {
    let row = |label: &str, amount: Decimal| vec![label.to_string(), money(amount)];

    ReportTable {
        title: "Final Balance with GST".to_string(),
        headers: vec!["Description".to_string(), format!("Amount ({})", CURRENCY)],
        rows: vec![
            row("Subscription Plan Cost", breakdown.subscription_cost),
            row("Total A La Carte Cost", breakdown.total_ala_carte),
            row("Subtotal", breakdown.grand_total),
            row("GST (18%)", breakdown.tax_amount),
            row("Grand Total (Including GST)", breakdown.final_total),
        ],
    }
}

/// All three tables in display order.
pub fn tables(breakdown: &CostBreakdown) -> Vec<ReportTable> {
    vec![
        ala_carte_table(breakdown),
        subscription_table(breakdown),
        final_balance_table(breakdown),
    ]
}
