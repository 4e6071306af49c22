use rust_decimal::Decimal;
use tails_calc::{compute, AlaCarteInput, CostBreakdown, PlanInput, PlanType, Service};

fn sample_plans() -> Vec<PlanInput> {
    let mut plans = Vec::new();
    for plan_type in PlanType::ALL {
        for daily in 0..=2 {
            for weekly in [0, 1, 4, 7] {
                for (grooming, vet, training) in [(0, 0, 0), (1, 2, 3), (28, 28, 28)] {
                    for customers in [1, 2, 28] {
                        plans.push(PlanInput {
                            daily_walk_count: daily,
                            walks_per_week: weekly,
                            grooming_per_month: grooming,
                            vet_checkups_per_month: vet,
                            training_per_month: training,
                            customer_count: customers,
                            plan_type,
                        });
                    }
                }
            }
        }
    }
    plans
}

fn extras(n: u64) -> AlaCarteInput {
    AlaCarteInput {
        walks: n,
        grooming: n / 2,
        vet_checkups: n / 3,
        training: n,
    }
}

#[test]
fn test_totals_are_ordered() {
    for plan in sample_plans() {
        for n in [0, 5] {
            let b = compute(&plan, &extras(n));
            let scaled = b.discounted_cost * Decimal::from(plan.customer_count);
            assert!(b.final_total >= b.grand_total, "{:?}", plan);
            assert!(b.grand_total >= scaled, "{:?}", plan);
        }
    }
}

#[test]
fn test_discount_and_tax_identities() {
    let rate = Decimal::new(18, 2);
    for plan in sample_plans() {
        let b = compute(&plan, &extras(3));
        assert_eq!(b.discount_amount, b.total_cost - b.discounted_cost);
        assert_eq!(b.tax_amount, b.grand_total * rate);
        assert_eq!(b.final_total, b.grand_total + b.tax_amount);
        assert_eq!(
            b.discounted_cost,
            b.total_cost * (Decimal::ONE_HUNDRED - Decimal::from(b.discount_percent))
                / Decimal::ONE_HUNDRED
        );
        assert_eq!(
            b.grand_total,
            b.discounted_cost * Decimal::from(plan.customer_count) + b.total_ala_carte
        );
    }
}

type PlanField = (&'static str, fn(&mut PlanInput, u32));
type ExtraField = (&'static str, fn(&mut AlaCarteInput, u64));

const PLAN_FIELDS: [PlanField; 6] = [
    ("daily_walk_count", |p, n| p.daily_walk_count = n),
    ("walks_per_week", |p, n| p.walks_per_week = n),
    ("grooming_per_month", |p, n| p.grooming_per_month = n),
    ("vet_checkups_per_month", |p, n| p.vet_checkups_per_month = n),
    ("training_per_month", |p, n| p.training_per_month = n),
    ("customer_count", |p, n| p.customer_count = n),
];

const EXTRA_FIELDS: [(Service, ExtraField); 4] = [
    (Service::Walk, ("walks", |a, n| a.walks = n)),
    (Service::Grooming, ("grooming", |a, n| a.grooming = n)),
    (Service::VetCheckup, ("vet_checkups", |a, n| a.vet_checkups = n)),
    (Service::Training, ("training", |a, n| a.training = n)),
];

fn line_costs(b: &CostBreakdown) -> [Decimal; 4] {
    [b.walk_cost, b.grooming_cost, b.vet_cost, b.training_cost]
}

fn assert_totals_not_lower(lower: &CostBreakdown, higher: &CostBreakdown, field: &str) {
    assert!(higher.total_cost >= lower.total_cost, "{field}");
    assert!(higher.subscription_cost >= lower.subscription_cost, "{field}");
    assert!(higher.total_ala_carte >= lower.total_ala_carte, "{field}");
    assert!(higher.grand_total >= lower.grand_total, "{field}");
    assert!(higher.final_total >= lower.final_total, "{field}");
}

#[test]
fn test_raising_one_plan_quantity_never_lowers_cost() {
    let none = AlaCarteInput::default();

    for plan_type in PlanType::ALL {
        for (field, set) in PLAN_FIELDS {
            for step in 0..5u32 {
                let mut lower_plan = PlanInput {
                    plan_type,
                    ..PlanInput::default()
                };
                set(&mut lower_plan, step);
                let mut higher_plan = lower_plan.clone();
                set(&mut higher_plan, step + 1);

                let lower = compute(&lower_plan, &none);
                let higher = compute(&higher_plan, &none);

                for (low, high) in line_costs(&lower).iter().zip(line_costs(&higher)) {
                    assert!(high >= *low, "{field} at {step}");
                }
                assert_totals_not_lower(&lower, &higher, field);
            }
        }
    }
}

#[test]
fn test_raising_one_ala_carte_count_never_lowers_cost() {
    let plan = PlanInput::default();

    for (service, (field, set)) in EXTRA_FIELDS {
        for step in 0..5u64 {
            let mut lower_extras = AlaCarteInput::default();
            set(&mut lower_extras, step);
            let mut higher_extras = lower_extras.clone();
            set(&mut higher_extras, step + 1);

            let lower = compute(&plan, &lower_extras);
            let higher = compute(&plan, &higher_extras);

            let line = |b: &CostBreakdown| {
                b.ala_carte
                    .iter()
                    .find(|l| l.service == service)
                    .map(|l| l.cost)
                    .unwrap()
            };
            assert!(line(&higher) > line(&lower), "{field} at {step}");
            assert_eq!(higher.subscription_cost, lower.subscription_cost, "{field}");
            assert_totals_not_lower(&lower, &higher, field);
        }
    }
}

#[test]
fn test_zero_quantities_leave_only_ala_carte() {
    for plan_type in PlanType::ALL {
        let plan = PlanInput {
            daily_walk_count: 0,
            walks_per_week: 0,
            grooming_per_month: 0,
            vet_checkups_per_month: 0,
            training_per_month: 0,
            customer_count: 7,
            plan_type,
        };
        let b = compute(&plan, &extras(4));
        assert_eq!(b.total_cost, Decimal::ZERO);
        assert_eq!(b.discounted_cost, Decimal::ZERO);
        assert_eq!(b.grand_total, b.total_ala_carte);
        assert_eq!(b.final_total, b.total_ala_carte * Decimal::new(118, 2));
    }
}

#[test]
fn test_ala_carte_is_not_discounted_or_scaled_by_customers() {
    let plan = PlanInput {
        daily_walk_count: 0,
        walks_per_week: 0,
        grooming_per_month: 0,
        vet_checkups_per_month: 0,
        training_per_month: 0,
        customer_count: 10,
        plan_type: PlanType::HalfYearly,
    };
    let b = compute(
        &plan,
        &AlaCarteInput {
            vet_checkups: 1,
            ..AlaCarteInput::default()
        },
    );
    assert_eq!(b.total_ala_carte, Decimal::from(3500));
    assert_eq!(b.grand_total, Decimal::from(3500));
}

#[test]
fn test_plan_selection_is_deterministic() {
    let plans = [PlanType::Monthly, PlanType::Quarterly, PlanType::HalfYearly];
    let expected = [(1, 10), (3, 20), (6, 30)];
    for (plan_type, (months, discount)) in plans.iter().zip(expected) {
        let plan = PlanInput {
            plan_type: *plan_type,
            ..PlanInput::default()
        };
        let b = compute(&plan, &AlaCarteInput::default());
        assert_eq!((b.months, b.discount_percent), (months, discount));
    }
}

#[test]
fn test_large_ala_carte_counts_are_billed_in_full() {
    let walks_only = compute(
        &PlanInput::default(),
        &AlaCarteInput {
            walks: 5_000_000_000,
            ..AlaCarteInput::default()
        },
    );
    assert_eq!(walks_only.total_ala_carte.to_string(), "2500000000000.00");

    let b = compute(
        &PlanInput::default(),
        &AlaCarteInput {
            walks: u64::MAX,
            grooming: u64::MAX,
            vet_checkups: u64::MAX,
            training: u64::MAX,
        },
    );
    assert_eq!(b.total_ala_carte, Decimal::from(u64::MAX) * Decimal::from(9000));
    assert!(b.final_total > b.grand_total);
}
