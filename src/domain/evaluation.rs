use rust_decimal::Decimal;

use super::entities::{FixedCosts, ProductEntry};

/// Totals derived from the current session state. Recomputed from scratch on
/// every evaluation; never stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateResult {
    pub total_revenue: Decimal,
    pub total_variable_cost: Decimal,
    pub total_fixed_cost: Decimal,
    pub total_expenses: Decimal,
    pub profit: Decimal,
    /// Profit as a percentage of revenue. Defined as exactly zero when there
    /// is no revenue, so a fixed-cost-only month reads 0%, not a division
    /// error.
    pub margin_percent: Decimal,
}

pub fn evaluate(products: &[ProductEntry], fixed_costs: &FixedCosts) -> AggregateResult {
    let total_revenue: Decimal = products.iter().map(ProductEntry::line_revenue).sum();
    let total_variable_cost: Decimal = products.iter().map(ProductEntry::line_variable_cost).sum();
    let total_fixed_cost = fixed_costs.total();
    let total_expenses = total_variable_cost + total_fixed_cost;
    let profit = total_revenue - total_expenses;

    let margin_percent = if total_revenue > Decimal::ZERO {
        profit / total_revenue * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    AggregateResult {
        total_revenue,
        total_variable_cost,
        total_fixed_cost,
        total_expenses,
        profit,
        margin_percent,
    }
}

/// Qualitative profitability rating derived from the margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Loss,
    VeryLow,
    Fragile,
    Healthy,
    VeryProfitable,
}

impl Band {
    pub const ALL: [Band; 5] = [
        Band::Loss,
        Band::VeryLow,
        Band::Fragile,
        Band::Healthy,
        Band::VeryProfitable,
    ];

    /// Margin range this band covers, for the legend.
    pub fn range_label(self) -> &'static str {
        match self {
            Band::Loss => "< 0%",
            Band::VeryLow => "0 – 5%",
            Band::Fragile => "5 – 10%",
            Band::Healthy => "10 – 20%",
            Band::VeryProfitable => "+20%",
        }
    }
}

/// Maps a margin percentage onto its band. Lower edges are inclusive, so the
/// boundaries 0, 5, 10 and 20 each belong to the band above them.
pub fn classify(margin_percent: Decimal) -> Band {
    if margin_percent < Decimal::ZERO {
        Band::Loss
    } else if margin_percent < Decimal::from(5) {
        Band::VeryLow
    } else if margin_percent < Decimal::from(10) {
        Band::Fragile
    } else if margin_percent < Decimal::from(20) {
        Band::Healthy
    } else {
        Band::VeryProfitable
    }
}
