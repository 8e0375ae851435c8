use rust_decimal::Decimal;

/// One product or service line item.
///
/// All monetary fields are per-unit amounts and are kept non-negative by the
/// state mutators in [`crate::domain::app_state`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductEntry {
    pub name: String,
    /// Selling price per unit.
    pub price: Decimal,
    /// Units sold per month.
    pub units: u32,
    /// Raw material cost per unit.
    pub materials: Decimal,
    /// Shipping cost per unit.
    pub shipping: Decimal,
    /// Marketplace / payment fees per unit.
    pub fees: Decimal,
}

impl ProductEntry {
    /// Sum of the three variable cost components for a single unit.
    pub fn unit_variable_cost(&self) -> Decimal {
        self.materials + self.shipping + self.fees
    }

    pub fn line_revenue(&self) -> Decimal {
        self.price * Decimal::from(self.units)
    }

    pub fn line_variable_cost(&self) -> Decimal {
        self.unit_variable_cost() * Decimal::from(self.units)
    }
}

/// Monthly costs that do not scale with units sold.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedCosts {
    pub rent: Decimal,
    pub internet: Decimal,
    pub advertising: Decimal,
    pub other: Decimal,
}

impl FixedCosts {
    pub fn total(&self) -> Decimal {
        self.rent + self.internet + self.advertising + self.other
    }
}
