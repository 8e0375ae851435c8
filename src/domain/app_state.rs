use rust_decimal::Decimal;
use thiserror::Error;

use super::entities::{FixedCosts, ProductEntry};
use crate::i18n::Language;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("product index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}

/// One editable field of a product entry.
#[derive(Clone, Debug, PartialEq)]
pub enum ProductField {
    Name(String),
    Price(Decimal),
    Units(u32),
    Materials(Decimal),
    Shipping(Decimal),
    Fees(Decimal),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixedCostField {
    Rent,
    Internet,
    Advertising,
    Other,
}

/// Session state for the calculator, owned by the root component and shared
/// through context. One session, one user, nothing persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub authenticated: bool,
    pub language: Language,
    pub products: Vec<ProductEntry>,
    pub fixed_costs: FixedCosts,
}

impl AppState {
    /// A fresh session starts locked, with a single blank product row.
    pub fn new(language: Language) -> Self {
        Self {
            authenticated: false,
            language,
            products: vec![ProductEntry::default()],
            fixed_costs: FixedCosts::default(),
        }
    }

    pub fn add_entry(&mut self) {
        self.products.push(ProductEntry::default());
    }

    /// Removes the entry at `index`. Removing the last remaining entry is a
    /// silent no-op: the form always keeps at least one row.
    pub fn remove_entry(&mut self, index: usize) -> Result<(), StateError> {
        let len = self.products.len();
        if index >= len {
            return Err(StateError::OutOfRange { index, len });
        }
        if len > 1 {
            self.products.remove(index);
        }
        Ok(())
    }

    /// Sets one field on the entry at `index`. Negative amounts are clamped
    /// to zero rather than rejected, matching the form's input floor.
    pub fn update_entry(&mut self, index: usize, field: ProductField) -> Result<(), StateError> {
        let len = self.products.len();
        let entry = self
            .products
            .get_mut(index)
            .ok_or(StateError::OutOfRange { index, len })?;
        match field {
            ProductField::Name(name) => entry.name = name,
            ProductField::Price(value) => entry.price = clamp_amount(value),
            ProductField::Units(value) => entry.units = value,
            ProductField::Materials(value) => entry.materials = clamp_amount(value),
            ProductField::Shipping(value) => entry.shipping = clamp_amount(value),
            ProductField::Fees(value) => entry.fees = clamp_amount(value),
        }
        Ok(())
    }

    pub fn update_fixed(&mut self, field: FixedCostField, value: Decimal) {
        let value = clamp_amount(value);
        match field {
            FixedCostField::Rent => self.fixed_costs.rent = value,
            FixedCostField::Internet => self.fixed_costs.internet = value,
            FixedCostField::Advertising => self.fixed_costs.advertising = value,
            FixedCostField::Other => self.fixed_costs.other = value,
        }
    }
}

fn clamp_amount(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Language::English)
    }

    #[test]
    fn new_session_has_one_blank_row() {
        let st = state();
        assert!(!st.authenticated);
        assert_eq!(st.products, vec![ProductEntry::default()]);
    }

    #[test]
    fn add_then_remove_shifts_positions() {
        let mut st = state();
        st.add_entry();
        st.add_entry();
        st.update_entry(1, ProductField::Name("middle".into())).unwrap();
        st.update_entry(2, ProductField::Name("last".into())).unwrap();
        st.remove_entry(1).unwrap();
        assert_eq!(st.products.len(), 2);
        assert_eq!(st.products[1].name, "last");
    }

    #[test]
    fn removing_sole_entry_is_a_no_op() {
        let mut st = state();
        st.update_entry(0, ProductField::Units(3)).unwrap();
        let before = st.products.clone();
        st.remove_entry(0).unwrap();
        assert_eq!(st.products, before);
    }

    #[test]
    fn out_of_range_indexes_are_errors() {
        let mut st = state();
        assert_eq!(
            st.remove_entry(1),
            Err(StateError::OutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            st.update_entry(5, ProductField::Units(1)),
            Err(StateError::OutOfRange { index: 5, len: 1 })
        );
    }

    #[test]
    fn negative_amounts_clamp_to_zero() {
        // Clamp-to-zero is the chosen policy for out-of-range assignments;
        // the UI floor makes these unreachable from the form itself.
        let mut st = state();
        st.update_entry(0, ProductField::Price(Decimal::from(-50))).unwrap();
        assert_eq!(st.products[0].price, Decimal::ZERO);
        st.update_fixed(FixedCostField::Rent, Decimal::from(-1));
        assert_eq!(st.fixed_costs.rent, Decimal::ZERO);
        st.update_fixed(FixedCostField::Advertising, Decimal::from(80));
        assert_eq!(st.fixed_costs.advertising, Decimal::from(80));
    }
}
