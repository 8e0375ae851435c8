use crate::i18n::{self, Label, Language};

use super::entities::ProductEntry;
use super::evaluation::AggregateResult;

/// One sheet's worth of tabular data, ready to hand to the spreadsheet
/// writer. Building rows is pure; all file concerns live in
/// [`crate::infra::spreadsheet`].
#[derive(Clone, Debug, PartialEq)]
pub struct ExportTable {
    pub sheet: &'static str,
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Builds the per-product table and the five-row summary table for one
/// language. The workbook exports both languages, so the caller invokes this
/// once per entry in [`Language::ALL`].
pub fn build_tables(
    language: Language,
    products: &[ProductEntry],
    aggregate: &AggregateResult,
) -> [ExportTable; 2] {
    let product_rows = products
        .iter()
        .map(|entry| {
            vec![
                entry.name.clone(),
                entry.price.normalize().to_string(),
                entry.units.to_string(),
                entry.line_revenue().normalize().to_string(),
                entry.unit_variable_cost().normalize().to_string(),
            ]
        })
        .collect();

    let products_table = ExportTable {
        sheet: i18n::text(language, Label::SheetProducts),
        header: vec![
            i18n::text(language, Label::ColProduct),
            i18n::text(language, Label::ColPrice),
            i18n::text(language, Label::ColUnits),
            i18n::text(language, Label::ColRevenue),
            i18n::text(language, Label::ColUnitVariableCost),
        ],
        rows: product_rows,
    };

    let summary_rows = [
        (Label::RowRevenue, aggregate.total_revenue),
        (Label::RowVariableCosts, aggregate.total_variable_cost),
        (Label::RowFixedCosts, aggregate.total_fixed_cost),
        (Label::RowProfit, aggregate.profit),
        (Label::RowMargin, aggregate.margin_percent),
    ]
    .into_iter()
    .map(|(label, amount)| {
        vec![
            i18n::text(language, label).to_string(),
            amount.normalize().to_string(),
        ]
    })
    .collect();

    let summary_table = ExportTable {
        sheet: i18n::text(language, Label::SheetSummary),
        header: vec![
            i18n::text(language, Label::ColConcept),
            i18n::text(language, Label::ColAmount),
        ],
        rows: summary_rows,
    };

    [products_table, summary_table]
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::entities::FixedCosts;
    use crate::domain::evaluation::evaluate;

    fn sample() -> (Vec<ProductEntry>, FixedCosts) {
        let products = vec![
            ProductEntry {
                name: "Candles".into(),
                price: Decimal::from(100),
                units: 10,
                materials: Decimal::from(20),
                shipping: Decimal::from(5),
                fees: Decimal::from(5),
            },
            ProductEntry {
                name: "Soap".into(),
                price: Decimal::from(40),
                units: 25,
                materials: Decimal::from(12),
                ..ProductEntry::default()
            },
        ];
        let fixed = FixedCosts {
            rent: Decimal::from(200),
            internet: Decimal::from(30),
            ..FixedCosts::default()
        };
        (products, fixed)
    }

    #[test]
    fn product_rows_match_entry_count_and_headers_localize() {
        let (products, fixed) = sample();
        let aggregate = evaluate(&products, &fixed);

        let [products_en, _] = build_tables(Language::English, &products, &aggregate);
        assert_eq!(products_en.sheet, "Products_EN");
        assert_eq!(products_en.header[0], "Product / Service");
        assert_eq!(products_en.rows.len(), 2);

        let [products_es, summary_es] = build_tables(Language::Spanish, &products, &aggregate);
        assert_eq!(products_es.sheet, "Productos_ES");
        assert_eq!(products_es.header[0], "Producto / Servicio");
        assert_eq!(summary_es.rows[0][0], "Ingresos");
        assert_eq!(summary_es.rows.len(), 5);
    }

    #[test]
    fn summed_rows_reproduce_the_aggregate() {
        let (products, fixed) = sample();
        let aggregate = evaluate(&products, &fixed);
        let [products_table, summary_table] =
            build_tables(Language::English, &products, &aggregate);

        let revenue_from_rows: Decimal = products_table
            .rows
            .iter()
            .map(|row| row[3].parse::<Decimal>().unwrap())
            .sum();
        assert_eq!(revenue_from_rows, aggregate.total_revenue);

        let amount = |index: usize| summary_table.rows[index][1].parse::<Decimal>().unwrap();
        assert_eq!(amount(0), aggregate.total_revenue);
        assert_eq!(amount(1) + amount(2), aggregate.total_expenses);
        assert_eq!(amount(3), aggregate.profit);
    }

    #[test]
    fn empty_products_still_produce_a_full_summary() {
        let fixed = FixedCosts::default();
        let aggregate = evaluate(&[], &fixed);
        let [products_table, summary_table] = build_tables(Language::English, &[], &aggregate);
        assert!(products_table.rows.is_empty());
        assert_eq!(summary_table.rows.len(), 5);
        assert_eq!(summary_table.rows[4][1], "0");
    }
}
