//! Output valuation: gross output value and standard-hours output.

use tracing::warn;

use kaizen_model::ProductTable;

/// Gross output value of a product table.
///
/// With `use_prices` set and at least one priced row, this is
/// sum(quantity x price); rows without a price contribute nothing to the
/// sum (logged, since their volume is invisible to the value measure).
///
/// Otherwise the value falls back to sum(quantity), a coarse proxy that is
/// unsuitable for heterogeneous product mixes: a unit count cannot
/// represent value when products are not fungible.
pub fn compute_output_value(products: &ProductTable, use_prices: bool) -> f64 {
    let any_priced = products.rows.iter().any(|row| row.price.is_some());
    if use_prices && any_priced {
        let unpriced = products.rows.iter().filter(|row| row.price.is_none()).count();
        if unpriced > 0 {
            warn!(
                rows = unpriced,
                "product rows without a price excluded from value-based output"
            );
        }
        products
            .rows
            .iter()
            .filter_map(|row| row.price.map(|price| row.quantity * price))
            .sum()
    } else {
        products.rows.iter().map(|row| row.quantity).sum()
    }
}

/// Output measured in standard hours: sum(quantity x std_hours).
///
/// An independent output measure (not a substitute for value), available
/// only when at least one row carries `std_hours`.
pub fn compute_output_std_hours(products: &ProductTable) -> Option<f64> {
    if products.rows.iter().any(|row| row.std_hours.is_some()) {
        Some(
            products
                .rows
                .iter()
                .filter_map(|row| row.std_hours.map(|hours| row.quantity * hours))
                .sum(),
        )
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaizen_model::ProductRow;

    fn row(quantity: f64, price: Option<f64>, std_hours: Option<f64>) -> ProductRow {
        ProductRow {
            product: "P".to_owned(),
            quantity,
            price,
            std_hours,
        }
    }

    #[test]
    fn value_based_output_sums_priced_rows() {
        let products = ProductTable::new(vec![
            row(1000.0, Some(50.0), None),
            row(400.0, Some(120.0), None),
        ]);
        assert_eq!(compute_output_value(&products, true), 98_000.0);
    }

    #[test]
    fn priceless_table_falls_back_to_quantity_sum() {
        // No price column at all: value proxy is the quantity sum.
        let products = ProductTable::new(vec![row(1000.0, None, None)]);
        assert_eq!(compute_output_value(&products, true), 1000.0);
    }

    #[test]
    fn prices_ignored_when_disabled() {
        let products = ProductTable::new(vec![row(10.0, Some(50.0), None)]);
        assert_eq!(compute_output_value(&products, false), 10.0);
    }

    #[test]
    fn mixed_pricing_excludes_unpriced_rows() {
        let products = ProductTable::new(vec![
            row(10.0, Some(5.0), None),
            row(999.0, None, None),
        ]);
        assert_eq!(compute_output_value(&products, true), 50.0);
    }

    #[test]
    fn std_hours_output_requires_data() {
        let products = ProductTable::new(vec![row(10.0, None, None)]);
        assert_eq!(compute_output_std_hours(&products), None);

        let products = ProductTable::new(vec![
            row(1000.0, None, Some(0.2)),
            row(400.0, None, Some(0.5)),
            row(50.0, None, None),
        ]);
        assert_eq!(compute_output_std_hours(&products), Some(400.0));
    }
}
