use serde::Serialize;

use crate::domain::Dataset;

/// Aggregate scalars shown in the dashboard header.
///
/// Computed once at startup; no control re-triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    /// Arithmetic mean of the non-null stock prices. `None` when every price
    /// is null, rendered as a placeholder rather than a number.
    pub average_stock_price: Option<f64>,
}

impl DatasetSummary {
    pub fn compute(dataset: &Dataset) -> Self {
        let prices: Vec<f64> = dataset
            .records()
            .iter()
            .filter_map(|record| record.stock_price)
            .collect();

        let average_stock_price = if prices.is_empty() {
            None
        } else {
            Some(prices.iter().sum::<f64>() / prices.len() as f64)
        };

        Self {
            total_records: dataset.len(),
            average_stock_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;

    fn record(stock_price: Option<f64>) -> Record {
        Record::new("Acme", "Tech", stock_price, None, None)
    }

    #[test]
    fn averages_only_valid_prices() {
        let dataset = Dataset::new(vec![
            record(Some(10.0)),
            record(None),
            record(Some(30.0)),
        ]);

        let summary = DatasetSummary::compute(&dataset);
        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.average_stock_price, Some(20.0));
    }

    #[test]
    fn all_null_prices_yield_no_average() {
        let dataset = Dataset::new(vec![record(None), record(None)]);

        let summary = DatasetSummary::compute(&dataset);
        assert_eq!(summary.total_records, 2);
        assert_eq!(summary.average_stock_price, None);
    }
}
