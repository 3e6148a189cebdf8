// Shared fixtures for findash behavior tests.
pub use findash_core::{
    aggregate, load_dataset, ChartKind, Dataset, DatasetSummary, PriceDistribution, Record,
};
use time::macros::date;

pub fn record(
    company: &str,
    sector: &str,
    stock_price: Option<f64>,
    date: Option<time::Date>,
    portfolio_value: Option<f64>,
) -> Record {
    Record::new(company, sector, stock_price, date, portfolio_value)
}

/// Six-record dataset spanning three sectors and two months, with one
/// record whose price, date, and value are all null.
pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        record(
            "Acme",
            "Tech",
            Some(10.0),
            Some(date!(2023 - 01 - 05)),
            Some(1000.0),
        ),
        record(
            "Initech",
            "Tech",
            Some(20.0),
            Some(date!(2023 - 01 - 12)),
            Some(2000.0),
        ),
        record(
            "Umbrella",
            "Health",
            Some(35.0),
            Some(date!(2023 - 01 - 20)),
            Some(1500.0),
        ),
        record(
            "Globex",
            "Finance",
            Some(110.0),
            Some(date!(2023 - 02 - 10)),
            Some(3000.0),
        ),
        record(
            "Hooli",
            "Finance",
            Some(95.0),
            Some(date!(2023 - 02 - 14)),
            Some(2500.0),
        ),
        record("Vandelay", "Finance", None, None, None),
    ])
}

pub fn histogram_total(distribution: &PriceDistribution) -> u64 {
    match distribution {
        PriceDistribution::Empty => 0,
        PriceDistribution::Binned { series, .. } => series
            .iter()
            .map(|s| s.counts.iter().sum::<u64>())
            .sum(),
    }
}
