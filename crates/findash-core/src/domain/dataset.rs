use serde::Serialize;

use crate::domain::Record;

/// Value domain for the portfolio-value slider, fixed at load time.
///
/// `marks` holds the 0/25/50/75/100th percentiles of the non-null portfolio
/// values, in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderDomain {
    pub min: f64,
    pub max: f64,
    pub marks: Vec<f64>,
}

/// The immutable in-memory table every aggregation reads from.
///
/// Constructed once at startup. Distinct sector values and the slider domain
/// are computed here so dropdown/slider population never rescans the records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    sectors: Vec<String>,
    slider: Option<SliderDomain>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        let mut sectors: Vec<String> = records.iter().map(|r| r.sector.clone()).collect();
        sectors.sort();
        sectors.dedup();

        let slider = slider_domain(&records);

        Self {
            records,
            sectors,
            slider,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct sector values, sorted. The value domain of both sector
    /// dropdowns.
    pub fn sectors(&self) -> &[String] {
        &self.sectors
    }

    /// `None` when no record carries a portfolio value.
    pub fn slider(&self) -> Option<&SliderDomain> {
        self.slider.as_ref()
    }
}

fn slider_domain(records: &[Record]) -> Option<SliderDomain> {
    let mut values: Vec<f64> = records.iter().filter_map(|r| r.portfolio_value).collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let marks = [0.0, 0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|&q| quantile(&values, q))
        .collect();

    Some(SliderDomain {
        min: values[0],
        max: values[values.len() - 1],
        marks,
    })
}

/// Linearly interpolated quantile over a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = rank - lower as f64;
    sorted[lower] * (1.0 - weight) + sorted[upper] * weight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sector: &str, portfolio_value: Option<f64>) -> Record {
        Record::new("Acme", sector, None, None, portfolio_value)
    }

    #[test]
    fn deduplicates_and_sorts_sectors() {
        let dataset = Dataset::new(vec![
            record("Tech", None),
            record("Finance", None),
            record("Tech", None),
        ]);
        assert_eq!(dataset.sectors(), ["Finance", "Tech"]);
    }

    #[test]
    fn slider_domain_spans_portfolio_values() {
        let dataset = Dataset::new(vec![
            record("Tech", Some(1000.0)),
            record("Tech", Some(3000.0)),
            record("Tech", None),
            record("Tech", Some(2000.0)),
        ]);

        let slider = dataset.slider().expect("domain must exist");
        assert_eq!(slider.min, 1000.0);
        assert_eq!(slider.max, 3000.0);
        assert_eq!(slider.marks, [1000.0, 1500.0, 2000.0, 2500.0, 3000.0]);
    }

    #[test]
    fn no_slider_domain_without_values() {
        let dataset = Dataset::new(vec![record("Tech", None)]);
        assert!(dataset.slider().is_none());
    }
}
