//! The reactive core: pure functions mapping (dataset, selection state) to
//! chart-ready derived views.
//!
//! Every function here is stateless and deterministic. The shared filter
//! policy is exact, case-sensitive sector equality; an absent filter keeps
//! all records. Null prices, values, and dates are excluded, never errors.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Dataset, Record, YearMonth};
use crate::selection::ChartKind;

/// Fixed bin count for both histograms.
pub const HISTOGRAM_BINS: usize = 10;

fn sector_matches(record: &Record, sector: Option<&str>) -> bool {
    sector.is_none_or(|wanted| record.sector == wanted)
}

/// Equal-width bin layout over an observed value range.
///
/// A value equal to the upper bound lands in the last bin. A degenerate
/// range (every value identical) collapses to a single bin.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BinLayout {
    min: f64,
    width: f64,
    bins: usize,
}

impl BinLayout {
    /// `values` must be non-empty.
    fn covering(values: &[f64], bins: usize) -> Self {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let width = (max - min) / bins as f64;

        if width == 0.0 {
            Self {
                min,
                width: 0.0,
                bins: 1,
            }
        } else {
            Self { min, width, bins }
        }
    }

    fn bin_count(self) -> usize {
        self.bins
    }

    fn index_of(self, value: f64) -> usize {
        if self.width == 0.0 {
            return 0;
        }
        (((value - self.min) / self.width) as usize).min(self.bins - 1)
    }

    fn edges(self) -> Vec<f64> {
        (0..=self.bins)
            .map(|i| self.min + self.width * i as f64)
            .collect()
    }
}

/// Per-sector bin counts for the multi-series price histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorHistogram {
    pub sector: String,
    pub counts: Vec<u64>,
}

/// Result of [`price_distribution`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceDistribution {
    /// Explicit marker for a filter that matched no priced records, so the
    /// page renders a "no data" state instead of failing.
    Empty,
    Binned {
        /// `bins + 1` boundaries shared by every series.
        edges: Vec<f64>,
        series: Vec<SectorHistogram>,
    },
}

/// Bucket stock prices into equal-width bins, partitioned by sector.
pub fn price_distribution(dataset: &Dataset, sector: Option<&str>) -> PriceDistribution {
    let filtered: Vec<&Record> = dataset
        .records()
        .iter()
        .filter(|record| sector_matches(record, sector))
        .collect();

    let prices: Vec<f64> = filtered
        .iter()
        .filter_map(|record| record.stock_price)
        .collect();
    if prices.is_empty() {
        return PriceDistribution::Empty;
    }

    let layout = BinLayout::covering(&prices, HISTOGRAM_BINS);

    let mut series = Vec::new();
    for sector_name in dataset.sectors() {
        let mut counts = vec![0u64; layout.bin_count()];
        let mut seen = false;
        for record in &filtered {
            if record.sector != *sector_name {
                continue;
            }
            if let Some(price) = record.stock_price {
                counts[layout.index_of(price)] += 1;
                seen = true;
            }
        }
        if seen {
            series.push(SectorHistogram {
                sector: sector_name.clone(),
                counts,
            });
        }
    }

    PriceDistribution::Binned {
        edges: layout.edges(),
        series,
    }
}

/// One priced record for the grouped-bar comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyPricePoint {
    pub company: String,
    pub sector: String,
    pub stock_price: f64,
}

/// Result of [`performance_comparison`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyPerformance {
    pub points: Vec<CompanyPricePoint>,
}

/// One stock price per company, grouped by sector. Records without a price
/// are skipped; an empty result is fine, the chart tolerates empty input.
pub fn performance_comparison(dataset: &Dataset, sector: Option<&str>) -> CompanyPerformance {
    let points = dataset
        .records()
        .iter()
        .filter(|record| sector_matches(record, sector))
        .filter_map(|record| {
            record.stock_price.map(|stock_price| CompanyPricePoint {
                company: record.company.clone(),
                sector: record.sector.clone(),
                stock_price,
            })
        })
        .collect();

    CompanyPerformance { points }
}

/// One month of the trend series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub period: YearMonth,
    pub count: u64,
}

/// Result of [`market_trends`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    /// Render mode only; never influences the counts.
    pub kind: ChartKind,
    pub points: Vec<TrendPoint>,
}

/// Count records per year-month, ascending. Records whose date failed to
/// parse carry no period and are excluded from the grouping.
pub fn market_trends(dataset: &Dataset, sector: Option<&str>, kind: ChartKind) -> TrendSeries {
    let mut groups: BTreeMap<YearMonth, u64> = BTreeMap::new();
    for record in dataset.records() {
        if !sector_matches(record, sector) {
            continue;
        }
        if let Some(period) = record.period {
            *groups.entry(period).or_default() += 1;
        }
    }

    let points = groups
        .into_iter()
        .map(|(period, count)| TrendPoint { period, count })
        .collect();

    TrendSeries { kind, points }
}

/// Result of [`value_distribution`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueDistribution {
    /// Empty when no record survives the slider threshold.
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
}

/// Bucket portfolio values at or below the slider threshold (inclusive) into
/// equal-width bins.
pub fn value_distribution(dataset: &Dataset, max_value: f64) -> ValueDistribution {
    let survivors: Vec<f64> = dataset
        .records()
        .iter()
        .filter_map(|record| record.portfolio_value)
        .filter(|&value| value <= max_value)
        .collect();

    if survivors.is_empty() {
        return ValueDistribution {
            edges: Vec::new(),
            counts: Vec::new(),
        };
    }

    let layout = BinLayout::covering(&survivors, HISTOGRAM_BINS);
    let mut counts = vec![0u64; layout.bin_count()];
    for value in &survivors {
        counts[layout.index_of(*value)] += 1;
    }

    ValueDistribution {
        edges: layout.edges(),
        counts,
    }
}
