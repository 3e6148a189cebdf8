//! # Findash Core
//!
//! Domain types and the reactive recomputation layer for the findash
//! financial dashboard.
//!
//! ## Overview
//!
//! The crate loads a static financial CSV into an immutable [`Dataset`] once
//! at startup, computes header summary statistics, and exposes four pure
//! aggregation functions that turn (dataset, selection state) into
//! chart-ready derived views:
//!
//! - [`price_distribution`] — sector-partitioned stock-price histogram
//! - [`performance_comparison`] — per-company prices grouped by sector
//! - [`market_trends`] — record counts per calendar month
//! - [`value_distribution`] — portfolio values at or below a slider threshold
//!
//! Derived views are recomputed on demand and never stored; the dataset is
//! the only shared state and is never mutated after load.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`aggregate`] | The four pure aggregation functions and their view types |
//! | [`domain`] | Dataset, record, and year-month period types |
//! | [`loader`] | CSV ingest with soft per-cell coercion |
//! | [`selection`] | Control value types (chart kind) |
//! | [`summary`] | Startup summary statistics |
//!
//! ## Error Handling
//!
//! A missing or structurally broken source file is a fatal [`LoadError`];
//! individual cells that fail numeric or date parsing become `None` and are
//! excluded from every aggregate. An empty filter result is not an error:
//! [`aggregate::PriceDistribution::Empty`] marks it explicitly.

pub mod aggregate;
pub mod domain;
pub mod error;
pub mod loader;
pub mod selection;
pub mod summary;

pub use aggregate::{
    market_trends, performance_comparison, price_distribution, value_distribution,
    CompanyPerformance, CompanyPricePoint, PriceDistribution, SectorHistogram, TrendPoint,
    TrendSeries, ValueDistribution, HISTOGRAM_BINS,
};
pub use domain::{Dataset, Record, SliderDomain, YearMonth};
pub use error::{LoadError, ValidationError};
pub use loader::load_dataset;
pub use selection::ChartKind;
pub use summary::DatasetSummary;
