//! CSV ingest for the dashboard dataset.
//!
//! The loader is the only I/O in this crate. It runs once at startup; a
//! missing or structurally broken file is fatal, while individual cells that
//! fail numeric or date coercion become `None` and are aggregated around.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::domain::{Dataset, Record};
use crate::LoadError;

const COL_COMPANY: &str = "Company";
const COL_SECTOR: &str = "Sector";
const COL_STOCK_PRICE: &str = "Stock Price";
const COL_DATE: &str = "Date";
const COL_PORTFOLIO_VALUE: &str = "Portfolio Value";

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const US_DATE: &[BorrowedFormatItem<'static>] = format_description!("[month]/[day]/[year]");

/// Column positions resolved from the header row.
struct Columns {
    company: usize,
    sector: usize,
    stock_price: usize,
    date: usize,
    portfolio_value: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        // Column names are exact and case-sensitive.
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or(LoadError::MissingColumn { name })
        };

        Ok(Self {
            company: position(COL_COMPANY)?,
            sector: position(COL_SECTOR)?,
            stock_price: position(COL_STOCK_PRICE)?,
            date: position(COL_DATE)?,
            portfolio_value: position(COL_PORTFOLIO_VALUE)?,
        })
    }
}

/// Load and coerce the dataset from a delimited text file.
///
/// # Errors
/// Returns [`LoadError`] if the file cannot be read, the CSV structure is
/// malformed, or a required column is absent.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file);

    let columns = Columns::resolve(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(coerce_row(&row, &columns));
    }

    Ok(Dataset::new(records))
}

fn coerce_row(row: &StringRecord, columns: &Columns) -> Record {
    let cell = |index: usize| row.get(index).unwrap_or_default();

    Record::new(
        cell(columns.company),
        cell(columns.sector),
        coerce_numeric(cell(columns.stock_price)),
        coerce_date(cell(columns.date)),
        coerce_numeric(cell(columns.portfolio_value)),
    )
}

fn coerce_numeric(cell: &str) -> Option<f64> {
    let value: f64 = cell.parse().ok()?;
    value.is_finite().then_some(value)
}

fn coerce_date(cell: &str) -> Option<Date> {
    Date::parse(cell, ISO_DATE)
        .or_else(|_| Date::parse(cell, US_DATE))
        .ok()
}
