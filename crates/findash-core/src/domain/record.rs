use time::Date;

use crate::domain::YearMonth;

/// One row of the source table after type coercion.
///
/// `None` in a numeric or date field means the source cell failed to parse.
/// Aggregations exclude such values instead of erroring.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub company: String,
    pub sector: String,
    pub stock_price: Option<f64>,
    pub date: Option<Date>,
    /// Derived from `date` at load time; `None` whenever the date is.
    pub period: Option<YearMonth>,
    pub portfolio_value: Option<f64>,
}

impl Record {
    pub fn new(
        company: impl Into<String>,
        sector: impl Into<String>,
        stock_price: Option<f64>,
        date: Option<Date>,
        portfolio_value: Option<f64>,
    ) -> Self {
        Self {
            company: company.into(),
            sector: sector.into(),
            stock_price,
            period: date.map(YearMonth::from_date),
            date,
            portfolio_value,
        }
    }
}
