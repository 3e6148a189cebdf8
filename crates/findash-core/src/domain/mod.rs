//! Domain types for the loaded financial table.

mod dataset;
mod period;
mod record;

pub use dataset::{Dataset, SliderDomain};
pub use period::YearMonth;
pub use record::Record;
