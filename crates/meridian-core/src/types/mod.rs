//! Domain value types.

mod currency;
mod date;
mod interval;

pub use currency::Currency;
pub use date::Date;
pub use interval::{Frequency, IntervalUnit};
