//! Portfolio composition types.

mod position;

pub use position::{PortfolioPosition, PortfolioSnapshot};
