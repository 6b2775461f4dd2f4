//! Return decomposition into price, FX and income legs.
//!
//! Results nest in two directions:
//!
//! - across holdings: [`HoldingDateReturn`] (local price return) is embedded
//!   in [`HoldingDateResult`] (reporting-currency legs), and a
//!   [`PortfolioDateResult`] weights every holding of one date
//! - across dates: [`HoldingPeriodResult`] and [`PortfolioPeriodResult`]
//!   aggregate one result per business day
//!
//! Cash legs always add up. Bps legs of a holding do not add up to its total
//! because the total includes the price-times-FX cross term.

mod decomposer;
mod holding;
mod period;
mod portfolio;

pub use decomposer::ReturnDecomposer;
pub use holding::{bps_change, HoldingDateResult, HoldingDateReturn, BPS};
pub use period::{HoldingPeriodResult, PortfolioPeriodResult};
pub use portfolio::PortfolioDateResult;
