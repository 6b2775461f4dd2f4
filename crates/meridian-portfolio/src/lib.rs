//! # Meridian Portfolio
//!
//! Holding and portfolio return decomposition.
//!
//! Each business day a holding's return is split into a local price leg
//! (clean price change plus coupons, amortization and dividends) and an FX
//! leg into the reporting currency. Holdings are weighted into a portfolio
//! result per date, and date results are aggregated over a period.
//!
//! ## Design
//!
//! - **Providers**: prices, payouts, FX and compositions come through
//!   [`providers`] traits; [`InMemoryMarketData`] implements all four
//! - **Zero guards**: missing data reads as zero and every return ratio
//!   involving a zero is zero, never `NaN` or infinite
//! - **Per-run caching**: a [`CalculationContext`] computes each holding
//!   return at most once, including under parallel date processing
//! - **Config-driven parallelism**: optional rayon support across dates
//!
//! ## Feature Flags
//!
//! - `parallel`: compute the dates of a period with rayon when
//!   [`ReturnConfig::should_parallelize`] allows it

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod config;
pub mod context;
pub mod error;
pub mod parallel;
pub mod providers;
pub mod returns;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::ReturnConfig;
    pub use crate::context::CalculationContext;
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::providers::{
        FxProvider, InMemoryMarketData, MarketData, PayoutProvider, Payouts, PortfolioProvider,
        PriceProvider,
    };
    pub use crate::returns::{
        HoldingDateResult, HoldingDateReturn, HoldingPeriodResult, PortfolioDateResult,
        PortfolioPeriodResult, ReturnDecomposer,
    };
    pub use crate::types::{PortfolioPosition, PortfolioSnapshot};
}

pub use config::ReturnConfig;
pub use context::CalculationContext;
pub use error::{PortfolioError, PortfolioResult};
pub use providers::{InMemoryMarketData, MarketData};
pub use returns::{
    HoldingDateResult, HoldingDateReturn, HoldingPeriodResult, PortfolioDateResult,
    PortfolioPeriodResult, ReturnDecomposer,
};
pub use types::{PortfolioPosition, PortfolioSnapshot};
