//! Positions and dated portfolio compositions.

use meridian_core::{Currency, Date};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quantity of one holding, denominated in the holding's currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPosition {
    /// Holding identifier, as known to the price and payout providers.
    pub holding_id: String,

    /// Units held.
    pub amount: Decimal,

    /// Currency the holding is priced in.
    pub currency: Currency,
}

impl PortfolioPosition {
    /// Creates a position.
    pub fn new(holding_id: impl Into<String>, amount: Decimal, currency: Currency) -> Self {
        Self {
            holding_id: holding_id.into(),
            amount,
            currency,
        }
    }

    /// Units held as `f64` for the return formulas.
    pub fn amount_f64(&self) -> f64 {
        // Decimal always fits an f64, possibly with rounding.
        self.amount.to_f64().unwrap_or(0.0)
    }
}

/// The positions of a named portfolio as of a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Portfolio name.
    pub name: String,

    /// Date the composition became effective.
    pub date: Date,

    /// Positions, one per holding.
    pub positions: Vec<PortfolioPosition>,
}

impl PortfolioSnapshot {
    /// Creates an empty snapshot.
    pub fn new(name: impl Into<String>, date: Date) -> Self {
        Self {
            name: name.into(),
            date,
            positions: Vec::new(),
        }
    }

    /// Adds a position (builder style).
    #[must_use]
    pub fn with_position(mut self, position: PortfolioPosition) -> Self {
        self.positions.push(position);
        self
    }

    /// Looks up the position in `holding_id`.
    pub fn position(&self, holding_id: &str) -> Option<&PortfolioPosition> {
        self.positions.iter().find(|p| p.holding_id == holding_id)
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the portfolio holds nothing.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
