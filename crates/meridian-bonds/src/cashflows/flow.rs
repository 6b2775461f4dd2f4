//! Valued cash-flow rows.

use serde::{Deserialize, Serialize};

use meridian_core::Date;

/// One payment date with its flow and present value.
///
/// Rows are produced by [`CashFlowValuator`](super::CashFlowValuator) and
/// never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowDate {
    date: Date,
    days_to_flow: i64,
    discount_rate: f64,
    cash_flow: f64,
    present_value: f64,
}

impl CashFlowDate {
    pub(crate) fn new(
        date: Date,
        days_to_flow: i64,
        discount_rate: f64,
        cash_flow: f64,
        present_value: f64,
    ) -> Self {
        Self {
            date,
            days_to_flow,
            discount_rate,
            cash_flow,
            present_value,
        }
    }

    /// Payment date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Calendar days from the curve date to the payment.
    pub fn days_to_flow(&self) -> i64 {
        self.days_to_flow
    }

    /// Curve rate at the flow's term.
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Undiscounted amount paid.
    pub fn cash_flow(&self) -> f64 {
        self.cash_flow
    }

    /// Discounted amount.
    pub fn present_value(&self) -> f64 {
        self.present_value
    }

    /// `present_value / cash_flow`, or `NaN` for a zero flow.
    pub fn discount_factor(&self) -> f64 {
        if self.cash_flow == 0.0 {
            f64::NAN
        } else {
            self.present_value / self.cash_flow
        }
    }
}
