//! Crate-wide error type

use thiserror::Error;

/// Failures surfaced by rule loading and payment computation.
///
/// Every variant is terminal for the current operation: the caller is
/// expected to drop the attempt and show a generic error message, never to
/// retry or substitute fallback values.
#[derive(Debug, Error)]
pub enum CalcError {
    /// The rule source could not be read at all
    #[error("rule data unavailable: {0}")]
    DataUnavailable(#[from] std::io::Error),

    /// The rule source was read but could not be parsed
    #[error("malformed rule data: {0}")]
    MalformedData(#[from] serde_json::Error),

    /// No product with the requested id exists in the loaded table
    #[error("unknown product id {0}")]
    ProductNotFound(u32),

    /// The net credit amount falls outside every bracket of the product
    #[error("no bracket covers net credit {net_credit:.2} for product {product_id}")]
    NoBracketMatch { product_id: u32, net_credit: f64 },

    /// A zero repayment period reached the engine
    #[error("repayment period must be positive, got {0}")]
    InvalidPeriod(u32),
}
