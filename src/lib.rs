//! Loan calculator core: product rule tables and repayment computation
//!
//! Two pieces make up the crate: a read-only rule store loaded once from a
//! static JSON document, and a pure calculation engine mapping the current
//! selection to a fresh set of derived figures. The [`Calculator`] session
//! wraps both and enforces the input constraint policy, so a host UI only
//! has to wire events and render strings.

pub mod calculator;
pub mod engine;
mod error;
pub mod rules;

pub use calculator::Calculator;
pub use engine::{
    compute, find_bracket, max_price, min_price, period_bounds, ResultSet, Selection,
    PERIOD_STEP_MONTHS,
};
pub use error::CalcError;
pub use rules::{
    find_product, load_default_rules, load_rules, load_rules_from_reader, Bracket, ProductRule,
};
