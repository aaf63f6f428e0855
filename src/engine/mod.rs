//! Pure calculation engine: selection in, result set out

mod compute;
mod results;
mod selection;

pub use compute::{compute, find_bracket, max_price, min_price, period_bounds};
pub use results::ResultSet;
pub use selection::Selection;

// ============================================================================
// Period Grid
// ============================================================================
// Repayment periods are offered in whole months on a fixed six-month grid;
// bracket period bounds in the rule table are aligned to it.

/// Spacing between selectable repayment periods, in months
pub const PERIOD_STEP_MONTHS: u32 = 6;
