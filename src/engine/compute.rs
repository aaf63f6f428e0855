//! Rule bracket lookup and payment arithmetic

use super::{ResultSet, Selection};
use crate::error::CalcError;
use crate::rules::{Bracket, ProductRule};

/// First bracket in listed order whose credit range contains `net_credit`,
/// inclusive on both ends
pub fn find_bracket(rule: &ProductRule, net_credit: f64) -> Option<&Bracket> {
    rule.settings.iter().find(|bracket| bracket.contains(net_credit))
}

/// Lowest net credit any bracket of the product accepts
pub fn min_price(rule: &ProductRule) -> f64 {
    rule.settings
        .iter()
        .map(|bracket| bracket.min_credit)
        .fold(f64::INFINITY, f64::min)
}

/// Highest net credit any bracket of the product accepts
pub fn max_price(rule: &ProductRule) -> f64 {
    rule.settings
        .iter()
        .map(|bracket| bracket.max_credit)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Repayment period bounds from the bracket matching `net_credit`
pub fn period_bounds(rule: &ProductRule, net_credit: f64) -> Option<(u32, u32)> {
    find_bracket(rule, net_credit).map(|bracket| (bracket.min_period, bracket.max_period))
}

/// Round to exactly two decimal places, half away from zero
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the full result set for one selection against its product rule.
///
/// Pure and deterministic: identical inputs always produce an identical
/// result set. Fails if the net credit falls outside every bracket or if a
/// zero period slipped past the host's controls; both are terminal for the
/// current selection.
pub fn compute(selection: &Selection, rule: &ProductRule) -> Result<ResultSet, CalcError> {
    let initial_credit = selection.net_credit();
    let bracket = find_bracket(rule, initial_credit).ok_or_else(|| {
        log::error!(
            "no bracket covers net credit {initial_credit:.2} for product {}",
            rule.id
        );
        CalcError::NoBracketMatch {
            product_id: rule.id,
            net_credit: initial_credit,
        }
    })?;
    if selection.period == 0 {
        log::error!("zero repayment period for product {}", rule.id);
        return Err(CalcError::InvalidPeriod(selection.period));
    }

    let months = f64::from(selection.period);
    let total_payable = round2(
        initial_credit * (1.0 + bracket.interest / 100.0)
            + bracket.contract_fee
            + bracket.managing_fee * months,
    );
    let monthly_payable = round2(total_payable / months);

    Ok(ResultSet {
        initial_credit,
        interest: bracket.interest,
        contract_fee: bracket.contract_fee,
        managing_fee: bracket.managing_fee,
        total_payable,
        monthly_payable,
    })
}
