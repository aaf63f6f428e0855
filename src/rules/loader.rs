//! Rule table loading and lookup
//!
//! The table is fetched exactly once at startup and is read-only afterwards;
//! every load failure is terminal for the session.

use super::ProductRule;
use crate::error::CalcError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Rule table shipped with the calculator, embedded at build time
const DEFAULT_RULES_JSON: &str = include_str!("../../data/rules.json");

/// Parse a rule table from any reader.
///
/// Unparseable input fails with `MalformedData`.
pub fn load_rules_from_reader<R: Read>(reader: R) -> Result<Vec<ProductRule>, CalcError> {
    let rules: Vec<ProductRule> = serde_json::from_reader(reader)?;
    for rule in &rules {
        check_brackets(rule);
    }
    log::debug!("loaded {} product rules", rules.len());
    Ok(rules)
}

/// Load a rule table from a file path.
///
/// An unreachable source fails with `DataUnavailable`, unparseable content
/// with `MalformedData`.
pub fn load_rules<P: AsRef<Path>>(path: P) -> Result<Vec<ProductRule>, CalcError> {
    let file = File::open(path.as_ref()).map_err(|err| {
        log::error!("cannot open rule table {}: {err}", path.as_ref().display());
        CalcError::DataUnavailable(err)
    })?;
    load_rules_from_reader(file)
}

/// Load the embedded default rule table
pub fn load_default_rules() -> Result<Vec<ProductRule>, CalcError> {
    load_rules_from_reader(DEFAULT_RULES_JSON.as_bytes())
}

/// Linear lookup of a product rule by id
pub fn find_product(rules: &[ProductRule], product_id: u32) -> Option<&ProductRule> {
    rules.iter().find(|rule| rule.id == product_id)
}

// Warn-only sanity check on the bracket table; lookup stays first-match
// regardless of what it finds. Credit amounts move in whole currency units,
// so adjacent brackets are expected to sit one unit apart.
fn check_brackets(rule: &ProductRule) {
    if rule.settings.is_empty() {
        log::warn!("product {} has no brackets", rule.id);
        return;
    }
    for pair in rule.settings.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        if upper.min_credit <= lower.max_credit {
            log::warn!(
                "product {}: brackets overlap around credit {}",
                rule.id,
                upper.min_credit
            );
        } else if upper.min_credit - lower.max_credit > 1.0 {
            log::warn!(
                "product {}: bracket gap between {} and {}",
                rule.id,
                lower.max_credit,
                upper.min_credit
            );
        }
    }
}
