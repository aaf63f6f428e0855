//! Product rule table data structures
//!
//! Shapes match the static JSON document the calculator fetches at startup,
//! hence the camelCase field names on the wire.

use serde::{Deserialize, Serialize};

/// A credit-amount range within a product with its own interest, fee, and
/// period terms. Both credit bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    /// Lowest net credit this bracket applies to
    pub min_credit: f64,
    /// Highest net credit this bracket applies to
    pub max_credit: f64,
    /// Shortest selectable repayment period, whole months
    pub min_period: u32,
    /// Longest selectable repayment period, whole months
    pub max_period: u32,
    /// Annual interest rate, percent
    pub interest: f64,
    /// One-off contract fee, currency units
    pub contract_fee: f64,
    /// Per-month managing fee, currency units
    pub managing_fee: f64,
}

impl Bracket {
    /// Whether this bracket's credit range contains the given net credit
    pub fn contains(&self, net_credit: f64) -> bool {
        self.min_credit <= net_credit && net_credit <= self.max_credit
    }
}

/// A loan category with default selections and its bracket table.
///
/// Brackets are expected to be non-overlapping and to jointly cover the
/// product's price range; lookup takes the first match in listed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRule {
    /// Identifier matching a selectable product
    pub id: u32,
    /// Initial price when the product is chosen
    pub default_credit: f64,
    /// Initial repayment period when the product is chosen, months
    pub default_period: u32,
    /// Bracket table, in lookup order
    pub settings: Vec<Bracket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "id": 1,
            "defaultCredit": 1000,
            "defaultPeriod": 12,
            "settings": [
                {"minCredit": 0, "maxCredit": 5000, "minPeriod": 6,
                 "maxPeriod": 36, "interest": 10, "contractFee": 20,
                 "managingFee": 1}
            ]
        }"#;

        let rule: ProductRule = serde_json::from_str(json).expect("valid rule");
        assert_eq!(rule.id, 1);
        assert_eq!(rule.default_credit, 1000.0);
        assert_eq!(rule.default_period, 12);
        assert_eq!(rule.settings.len(), 1);
        assert_eq!(rule.settings[0].interest, 10.0);
        assert_eq!(rule.settings[0].managing_fee, 1.0);
    }

    #[test]
    fn test_bracket_bounds_inclusive() {
        let bracket = Bracket {
            min_credit: 100.0,
            max_credit: 999.0,
            min_period: 6,
            max_period: 24,
            interest: 14.5,
            contract_fee: 15.0,
            managing_fee: 2.0,
        };

        assert!(bracket.contains(100.0));
        assert!(bracket.contains(999.0));
        assert!(bracket.contains(500.0));
        assert!(!bracket.contains(99.99));
        assert!(!bracket.contains(999.01));
    }
}
