//! Derived financial figures and their display form

use std::fmt;

/// Figures derived from one (selection, product rule) pair.
///
/// Recomputed wholesale on every selection change and replaced as a unit;
/// a result set has no identity across updates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultSet {
    /// Net credit amount financed
    pub initial_credit: f64,
    /// Annual interest rate, percent
    pub interest: f64,
    /// One-off contract fee
    pub contract_fee: f64,
    /// Per-month managing fee
    pub managing_fee: f64,
    /// Total amount payable over the whole period, rounded to cents
    pub total_payable: f64,
    /// Amount payable per month, rounded to cents
    pub monthly_payable: f64,
}

impl fmt::Display for ResultSet {
    /// Fixed two-decimal rendering of all six fields, one per line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Credit: {:.2} EUR", self.initial_credit)?;
        writeln!(f, "Interest: {:.2} %", self.interest)?;
        writeln!(f, "Contract fee: {:.2} EUR", self.contract_fee)?;
        writeln!(f, "Managing fee: {:.2} EUR", self.managing_fee)?;
        writeln!(f, "Total payable: {:.2} EUR", self.total_payable)?;
        write!(f, "Monthly payable: {:.2} EUR", self.monthly_payable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        let results = ResultSet {
            initial_credit: 1000.0,
            interest: 10.0,
            contract_fee: 20.0,
            managing_fee: 1.0,
            total_payable: 1132.0,
            monthly_payable: 94.33,
        };

        let rendered = results.to_string();
        assert!(rendered.contains("Credit: 1000.00 EUR"));
        assert!(rendered.contains("Interest: 10.00 %"));
        assert!(rendered.contains("Total payable: 1132.00 EUR"));
        assert!(rendered.contains("Monthly payable: 94.33 EUR"));
    }
}
