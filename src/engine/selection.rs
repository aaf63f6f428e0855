//! Current user selection, threaded through the engine as a value

/// Snapshot of the user's form choices.
///
/// The host owns the current selection and passes it into `compute` on every
/// change; it is replaced wholesale, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Selected product id
    pub product_id: u32,
    /// Selected price, currency units
    pub price: f64,
    /// Selected repayment period, months
    pub period: u32,
    /// Initial payment, currency units
    pub payment: f64,
}

impl Selection {
    /// Amount actually financed: price minus initial payment
    pub fn net_credit(&self) -> f64 {
        self.price - self.payment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_credit() {
        let selection = Selection {
            product_id: 1,
            price: 1000.0,
            period: 12,
            payment: 200.0,
        };
        assert_eq!(selection.net_credit(), 800.0);
    }
}
