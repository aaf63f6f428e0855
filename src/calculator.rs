//! Stateful calculator session enforcing the input constraint policy
//!
//! Owns the loaded rule table and the current selection; the mutators mirror
//! the host's form controls (product buttons, price slider, payment box,
//! period selector) and reject or clamp out-of-range input so the engine
//! only ever sees selections it can price.

use crate::engine::{self, compute, ResultSet, Selection, PERIOD_STEP_MONTHS};
use crate::error::CalcError;
use crate::rules::ProductRule;

/// One interactive session over an immutable rule table.
#[derive(Debug, Clone)]
pub struct Calculator {
    rules: Vec<ProductRule>,
    /// Index into `rules` for the selected product; maintained by `reset`
    current: usize,
    selection: Selection,
}

impl Calculator {
    /// Create a session over a loaded rule table with the given product
    /// preselected at its defaults
    pub fn new(rules: Vec<ProductRule>, product_id: u32) -> Result<Self, CalcError> {
        let mut calculator = Self {
            rules,
            current: 0,
            selection: Selection {
                product_id,
                price: 0.0,
                period: 0,
                payment: 0.0,
            },
        };
        calculator.reset(product_id)?;
        Ok(calculator)
    }

    /// Switch to another product and apply its defaults.
    ///
    /// An unknown id fails with `ProductNotFound` and leaves the session
    /// unchanged.
    pub fn select_product(&mut self, product_id: u32) -> Result<(), CalcError> {
        self.reset(product_id)
    }

    // Reset policy on product selection: price to the product default,
    // payment to zero, period to the product default.
    fn reset(&mut self, product_id: u32) -> Result<(), CalcError> {
        let index = self
            .rules
            .iter()
            .position(|rule| rule.id == product_id)
            .ok_or_else(|| {
                log::error!("unknown product id {product_id}");
                CalcError::ProductNotFound(product_id)
            })?;
        self.current = index;
        self.selection = Selection {
            product_id,
            price: self.rules[index].default_credit,
            period: self.rules[index].default_period,
            payment: 0.0,
        };
        self.refresh_period();
        Ok(())
    }

    /// Propose a new price. Accepted only while the resulting net credit
    /// stays at or above the product minimum and the price at or below the
    /// product maximum; a rejected price leaves the selection unchanged.
    /// Returns whether the price was accepted.
    pub fn set_price(&mut self, price: f64) -> bool {
        let rule = &self.rules[self.current];
        let accepted = price - self.selection.payment >= engine::min_price(rule)
            && price <= engine::max_price(rule);
        if accepted {
            self.selection.price = price;
        }
        self.refresh_period();
        accepted
    }

    /// Propose a new initial payment. Negative, too-large, or non-numeric
    /// input is rejected and the last valid payment kept. Returns the
    /// payment now in effect.
    pub fn set_payment(&mut self, payment: f64) -> f64 {
        let rule = &self.rules[self.current];
        // NaN fails both comparisons and is rejected like any other bad input
        if payment >= 0.0 && self.selection.price - payment >= engine::min_price(rule) {
            self.selection.payment = payment;
        }
        self.refresh_period();
        self.selection.payment
    }

    /// Select a repayment period; only currently offered options are
    /// accepted. Returns whether the period was accepted.
    pub fn set_period(&mut self, period: u32) -> bool {
        let accepted = self.period_options().contains(&period);
        if accepted {
            self.selection.period = period;
        }
        accepted
    }

    /// Selectable repayment periods for the current net credit: multiples of
    /// six months from the matching bracket's minimum through its maximum
    pub fn period_options(&self) -> Vec<u32> {
        let rule = &self.rules[self.current];
        match engine::period_bounds(rule, self.selection.net_credit()) {
            Some((min, max)) => (min..=max).step_by(PERIOD_STEP_MONTHS as usize).collect(),
            None => Vec::new(),
        }
    }

    /// Bounds for the price control: the initial payment shifts the lower
    /// end up so the net credit cannot drop below the product minimum
    pub fn price_bounds(&self) -> (f64, f64) {
        let rule = &self.rules[self.current];
        (
            engine::min_price(rule) + self.selection.payment,
            engine::max_price(rule),
        )
    }

    /// Rule for the currently selected product
    pub fn current_rule(&self) -> &ProductRule {
        &self.rules[self.current]
    }

    /// Snapshot of the current selection
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Recompute the derived figures for the current selection
    pub fn results(&self) -> Result<ResultSet, CalcError> {
        compute(&self.selection, &self.rules[self.current])
    }

    // After a price or payment change the option grid may have shrunk; a
    // period above the new bracket maximum falls back to the product default.
    fn refresh_period(&mut self) {
        let rule = &self.rules[self.current];
        if let Some((_, max)) = engine::period_bounds(rule, self.selection.net_credit()) {
            if self.selection.period > max {
                self.selection.period = rule.default_period;
            }
        }
    }
}
