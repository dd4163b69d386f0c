// Invoices derive a total from itemised charges and a discount percentage

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use crate::ids::{InvoiceId, ReservationId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    reservation: ReservationId,
    charges: BTreeMap<String, f64>,
    discount_percent: f64,
    issued_date: NaiveDate,
    total: f64,
}

impl Invoice {
    pub fn new(
        id: impl Into<InvoiceId>,
        reservation: ReservationId,
        charges: BTreeMap<String, f64>,
        discount_percent: f64,
    ) -> Self {
        Self::issued_on(
            id,
            reservation,
            charges,
            discount_percent,
            Utc::now().date_naive(),
        )
    }

    pub fn issued_on(
        id: impl Into<InvoiceId>,
        reservation: ReservationId,
        charges: BTreeMap<String, f64>,
        discount_percent: f64,
        issued_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            reservation,
            charges,
            discount_percent,
            issued_date,
            total: 0.0,
        }
    }

    pub fn get_id(&self) -> InvoiceId {
        self.id
    }

    pub fn get_reservation(&self) -> ReservationId {
        self.reservation
    }

    pub fn get_charges(&self) -> &BTreeMap<String, f64> {
        &self.charges
    }

    pub fn get_discount(&self) -> f64 {
        self.discount_percent
    }

    pub fn get_issued_date(&self) -> NaiveDate {
        self.issued_date
    }

    // Replaces the amount when the label already exists
    pub fn add_charge(&mut self, label: impl Into<String>, amount: f64) {
        self.charges.insert(label.into(), amount);
    }

    // Recomputes `sum(charges) * (1 - discount / 100)` from current state and
    // stores it. Neither the subtotal nor the discount is clamped.
    pub fn calculate_total(&mut self) -> f64 {
        let subtotal: f64 = self.charges.values().sum();
        self.total = subtotal * (1.0 - self.discount_percent / 100.0);
        self.total
    }

    // Last value produced by calculate_total, stale after any change
    pub fn get_total(&self) -> f64 {
        self.total
    }

    pub fn apply_discount(&mut self, percent: f64) {
        debug!(invoice = %self.id, percent, "Applying discount");
        self.discount_percent = percent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn charges(items: &[(&str, f64)]) -> BTreeMap<String, f64> {
        items
            .iter()
            .map(|(label, amount)| (label.to_string(), *amount))
            .collect()
    }

    fn invoice(items: &[(&str, f64)], discount: f64) -> Invoice {
        let issued = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        Invoice::issued_on(1, ReservationId(1), charges(items), discount, issued)
    }

    #[test_case(&[("Room", 2000.0), ("Service", 200.0)], 10.0, 1980.0; "#1 first scenario invoice")]
    #[test_case(&[("Room", 400.0), ("Service", 40.0)], 5.0, 418.0; "#2 second scenario invoice")]
    #[test_case(&[], 10.0, 0.0; "#3 no charges")]
    #[test_case(&[("Room", 100.0)], 0.0, 100.0; "#4 no discount")]
    #[test_case(&[("Room", 100.0)], 150.0, -50.0; "#5 discount above 100 is not clamped")]
    #[test_case(&[("Room", 100.0)], -10.0, 110.0; "#6 negative discount is not clamped")]
    #[test_case(&[("Room", 100.0), ("Refund", -250.0)], 0.0, -150.0; "#7 negative subtotal")]
    fn test_calculate_total(items: &[(&str, f64)], discount: f64, expected: f64) {
        let mut invoice = invoice(items, discount);
        let total = invoice.calculate_total();
        assert!((total - expected).abs() < 1e-9, "{} != {}", total, expected);
    }

    #[test]
    fn test_total_matches_formula_on_every_call() {
        let items = [("Room", 1234.56), ("Spa", 78.9), ("Minibar", 12.35)];
        let mut invoice = invoice(&items, 7.5);
        let subtotal: f64 = charges(&items).values().sum();
        let expected = subtotal * (1.0 - 7.5 / 100.0);

        for _ in 0..3 {
            assert_eq!(invoice.calculate_total(), expected);
            assert_eq!(invoice.get_total(), expected);
        }
    }

    #[test]
    fn test_total_is_stale_until_recalculated() {
        let mut invoice = invoice(&[("Room", 400.0), ("Service", 40.0)], 5.0);
        assert_eq!(invoice.get_total(), 0.0);

        let before = invoice.calculate_total();
        invoice.apply_discount(50.0);
        invoice.add_charge("Parking", 60.0);
        assert_eq!(invoice.get_total(), before);
        assert_eq!(invoice.get_discount(), 50.0);

        assert_eq!(invoice.calculate_total(), 250.0);
        assert_eq!(invoice.get_total(), 250.0);
    }

    #[test]
    fn test_add_charge_overwrites_label() {
        let mut invoice = invoice(&[("Room", 400.0)], 0.0);
        invoice.add_charge("Room", 450.0);
        assert_eq!(invoice.get_charges().len(), 1);
        assert_eq!(invoice.calculate_total(), 450.0);
        assert_eq!(invoice.get_reservation(), ReservationId(1));
        assert_eq!(invoice.get_issued_date(), NaiveDate::from_ymd_opt(2025, 5, 5).unwrap());
    }
}
