// Payment attempts against an invoice

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::enums::{PaymentMethod, PaymentStatus};
use crate::ids::{InvoiceId, PaymentId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    id: PaymentId,
    invoice: InvoiceId,
    method: PaymentMethod,
    status: PaymentStatus,
    timestamp: DateTime<Utc>,
    amount: f64,
}

impl Payment {
    // `amount` is captured as given and never re-synced with the invoice.
    pub fn new(
        id: impl Into<PaymentId>,
        invoice: InvoiceId,
        method: PaymentMethod,
        amount: f64,
    ) -> Self {
        Self::made_at(id, invoice, method, amount, Utc::now())
    }

    pub fn made_at(
        id: impl Into<PaymentId>,
        invoice: InvoiceId,
        method: PaymentMethod,
        amount: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            invoice,
            method,
            status: PaymentStatus::Pending,
            timestamp,
            amount,
        }
    }

    pub fn get_id(&self) -> PaymentId {
        self.id
    }

    pub fn get_invoice(&self) -> InvoiceId {
        self.invoice
    }

    pub fn get_method(&self) -> PaymentMethod {
        self.method
    }

    pub fn get_status(&self) -> PaymentStatus {
        self.status
    }

    pub fn get_timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn get_amount(&self) -> f64 {
        self.amount
    }

    pub fn mark_as_paid(&mut self) {
        debug!(payment = %self.id, "Marking payment as paid");
        self.status = PaymentStatus::Paid;
    }

    // Allowed even after the payment is marked paid
    pub fn change_method(&mut self, new_method: PaymentMethod) {
        self.method = new_method;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ReservationId;
    use crate::invoice::Invoice;
    use std::collections::BTreeMap;

    #[test]
    fn test_payment_lifecycle() {
        let mut payment = Payment::new(1, InvoiceId(1), PaymentMethod::CreditCard, 1980.0);
        assert_eq!(payment.get_status(), PaymentStatus::Pending);
        assert_eq!(payment.get_invoice(), InvoiceId(1));

        payment.mark_as_paid();
        assert_eq!(payment.get_status(), PaymentStatus::Paid);

        payment.mark_as_paid();
        assert_eq!(payment.get_status(), PaymentStatus::Paid);

        payment.change_method(PaymentMethod::Cash);
        assert_eq!(payment.get_method(), PaymentMethod::Cash);
        assert_eq!(payment.get_status(), PaymentStatus::Paid);
    }

    #[test]
    fn test_amount_is_decoupled_from_invoice() {
        let mut charges = BTreeMap::new();
        charges.insert("Room".to_string(), 400.0);
        let mut invoice = Invoice::new(2, ReservationId(2), charges, 0.0);

        let payment = Payment::new(2, invoice.get_id(), PaymentMethod::PayPal, invoice.calculate_total());

        invoice.add_charge("Late checkout", 50.0);
        invoice.calculate_total();

        assert_eq!(invoice.get_total(), 450.0);
        assert_eq!(payment.get_amount(), 400.0);
    }

    #[test]
    fn test_made_at_keeps_timestamp() {
        let at = DateTime::parse_from_rfc3339("2025-05-05T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let payment = Payment::made_at(3, InvoiceId(3), PaymentMethod::DebitCard, 10.0, at);
        assert_eq!(payment.get_timestamp(), at);
        assert_eq!(payment.get_id(), PaymentId(3));
    }
}
