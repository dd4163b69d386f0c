use thiserror::Error;

use crate::ids::{FeedbackId, InvoiceId, PaymentId, ReservationId, RoomNumber, UserId};

// Error types for the hotel model.
// Only date parsing can fail on an entity; the rest come from registry lookups.
#[derive(Error, Debug)]
pub enum HotelError {
    // `source` is empty when the value was rejected before reaching chrono
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Guest not found: {0}")]
    GuestNotFound(UserId),

    #[error("Room not found: {0}")]
    RoomNotFound(RoomNumber),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("Invoice not found: {0}")]
    InvoiceNotFound(InvoiceId),

    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    #[error("Feedback not found: {0}")]
    FeedbackNotFound(FeedbackId),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, HotelError>;
