// Typed handles into the hotel registry.
// Entities refer to each other through these ids and never own one another.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}:{}", $prefix, self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(UserId, "user");
define_id!(RoomNumber, "room");
define_id!(ReservationId, "reservation");
define_id!(InvoiceId, "invoice");
define_id!(PaymentId, "payment");
define_id!(FeedbackId, "feedback");
