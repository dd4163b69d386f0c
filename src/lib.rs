// Hotel management data model: guests, rooms, reservations and billing

pub mod enums;
pub mod error;
pub mod feedback;
pub mod hotel;
pub mod ids;
pub mod invoice;
pub mod payment;
pub mod reservation;
pub mod room;
pub mod scenario;
pub mod user;

// Re-export key types for convenience
pub use enums::{PaymentMethod, PaymentStatus, ReservationStatus, RoomType};
pub use error::{HotelError, Result};
pub use feedback::Feedback;
pub use hotel::{Hotel, HotelConfig};
pub use ids::{FeedbackId, InvoiceId, PaymentId, ReservationId, RoomNumber, UserId};
pub use invoice::Invoice;
pub use payment::Payment;
pub use reservation::{get_duration, parse_date, Reservation};
pub use room::{Room, RoomFilter};
pub use scenario::ScenarioReport;
pub use user::{Guest, Identity, User};
