// End-to-end demonstration of the hotel model.
// Walks the whole lifecycle from signup to cancellation and reports what it saw.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

use crate::enums::{PaymentMethod, PaymentStatus, ReservationStatus, RoomType};
use crate::error::Result;
use crate::feedback::Feedback;
use crate::hotel::{Hotel, HotelConfig};
use crate::ids::{InvoiceId, PaymentId, ReservationId, RoomNumber, UserId};
use crate::invoice::Invoice;
use crate::payment::Payment;
use crate::reservation::{parse_date, Reservation};
use crate::room::{Room, RoomFilter};
use crate::user::{Guest, Identity, User};

pub const WIFI: &str = "Wi-Fi";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    pub guest: String,
    pub rating: i32,
    pub comments: String,
    pub category: RoomType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub reservation: ReservationId,
    pub room: RoomNumber,
    pub check_in: String,
    pub check_out: String,
    pub nights: i64,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestHistory {
    pub name: String,
    pub reservations: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub hotel: String,
    pub currency: String,
    pub available_wifi_rooms: Vec<RoomNumber>,
    pub availability_after_booking: BTreeMap<RoomNumber, bool>,
    pub durations: BTreeMap<ReservationId, i64>,
    pub invoice_totals: BTreeMap<InvoiceId, f64>,
    pub payment_statuses: BTreeMap<PaymentId, PaymentStatus>,
    pub feedback: Vec<FeedbackSummary>,
    pub histories: BTreeMap<UserId, GuestHistory>,
    pub availability_after_cancellation: BTreeMap<RoomNumber, bool>,
    pub final_statuses: BTreeMap<ReservationId, ReservationStatus>,
}

fn charges(items: &[(&str, f64)]) -> BTreeMap<String, f64> {
    items
        .iter()
        .map(|(label, amount)| (label.to_string(), *amount))
        .collect()
}

fn availability(hotel: &Hotel, rooms: &[RoomNumber]) -> Result<BTreeMap<RoomNumber, bool>> {
    rooms
        .iter()
        .map(|number| -> Result<(RoomNumber, bool)> {
            Ok((*number, hotel.room(*number)?.is_available()))
        })
        .collect()
}

// Snapshot each guest's reservation history, keyed by guest id
pub fn guest_histories(
    hotel: &Hotel,
    guests: &[UserId],
) -> Result<BTreeMap<UserId, GuestHistory>> {
    let mut histories = BTreeMap::new();
    for guest_id in guests {
        let name = hotel.guest(*guest_id)?.get_name().to_string();
        let mut reservations = Vec::new();
        for reservation in hotel.reservation_history(*guest_id)? {
            info!(
                guest = %name,
                reservation = %reservation.get_id(),
                room = %reservation.get_room(),
                check_in = reservation.get_check_in(),
                check_out = reservation.get_check_out(),
                status = %reservation.get_status(),
                "History entry"
            );
            reservations.push(HistoryEntry {
                reservation: reservation.get_id(),
                room: reservation.get_room(),
                check_in: reservation.get_check_in().to_string(),
                check_out: reservation.get_check_out().to_string(),
                nights: reservation.get_duration()?,
                status: reservation.get_status(),
            });
        }
        histories.insert(*guest_id, GuestHistory { name, reservations });
    }
    Ok(histories)
}

pub fn run(config: HotelConfig) -> Result<ScenarioReport> {
    let mut hotel = Hotel::new(config);
    info!(hotel = %hotel.config().name, "Starting hotel scenario");

    // Guests
    let alice = hotel.add_guest(Guest::new(
        User::new(1, "Alice Smith", "alice@example.com", "alice123"),
        "555-0101",
        120,
        "Gold",
    ))?;
    let bob = hotel.add_guest(Guest::new(
        User::new(2, "Bob Johnson", "bob@example.com", "bob456"),
        "555-0102",
        40,
        "Silver",
    ))?;

    // Rooms, both tagged with Wi-Fi
    let room1 = hotel.add_room(Room::new(101, RoomType::Suite, 500.0, 4))?;
    let room2 = hotel.add_room(Room::new(102, RoomType::Double, 200.0, 2))?;
    let rooms = [room1, room2];
    for number in rooms {
        hotel.room_mut(number)?.add_amenity(WIFI);
    }

    let wifi_filter = RoomFilter {
        available_only: true,
        amenity: Some(WIFI.to_string()),
        ..Default::default()
    };
    let available_wifi_rooms: Vec<RoomNumber> = hotel
        .find_rooms(&wifi_filter)
        .iter()
        .map(|room| room.get_number())
        .collect();
    info!(rooms = ?available_wifi_rooms, "Available rooms with Wi-Fi");

    // Bookings: register, append to history, take the room off the market
    let reservation1 = hotel.book(Reservation::new(
        1,
        alice,
        room1,
        "2025-05-01",
        "2025-05-05",
        2,
    ))?;
    let reservation2 = hotel.book(Reservation::new(
        2,
        bob,
        room2,
        "2025-06-01",
        "2025-06-03",
        1,
    ))?;
    let reservations = [reservation1, reservation2];
    let availability_after_booking = availability(&hotel, &rooms)?;

    let mut durations = BTreeMap::new();
    for id in reservations {
        let nights = hotel.reservation(id)?.get_duration()?;
        info!(reservation = %id, nights, "Stay length");
        durations.insert(id, nights);
    }

    // Invoices are issued on check-out
    let invoice1 = hotel.add_invoice(Invoice::issued_on(
        1,
        reservation1,
        charges(&[("Room", 2000.0), ("Service", 200.0)]),
        10.0,
        parse_date(hotel.reservation(reservation1)?.get_check_out())?,
    ))?;
    let invoice2 = hotel.add_invoice(Invoice::issued_on(
        2,
        reservation2,
        charges(&[("Room", 400.0), ("Service", 40.0)]),
        5.0,
        parse_date(hotel.reservation(reservation2)?.get_check_out())?,
    ))?;

    let mut invoice_totals = BTreeMap::new();
    for id in [invoice1, invoice2] {
        let total = hotel.invoice_mut(id)?.calculate_total();
        info!(invoice = %id, total, currency = %hotel.config().currency, "Invoice total");
        invoice_totals.insert(id, total);
    }

    // Payments capture the totals computed above
    let payment1 = hotel.add_payment(Payment::new(
        1,
        invoice1,
        PaymentMethod::CreditCard,
        hotel.invoice(invoice1)?.get_total(),
    ))?;
    let payment2 = hotel.add_payment(Payment::new(
        2,
        invoice2,
        PaymentMethod::PayPal,
        hotel.invoice(invoice2)?.get_total(),
    ))?;

    let mut payment_statuses = BTreeMap::new();
    for id in [payment1, payment2] {
        let payment = hotel.payment_mut(id)?;
        payment.mark_as_paid();
        info!(
            payment = %id,
            method = %payment.get_method(),
            amount = payment.get_amount(),
            "Payment settled"
        );
        payment_statuses.insert(id, payment.get_status());
    }

    // Feedback
    let feedback_ids = [
        hotel.add_feedback(Feedback::new(
            1,
            alice,
            5,
            "Excellent stay, spotless suite.",
            RoomType::Suite,
        ))?,
        hotel.add_feedback(Feedback::new(
            2,
            bob,
            4,
            "Comfortable room, slow check-in.",
            RoomType::Double,
        ))?,
    ];
    let mut feedback = Vec::new();
    for id in feedback_ids {
        let entry = hotel.feedback(id)?;
        feedback.push(FeedbackSummary {
            guest: hotel.guest(entry.get_guest())?.get_name().to_string(),
            rating: entry.get_rating(),
            comments: entry.get_comments().to_string(),
            category: entry.get_category(),
        });
    }

    // Reservation history per guest
    let histories = guest_histories(&hotel, &[alice, bob])?;

    // Cancellation frees both rooms
    for id in reservations {
        hotel.cancel_reservation(id)?;
    }
    let availability_after_cancellation = availability(&hotel, &rooms)?;
    info!(rooms = ?availability_after_cancellation, "Availability after cancellation");

    let final_statuses = reservations
        .iter()
        .map(|id| -> Result<(ReservationId, ReservationStatus)> {
            Ok((*id, hotel.reservation(*id)?.get_status()))
        })
        .collect::<Result<BTreeMap<_, _>>>()?;

    Ok(ScenarioReport {
        hotel: hotel.config().name.clone(),
        currency: hotel.config().currency.clone(),
        available_wifi_rooms,
        availability_after_booking,
        durations,
        invoice_totals,
        payment_statuses,
        feedback,
        histories,
        availability_after_cancellation,
        final_statuses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ScenarioReport {
        run(HotelConfig::default()).unwrap()
    }

    #[test]
    fn test_both_wifi_rooms_available_before_booking() {
        assert_eq!(
            report().available_wifi_rooms,
            vec![RoomNumber(101), RoomNumber(102)]
        );
    }

    #[test]
    fn test_rooms_unavailable_after_booking() {
        let report = report();
        assert!(!report.availability_after_booking[&RoomNumber(101)]);
        assert!(!report.availability_after_booking[&RoomNumber(102)]);
    }

    #[test]
    fn test_durations() {
        let report = report();
        assert_eq!(report.durations[&ReservationId(1)], 4);
        assert_eq!(report.durations[&ReservationId(2)], 2);
    }

    #[test]
    fn test_invoice_totals() {
        let report = report();
        assert!((report.invoice_totals[&InvoiceId(1)] - 1980.0).abs() < 1e-9);
        assert!((report.invoice_totals[&InvoiceId(2)] - 418.0).abs() < 1e-9);
    }

    #[test]
    fn test_payments_marked_paid() {
        let report = report();
        assert!(report
            .payment_statuses
            .values()
            .all(|status| *status == PaymentStatus::Paid));
        assert_eq!(report.payment_statuses.len(), 2);
    }

    #[test]
    fn test_histories_and_feedback() {
        let report = report();
        let names: Vec<&str> = report
            .histories
            .values()
            .map(|history| history.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice Smith", "Bob Johnson"]);

        let alice = &report.histories[&UserId(1)].reservations;
        assert_eq!(alice.len(), 1);
        assert_eq!(alice[0].reservation, ReservationId(1));
        assert_eq!(alice[0].room, RoomNumber(101));
        assert_eq!(alice[0].nights, 4);
        assert_eq!(alice[0].status, ReservationStatus::Booked);

        let bob = &report.histories[&UserId(2)].reservations;
        assert_eq!(bob[0].reservation, ReservationId(2));
        assert_eq!(bob[0].check_in, "2025-06-01");

        assert_eq!(report.feedback.len(), 2);
        assert_eq!(report.feedback[0].guest, "Alice Smith");
        assert_eq!(report.feedback[0].rating, 5);
        assert_eq!(report.feedback[1].category, RoomType::Double);
    }

    #[test]
    fn test_histories_keep_guests_sharing_a_name_apart() {
        let mut hotel = Hotel::new(HotelConfig::default());
        for id in [7u32, 8] {
            let user = User::new(id, "Sam Lee", format!("sam{}@example.com", id), "pw");
            hotel.add_guest(Guest::new(user, "555-0100", 0, "Bronze")).unwrap();
        }
        hotel.add_room(Room::new(201, RoomType::Single, 90.0, 1)).unwrap();
        hotel.add_room(Room::new(202, RoomType::Single, 90.0, 1)).unwrap();
        hotel
            .book(Reservation::new(10, UserId(7), RoomNumber(201), "2025-07-01", "2025-07-03", 1))
            .unwrap();
        hotel
            .book(Reservation::new(11, UserId(8), RoomNumber(202), "2025-07-05", "2025-07-06", 1))
            .unwrap();

        let histories = guest_histories(&hotel, &[UserId(7), UserId(8)]).unwrap();
        assert_eq!(histories.len(), 2);
        assert_eq!(histories[&UserId(7)].name, "Sam Lee");
        assert_eq!(histories[&UserId(8)].name, "Sam Lee");
        assert_eq!(histories[&UserId(7)].reservations[0].reservation, ReservationId(10));
        assert_eq!(histories[&UserId(8)].reservations[0].reservation, ReservationId(11));
        assert_eq!(histories[&UserId(8)].reservations[0].nights, 1);
    }

    #[test]
    fn test_cancellation_frees_rooms() {
        let report = report();
        assert!(report.availability_after_cancellation.values().all(|a| *a));
        assert_eq!(report.availability_after_cancellation.len(), 2);
        assert!(report
            .final_statuses
            .values()
            .all(|status| *status == ReservationStatus::Cancelled));
    }

    #[test]
    fn test_report_carries_config() {
        let config = HotelConfig {
            name: "Seaside Inn".to_string(),
            currency: "EUR".to_string(),
        };
        let report = run(config).unwrap();
        assert_eq!(report.hotel, "Seaside Inn");
        assert_eq!(report.currency, "EUR");
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["payment_statuses"]["1"], "Paid");
        assert_eq!(json["final_statuses"]["2"], "Cancelled");
        assert_eq!(json["available_wifi_rooms"], serde_json::json!([101, 102]));
        assert_eq!(json["histories"]["1"]["name"], "Alice Smith");
    }
}
