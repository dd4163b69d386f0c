// Hotel registry
// Owns every entity; entities point at each other through typed ids.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use tracing::{debug, info};

use crate::error::{HotelError, Result};
use crate::feedback::Feedback;
use crate::ids::{FeedbackId, InvoiceId, PaymentId, ReservationId, RoomNumber, UserId};
use crate::invoice::Invoice;
use crate::payment::Payment;
use crate::reservation::Reservation;
use crate::room::{Room, RoomFilter};
use crate::user::{Guest, Identity};

// Hotel configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelConfig {
    pub name: String,
    pub currency: String,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            name: "Grand Hotel".to_string(),
            currency: "USD".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Hotel {
    config: HotelConfig,
    guests: HashMap<UserId, Guest>,
    rooms: HashMap<RoomNumber, Room>,
    reservations: HashMap<ReservationId, Reservation>,
    invoices: HashMap<InvoiceId, Invoice>,
    payments: HashMap<PaymentId, Payment>,
    feedback: HashMap<FeedbackId, Feedback>,
}

fn insert_unique<K, V>(map: &mut HashMap<K, V>, key: K, value: V) -> Result<()>
where
    K: Hash + Eq + Display,
{
    match map.entry(key) {
        Entry::Occupied(entry) => Err(HotelError::DuplicateId(entry.key().to_string())),
        Entry::Vacant(entry) => {
            debug!(id = %entry.key(), "Registering entity");
            entry.insert(value);
            Ok(())
        }
    }
}

impl Hotel {
    pub fn new(config: HotelConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &HotelConfig {
        &self.config
    }

    pub fn add_guest(&mut self, guest: Guest) -> Result<UserId> {
        let id = guest.get_id();
        insert_unique(&mut self.guests, id, guest)?;
        Ok(id)
    }

    pub fn add_room(&mut self, room: Room) -> Result<RoomNumber> {
        let number = room.get_number();
        insert_unique(&mut self.rooms, number, room)?;
        Ok(number)
    }

    pub fn add_invoice(&mut self, invoice: Invoice) -> Result<InvoiceId> {
        let id = invoice.get_id();
        insert_unique(&mut self.invoices, id, invoice)?;
        Ok(id)
    }

    pub fn add_payment(&mut self, payment: Payment) -> Result<PaymentId> {
        let id = payment.get_id();
        insert_unique(&mut self.payments, id, payment)?;
        Ok(id)
    }

    pub fn add_feedback(&mut self, feedback: Feedback) -> Result<FeedbackId> {
        let id = feedback.get_id();
        insert_unique(&mut self.feedback, id, feedback)?;
        Ok(id)
    }

    pub fn guest(&self, id: UserId) -> Result<&Guest> {
        self.guests.get(&id).ok_or(HotelError::GuestNotFound(id))
    }

    pub fn guest_mut(&mut self, id: UserId) -> Result<&mut Guest> {
        self.guests.get_mut(&id).ok_or(HotelError::GuestNotFound(id))
    }

    pub fn room(&self, number: RoomNumber) -> Result<&Room> {
        self.rooms.get(&number).ok_or(HotelError::RoomNotFound(number))
    }

    pub fn room_mut(&mut self, number: RoomNumber) -> Result<&mut Room> {
        self.rooms
            .get_mut(&number)
            .ok_or(HotelError::RoomNotFound(number))
    }

    pub fn reservation(&self, id: ReservationId) -> Result<&Reservation> {
        self.reservations
            .get(&id)
            .ok_or(HotelError::ReservationNotFound(id))
    }

    pub fn reservation_mut(&mut self, id: ReservationId) -> Result<&mut Reservation> {
        self.reservations
            .get_mut(&id)
            .ok_or(HotelError::ReservationNotFound(id))
    }

    pub fn invoice(&self, id: InvoiceId) -> Result<&Invoice> {
        self.invoices.get(&id).ok_or(HotelError::InvoiceNotFound(id))
    }

    pub fn invoice_mut(&mut self, id: InvoiceId) -> Result<&mut Invoice> {
        self.invoices
            .get_mut(&id)
            .ok_or(HotelError::InvoiceNotFound(id))
    }

    pub fn payment(&self, id: PaymentId) -> Result<&Payment> {
        self.payments.get(&id).ok_or(HotelError::PaymentNotFound(id))
    }

    pub fn payment_mut(&mut self, id: PaymentId) -> Result<&mut Payment> {
        self.payments
            .get_mut(&id)
            .ok_or(HotelError::PaymentNotFound(id))
    }

    pub fn feedback(&self, id: FeedbackId) -> Result<&Feedback> {
        self.feedback.get(&id).ok_or(HotelError::FeedbackNotFound(id))
    }

    pub fn feedback_mut(&mut self, id: FeedbackId) -> Result<&mut Feedback> {
        self.feedback
            .get_mut(&id)
            .ok_or(HotelError::FeedbackNotFound(id))
    }

    // Rooms matching every criterion of `filter`, ordered by room number.
    pub fn find_rooms(&self, filter: &RoomFilter) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self
            .rooms
            .values()
            .filter(|room| filter.matches(room))
            .collect();
        rooms.sort_by_key(|room| room.get_number());
        rooms
    }

    // Registers a reservation, appends it to the guest's history and marks
    // the room unavailable. There is no availability or date-overlap check.
    pub fn book(&mut self, reservation: Reservation) -> Result<ReservationId> {
        let id = reservation.get_id();
        let guest_id = reservation.get_guest();
        let room_number = reservation.get_room();

        // Resolve everything up front so a failed booking leaves no trace
        if self.reservations.contains_key(&id) {
            return Err(HotelError::DuplicateId(id.to_string()));
        }
        let guest = self
            .guests
            .get_mut(&guest_id)
            .ok_or(HotelError::GuestNotFound(guest_id))?;
        let room = self
            .rooms
            .get_mut(&room_number)
            .ok_or(HotelError::RoomNotFound(room_number))?;

        guest.add_reservation(id);
        room.update_availability(false);
        self.reservations.insert(id, reservation);

        info!(reservation = %id, guest = %guest_id, room = %room_number, "Room booked");
        Ok(id)
    }

    // Cancels the reservation and frees its room, even when another active
    // reservation holds the same room.
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<()> {
        let reservation = self
            .reservations
            .get_mut(&id)
            .ok_or(HotelError::ReservationNotFound(id))?;
        let room_number = reservation.get_room();
        let room = self
            .rooms
            .get_mut(&room_number)
            .ok_or(HotelError::RoomNotFound(room_number))?;

        reservation.cancel_reservation(room);
        Ok(())
    }

    // Resolve a guest's history in booking order
    pub fn reservation_history(&self, guest: UserId) -> Result<Vec<&Reservation>> {
        self.guest(guest)?
            .get_reservation_history()
            .iter()
            .map(|id| self.reservation(*id))
            .collect()
    }
}
