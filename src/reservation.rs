// Reservations bind a guest to a room over a date range

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::enums::ReservationStatus;
use crate::error::{HotelError, Result};
use crate::ids::{ReservationId, RoomNumber, UserId};
use crate::room::Room;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Parse a calendar date in YYYY-MM-DD form.
// chrono skips leading whitespace, so padded values are refused up front.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    if value.trim() != value {
        return Err(HotelError::InvalidDate {
            value: value.to_string(),
            source: None,
        });
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| HotelError::InvalidDate {
        value: value.to_string(),
        source: Some(source),
    })
}

// Whole days between two `YYYY-MM-DD` dates. Negative when check-out
// precedes check-in.
pub fn get_duration(check_in: &str, check_out: &str) -> Result<i64> {
    let check_in = parse_date(check_in)?;
    let check_out = parse_date(check_out)?;
    Ok((check_out - check_in).num_days())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    guest: UserId,
    room: RoomNumber,
    check_in: String,
    check_out: String,
    status: ReservationStatus,
    num_guests: u32,
}

impl Reservation {
    pub fn new(
        id: impl Into<ReservationId>,
        guest: UserId,
        room: RoomNumber,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
        num_guests: u32,
    ) -> Self {
        Self {
            id: id.into(),
            guest,
            room,
            check_in: check_in.into(),
            check_out: check_out.into(),
            status: ReservationStatus::Booked,
            num_guests,
        }
    }

    pub fn get_id(&self) -> ReservationId {
        self.id
    }

    pub fn get_guest(&self) -> UserId {
        self.guest
    }

    pub fn get_room(&self) -> RoomNumber {
        self.room
    }

    pub fn get_check_in(&self) -> &str {
        &self.check_in
    }

    pub fn get_check_out(&self) -> &str {
        &self.check_out
    }

    pub fn get_status(&self) -> ReservationStatus {
        self.status
    }

    pub fn get_num_guests(&self) -> u32 {
        self.num_guests
    }

    // No transition guard and no side effects, any status may follow any other
    pub fn update_status(&mut self, new_status: ReservationStatus) {
        debug!(reservation = %self.id, from = %self.status, to = %new_status, "Updating status");
        self.status = new_status;
    }

    // Marks the reservation cancelled and frees its room. The room is freed
    // even if another active reservation still holds it. Handing in any room
    // other than the booked one leaves both untouched.
    pub fn cancel_reservation(&mut self, room: &mut Room) {
        if room.get_number() != self.room {
            debug!(
                reservation = %self.id,
                booked = %self.room,
                given = %room.get_number(),
                "Ignoring cancellation against a different room"
            );
            return;
        }

        info!(reservation = %self.id, room = %self.room, "Cancelling reservation");
        self.status = ReservationStatus::Cancelled;
        room.update_availability(true);
    }

    pub fn get_duration(&self) -> Result<i64> {
        get_duration(&self.check_in, &self.check_out)
    }
}
