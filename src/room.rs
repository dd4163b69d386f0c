// Room inventory and room search criteria

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::enums::RoomType;
use crate::ids::RoomNumber;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    room_type: RoomType,
    price_per_night: f64,
    available: bool,
    max_occupancy: u32,
    amenities: Vec<String>,
}

impl Room {
    // New rooms start out available with no amenities
    pub fn new(
        number: impl Into<RoomNumber>,
        room_type: RoomType,
        price_per_night: f64,
        max_occupancy: u32,
    ) -> Self {
        Self {
            number: number.into(),
            room_type,
            price_per_night,
            available: true,
            max_occupancy,
            amenities: Vec::new(),
        }
    }

    pub fn get_number(&self) -> RoomNumber {
        self.number
    }

    // The availability flag is the only notion of bookability in the model.
    pub fn is_available(&self) -> bool {
        self.available
    }

    // Not checked against active reservations
    pub fn update_availability(&mut self, available: bool) {
        debug!(room = %self.number, available, "Updating availability");
        self.available = available;
    }

    pub fn add_amenity(&mut self, amenity: impl Into<String>) {
        self.amenities.push(amenity.into());
    }

    pub fn get_room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn get_price(&self) -> f64 {
        self.price_per_night
    }

    pub fn get_max_occupancy(&self) -> u32 {
        self.max_occupancy
    }

    pub fn get_amenities(&self) -> &[String] {
        &self.amenities
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

// Criteria for searching the room inventory. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomFilter {
    pub available_only: bool,
    pub amenity: Option<String>,
    pub room_type: Option<RoomType>,
    pub max_price: Option<f64>,
    pub min_occupancy: Option<u32>,
}

impl RoomFilter {
    pub fn matches(&self, room: &Room) -> bool {
        if self.available_only && !room.is_available() {
            return false;
        }

        if !self
            .amenity
            .as_deref()
            .map_or(true, |amenity| room.has_amenity(amenity))
        {
            return false;
        }

        if !self.room_type.map_or(true, |t| room.get_room_type() == t) {
            return false;
        }

        if !self.max_price.map_or(true, |max| room.get_price() <= max) {
            return false;
        }

        self.min_occupancy
            .map_or(true, |min| room.get_max_occupancy() >= min)
    }
}
