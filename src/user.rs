// Users and guests
// A Guest is a User extended with loyalty data and a reservation history.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ids::{ReservationId, UserId};

// Identity behaviour shared by every account holder.
pub trait Identity {
    fn get_id(&self) -> UserId;
    fn get_name(&self) -> &str;
    fn get_email(&self) -> &str;
    // Replaces the email without any format check.
    fn update_email(&mut self, new_email: impl Into<String>);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    password: String,
}

impl User {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl Identity for User {
    fn get_id(&self) -> UserId {
        self.id
    }

    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_email(&self) -> &str {
        &self.email
    }

    fn update_email(&mut self, new_email: impl Into<String>) {
        let new_email = new_email.into();
        debug!(user = %self.id, old = %self.email, new = %new_email, "Updating email");
        self.email = new_email;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    user: User,
    contact_info: String,
    loyalty_points: u32,
    membership_level: String,
    reservation_history: Vec<ReservationId>,
}

impl Guest {
    pub fn new(
        user: User,
        contact_info: impl Into<String>,
        loyalty_points: u32,
        membership_level: impl Into<String>,
    ) -> Self {
        Self {
            user,
            contact_info: contact_info.into(),
            loyalty_points,
            membership_level: membership_level.into(),
            reservation_history: Vec::new(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn get_contact_info(&self) -> &str {
        &self.contact_info
    }

    pub fn get_membership_level(&self) -> &str {
        &self.membership_level
    }

    pub fn get_loyalty_points(&self) -> u32 {
        self.loyalty_points
    }

    // Unconditional append, the same reservation may be recorded twice
    pub fn add_reservation(&mut self, reservation: ReservationId) {
        self.reservation_history.push(reservation);
    }

    // Deducts `points` when the balance covers them. Returns whether the
    // redemption happened; asking for more than the balance is a silent no-op.
    pub fn redeem_points(&mut self, points: u32) -> bool {
        if points > self.loyalty_points {
            debug!(
                guest = %self.user.id,
                requested = points,
                available = self.loyalty_points,
                "Ignoring redemption above balance"
            );
            return false;
        }

        self.loyalty_points -= points;
        true
    }

    pub fn get_reservation_history(&self) -> &[ReservationId] {
        &self.reservation_history
    }
}

impl Identity for Guest {
    fn get_id(&self) -> UserId {
        self.user.get_id()
    }

    fn get_name(&self) -> &str {
        self.user.get_name()
    }

    fn get_email(&self) -> &str {
        self.user.get_email()
    }

    fn update_email(&mut self, new_email: impl Into<String>) {
        self.user.update_email(new_email)
    }
}
