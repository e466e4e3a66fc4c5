//! Wire types shared between the clinic booking client and its backend

use serde::{de::IgnoredAny, Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Access level of an authenticated user
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Authenticated user returned by `/login` and `/register`. Holds the bearer token that is
/// attached to every authenticated request.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Identity {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    pub token: String,
}

/// Bookable appointment time. Owned by the backend, read-only here. Slots embedded in admin
/// booking listings may carry only the time, so the id defaults to empty.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Slot {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub time: String,
}

/// Owner summary embedded in bookings listed for admins
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct BookingUser {
    #[serde(alias = "_id", default)]
    pub id: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    pub slot: Slot,
    #[serde(default)]
    pub user: Option<BookingUser>,
}

impl Booking {
    /// Email of the booking owner, empty when the backend did not embed the user
    pub fn owner_email(&self) -> &str {
        self.user.as_ref().map_or("", |user| user.email.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BookSlotRequest {
    #[serde(rename = "slotId")]
    pub slot_id: String,
}

/// Body of a `/book` response. The backend answers with either the new booking or a plain
/// acknowledgement, neither of which the client reads.
pub type BookingAck = IgnoredAny;
