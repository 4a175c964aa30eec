//! Booking Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Active bookings hold their (table, date, time) claim.
    /// Only cancellation releases it.
    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

/// Booking entity.
///
/// Restaurant and user names are denormalized at creation so listings and
/// analytics do not need catalog lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub restaurant_id: i64,
    pub restaurant_name: String,
    pub user_id: i64,
    pub user_name: String,
    pub date: NaiveDate,
    /// Slot time as "HH:MM"
    pub time: String,
    pub party_size: i32,
    pub table_id: i64,
    pub status: BookingStatus,
    pub created_at: Timestamp,
}

/// Create booking payload (ID, status, and restaurant name assigned by the
/// booking service)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub restaurant_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub date: NaiveDate,
    /// Slot time as "HH:MM"
    pub time: String,
    pub party_size: i32,
    pub table_id: i64,
}
