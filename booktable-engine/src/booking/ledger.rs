//! Booking ledger
//!
//! In-memory store of bookings. Its write lock is the serialization point
//! for the one-active-booking-per-slot rule: conflict checks and inserts
//! happen under the same guard, and status transitions check and swap in
//! one critical section.

use std::sync::Arc;

use parking_lot::RwLock;

use shared::models::{Booking, BookingStatus};

use crate::core::error::{AppError, AppResult};

#[derive(Debug, Clone, Default)]
pub struct BookingLedger {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Arc::new(RwLock::new(bookings)),
        }
    }

    /// Append `booking` unless an active booking already claims the same
    /// (restaurant, table, date, time). Returns false on conflict.
    pub fn insert_unless_conflict(&self, booking: &Booking) -> bool {
        let mut bookings = self.bookings.write();
        let taken = bookings.iter().any(|b| {
            b.status.is_active()
                && b.restaurant_id == booking.restaurant_id
                && b.table_id == booking.table_id
                && b.date == booking.date
                && b.time == booking.time
        });
        if taken {
            return false;
        }
        bookings.push(booking.clone());
        true
    }

    /// Move booking `id` to `to` if its current status is in `allowed_from`.
    /// Disallowed transitions fail with a conflict naming both states.
    pub fn transition(
        &self,
        id: &str,
        allowed_from: &[BookingStatus],
        to: BookingStatus,
    ) -> AppResult<Booking> {
        let mut bookings = self.bookings.write();
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
        if !allowed_from.contains(&booking.status) {
            return Err(AppError::conflict(format!(
                "Booking {id} is {} and cannot become {to}",
                booking.status
            )));
        }
        booking.status = to;
        Ok(booking.clone())
    }

    pub fn get(&self, id: &str) -> Option<Booking> {
        self.bookings.read().iter().find(|b| b.id == id).cloned()
    }

    /// Bookings placed by one user, creation order
    pub fn list_for_user(&self, user_id: i64) -> Vec<Booking> {
        self.bookings
            .read()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Bookings held against one restaurant, creation order
    pub fn list_for_restaurant(&self, restaurant_id: i64) -> Vec<Booking> {
        self.bookings
            .read()
            .iter()
            .filter(|b| b.restaurant_id == restaurant_id)
            .cloned()
            .collect()
    }

    /// Full copy of the ledger, creation order
    pub fn snapshot(&self) -> Vec<Booking> {
        self.bookings.read().clone()
    }
}
