//! Booking analytics
//!
//! Pure aggregation over a ledger snapshot. Pending bookings count toward
//! the total but have no bucket of their own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shared::models::{Booking, BookingStatus};

/// Aggregated booking counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingAnalytics {
    pub total_bookings: i64,
    pub confirmed_bookings: i64,
    pub cancelled_bookings: i64,
    pub completed_bookings: i64,
    /// Bookings per calendar day, keyed "YYYY-MM-DD"
    pub bookings_by_day: BTreeMap<String, i64>,
    /// Bookings per restaurant, keyed by denormalized restaurant name
    pub bookings_by_restaurant: BTreeMap<String, i64>,
}

/// Aggregate counts over a booking snapshot
pub fn booking_analytics(bookings: &[Booking]) -> BookingAnalytics {
    let mut analytics = BookingAnalytics::default();
    for booking in bookings {
        analytics.total_bookings += 1;
        match booking.status {
            BookingStatus::Confirmed => analytics.confirmed_bookings += 1,
            BookingStatus::Cancelled => analytics.cancelled_bookings += 1,
            BookingStatus::Completed => analytics.completed_bookings += 1,
            BookingStatus::Pending => {}
        }
        *analytics
            .bookings_by_day
            .entry(booking.date.to_string())
            .or_insert(0) += 1;
        *analytics
            .bookings_by_restaurant
            .entry(booking.restaurant_name.clone())
            .or_insert(0) += 1;
    }
    analytics
}
