//! Booking workflow
//!
//! Creation validates the request against the catalog, then claims the slot
//! through the ledger. Times are stored canonically ("HH:MM", zero padded)
//! so slot claims compare by string equality.

pub mod analytics;
pub mod ledger;

pub use analytics::BookingAnalytics;
pub use ledger::BookingLedger;

use std::sync::Arc;

use uuid::Uuid;

use shared::models::{Booking, BookingCreate, BookingStatus};
use shared::util::now_millis;

use crate::catalog::CatalogService;
use crate::core::error::{AppError, AppResult};
use crate::core::state::ResourceVersions;
use crate::utils::time::{format_minutes, require_hhmm};
use crate::utils::validation::{MAX_NAME_LEN, validate_party_size, validate_required_text};

/// Reservation service over the in-memory ledger
#[derive(Debug, Clone)]
pub struct BookingService {
    catalog: CatalogService,
    ledger: BookingLedger,
    versions: Arc<ResourceVersions>,
}

impl BookingService {
    pub fn new(catalog: CatalogService, versions: Arc<ResourceVersions>) -> Self {
        Self {
            catalog,
            ledger: BookingLedger::new(),
            versions,
        }
    }

    pub fn with_bookings(
        catalog: CatalogService,
        versions: Arc<ResourceVersions>,
        bookings: Vec<Booking>,
    ) -> Self {
        Self {
            catalog,
            ledger: BookingLedger::with_bookings(bookings),
            versions,
        }
    }

    /// Create a booking.
    ///
    /// The request must name an approved restaurant, one of its tables, and
    /// a party the table can seat. At most one active booking may hold a
    /// given (restaurant, table, date, time); losing that race is a
    /// [`AppError::Conflict`], not a validation error.
    ///
    /// Bookings are confirmed immediately. The restaurant name is copied
    /// onto the booking so listings and analytics need no catalog lookups.
    pub fn create(&self, data: BookingCreate) -> AppResult<Booking> {
        validate_party_size(data.party_size)?;
        let minutes = require_hhmm(&data.time, "time")?;
        validate_required_text(&data.user_name, "user_name", MAX_NAME_LEN)?;

        let restaurant = self.catalog.get(data.restaurant_id).ok_or_else(|| {
            AppError::not_found(format!("Restaurant {} not found", data.restaurant_id))
        })?;
        if !restaurant.approved {
            return Err(AppError::validation(format!(
                "Restaurant '{}' is not accepting bookings",
                restaurant.name
            )));
        }
        let table = restaurant
            .tables
            .iter()
            .find(|t| t.id == data.table_id)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Table {} does not belong to restaurant {}",
                    data.table_id, restaurant.id
                ))
            })?;
        if table.capacity < data.party_size {
            return Err(AppError::validation(format!(
                "Table '{}' seats {}, party of {} requested",
                table.name, table.capacity, data.party_size
            )));
        }

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            restaurant_id: restaurant.id,
            restaurant_name: restaurant.name.clone(),
            user_id: data.user_id,
            user_name: data.user_name,
            date: data.date,
            time: format_minutes(minutes),
            party_size: data.party_size,
            table_id: data.table_id,
            status: BookingStatus::Confirmed,
            created_at: now_millis(),
        };

        if !self.ledger.insert_unless_conflict(&booking) {
            return Err(AppError::conflict(format!(
                "Table {} at '{}' is already booked on {} at {}",
                table.name, restaurant.name, booking.date, booking.time
            )));
        }

        tracing::info!(
            booking_id = %booking.id,
            restaurant_id = booking.restaurant_id,
            date = %booking.date,
            time = %booking.time,
            party_size = booking.party_size,
            "Booking created"
        );
        self.record_change("created", &booking.id);
        Ok(booking)
    }

    /// Cancel a pending or confirmed booking, releasing its slot claim
    pub fn cancel(&self, id: &str) -> AppResult<Booking> {
        let booking = self.ledger.transition(
            id,
            &[BookingStatus::Pending, BookingStatus::Confirmed],
            BookingStatus::Cancelled,
        )?;
        self.record_change("cancelled", id);
        Ok(booking)
    }

    /// Mark a confirmed booking as honored. The slot claim stays held.
    pub fn complete(&self, id: &str) -> AppResult<Booking> {
        let booking =
            self.ledger
                .transition(id, &[BookingStatus::Confirmed], BookingStatus::Completed)?;
        self.record_change("completed", id);
        Ok(booking)
    }

    pub fn get(&self, id: &str) -> Option<Booking> {
        self.ledger.get(id)
    }

    /// Bookings placed by one user, creation order
    pub fn list_for_user(&self, user_id: i64) -> Vec<Booking> {
        self.ledger.list_for_user(user_id)
    }

    /// Bookings held against one restaurant, creation order
    pub fn list_for_restaurant(&self, restaurant_id: i64) -> Vec<Booking> {
        self.ledger.list_for_restaurant(restaurant_id)
    }

    /// Aggregate counts over every booking
    pub fn analytics(&self) -> BookingAnalytics {
        analytics::booking_analytics(&self.ledger.snapshot())
    }

    /// Aggregate counts over one restaurant's bookings
    pub fn analytics_for_restaurant(&self, restaurant_id: i64) -> BookingAnalytics {
        analytics::booking_analytics(&self.list_for_restaurant(restaurant_id))
    }

    fn record_change(&self, action: &str, id: &str) {
        let version = self.versions.increment("booking");
        tracing::debug!(resource = "booking", action, id, version, "ledger changed");
    }
}
