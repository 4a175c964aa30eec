//! Catalog service - the restaurant directory
//!
//! Reads are served from a warm in-memory cache that mirrors the source's
//! insertion order. Writes go to the source first and update the cache only
//! after the source accepts them, so the cache never gets ahead of the
//! directory of record.

pub mod memory;
pub mod seed;
pub mod source;

pub use memory::MemoryCatalog;
pub use source::{CatalogSource, SourceError, SourceResult};

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;

use shared::models::{
    DiningTable, DiningTableCreate, Restaurant, RestaurantCreate, RestaurantUpdate, SearchQuery,
    WeeklyHours,
};
use shared::util::{now_millis, snowflake_id};

use crate::availability;
use crate::core::error::{AppError, AppResult};
use crate::core::state::ResourceVersions;
use crate::utils::time::require_hhmm;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_TEXT_LEN, MAX_URL_LEN, validate_bounded_text,
    validate_email, validate_optional_text, validate_party_size, validate_required_text,
};

/// Unified restaurant directory with an in-memory cache
#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    /// Warm cache, source order
    restaurants: Arc<RwLock<Vec<Restaurant>>>,
    versions: Arc<ResourceVersions>,
}

impl fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService")
            .field("restaurants_count", &self.restaurants.read().len())
            .finish()
    }
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>, versions: Arc<ResourceVersions>) -> Self {
        Self {
            source,
            restaurants: Arc::new(RwLock::new(Vec::new())),
            versions,
        }
    }

    // ========================================================================
    // Warmup
    // ========================================================================

    /// Load every restaurant from the source into the cache.
    ///
    /// Fails with [`AppError::Unavailable`] when the source cannot be
    /// reached; the cache keeps its previous contents in that case.
    pub async fn warmup(&self) -> AppResult<()> {
        let restaurants = self.source.fetch_all().await?;
        let count = restaurants.len();
        *self.restaurants.write() = restaurants;
        tracing::info!(count, "CatalogService: loaded restaurants");
        Ok(())
    }

    // ========================================================================
    // Reads (cache only)
    // ========================================================================

    /// Approved restaurants, source order
    pub fn list(&self) -> Vec<Restaurant> {
        self.restaurants
            .read()
            .iter()
            .filter(|r| r.approved)
            .cloned()
            .collect()
    }

    /// Every restaurant including unapproved listings, source order
    pub fn list_all(&self) -> Vec<Restaurant> {
        self.restaurants.read().clone()
    }

    /// Restaurant by ID, any approval state
    pub fn get(&self, id: i64) -> Option<Restaurant> {
        self.restaurants.read().iter().find(|r| r.id == id).cloned()
    }

    /// Restaurants managed by one account, including unapproved listings
    pub fn list_by_manager(&self, manager_id: i64) -> Vec<Restaurant> {
        self.restaurants
            .read()
            .iter()
            .filter(|r| r.manager_id == manager_id)
            .cloned()
            .collect()
    }

    // ========================================================================
    // Availability (pure engine over a cache snapshot)
    // ========================================================================

    /// Run an availability search.
    ///
    /// The query boundary is strict (bad party size or time is a validation
    /// error); inside the engine, malformed listing data only excludes the
    /// listing concerned.
    pub fn search(&self, query: &SearchQuery) -> AppResult<Vec<Restaurant>> {
        validate_party_size(query.party_size)?;
        require_hhmm(&query.time, "time")?;
        let restaurants = self.restaurants.read();
        Ok(availability::search_restaurants(&restaurants, query)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Bookable slot times for one restaurant on one date
    pub fn bookable_slots(&self, restaurant_id: i64, date: NaiveDate) -> AppResult<Vec<String>> {
        let restaurants = self.restaurants.read();
        let restaurant = restaurants
            .iter()
            .find(|r| r.id == restaurant_id)
            .ok_or_else(|| AppError::not_found(format!("Restaurant {restaurant_id} not found")))?;
        Ok(availability::bookable_slots(restaurant, date))
    }

    /// Quick alternatives around a requested time; advisory only
    pub fn nearby_slots(&self, requested_time: &str) -> Vec<String> {
        availability::nearby_slots(requested_time)
    }

    // ========================================================================
    // Writes (source first, then cache)
    // ========================================================================

    /// Create a listing. New listings start unapproved and stay invisible
    /// to search until an admin approves them.
    pub async fn create(&self, data: RestaurantCreate) -> AppResult<Restaurant> {
        let restaurant = Restaurant {
            id: snowflake_id(),
            name: data.name,
            description: data.description,
            cuisine_type: data.cuisine_type,
            price_level: data.price_level,
            address: data.address,
            contact: data.contact,
            hours: data.hours,
            images: data.images,
            rating: 0.0,
            reviews: Vec::new(),
            tables: build_tables(data.tables),
            approved: false,
            manager_id: data.manager_id,
            created_at: now_millis(),
        };
        validate_listing(&restaurant)?;

        // Guard must drop before the await below
        {
            let cache = self.restaurants.read();
            if cache.iter().any(|r| r.name == restaurant.name) {
                return Err(AppError::conflict(format!(
                    "Restaurant '{}' already exists",
                    restaurant.name
                )));
            }
        }

        let created = self.source.insert(restaurant).await?;
        self.restaurants.write().push(created.clone());
        self.record_change("created", created.id);
        Ok(created)
    }

    /// Partial update. Present fields replace the stored values; `tables`
    /// replaces the whole table set with fresh IDs. Cache position is kept.
    pub async fn update(&self, id: i64, data: RestaurantUpdate) -> AppResult<Restaurant> {
        let mut restaurant = self
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Restaurant {id} not found")))?;

        if let Some(name) = &data.name {
            if *name != restaurant.name {
                let cache = self.restaurants.read();
                if cache.iter().any(|r| r.name == *name && r.id != id) {
                    return Err(AppError::conflict(format!("Restaurant '{name}' already exists")));
                }
            }
        }

        if let Some(name) = data.name {
            restaurant.name = name;
        }
        if let Some(description) = data.description {
            restaurant.description = description;
        }
        if let Some(cuisine_type) = data.cuisine_type {
            restaurant.cuisine_type = cuisine_type;
        }
        if let Some(price_level) = data.price_level {
            restaurant.price_level = price_level;
        }
        if let Some(address) = data.address {
            restaurant.address = address;
        }
        if let Some(contact) = data.contact {
            restaurant.contact = contact;
        }
        if let Some(hours) = data.hours {
            restaurant.hours = hours;
        }
        if let Some(images) = data.images {
            restaurant.images = images;
        }
        if let Some(tables) = data.tables {
            restaurant.tables = build_tables(tables);
        }
        validate_listing(&restaurant)?;

        let updated = self.source.update(restaurant).await?;
        self.replace_cached(updated.clone());
        self.record_change("updated", id);
        Ok(updated)
    }

    /// Approve a pending listing (admin workflow)
    pub async fn approve(&self, id: i64) -> AppResult<Restaurant> {
        let mut restaurant = self
            .get(id)
            .ok_or_else(|| AppError::not_found(format!("Restaurant {id} not found")))?;
        if restaurant.approved {
            return Err(AppError::conflict(format!("Restaurant {id} is already approved")));
        }
        restaurant.approved = true;

        let updated = self.source.update(restaurant).await?;
        self.replace_cached(updated.clone());
        self.record_change("approved", id);
        Ok(updated)
    }

    /// Remove a listing
    pub async fn remove(&self, id: i64) -> AppResult<()> {
        self.source.remove(id).await?;
        self.restaurants.write().retain(|r| r.id != id);
        self.record_change("removed", id);
        Ok(())
    }

    /// Re-fetch one restaurant from the source and refresh its cache entry.
    /// Evicts the entry when the source no longer has the record.
    pub async fn refresh(&self, id: i64) -> AppResult<Option<Restaurant>> {
        let fetched = self.source.fetch_by_id(id).await?;
        match &fetched {
            Some(restaurant) => self.replace_cached(restaurant.clone()),
            None => self.restaurants.write().retain(|r| r.id != id),
        }
        Ok(fetched)
    }

    fn replace_cached(&self, restaurant: Restaurant) {
        let mut cache = self.restaurants.write();
        if let Some(existing) = cache.iter_mut().find(|r| r.id == restaurant.id) {
            *existing = restaurant;
        } else {
            cache.push(restaurant);
        }
    }

    fn record_change(&self, action: &str, id: i64) {
        let version = self.versions.increment("restaurant");
        tracing::debug!(resource = "restaurant", action, id, version, "catalog changed");
    }
}

// ============================================================================
// Write-boundary validation
// ============================================================================

fn build_tables(tables: Vec<DiningTableCreate>) -> Vec<DiningTable> {
    tables
        .into_iter()
        .map(|t| DiningTable {
            id: snowflake_id(),
            name: t.name,
            capacity: t.capacity,
        })
        .collect()
}

fn validate_listing(restaurant: &Restaurant) -> AppResult<()> {
    validate_required_text(&restaurant.name, "name", MAX_NAME_LEN)?;
    validate_bounded_text(&restaurant.description, "description", MAX_TEXT_LEN)?;
    validate_required_text(&restaurant.cuisine_type, "cuisine_type", MAX_SHORT_TEXT_LEN)?;

    validate_bounded_text(&restaurant.address.street, "address.street", MAX_ADDRESS_LEN)?;
    validate_bounded_text(&restaurant.address.city, "address.city", MAX_SHORT_TEXT_LEN)?;
    validate_bounded_text(&restaurant.address.state, "address.state", MAX_SHORT_TEXT_LEN)?;
    validate_bounded_text(&restaurant.address.zip_code, "address.zip_code", MAX_SHORT_TEXT_LEN)?;

    validate_bounded_text(&restaurant.contact.phone, "contact.phone", MAX_SHORT_TEXT_LEN)?;
    if !restaurant.contact.email.is_empty() {
        validate_email(&restaurant.contact.email)?;
    }
    validate_optional_text(&restaurant.contact.website, "contact.website", MAX_URL_LEN)?;
    for image in &restaurant.images {
        validate_bounded_text(image, "images", MAX_URL_LEN)?;
    }

    for table in &restaurant.tables {
        validate_required_text(&table.name, "table name", MAX_NAME_LEN)?;
        if table.capacity < 1 {
            return Err(AppError::validation(format!(
                "Table '{}' must seat at least 1 guest, got {}",
                table.name, table.capacity
            )));
        }
    }

    validate_hours(&restaurant.hours)
}

/// Reject hours a reader would silently treat as closed. Storage stays
/// lenient (seeded or older records may carry anything); the write boundary
/// does not let new malformed entries in.
fn validate_hours(hours: &WeeklyHours) -> AppResult<()> {
    for (name, day) in hours.days() {
        if !day.open {
            continue;
        }
        let opening = day
            .opening_time
            .as_deref()
            .ok_or_else(|| AppError::validation(format!("{name}: opening_time is required on open days")))?;
        let closing = day
            .closing_time
            .as_deref()
            .ok_or_else(|| AppError::validation(format!("{name}: closing_time is required on open days")))?;
        let opening = require_hhmm(opening, &format!("{name}.opening_time"))?;
        let closing = require_hhmm(closing, &format!("{name}.closing_time"))?;
        if closing <= opening {
            return Err(AppError::validation(format!(
                "{name}: closing_time must be after opening_time"
            )));
        }
    }
    Ok(())
}
