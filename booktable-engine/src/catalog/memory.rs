//! In-memory catalog source
//!
//! Insertion-ordered store backing demos and tests. `set_offline` makes
//! every subsequent call fail with [`SourceError::Unavailable`] so callers
//! can exercise the connectivity-failure path.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use shared::models::Restaurant;

use super::source::{CatalogSource, SourceError, SourceResult};

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    restaurants: RwLock<Vec<Restaurant>>,
    offline: AtomicBool,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_restaurants(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants: RwLock::new(restaurants),
            offline: AtomicBool::new(false),
        }
    }

    /// Simulate a connectivity failure for every subsequent call
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> SourceResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable("catalog source is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn fetch_all(&self) -> SourceResult<Vec<Restaurant>> {
        self.check_online()?;
        Ok(self.restaurants.read().await.clone())
    }

    async fn fetch_by_id(&self, id: i64) -> SourceResult<Option<Restaurant>> {
        self.check_online()?;
        Ok(self
            .restaurants
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn insert(&self, restaurant: Restaurant) -> SourceResult<Restaurant> {
        self.check_online()?;
        let mut restaurants = self.restaurants.write().await;
        if restaurants.iter().any(|r| r.id == restaurant.id) {
            return Err(SourceError::Duplicate(format!(
                "Restaurant {} already exists",
                restaurant.id
            )));
        }
        restaurants.push(restaurant.clone());
        Ok(restaurant)
    }

    async fn update(&self, restaurant: Restaurant) -> SourceResult<Restaurant> {
        self.check_online()?;
        let mut restaurants = self.restaurants.write().await;
        match restaurants.iter_mut().find(|r| r.id == restaurant.id) {
            Some(existing) => {
                *existing = restaurant.clone();
                Ok(restaurant)
            }
            None => Err(SourceError::NotFound(format!(
                "Restaurant {} not found",
                restaurant.id
            ))),
        }
    }

    async fn remove(&self, id: i64) -> SourceResult<()> {
        self.check_online()?;
        let mut restaurants = self.restaurants.write().await;
        let before = restaurants.len();
        restaurants.retain(|r| r.id != id);
        if restaurants.len() == before {
            return Err(SourceError::NotFound(format!("Restaurant {id} not found")));
        }
        Ok(())
    }
}
