//! Application state management

use std::sync::Arc;

use dashmap::DashMap;

use crate::accounts::AccountService;
use crate::booking::BookingService;
use crate::catalog::{CatalogService, MemoryCatalog, seed};
use crate::core::config::Config;
use crate::core::error::AppResult;

/// Resource version manager
///
/// Lock-free per-resource version counters. Embedders poll a resource's
/// version to detect stale views without diffing whole collections.
#[derive(Debug, Default)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump and return the version of a resource
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Current version of a resource (0 if never changed)
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

/// Application state - owns every service as a shared reference
///
/// Cloning is cheap; all services share their data through `Arc`. Embedders
/// receive this object explicitly, there is no ambient global state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: CatalogService,
    pub bookings: BookingService,
    pub accounts: AccountService,
    pub versions: Arc<ResourceVersions>,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: CatalogService,
        bookings: BookingService,
        accounts: AccountService,
        versions: Arc<ResourceVersions>,
    ) -> Self {
        Self {
            config,
            catalog,
            bookings,
            accounts,
            versions,
        }
    }

    /// Initialize the application state
    ///
    /// Builds the in-memory catalog source (populated with the demo dataset
    /// when `seed_demo_data` is set), warms the catalog cache, and wires the
    /// booking and account services on top of it. Fails with
    /// [`AppError::Unavailable`](crate::core::AppError::Unavailable) when the
    /// catalog source cannot be reached.
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let versions = Arc::new(ResourceVersions::new());

        let source = if config.seed_demo_data {
            MemoryCatalog::with_restaurants(seed::restaurants())
        } else {
            MemoryCatalog::new()
        };
        let catalog = CatalogService::new(Arc::new(source), versions.clone());
        catalog.warmup().await?;

        let accounts = if config.seed_demo_data {
            AccountService::with_users(seed::users(), versions.clone())
        } else {
            AccountService::new(versions.clone())
        };

        let bookings = if config.seed_demo_data {
            BookingService::with_bookings(catalog.clone(), versions.clone(), seed::bookings())
        } else {
            BookingService::new(catalog.clone(), versions.clone())
        };

        tracing::info!(
            environment = %config.environment,
            seeded = config.seed_demo_data,
            "AppState initialized"
        );

        Ok(Self {
            config: config.clone(),
            catalog,
            bookings,
            accounts,
            versions,
        })
    }
}
