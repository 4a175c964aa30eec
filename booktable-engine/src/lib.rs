//! BookTable Engine - restaurant discovery and reservation core
//!
//! # Architecture
//!
//! - **Availability** (`availability`): pure search and slot generation
//! - **Catalog** (`catalog`): restaurant directory over an async source
//! - **Booking** (`booking`): reservation ledger with slot-conflict prevention
//! - **Accounts** (`accounts`): demo-grade account directory
//! - **Core** (`core`): configuration, errors, application state
//!
//! # Module structure
//!
//! ```text
//! booktable-engine/src/
//! ├── core/          # Config, AppState, AppError
//! ├── availability/  # Pure search and slot engine
//! ├── catalog/       # Source boundary, cache, demo seed
//! ├── booking/       # Ledger, workflow, analytics
//! ├── accounts/      # Account directory
//! └── utils/         # Time, validation, logging helpers
//! ```

pub mod accounts;
pub mod availability;
pub mod booking;
pub mod catalog;
pub mod core;
pub mod utils;

// Re-export service types
pub use accounts::AccountService;
pub use booking::{BookingAnalytics, BookingLedger, BookingService};
pub use catalog::{CatalogService, CatalogSource, MemoryCatalog, SourceError, SourceResult};
pub use core::{AppError, AppResult, AppState, Config, ResourceVersions};

// Re-export the pure engine entry points
pub use availability::{bookable_slots, nearby_slots, search_restaurants};

// Re-export logger setup
pub use utils::logger::init_logger;
