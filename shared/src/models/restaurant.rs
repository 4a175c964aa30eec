//! Restaurant Model

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

use super::dining_table::{DiningTable, DiningTableCreate};
use super::hours::WeeklyHours;

/// Price tier, serialized as the euro-sign ladder used across the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceLevel {
    #[serde(rename = "€")]
    Budget,
    #[serde(rename = "€€")]
    Moderate,
    #[serde(rename = "€€€")]
    Premium,
    #[serde(rename = "€€€€")]
    Luxury,
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PriceLevel::Budget => "€",
            PriceLevel::Moderate => "€€",
            PriceLevel::Premium => "€€€",
            PriceLevel::Luxury => "€€€€",
        };
        write!(f, "{}", s)
    }
}

/// Street address
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// Contact details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
}

/// Guest review, embedded in its restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: Timestamp,
}

/// Restaurant entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cuisine_type: String,
    pub price_level: PriceLevel,
    pub address: Address,
    pub contact: ContactInfo,
    #[serde(default)]
    pub hours: WeeklyHours,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub tables: Vec<DiningTable>,
    #[serde(default)]
    pub approved: bool,
    pub manager_id: i64,
    pub created_at: Timestamp,
}

/// Create restaurant payload (ID assigned by the catalog service;
/// new listings start unapproved)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub cuisine_type: String,
    pub price_level: PriceLevel,
    pub address: Address,
    pub contact: ContactInfo,
    pub hours: WeeklyHours,
    #[serde(default)]
    pub images: Vec<String>,
    pub tables: Vec<DiningTableCreate>,
    pub manager_id: i64,
}

/// Update restaurant payload.
///
/// `tables` replaces the full table set and assigns fresh table IDs.
/// The approval flag is not part of this payload; approval is a separate
/// admin operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuisine_type: Option<String>,
    pub price_level: Option<PriceLevel>,
    pub address: Option<Address>,
    pub contact: Option<ContactInfo>,
    pub hours: Option<WeeklyHours>,
    pub images: Option<Vec<String>>,
    pub tables: Option<Vec<DiningTableCreate>>,
}
