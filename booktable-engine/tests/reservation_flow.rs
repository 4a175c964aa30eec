//! End-to-end flows against a fully initialized engine:
//! discovery, booking, listing management, and source outages.

use std::sync::Arc;

use chrono::NaiveDate;

use booktable_engine::catalog::seed;
use booktable_engine::{AppError, AppState, CatalogService, Config, MemoryCatalog, ResourceVersions};
use shared::models::{
    Address, BookingCreate, BookingStatus, ContactInfo, DayHours, DiningTableCreate, PriceLevel,
    RestaurantCreate, SearchQuery, UserCreate, UserRole, WeeklyHours,
};

// 2025-03-10 is a Monday; every seeded restaurant except Sushi Delight
// (closed Mondays) serves that evening
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

async fn seeded_state() -> AppState {
    let config = Config::with_overrides("test", true);
    AppState::initialize(&config)
        .await
        .expect("engine should initialize from the demo seed")
}

fn query(time: &str, party_size: i32) -> SearchQuery {
    SearchQuery {
        date: monday(),
        time: time.to_string(),
        party_size,
        location: None,
        cuisine: None,
    }
}

fn full_week(opening: &str, closing: &str) -> WeeklyHours {
    let day = DayHours::between(opening, closing);
    WeeklyHours {
        monday: day.clone(),
        tuesday: day.clone(),
        wednesday: day.clone(),
        thursday: day.clone(),
        friday: day.clone(),
        saturday: day.clone(),
        sunday: day,
    }
}

#[tokio::test]
async fn discover_book_and_complete() {
    let state = seeded_state().await;

    let diner = state
        .accounts
        .sign_in("john@example.com", UserRole::Customer)
        .unwrap();

    // Monday 19:00 for four, Italian, in San Francisco
    let mut q = query("19:00", 4);
    q.location = Some("San Francisco".to_string());
    q.cuisine = Some("italian".to_string());
    let results = state.catalog.search(&q).unwrap();
    assert_eq!(results.len(), 1);
    let bella = &results[0];
    assert_eq!(bella.name, "Bella Italia");

    // Slot grid runs from opening to the last half hour before closing
    let slots = state.catalog.bookable_slots(bella.id, monday()).unwrap();
    assert_eq!(slots.first().map(String::as_str), Some("11:00"));
    assert_eq!(slots.last().map(String::as_str), Some("21:30"));
    assert!(slots.contains(&"19:00".to_string()));

    // The demo seed already holds table 103 at 19:00 that Monday
    let taken = BookingCreate {
        restaurant_id: bella.id,
        user_id: diner.id,
        user_name: diner.full_name(),
        date: monday(),
        time: "19:00".to_string(),
        party_size: 4,
        table_id: 103,
    };
    assert!(matches!(state.bookings.create(taken.clone()), Err(AppError::Conflict(_))));

    // The table next to it is free
    let booking = state
        .bookings
        .create(BookingCreate {
            table_id: 104,
            ..taken
        })
        .unwrap();
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.restaurant_name, "Bella Italia");

    // Two seeded bookings for John plus the new one
    assert_eq!(state.bookings.list_for_user(diner.id).len(), 3);

    let completed = state.bookings.complete(&booking.id).unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);

    let analytics = state.bookings.analytics_for_restaurant(bella.id);
    assert_eq!(analytics.total_bookings, 2);
    assert_eq!(analytics.completed_bookings, 1);
}

#[tokio::test]
async fn cancelling_frees_the_slot_for_rebooking() {
    let state = seeded_state().await;

    let request = BookingCreate {
        restaurant_id: 2,
        user_id: 2,
        user_name: "Jane Smith".to_string(),
        // 2025-03-11 is a Tuesday; Sushi Delight serves 11:30-22:00
        date: NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(),
        time: "18:30".to_string(),
        party_size: 4,
        table_id: 203,
    };

    let first = state.bookings.create(request.clone()).unwrap();
    assert!(matches!(state.bookings.create(request.clone()), Err(AppError::Conflict(_))));

    state.bookings.cancel(&first.id).unwrap();
    let second = state.bookings.create(request).unwrap();
    assert_ne!(first.id, second.id);

    // A cancelled booking stays on the ledger for history and analytics
    assert_eq!(state.bookings.get(&first.id).unwrap().status, BookingStatus::Cancelled);
}

#[tokio::test]
async fn closed_days_have_no_search_hits_and_no_slots() {
    let state = seeded_state().await;

    // Sushi Delight is closed on Mondays
    let mut q = query("19:00", 2);
    q.cuisine = Some("Japanese".to_string());
    assert!(state.catalog.search(&q).unwrap().is_empty());
    assert!(state.catalog.bookable_slots(2, monday()).unwrap().is_empty());

    // Tuesday it reappears, grid snapped to the 11:30 opening
    q.date = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
    assert_eq!(state.catalog.search(&q).unwrap().len(), 1);
    let slots = state.catalog.bookable_slots(2, q.date).unwrap();
    assert_eq!(slots.first().map(String::as_str), Some("11:30"));
}

#[tokio::test]
async fn quick_options_stay_inside_the_service_window() {
    let state = seeded_state().await;

    assert_eq!(state.catalog.nearby_slots("19:00"), vec!["18:30", "18:45", "19:00", "19:15", "19:30"]);
    assert_eq!(state.catalog.nearby_slots("11:05"), vec!["11:05", "11:20", "11:35"]);
    assert!(state.catalog.nearby_slots("23:45").is_empty());
}

#[tokio::test]
async fn listing_lifecycle_from_registration_to_search() {
    let state = seeded_state().await;

    let manager = state
        .accounts
        .register(UserCreate {
            email: "nina@tapasdelmar.com".to_string(),
            first_name: "Nina".to_string(),
            last_name: "Moreno".to_string(),
            role: Some(UserRole::RestaurantManager),
        })
        .unwrap();

    let created = state
        .catalog
        .create(RestaurantCreate {
            name: "Tapas del Mar".to_string(),
            description: "Seafood tapas and a long sherry list.".to_string(),
            cuisine_type: "Spanish".to_string(),
            price_level: PriceLevel::Moderate,
            address: Address {
                street: "77 Harbor Way".to_string(),
                city: "San Francisco".to_string(),
                state: "CA".to_string(),
                zip_code: "94111".to_string(),
                country: "USA".to_string(),
            },
            contact: ContactInfo {
                phone: "+1 415 555 0144".to_string(),
                email: "nina@tapasdelmar.com".to_string(),
                website: None,
            },
            hours: full_week("12:00", "23:00"),
            images: Vec::new(),
            tables: vec![
                DiningTableCreate {
                    name: "Bar".to_string(),
                    capacity: 2,
                },
                DiningTableCreate {
                    name: "Round".to_string(),
                    capacity: 6,
                },
            ],
            manager_id: manager.id,
        })
        .await
        .unwrap();

    assert_eq!(state.catalog.list_by_manager(manager.id).len(), 1);

    // Invisible to diners until the admin approves it
    let mut q = query("20:00", 2);
    q.cuisine = Some("Spanish".to_string());
    assert!(state.catalog.search(&q).unwrap().is_empty());
    assert!(matches!(
        state.bookings.create(BookingCreate {
            restaurant_id: created.id,
            user_id: 1,
            user_name: "John Doe".to_string(),
            date: monday(),
            time: "20:00".to_string(),
            party_size: 2,
            table_id: created.tables[0].id,
        }),
        Err(AppError::Validation(_))
    ));

    state
        .accounts
        .sign_in("admin@booktable.com", UserRole::Admin)
        .unwrap();
    state.catalog.approve(created.id).await.unwrap();

    let found = state.catalog.search(&q).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Tapas del Mar");

    // Catalog writes moved the restaurant version forward
    assert!(state.versions.get("restaurant") >= 2);
}

#[tokio::test]
async fn warm_cache_survives_a_source_outage() {
    let versions = Arc::new(ResourceVersions::new());
    let source = Arc::new(MemoryCatalog::with_restaurants(seed::restaurants()));
    let catalog = CatalogService::new(source.clone(), versions);
    catalog.warmup().await.unwrap();

    source.set_offline(true);

    // Reads and searches keep serving the warm cache
    assert_eq!(catalog.list().len(), 3);
    assert_eq!(catalog.search(&query("19:00", 2)).unwrap().len(), 2);

    // Writes and re-warms surface the outage
    assert!(matches!(catalog.remove(1).await, Err(AppError::Unavailable(_))));
    assert!(matches!(catalog.warmup().await, Err(AppError::Unavailable(_))));

    source.set_offline(false);
    catalog.remove(1).await.unwrap();
    assert_eq!(catalog.list().len(), 2);
}
