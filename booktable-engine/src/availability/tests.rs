use chrono::NaiveDate;

use shared::models::{
    Address, ContactInfo, DayHours, DiningTable, PriceLevel, Restaurant, SearchQuery, WeeklyHours,
};

use super::{bookable_slots, nearby_slots, search_restaurants};

// ============================================================================
// Fixtures
// ============================================================================

// 2025-03-10 is a Monday
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
}

fn table(id: i64, capacity: i32) -> DiningTable {
    DiningTable {
        id,
        name: format!("T{id}"),
        capacity,
    }
}

fn all_week(opening: &str, closing: &str) -> WeeklyHours {
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

fn make_restaurant(id: i64, name: &str, cuisine: &str) -> Restaurant {
    Restaurant {
        id,
        name: name.to_string(),
        description: String::new(),
        cuisine_type: cuisine.to_string(),
        price_level: PriceLevel::Moderate,
        address: Address {
            street: "1 Main St".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94110".to_string(),
            country: "USA".to_string(),
        },
        contact: ContactInfo {
            phone: "+1 415 555 0100".to_string(),
            email: "host@example.com".to_string(),
            website: None,
        },
        hours: all_week("11:00", "22:00"),
        images: Vec::new(),
        rating: 4.5,
        reviews: Vec::new(),
        tables: vec![table(1, 2), table(2, 4)],
        approved: true,
        manager_id: 900,
        created_at: 0,
    }
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

fn names(results: &[&Restaurant]) -> Vec<String> {
    results.iter().map(|r| r.name.clone()).collect()
}

// ============================================================================
// Search: approval, party size, cuisine
// ============================================================================

#[test]
fn unapproved_restaurants_never_match() {
    let mut pending = make_restaurant(1, "Pending Palace", "Italian");
    pending.approved = false;
    let catalog = vec![pending];

    assert!(search_restaurants(&catalog, &query("19:00", 2)).is_empty());
}

#[test]
fn party_size_requires_one_sufficient_table() {
    let catalog = vec![make_restaurant(1, "Bella", "Italian")];

    // Largest table seats 4
    assert_eq!(search_restaurants(&catalog, &query("19:00", 4)).len(), 1);
    assert!(search_restaurants(&catalog, &query("19:00", 5)).is_empty());
}

#[test]
fn restaurant_without_tables_never_matches() {
    let mut empty = make_restaurant(1, "No Tables", "Italian");
    empty.tables.clear();
    let catalog = vec![empty];

    assert!(search_restaurants(&catalog, &query("19:00", 1)).is_empty());
}

#[test]
fn cuisine_filter_is_case_insensitive_exact() {
    let catalog = vec![
        make_restaurant(1, "Bella", "Italian"),
        make_restaurant(2, "Tokyo", "Japanese"),
    ];

    let mut q = query("19:00", 2);
    q.cuisine = Some("iTaLiAn".to_string());
    assert_eq!(names(&search_restaurants(&catalog, &q)), vec!["Bella"]);

    // Substring is not enough
    q.cuisine = Some("Ital".to_string());
    assert!(search_restaurants(&catalog, &q).is_empty());
}

#[test]
fn blank_filters_are_ignored() {
    let catalog = vec![make_restaurant(1, "Bella", "Italian")];

    let mut q = query("19:00", 2);
    q.cuisine = Some(String::new());
    q.location = Some("   ".to_string());
    assert_eq!(search_restaurants(&catalog, &q).len(), 1);
}

// ============================================================================
// Search: location
// ============================================================================

#[test]
fn location_matches_city_state_or_zip() {
    let catalog = vec![make_restaurant(1, "Bella", "Italian")];

    for location in ["san franc", "SAN FRANCISCO", "ca", "94110", "411"] {
        let mut q = query("19:00", 2);
        q.location = Some(location.to_string());
        assert_eq!(
            search_restaurants(&catalog, &q).len(),
            1,
            "location filter '{location}' should match"
        );
    }

    let mut q = query("19:00", 2);
    q.location = Some("New York".to_string());
    assert!(search_restaurants(&catalog, &q).is_empty());
}

// ============================================================================
// Search: hours and the grace window
// ============================================================================

#[test]
fn grace_window_is_inclusive_on_both_ends() {
    // Hours 11:00-22:00, so the window is 10:30-22:30
    let catalog = vec![make_restaurant(1, "Bella", "Italian")];

    for time in ["10:30", "10:31", "11:00", "19:00", "22:00", "22:30"] {
        assert_eq!(
            search_restaurants(&catalog, &query(time, 2)).len(),
            1,
            "{time} should be inside the grace window"
        );
    }
    for time in ["10:29", "22:31", "23:00", "02:00"] {
        assert!(
            search_restaurants(&catalog, &query(time, 2)).is_empty(),
            "{time} should be outside the grace window"
        );
    }
}

#[test]
fn closed_weekday_never_matches() {
    let mut restaurant = make_restaurant(1, "Bella", "Italian");
    restaurant.hours.monday = DayHours::closed();
    let catalog = vec![restaurant];

    assert!(search_restaurants(&catalog, &query("19:00", 2)).is_empty());

    let mut q = query("19:00", 2);
    q.date = sunday();
    assert_eq!(search_restaurants(&catalog, &q).len(), 1);
}

#[test]
fn malformed_hours_count_as_closed() {
    // Flagged open but missing the closing time
    let mut missing = make_restaurant(1, "Missing", "Italian");
    missing.hours.monday = DayHours {
        open: true,
        opening_time: Some("11:00".to_string()),
        closing_time: None,
    };

    // Unparseable opening time
    let mut garbled = make_restaurant(2, "Garbled", "Italian");
    garbled.hours.monday = DayHours {
        open: true,
        opening_time: Some("eleven".to_string()),
        closing_time: Some("22:00".to_string()),
    };

    // Closing at or before opening
    let mut inverted = make_restaurant(3, "Inverted", "Italian");
    inverted.hours.monday = DayHours::between("22:00", "11:00");
    let mut zero_width = make_restaurant(4, "ZeroWidth", "Italian");
    zero_width.hours.monday = DayHours::between("11:00", "11:00");

    let catalog = vec![missing, garbled, inverted, zero_width];
    assert!(search_restaurants(&catalog, &query("19:00", 2)).is_empty());
}

#[test]
fn unparseable_query_time_matches_nothing() {
    let catalog = vec![make_restaurant(1, "Bella", "Italian")];

    assert!(search_restaurants(&catalog, &query("7pm", 2)).is_empty());
    assert!(search_restaurants(&catalog, &query("", 2)).is_empty());
    assert!(search_restaurants(&catalog, &query("25:00", 2)).is_empty());
}

// ============================================================================
// Search: ordering and purity
// ============================================================================

#[test]
fn results_preserve_catalog_order() {
    let catalog = vec![
        make_restaurant(3, "Third", "Italian"),
        make_restaurant(1, "First", "Italian"),
        make_restaurant(2, "Second", "Japanese"),
    ];

    let q = query("19:00", 2);
    assert_eq!(names(&search_restaurants(&catalog, &q)), vec!["Third", "First", "Second"]);

    // Same query, same answer
    assert_eq!(
        names(&search_restaurants(&catalog, &q)),
        names(&search_restaurants(&catalog, &q))
    );
}

// ============================================================================
// Bookable slots
// ============================================================================

#[test]
fn slots_cover_open_hours_excluding_closing_time() {
    let mut restaurant = make_restaurant(1, "Bella", "Italian");
    restaurant.hours.monday = DayHours::between("18:00", "21:00");

    assert_eq!(
        bookable_slots(&restaurant, monday()),
        vec!["18:00", "18:30", "19:00", "19:30", "20:00", "20:30"]
    );
}

#[test]
fn slots_snap_to_the_half_hour_grid() {
    let mut restaurant = make_restaurant(1, "Bella", "Italian");
    restaurant.hours.monday = DayHours::between("11:15", "13:10");

    // First grid time at or after 11:15 is 11:30; 13:00 < 13:10 still fits
    assert_eq!(bookable_slots(&restaurant, monday()), vec!["11:30", "12:00", "12:30", "13:00"]);
}

#[test]
fn slots_for_closed_or_malformed_days_are_empty() {
    let mut closed = make_restaurant(1, "Closed", "Italian");
    closed.hours.monday = DayHours::closed();
    assert!(bookable_slots(&closed, monday()).is_empty());

    let mut garbled = make_restaurant(2, "Garbled", "Italian");
    garbled.hours.monday = DayHours {
        open: true,
        opening_time: None,
        closing_time: Some("22:00".to_string()),
    };
    assert!(bookable_slots(&garbled, monday()).is_empty());

    let mut inverted = make_restaurant(3, "Inverted", "Italian");
    inverted.hours.monday = DayHours::between("22:00", "11:00");
    assert!(bookable_slots(&inverted, monday()).is_empty());
}

#[test]
fn slots_ignore_the_grace_window() {
    // Grace widens search matching only; no 17:30 or 21:00 slot appears
    let mut restaurant = make_restaurant(1, "Bella", "Italian");
    restaurant.hours.monday = DayHours::between("18:00", "21:00");

    let slots = bookable_slots(&restaurant, monday());
    assert!(!slots.contains(&"17:30".to_string()));
    assert!(!slots.contains(&"21:00".to_string()));
}

// ============================================================================
// Nearby slots
// ============================================================================

#[test]
fn nearby_slots_step_fifteen_minutes_around_the_request() {
    assert_eq!(nearby_slots("19:00"), vec!["18:30", "18:45", "19:00", "19:15", "19:30"]);
    assert_eq!(nearby_slots("11:05"), vec!["11:05", "11:20", "11:35"]);
}

#[test]
fn nearby_slots_respect_the_service_window() {
    // Window start is inclusive
    assert_eq!(nearby_slots("11:00"), vec!["11:00", "11:15", "11:30"]);
    assert_eq!(nearby_slots("10:50"), vec!["11:05", "11:20"]);

    // Window end is exclusive: 22:00 itself is out
    assert_eq!(nearby_slots("21:45"), vec!["21:15", "21:30", "21:45"]);
    assert_eq!(nearby_slots("22:00"), vec!["21:30", "21:45"]);

    // Far outside the window
    assert!(nearby_slots("23:30").is_empty());
    assert!(nearby_slots("08:00").is_empty());
}

#[test]
fn nearby_slots_with_malformed_time_are_empty() {
    assert!(nearby_slots("7pm").is_empty());
    assert!(nearby_slots("").is_empty());
}
