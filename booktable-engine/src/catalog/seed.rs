//! Demo dataset
//!
//! Deterministic fixtures with fixed IDs, so demos and tests behave the
//! same from run to run. Real records created at runtime get snowflake IDs
//! and never collide with these small literals.

use chrono::NaiveDate;

use shared::models::{
    Address, Booking, BookingStatus, ContactInfo, DayHours, DiningTable, PriceLevel, Restaurant,
    Review, User, UserRole, WeeklyHours,
};

/// created_at for every seed record: 2025-01-01T00:00:00Z
const SEED_CREATED_AT: i64 = 1_735_689_600_000;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn table(id: i64, name: &str, capacity: i32) -> DiningTable {
    DiningTable {
        id,
        name: name.to_string(),
        capacity,
    }
}

// ============================================================================
// Restaurants
// ============================================================================

pub fn restaurants() -> Vec<Restaurant> {
    vec![bella_italia(), sushi_delight(), bistro_moderne()]
}

fn bella_italia() -> Restaurant {
    let weekday = DayHours::between("11:00", "22:00");
    Restaurant {
        id: 1,
        name: "Bella Italia".to_string(),
        description: "Family-owned trattoria with handmade pasta and a wood-fired oven."
            .to_string(),
        cuisine_type: "Italian".to_string(),
        price_level: PriceLevel::Premium,
        address: Address {
            street: "456 Columbus Ave".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94133".to_string(),
            country: "USA".to_string(),
        },
        contact: ContactInfo {
            phone: "+1 415 555 0134".to_string(),
            email: "mario@bellaitalia.com".to_string(),
            website: Some("https://bellaitalia.example.com".to_string()),
        },
        hours: WeeklyHours {
            monday: weekday.clone(),
            tuesday: weekday.clone(),
            wednesday: weekday.clone(),
            thursday: weekday,
            friday: DayHours::between("11:00", "23:00"),
            saturday: DayHours::between("11:00", "23:00"),
            sunday: DayHours::between("12:00", "21:00"),
        },
        images: vec!["https://images.example.com/bella-italia/front.jpg".to_string()],
        rating: 4.5,
        reviews: vec![
            Review {
                id: 9001,
                user_id: 1,
                user_name: "John Doe".to_string(),
                rating: 5,
                comment: "The tagliatelle al ragù is worth the trip alone.".to_string(),
                created_at: SEED_CREATED_AT,
            },
            Review {
                id: 9002,
                user_id: 2,
                user_name: "Jane Smith".to_string(),
                rating: 4,
                comment: "Lovely room, slightly slow on a Friday night.".to_string(),
                created_at: SEED_CREATED_AT,
            },
        ],
        tables: vec![
            table(101, "Window 1", 2),
            table(102, "Window 2", 2),
            table(103, "Center 1", 4),
            table(104, "Center 2", 4),
            table(105, "Family Table", 8),
        ],
        approved: true,
        manager_id: 4,
        created_at: SEED_CREATED_AT,
    }
}

fn sushi_delight() -> Restaurant {
    let service_day = DayHours::between("11:30", "22:00");
    Restaurant {
        id: 2,
        name: "Sushi Delight".to_string(),
        description: "Edomae-style sushi counter; fish arrives from Toyosu twice a week."
            .to_string(),
        cuisine_type: "Japanese".to_string(),
        price_level: PriceLevel::Moderate,
        address: Address {
            street: "1842 Post St".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94115".to_string(),
            country: "USA".to_string(),
        },
        contact: ContactInfo {
            phone: "+1 415 555 0172".to_string(),
            email: "takashi@sushidelight.com".to_string(),
            website: None,
        },
        hours: WeeklyHours {
            monday: DayHours::closed(),
            tuesday: service_day.clone(),
            wednesday: service_day.clone(),
            thursday: service_day.clone(),
            friday: service_day.clone(),
            saturday: service_day.clone(),
            sunday: service_day,
        },
        images: vec!["https://images.example.com/sushi-delight/counter.jpg".to_string()],
        rating: 4.8,
        reviews: vec![Review {
            id: 9003,
            user_id: 1,
            user_name: "John Doe".to_string(),
            rating: 5,
            comment: "Counter seats are the move. Omakase never misses.".to_string(),
            created_at: SEED_CREATED_AT,
        }],
        tables: vec![
            table(201, "Counter 1", 2),
            table(202, "Counter 2", 2),
            table(203, "Tatami", 4),
            table(204, "Garden", 6),
        ],
        approved: true,
        manager_id: 5,
        created_at: SEED_CREATED_AT,
    }
}

fn bistro_moderne() -> Restaurant {
    let dinner = DayHours::between("17:00", "23:00");
    Restaurant {
        id: 3,
        name: "Bistro Moderne".to_string(),
        description: "Contemporary French cooking with a short, seasonal menu.".to_string(),
        cuisine_type: "French".to_string(),
        price_level: PriceLevel::Luxury,
        address: Address {
            street: "12 E 52nd St".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10022".to_string(),
            country: "USA".to_string(),
        },
        contact: ContactInfo {
            phone: "+1 212 555 0190".to_string(),
            email: "pierre@bistromoderne.com".to_string(),
            website: Some("https://bistromoderne.example.com".to_string()),
        },
        hours: WeeklyHours {
            monday: dinner.clone(),
            tuesday: dinner.clone(),
            wednesday: dinner.clone(),
            thursday: dinner.clone(),
            friday: dinner.clone(),
            saturday: dinner,
            sunday: DayHours::closed(),
        },
        images: Vec::new(),
        rating: 4.2,
        reviews: Vec::new(),
        tables: vec![
            table(301, "Salon 1", 2),
            table(302, "Salon 2", 4),
            table(303, "Chef's Table", 6),
        ],
        approved: true,
        manager_id: 6,
        created_at: SEED_CREATED_AT,
    }
}

// ============================================================================
// Accounts
// ============================================================================

pub fn users() -> Vec<User> {
    let user = |id: i64, email: &str, first: &str, last: &str, role: UserRole| User {
        id,
        email: email.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        role,
        created_at: SEED_CREATED_AT,
    };
    vec![
        user(1, "john@example.com", "John", "Doe", UserRole::Customer),
        user(2, "jane@example.com", "Jane", "Smith", UserRole::Customer),
        user(3, "emma@example.com", "Emma", "Wilson", UserRole::Customer),
        user(4, "mario@bellaitalia.com", "Mario", "Rossi", UserRole::RestaurantManager),
        user(5, "takashi@sushidelight.com", "Takashi", "Yamamoto", UserRole::RestaurantManager),
        user(6, "pierre@bistromoderne.com", "Pierre", "Dubois", UserRole::RestaurantManager),
        user(7, "admin@booktable.com", "Ada", "Admin", UserRole::Admin),
    ]
}

// ============================================================================
// Bookings
// ============================================================================

pub fn bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: "b2f7c9c4-3d3a-4d41-9d26-7e0f6a9e1c55".to_string(),
            restaurant_id: 1,
            restaurant_name: "Bella Italia".to_string(),
            user_id: 1,
            user_name: "John Doe".to_string(),
            date: date(2025, 3, 10),
            time: "19:00".to_string(),
            party_size: 4,
            table_id: 103,
            status: BookingStatus::Confirmed,
            created_at: SEED_CREATED_AT,
        },
        Booking {
            id: "6a1d2b90-5a2e-4f7b-8c3d-0e9f4b7a612d".to_string(),
            restaurant_id: 2,
            restaurant_name: "Sushi Delight".to_string(),
            user_id: 2,
            user_name: "Jane Smith".to_string(),
            date: date(2025, 3, 11),
            time: "12:30".to_string(),
            party_size: 2,
            table_id: 201,
            status: BookingStatus::Completed,
            created_at: SEED_CREATED_AT,
        },
        Booking {
            id: "f3e8a7d1-9c4b-4a52-b1e0-5d2c8f9b3a47".to_string(),
            restaurant_id: 3,
            restaurant_name: "Bistro Moderne".to_string(),
            user_id: 1,
            user_name: "John Doe".to_string(),
            date: date(2025, 3, 12),
            time: "20:00".to_string(),
            party_size: 2,
            table_id: 301,
            status: BookingStatus::Cancelled,
            created_at: SEED_CREATED_AT,
        },
    ]
}
