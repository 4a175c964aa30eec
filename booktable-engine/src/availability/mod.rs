//! Availability engine
//!
//! Pure search and slot generation over an immutable catalog snapshot.
//! No clocks, no I/O: callers pass the date and time in, results come out.
//!
//! Malformed weekly hours never abort a search. A day whose times are
//! missing, unparseable, or inverted (closing at or before opening) is
//! treated as closed, so one bad listing cannot take the whole search down.

use chrono::{Datelike, NaiveDate};

use shared::models::{DayHours, Restaurant, SearchQuery};

use crate::utils::time::{format_minutes, minutes_of_day, parse_hhmm};

#[cfg(test)]
mod tests;

/// Grace window applied on both sides of a day's hours, in minutes.
/// A diner searching slightly before opening or after closing still
/// sees the restaurant.
pub const GRACE_MINUTES: i32 = 30;

/// Bookable slots sit on a fixed half-hour grid (:00 and :30)
const SLOT_INTERVAL: i32 = 30;

/// Quick options near a requested time, in minutes relative to it
const QUICK_OFFSETS: [i32; 5] = [-30, -15, 0, 15, 30];

/// Quick options are clamped to the service window
/// 11:00 (inclusive) to 22:00 (exclusive)
const QUICK_WINDOW_START: i32 = 11 * 60;
const QUICK_WINDOW_END: i32 = 22 * 60;

/// Parse "HH:MM" into minutes since midnight
#[inline]
fn to_minutes(time: &str) -> Option<i32> {
    parse_hhmm(time).map(minutes_of_day)
}

/// Resolve a day's open interval as minutes since midnight.
///
/// `None` means closed: the day is flagged closed, a time is missing or
/// unparseable, or the interval is inverted.
fn open_interval(day: &DayHours) -> Option<(i32, i32)> {
    if !day.open {
        return None;
    }
    let opening = to_minutes(day.opening_time.as_deref()?)?;
    let closing = to_minutes(day.closing_time.as_deref()?)?;
    if closing <= opening {
        return None;
    }
    Some((opening, closing))
}

/// Requested time within the day's hours extended by the grace window,
/// inclusive on both ends
fn matches_hours(day: &DayHours, requested: i32) -> bool {
    match open_interval(day) {
        Some((opening, closing)) => {
            requested >= opening - GRACE_MINUTES && requested <= closing + GRACE_MINUTES
        }
        None => false,
    }
}

/// At least one table seats the whole party
fn matches_party_size(restaurant: &Restaurant, party_size: i32) -> bool {
    restaurant.tables.iter().any(|t| t.capacity >= party_size)
}

/// Free-text location filter: case-insensitive substring on city or state,
/// plain substring on zip code
fn matches_location(restaurant: &Restaurant, location: &str) -> bool {
    let needle = location.to_lowercase();
    restaurant.address.city.to_lowercase().contains(&needle)
        || restaurant.address.state.to_lowercase().contains(&needle)
        || restaurant.address.zip_code.contains(location)
}

/// Cuisine filter: case-insensitive exact match
fn matches_cuisine(restaurant: &Restaurant, cuisine: &str) -> bool {
    restaurant.cuisine_type.eq_ignore_ascii_case(cuisine)
}

/// Blank and whitespace-only filters count as absent
fn effective_filter(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|s| !s.is_empty())
}

fn matches_query(restaurant: &Restaurant, query: &SearchQuery, requested: i32) -> bool {
    if !restaurant.approved {
        return false;
    }
    let day = restaurant.hours.for_weekday(query.date.weekday());
    if !matches_hours(day, requested) {
        return false;
    }
    if !matches_party_size(restaurant, query.party_size) {
        return false;
    }
    if let Some(location) = effective_filter(query.location.as_deref()) {
        if !matches_location(restaurant, location) {
            return false;
        }
    }
    if let Some(cuisine) = effective_filter(query.cuisine.as_deref()) {
        if !matches_cuisine(restaurant, cuisine) {
            return false;
        }
    }
    true
}

/// Filter a catalog snapshot down to the restaurants available for a query.
///
/// A restaurant matches when every condition holds:
/// approved, open on the query's weekday, requested time inside the hours
/// plus the grace window, some table seats the party, and the optional
/// location and cuisine filters agree. Catalog order is preserved and the
/// input is never reordered or deduplicated.
///
/// An unparseable query time matches nothing.
pub fn search_restaurants<'a>(
    catalog: &'a [Restaurant],
    query: &SearchQuery,
) -> Vec<&'a Restaurant> {
    let Some(requested) = to_minutes(query.time.trim()) else {
        return Vec::new();
    };
    catalog
        .iter()
        .filter(|restaurant| matches_query(restaurant, query, requested))
        .collect()
}

/// Concrete reservation start times for one restaurant on one date.
///
/// Slots sit on the absolute half-hour grid, start at the first grid time
/// at or after opening, and end strictly before closing: a 18:00 to 21:00
/// evening yields 18:00 through 20:30. Closed or malformed days yield an
/// empty list. The grace window plays no part here, these are times the
/// kitchen is actually open.
pub fn bookable_slots(restaurant: &Restaurant, date: NaiveDate) -> Vec<String> {
    let day = restaurant.hours.for_weekday(date.weekday());
    let Some((opening, closing)) = open_interval(day) else {
        return Vec::new();
    };
    let mut slots = Vec::new();
    let mut t = (opening + SLOT_INTERVAL - 1) / SLOT_INTERVAL * SLOT_INTERVAL;
    while t < closing {
        slots.push(format_minutes(t));
        t += SLOT_INTERVAL;
    }
    slots
}

/// Quick alternatives around a requested time, restaurant-agnostic.
///
/// Offsets of -30 to +30 minutes in 15-minute steps, keeping only times
/// inside the 11:00 to 22:00 service window (inclusive start, exclusive
/// end). Results are advisory: they carry no opening-hours knowledge and
/// are not guaranteed bookable. An unparseable time yields an empty list.
pub fn nearby_slots(requested_time: &str) -> Vec<String> {
    let Some(base) = to_minutes(requested_time.trim()) else {
        return Vec::new();
    };
    QUICK_OFFSETS
        .iter()
        .map(|offset| base + offset)
        .filter(|t| (QUICK_WINDOW_START..QUICK_WINDOW_END).contains(t))
        .map(format_minutes)
        .collect()
}
