//! Deterministic multi-city trip cost enumeration.
//!
//! `trip-budget` takes a fixed stay length, a guest budget and the daily hotel
//! prices of every city on an itinerary, and lists every total trip cost that
//! fits the budget. Each city contributes the price of one run of consecutive
//! days; every city is visited. All operations are pure: identical inputs
//! always produce identical, ascending outputs.

pub mod selection;
pub mod types;

use crate::selection::TripCostCalculator;
use crate::types::{Amount, TripCostError, TripRequest};

/// Sorted trip costs for `request` using consecutive-day stays.
///
/// # Errors
///
/// [`TripCostError::InvalidInput`] when the stay length is not positive or the
/// budget is negative.
pub fn trip_cost(request: &TripRequest) -> Result<Vec<Amount>, TripCostError> {
    TripCostCalculator::default().calculate_trip_costs(
        request.days_per_city,
        request.budget,
        &request.hotels,
    )
}
