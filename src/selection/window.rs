use num_traits::{CheckedAdd, CheckedSub, Zero};

use crate::types::trip_quote::TripCostError;

/// Numeric type usable as a daily price, a stay cost or a trip total.
pub trait Price: Copy + PartialOrd + Zero + CheckedAdd + CheckedSub {}

impl<T> Price for T where T: Copy + PartialOrd + Zero + CheckedAdd + CheckedSub {}

pub(crate) fn price_overflow() -> TripCostError {
    TripCostError::InvalidInput("price total overflows".to_string())
}

/// Decides which stay costs a single city can contribute to a trip.
pub trait DaySelection {
    fn stay_costs<T: Price>(&self, daily_prices: &[T], days: usize) -> Result<Vec<T>, TripCostError>;
}

/// v0: every run of `days` consecutive days is a candidate stay.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsecutiveDays;

impl DaySelection for ConsecutiveDays {
    fn stay_costs<T: Price>(&self, daily_prices: &[T], days: usize) -> Result<Vec<T>, TripCostError> {
        window_sums(daily_prices, days)
    }
}

/// Sums of every window of exactly `days` consecutive prices, ordered by
/// start index. Empty when `days` is 0 or longer than the series.
///
/// prefix[i] = sum(daily_prices[..i]), so window s is prefix[s + days] - prefix[s].
///
/// # Errors
///
/// [`TripCostError::InvalidInput`] when a running total leaves the range of `T`.
pub fn window_sums<T: Price>(daily_prices: &[T], days: usize) -> Result<Vec<T>, TripCostError> {
    if days < 1 || days > daily_prices.len() {
        return Ok(Vec::new());
    }

    let mut prefix = Vec::with_capacity(daily_prices.len() + 1);
    let mut running = T::zero();
    prefix.push(running);
    for price in daily_prices {
        running = running.checked_add(price).ok_or_else(price_overflow)?;
        prefix.push(running);
    }

    let sums = prefix
        .iter()
        .zip(prefix.iter().skip(days))
        .map(|(start, end)| end.checked_sub(start).ok_or_else(price_overflow))
        .collect::<Result<Vec<T>, TripCostError>>()?;

    debug_assert_eq!(sums.len(), daily_prices.len() - days + 1);
    Ok(sums)
}
