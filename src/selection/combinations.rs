use std::iter::FusedIterator;

use super::window::{price_overflow, Price};
use crate::types::trip_quote::TripCostError;

/// Number of complete itineraries across `legs`, one entry per city.
/// `None` when the product does not fit in `usize`.
pub fn combination_count<T>(legs: &[Vec<T>]) -> Option<usize> {
    if legs.is_empty() {
        return Some(0);
    }
    legs.iter().try_fold(1usize, |acc, leg| acc.checked_mul(leg.len()))
}

/// Smallest and largest trip total across `legs`.
///
/// Every partial total (the first k cities) lies between the running sums of
/// per-city minima and maxima, so checking those two sums covers all of them.
/// `None` when either leaves the range of `T`.
pub fn checked_total_range<T: Price>(legs: &[Vec<T>]) -> Option<(T, T)> {
    let mut low = T::zero();
    let mut high = T::zero();

    for leg in legs {
        let mut costs = leg.iter();
        let Some(&first) = costs.next() else {
            continue;
        };
        let (min, max) = costs.fold((first, first), |(min, max), &cost| {
            (if cost < min { cost } else { min }, if cost > max { cost } else { max })
        });
        low = low.checked_add(&min)?;
        high = high.checked_add(&max)?;
    }

    Some((low, high))
}

/// Lazily walks the cartesian product of per-city stay costs and yields the
/// total of each itinerary.
///
/// Order matches a nested loop with the last city innermost. Yields nothing
/// when there are no legs or any leg is empty.
#[derive(Debug, Clone)]
pub struct TripCombinations<'a, T> {
    legs: &'a [Vec<T>],
    cursor: Vec<usize>,
    remaining: Option<usize>,
    exhausted: bool,
}

impl<'a, T: Price> TripCombinations<'a, T> {
    /// # Errors
    ///
    /// [`TripCostError::InvalidInput`] when some itinerary total would leave
    /// the range of `T`.
    pub fn new(legs: &'a [Vec<T>]) -> Result<Self, TripCostError> {
        checked_total_range(legs).ok_or_else(price_overflow)?;

        let exhausted = legs.is_empty() || legs.iter().any(Vec::is_empty);
        Ok(Self {
            legs,
            cursor: vec![0; legs.len()],
            remaining: combination_count(legs),
            exhausted,
        })
    }

    // Cannot overflow: `new` checked the bounds of every partial total.
    fn current_total(&self) -> T {
        self.legs
            .iter()
            .zip(&self.cursor)
            .fold(T::zero(), |acc, (leg, &idx)| acc + leg[idx])
    }

    // Odometer step; returns false once every position has wrapped.
    fn advance(&mut self) -> bool {
        for (pos, leg) in self.cursor.iter_mut().zip(self.legs).rev() {
            *pos += 1;
            if *pos < leg.len() {
                return true;
            }
            *pos = 0;
        }
        false
    }
}

impl<T: Price> Iterator for TripCombinations<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }

        let total = self.current_total();
        if !self.advance() {
            self.exhausted = true;
        }
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        Some(total)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        match self.remaining {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl<T: Price> FusedIterator for TripCombinations<'_, T> {}
