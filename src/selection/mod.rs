pub mod budgeting;
pub mod combinations;
pub mod window;

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::types::trip_quote::{QuoteMetadata, TripCostError, TripQuote, TripRequest};
pub use budgeting::{apply_budget, BudgetResult};
pub use combinations::{checked_total_range, combination_count, TripCombinations};
pub use window::{window_sums, ConsecutiveDays, DaySelection, Price};

#[derive(Debug, Clone)]
pub struct TripCostCalculator<S> {
	strategy: S,
}

impl Default for TripCostCalculator<ConsecutiveDays> {
	fn default() -> Self {
		Self {
			strategy: ConsecutiveDays,
		}
	}
}

impl<S> TripCostCalculator<S>
where
	S: DaySelection,
{
	pub fn new(strategy: S) -> Self {
		Self { strategy }
	}

	/// Every trip cost within `budget`, ascending, one stay per city.
	///
	/// # Errors
	///
	/// [`TripCostError::InvalidInput`] when `days_per_city` is not positive,
	/// `budget` is negative, or a stay or trip total leaves the range of `T`.
	/// An empty `hotels`, a city too short for the stay or a budget nothing
	/// fits into all yield `Ok` with no costs.
	pub fn calculate_trip_costs<T, I, K, V>(
		&self,
		days_per_city: i64,
		budget: T,
		hotels: I,
	) -> Result<Vec<T>, TripCostError>
	where
		T: Price,
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<[T]>,
	{
		Ok(self.evaluate(days_per_city, budget, hotels)?.costs)
	}

	/// Like [`Self::calculate_trip_costs`], with a summary of the search.
	pub fn quote(&self, request: &TripRequest) -> Result<TripQuote, TripCostError> {
		let BudgetResult {
			costs,
			combinations_considered,
			combinations_within_budget,
			combinations_excluded_by_budget,
		} = self.evaluate(request.days_per_city, request.budget, &request.hotels)?;

		let summary = QuoteMetadata {
			request_digest: request.digest(),
			days_per_city: request.days_per_city,
			budget: request.budget,
			cities_considered: request.hotels.len(),
			combinations_considered,
			combinations_within_budget,
			combinations_excluded_by_budget,
		};

		Ok(TripQuote { costs, summary })
	}

	fn evaluate<T, I, K, V>(
		&self,
		days_per_city: i64,
		budget: T,
		hotels: I,
	) -> Result<BudgetResult<T>, TripCostError>
	where
		T: Price,
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: AsRef<[T]>,
	{
		// 0. Validation, before any work
		if days_per_city <= 0 {
			return Err(TripCostError::InvalidInput(format!(
				"days per city must be > 0, got {days_per_city}"
			)));
		}
		if budget < T::zero() {
			return Err(TripCostError::InvalidInput(
				"guest budget cannot be negative".to_string(),
			));
		}

		// A stay length that does not fit in usize cannot fit in any series either.
		let Ok(days) = usize::try_from(days_per_city) else {
			return Ok(BudgetResult::empty());
		};

		debug!(days_per_city, "calculating trip costs");

		// 1. Stay costs per city
		let mut legs: Vec<Vec<T>> = Vec::new();
		for (city, daily_prices) in hotels {
			let stay_costs = self.strategy.stay_costs(daily_prices.as_ref(), days)?;
			if stay_costs.is_empty() {
				// Every city must be visited, so one impossible leg rules out every trip.
				debug!(
					city = city.as_ref(),
					days_available = daily_prices.as_ref().len(),
					days_per_city,
					"city cannot host the stay; no trip possible"
				);
				return Ok(BudgetResult::empty());
			}
			trace!(city = city.as_ref(), windows = stay_costs.len(), "city stay costs");
			legs.push(stay_costs);
		}

		if legs.is_empty() {
			debug!("no hotels in request; no trip possible");
			return Ok(BudgetResult::empty());
		}

		// 2. Budgeting over every itinerary
		let mut result = apply_budget(TripCombinations::new(&legs)?, budget);

		// 3. Ordering Phase
		result
			.costs
			.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

		debug_assert!(result.costs.windows(2).all(|w| w[0] <= w[1]));
		debug_assert_eq!(Some(result.combinations_considered), combination_count(&legs));

		debug!(
			cities = legs.len(),
			considered = result.combinations_considered,
			within_budget = result.combinations_within_budget,
			"trip costs calculated"
		);

		Ok(result)
	}
}
