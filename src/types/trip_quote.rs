use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{CityName, RequestDigest};

/// Exact money amount used for daily prices, budgets and trip costs.
pub type Amount = Decimal;

/// A trip cost request.
/// Field names follow the public request shape:
/// - `numberofDaysPerCity`: days spent in every city, defaults to 0
/// - `guestBudget`: upper bound on the total, defaults to 0
/// - `hotels`: city name to daily prices, defaults to empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    #[serde(rename = "numberofDaysPerCity", default)]
    pub days_per_city: i64,

    #[serde(rename = "guestBudget", default)]
    pub budget: Amount,

    #[serde(default)]
    pub hotels: BTreeMap<CityName, Vec<Amount>>,
}

impl TripRequest {
    pub fn new(days_per_city: i64, budget: Amount) -> Self {
        Self {
            days_per_city,
            budget,
            hotels: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) one city's daily prices.
    pub fn with_hotel(mut self, city: impl Into<String>, daily_prices: Vec<Amount>) -> Self {
        self.hotels.insert(CityName::new(city), daily_prices);
        self
    }

    /// Paris, London and Berlin over six days, two days per city, budget 309.
    pub fn example() -> Self {
        Self::new(2, Amount::from(309))
            .with_hotel("Paris", amounts(&[10, 40, 5, 80, 10, 50]))
            .with_hotel("London", amounts(&[60, 30, 30, 70, 50, 70]))
            .with_hotel("Berlin", amounts(&[20, 80, 20, 50, 80, 100]))
    }

    /// Digest over `days|budget` followed by one `\n<len>:<city>:p1,p2,..`
    /// record per city in key order, `<len>` being the city name's byte length.
    /// Amounts are normalized so `10` and `10.0` hash alike.
    pub fn digest(&self) -> RequestDigest {
        let mut canonical = format!("{}|{}", self.days_per_city, self.budget.normalize());

        for (city, prices) in &self.hotels {
            // Length prefix keeps names containing ':' or '\n' unambiguous.
            let name = city.as_str();
            let prices: Vec<String> = prices.iter().map(|p| p.normalize().to_string()).collect();
            canonical.push_str(&format!("\n{}:{}:{}", name.len(), name, prices.join(",")));
        }

        RequestDigest::from_content(canonical.as_bytes())
    }
}

fn amounts(values: &[i64]) -> Vec<Amount> {
    values.iter().copied().map(Amount::from).collect()
}

/// Metadata describing how a quote was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteMetadata {
    pub request_digest: RequestDigest,
    pub days_per_city: i64,
    pub budget: Amount,

    pub cities_considered: usize,

    pub combinations_considered: usize,
    pub combinations_within_budget: usize,
    pub combinations_excluded_by_budget: usize,
}

/// Every trip cost within budget, ascending, plus how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripQuote {
    pub costs: Vec<Amount>,
    pub summary: QuoteMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TripCostError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
