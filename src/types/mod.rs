pub mod identifiers;
pub mod trip_quote;

pub use identifiers::{CityName, RequestDigest};
pub use trip_quote::{Amount, QuoteMetadata, TripCostError, TripQuote, TripRequest};
