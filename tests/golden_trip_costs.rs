use rust_decimal::Decimal;
use trip_budget::selection::TripCostCalculator;
use trip_budget::trip_cost;
use trip_budget::types::TripRequest;

// Paris/London/Berlin, two days per city, budget 309.
// Stay costs: Paris [50, 45, 85, 90, 60], London [90, 60, 100, 120, 120],
// Berlin [100, 100, 70, 130, 180]; 125 itineraries, 90 within budget.
const EXAMPLE_COSTS: [i64; 90] = [
    175, 180, 190, 205, 205, 205, 210, 210, 210, 215,
    215, 220, 220, 220, 220, 220, 230, 235, 235, 235,
    235, 235, 240, 240, 240, 240, 240, 245, 245, 245,
    245, 245, 250, 250, 250, 250, 250, 250, 250, 250,
    250, 250, 255, 260, 260, 260, 265, 265, 265, 265,
    265, 270, 270, 270, 270, 270, 275, 275, 275, 275,
    275, 275, 280, 280, 280, 280, 280, 280, 280, 280,
    280, 280, 280, 285, 285, 285, 290, 290, 290, 290,
    295, 295, 300, 300, 300, 305, 305, 305, 305, 305,
];

#[test]
fn golden_example_costs() {
    let result = trip_cost(&TripRequest::example()).unwrap();

    let expected: Vec<Decimal> = EXAMPLE_COSTS.iter().copied().map(Decimal::from).collect();
    assert_eq!(result, expected, "example costs drifted from golden list");
}

#[test]
fn golden_example_quote_summary() {
    let quote = TripCostCalculator::default()
        .quote(&TripRequest::example())
        .unwrap();

    assert_eq!(quote.summary.days_per_city, 2);
    assert_eq!(quote.summary.budget, Decimal::from(309));
    assert_eq!(quote.summary.cities_considered, 3);
    assert_eq!(quote.summary.combinations_considered, 125);
    assert_eq!(quote.summary.combinations_within_budget, 90);
    assert_eq!(quote.summary.combinations_excluded_by_budget, 35);
    assert_eq!(
        quote.summary.request_digest.as_str(),
        "sha256:d13e6c3afc00e7b0f5ddbbb1332333082724cf34b659eda3ad57edf1be7e1545"
    );
    assert_eq!(quote.costs.len(), quote.summary.combinations_within_budget);
}

#[test]
fn golden_quote_costs_equal_entry_point_costs() {
    let mut request = TripRequest::example();

    for budget in [0, 174, 175, 220, 309, 1_000] {
        request.budget = Decimal::from(budget);
        let quote = TripCostCalculator::default().quote(&request).unwrap();

        assert_eq!(quote.costs, trip_cost(&request).unwrap(), "budget {budget}");
    }
}

#[test]
fn golden_short_city_quote_considers_nothing() {
    let request = TripRequest::example().with_hotel("Madrid", vec![Decimal::from(45)]);

    let quote = TripCostCalculator::default().quote(&request).unwrap();

    assert!(quote.costs.is_empty());
    assert_eq!(quote.summary.cities_considered, 4);
    assert_eq!(quote.summary.combinations_considered, 0);
    assert_eq!(quote.summary.combinations_excluded_by_budget, 0);
}

#[test]
fn golden_invalid_request_produces_no_quote() {
    let mut request = TripRequest::example();
    request.budget = Decimal::from(-1);

    assert!(TripCostCalculator::default().quote(&request).is_err());
}
