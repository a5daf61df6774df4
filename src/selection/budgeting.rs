use super::window::Price;

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetResult<T> {
    pub costs: Vec<T>,
    pub combinations_considered: usize,
    pub combinations_within_budget: usize,
    pub combinations_excluded_by_budget: usize,
}

impl<T> BudgetResult<T> {
    /// Outcome of a request that cannot produce any itinerary.
    pub fn empty() -> Self {
        Self {
            costs: Vec::new(),
            combinations_considered: 0,
            combinations_within_budget: 0,
            combinations_excluded_by_budget: 0,
        }
    }
}

/// Keeps every total that does not exceed `budget`, in arrival order.
pub fn apply_budget<T, I>(totals: I, budget: T) -> BudgetResult<T>
where
    T: Price,
    I: IntoIterator<Item = T>,
{
    let mut costs = Vec::new();
    let mut combinations_considered = 0;
    let mut combinations_within_budget = 0;
    let mut combinations_excluded_by_budget = 0;

    for total in totals {
        combinations_considered += 1;
        // A total equal to the budget is affordable.
        if total <= budget {
            costs.push(total);
            combinations_within_budget += 1;
        } else {
            combinations_excluded_by_budget += 1;
        }
    }

    BudgetResult {
        costs,
        combinations_considered,
        combinations_within_budget,
        combinations_excluded_by_budget,
    }
}
