use serde::{Deserialize, Serialize};

/// A campaign budget plan as served by the remote budget resource.
///
/// All amounts are plain wire numbers. Nothing constrains them; a plan
/// overspent into the negative is displayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BudgetPlan {
    pub(crate) id: i64,
    pub(crate) budget: f64,
    pub(crate) cpc: f64,
    pub(crate) cpm: f64,
    pub(crate) spent: f64,
}

impl BudgetPlan {
    pub(crate) fn new(id: i64, budget: f64, cpc: f64, cpm: f64, spent: f64) -> Self {
        Self {
            id,
            budget,
            cpc,
            cpm,
            spent,
        }
    }

    /// Spend still available on this plan. May be negative.
    pub(crate) fn remaining(&self) -> f64 {
        self.budget - self.spent
    }
}

/// Id for a locally created plan: one past the highest id in `plans`, or 1
/// when the list is empty. The list is insertion-ordered, not sorted, so the
/// maximum is what matters, not the last element.
pub(crate) fn next_id(plans: &[BudgetPlan]) -> i64 {
    plans.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

/// The fixed dataset shown when the initial fetch fails, so the screen stays
/// usable without a reachable server.
pub(crate) fn mock_plans() -> Vec<BudgetPlan> {
    vec![
        BudgetPlan::new(123, 10_000.0, 40.0, 5_000.0, 5_000.0),
        BudgetPlan::new(456, 200.0, 80.0, 30_000.0, 30_000.0),
    ]
}
