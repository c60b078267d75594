mod budget;
mod dish;
mod metric;

pub(crate) use budget::{mock_plans, next_id, BudgetPlan};
pub(crate) use dish::{Dish, DishComment};
pub(crate) use metric::PriceMetric;
