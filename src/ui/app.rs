use crate::api::{ApiEvent, Worker};
use crate::models::{mock_plans, next_id, BudgetPlan, Dish, DishComment, PriceMetric};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Budgets,
    Menu,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Budgets, Self::Menu]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Budgets => write!(f, "Budgets"),
            Self::Menu => write!(f, "Menu"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "FILTER"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// How the list on a screen was populated.
///
/// `FallbackPopulated` means the query failed and the error path took over:
/// the budgets screen shows the fixed mock dataset, the menu shows nothing
/// but the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadState {
    Loading,
    Populated,
    FallbackPopulated,
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteBudget { id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuStep {
    List,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SortKey {
    Id,
    Budget,
    Cpc,
    Cpm,
    Spent,
}

impl SortKey {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Budget => "budget",
            Self::Cpc => "cpc",
            Self::Cpm => "cpm",
            Self::Spent => "spent",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<SortKey> {
        match s.to_lowercase().as_str() {
            "id" => Some(Self::Id),
            "budget" => Some(Self::Budget),
            "cpc" => Some(Self::Cpc),
            "cpm" => Some(Self::Cpm),
            "spent" => Some(Self::Spent),
            _ => None,
        }
    }

    pub(crate) fn next(&self) -> SortKey {
        match self {
            Self::Id => Self::Budget,
            Self::Budget => Self::Cpc,
            Self::Cpc => Self::Cpm,
            Self::Cpm => Self::Spent,
            Self::Spent => Self::Id,
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Budgets
    pub(crate) budgets: Vec<BudgetPlan>,
    pub(crate) budget_state: LoadState,
    pub(crate) budget_index: usize,
    pub(crate) budget_scroll: usize,
    pub(crate) budget_generation: u64,
    pub(crate) sort_key: SortKey,
    pub(crate) sort_reverse: bool,
    pub(crate) metric: PriceMetric,

    // Menu
    pub(crate) dishes: Vec<Dish>,
    pub(crate) dish_state: LoadState,
    pub(crate) dish_index: usize,
    pub(crate) dish_scroll: usize,
    pub(crate) dish_generation: u64,
    pub(crate) menu_step: MenuStep,
    pub(crate) dish_detail: Option<Dish>,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Budgets,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,

            budgets: Vec::new(),
            budget_state: LoadState::Loading,
            budget_index: 0,
            budget_scroll: 0,
            budget_generation: 0,
            sort_key: SortKey::Id,
            sort_reverse: false,
            metric: PriceMetric::Cpm,

            dishes: Vec::new(),
            dish_state: LoadState::Loading,
            dish_index: 0,
            dish_scroll: 0,
            dish_generation: 0,
            menu_step: MenuStep::List,
            dish_detail: None,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    // ── Routing ──────────────────────────────────────────────

    /// Route a URL-style path to its screen and activate it.
    pub(crate) fn open_path(&mut self, worker: &Worker, path: &str) {
        self.activate(worker, crate::router::resolve(path));
    }

    /// Switch to a screen and kick off its query.
    pub(crate) fn activate(&mut self, worker: &Worker, screen: Screen) {
        self.screen = screen;
        match screen {
            Screen::Budgets => self.refresh_budgets(worker),
            Screen::Menu => {
                self.menu_step = MenuStep::List;
                self.dish_detail = None;
                self.refresh_dishes(worker);
            }
        }
    }

    // ── Budget list controller ───────────────────────────────

    pub(crate) fn refresh_budgets(&mut self, worker: &Worker) {
        self.budget_state = LoadState::Loading;
        self.set_status("Loading ... attempting REST query on the budget resource");
        self.budget_generation += 1;
        worker.query_budgets(self.budget_generation);
    }

    /// Create a plan with the next free id, append it locally and tell the
    /// server about it afterwards. The remote result is never reconciled.
    pub(crate) fn add_budget(
        &mut self,
        worker: &Worker,
        budget: f64,
        cpc: f64,
        cpm: f64,
        spent: f64,
    ) {
        let id = next_id(&self.budgets);
        let plan = BudgetPlan::new(id, budget, cpc, cpm, spent);
        self.budgets.push(plan.clone());
        self.budget_index = self.visible_budgets().len().saturating_sub(1);
        worker.fire_and_forget("budget create", move |remote| remote.create_budget(&plan));
        self.set_status(format!("Added budget plan {id}"));
    }

    /// Ask for confirmation before deleting the selected plan.
    pub(crate) fn request_delete_selected(&mut self) {
        if let Some(plan) = self.selected_budget() {
            let id = plan.id;
            self.confirm_message = format!("Delete budget plan {id}?");
            self.pending_action = Some(PendingAction::DeleteBudget { id });
            self.input_mode = InputMode::Confirm;
        } else {
            self.set_status("No budget plan selected");
        }
    }

    pub(crate) fn confirm_pending(&mut self, worker: &Worker) {
        if let Some(action) = self.pending_action.take() {
            match action {
                PendingAction::DeleteBudget { id } => self.delete_budget(worker, id),
            }
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
    }

    pub(crate) fn decline_pending(&mut self) {
        if let Some(PendingAction::DeleteBudget { id }) = self.pending_action.take() {
            tracing::info!("delete of budget plan {id} declined, list untouched");
        }
        self.input_mode = InputMode::Normal;
        self.confirm_message.clear();
        self.set_status("Cancelled");
    }

    /// Remove a plan by id and issue the remote delete. An id that is no
    /// longer present leaves the list untouched.
    pub(crate) fn delete_budget(&mut self, worker: &Worker, id: i64) {
        let Some(position) = self.budgets.iter().position(|p| p.id == id) else {
            self.set_status(format!("Budget plan {id} is no longer in the list"));
            return;
        };
        self.budgets.remove(position);
        self.clamp_budget_selection();
        worker.fire_and_forget("budget delete", move |remote| remote.delete_budget(id));
        self.set_status(format!("Deleted budget plan {id}"));
    }

    /// Push the entire local list to the bulk update endpoint.
    pub(crate) fn update_all(&mut self, worker: &Worker) {
        let plans = self.budgets.clone();
        let count = plans.len();
        worker.fire_and_forget("bulk budget update", move |remote| {
            remote.update_budgets(&plans)
        });
        self.set_status(format!("Submitted all {count} budget plans"));
    }

    /// Submit the selected plan. The server record is re-read first and the
    /// result only logged, then the update goes out with the local state.
    pub(crate) fn submit_selected(&mut self, worker: &Worker) {
        let Some(plan) = self.selected_budget().cloned() else {
            self.set_status("No budget plan selected");
            return;
        };
        let id = plan.id;
        worker.fire_and_forget("budget re-read before update", move |remote| {
            remote.get_budget(id).map(|_| ())
        });
        worker.fire_and_forget("budget update", move |remote| remote.update_budget(&plan));
        self.set_status(format!("Submitted budget plan {id}"));
    }

    /// Nudge the selected plan's budget amount locally. Takes effect on the
    /// server only once the plan is submitted.
    pub(crate) fn adjust_selected(&mut self, delta: f64) {
        if let Some(actual) = self.selected_actual_index() {
            if let Some(plan) = self.budgets.get_mut(actual) {
                plan.budget += delta;
                let (id, budget) = (plan.id, plan.budget);
                self.set_status(format!("Budget plan {id}: budget now {budget:.2}"));
            }
        }
    }

    /// Overwrite the selected plan's budget amount locally (edit mode).
    pub(crate) fn set_selected_budget_amount(&mut self, amount: f64) {
        if let Some(actual) = self.selected_actual_index() {
            if let Some(plan) = self.budgets.get_mut(actual) {
                plan.budget = amount;
                let id = plan.id;
                self.set_status(format!("Budget plan {id}: budget set to {amount:.2}"));
            }
        }
    }

    // ── Menu controller ──────────────────────────────────────

    pub(crate) fn refresh_dishes(&mut self, worker: &Worker) {
        self.dish_state = LoadState::Loading;
        self.set_status("Loading ... attempting REST query on the dishes resource");
        self.dish_generation += 1;
        worker.query_dishes(self.dish_generation);
    }

    /// Open the detail step for the selected dish, re-fetching it by id.
    pub(crate) fn open_dish_detail(&mut self, worker: &Worker) {
        let Some(dish) = self.dishes.get(self.dish_index) else {
            self.set_status("No dish selected");
            return;
        };
        let id = dish.id;
        self.menu_step = MenuStep::Detail;
        self.dish_detail = None;
        self.set_status("Loading ... attempting REST GET for dish detail");
        self.dish_generation += 1;
        worker.query_dish(self.dish_generation, id);
    }

    pub(crate) fn close_dish_detail(&mut self) {
        self.menu_step = MenuStep::List;
        self.dish_detail = None;
    }

    /// Stamp and append a comment to the open dish, then push the whole dish
    /// to the server best-effort.
    pub(crate) fn submit_comment(
        &mut self,
        worker: &Worker,
        rating: u8,
        author: &str,
        comment: &str,
    ) {
        let Some(dish) = self.dish_detail.as_mut() else {
            self.set_status("Open a dish first (:open /menu, then Enter)");
            return;
        };
        dish.comments.push(DishComment::new(rating, author, comment));
        let updated = dish.clone();
        let name = updated.name.clone();
        worker.fire_and_forget("dish update", move |remote| remote.update_dish(&updated));
        self.set_status(format!("Comment added to {name}"));
    }

    // ── Worker responses ─────────────────────────────────────

    /// Commit a worker response. Responses carry the generation that issued
    /// them; anything stale is dropped so a torn-down view never resurfaces.
    pub(crate) fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Budgets { generation, result } => {
                if generation != self.budget_generation {
                    tracing::debug!("dropping stale budget list response ({generation})");
                    return;
                }
                match result {
                    Ok(plans) => {
                        self.budgets = plans;
                        self.budget_state = LoadState::Populated;
                        self.clamp_budget_selection();
                        let count = self.budgets.len();
                        self.set_status(format!("Loaded {count} budget plans"));
                    }
                    Err(err) => {
                        self.budget_state = LoadState::FallbackPopulated;
                        self.budgets = mock_plans();
                        self.clamp_budget_selection();
                        self.set_status(format!(
                            "Error: {err} Could not GET the budget resource from the server, \
                             here is a mock campaign budgets list to test around with"
                        ));
                    }
                }
            }
            ApiEvent::Dishes { generation, result } => {
                if generation != self.dish_generation {
                    tracing::debug!("dropping stale dish list response ({generation})");
                    return;
                }
                match result {
                    Ok(dishes) => {
                        self.dishes = dishes;
                        self.dish_state = LoadState::Populated;
                        if self.dish_index >= self.dishes.len() {
                            self.dish_index = self.dishes.len().saturating_sub(1);
                        }
                        let count = self.dishes.len();
                        self.set_status(format!("Loaded {count} dishes"));
                    }
                    Err(err) => {
                        self.dish_state = LoadState::FallbackPopulated;
                        self.dishes.clear();
                        self.set_status(format!(
                            "Error: {err} The menu data could not be pulled from the server"
                        ));
                    }
                }
            }
            ApiEvent::DishDetail { generation, result } => {
                if generation != self.dish_generation {
                    tracing::debug!("dropping stale dish detail response ({generation})");
                    return;
                }
                match result {
                    Ok(dish) => {
                        let name = dish.name.clone();
                        self.dish_detail = Some(dish);
                        self.set_status(name);
                    }
                    Err(err) => {
                        self.set_status(format!(
                            "Error: {err} The dish detail could not be pulled from the server"
                        ));
                    }
                }
            }
        }
    }

    // ── Selection helpers ────────────────────────────────────

    /// Indices into `budgets` in display order: filtered by the live search
    /// text, then sorted by the current key.
    pub(crate) fn visible_budgets(&self) -> Vec<usize> {
        let filter = self.search_input.to_lowercase();
        let mut indices: Vec<usize> = self
            .budgets
            .iter()
            .enumerate()
            .filter(|(_, plan)| {
                if filter.is_empty() {
                    return true;
                }
                let haystack = format!(
                    "{} {} {} {} {}",
                    plan.id, plan.budget, plan.cpc, plan.cpm, plan.spent
                );
                haystack.to_lowercase().contains(&filter)
            })
            .map(|(i, _)| i)
            .collect();

        indices.sort_by(|&a, &b| {
            let (left, right) = (&self.budgets[a], &self.budgets[b]);
            let ordering = match self.sort_key {
                SortKey::Id => left.id.cmp(&right.id),
                SortKey::Budget => left.budget.total_cmp(&right.budget),
                SortKey::Cpc => left.cpc.total_cmp(&right.cpc),
                SortKey::Cpm => left.cpm.total_cmp(&right.cpm),
                SortKey::Spent => left.spent.total_cmp(&right.spent),
            };
            if self.sort_reverse {
                ordering.reverse()
            } else {
                ordering
            }
        });
        indices
    }

    pub(crate) fn selected_actual_index(&self) -> Option<usize> {
        self.visible_budgets().get(self.budget_index).copied()
    }

    pub(crate) fn selected_budget(&self) -> Option<&BudgetPlan> {
        self.selected_actual_index().map(|i| &self.budgets[i])
    }

    fn clamp_budget_selection(&mut self) {
        let len = self.visible_budgets().len();
        if self.budget_index >= len {
            self.budget_index = len.saturating_sub(1);
        }
        if self.budget_scroll > self.budget_index {
            self.budget_scroll = self.budget_index;
        }
    }
}
