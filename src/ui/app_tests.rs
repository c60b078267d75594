#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::api::{ApiError, ApiEvent, Remote, Worker};
use crate::models::{mock_plans, BudgetPlan, Dish};
use crate::ui::app::{App, InputMode, LoadState, PendingAction, SortKey};

// ── Recording fake remote ─────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Call {
    CreateBudget(BudgetPlan),
    UpdateBudget(i64),
    UpdateAll(usize),
    DeleteBudget(i64),
    GetBudget(i64),
    UpdateDish(i64),
}

struct MockRemote {
    calls: Mutex<Vec<Call>>,
    budgets: Result<Vec<BudgetPlan>, ApiError>,
    dishes: Result<Vec<Dish>, ApiError>,
}

impl MockRemote {
    fn ok(budgets: Vec<BudgetPlan>) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            budgets: Ok(budgets),
            dishes: Ok(Vec::new()),
        })
    }

    fn failing(status: u16, status_text: &str) -> Arc<Self> {
        let err = ApiError::Status {
            status,
            status_text: status_text.into(),
        };
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            budgets: Err(err.clone()),
            dishes: Err(err),
        })
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn recorded(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Fire-and-forget calls land on worker threads; poll until `n` arrived
    /// or give up after two seconds and return whatever there is.
    fn wait_for_calls(&self, n: usize) -> Vec<Call> {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            let calls = self.recorded();
            if calls.len() >= n || Instant::now() > deadline {
                return calls;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }
}

impl Remote for MockRemote {
    fn list_budgets(&self) -> Result<Vec<BudgetPlan>, ApiError> {
        self.budgets.clone()
    }

    fn get_budget(&self, id: i64) -> Result<BudgetPlan, ApiError> {
        self.record(Call::GetBudget(id));
        Ok(BudgetPlan::new(id, 0.0, 0.0, 0.0, 0.0))
    }

    fn create_budget(&self, plan: &BudgetPlan) -> Result<(), ApiError> {
        self.record(Call::CreateBudget(plan.clone()));
        Ok(())
    }

    fn update_budget(&self, plan: &BudgetPlan) -> Result<(), ApiError> {
        self.record(Call::UpdateBudget(plan.id));
        Ok(())
    }

    fn update_budgets(&self, plans: &[BudgetPlan]) -> Result<(), ApiError> {
        self.record(Call::UpdateAll(plans.len()));
        Ok(())
    }

    fn delete_budget(&self, id: i64) -> Result<(), ApiError> {
        self.record(Call::DeleteBudget(id));
        Ok(())
    }

    fn list_dishes(&self) -> Result<Vec<Dish>, ApiError> {
        self.dishes.clone()
    }

    fn get_dish(&self, id: i64) -> Result<Dish, ApiError> {
        Ok(Dish {
            id,
            name: "Uthappizza".into(),
            comments: Vec::new(),
        })
    }

    fn update_dish(&self, dish: &Dish) -> Result<(), ApiError> {
        self.record(Call::UpdateDish(dish.id));
        Ok(())
    }
}

fn app_with_plans(ids: &[i64]) -> App {
    let mut app = App::new();
    app.budgets = ids
        .iter()
        .map(|&id| BudgetPlan::new(id, 100.0, 1.0, 1.0, 0.0))
        .collect();
    app.budget_state = LoadState::Populated;
    app
}

// ── add ───────────────────────────────────────────────────────

#[test]
fn test_add_assigns_max_plus_one() {
    let remote = MockRemote::ok(Vec::new());
    let (worker, _events) = Worker::new(remote.clone());
    let mut app = app_with_plans(&[123, 456]);

    app.add_budget(&worker, 50.0, 1.0, 1.0, 0.0);

    assert_eq!(app.budgets.len(), 3);
    assert_eq!(app.budgets.last().unwrap().id, 457);

    let calls = remote.wait_for_calls(1);
    let expected = BudgetPlan::new(457, 50.0, 1.0, 1.0, 0.0);
    assert_eq!(calls, vec![Call::CreateBudget(expected)]);
}

#[test]
fn test_add_to_empty_list_uses_one() {
    let remote = MockRemote::ok(Vec::new());
    let (worker, _events) = Worker::new(remote.clone());
    let mut app = App::new();

    app.add_budget(&worker, 10.0, 2.0, 3.0, 4.0);

    assert_eq!(app.budgets.len(), 1);
    assert_eq!(app.budgets[0].id, 1);
}

#[test]
fn test_add_uses_max_even_when_unordered() {
    let remote = MockRemote::ok(Vec::new());
    let (worker, _events) = Worker::new(remote.clone());
    let mut app = app_with_plans(&[456, 123]);

    app.add_budget(&worker, 50.0, 1.0, 1.0, 0.0);

    assert_eq!(app.budgets.last().unwrap().id, 457);
}

// ── delete ────────────────────────────────────────────────────

#[test]
fn test_confirmed_delete_removes_record_and_calls_server() {
    let remote = MockRemote::ok(Vec::new());
    let (worker, _events) = Worker::new(remote.clone());
    let mut app = app_with_plans(&[123, 456]);
    app.budget_index = 1; // id 456 under the default id sort

    app.request_delete_selected();
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert!(app.confirm_message.contains("456"));
    assert!(matches!(
        app.pending_action,
        Some(PendingAction::DeleteBudget { id: 456 })
    ));

    app.confirm_pending(&worker);

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.budgets.len(), 1);
    assert!(app.budgets.iter().all(|p| p.id != 456));

    let calls = remote.wait_for_calls(1);
    assert_eq!(calls, vec![Call::DeleteBudget(456)]);
}

#[test]
fn test_declined_delete_leaves_list_untouched() {
    let remote = MockRemote::ok(Vec::new());
    let (_worker, _events) = Worker::new(remote.clone());
    let mut app = app_with_plans(&[123, 456]);

    app.request_delete_selected();
    app.decline_pending();

    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.budgets.len(), 2);
    assert!(app.pending_action.is_none());

    // Give a stray worker thread time to surface; none may exist.
    std::thread::sleep(Duration::from_millis(50));
    assert!(remote.recorded().is_empty());
}

#[test]
fn test_delete_of_missing_id_is_a_noop() {
    let remote = MockRemote::ok(Vec::new());
    let (worker, _events) = Worker::new(remote.clone());
    let mut app = app_with_plans(&[123]);

    app.delete_budget(&worker, 999);

    assert_eq!(app.budgets.len(), 1);
    std::thread::sleep(Duration::from_millis(50));
    assert!(remote.recorded().is_empty());
}

// ── query and fallback ────────────────────────────────────────

#[test]
fn test_fetch_success_populates_list() {
    let remote = MockRemote::ok(mock_plans());
    let (worker, events) = Worker::new(remote.clone());
    let mut app = App::new();

    app.refresh_budgets(&worker);
    assert_eq!(app.budget_state, LoadState::Loading);
    assert!(app.status_message.contains("Loading"));

    let event = events.recv_timeout(Duration::from_secs(2)).unwrap();
    app.handle_api_event(event);

    assert_eq!(app.budget_state, LoadState::Populated);
    assert_eq!(app.budgets, mock_plans());
}

#[test]
fn test_fetch_failure_falls_back_to_mock_dataset() {
    let remote = MockRemote::failing(404, "Not Found");
    let (worker, events) = Worker::new(remote.clone());
    let mut app = App::new();

    app.refresh_budgets(&worker);
    let event = events.recv_timeout(Duration::from_secs(2)).unwrap();
    app.handle_api_event(event);

    assert_eq!(app.budget_state, LoadState::FallbackPopulated);
    assert_eq!(app.budgets, mock_plans());
    assert!(app.status_message.contains("404"));
    assert!(app.status_message.contains("Not Found"));
}

#[test]
fn test_optimistic_add_works_on_fallback_data() {
    let remote = MockRemote::failing(500, "Internal Server Error");
    let (worker, events) = Worker::new(remote.clone());
    let mut app = App::new();

    app.refresh_budgets(&worker);
    let event = events.recv_timeout(Duration::from_secs(2)).unwrap();
    app.handle_api_event(event);

    // The mock ids are 123 and 456, so the next id follows the same rule.
    app.add_budget(&worker, 50.0, 1.0, 1.0, 0.0);
    assert_eq!(app.budgets.len(), 3);
    assert_eq!(app.budgets.last().unwrap().id, 457);
}

#[test]
fn test_stale_generation_response_is_dropped() {
    let mut app = App::new();
    app.budget_generation = 2;

    app.handle_api_event(ApiEvent::Budgets {
        generation: 1,
        result: Ok(mock_plans()),
    });

    // A torn-down query must not commit anything.
    assert!(app.budgets.is_empty());
    assert_eq!(app.budget_state, LoadState::Loading);
}

// ── update and submit ─────────────────────────────────────────

#[test]
fn test_update_all_sends_whole_list() {
    let remote = MockRemote::ok(Vec::new());
    let (worker, _events) = Worker::new(remote.clone());
    let mut app = app_with_plans(&[123, 456]);

    app.update_all(&worker);

    let calls = remote.wait_for_calls(1);
    assert_eq!(calls, vec![Call::UpdateAll(2)]);
}

#[test]
fn test_submit_rereads_then_updates() {
    let remote = MockRemote::ok(Vec::new());
    let (worker, _events) = Worker::new(remote.clone());
    let mut app = app_with_plans(&[123]);

    app.submit_selected(&worker);

    // Both calls are fire-and-forget, so their order is not guaranteed.
    let calls = remote.wait_for_calls(2);
    assert_eq!(calls.len(), 2);
    assert!(calls.contains(&Call::GetBudget(123)));
    assert!(calls.contains(&Call::UpdateBudget(123)));
}

#[test]
fn test_adjust_and_edit_change_only_local_state() {
    let remote = MockRemote::ok(Vec::new());
    let (_worker, _events) = Worker::new(remote.clone());
    let mut app = app_with_plans(&[123]);

    app.adjust_selected(100.0);
    assert_eq!(app.budgets[0].budget, 200.0);

    app.set_selected_budget_amount(7_500.0);
    assert_eq!(app.budgets[0].budget, 7_500.0);

    std::thread::sleep(Duration::from_millis(50));
    assert!(remote.recorded().is_empty());
}

// ── menu demo ─────────────────────────────────────────────────

#[test]
fn test_menu_failure_sets_message_without_mock_data() {
    let remote = MockRemote::failing(503, "Service Unavailable");
    let (worker, events) = Worker::new(remote.clone());
    let mut app = App::new();

    app.refresh_dishes(&worker);
    let event = events.recv_timeout(Duration::from_secs(2)).unwrap();
    app.handle_api_event(event);

    assert_eq!(app.dish_state, LoadState::FallbackPopulated);
    assert!(app.dishes.is_empty());
    assert!(app.status_message.contains("503"));
    assert!(app.status_message.contains("Service Unavailable"));
}

#[test]
fn test_comment_is_stamped_and_pushed() {
    let remote = MockRemote::ok(Vec::new());
    let (worker, _events) = Worker::new(remote.clone());
    let mut app = App::new();
    app.dish_detail = Some(Dish {
        id: 3,
        name: "Uthappizza".into(),
        comments: Vec::new(),
    });

    app.submit_comment(&worker, 5, "alice", "tasty");

    let dish = app.dish_detail.as_ref().unwrap();
    assert_eq!(dish.comments.len(), 1);
    assert_eq!(dish.comments[0].author, "alice");
    assert!(!dish.comments[0].date.is_empty());

    let calls = remote.wait_for_calls(1);
    assert_eq!(calls, vec![Call::UpdateDish(3)]);
}

// ── view helpers ──────────────────────────────────────────────

#[test]
fn test_visible_budgets_sorts_and_filters() {
    let mut app = App::new();
    app.budgets = vec![
        BudgetPlan::new(1, 300.0, 1.0, 1.0, 0.0),
        BudgetPlan::new(2, 100.0, 1.0, 1.0, 0.0),
        BudgetPlan::new(3, 200.0, 1.0, 1.0, 0.0),
    ];
    app.budget_state = LoadState::Populated;

    app.sort_key = SortKey::Budget;
    assert_eq!(app.visible_budgets(), vec![1, 2, 0]);

    app.sort_reverse = true;
    assert_eq!(app.visible_budgets(), vec![0, 2, 1]);

    app.search_input = "300".into();
    assert_eq!(app.visible_budgets(), vec![0]);
}

#[test]
fn test_selection_follows_display_order() {
    let mut app = App::new();
    app.budgets = vec![
        BudgetPlan::new(2, 100.0, 1.0, 1.0, 0.0),
        BudgetPlan::new(1, 300.0, 1.0, 1.0, 0.0),
    ];
    app.budget_state = LoadState::Populated;

    // Default sort is by id, so index 0 selects id 1 despite insertion order.
    app.budget_index = 0;
    assert_eq!(app.selected_budget().unwrap().id, 1);
}
