//! Background dispatch for remote calls.
//!
//! The event loop never blocks on the network. Queries run on short-lived
//! threads and come back over a channel, tagged with the generation that
//! issued them; a response whose generation no longer matches is dropped
//! instead of committed. Mutating calls are fire-and-forget: the local list
//! was already updated, so a remote failure is logged and nothing else.

use std::sync::{mpsc, Arc};
use std::thread;

use tracing::{debug, warn};

use super::{ApiError, Remote};
use crate::models::{BudgetPlan, Dish};

pub(crate) enum ApiEvent {
    Budgets {
        generation: u64,
        result: Result<Vec<BudgetPlan>, ApiError>,
    },
    Dishes {
        generation: u64,
        result: Result<Vec<Dish>, ApiError>,
    },
    DishDetail {
        generation: u64,
        result: Result<Dish, ApiError>,
    },
}

pub(crate) struct Worker {
    remote: Arc<dyn Remote>,
    tx: mpsc::Sender<ApiEvent>,
}

impl Worker {
    pub(crate) fn new(remote: Arc<dyn Remote>) -> (Self, mpsc::Receiver<ApiEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { remote, tx }, rx)
    }

    pub(crate) fn query_budgets(&self, generation: u64) {
        let remote = Arc::clone(&self.remote);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = remote.list_budgets();
            // A closed receiver just means the app is shutting down.
            let _ = tx.send(ApiEvent::Budgets { generation, result });
        });
    }

    pub(crate) fn query_dishes(&self, generation: u64) {
        let remote = Arc::clone(&self.remote);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = remote.list_dishes();
            let _ = tx.send(ApiEvent::Dishes { generation, result });
        });
    }

    pub(crate) fn query_dish(&self, generation: u64, id: i64) {
        let remote = Arc::clone(&self.remote);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = remote.get_dish(id);
            let _ = tx.send(ApiEvent::DishDetail { generation, result });
        });
    }

    /// Run a mutating call off the UI thread. No retry, no rollback: the
    /// optimistic local mutation stands whatever the server said.
    pub(crate) fn fire_and_forget<F>(&self, what: &'static str, call: F)
    where
        F: FnOnce(&dyn Remote) -> Result<(), ApiError> + Send + 'static,
    {
        let remote = Arc::clone(&self.remote);
        thread::spawn(move || match call(remote.as_ref()) {
            Ok(()) => debug!("{what} acknowledged by server"),
            Err(err) => warn!("{what} failed, keeping local state: {err}"),
        });
    }
}
