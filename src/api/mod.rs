//! REST resource client for the remote campaign service.
//!
//! The backend is external and assumed up only sometimes; every operation
//! here can fail and the callers decide what survives that.

mod worker;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::models::{BudgetPlan, Dish};

pub(crate) use worker::{ApiEvent, Worker};

/// The one failure kind a remote call produces. Malformed payloads, refused
/// connections and timeouts all collapse into it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ApiError {
    /// The server answered with a non-success status.
    #[error("{status} {status_text}")]
    Status { status: u16, status_text: String },
    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// HTTP verb a write operation is issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verb {
    Put,
    Post,
}

/// Body encoding for a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encoding {
    Json,
    Form,
}

/// Verb and content type for one write operation, declared up front instead
/// of as ad hoc method-override literals on a generic resource helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VerbSpec {
    pub(crate) verb: Verb,
    pub(crate) encoding: Encoding,
}

impl VerbSpec {
    pub(crate) const fn put_json() -> Self {
        Self {
            verb: Verb::Put,
            encoding: Encoding::Json,
        }
    }

    pub(crate) const fn post_form() -> Self {
        Self {
            verb: Verb::Post,
            encoding: Encoding::Form,
        }
    }
}

/// One REST collection bound to a base URL, with the write-verb configuration
/// for creates and updates. The base URL is taken as-is, never validated.
#[derive(Debug, Clone)]
pub(crate) struct ResourceConfig {
    pub(crate) base_url: String,
    pub(crate) collection: &'static str,
    pub(crate) create: VerbSpec,
    pub(crate) update: VerbSpec,
}

impl ResourceConfig {
    /// Id-addressed PUT creation and JSON PUT updates by default.
    pub(crate) fn new(base_url: &str, collection: &'static str) -> Self {
        Self {
            base_url: base_url.to_string(),
            collection,
            create: VerbSpec::put_json(),
            update: VerbSpec::put_json(),
        }
    }

    pub(crate) fn collection_url(&self) -> String {
        format!("{}/{}/", self.base_url.trim_end_matches('/'), self.collection)
    }

    pub(crate) fn item_url(&self, id: i64) -> String {
        format!(
            "{}/{}/{id}",
            self.base_url.trim_end_matches('/'),
            self.collection
        )
    }
}

/// Remote CRUD surface the controllers talk to. Implemented by [`HttpRemote`]
/// and by the recording fake in the controller tests.
pub(crate) trait Remote: Send + Sync {
    fn list_budgets(&self) -> Result<Vec<BudgetPlan>, ApiError>;
    fn get_budget(&self, id: i64) -> Result<BudgetPlan, ApiError>;
    fn create_budget(&self, plan: &BudgetPlan) -> Result<(), ApiError>;
    fn update_budget(&self, plan: &BudgetPlan) -> Result<(), ApiError>;
    fn update_budgets(&self, plans: &[BudgetPlan]) -> Result<(), ApiError>;
    fn delete_budget(&self, id: i64) -> Result<(), ApiError>;

    fn list_dishes(&self) -> Result<Vec<Dish>, ApiError>;
    fn get_dish(&self, id: i64) -> Result<Dish, ApiError>;
    fn update_dish(&self, dish: &Dish) -> Result<(), ApiError>;
}

/// The real client. One `reqwest` blocking client shared by both resources;
/// calls run on worker threads, never on the UI thread.
pub(crate) struct HttpRemote {
    client: Client,
    budgets: ResourceConfig,
    dishes: ResourceConfig,
}

impl HttpRemote {
    pub(crate) fn new(config: &Config) -> Self {
        let mut budgets = ResourceConfig::new(&config.base_url, "budgets");
        if config.form_updates {
            budgets.update = VerbSpec::post_form();
        }
        Self {
            client: Client::new(),
            budgets,
            dishes: ResourceConfig::new(&config.base_url, "dishes"),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_configs(budgets: ResourceConfig, dishes: ResourceConfig) -> Self {
        Self {
            client: Client::new(),
            budgets,
            dishes,
        }
    }

    fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.client.get(url).send()?;
        check(response)?.json::<T>().map_err(ApiError::from)
    }

    fn write<T: Serialize + ?Sized>(
        &self,
        spec: VerbSpec,
        url: &str,
        body: &T,
    ) -> Result<(), ApiError> {
        let request = match spec.verb {
            Verb::Put => self.client.put(url),
            Verb::Post => self.client.post(url),
        };
        let request = encode(request, spec.encoding, body);
        check(request.send()?)?;
        Ok(())
    }
}

fn encode<T: Serialize + ?Sized>(
    request: RequestBuilder,
    encoding: Encoding,
    body: &T,
) -> RequestBuilder {
    match encoding {
        Encoding::Json => request.json(body),
        Encoding::Form => request.form(body),
    }
}

fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        })
    }
}

impl Remote for HttpRemote {
    fn list_budgets(&self) -> Result<Vec<BudgetPlan>, ApiError> {
        self.fetch(&self.budgets.collection_url())
    }

    fn get_budget(&self, id: i64) -> Result<BudgetPlan, ApiError> {
        self.fetch(&self.budgets.item_url(id))
    }

    fn create_budget(&self, plan: &BudgetPlan) -> Result<(), ApiError> {
        self.write(self.budgets.create, &self.budgets.item_url(plan.id), plan)
    }

    fn update_budget(&self, plan: &BudgetPlan) -> Result<(), ApiError> {
        self.write(self.budgets.update, &self.budgets.item_url(plan.id), plan)
    }

    fn update_budgets(&self, plans: &[BudgetPlan]) -> Result<(), ApiError> {
        // The bulk endpoint takes the whole list at the collection path,
        // always as JSON: a list has no form-urlencoded shape.
        self.write(VerbSpec::put_json(), &self.budgets.collection_url(), plans)
    }

    fn delete_budget(&self, id: i64) -> Result<(), ApiError> {
        check(self.client.delete(self.budgets.item_url(id)).send()?)?;
        Ok(())
    }

    fn list_dishes(&self) -> Result<Vec<Dish>, ApiError> {
        self.fetch(&self.dishes.collection_url())
    }

    fn get_dish(&self, id: i64) -> Result<Dish, ApiError> {
        self.fetch(&self.dishes.item_url(id))
    }

    fn update_dish(&self, dish: &Dish) -> Result<(), ApiError> {
        self.write(self.dishes.update, &self.dishes.item_url(dish.id), dish)
    }
}
