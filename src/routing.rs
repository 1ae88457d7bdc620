//! Application router configuration.

use axum::{
    Router,
    routing::{get, put},
};

use crate::{
    AppState,
    budget::{create_budget_endpoint, list_budgets_endpoint},
    category::{create_category_endpoint, list_categories_endpoint},
    endpoints,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
        update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Every route resolves the caller's identity from the bearer credential
/// before touching the store; requests that fail verification are rejected
/// with 401 by the [Caller](crate::auth::Caller) extractor.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::BUDGETS,
            get(list_budgets_endpoint).post(create_budget_endpoint),
        )
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint).post(create_category_endpoint),
        )
        .with_state(state)
}
