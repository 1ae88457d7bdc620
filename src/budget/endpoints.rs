//! Route handlers for budgets.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    auth::Caller,
    budget::{Budget, BudgetData, db::create_budget, db::get_all_budgets},
};

/// A route handler for listing the caller's budgets.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn list_budgets_endpoint(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<Budget>>, Error> {
    let connection = state.db_connection.lock().unwrap();

    get_all_budgets(caller.as_str(), &connection).map(Json)
}

/// A route handler for creating a budget owned by the caller.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_budget_endpoint(
    State(state): State<AppState>,
    caller: Caller,
    Json(data): Json<BudgetData>,
) -> Result<Json<Budget>, Error> {
    let connection = state.db_connection.lock().unwrap();

    create_budget(caller.as_str(), data, &connection).map(Json)
}
