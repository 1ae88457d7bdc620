use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState, Error, auth::Caller, pagination::Pagination, transaction::Transaction,
    transaction::db::get_transaction_page,
};

/// A route handler for listing the caller's transactions, paged by the
/// `skip` and `limit` query parameters.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn list_transactions_endpoint(
    State(state): State<AppState>,
    caller: Caller,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = state.db_connection.lock().unwrap();

    get_transaction_page(caller.as_str(), pagination, &connection).map(Json)
}
