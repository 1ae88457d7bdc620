use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    auth::Caller,
    transaction::{Transaction, db::delete_transaction},
};

/// A route handler for deleting one of the caller's transactions, returning
/// the row as it existed immediately before removal.
///
/// Responds 404 if the transaction does not exist for the caller, including
/// when it exists but belongs to someone else.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn delete_transaction_endpoint(
    State(state): State<AppState>,
    caller: Caller,
    Path(transaction_id): Path<String>,
) -> Result<Json<Transaction>, Error> {
    let connection = state.db_connection.lock().unwrap();

    delete_transaction(caller.as_str(), &transaction_id, &connection).map(Json)
}
