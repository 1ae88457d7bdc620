use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    auth::Caller,
    transaction::{Transaction, TransactionData, db::update_transaction},
};

/// A route handler for replacing every field of one of the caller's
/// transactions.
///
/// Responds 404 if the transaction does not exist for the caller, including
/// when it exists but belongs to someone else.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn update_transaction_endpoint(
    State(state): State<AppState>,
    caller: Caller,
    Path(transaction_id): Path<String>,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error> {
    let connection = state.db_connection.lock().unwrap();

    update_transaction(caller.as_str(), &transaction_id, data, &connection).map(Json)
}
