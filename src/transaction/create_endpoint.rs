use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    auth::Caller,
    transaction::{Transaction, TransactionData, db::create_transaction},
};

/// A route handler for creating a transaction owned by the caller.
///
/// The caller never supplies the id or the owner: the id is generated by the
/// store and the owner comes from the resolved credential.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    caller: Caller,
    Json(data): Json<TransactionData>,
) -> Result<Json<Transaction>, Error> {
    let connection = state.db_connection.lock().unwrap();

    create_transaction(caller.as_str(), data, &connection).map(Json)
}
