//! Route handlers for categories.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    auth::Caller,
    category::{
        Category, CategoryData, db::create_category, db::get_all_categories,
        defaults::ensure_default_categories,
    },
};

/// A route handler for listing the caller's categories.
///
/// A first-time caller has none, in which case the fixed default set is
/// seeded before listing, so the response is never empty for a new user.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn list_categories_endpoint(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<Category>>, Error> {
    let mut connection = state.db_connection.lock().unwrap();

    ensure_default_categories(caller.as_str(), &mut connection)?;

    get_all_categories(caller.as_str(), &connection).map(Json)
}

/// A route handler for creating a category owned by the caller.
///
/// # Panics
///
/// Panics if the lock for the database connection is already held by the same thread.
pub async fn create_category_endpoint(
    State(state): State<AppState>,
    caller: Caller,
    Json(data): Json<CategoryData>,
) -> Result<Json<Category>, Error> {
    let connection = state.db_connection.lock().unwrap();

    create_category(caller.as_str(), data, &connection).map(Json)
}
