//! Categories name and color the buckets that transactions are grouped into.
//!
//! A brand-new user has no categories, so the first listing seeds a fixed
//! default set before returning. The API only exposes create and list; the
//! store additionally implements update and delete to keep the full contract
//! testable.

mod db;
mod defaults;
mod endpoints;
mod models;

pub use db::{
    create_category, create_category_table, delete_category, get_all_categories, update_category,
};
pub use defaults::{DEFAULT_CATEGORIES, ensure_default_categories};
pub use endpoints::{create_category_endpoint, list_categories_endpoint};
pub use models::{Category, CategoryData, CategoryType};
