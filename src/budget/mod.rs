//! Budgets cap spending for a category over a recurring period.
//!
//! The API only exposes create and list. The store additionally implements
//! update and delete so that the full contract stays testable; exposing
//! those over HTTP is a product decision that has not been made.

mod db;
mod endpoints;
mod models;

pub use db::{
    create_budget, create_budget_table, delete_budget, get_all_budgets, update_budget,
};
pub use endpoints::{create_budget_endpoint, list_budgets_endpoint};
pub use models::{Budget, BudgetData, BudgetPeriod};
