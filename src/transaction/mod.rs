//! Transactions record money moving in or out of a user's accounts.
//!
//! Transactions are mutable in place (updates replace every business field)
//! and can be deleted individually. All operations are scoped to the owning
//! user.

mod create_endpoint;
mod db;
mod delete_endpoint;
mod list_endpoint;
mod models;
mod update_endpoint;

pub use create_endpoint::create_transaction_endpoint;
pub use db::{
    create_transaction, create_transaction_table, delete_transaction, get_transaction_page,
    update_transaction,
};
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;
pub use models::{Transaction, TransactionData, TransactionType};
pub use update_endpoint::update_transaction_endpoint;
