//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, auth::TokenVerifier, db::initialize};

/// The state of the REST server.
///
/// Built once at startup and cloned into each request handler. There is no
/// other process-wide mutable state.
#[derive(Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,

    /// Verifies bearer credentials against the identity provider.
    pub token_verifier: Arc<dyn TokenVerifier>,

    /// Whether requests without a credential fall back to the placeholder
    /// identity instead of being rejected.
    ///
    /// This is a development affordance, not a security boundary. It is off
    /// by default and must never ship enabled.
    pub allow_anonymous: bool,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(
        db_connection: Connection,
        token_verifier: Arc<dyn TokenVerifier>,
        allow_anonymous: bool,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            token_verifier,
            allow_anonymous,
        })
    }
}
