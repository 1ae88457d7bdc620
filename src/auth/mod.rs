//! Resolves the caller's identity from the request credential.
//!
//! Every entity row is scoped to an owner string. This module turns the
//! `Authorization: Bearer` header into that owner via a [TokenVerifier],
//! rejecting the request with 401 before any handler logic runs when
//! verification fails.

mod verifier;

pub use verifier::{HttpTokenVerifier, StaticTokenVerifier, TokenVerifier};

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};

use crate::{AppState, Error};

/// The fixed identity assigned to unauthenticated requests when
/// [AppState::allow_anonymous] is enabled.
///
/// Strictly a development affordance. The flag guarding it defaults to off.
pub const PLACEHOLDER_IDENTITY: &str = "dev_user";

/// The caller's resolved identity.
///
/// Extracting this from a request resolves the bearer credential; handlers
/// that take a `Caller` argument therefore cannot run unauthenticated.
/// The inner string is the owner id used to scope every store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(
    /// The resolved owner id.
    pub String,
);

impl Caller {
    /// The owner id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let token = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .map(|auth| auth.token().to_string());

        match token {
            Some(token) => state
                .token_verifier
                .verify(&token)
                .await
                .map(Caller),
            None if state.allow_anonymous => {
                tracing::debug!(
                    "No bearer credential supplied, falling back to the placeholder identity."
                );
                Ok(Caller(PLACEHOLDER_IDENTITY.to_owned()))
            }
            None => Err(Error::Unauthorized(
                "missing bearer credential".to_owned(),
            )),
        }
    }
}
