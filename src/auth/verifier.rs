//! Credential verification against the identity provider.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::Error;

/// Verifies a bearer token and resolves it to a stable subject identifier.
///
/// Verification is a pure function of the credential at call time: the same
/// token resolves to the same subject on every call, modulo external
/// provider state such as revocation. Implementations hold no per-request
/// state.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` and return the provider's stable subject identifier.
    ///
    /// # Errors
    /// Returns [Error::Unauthorized] for any verification failure: a
    /// malformed or expired token, a signature mismatch, or the provider
    /// being unavailable.
    async fn verify(&self, token: &str) -> Result<String, Error>;
}

/// Verifies tokens by calling an external identity provider over HTTPS.
///
/// The provider is expected to accept `POST {verify_url}` with the JSON body
/// `{"token": "..."}` and respond 200 with `{"sub": "<subject>"}` for a
/// valid token. Any other response is treated as a failed verification.
#[derive(Debug, Clone)]
pub struct HttpTokenVerifier {
    client: reqwest::Client,
    verify_url: String,
}

#[derive(Deserialize)]
struct VerifyResponse {
    sub: String,
}

impl HttpTokenVerifier {
    /// Create a verifier that calls the provider at `verify_url`.
    pub fn new(verify_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            verify_url: verify_url.to_owned(),
        }
    }
}

#[async_trait]
impl TokenVerifier for HttpTokenVerifier {
    async fn verify(&self, token: &str) -> Result<String, Error> {
        let response = self
            .client
            .post(&self.verify_url)
            .json(&json!({ "token": token }))
            .send()
            .await
            .map_err(|error| {
                tracing::error!("Could not reach the identity provider: {error}");
                Error::Unauthorized("could not verify credential".to_owned())
            })?;

        if !response.status().is_success() {
            tracing::debug!(
                "Identity provider rejected a token with status {}.",
                response.status()
            );
            return Err(Error::Unauthorized("invalid credential".to_owned()));
        }

        let body: VerifyResponse = response.json().await.map_err(|error| {
            tracing::error!("Could not parse the identity provider response: {error}");
            Error::Unauthorized("could not verify credential".to_owned())
        })?;

        Ok(body.sub)
    }
}

/// Verifies tokens against a fixed in-memory table.
///
/// Intended for tests and local runs where no identity provider is
/// available. Tokens not present in the table fail verification.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    subjects: HashMap<String, String>,
}

impl StaticTokenVerifier {
    /// Create a verifier from `(token, subject)` pairs.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            subjects: pairs
                .into_iter()
                .map(|(token, subject)| (token.into(), subject.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<String, Error> {
        self.subjects
            .get(token)
            .cloned()
            .ok_or_else(|| Error::Unauthorized("invalid credential".to_owned()))
    }
}
