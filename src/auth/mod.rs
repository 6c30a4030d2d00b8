// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Credential handling.
//!
//! A [`Client`](crate::Client) authenticates its API calls through an
//! [`Authenticator`]. Two strategies are provided:
//!
//! - [`SelfManaged`] keeps the application key and the tokens obtained
//!   through the PIN flow, and adds the `Authorization` header itself.
//!   The flow methods (`request_pin_authorization`, `request_tokens`,
//!   `refresh_tokens`) are only available on `Client<SelfManaged>`.
//! - [`Delegated`] adds nothing: the `reqwest::Client` handed to the
//!   builder is expected to authenticate on its own, for example through
//!   default headers.
//!
//! Tokens are never refreshed automatically. Callers watch
//! [`TokenSet::is_access_token_expired`] and call `refresh_tokens` in time.

mod flow;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supplies the credentials of API calls.
pub trait Authenticator: fmt::Debug + Send + Sync {
    /// Returns the value of the `Authorization` header, or `None` to send
    /// the request without one.
    fn authorization_header(&self) -> Option<String>;

    /// Returns `true` if the credential is known to have expired at `now`.
    fn access_token_expired(&self, now: DateTime<Utc>) -> bool {
        let _ = now;
        false
    }
}

/// Where a self-managed client stands in the PIN authorization flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorizationState {
    /// No authorization code and no tokens.
    Unauthenticated,
    /// A PIN was issued; the user has not been confirmed yet.
    PendingUserApproval,
    /// Tokens are available.
    Authorized,
}

/// The tokens of an authorized session.
///
/// `TokenSet` is serializable so callers can persist it and resume the
/// session later through
/// [`ClientBuilder::with_tokens`](crate::ClientBuilder::with_tokens).
///
/// # Examples
///
/// ```
/// use chrono::{TimeDelta, Utc};
/// use ecobee_lib::auth::TokenSet;
///
/// let now = Utc::now();
/// let tokens = TokenSet {
///     token_type: "Bearer".to_string(),
///     access_token: "access".to_string(),
///     access_token_expires_on: now + TimeDelta::hours(1),
///     refresh_token: "refresh".to_string(),
///     refresh_token_expires_on: None,
/// };
///
/// assert!(!tokens.is_access_token_expired(now));
/// assert!(tokens.is_access_token_expired(now + TimeDelta::hours(2)));
/// assert!(!tokens.is_refresh_token_expired(now));
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    /// The token type, normally `Bearer`.
    pub token_type: String,
    /// The access token.
    pub access_token: String,
    /// When the access token expires.
    pub access_token_expires_on: DateTime<Utc>,
    /// The refresh token.
    pub refresh_token: String,
    /// When the refresh token expires, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token_expires_on: Option<DateTime<Utc>>,
}

impl TokenSet {
    /// Returns `true` if the access token has expired at `now`.
    #[must_use]
    pub fn is_access_token_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.access_token_expires_on
    }

    /// Returns `true` if the refresh token has expired at `now`.
    ///
    /// A token set without a refresh expiry is never reported as expired.
    #[must_use]
    pub fn is_refresh_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.refresh_token_expires_on
            .is_some_and(|expires_on| now >= expires_on)
    }

    /// Returns the `Authorization` header value for these tokens.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSet")
            .field("token_type", &self.token_type)
            .field("access_token", &"<redacted>")
            .field("access_token_expires_on", &self.access_token_expires_on)
            .field("refresh_token", &"<redacted>")
            .field("refresh_token_expires_on", &self.refresh_token_expires_on)
            .finish()
    }
}

/// Credentials owned and maintained by the client.
#[derive(Clone, Default)]
pub struct SelfManaged {
    application_key: String,
    authorization_code: Option<String>,
    tokens: Option<TokenSet>,
}

impl SelfManaged {
    pub(crate) fn new(application_key: String, tokens: Option<TokenSet>) -> Self {
        Self {
            application_key,
            authorization_code: None,
            tokens,
        }
    }

    /// Returns the application key.
    #[must_use]
    pub fn application_key(&self) -> &str {
        &self.application_key
    }

    /// Returns the current tokens, if any.
    #[must_use]
    pub fn tokens(&self) -> Option<&TokenSet> {
        self.tokens.as_ref()
    }

    /// Returns the stage of the PIN flow.
    #[must_use]
    pub fn state(&self) -> AuthorizationState {
        if self.tokens.is_some() {
            AuthorizationState::Authorized
        } else if self.authorization_code.is_some() {
            AuthorizationState::PendingUserApproval
        } else {
            AuthorizationState::Unauthenticated
        }
    }

    pub(crate) fn authorization_code(&self) -> Option<&str> {
        self.authorization_code.as_deref()
    }

    pub(crate) fn set_authorization_code(&mut self, code: String) {
        self.authorization_code = Some(code);
    }

    pub(crate) fn set_application_key(&mut self, application_key: String) {
        self.application_key = application_key;
    }

    pub(crate) fn set_tokens(&mut self, tokens: TokenSet) {
        self.tokens = Some(tokens);
    }
}

impl Authenticator for SelfManaged {
    fn authorization_header(&self) -> Option<String> {
        self.tokens.as_ref().map(TokenSet::authorization_header)
    }

    fn access_token_expired(&self, now: DateTime<Utc>) -> bool {
        self.tokens
            .as_ref()
            .is_some_and(|tokens| tokens.is_access_token_expired(now))
    }
}

impl fmt::Debug for SelfManaged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelfManaged")
            .field("application_key", &self.application_key)
            .field(
                "authorization_code",
                &self.authorization_code.as_ref().map(|_| "<redacted>"),
            )
            .field("tokens", &self.tokens)
            .finish()
    }
}

/// Credentials handled by the caller's `reqwest::Client`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Delegated;

impl Authenticator for Delegated {
    fn authorization_header(&self) -> Option<String> {
        None
    }
}
