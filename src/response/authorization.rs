// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Responses of the authorize and token endpoints.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::types::Scope;

/// Response of a PIN authorization request.
///
/// The user enters [`pin`](Self::pin) in the "My Apps" section of the ecobee
/// portal before [`expires_in`](Self::expires_in) runs out. The client keeps
/// the authorization code to request tokens once the user has done so.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ecobee_lib::response::PinAuthorizationResponse;
/// use ecobee_lib::types::Scope;
///
/// let json = r#"{
///     "ecobeePin": "bv29",
///     "code": "uiDaeLmYB3iB",
///     "scope": "smartWrite",
///     "expires_in": 9,
///     "interval": 30
/// }"#;
///
/// let response: PinAuthorizationResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.pin(), "bv29");
/// assert_eq!(response.expires_in(), Duration::from_secs(9 * 60));
/// assert_eq!(response.polling_interval(), Duration::from_secs(30));
/// assert_eq!(response.scope(), Some(Scope::SmartWrite));
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct PinAuthorizationResponse {
    #[serde(rename = "ecobeePin")]
    pin: String,
    code: String,
    #[serde(default)]
    scope: String,
    expires_in: u64,
    interval: u64,
}

impl PinAuthorizationResponse {
    /// Returns the PIN the user enters on the ecobee portal.
    #[must_use]
    pub fn pin(&self) -> &str {
        &self.pin
    }

    /// Returns the authorization code exchanged for tokens.
    #[must_use]
    pub fn authorization_code(&self) -> &str {
        &self.code
    }

    /// Returns the raw scope value granted by the server.
    #[must_use]
    pub fn scope_str(&self) -> &str {
        &self.scope
    }

    /// Returns the granted scope, or `None` if the server sent a value this
    /// library does not know.
    #[must_use]
    pub fn scope(&self) -> Option<Scope> {
        self.scope.parse().ok()
    }

    /// Returns how long the PIN stays valid.
    #[must_use]
    pub fn expires_in(&self) -> Duration {
        Duration::from_secs(self.expires_in.saturating_mul(60))
    }

    /// Returns the minimum delay between two token requests while waiting
    /// for the user.
    #[must_use]
    pub fn polling_interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }
}

impl fmt::Debug for PinAuthorizationResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinAuthorizationResponse")
            .field("pin", &self.pin)
            .field("code", &"<redacted>")
            .field("scope", &self.scope)
            .field("expires_in", &self.expires_in)
            .field("interval", &self.interval)
            .finish()
    }
}

/// Response of a token request or refresh.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct TokensResponse {
    access_token: String,
    token_type: String,
    expires_in: u64,
    refresh_token: String,
    #[serde(default)]
    scope: String,
}

impl TokensResponse {
    /// Returns the access token.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns the token type, normally `Bearer`.
    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Returns the lifetime of the access token.
    #[must_use]
    pub fn expires_in(&self) -> Duration {
        Duration::from_secs(self.expires_in)
    }

    /// Returns the refresh token.
    #[must_use]
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Returns the raw scope value granted by the server.
    #[must_use]
    pub fn scope_str(&self) -> &str {
        &self.scope
    }

    /// Returns the granted scope, or `None` if the server sent a value this
    /// library does not know.
    #[must_use]
    pub fn scope(&self) -> Option<Scope> {
        self.scope.parse().ok()
    }
}

impl fmt::Debug for TokensResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokensResponse")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &"<redacted>")
            .field("scope", &self.scope)
            .finish()
    }
}
