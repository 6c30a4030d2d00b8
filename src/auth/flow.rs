// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The PIN authorization flow.
//!
//! 1. [`Client::request_pin_authorization`] obtains a PIN and an
//!    authorization code. The user enters the PIN on the ecobee portal.
//! 2. [`Client::request_tokens`] exchanges the code for tokens. Until the
//!    user has entered the PIN the server answers `authorization_pending`;
//!    wait [`polling_interval`](crate::response::PinAuthorizationResponse::polling_interval)
//!    between attempts.
//! 3. [`Client::refresh_tokens`] renews the tokens before the access token
//!    expires.
//!
//! Stored credentials change only when a call fully succeeds.

use chrono::{DateTime, Months, TimeDelta, Utc};

use crate::auth::{AuthorizationState, SelfManaged, TokenSet};
use crate::client::Client;
use crate::error::{Error, Result};
use crate::protocol::{CallContext, Endpoint, RequestBuilder};
use crate::response::{PinAuthorizationResponse, TokensResponse};
use crate::types::Scope;

/// Lifetime of a refresh token after issuance.
const REFRESH_TOKEN_LIFETIME: Months = Months::new(12);

impl Client<SelfManaged> {
    /// Returns the stage of the PIN flow.
    #[must_use]
    pub fn authorization_state(&self) -> AuthorizationState {
        self.authenticator().state()
    }

    /// Returns the current tokens, if any.
    #[must_use]
    pub fn tokens(&self) -> Option<&TokenSet> {
        self.authenticator().tokens()
    }

    /// Replaces the application key.
    pub fn set_application_key(&mut self, application_key: impl Into<String>) {
        self.authenticator_mut()
            .set_application_key(application_key.into());
    }

    /// Requests a PIN for the given scope and stores the returned
    /// authorization code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the request fails and
    /// [`Error::Authorization`] if the server rejects it.
    pub async fn request_pin_authorization(
        &mut self,
        ctx: &CallContext,
        scope: Scope,
    ) -> Result<PinAuthorizationResponse> {
        let request = RequestBuilder::get(self.endpoint_url(Endpoint::Authorize))
            .query("response_type", "ecobeePin")
            .query("client_id", self.authenticator().application_key())
            .query("scope", scope.as_str());

        let response: PinAuthorizationResponse = self
            .execute_authorization(ctx, Endpoint::Authorize, request)
            .await?;

        tracing::info!(
            scope = response.scope_str(),
            expires_in_minutes = response.expires_in().as_secs() / 60,
            "PIN issued"
        );

        self.authenticator_mut()
            .set_authorization_code(response.authorization_code().to_string());

        Ok(response)
    }

    /// Exchanges the stored authorization code for tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] without sending anything if no PIN
    /// was requested. Returns [`Error::Authorization`] while the user has
    /// not entered the PIN yet, or if the PIN expired.
    pub async fn request_tokens(&mut self, ctx: &CallContext) -> Result<TokensResponse> {
        let code = self
            .authenticator()
            .authorization_code()
            .ok_or(Error::InvalidState("no authorization code, request a PIN first"))?
            .to_string();

        self.issue_tokens(ctx, "ecobeePin", &code).await
    }

    /// Renews the tokens with the stored refresh token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] without sending anything if the
    /// client holds no tokens. Returns [`Error::Authorization`] if the
    /// server rejects the refresh token.
    pub async fn refresh_tokens(&mut self, ctx: &CallContext) -> Result<TokensResponse> {
        let refresh_token = self
            .tokens()
            .ok_or(Error::InvalidState("no refresh token, request tokens first"))?
            .refresh_token
            .clone();

        self.issue_tokens(ctx, "refresh_token", &refresh_token).await
    }

    async fn issue_tokens(
        &mut self,
        ctx: &CallContext,
        grant_type: &'static str,
        code: &str,
    ) -> Result<TokensResponse> {
        let request = RequestBuilder::post(self.endpoint_url(Endpoint::Token))
            .query("grant_type", grant_type)
            .query("code", code)
            .query("client_id", self.authenticator().application_key());

        let issued_at = Utc::now();
        let response: TokensResponse = self
            .execute_authorization(ctx, Endpoint::Token, request)
            .await?;

        let tokens = token_set(&response, issued_at);
        tracing::info!(
            grant_type,
            access_token_expires_on = %tokens.access_token_expires_on,
            "Tokens issued"
        );
        self.authenticator_mut().set_tokens(tokens);

        Ok(response)
    }
}

fn token_set(response: &TokensResponse, issued_at: DateTime<Utc>) -> TokenSet {
    let access_token_expires_on = TimeDelta::from_std(response.expires_in())
        .ok()
        .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    let refresh_token_expires_on = issued_at
        .checked_add_months(REFRESH_TOKEN_LIFETIME)
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    TokenSet {
        token_type: response.token_type().to_string(),
        access_token: response.access_token().to_string(),
        access_token_expires_on,
        refresh_token: response.refresh_token().to_string(),
        refresh_token_expires_on: Some(refresh_token_expires_on),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn response(expires_in: u64) -> TokensResponse {
        serde_json::from_value(serde_json::json!({
            "access_token": "access",
            "token_type": "Bearer",
            "expires_in": expires_in,
            "refresh_token": "refresh",
            "scope": "smartWrite",
        }))
        .unwrap()
    }

    #[test]
    fn expiry_is_relative_to_issue_time() {
        let issued_at = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
        let tokens = token_set(&response(3599), issued_at);

        assert_eq!(
            tokens.access_token_expires_on,
            Utc.with_ymd_and_hms(2024, 2, 29, 12, 59, 59).unwrap()
        );
        assert_eq!(
            tokens.refresh_token_expires_on,
            Some(Utc.with_ymd_and_hms(2025, 2, 28, 12, 0, 0).unwrap())
        );
        assert_eq!(tokens.authorization_header(), "Bearer access");
    }

    #[test]
    fn huge_lifetime_saturates() {
        let tokens = token_set(&response(u64::MAX), Utc::now());
        assert_eq!(tokens.access_token_expires_on, DateTime::<Utc>::MAX_UTC);
    }
}
