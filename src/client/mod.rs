// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The ecobee API client.
//!
//! A [`Client`] is created through a [`ClientBuilder`] and exposes one async
//! method per API operation. Every operation takes a [`CallContext`] that can
//! cancel the call or bound its duration.

mod builder;
mod group;
mod report;
mod thermostat;

use chrono::Utc;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::auth::{Authenticator, SelfManaged};
use crate::error::{Error, Result, TransportError, TransportErrorKind};
use crate::protocol::{
    CallContext, Endpoint, RequestBuilder, invoke, process_api_response,
    process_authorization_response,
};

pub use builder::ClientBuilder;
pub use report::{MeterReportParameters, RuntimeReportParameters};

/// Client for the ecobee API.
///
/// The type parameter selects how calls are authenticated; see
/// [`crate::auth`]. A client holds no connection of its own: every clone
/// shares the underlying `reqwest::Client`.
///
/// A clone of a `Client<SelfManaged>` also copies the current tokens, and
/// the clones do not see each other's refreshes. A refresh replaces the
/// refresh token on the server, so once one clone refreshes, the tokens
/// held by the others are stale. Share a single client behind a lock
/// (e.g. `tokio::sync::Mutex`) instead of cloning it across tasks.
///
/// # Examples
///
/// ```no_run
/// use ecobee_lib::model::Selection;
/// use ecobee_lib::protocol::CallContext;
/// use ecobee_lib::Client;
///
/// # async fn example(tokens: ecobee_lib::auth::TokenSet) -> ecobee_lib::Result<()> {
/// let client = Client::builder()
///     .with_application_key("my-application-key")
///     .with_tokens(tokens)
///     .build()?;
///
/// let selection = Selection {
///     include_runtime: Some(true),
///     ..Selection::registered()
/// };
/// let response = client
///     .thermostats(&CallContext::background(), &selection, None)
///     .await?;
///
/// for thermostat in &response.thermostat_list {
///     println!("{:?}: {:?}", thermostat.name, thermostat.runtime);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client<A: Authenticator = SelfManaged> {
    http: reqwest::Client,
    base_url: String,
    api_version: u32,
    custom_headers: HeaderMap,
    auth: A,
}

impl Client<SelfManaged> {
    /// Returns a builder with the default configuration.
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<A: Authenticator> Client<A> {
    /// Returns the base URL, always ending with `/`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sets the base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = normalize_base_url(base_url.into());
    }

    /// Returns the API version used in endpoint URLs.
    #[must_use]
    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// Sets the API version used in endpoint URLs.
    pub fn set_api_version(&mut self, api_version: u32) {
        self.api_version = api_version;
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    /// Replaces the underlying HTTP client.
    pub fn set_http_client(&mut self, http: reqwest::Client) {
        self.http = http;
    }

    /// Returns the headers added to every request.
    #[must_use]
    pub fn custom_headers(&self) -> &HeaderMap {
        &self.custom_headers
    }

    /// Replaces the headers added to every request.
    ///
    /// Headers set by the operations themselves (`Authorization`,
    /// `Content-Type`) take precedence over these.
    pub fn set_custom_headers(&mut self, headers: HeaderMap) {
        self.custom_headers = headers;
    }

    /// Returns the authentication strategy.
    #[must_use]
    pub fn authenticator(&self) -> &A {
        &self.auth
    }

    pub(crate) fn authenticator_mut(&mut self) -> &mut A {
        &mut self.auth
    }

    pub(crate) fn endpoint_url(&self, endpoint: Endpoint) -> String {
        endpoint.url(&self.base_url, self.api_version)
    }

    /// Sends an authenticated request to an API endpoint.
    pub(crate) async fn execute_api<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T> {
        let request = match self.auth.authorization_header() {
            Some(credential) => {
                if self.auth.access_token_expired(Utc::now()) {
                    tracing::warn!(%endpoint, "Sending request with an expired access token");
                }
                request
                    .authorization(&credential)
                    .map_err(transport_error(endpoint))?
            }
            None => request,
        };

        let raw = invoke(&self.http, request.build(&self.custom_headers), ctx)
            .await
            .map_err(transport_error(endpoint))?;

        Ok(process_api_response(endpoint, &raw)?)
    }

    /// Sends a request to the authorize or token endpoint.
    pub(crate) async fn execute_authorization<T: DeserializeOwned>(
        &self,
        ctx: &CallContext,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T> {
        let raw = invoke(&self.http, request.build(&self.custom_headers), ctx)
            .await
            .map_err(transport_error(endpoint))?;

        Ok(process_authorization_response(endpoint, &raw)?)
    }
}

pub(crate) fn transport_error(endpoint: Endpoint) -> impl FnOnce(TransportErrorKind) -> Error {
    move |kind| TransportError::new(endpoint, kind).into()
}

pub(crate) fn normalize_base_url(mut base_url: String) -> String {
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    base_url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        assert_eq!(
            normalize_base_url("http://127.0.0.1:8080".to_string()),
            "http://127.0.0.1:8080/"
        );
        assert_eq!(
            normalize_base_url("https://api.ecobee.com/".to_string()),
            "https://api.ecobee.com/"
        );
    }

    #[test]
    fn setters_update_endpoint_urls() {
        let mut client = Client::builder()
            .with_application_key("key")
            .build()
            .unwrap();
        client.set_base_url("http://localhost:9000");
        client.set_api_version(2);

        assert_eq!(
            client.endpoint_url(Endpoint::Group),
            "http://localhost:9000/2/group"
        );
        assert_eq!(
            client.endpoint_url(Endpoint::Token),
            "http://localhost:9000/token"
        );
    }

    #[test]
    fn custom_headers_can_be_replaced() {
        let mut client = Client::builder()
            .with_application_key("key")
            .with_header("x-app", "one")
            .build()
            .unwrap();
        assert_eq!(client.custom_headers().get("x-app").unwrap(), "one");

        client.set_custom_headers(HeaderMap::new());
        assert!(client.custom_headers().is_empty());
    }
}
