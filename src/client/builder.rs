// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Client configuration.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::auth::{Authenticator, Delegated, SelfManaged, TokenSet};
use crate::client::{Client, normalize_base_url};
use crate::error::{Error, Result};

/// Builder for [`Client`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ecobee_lib::ClientBuilder;
///
/// let client = ClientBuilder::new()
///     .with_application_key("my-application-key")
///     .with_base_url("https://api.ecobee.com")
///     .with_timeout(Duration::from_secs(30))
///     .with_header("x-request-source", "home-dashboard")
///     .build()
///     .unwrap();
///
/// assert_eq!(client.base_url(), "https://api.ecobee.com/");
/// assert_eq!(client.api_version(), 1);
/// ```
///
/// A caller that authenticates through its own `reqwest::Client` builds a
/// delegated client instead:
///
/// ```
/// use ecobee_lib::ClientBuilder;
/// use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer token"));
/// let http = reqwest::Client::builder()
///     .default_headers(headers)
///     .build()
///     .unwrap();
///
/// let client = ClientBuilder::new()
///     .with_http_client(http)
///     .build_delegated()
///     .unwrap();
/// # let _ = client;
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_version: u32,
    application_key: String,
    headers: Vec<(String, String)>,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
    tokens: Option<TokenSet>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Default base URL of the ecobee API.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.ecobee.com/";
    /// Default API version.
    pub const DEFAULT_API_VERSION: u32 = 1;
    /// Default request timeout of the HTTP client built by the builder.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_version: Self::DEFAULT_API_VERSION,
            application_key: String::new(),
            headers: Vec::new(),
            timeout: Self::DEFAULT_TIMEOUT,
            http_client: None,
            tokens: None,
        }
    }

    /// Sets the base URL. A trailing `/` is added if missing.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the API version used in endpoint URLs.
    #[must_use]
    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    /// Sets the application key from the ecobee developer portal.
    #[must_use]
    pub fn with_application_key(mut self, application_key: impl Into<String>) -> Self {
        self.application_key = application_key.into();
        self
    }

    /// Adds a header sent with every request.
    ///
    /// The name and value are validated by [`build`](Self::build).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request timeout of the HTTP client built by the builder.
    ///
    /// Ignored when a client is supplied with
    /// [`with_http_client`](Self::with_http_client).
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses the given HTTP client instead of building one.
    #[must_use]
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Resumes a session with previously obtained tokens.
    #[must_use]
    pub fn with_tokens(mut self, tokens: TokenSet) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Builds a client that manages its own credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the application key is empty,
    /// the base URL is invalid, a header is invalid, or the HTTP client
    /// cannot be created.
    pub fn build(mut self) -> Result<Client<SelfManaged>> {
        if self.application_key.is_empty() {
            return Err(Error::Configuration(
                "an application key is required".to_string(),
            ));
        }

        let application_key = std::mem::take(&mut self.application_key);
        let tokens = self.tokens.take();
        self.finish(SelfManaged::new(application_key, tokens))
    }

    /// Builds a client that leaves authentication to the HTTP client.
    ///
    /// The application key and tokens, if set, are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the base URL is invalid, a header
    /// is invalid, or the HTTP client cannot be created.
    pub fn build_delegated(self) -> Result<Client<Delegated>> {
        self.finish(Delegated)
    }

    fn finish<A: Authenticator>(self, auth: A) -> Result<Client<A>> {
        let base_url = normalize_base_url(self.base_url);
        reqwest::Url::parse(&base_url)
            .map_err(|e| Error::Configuration(format!("invalid base URL {base_url:?}: {e}")))?;

        let custom_headers = parse_headers(&self.headers)?;

        let http = match self.http_client {
            Some(http) => http,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|e| Error::Configuration(format!("failed to build HTTP client: {e}")))?,
        };

        Ok(Client {
            http,
            base_url,
            api_version: self.api_version,
            custom_headers,
            auth,
        })
    }
}

fn parse_headers(headers: &[(String, String)]) -> Result<HeaderMap> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::Configuration(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::Configuration(format!("invalid value for header {name}: {e}")))?;
        map.insert(name, value);
    }
    Ok(map)
}
