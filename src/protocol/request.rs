// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request construction.

use std::collections::BTreeMap;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::error::TransportErrorKind;

/// A fully assembled request, ready to be handed to the transport.
#[derive(Debug, Clone)]
pub(crate) struct PreparedRequest {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<String>,
}

/// Builds a [`PreparedRequest`] for one endpoint call.
///
/// Query parameters are kept sorted by name so the encoded URL is stable.
#[derive(Debug)]
pub(crate) struct RequestBuilder {
    method: Method,
    endpoint_url: String,
    query: BTreeMap<&'static str, String>,
    headers: Vec<(HeaderName, HeaderValue)>,
    body: Option<String>,
}

impl RequestBuilder {
    pub(crate) fn new(method: Method, endpoint_url: impl Into<String>) -> Self {
        Self {
            method,
            endpoint_url: endpoint_url.into(),
            query: BTreeMap::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn get(endpoint_url: impl Into<String>) -> Self {
        Self::new(Method::GET, endpoint_url)
    }

    pub(crate) fn post(endpoint_url: impl Into<String>) -> Self {
        Self::new(Method::POST, endpoint_url)
    }

    /// Sets a query parameter, replacing any previous value.
    pub(crate) fn query(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.insert(name, value.into());
        self
    }

    /// Serializes `payload` to JSON and sets it as a query parameter.
    ///
    /// GET endpoints of the ecobee API take their payload this way, under
    /// `json` or `body` depending on the endpoint.
    pub(crate) fn json_query<T: Serialize>(
        self,
        name: &'static str,
        payload: &T,
    ) -> Result<Self, TransportErrorKind> {
        let json = serde_json::to_string(payload)?;
        Ok(self.query(name, json))
    }

    /// Serializes `payload` to JSON and sends it as the request body.
    pub(crate) fn json_body<T: Serialize>(mut self, payload: &T) -> Result<Self, TransportErrorKind> {
        self.body = Some(serde_json::to_string(payload)?);
        Ok(self.header(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        ))
    }

    /// Adds a per-call header. Per-call headers win over the client's
    /// default headers.
    pub(crate) fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.retain(|(existing, _)| *existing != name);
        self.headers.push((name, value));
        self
    }

    /// Adds an `Authorization` header with the given credential.
    pub(crate) fn authorization(self, credential: &str) -> Result<Self, TransportErrorKind> {
        let mut value = HeaderValue::from_str(credential)?;
        value.set_sensitive(true);
        Ok(self.header(AUTHORIZATION, value))
    }

    /// Returns the endpoint URL followed by the encoded query string.
    pub(crate) fn url(&self) -> String {
        if self.query.is_empty() {
            return self.endpoint_url.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{query}", self.endpoint_url)
    }

    /// Finishes the request, applying `default_headers` first and the
    /// per-call headers on top of them.
    pub(crate) fn build(self, default_headers: &HeaderMap) -> PreparedRequest {
        let url = self.url();

        let mut headers = default_headers.clone();
        for (name, value) in self.headers {
            headers.insert(name, value);
        }

        PreparedRequest {
            method: self.method,
            url,
            headers,
            body: self.body,
        }
    }
}
