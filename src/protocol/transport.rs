// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sending prepared requests and reading their responses.

use std::time::Duration;

use reqwest::{Method, StatusCode};
use tokio_util::sync::CancellationToken;

use crate::error::{ResponseSummary, TransportErrorKind};
use crate::protocol::{Endpoint, PreparedRequest};

/// Per-call cancellation and deadline.
///
/// Every client operation takes a `CallContext`. The default
/// ([`CallContext::background`]) never cancels and relies on the timeout of
/// the underlying `reqwest::Client`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ecobee_lib::protocol::CallContext;
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let ctx = CallContext::background()
///     .with_timeout(Duration::from_secs(5))
///     .with_cancellation(token.clone());
///
/// assert_eq!(ctx.timeout(), Some(Duration::from_secs(5)));
/// token.cancel();
/// assert!(ctx.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

impl CallContext {
    /// Returns a context with no deadline and no cancellation.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    /// Sets a deadline covering the send and the full body read.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the cancellation token, if any.
    #[must_use]
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// Returns `true` if the attached token has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

impl RawResponse {
    pub(crate) fn summary(&self, endpoint: Endpoint) -> ResponseSummary {
        ResponseSummary {
            endpoint,
            method: self.method.clone(),
            url: self.url.clone(),
            status: self.status,
        }
    }
}

/// Sends `request` and reads the whole response body.
///
/// The exchange races the context's cancellation token and deadline; the
/// connection is released before returning on every path.
pub(crate) async fn invoke(
    http: &reqwest::Client,
    request: PreparedRequest,
    ctx: &CallContext,
) -> Result<RawResponse, TransportErrorKind> {
    if ctx.is_cancelled() {
        return Err(TransportErrorKind::Cancelled);
    }

    let PreparedRequest {
        method,
        url,
        headers,
        body,
    } = request;

    tracing::debug!(%method, %url, "Sending request");

    let mut builder = http.request(method.clone(), url.as_str()).headers(headers);
    if let Some(body) = body {
        builder = builder.body(body);
    }

    let exchange = async {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok::<_, reqwest::Error>((status, body.to_vec()))
    };

    let deadline = async {
        match ctx.timeout {
            Some(timeout) => tokio::time::timeout(timeout, exchange)
                .await
                .map_err(|_| TransportErrorKind::DeadlineExceeded(timeout))
                .and_then(|result| result.map_err(TransportErrorKind::from)),
            None => exchange.await.map_err(TransportErrorKind::from),
        }
    };

    let (status, body) = match ctx.cancellation.as_ref() {
        Some(token) => {
            tokio::select! {
                biased;
                () = token.cancelled() => return Err(TransportErrorKind::Cancelled),
                result = deadline => result?,
            }
        }
        None => deadline.await?,
    };

    tracing::debug!(%method, %url, %status, bytes = body.len(), "Received response");

    Ok(RawResponse {
        method,
        url,
        status,
        body,
    })
}
