// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the ecobee client.
//!
//! Failures fall into three families that mirror where the call broke:
//! the request never completed ([`TransportError`]), an API endpoint
//! rejected it or answered with an unexpected shape ([`ApiError`]), or the
//! authorize/token endpoints did ([`AuthorizationError`]). None of them are
//! retried by the library.

use std::fmt;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use thiserror::Error;

use crate::protocol::Endpoint;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent or its response could not be received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// An API endpoint returned an error or an undecodable response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The authorize or token endpoint returned an error or an undecodable
    /// response.
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    /// The client configuration is invalid.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The call is not possible in the client's current authorization state.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// A value could not be converted into one of the library's types.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Errors raised when parsing a string into one of the closed enumerations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value:?}")]
pub struct ValueError {
    kind: &'static str,
    value: String,
}

impl ValueError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Returns the name of the type that rejected the value.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the rejected value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Error {
    /// Returns the endpoint the failed call targeted, if the call got that far.
    #[must_use]
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::Transport(e) => Some(e.endpoint()),
            Self::Api(e) => Some(e.summary().endpoint),
            Self::Authorization(e) => Some(e.summary().endpoint),
            Self::Configuration(_) | Self::InvalidState(_) | Self::Value(_) => None,
        }
    }
}

/// A request that could not be completed at the transport level.
#[derive(Debug, Error)]
#[error("{endpoint}: {kind}")]
pub struct TransportError {
    endpoint: Endpoint,
    #[source]
    kind: TransportErrorKind,
}

impl TransportError {
    pub(crate) fn new(endpoint: Endpoint, kind: TransportErrorKind) -> Self {
        Self { endpoint, kind }
    }

    /// Returns the endpoint that was being called.
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Returns the underlying failure.
    #[must_use]
    pub fn kind(&self) -> &TransportErrorKind {
        &self.kind
    }

    /// Returns `true` if the call was aborted through its cancellation token.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, TransportErrorKind::Cancelled)
    }

    /// Returns `true` if the call ran past its deadline.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match &self.kind {
            TransportErrorKind::DeadlineExceeded(_) => true,
            TransportErrorKind::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

/// Causes of a [`TransportError`].
#[derive(Debug, Error)]
pub enum TransportErrorKind {
    /// The HTTP client failed (DNS, connect, TLS, malformed URL, body read).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The request envelope could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// A per-call header value contained characters not allowed in HTTP headers.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The caller cancelled the call.
    #[error("request cancelled")]
    Cancelled,

    /// The call did not finish within the caller's deadline.
    #[error("request timed out after {} ms", .0.as_millis())]
    DeadlineExceeded(Duration),
}

/// Identifies the exchange an [`ApiError`] or [`AuthorizationError`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    /// The endpoint that was called.
    pub endpoint: Endpoint,
    /// The HTTP method of the request.
    pub method: Method,
    /// The full request URL, including the query string.
    pub url: String,
    /// The HTTP status of the response.
    pub status: StatusCode,
}

impl fmt::Display for ResponseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} \"{}\": {}",
            self.endpoint, self.method, self.url, self.status
        )
    }
}

/// A failed call to one of the API endpoints (thermostat, group, reports).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status envelope describing the failure.
    #[error("{summary}: code {code}: {message}")]
    Status {
        /// The exchange that failed.
        summary: ResponseSummary,
        /// The ecobee status code.
        code: i64,
        /// The ecobee status message.
        message: String,
    },

    /// The server answered with a non-200 status and no usable envelope.
    #[error("{summary}")]
    Http {
        /// The exchange that failed.
        summary: ResponseSummary,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("{summary}: {source}")]
    Decode {
        /// The exchange that failed.
        summary: ResponseSummary,
        /// The decoding failure.
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Returns the exchange that failed.
    #[must_use]
    pub fn summary(&self) -> &ResponseSummary {
        match self {
            Self::Status { summary, .. } | Self::Http { summary } | Self::Decode { summary, .. } => {
                summary
            }
        }
    }

    /// Returns the ecobee status code, when the server provided one.
    #[must_use]
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// A failed call to the authorize or token endpoint.
#[derive(Debug, Error)]
pub enum AuthorizationError {
    /// The server answered with an OAuth error envelope.
    #[error("{summary}: {error}: {description}: {uri}")]
    OAuth {
        /// The exchange that failed.
        summary: ResponseSummary,
        /// The OAuth error type, e.g. `invalid_grant`.
        error: String,
        /// The human-readable description.
        description: String,
        /// A link to the error documentation.
        uri: String,
    },

    /// The server answered with a non-200 status and no usable envelope.
    #[error("{summary}")]
    Http {
        /// The exchange that failed.
        summary: ResponseSummary,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("{summary}: {source}")]
    Decode {
        /// The exchange that failed.
        summary: ResponseSummary,
        /// The decoding failure.
        source: serde_json::Error,
    },
}

impl AuthorizationError {
    /// Returns the exchange that failed.
    #[must_use]
    pub fn summary(&self) -> &ResponseSummary {
        match self {
            Self::OAuth { summary, .. } | Self::Http { summary } | Self::Decode { summary, .. } => {
                summary
            }
        }
    }

    /// Returns the OAuth error type, when the server provided one.
    #[must_use]
    pub fn error_type(&self) -> Option<&str> {
        match self {
            Self::OAuth { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
