// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Interpretation of raw responses.
//!
//! The API endpoints report failures as `{"status": {"code", "message"}}`
//! while the authorize and token endpoints use the OAuth triple
//! `{"error", "error_description", "error_uri"}`. The caller picks the
//! policy matching the endpoint it called.

use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::{ApiError, AuthorizationError, ResponseSummary};
use crate::model::Status;
use crate::protocol::{Endpoint, RawResponse};

#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    status: Option<Status>,
}

#[derive(Debug, Deserialize)]
struct OAuthEnvelope {
    error: Option<String>,
    error_description: Option<String>,
    error_uri: Option<String>,
}

/// Returns `true` if the error means the body held no usable JSON at all.
fn is_unreadable(error: &serde_json::Error) -> bool {
    matches!(error.classify(), Category::Eof | Category::Syntax)
}

/// Decodes an API endpoint response.
pub(crate) fn process_api_response<T: DeserializeOwned>(
    endpoint: Endpoint,
    raw: &RawResponse,
) -> Result<T, ApiError> {
    let summary = raw.summary(endpoint);

    if raw.status != StatusCode::OK {
        tracing::warn!(%endpoint, status = %raw.status, "API request failed");
        return Err(api_failure(summary, &raw.body));
    }

    serde_json::from_slice(&raw.body).map_err(|source| ApiError::Decode { summary, source })
}

fn api_failure(summary: ResponseSummary, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<StatusEnvelope>(body) {
        Ok(StatusEnvelope {
            status:
                Some(Status {
                    code: Some(code),
                    message,
                }),
        }) => ApiError::Status {
            summary,
            code,
            message: message.unwrap_or_default(),
        },
        Ok(_) => ApiError::Http { summary },
        Err(e) if is_unreadable(&e) => ApiError::Http { summary },
        Err(source) => ApiError::Decode { summary, source },
    }
}

/// Decodes an authorize or token endpoint response.
pub(crate) fn process_authorization_response<T: DeserializeOwned>(
    endpoint: Endpoint,
    raw: &RawResponse,
) -> Result<T, AuthorizationError> {
    let summary = raw.summary(endpoint);

    if raw.status != StatusCode::OK {
        tracing::warn!(%endpoint, status = %raw.status, "Authorization request failed");
        return Err(authorization_failure(summary, &raw.body));
    }

    serde_json::from_slice(&raw.body)
        .map_err(|source| AuthorizationError::Decode { summary, source })
}

fn authorization_failure(summary: ResponseSummary, body: &[u8]) -> AuthorizationError {
    match serde_json::from_slice::<OAuthEnvelope>(body) {
        Ok(OAuthEnvelope {
            error: Some(error),
            error_description,
            error_uri,
        }) => AuthorizationError::OAuth {
            summary,
            error,
            description: error_description.unwrap_or_default(),
            uri: error_uri.unwrap_or_default(),
        },
        Ok(_) => AuthorizationError::Http { summary },
        Err(e) if is_unreadable(&e) => AuthorizationError::Http { summary },
        Err(source) => AuthorizationError::Decode { summary, source },
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    fn raw(status: StatusCode, body: &str) -> RawResponse {
        RawResponse {
            method: Method::GET,
            url: "https://api.ecobee.com/1/thermostat".to_string(),
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn api_success_decodes_payload() {
        let payload: Payload =
            process_api_response(Endpoint::Thermostat, &raw(StatusCode::OK, r#"{"name":"Hall"}"#))
                .unwrap();
        assert_eq!(payload.name, "Hall");
    }

    #[test]
    fn api_status_envelope() {
        let body = r#"{"status":{"code":14,"message":"Authentication token has expired. Refresh your tokens."}}"#;
        let err = process_api_response::<Payload>(
            Endpoint::Thermostat,
            &raw(StatusCode::UNAUTHORIZED, body),
        )
        .unwrap_err();

        assert_eq!(err.code(), Some(14));
        assert_eq!(
            err.to_string(),
            "thermostat: GET \"https://api.ecobee.com/1/thermostat\": 401 Unauthorized: \
             code 14: Authentication token has expired. Refresh your tokens."
        );
    }

    #[test]
    fn api_empty_error_body_is_status_only() {
        let err = process_api_response::<Payload>(
            Endpoint::Thermostat,
            &raw(StatusCode::INTERNAL_SERVER_ERROR, ""),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Http { .. }));
        assert_eq!(
            err.to_string(),
            "thermostat: GET \"https://api.ecobee.com/1/thermostat\": 500 Internal Server Error"
        );
    }

    #[test]
    fn api_html_error_body_is_status_only() {
        let err = process_api_response::<Payload>(
            Endpoint::Thermostat,
            &raw(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>"),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Http { .. }));
    }

    #[test]
    fn api_envelope_without_status_is_status_only() {
        let err = process_api_response::<Payload>(
            Endpoint::Group,
            &raw(StatusCode::FORBIDDEN, r#"{"unexpected":true}"#),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Http { .. }));
    }

    #[test]
    fn api_mistyped_envelope_wraps_cause() {
        let err = process_api_response::<Payload>(
            Endpoint::Group,
            &raw(StatusCode::FORBIDDEN, r#"{"status":{"code":"fourteen"}}"#),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn api_empty_success_body_reports_eof() {
        let err = process_api_response::<Payload>(Endpoint::Thermostat, &raw(StatusCode::OK, ""))
            .unwrap_err();
        let ApiError::Decode { source, .. } = &err else {
            panic!("expected decode error, got {err:?}");
        };
        assert!(source.is_eof());
        assert!(err.to_string().contains("EOF"));
    }

    #[test]
    fn oauth_envelope() {
        let body = r#"{"error":"invalid_grant","error_description":"The authorization grant, token or refresh token is invalid.","error_uri":"https://tools.ietf.org/html/rfc6749#section-5.2"}"#;
        let err = process_authorization_response::<Payload>(
            Endpoint::Token,
            &raw(StatusCode::BAD_REQUEST, body),
        )
        .unwrap_err();

        let AuthorizationError::OAuth {
            error,
            description,
            uri,
            ..
        } = &err
        else {
            panic!("expected OAuth error, got {err:?}");
        };
        assert_eq!(error, "invalid_grant");
        assert_eq!(
            description,
            "The authorization grant, token or refresh token is invalid."
        );
        assert_eq!(uri, "https://tools.ietf.org/html/rfc6749#section-5.2");
    }

    #[test]
    fn oauth_envelope_without_error_is_status_only() {
        let err = process_authorization_response::<Payload>(
            Endpoint::Authorize,
            &raw(StatusCode::BAD_REQUEST, "{}"),
        )
        .unwrap_err();
        assert!(matches!(err, AuthorizationError::Http { .. }));
        assert!(err.to_string().starts_with("authorize: GET"));
    }

    #[test]
    fn oauth_truncated_body_is_status_only() {
        let err = process_authorization_response::<Payload>(
            Endpoint::Token,
            &raw(StatusCode::UNAUTHORIZED, r#"{"error":"#),
        )
        .unwrap_err();
        assert!(matches!(err, AuthorizationError::Http { .. }));
    }

    #[test]
    fn authorization_success_decode_failure_wraps_cause() {
        let err = process_authorization_response::<Payload>(
            Endpoint::Token,
            &raw(StatusCode::OK, r#"{"name":7}"#),
        )
        .unwrap_err();
        assert!(matches!(err, AuthorizationError::Decode { .. }));
    }
}
