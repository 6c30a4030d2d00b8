// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the ecobee client using wiremock.

use std::time::Duration;

use chrono::{Months, NaiveDate, TimeDelta, Utc};
use ecobee_lib::auth::{AuthorizationState, TokenSet};
use ecobee_lib::client::{MeterReportParameters, RuntimeReportParameters};
use ecobee_lib::error::{ApiError, AuthorizationError, Error, TransportErrorKind};
use ecobee_lib::function::{SendMessageParameters, SetHoldParameters};
use ecobee_lib::model::{Group, Selection, Settings, Thermostat};
use ecobee_lib::protocol::CallContext;
use ecobee_lib::types::{HoldType, Scope};
use ecobee_lib::{Client, ClientBuilder, Endpoint};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const APP_KEY: &str = "test-application-key";

fn tokens(access_token: &str) -> TokenSet {
    TokenSet {
        token_type: "Bearer".to_string(),
        access_token: access_token.to_string(),
        access_token_expires_on: Utc::now() + TimeDelta::hours(1),
        refresh_token: "refresh-1".to_string(),
        refresh_token_expires_on: None,
    }
}

fn builder(server: &MockServer) -> ClientBuilder {
    ClientBuilder::new()
        .with_base_url(server.uri())
        .with_application_key(APP_KEY)
}

fn authorized_client(server: &MockServer) -> Client {
    builder(server).with_tokens(tokens("access-1")).build().unwrap()
}

fn ok_status() -> serde_json::Value {
    json!({"code": 0, "message": ""})
}

fn query_value(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

async fn single_request(server: &MockServer) -> Request {
    let mut requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ============================================================================
// Thermostat operations
// ============================================================================

mod thermostat {
    use super::*;

    #[tokio::test]
    async fn read_thermostats_decodes_success() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/thermostat"))
            .and(header("authorization", "Bearer access-1"))
            .and(query_param(
                "json",
                r#"{"selection":{"selectionType":"registered","selectionMatch":"","includeRuntime":true}}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": {"page": 1, "totalPages": 1, "pageSize": 1, "total": 1},
                "thermostatList": [{
                    "identifier": "318324702718",
                    "name": "Living Room",
                    "runtime": {"connected": true, "actualTemperature": 712}
                }],
                "status": ok_status()
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let selection = Selection {
            include_runtime: Some(true),
            ..Selection::registered()
        };

        let response = client
            .thermostats(&CallContext::background(), &selection, None)
            .await
            .unwrap();

        assert_eq!(response.thermostat_list.len(), 1);
        let thermostat = &response.thermostat_list[0];
        assert_eq!(thermostat.name.as_deref(), Some("Living Room"));
        assert_eq!(
            thermostat.runtime.as_ref().unwrap().actual_temperature,
            Some(712)
        );
        assert!(response.status.unwrap().is_success());
    }

    #[tokio::test]
    async fn json_query_round_trips_without_nulls() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/thermostat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "thermostatList": [],
                "status": ok_status()
            })))
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let selection = Selection {
            include_alerts: Some(false),
            include_settings: Some(true),
            ..Selection::thermostats(["318324702718", "521732401522"])
        };
        let page = ecobee_lib::model::Page::number(2);

        client
            .thermostats(&CallContext::background(), &selection, Some(&page))
            .await
            .unwrap();

        let request = single_request(&server).await;
        let sent = query_value(&request, "json").unwrap();
        assert!(!sent.contains("null"));

        let envelope: serde_json::Value = serde_json::from_str(&sent).unwrap();
        assert_eq!(
            envelope,
            json!({
                "selection": {
                    "selectionType": "thermostats",
                    "selectionMatch": "318324702718,521732401522",
                    "includeSettings": true,
                    "includeAlerts": false
                },
                "page": {"page": 2}
            })
        );

        let decoded: Selection = serde_json::from_value(envelope["selection"].clone()).unwrap();
        assert_eq!(decoded, selection);
    }

    #[tokio::test]
    async fn thermostat_summary_parses_revisions() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/thermostatSummary"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "revisionList": ["318324702718:Living Room:true:170721184405:170721184405:170721185220:170721185215"],
                "thermostatCount": 1,
                "statusList": ["318324702718:compCool1,fan"],
                "status": ok_status()
            })))
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let summary = client
            .thermostat_summary(&CallContext::background(), &Selection::registered())
            .await
            .unwrap();

        assert_eq!(summary.thermostat_count, Some(1));
        let revisions = summary.revisions().unwrap();
        assert_eq!(revisions[0].runtime_revision, "170721185220");
        assert_eq!(
            summary.equipment_status("318324702718"),
            Some(vec!["compCool1", "fan"])
        );
    }

    #[tokio::test]
    async fn update_thermostat_posts_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1/thermostat"))
            .and(query_param("format", "json"))
            .and(header("content-type", "application/json; charset=utf-8"))
            .and(body_json(json!({
                "selection": {"selectionType": "thermostats", "selectionMatch": "318324702718"},
                "thermostat": {"settings": {"hvacMode": "heat"}}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": ok_status()})))
            .expect(1)
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let patch = Thermostat {
            settings: Some(Settings {
                hvac_mode: Some("heat".to_string()),
                ..Settings::default()
            }),
            ..Thermostat::default()
        };

        let response = client
            .update_thermostat(
                &CallContext::background(),
                &Selection::thermostats(["318324702718"]),
                Some(&patch),
                &[],
            )
            .await
            .unwrap();

        assert!(response.is_success());
        let request = single_request(&server).await;
        assert!(request.url.query().unwrap() == "format=json");
    }

    #[tokio::test]
    async fn set_hold_sends_single_function() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1/thermostat"))
            .and(body_json(json!({
                "selection": {"selectionType": "registered", "selectionMatch": ""},
                "functions": [{
                    "type": "setHold",
                    "params": {
                        "coolHoldTemp": 760,
                        "heatHoldTemp": 690,
                        "holdType": "nextTransition"
                    }
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": ok_status()})))
            .expect(1)
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let hold = SetHoldParameters::new()
            .with_temperatures(760, 690)
            .with_hold_type(HoldType::NextTransition);

        client
            .set_hold(&CallContext::background(), &Selection::registered(), hold)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn send_message_reports_server_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1/thermostat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": {"code": 3, "message": "Validation error. Message text too long."}
            })))
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let response = client
            .send_message(
                &CallContext::background(),
                &Selection::registered(),
                SendMessageParameters::new("x".repeat(600)),
            )
            .await
            .unwrap();

        assert!(!response.is_success());
        assert_eq!(response.status.unwrap().code, Some(3));
    }
}

// ============================================================================
// Groups and reports
// ============================================================================

mod group_and_report {
    use super::*;

    #[tokio::test]
    async fn read_groups_uses_body_parameter() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/group"))
            .and(query_param("format", "json"))
            .and(query_param(
                "body",
                r#"{"selection":{"selectionType":"registered","selectionMatch":""}}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "groups": [{"groupRef": "3d03a5a4ab9b", "groupName": "Upstairs", "thermostats": ["318324702718"]}],
                "status": ok_status()
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let response = client
            .groups(&CallContext::background(), &Selection::registered())
            .await
            .unwrap();

        assert_eq!(response.groups[0].group_ref.as_deref(), Some("3d03a5a4ab9b"));
    }

    #[tokio::test]
    async fn update_groups_posts_groups() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1/group"))
            .and(query_param("format", "json"))
            .and(body_json(json!({
                "selection": {"selectionType": "registered", "selectionMatch": ""},
                "groups": [{"groupName": "Downstairs", "synchronizeSystemMode": true}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "groups": [{"groupRef": "a1b2c3", "groupName": "Downstairs"}],
                "status": ok_status()
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let group = Group {
            group_name: Some("Downstairs".to_string()),
            synchronize_system_mode: Some(true),
            ..Group::default()
        };

        let response = client
            .update_groups(&CallContext::background(), &Selection::registered(), &[group])
            .await
            .unwrap();

        assert_eq!(response.groups[0].group_ref.as_deref(), Some("a1b2c3"));
    }

    #[tokio::test]
    async fn meter_report_request_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/meterReport"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "reportList": [{
                    "thermostatIdentifier": "318324702718",
                    "meterList": [{"meterType": "energy", "columns": "tou,consumption", "data": ["u,1.5"]}]
                }],
                "status": ok_status()
            })))
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let parameters = MeterReportParameters::new(date(2024, 1, 1), date(2024, 1, 2))
            .with_start_interval(0)
            .with_end_interval(287);

        let response = client
            .meter_report(
                &CallContext::background(),
                &Selection::thermostats(["318324702718"]),
                &parameters,
            )
            .await
            .unwrap();
        assert_eq!(response.report_list.len(), 1);

        let request = single_request(&server).await;
        let body: serde_json::Value =
            serde_json::from_str(&query_value(&request, "body").unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "selection": {"selectionType": "thermostats", "selectionMatch": "318324702718"},
                "startDate": "2024-01-01",
                "startInterval": 0,
                "endDate": "2024-01-02",
                "endInterval": 287,
                "meters": "energy"
            })
        );
    }

    #[tokio::test]
    async fn runtime_report_request_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/runtimeReport"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "columns": "zoneAveTemp,zoneHvacMode",
                "reportList": [{
                    "thermostatIdentifier": "318324702718",
                    "rowCount": 1,
                    "rowList": ["2024-01-01,00:00:00,70.1,heat"]
                }],
                "sensorList": [],
                "status": ok_status()
            })))
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let parameters = RuntimeReportParameters::new(date(2024, 1, 1), date(2024, 1, 1))
            .with_columns(["zoneAveTemp", "zoneHvacMode"])
            .with_sensors(true);

        let response = client
            .runtime_report(&CallContext::background(), &Selection::registered(), &parameters)
            .await
            .unwrap();
        assert_eq!(response.column_names(), ["zoneAveTemp", "zoneHvacMode"]);

        let request = single_request(&server).await;
        let body: serde_json::Value =
            serde_json::from_str(&query_value(&request, "body").unwrap()).unwrap();
        assert_eq!(body["columns"], "zoneAveTemp,zoneHvacMode");
        assert_eq!(body["includeSensor"], true);
        assert_eq!(body["startDate"], "2024-01-01");
    }
}

// ============================================================================
// Error envelopes
// ============================================================================

mod errors {
    use super::*;

    #[tokio::test]
    async fn api_status_envelope_is_reported_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/thermostat"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "status": {
                    "code": 14,
                    "message": "Authentication token has expired. Refresh your tokens. API error code: 14"
                }
            })))
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let err = client
            .thermostats(&CallContext::background(), &Selection::registered(), None)
            .await
            .unwrap_err();

        assert_eq!(err.endpoint(), Some(Endpoint::Thermostat));
        let message = err.to_string();
        assert!(message.starts_with("thermostat: GET \""));
        assert!(message.contains(
            "401 Unauthorized: code 14: Authentication token has expired. Refresh your tokens. API error code: 14"
        ));

        let Error::Api(ApiError::Status { code, message, .. }) = err else {
            panic!("expected API status error, got {err:?}");
        };
        assert_eq!(code, 14);
        assert_eq!(
            message,
            "Authentication token has expired. Refresh your tokens. API error code: 14"
        );
    }

    #[tokio::test]
    async fn empty_success_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/group"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let err = client
            .groups(&CallContext::background(), &Selection::registered())
            .await
            .unwrap_err();

        let Error::Api(ApiError::Decode { source, summary }) = &err else {
            panic!("expected decode error, got {err:?}");
        };
        assert!(source.is_eof());
        assert_eq!(summary.status.as_u16(), 200);
        assert!(err.to_string().contains("EOF"));
    }

    #[tokio::test]
    async fn non_json_error_body_is_status_only() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/thermostat"))
            .respond_with(ResponseTemplate::new(503).set_body_string("<html>down</html>"))
            .mount(&server)
            .await;

        let client = authorized_client(&server);
        let err = client
            .thermostats(&CallContext::background(), &Selection::registered(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Api(ApiError::Http { .. })));
        assert!(err.to_string().ends_with("\": 503 Service Unavailable"));
    }

    #[tokio::test]
    async fn oauth_envelope_is_reported_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/authorize"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_client",
                "error_description": "Invalid client id.",
                "error_uri": "https://tools.ietf.org/html/rfc6749#section-5.2"
            })))
            .mount(&server)
            .await;

        let mut client = builder(&server).build().unwrap();
        let err = client
            .request_pin_authorization(&CallContext::background(), Scope::SmartRead)
            .await
            .unwrap_err();

        assert!(err.to_string().ends_with(
            "400 Bad Request: invalid_client: Invalid client id.: https://tools.ietf.org/html/rfc6749#section-5.2"
        ));
        let Error::Authorization(AuthorizationError::OAuth {
            error,
            description,
            uri,
            summary,
        }) = err
        else {
            panic!("expected OAuth error");
        };
        assert_eq!(error, "invalid_client");
        assert_eq!(description, "Invalid client id.");
        assert_eq!(uri, "https://tools.ietf.org/html/rfc6749#section-5.2");
        assert_eq!(summary.endpoint, Endpoint::Authorize);
        assert_eq!(client.authorization_state(), AuthorizationState::Unauthenticated);
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        let mut client = ClientBuilder::new()
            .with_application_key(APP_KEY)
            .with_tokens(tokens("access-1"))
            .build()
            .unwrap();
        client.set_base_url("http://127.0.0.1:1");

        let err = client
            .groups(&CallContext::background(), &Selection::registered())
            .await
            .unwrap_err();

        let Error::Transport(transport) = &err else {
            panic!("expected transport error, got {err:?}");
        };
        assert_eq!(transport.endpoint(), Endpoint::Group);
        assert!(matches!(transport.kind(), TransportErrorKind::Http(_)));
        assert!(err.to_string().starts_with("group: "));
    }
}

// ============================================================================
// PIN authorization flow
// ============================================================================

mod authorization {
    use super::*;

    fn tokens_body(access: &str, refresh: &str) -> serde_json::Value {
        json!({
            "access_token": access,
            "token_type": "Bearer",
            "expires_in": 3599,
            "refresh_token": refresh,
            "scope": "smartWrite"
        })
    }

    async fn mount_pin(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/authorize"))
            .and(query_param("response_type", "ecobeePin"))
            .and(query_param("client_id", APP_KEY))
            .and(query_param("scope", "smartWrite"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ecobeePin": "bv29",
                "code": "uiDaeLmYB3iB",
                "scope": "smartWrite",
                "expires_in": 9,
                "interval": 30
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn full_pin_flow() {
        let server = MockServer::start().await;
        mount_pin(&server).await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(query_param("grant_type", "ecobeePin"))
            .and(query_param("code", "uiDaeLmYB3iB"))
            .and(query_param("client_id", APP_KEY))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(tokens_body("access-1", "refresh-1")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let ctx = CallContext::background();
        let mut client = builder(&server).build().unwrap();

        let pin = client
            .request_pin_authorization(&ctx, Scope::SmartWrite)
            .await
            .unwrap();
        assert_eq!(pin.pin(), "bv29");
        assert_eq!(pin.polling_interval(), Duration::from_secs(30));
        assert_eq!(pin.scope(), Some(Scope::SmartWrite));
        assert_eq!(
            client.authorization_state(),
            AuthorizationState::PendingUserApproval
        );

        let before = Utc::now();
        let issued = client.request_tokens(&ctx).await.unwrap();
        let after = Utc::now();
        assert_eq!(issued.access_token(), "access-1");

        assert_eq!(client.authorization_state(), AuthorizationState::Authorized);
        let stored = client.tokens().unwrap();
        assert_eq!(stored.access_token, "access-1");
        assert_eq!(stored.refresh_token, "refresh-1");
        assert_eq!(stored.token_type, "Bearer");

        let lifetime = TimeDelta::seconds(3599);
        assert!(stored.access_token_expires_on >= before + lifetime);
        assert!(stored.access_token_expires_on <= after + lifetime);

        let refresh_expires_on = stored.refresh_token_expires_on.unwrap();
        assert!(refresh_expires_on >= before + Months::new(12));
        assert!(refresh_expires_on <= after + Months::new(12));
    }

    #[tokio::test]
    async fn pending_approval_leaves_state_unchanged() {
        let server = MockServer::start().await;
        mount_pin(&server).await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "authorization_pending",
                "error_description": "Waiting for user to authorize application.",
                "error_uri": "https://tools.ietf.org/html/rfc6749#section-5.2"
            })))
            .mount(&server)
            .await;

        let ctx = CallContext::background();
        let mut client = builder(&server).build().unwrap();
        client
            .request_pin_authorization(&ctx, Scope::SmartWrite)
            .await
            .unwrap();

        let err = client.request_tokens(&ctx).await.unwrap_err();
        let Error::Authorization(auth) = &err else {
            panic!("expected authorization error, got {err:?}");
        };
        assert_eq!(auth.error_type(), Some("authorization_pending"));
        assert_eq!(auth.summary().endpoint, Endpoint::Token);

        assert_eq!(
            client.authorization_state(),
            AuthorizationState::PendingUserApproval
        );
        assert!(client.tokens().is_none());
    }

    #[tokio::test]
    async fn request_tokens_without_pin_sends_nothing() {
        let server = MockServer::start().await;
        let mut client = builder(&server).build().unwrap();

        let err = client
            .request_tokens(&CallContext::background())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidState(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn refresh_replaces_tokens_and_next_call_uses_them() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(query_param("grant_type", "refresh_token"))
            .and(query_param("code", "refresh-1"))
            .and(query_param("client_id", APP_KEY))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(tokens_body("access-2", "refresh-2")),
            )
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/1/group"))
            .and(header("authorization", "Bearer access-2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"groups": [], "status": ok_status()})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let ctx = CallContext::background();
        let mut client = authorized_client(&server);

        client.refresh_tokens(&ctx).await.unwrap();
        let stored = client.tokens().unwrap();
        assert_eq!(stored.access_token, "access-2");
        assert_eq!(stored.refresh_token, "refresh-2");

        client.groups(&ctx, &Selection::registered()).await.unwrap();
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_tokens() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "The authorization grant, token or refresh token is invalid.",
                "error_uri": "https://tools.ietf.org/html/rfc6749#section-5.2"
            })))
            .mount(&server)
            .await;

        let mut client = authorized_client(&server);
        let original = client.tokens().cloned().unwrap();

        let err = client
            .refresh_tokens(&CallContext::background())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Authorization(AuthorizationError::OAuth { .. })
        ));
        assert_eq!(client.tokens(), Some(&original));
    }

    #[tokio::test]
    async fn refresh_without_tokens_sends_nothing() {
        let server = MockServer::start().await;
        let mut client = builder(&server).build().unwrap();

        let err = client
            .refresh_tokens(&CallContext::background())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidState(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn undecodable_token_response_keeps_state() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token_type": "Bearer"})))
            .mount(&server)
            .await;

        let mut client = authorized_client(&server);
        let err = client
            .refresh_tokens(&CallContext::background())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Authorization(AuthorizationError::Decode { .. })
        ));
        assert_eq!(client.tokens().unwrap().access_token, "access-1");
    }

    #[tokio::test]
    async fn expired_access_token_is_still_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/group"))
            .and(header("authorization", "Bearer stale"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"groups": [], "status": ok_status()})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut expired = tokens("stale");
        expired.access_token_expires_on = Utc::now() - TimeDelta::minutes(5);
        let client = builder(&server).with_tokens(expired).build().unwrap();

        client
            .groups(&CallContext::background(), &Selection::registered())
            .await
            .unwrap();
    }
}

// ============================================================================
// Transport behavior
// ============================================================================

mod transport {
    use super::*;

    async fn slow_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"groups": [], "status": ok_status()}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn cancellation_aborts_in_flight_call() {
        let server = slow_server().await;
        let client = authorized_client(&server);

        let token = CancellationToken::new();
        let ctx = CallContext::background().with_cancellation(token.clone());
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            token.cancel();
        });

        let started = std::time::Instant::now();
        let err = client
            .groups(&ctx, &Selection::registered())
            .await
            .unwrap_err();

        assert!(started.elapsed() < Duration::from_secs(4));
        let Error::Transport(transport) = &err else {
            panic!("expected transport error, got {err:?}");
        };
        assert!(transport.is_cancelled());
        assert_eq!(transport.endpoint(), Endpoint::Group);
    }

    #[tokio::test]
    async fn deadline_aborts_slow_call() {
        let server = slow_server().await;
        let client = authorized_client(&server);
        let ctx = CallContext::background().with_timeout(Duration::from_millis(100));

        let err = client
            .groups(&ctx, &Selection::registered())
            .await
            .unwrap_err();

        let Error::Transport(transport) = &err else {
            panic!("expected transport error, got {err:?}");
        };
        assert!(transport.is_timeout());
        assert!(matches!(
            transport.kind(),
            TransportErrorKind::DeadlineExceeded(d) if *d == Duration::from_millis(100)
        ));
    }

    #[tokio::test]
    async fn already_cancelled_context_sends_nothing() {
        let server = MockServer::start().await;
        let client = authorized_client(&server);

        let token = CancellationToken::new();
        token.cancel();
        let ctx = CallContext::background().with_cancellation(token);

        let err = client
            .groups(&ctx, &Selection::registered())
            .await
            .unwrap_err();

        assert!(matches!(&err, Error::Transport(t) if t.is_cancelled()));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn authorization_header_overrides_default_header() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/group"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"groups": [], "status": ok_status()})),
            )
            .mount(&server)
            .await;

        let client = builder(&server)
            .with_tokens(tokens("access-1"))
            .with_header("Authorization", "Custom overridden")
            .with_header("x-request-source", "dashboard")
            .build()
            .unwrap();

        client
            .groups(&CallContext::background(), &Selection::registered())
            .await
            .unwrap();

        let request = single_request(&server).await;
        let authorization: Vec<_> = request.headers.get_all("authorization").iter().collect();
        assert_eq!(authorization.len(), 1);
        assert_eq!(authorization[0], "Bearer access-1");
        assert_eq!(request.headers.get("x-request-source").unwrap(), "dashboard");
    }

    #[tokio::test]
    async fn default_headers_reach_authorization_endpoints() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/authorize"))
            .and(header("x-request-source", "dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ecobeePin": "bv29",
                "code": "uiDaeLmYB3iB",
                "scope": "smartRead",
                "expires_in": 9,
                "interval": 30
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(header("x-request-source", "dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "access-1",
                "token_type": "Bearer",
                "expires_in": 3599,
                "refresh_token": "refresh-1",
                "scope": "smartRead"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = CallContext::background();
        let mut client = builder(&server)
            .with_header("x-request-source", "dashboard")
            .build()
            .unwrap();

        client
            .request_pin_authorization(&ctx, Scope::SmartRead)
            .await
            .unwrap();
        client.request_tokens(&ctx).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
        assert!(
            requests
                .iter()
                .all(|r| r.headers.get("x-request-source").is_some_and(|v| v == "dashboard"))
        );
    }

    #[tokio::test]
    async fn content_type_overrides_default_header_on_post() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/1/thermostat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": ok_status()})))
            .mount(&server)
            .await;

        let client = builder(&server)
            .with_tokens(tokens("access-1"))
            .with_header("Content-Type", "text/plain")
            .build()
            .unwrap();

        client
            .update_thermostat(
                &CallContext::background(),
                &Selection::registered(),
                None,
                &[ecobee_lib::model::Function::reset_preferences()],
            )
            .await
            .unwrap();

        let request = single_request(&server).await;
        assert_eq!(
            request.headers.get("content-type").unwrap(),
            "application/json; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn delegated_client_keeps_caller_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/1/group"))
            .and(header("authorization", "Bearer from-caller"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"groups": [], "status": ok_status()})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = ClientBuilder::new()
            .with_base_url(server.uri())
            .with_header("authorization", "Bearer from-caller")
            .build_delegated()
            .unwrap();

        client
            .groups(&CallContext::background(), &Selection::registered())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn api_version_and_base_url_are_configurable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/2/thermostatSummary"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "revisionList": [],
                "thermostatCount": 0,
                "statusList": [],
                "status": ok_status()
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut client = authorized_client(&server);
        client.set_api_version(2);

        let summary = client
            .thermostat_summary(&CallContext::background(), &Selection::registered())
            .await
            .unwrap();
        assert_eq!(summary.thermostat_count, Some(0));
    }
}
