// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat operations.

use serde::Serialize;

use crate::auth::Authenticator;
use crate::client::{Client, transport_error};
use crate::error::Result;
use crate::model::{Function, Page, Selection, Thermostat};
use crate::protocol::{CallContext, Endpoint, RequestBuilder};
use crate::response::{ApiStatusResponse, ThermostatResponse, ThermostatSummaryResponse};

#[derive(Debug, Serialize)]
struct ThermostatRequest<'a> {
    selection: &'a Selection,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<&'a Page>,
}

#[derive(Debug, Serialize)]
struct SummaryRequest<'a> {
    selection: &'a Selection,
}

#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    selection: &'a Selection,
    #[serde(skip_serializing_if = "Option::is_none")]
    thermostat: Option<&'a Thermostat>,
    #[serde(skip_serializing_if = "<[Function]>::is_empty")]
    functions: &'a [Function],
}

impl<A: Authenticator> Client<A> {
    /// Reads the selected thermostats, with the sub-objects requested by
    /// the `include_*` flags of `selection`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the request
    /// fails and [`Error::Api`](crate::Error::Api) if the server rejects it.
    pub async fn thermostats(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        page: Option<&Page>,
    ) -> Result<ThermostatResponse> {
        let endpoint = Endpoint::Thermostat;
        let request = RequestBuilder::get(self.endpoint_url(endpoint))
            .json_query("json", &ThermostatRequest { selection, page })
            .map_err(transport_error(endpoint))?;

        self.execute_api(ctx, endpoint, request).await
    }

    /// Reads the revision summary of the selected thermostats.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the request
    /// fails and [`Error::Api`](crate::Error::Api) if the server rejects it.
    pub async fn thermostat_summary(
        &self,
        ctx: &CallContext,
        selection: &Selection,
    ) -> Result<ThermostatSummaryResponse> {
        let endpoint = Endpoint::ThermostatSummary;
        let request = RequestBuilder::get(self.endpoint_url(endpoint))
            .json_query("json", &SummaryRequest { selection })
            .map_err(transport_error(endpoint))?;

        self.execute_api(ctx, endpoint, request).await
    }

    /// Updates the selected thermostats.
    ///
    /// `thermostat` carries the properties to change; fields left as `None`
    /// are untouched. `functions` run after the properties are applied, in
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the request
    /// fails and [`Error::Api`](crate::Error::Api) if the server rejects it.
    pub async fn update_thermostat(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        thermostat: Option<&Thermostat>,
        functions: &[Function],
    ) -> Result<ApiStatusResponse> {
        let endpoint = Endpoint::Thermostat;
        let envelope = UpdateRequest {
            selection,
            thermostat,
            functions,
        };
        let request = RequestBuilder::post(self.endpoint_url(endpoint))
            .query("format", "json")
            .json_body(&envelope)
            .map_err(transport_error(endpoint))?;

        self.execute_api(ctx, endpoint, request).await
    }
}
