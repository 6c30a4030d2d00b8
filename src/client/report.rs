// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Report operations.
//!
//! Reports cover whole days in UTC, split into 288 five-minute intervals
//! numbered from 0. The interval bounds are optional and default to the
//! whole day on the server.

use chrono::NaiveDate;
use serde::Serialize;

use crate::auth::Authenticator;
use crate::client::{Client, transport_error};
use crate::error::Result;
use crate::model::Selection;
use crate::protocol::{CallContext, Endpoint, RequestBuilder};
use crate::response::{MeterReportResponse, RuntimeReportResponse};
use crate::types::MeterType;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parameters of [`Client::meter_report`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ecobee_lib::client::MeterReportParameters;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let parameters = MeterReportParameters::new(day, day).with_end_interval(143);
/// assert_eq!(parameters.end_interval(), Some(143));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterReportParameters {
    start_date: NaiveDate,
    start_interval: Option<u32>,
    end_date: NaiveDate,
    end_interval: Option<u32>,
    meters: Vec<MeterType>,
}

impl MeterReportParameters {
    /// Requests the energy meter between two dates, both included.
    #[must_use]
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            start_interval: None,
            end_date,
            end_interval: None,
            meters: vec![MeterType::Energy],
        }
    }

    /// Sets the first interval of the start date.
    #[must_use]
    pub fn with_start_interval(mut self, interval: u32) -> Self {
        self.start_interval = Some(interval);
        self
    }

    /// Sets the last interval of the end date.
    #[must_use]
    pub fn with_end_interval(mut self, interval: u32) -> Self {
        self.end_interval = Some(interval);
        self
    }

    /// Replaces the requested meters.
    #[must_use]
    pub fn with_meters(mut self, meters: impl IntoIterator<Item = MeterType>) -> Self {
        self.meters = meters.into_iter().collect();
        self
    }

    /// Returns the start date.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the first interval of the start date.
    #[must_use]
    pub fn start_interval(&self) -> Option<u32> {
        self.start_interval
    }

    /// Returns the end date.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the last interval of the end date.
    #[must_use]
    pub fn end_interval(&self) -> Option<u32> {
        self.end_interval
    }

    /// Returns the requested meters.
    #[must_use]
    pub fn meters(&self) -> &[MeterType] {
        &self.meters
    }
}

/// Parameters of [`Client::runtime_report`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use ecobee_lib::client::RuntimeReportParameters;
///
/// let parameters = RuntimeReportParameters::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
/// )
/// .with_columns(["zoneAveTemp", "zoneHvacMode"])
/// .with_sensors(true);
///
/// assert_eq!(parameters.columns(), ["zoneAveTemp", "zoneHvacMode"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeReportParameters {
    start_date: NaiveDate,
    start_interval: Option<u32>,
    end_date: NaiveDate,
    end_interval: Option<u32>,
    columns: Vec<String>,
    include_sensor: Option<bool>,
}

impl RuntimeReportParameters {
    /// Requests runtime data between two dates, both included.
    #[must_use]
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            start_interval: None,
            end_date,
            end_interval: None,
            columns: Vec::new(),
            include_sensor: None,
        }
    }

    /// Sets the first interval of the start date.
    #[must_use]
    pub fn with_start_interval(mut self, interval: u32) -> Self {
        self.start_interval = Some(interval);
        self
    }

    /// Sets the last interval of the end date.
    #[must_use]
    pub fn with_end_interval(mut self, interval: u32) -> Self {
        self.end_interval = Some(interval);
        self
    }

    /// Replaces the requested columns, e.g. `zoneAveTemp` or `auxHeat1`.
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Requests the sensor report alongside the runtime rows.
    #[must_use]
    pub fn with_sensors(mut self, include_sensor: bool) -> Self {
        self.include_sensor = Some(include_sensor);
        self
    }

    /// Returns the start date.
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the end date.
    #[must_use]
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the requested columns.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MeterReportRequest<'a> {
    selection: &'a Selection,
    start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_interval: Option<u32>,
    end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_interval: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    meters: String,
}

impl<'a> MeterReportRequest<'a> {
    fn new(selection: &'a Selection, parameters: &MeterReportParameters) -> Self {
        let meters = parameters
            .meters
            .iter()
            .map(MeterType::as_str)
            .collect::<Vec<_>>()
            .join(",");

        Self {
            selection,
            start_date: parameters.start_date.format(DATE_FORMAT).to_string(),
            start_interval: parameters.start_interval,
            end_date: parameters.end_date.format(DATE_FORMAT).to_string(),
            end_interval: parameters.end_interval,
            meters,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RuntimeReportRequest<'a> {
    selection: &'a Selection,
    start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_interval: Option<u32>,
    end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_interval: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    columns: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_sensor: Option<bool>,
}

impl<'a> RuntimeReportRequest<'a> {
    fn new(selection: &'a Selection, parameters: &RuntimeReportParameters) -> Self {
        Self {
            selection,
            start_date: parameters.start_date.format(DATE_FORMAT).to_string(),
            start_interval: parameters.start_interval,
            end_date: parameters.end_date.format(DATE_FORMAT).to_string(),
            end_interval: parameters.end_interval,
            columns: parameters.columns.join(","),
            include_sensor: parameters.include_sensor,
        }
    }
}

impl<A: Authenticator> Client<A> {
    /// Retrieves historical meter readings of the selected thermostats.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the request
    /// fails and [`Error::Api`](crate::Error::Api) if the server rejects it.
    pub async fn meter_report(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        parameters: &MeterReportParameters,
    ) -> Result<MeterReportResponse> {
        let endpoint = Endpoint::MeterReport;
        let request = RequestBuilder::get(self.endpoint_url(endpoint))
            .query("format", "json")
            .json_query("body", &MeterReportRequest::new(selection, parameters))
            .map_err(transport_error(endpoint))?;

        self.execute_api(ctx, endpoint, request).await
    }

    /// Retrieves historical runtime rows of the selected thermostats.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the request
    /// fails and [`Error::Api`](crate::Error::Api) if the server rejects it.
    pub async fn runtime_report(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        parameters: &RuntimeReportParameters,
    ) -> Result<RuntimeReportResponse> {
        let endpoint = Endpoint::RuntimeReport;
        let request = RequestBuilder::get(self.endpoint_url(endpoint))
            .query("format", "json")
            .json_query("body", &RuntimeReportRequest::new(selection, parameters))
            .map_err(transport_error(endpoint))?;

        self.execute_api(ctx, endpoint, request).await
    }
}
