// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Deserialize;

use crate::model::{MeterReport, RuntimeReport, RuntimeSensorReport, Status};

/// Response of a meter report request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeterReportResponse {
    /// One report per selected thermostat.
    pub report_list: Vec<MeterReport>,
    /// The processing status.
    pub status: Option<Status>,
}

/// Response of a runtime report request.
///
/// Each row of [`RuntimeReport::row_list`] is a CSV line whose first two
/// values are the date and time, followed by the requested columns in
/// order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuntimeReportResponse {
    /// The column names echoed by the server, as a CSV string.
    pub columns: Option<String>,
    /// One report per selected thermostat.
    pub report_list: Vec<RuntimeReport>,
    /// Sensor reports, present when sensor data was requested.
    pub sensor_list: Vec<RuntimeSensorReport>,
    /// The processing status.
    pub status: Option<Status>,
}

impl RuntimeReportResponse {
    /// Returns the echoed column names.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns
            .as_deref()
            .map(|columns| columns.split(',').filter(|c| !c.is_empty()).collect())
            .unwrap_or_default()
    }
}
