// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat read responses.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ValueError;
use crate::model::{Page, Status, Thermostat};

/// Response of a thermostat read.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThermostatResponse {
    /// Paging information for the thermostat list.
    pub page: Option<Page>,
    /// The selected thermostats.
    pub thermostat_list: Vec<Thermostat>,
    /// The processing status.
    pub status: Option<Status>,
}

/// Response of a thermostat summary read.
///
/// The summary is the cheap way to poll for changes: compare the revisions
/// with the previous poll and only read the thermostats whose revisions
/// moved.
///
/// # Examples
///
/// ```
/// use ecobee_lib::response::ThermostatSummaryResponse;
///
/// let json = r#"{
///     "revisionList": ["318324702718:Living Room:true:170721184405:170721184405:170721185220:170721185215"],
///     "thermostatCount": 1,
///     "statusList": ["318324702718:heatPump,fan"],
///     "status": {"code": 0, "message": ""}
/// }"#;
///
/// let summary: ThermostatSummaryResponse = serde_json::from_str(json).unwrap();
/// let revision = &summary.revisions().unwrap()[0];
/// assert_eq!(revision.thermostat_name, "Living Room");
/// assert!(revision.connected);
/// assert_eq!(summary.equipment_status("318324702718"), Some(vec!["heatPump", "fan"]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThermostatSummaryResponse {
    /// Colon-separated revision records, one per thermostat.
    pub revision_list: Vec<String>,
    /// The number of selected thermostats.
    pub thermostat_count: Option<i64>,
    /// Colon-separated equipment status records, one per thermostat.
    pub status_list: Vec<String>,
    /// The processing status.
    pub status: Option<Status>,
}

impl ThermostatSummaryResponse {
    /// Parses every revision record.
    ///
    /// # Errors
    ///
    /// Returns an error if a record has fewer than seven fields or an invalid
    /// connected flag.
    pub fn revisions(&self) -> Result<Vec<Revision>, ValueError> {
        self.revision_list.iter().map(|r| r.parse()).collect()
    }

    /// Returns the running equipment of a thermostat, or `None` if the
    /// thermostat is not part of the summary.
    ///
    /// An empty list means nothing is running.
    #[must_use]
    pub fn equipment_status(&self, thermostat_identifier: &str) -> Option<Vec<&str>> {
        self.status_list.iter().find_map(|record| {
            let (identifier, equipment) = record.split_once(':')?;
            (identifier == thermostat_identifier)
                .then(|| equipment.split(',').filter(|e| !e.is_empty()).collect())
        })
    }
}

/// One record of [`ThermostatSummaryResponse::revision_list`].
///
/// The revisions are opaque values; only their changes are meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    /// The thermostat identifier.
    pub thermostat_identifier: String,
    /// The thermostat name.
    pub thermostat_name: String,
    /// Whether the thermostat is connected to the server.
    pub connected: bool,
    /// Changes when the program, settings or hold state change.
    pub thermostat_revision: String,
    /// Changes when alerts are raised or acknowledged.
    pub alerts_revision: String,
    /// Changes when the thermostat reports new runtime data.
    pub runtime_revision: String,
    /// Changes when a 5 minute interval of runtime data is complete.
    pub interval_revision: String,
}

impl FromStr for Revision {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValueError::new("revision", s);

        // The name is user-chosen and may itself contain colons.
        let (identifier, rest) = s.split_once(':').ok_or_else(invalid)?;
        let mut fields = rest.rsplitn(6, ':');
        let (
            Some(interval),
            Some(runtime),
            Some(alerts),
            Some(thermostat),
            Some(connected),
            Some(name),
        ) = (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        )
        else {
            return Err(invalid());
        };

        let connected = match connected {
            "true" => true,
            "false" => false,
            _ => return Err(invalid()),
        };

        Ok(Self {
            thermostat_identifier: identifier.to_string(),
            thermostat_name: name.to_string(),
            connected,
            thermostat_revision: thermostat.to_string(),
            alerts_revision: alerts.to_string(),
            runtime_revision: runtime.to_string(),
            interval_revision: interval.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thermostat_response_decodes() {
        let json = r#"{
            "page": {"page": 1, "totalPages": 1, "pageSize": 1, "total": 1},
            "thermostatList": [{"identifier": "318324702718", "name": "Hall", "isRegistered": true}],
            "status": {"code": 0, "message": ""}
        }"#;

        let response: ThermostatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.page.unwrap().total_pages, Some(1));
        assert_eq!(
            response.thermostat_list[0].identifier.as_deref(),
            Some("318324702718")
        );
    }

    #[test]
    fn revision_name_may_contain_colons() {
        let summary = ThermostatSummaryResponse {
            revision_list: vec![
                "318324702718:Hall:true:1:2:3:4".to_string(),
                "318324702719:Den: Upstairs:false:5:6:7:8".to_string(),
            ],
            ..ThermostatSummaryResponse::default()
        };

        let revisions = summary.revisions().unwrap();
        assert_eq!(revisions[0].thermostat_name, "Hall");
        assert_eq!(revisions[1].thermostat_identifier, "318324702719");
        assert_eq!(revisions[1].thermostat_name, "Den: Upstairs");
        assert!(!revisions[1].connected);
        assert_eq!(revisions[1].thermostat_revision, "5");
        assert_eq!(revisions[1].interval_revision, "8");
    }

    #[test]
    fn revision_rejects_short_record() {
        let err = "318324702718:Hall:true".parse::<Revision>().unwrap_err();
        assert_eq!(err.kind(), "revision");
    }

    #[test]
    fn revision_rejects_bad_connected_flag() {
        assert!("1:Hall:yes:a:b:c:d".parse::<Revision>().is_err());
    }

    #[test]
    fn equipment_status_idle_and_unknown() {
        let summary = ThermostatSummaryResponse {
            status_list: vec!["318324702718:".to_string()],
            ..ThermostatSummaryResponse::default()
        };
        assert_eq!(summary.equipment_status("318324702718"), Some(vec![]));
        assert_eq!(summary.equipment_status("000000000000"), None);
    }
}
