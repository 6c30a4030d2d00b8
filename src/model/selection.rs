// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request and response envelope building blocks shared by every endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::SelectionType;

/// Defines which thermostats a request targets and which sub-objects the
/// response includes.
///
/// Each `include_*` flag requests the thermostat sub-object of the same
/// name, e.g. `include_runtime` adds [`Thermostat::runtime`](crate::model::Thermostat::runtime).
/// A flag left as `None` is omitted from the request and the server treats
/// it as `false`.
///
/// # Examples
///
/// ```
/// use ecobee_lib::model::Selection;
///
/// let selection = Selection {
///     include_runtime: Some(true),
///     include_sensors: Some(true),
///     ..Selection::registered()
/// };
///
/// let json = serde_json::to_string(&selection).unwrap();
/// assert_eq!(
///     json,
///     r#"{"selectionType":"registered","selectionMatch":"","includeRuntime":true,"includeSensors":true}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    /// How `selection_match` is interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_type: Option<SelectionType>,
    /// Match data for `selection_type`, e.g. comma-separated thermostat identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_match: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_runtime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_extended_runtime: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_electricity: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_settings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_location: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_program: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_device: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_technician: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_utility: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_management: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_alerts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_reminders: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_weather: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_house_details: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_oem_cfg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_equipment_status: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_notification_settings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_privacy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_version: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_security_settings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_sensors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_audio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_energy: Option<bool>,
}

impl Selection {
    /// Selects every thermostat registered to the authorized user.
    #[must_use]
    pub fn registered() -> Self {
        Self {
            selection_type: Some(SelectionType::Registered),
            selection_match: Some(String::new()),
            ..Self::default()
        }
    }

    /// Selects the thermostats with the given identifiers.
    #[must_use]
    pub fn thermostats<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let identifiers: Vec<String> = identifiers
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();

        Self {
            selection_type: Some(SelectionType::Thermostats),
            selection_match: Some(identifiers.join(",")),
            ..Self::default()
        }
    }

    /// Selects the thermostats of a management set.
    #[must_use]
    pub fn management_set(path: impl Into<String>) -> Self {
        Self {
            selection_type: Some(SelectionType::ManagementSet),
            selection_match: Some(path.into()),
            ..Self::default()
        }
    }
}

/// Paging information, both as a request parameter and in responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// The page retrieved, or the page requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// The total number of pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<i64>,
    /// The number of objects on this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    /// The total number of objects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

impl Page {
    /// Requests a specific page.
    #[must_use]
    pub fn number(page: i64) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }
}

/// The processing status returned with every response.
///
/// A code of `0` means success. Responses decoded from HTTP 200 can still
/// carry a non-zero code, so callers should check [`Status::is_success`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// The ecobee status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// The detailed status message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Status {
    /// Returns `true` when the status code is `0`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// A named remote operation with its parameters, sent in the `functions`
/// list of a thermostat update.
///
/// Constructors for the documented functions live in
/// [`crate::function`]; [`Function::new`] covers the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Function {
    /// The function name, e.g. `setHold`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub function_type: Option<String>,
    /// The function parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

impl Function {
    /// Creates a function call without parameters.
    #[must_use]
    pub fn new(function_type: impl Into<String>) -> Self {
        Self {
            function_type: Some(function_type.into()),
            params: None,
        }
    }

    /// Adds a parameter, replacing any previous value with the same name.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Adds a parameter only when `value` is `Some`.
    #[must_use]
    pub fn with_optional_param<V: Into<Value>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with_param(name, value),
            None => self,
        }
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref().and_then(|params| params.get(name))
    }
}
