// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat groups.

use serde::{Deserialize, Serialize};

/// A group of thermostats sharing some user preferences.
///
/// A thermostat listed in several groups only joins the first one. Updating a
/// group without its `group_ref` creates a new group, and sending an empty
/// thermostat list deletes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_alerts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_system_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_schedule: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_quick_save: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_reminders: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_contractor_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_user_preferences: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_utility_info: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_location: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_reset: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synchronize_vacation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermostats: Option<Vec<String>>,
}
