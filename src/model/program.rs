// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedules, climates and events.

use serde::{Deserialize, Serialize};

use crate::model::RemoteSensor;

/// The thermostat schedule.
///
/// `schedule` holds one row per day of the week (Monday first), each with 48
/// half-hour slots naming a climate reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climates: Option<Vec<Climate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_climate_ref: Option<String>,
}

/// A named comfort setting referenced by the schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Climate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_occupied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_optimized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_fan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_fan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ventilator_min_on_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensors: Option<Vec<RemoteSensor>>,
}

/// A hold, vacation, demand response or other event active or scheduled on the thermostat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_occupied: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_cool_off: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_heat_off: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_hold_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_hold_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ventilator_min_on_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_optional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_temperature_relative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_relative_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_relative_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_temperature_absolute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty_cycle_percentage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_min_on_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupied_sensor_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unoccupied_sensor_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dr_ramp_up_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dr_ramp_up_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_climate_ref: Option<String>,
}
