// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Devices, sensors and remote sensors attached to a thermostat.

use serde::{Deserialize, Serialize};

/// A device attached to the thermostat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensors: Option<Vec<Sensor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Output>>,
}

/// A sensor of a [`Device`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_id: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_bits: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bconstant: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermistor_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_correction: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_voltage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<State>>,
}

/// A sensor state with the actions it triggers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
}

/// An action triggered when a [`State`] is reached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivation_delay: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_action_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_adjust_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_adjust_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activate_relay: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activate_relay_open: Option<bool>,
}

/// An output relay of a [`Device`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_id: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivation_time: Option<i64>,
}

/// A wireless remote sensor paired with the thermostat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSensor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_use: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability: Option<Vec<RemoteSensorCapability>>,
}

/// One capability (temperature, occupancy, ...) of a [`RemoteSensor`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteSensorCapability {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Alert and reminder configuration of a thermostat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notifications_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<EquipmentSetting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general: Option<Vec<GeneralSetting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Vec<LimitSetting>>,
}

/// Notification settings for a piece of equipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_last_changed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_life: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_life_units: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remind_me_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remind_technician: Option<bool>,
}

/// Notification settings for a general alert type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remind_technician: Option<bool>,
}

/// Notification settings for a limit alert type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remind_technician: Option<bool>,
}
