// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The thermostat object and its descriptive sub-objects.

use serde::{Deserialize, Serialize};

use super::{
    Device, Electricity, Event, ExtendedRuntime, NotificationSettings, Program, RemoteSensor,
    Runtime, Settings, Weather,
};

/// The central object of the API; every other object hangs off a thermostat.
///
/// Sub-objects are only present when requested through the matching
/// `include*` flag of the [`Selection`](super::Selection). When used as an
/// update patch, only the fields that are set are sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thermostat {
    /// The thermostat serial number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermostat_rev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_registered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermostat_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<Alert>>,
    // Reminder objects are not documented by the vendor; kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Runtime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_runtime: Option<ExtendedRuntime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity: Option<Electricity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<Device>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<Energy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technician: Option<Technician>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utility: Option<Utility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management: Option<Management>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<Program>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_details: Option<HouseDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem_cfg: Option<serde_json::Value>,
    /// Comma-separated list of the equipment currently running, empty when idle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_settings: Option<NotificationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<ThermostatPrivacy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_settings: Option<SecuritySettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_subscription: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_sensors: Option<Vec<RemoteSensor>>,
}

/// An alert raised by the thermostat or by the ecobee server.
///
/// Alerts are acknowledged with [`Function::acknowledge`](super::Function::acknowledge)
/// using `acknowledge_ref`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledge_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_operator_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_idt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_web: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remind_me_later: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermostat_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<String>,
}

/// Audio configuration of the thermostat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback_volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microphone_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_alert_volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_tick_volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_engines: Option<Vec<VoiceEngine>>,
}

/// A voice assistant linked to the thermostat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceEngine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Energy feature configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Energy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tou: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_feature_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comfort_preferences: Option<String>,
}

/// Firmware version information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thermostat_firmware_version: Option<String>,
}

/// Privacy settings. Only readable with implicit authentication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermostatPrivacy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_contractor_alerts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_contractor_hvac_reports: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_contractor_heat_pump_configuration: Option<bool>,
}

/// Access restrictions configured on the thermostat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_access_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_user_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_save_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacation_access: Option<bool>,
}

/// Physical location of the thermostat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone_offset_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_daylight_saving: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_coordinates: Option<String>,
}

/// Contractor contact information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contractor_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
}

/// Utility company information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Utility {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
}

/// Management company information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Management {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert_idt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_alert_web: Option<bool>,
}

/// Details about the house the thermostat is installed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_floors: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_rooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_occupants: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_efficiency: Option<i64>,
}
