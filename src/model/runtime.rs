// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Runtime, electricity and weather readings.
//!
//! All objects in this module are read-only.

use serde::{Deserialize, Serialize};

/// The last known running state of the thermostat.
///
/// Temperatures are in tenths of a degree Fahrenheit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runtime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_rev: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_connected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disconnect_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_status_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_date: Option<String>,
    /// Last updated 5 minute interval of the day, 0 to 287.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_temperature: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_humidity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_temperature: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_icon_mode: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_heat: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_cool: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_humidity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_dehumidity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_fan_mode: Option<String>,
    /// Valid `[min, max]` range for a heat set point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_heat_range: Option<Vec<i64>>,
    /// Valid `[min, max]` range for a cool set point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_cool_range: Option<Vec<i64>>,
}

/// The last three 5 minute interval readings sent by the thermostat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reading_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_date: Option<String>,
    /// Last updated 5 minute interval of the day, 0 to 287.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_interval: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_temperature: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_humidity: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_heat: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_cool: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_humidity: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_dehumidity: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dm_offset: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hvac_mode: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_pump1: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_pump2: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_heat1: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_heat2: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_heat3: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool1: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool2: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidifier: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dehumidifier: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub economizer: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ventilator: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_electricity_bill: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_electricity_bill: Option<i64>,
}

/// Electricity readings associated with a thermostat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Electricity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<ElectricityDevice>>,
}

/// An energy recording device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricityDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<ElectricityTier>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption: Option<Vec<String>>,
}

/// Consumption and cost for one pricing tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectricityTier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

/// Current weather and the forecast for the thermostat location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_station: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecasts: Option<Vec<WeatherForecast>>,
}

/// A single forecast entry. The first entry is the current condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_symbol: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_humidity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dewpoint: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_bearing: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pop: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_high: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_low: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sky: Option<i64>,
}
