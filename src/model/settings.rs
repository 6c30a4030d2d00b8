// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat settings.

use serde::{Deserialize, Serialize};

/// The user configurable settings of a thermostat.
///
/// Most fields are writable through
/// [`Client::update_thermostat`](crate::Client::update_thermostat).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hvac_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_service_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_remind_me: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_between_service: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remind_me_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ventilator_min_on_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_remind_technician: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ei_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cold_temp_alert: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cold_temp_alert_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_temp_alert: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hot_temp_alert_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_stages: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_stages: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_set_back: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_set_forward: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_save_set_back: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_save_set_forward: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_heat_pump: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_forced_air: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_boiler: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_humidifier: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_erv: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_hrv: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condensation_avoid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_celsius: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_time_format12: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidifier_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlight_on_intensity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlight_sleep_intensity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlight_off_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_tick_volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_alert_volume: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressor_protection_min_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressor_protection_min_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage1_heating_differential_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage1_cooling_differential_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage1_heating_dissipation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage1_cooling_dissipation_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_pump_reversal_on_cool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_control_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_min_on_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_cool_min_delta: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_correction: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_pump_ground_water: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_electric: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_dehumidifier: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dehumidifier_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dehumidifier_level: Option<i64>,
    #[serde(rename = "dehumidifyWithAC", skip_serializing_if = "Option::is_none")]
    pub dehumidify_with_ac: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dehumidify_overcool_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_heat_cool_feature_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_offline_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_min_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_max_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_min_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_max_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_range_high: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_range_low: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_range_high: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cool_range_low: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_access_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_access_setting: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_runtime_alert: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_outdoor_temp_alert: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_max_outdoor_temp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_runtime_alert_notify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_outdoor_temp_alert_notify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_runtime_alert_notify_technician: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_outdoor_temp_alert_notify_technician: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_pre_heating: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_pre_cooling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installer_code_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dr_accept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_rental_property: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_zone_controller: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_start_delay_cool: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub random_start_delay_heat: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_high_alert: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_low_alert: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_heat_pump_alerts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_alerts_on_idt: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_alert_notify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_alert_notify_technician: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_alert_notify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_alert_notify_technician: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_electricity_bill_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_electricity_bill_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_projected_electricity_bill_alert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity_billing_day_of_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity_bill_cycle_months: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity_bill_start_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ventilator_min_on_time_home: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ventilator_min_on_time_away: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backlight_off_during_sleep: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_away: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_circulation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_me_comfort: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ventilator_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_ventilator_timer_on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ventilator_off_date_time: Option<String>,
    #[serde(rename = "hasUVFilter", skip_serializing_if = "Option::is_none")]
    pub has_uv_filter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooling_lockout: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ventilator_free_cooling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dehumidify_when_heating: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ventilator_dehumidify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_setting: Option<i64>,
}
