// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Data objects of the ecobee API.
//!
//! These are plain serde records. Every field is optional and absent fields
//! are skipped when serializing, so a struct built with `..Default::default()`
//! doubles as a partial update: only what is set reaches the server, and an
//! explicit `Some(false)` or `Some(0)` is never confused with "not set".
//!
//! # Examples
//!
//! ```
//! use ecobee_lib::model::{Settings, Thermostat};
//!
//! let patch = Thermostat {
//!     settings: Some(Settings {
//!         hvac_mode: Some("cool".to_string()),
//!         ..Settings::default()
//!     }),
//!     ..Thermostat::default()
//! };
//!
//! assert_eq!(
//!     serde_json::to_string(&patch).unwrap(),
//!     r#"{"settings":{"hvacMode":"cool"}}"#
//! );
//! ```

mod device;
mod group;
mod program;
mod report;
mod runtime;
mod selection;
mod settings;
mod thermostat;

pub use device::{
    Action, Device, EquipmentSetting, GeneralSetting, LimitSetting, NotificationSettings, Output,
    RemoteSensor, RemoteSensorCapability, Sensor, State,
};
pub use group::Group;
pub use program::{Climate, Event, Program};
pub use report::{
    MeterReport, MeterReportData, RuntimeReport, RuntimeSensorMetadata, RuntimeSensorReport,
};
pub use runtime::{
    Electricity, ElectricityDevice, ElectricityTier, ExtendedRuntime, Runtime, Weather,
    WeatherForecast,
};
pub use selection::{Function, Page, Selection, Status};
pub use settings::Settings;
pub use thermostat::{
    Alert, Audio, Energy, HouseDetails, Location, Management, SecuritySettings, Technician,
    Thermostat, ThermostatPrivacy, Utility, Version, VoiceEngine,
};
