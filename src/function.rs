// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat functions.
//!
//! Functions are remote operations sent in the `functions` list of a
//! thermostat update. Each parameter type here converts into a
//! [`Function`]; the matching client method sends it on its own, and
//! several functions can be batched with
//! [`Client::update_thermostat`](crate::Client::update_thermostat).
//!
//! Date-times are in thermostat local time. Temperatures are in tenths of
//! a degree Fahrenheit.
//!
//! # Examples
//!
//! ```
//! use ecobee_lib::function::{ResumeProgramParameters, SendMessageParameters};
//! use ecobee_lib::model::Function;
//!
//! let batch: Vec<Function> = vec![
//!     ResumeProgramParameters::new(true).into(),
//!     SendMessageParameters::new("Welcome home").into(),
//! ];
//! assert_eq!(batch[1].function_type.as_deref(), Some("sendMessage"));
//! ```

use chrono::NaiveDateTime;

use crate::auth::Authenticator;
use crate::client::Client;
use crate::error::Result;
use crate::model::{Function, Selection};
use crate::protocol::CallContext;
use crate::response::ApiStatusResponse;
use crate::types::{AckType, FanMode, HoldType, PlugState};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Hold duration shared by [`SetHoldParameters`] and
/// [`ControlPlugParameters`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct HoldWindow {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    hold_type: Option<HoldType>,
    hold_hours: Option<u32>,
}

impl HoldWindow {
    fn apply(&self, function: Function) -> Function {
        function
            .with_date_time("start", self.start)
            .with_date_time("end", self.end)
            .with_optional_param("holdType", self.hold_type.map(|t| t.as_str()))
            .with_optional_param("holdHours", self.hold_hours)
    }
}

/// Parameters of the `acknowledge` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcknowledgeParameters {
    thermostat_identifier: String,
    ack_ref: String,
    ack_type: AckType,
    remind_me_later: Option<bool>,
}

impl AcknowledgeParameters {
    /// Acknowledges the alert `ack_ref` of a thermostat.
    #[must_use]
    pub fn new(
        thermostat_identifier: impl Into<String>,
        ack_ref: impl Into<String>,
        ack_type: AckType,
    ) -> Self {
        Self {
            thermostat_identifier: thermostat_identifier.into(),
            ack_ref: ack_ref.into(),
            ack_type,
            remind_me_later: None,
        }
    }

    /// Asks to be reminded later. Only meaningful with [`AckType::Defer`].
    #[must_use]
    pub fn with_remind_me_later(mut self, remind_me_later: bool) -> Self {
        self.remind_me_later = Some(remind_me_later);
        self
    }
}

impl From<AcknowledgeParameters> for Function {
    fn from(p: AcknowledgeParameters) -> Self {
        Function::new("acknowledge")
            .with_param("thermostatIdentifier", p.thermostat_identifier)
            .with_param("ackRef", p.ack_ref)
            .with_param("ackType", p.ack_type.as_str())
            .with_optional_param("remindMeLater", p.remind_me_later)
    }
}

/// Parameters of the `controlPlug` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlPlugParameters {
    plug_name: String,
    plug_state: PlugState,
    hold: HoldWindow,
}

impl ControlPlugParameters {
    /// Puts the plug `plug_name` into `plug_state`.
    #[must_use]
    pub fn new(plug_name: impl Into<String>, plug_state: PlugState) -> Self {
        Self {
            plug_name: plug_name.into(),
            plug_state,
            hold: HoldWindow::default(),
        }
    }

    /// Sets when the hold starts.
    #[must_use]
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.hold.start = Some(start);
        self
    }

    /// Sets when the hold ends. Used with [`HoldType::DateTime`].
    #[must_use]
    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.hold.end = Some(end);
        self
    }

    /// Sets how long the hold lasts.
    #[must_use]
    pub fn with_hold_type(mut self, hold_type: HoldType) -> Self {
        self.hold.hold_type = Some(hold_type);
        self
    }

    /// Sets the hold length. Used with [`HoldType::HoldHours`].
    #[must_use]
    pub fn with_hold_hours(mut self, hours: u32) -> Self {
        self.hold.hold_hours = Some(hours);
        self
    }
}

impl From<ControlPlugParameters> for Function {
    fn from(p: ControlPlugParameters) -> Self {
        let function = Function::new("controlPlug")
            .with_param("plugName", p.plug_name)
            .with_param("plugState", p.plug_state.as_str());
        p.hold.apply(function)
    }
}

/// Parameters of the `createVacation` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVacationParameters {
    name: String,
    cool_hold_temp: i64,
    heat_hold_temp: i64,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    fan: Option<FanMode>,
    fan_min_on_time: Option<u32>,
}

impl CreateVacationParameters {
    /// Creates a vacation named `name` holding the given temperatures.
    #[must_use]
    pub fn new(name: impl Into<String>, cool_hold_temp: i64, heat_hold_temp: i64) -> Self {
        Self {
            name: name.into(),
            cool_hold_temp,
            heat_hold_temp,
            start: None,
            end: None,
            fan: None,
            fan_min_on_time: None,
        }
    }

    /// Sets when the vacation starts.
    #[must_use]
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets when the vacation ends.
    #[must_use]
    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the fan mode during the vacation.
    #[must_use]
    pub fn with_fan(mut self, fan: FanMode) -> Self {
        self.fan = Some(fan);
        self
    }

    /// Sets the minimum number of minutes per hour the fan runs.
    #[must_use]
    pub fn with_fan_min_on_time(mut self, minutes: u32) -> Self {
        self.fan_min_on_time = Some(minutes);
        self
    }
}

impl From<CreateVacationParameters> for Function {
    fn from(p: CreateVacationParameters) -> Self {
        Function::new("createVacation")
            .with_param("name", p.name)
            .with_param("coolHoldTemp", p.cool_hold_temp)
            .with_param("heatHoldTemp", p.heat_hold_temp)
            .with_date_time("start", p.start)
            .with_date_time("end", p.end)
            .with_optional_param("fan", p.fan.map(|f| f.as_str()))
            // The API types this one as a string.
            .with_optional_param("fanMinOnTime", p.fan_min_on_time.map(|m| m.to_string()))
    }
}

/// Parameters of the `deleteVacation` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteVacationParameters {
    name: String,
}

impl DeleteVacationParameters {
    /// Deletes the vacation named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<DeleteVacationParameters> for Function {
    fn from(p: DeleteVacationParameters) -> Self {
        Function::new("deleteVacation").with_param("name", p.name)
    }
}

/// Parameters of the `resumeProgram` function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeProgramParameters {
    resume_all: bool,
}

impl ResumeProgramParameters {
    /// Removes the running event. With `resume_all`, every event is
    /// removed and the thermostat returns to its program.
    #[must_use]
    pub fn new(resume_all: bool) -> Self {
        Self { resume_all }
    }
}

impl From<ResumeProgramParameters> for Function {
    fn from(p: ResumeProgramParameters) -> Self {
        Function::new("resumeProgram").with_param("resumeAll", p.resume_all)
    }
}

/// Parameters of the `sendMessage` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageParameters {
    text: String,
}

impl SendMessageParameters {
    /// Displays `text` on the thermostat.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<SendMessageParameters> for Function {
    fn from(p: SendMessageParameters) -> Self {
        Function::new("sendMessage").with_param("text", p.text)
    }
}

/// Parameters of the `setHold` function.
///
/// # Examples
///
/// ```
/// use ecobee_lib::function::SetHoldParameters;
/// use ecobee_lib::model::Function;
/// use ecobee_lib::types::HoldType;
///
/// let function: Function = SetHoldParameters::new()
///     .with_temperatures(770, 680)
///     .with_hold_type(HoldType::NextTransition)
///     .into();
///
/// assert_eq!(
///     serde_json::to_value(&function).unwrap(),
///     serde_json::json!({
///         "type": "setHold",
///         "params": {"coolHoldTemp": 770, "heatHoldTemp": 680, "holdType": "nextTransition"}
///     })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetHoldParameters {
    cool_hold_temp: Option<i64>,
    heat_hold_temp: Option<i64>,
    hold_climate_ref: Option<String>,
    hold: HoldWindow,
}

impl SetHoldParameters {
    /// Creates an empty hold. Set either temperatures or a climate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds the given cool and heat set points.
    #[must_use]
    pub fn with_temperatures(mut self, cool_hold_temp: i64, heat_hold_temp: i64) -> Self {
        self.cool_hold_temp = Some(cool_hold_temp);
        self.heat_hold_temp = Some(heat_hold_temp);
        self
    }

    /// Holds the settings of a climate, e.g. `away`.
    #[must_use]
    pub fn with_climate(mut self, climate_ref: impl Into<String>) -> Self {
        self.hold_climate_ref = Some(climate_ref.into());
        self
    }

    /// Sets when the hold starts.
    #[must_use]
    pub fn with_start(mut self, start: NaiveDateTime) -> Self {
        self.hold.start = Some(start);
        self
    }

    /// Sets when the hold ends. Used with [`HoldType::DateTime`].
    #[must_use]
    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.hold.end = Some(end);
        self
    }

    /// Sets how long the hold lasts.
    #[must_use]
    pub fn with_hold_type(mut self, hold_type: HoldType) -> Self {
        self.hold.hold_type = Some(hold_type);
        self
    }

    /// Sets the hold length. Used with [`HoldType::HoldHours`].
    #[must_use]
    pub fn with_hold_hours(mut self, hours: u32) -> Self {
        self.hold.hold_hours = Some(hours);
        self
    }
}

impl From<SetHoldParameters> for Function {
    fn from(p: SetHoldParameters) -> Self {
        let function = Function::new("setHold")
            .with_optional_param("coolHoldTemp", p.cool_hold_temp)
            .with_optional_param("heatHoldTemp", p.heat_hold_temp)
            .with_optional_param("holdClimateRef", p.hold_climate_ref);
        p.hold.apply(function)
    }
}

/// Parameters of the `unlinkVoiceEngine` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlinkVoiceEngineParameters {
    engine_name: String,
}

impl UnlinkVoiceEngineParameters {
    /// Disables the voice assistant `engine_name`, e.g. `alexa`.
    #[must_use]
    pub fn new(engine_name: impl Into<String>) -> Self {
        Self {
            engine_name: engine_name.into(),
        }
    }
}

impl From<UnlinkVoiceEngineParameters> for Function {
    fn from(p: UnlinkVoiceEngineParameters) -> Self {
        Function::new("unlinkVoiceEngine").with_param("engineName", p.engine_name)
    }
}

/// Parameters of the `updateSensor` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSensorParameters {
    name: String,
    device_id: String,
    sensor_id: String,
}

impl UpdateSensorParameters {
    /// Renames the remote sensor identified by `device_id` and `sensor_id`.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        device_id: impl Into<String>,
        sensor_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            device_id: device_id.into(),
            sensor_id: sensor_id.into(),
        }
    }
}

impl From<UpdateSensorParameters> for Function {
    fn from(p: UpdateSensorParameters) -> Self {
        Function::new("updateSensor")
            .with_param("name", p.name)
            .with_param("deviceId", p.device_id)
            .with_param("sensorId", p.sensor_id)
    }
}

impl Function {
    fn with_date_time(self, prefix: &str, value: Option<NaiveDateTime>) -> Self {
        match value {
            Some(value) => self
                .with_param(
                    format!("{prefix}Date"),
                    value.format(DATE_FORMAT).to_string(),
                )
                .with_param(
                    format!("{prefix}Time"),
                    value.format(TIME_FORMAT).to_string(),
                ),
            None => self,
        }
    }

    /// Builds an `acknowledge` function.
    #[must_use]
    pub fn acknowledge(parameters: AcknowledgeParameters) -> Self {
        parameters.into()
    }

    /// Builds a `controlPlug` function.
    #[must_use]
    pub fn control_plug(parameters: ControlPlugParameters) -> Self {
        parameters.into()
    }

    /// Builds a `createVacation` function.
    #[must_use]
    pub fn create_vacation(parameters: CreateVacationParameters) -> Self {
        parameters.into()
    }

    /// Builds a `deleteVacation` function.
    #[must_use]
    pub fn delete_vacation(parameters: DeleteVacationParameters) -> Self {
        parameters.into()
    }

    /// Builds a `resetPreferences` function.
    #[must_use]
    pub fn reset_preferences() -> Self {
        Function::new("resetPreferences")
    }

    /// Builds a `resumeProgram` function.
    #[must_use]
    pub fn resume_program(parameters: ResumeProgramParameters) -> Self {
        parameters.into()
    }

    /// Builds a `sendMessage` function.
    #[must_use]
    pub fn send_message(parameters: SendMessageParameters) -> Self {
        parameters.into()
    }

    /// Builds a `setHold` function.
    #[must_use]
    pub fn set_hold(parameters: SetHoldParameters) -> Self {
        parameters.into()
    }

    /// Builds an `unlinkVoiceEngine` function.
    #[must_use]
    pub fn unlink_voice_engine(parameters: UnlinkVoiceEngineParameters) -> Self {
        parameters.into()
    }

    /// Builds an `updateSensor` function.
    #[must_use]
    pub fn update_sensor(parameters: UpdateSensorParameters) -> Self {
        parameters.into()
    }
}

impl<A: Authenticator> Client<A> {
    async fn call_function(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        function: Function,
    ) -> Result<ApiStatusResponse> {
        self.update_thermostat(ctx, selection, None, std::slice::from_ref(&function))
            .await
    }

    /// Acknowledges an alert.
    ///
    /// # Errors
    ///
    /// Fails like [`update_thermostat`](Self::update_thermostat).
    pub async fn acknowledge(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        parameters: AcknowledgeParameters,
    ) -> Result<ApiStatusResponse> {
        self.call_function(ctx, selection, parameters.into()).await
    }

    /// Switches a smart plug by placing a hold on it.
    ///
    /// # Errors
    ///
    /// Fails like [`update_thermostat`](Self::update_thermostat).
    pub async fn control_plug(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        parameters: ControlPlugParameters,
    ) -> Result<ApiStatusResponse> {
        self.call_function(ctx, selection, parameters.into()).await
    }

    /// Creates a vacation event.
    ///
    /// # Errors
    ///
    /// Fails like [`update_thermostat`](Self::update_thermostat).
    pub async fn create_vacation(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        parameters: CreateVacationParameters,
    ) -> Result<ApiStatusResponse> {
        self.call_function(ctx, selection, parameters.into()).await
    }

    /// Deletes a vacation event.
    ///
    /// # Errors
    ///
    /// Fails like [`update_thermostat`](Self::update_thermostat).
    pub async fn delete_vacation(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        parameters: DeleteVacationParameters,
    ) -> Result<ApiStatusResponse> {
        self.call_function(ctx, selection, parameters.into()).await
    }

    /// Restores the factory default preferences.
    ///
    /// # Errors
    ///
    /// Fails like [`update_thermostat`](Self::update_thermostat).
    pub async fn reset_preferences(
        &self,
        ctx: &CallContext,
        selection: &Selection,
    ) -> Result<ApiStatusResponse> {
        self.call_function(ctx, selection, Function::reset_preferences())
            .await
    }

    /// Removes the running event unless it is a mandatory demand response.
    ///
    /// # Errors
    ///
    /// Fails like [`update_thermostat`](Self::update_thermostat).
    pub async fn resume_program(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        parameters: ResumeProgramParameters,
    ) -> Result<ApiStatusResponse> {
        self.call_function(ctx, selection, parameters.into()).await
    }

    /// Displays an alert message on the thermostat.
    ///
    /// # Errors
    ///
    /// Fails like [`update_thermostat`](Self::update_thermostat).
    pub async fn send_message(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        parameters: SendMessageParameters,
    ) -> Result<ApiStatusResponse> {
        self.call_function(ctx, selection, parameters.into()).await
    }

    /// Places a temperature or climate hold.
    ///
    /// # Errors
    ///
    /// Fails like [`update_thermostat`](Self::update_thermostat).
    pub async fn set_hold(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        parameters: SetHoldParameters,
    ) -> Result<ApiStatusResponse> {
        self.call_function(ctx, selection, parameters.into()).await
    }

    /// Disables a voice assistant on the thermostat.
    ///
    /// # Errors
    ///
    /// Fails like [`update_thermostat`](Self::update_thermostat).
    pub async fn unlink_voice_engine(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        parameters: UnlinkVoiceEngineParameters,
    ) -> Result<ApiStatusResponse> {
        self.call_function(ctx, selection, parameters.into()).await
    }

    /// Renames a remote sensor.
    ///
    /// # Errors
    ///
    /// Fails like [`update_thermostat`](Self::update_thermostat).
    pub async fn update_sensor(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        parameters: UpdateSensorParameters,
    ) -> Result<ApiStatusResponse> {
        self.call_function(ctx, selection, parameters.into()).await
    }
}
