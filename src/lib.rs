// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ecobee_lib` - A Rust client library for the ecobee thermostat API.
//!
//! This library provides async APIs to read and control ecobee thermostats
//! through the vendor's REST API.
//!
//! # Supported Features
//!
//! - **PIN authorization**: Request a PIN, exchange it for tokens, refresh them
//! - **Thermostats**: Read thermostats and their revision summary, update settings
//! - **Functions**: Holds, vacations, messages, smart plugs, alert acknowledgement
//! - **Groups**: Read and update thermostat groups
//! - **Reports**: Historical meter and runtime data
//!
//! Every call takes a [`CallContext`] for cancellation and deadlines. The
//! library never retries and never refreshes tokens on its own.
//!
//! # Quick Start
//!
//! ## Authorizing an Application
//!
//! ```no_run
//! use ecobee_lib::protocol::CallContext;
//! use ecobee_lib::types::Scope;
//! use ecobee_lib::Client;
//!
//! #[tokio::main]
//! async fn main() -> ecobee_lib::Result<()> {
//!     let ctx = CallContext::background();
//!     let mut client = Client::builder()
//!         .with_application_key("my-application-key")
//!         .build()?;
//!
//!     let pin = client.request_pin_authorization(&ctx, Scope::SmartWrite).await?;
//!     println!("Enter PIN {} in the ecobee portal", pin.pin());
//!
//!     // Once the user has entered the PIN:
//!     tokio::time::sleep(pin.polling_interval()).await;
//!     client.request_tokens(&ctx).await?;
//!
//!     // Persist the tokens to resume the session later.
//!     let tokens = client.tokens().cloned();
//!     # let _ = tokens;
//!     Ok(())
//! }
//! ```
//!
//! ## Reading and Updating Thermostats
//!
//! ```no_run
//! use ecobee_lib::function::SetHoldParameters;
//! use ecobee_lib::model::Selection;
//! use ecobee_lib::protocol::CallContext;
//! use ecobee_lib::types::HoldType;
//! use ecobee_lib::Client;
//!
//! # async fn example(client: Client) -> ecobee_lib::Result<()> {
//! let ctx = CallContext::background();
//! let selection = Selection {
//!     include_runtime: Some(true),
//!     ..Selection::registered()
//! };
//!
//! let response = client.thermostats(&ctx, &selection, None).await?;
//! for thermostat in &response.thermostat_list {
//!     let temperature = thermostat.runtime.as_ref().and_then(|r| r.actual_temperature);
//!     println!("{:?}: {:?}", thermostat.name, temperature);
//! }
//!
//! let hold = SetHoldParameters::new()
//!     .with_temperatures(760, 690)
//!     .with_hold_type(HoldType::NextTransition);
//! client.set_hold(&ctx, &selection, hold).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod function;
pub mod model;
pub mod protocol;
pub mod response;
pub mod types;

pub use auth::{AuthorizationState, Authenticator, Delegated, SelfManaged, TokenSet};
pub use client::{Client, ClientBuilder, MeterReportParameters, RuntimeReportParameters};
pub use error::{
    ApiError, AuthorizationError, Error, ResponseSummary, Result, TransportError,
    TransportErrorKind, ValueError,
};
pub use protocol::{CallContext, Endpoint};
pub use types::{AckType, FanMode, HoldType, MeterType, PlugState, Scope, SelectionType};
