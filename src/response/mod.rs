// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Success responses returned by the client operations.
//!
//! API responses carry the server's [`Status`](crate::model::Status)
//! alongside their payload. The authorization responses expose their
//! fields through accessors because they hold credentials.

mod authorization;
mod group;
mod report;
mod status;
mod thermostat;

pub use authorization::{PinAuthorizationResponse, TokensResponse};
pub use group::GroupResponse;
pub use report::{MeterReportResponse, RuntimeReportResponse};
pub use status::ApiStatusResponse;
pub use thermostat::{Revision, ThermostatResponse, ThermostatSummaryResponse};
