// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request/response plumbing shared by every ecobee endpoint.
//!
//! A call goes through three stages:
//!
//! 1. [`RequestBuilder`] assembles method, URL, query string, headers and
//!    body into a [`PreparedRequest`].
//! 2. [`invoke`] sends it on the configured `reqwest::Client`, honouring the
//!    caller's [`CallContext`], and reads the whole body.
//! 3. [`process_api_response`] or [`process_authorization_response`] turns
//!    the raw response into a typed value or a typed error, depending on the
//!    endpoint family.

mod request;
mod response;
mod transport;

use std::fmt;

pub(crate) use request::{PreparedRequest, RequestBuilder};
pub(crate) use response::{process_api_response, process_authorization_response};
pub use transport::CallContext;
pub(crate) use transport::{RawResponse, invoke};

/// The ecobee endpoints used by this library.
///
/// # Examples
///
/// ```
/// use ecobee_lib::protocol::Endpoint;
///
/// assert_eq!(
///     Endpoint::Thermostat.url("https://api.ecobee.com/", 1),
///     "https://api.ecobee.com/1/thermostat"
/// );
/// assert_eq!(
///     Endpoint::Token.url("https://api.ecobee.com/", 1),
///     "https://api.ecobee.com/token"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Thermostat reads and updates.
    Thermostat,
    /// Thermostat revision summary.
    ThermostatSummary,
    /// Group reads and updates.
    Group,
    /// Historical meter readings.
    MeterReport,
    /// Historical runtime readings.
    RuntimeReport,
    /// PIN authorization.
    Authorize,
    /// Token issuance and refresh.
    Token,
}

impl Endpoint {
    /// Returns the endpoint name as it appears in the URL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Thermostat => "thermostat",
            Self::ThermostatSummary => "thermostatSummary",
            Self::Group => "group",
            Self::MeterReport => "meterReport",
            Self::RuntimeReport => "runtimeReport",
            Self::Authorize => "authorize",
            Self::Token => "token",
        }
    }

    /// Returns `true` for the authorize and token endpoints, which use the
    /// OAuth error envelope and carry no version segment.
    #[must_use]
    pub const fn is_authorization(&self) -> bool {
        matches!(self, Self::Authorize | Self::Token)
    }

    /// Builds the absolute URL of this endpoint.
    ///
    /// `base_url` must end with `/`.
    #[must_use]
    pub fn url(&self, base_url: &str, api_version: u32) -> String {
        if self.is_authorization() {
            format!("{base_url}{}", self.as_str())
        } else {
            format!("{base_url}{api_version}/{}", self.as_str())
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
