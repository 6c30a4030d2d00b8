// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Deserialize;

use crate::model::Status;

/// Response of calls that return nothing but a status, such as
/// thermostat updates.
///
/// # Examples
///
/// ```
/// use ecobee_lib::response::ApiStatusResponse;
///
/// let response: ApiStatusResponse =
///     serde_json::from_str(r#"{"status":{"code":0,"message":""}}"#).unwrap();
/// assert!(response.is_success());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiStatusResponse {
    /// The processing status.
    pub status: Option<Status>,
}

impl ApiStatusResponse {
    /// Returns `true` if the server reported status code `0`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.as_ref().is_some_and(Status::is_success)
    }
}
