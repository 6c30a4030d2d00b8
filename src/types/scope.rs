// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Authorization scopes.

string_enum! {
    /// The intent of the application towards the user's account.
    ///
    /// # Examples
    ///
    /// ```
    /// use ecobee_lib::types::Scope;
    ///
    /// assert_eq!(Scope::SmartWrite.as_str(), "smartWrite");
    /// assert_eq!("ems".parse::<Scope>().unwrap(), Scope::Ems);
    /// ```
    Scope, "scope" {
        /// Read access to thermostats.
        SmartRead => "smartRead",
        /// Read and write access to thermostats.
        SmartWrite => "smartWrite",
        /// Energy management system access across a management set.
        Ems => "ems",
    }
}
