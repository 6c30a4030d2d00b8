// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selection match types.

string_enum! {
    /// The kind of match data carried by a selection.
    SelectionType, "selection type" {
        /// `selectionMatch` is a comma-separated list of thermostat identifiers.
        Thermostats => "thermostats",
        /// All thermostats registered to the current user.
        Registered => "registered",
        /// `selectionMatch` is a management set path (EMS accounts only).
        ManagementSet => "managementSet",
    }
}
