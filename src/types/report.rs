// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Report related types.

string_enum! {
    /// A meter that can be requested in a meter report.
    MeterType, "meter type" {
        /// Energy consumption meter.
        Energy => "energy",
    }
}
