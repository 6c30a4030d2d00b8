// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parameter values used by thermostat functions.

string_enum! {
    /// How an alert is acknowledged.
    AckType, "ack type" {
        /// Accept the alert.
        Accept => "accept",
        /// Decline the alert.
        Decline => "decline",
        /// Defer the alert.
        Defer => "defer",
        /// Mark the alert as unacknowledged.
        Unacknowledged => "unacknowledged",
    }
}

string_enum! {
    /// Fan mode applied during an event.
    FanMode, "fan mode" {
        /// Fan runs only when heating or cooling.
        Auto => "auto",
        /// Fan runs continuously.
        On => "on",
    }
}

string_enum! {
    /// How long a hold lasts.
    ///
    /// # Examples
    ///
    /// ```
    /// use ecobee_lib::types::HoldType;
    ///
    /// assert_eq!(HoldType::NextTransition.to_string(), "nextTransition");
    /// ```
    HoldType, "hold type" {
        /// Until the end date and time supplied with the hold.
        DateTime => "dateTime",
        /// For the number of hours supplied with the hold.
        HoldHours => "holdHours",
        /// Until cancelled.
        Indefinite => "indefinite",
        /// Until the next program transition.
        NextTransition => "nextTransition",
    }
}

string_enum! {
    /// Target state of a smart plug.
    PlugState, "plug state" {
        /// Switch the plug off.
        Off => "off",
        /// Switch the plug on.
        On => "on",
        /// Return the plug to its program.
        Resume => "resume",
    }
}
