// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed enumerations for the string-typed values of the ecobee API.
//!
//! The API transports these values as plain strings. Modelling them as
//! enums rejects typos when a request is built instead of when the server
//! answers.
//!
//! # Types
//!
//! - [`Scope`] - Permission requested during PIN authorization
//! - [`SelectionType`] - How a [`Selection`](crate::model::Selection) matches thermostats
//! - [`HoldType`] - Duration of a hold created by a function call
//! - [`FanMode`] - Fan mode for vacations
//! - [`AckType`] - Acknowledgement of an alert
//! - [`PlugState`] - Target state of a smart plug
//! - [`MeterType`] - Meter requested in a meter report

/// Declares a string-backed enum with serde, `Display` and `FromStr` support.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the value as sent on the wire.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $value, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $value => Ok(Self::$variant), )+
                    _ => Err(crate::error::ValueError::new($kind, s)),
                }
            }
        }
    };
}

mod function;
mod report;
mod scope;
mod selection;

pub use function::{AckType, FanMode, HoldType, PlugState};
pub use report::MeterType;
pub use scope::Scope;
pub use selection::SelectionType;
