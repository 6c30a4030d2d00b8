// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group operations.

use serde::Serialize;

use crate::auth::Authenticator;
use crate::client::{Client, transport_error};
use crate::error::Result;
use crate::model::{Group, Selection};
use crate::protocol::{CallContext, Endpoint, RequestBuilder};
use crate::response::GroupResponse;

#[derive(Debug, Serialize)]
struct GroupRequest<'a> {
    selection: &'a Selection,
    #[serde(skip_serializing_if = "<[Group]>::is_empty")]
    groups: &'a [Group],
}

impl<A: Authenticator> Client<A> {
    /// Reads the groups of the selected thermostats.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the request
    /// fails and [`Error::Api`](crate::Error::Api) if the server rejects it.
    pub async fn groups(&self, ctx: &CallContext, selection: &Selection) -> Result<GroupResponse> {
        let endpoint = Endpoint::Group;
        let request = RequestBuilder::get(self.endpoint_url(endpoint))
            .query("format", "json")
            .json_query(
                "body",
                &GroupRequest {
                    selection,
                    groups: &[],
                },
            )
            .map_err(transport_error(endpoint))?;

        self.execute_api(ctx, endpoint, request).await
    }

    /// Replaces the groups of the selected thermostats.
    ///
    /// A group without a `group_ref` is created; a group with an empty
    /// thermostat list is deleted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`](crate::Error::Transport) if the request
    /// fails and [`Error::Api`](crate::Error::Api) if the server rejects it.
    pub async fn update_groups(
        &self,
        ctx: &CallContext,
        selection: &Selection,
        groups: &[Group],
    ) -> Result<GroupResponse> {
        let endpoint = Endpoint::Group;
        let request = RequestBuilder::post(self.endpoint_url(endpoint))
            .query("format", "json")
            .json_body(&GroupRequest {
                selection,
                groups,
            })
            .map_err(transport_error(endpoint))?;

        self.execute_api(ctx, endpoint, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_envelope_has_only_selection() {
        let selection = Selection::registered();
        let json = serde_json::to_string(&GroupRequest {
            selection: &selection,
            groups: &[],
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"selection":{"selectionType":"registered","selectionMatch":""}}"#
        );
    }

    #[test]
    fn update_envelope_lists_groups() {
        let selection = Selection::registered();
        let groups = [Group {
            group_name: Some("Upstairs".to_string()),
            synchronize_alerts: Some(true),
            ..Group::default()
        }];
        let json = serde_json::to_value(GroupRequest {
            selection: &selection,
            groups: &groups,
        })
        .unwrap();
        assert_eq!(
            json["groups"],
            serde_json::json!([{"groupName": "Upstairs", "synchronizeAlerts": true}])
        );
    }
}
