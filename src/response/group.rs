// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Deserialize;

use crate::model::{Group, Status};

/// Response of group reads and updates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GroupResponse {
    /// The groups of the selected thermostats.
    pub groups: Vec<Group>,
    /// The processing status.
    pub status: Option<Status>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_groups_decode_as_empty() {
        let response: GroupResponse =
            serde_json::from_str(r#"{"status":{"code":0,"message":""}}"#).unwrap();
        assert!(response.groups.is_empty());
        assert!(response.status.unwrap().is_success());
    }

    #[test]
    fn groups_decode() {
        let json = r#"{
            "groups": [{"groupRef": "3d03a5a4ab9b", "groupName": "Upstairs", "thermostats": ["318324702718"]}],
            "status": {"code": 0, "message": ""}
        }"#;
        let response: GroupResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.groups.len(), 1);
        assert_eq!(response.groups[0].group_name.as_deref(), Some("Upstairs"));
    }
}
