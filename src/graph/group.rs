use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub object_id: String,
    #[serde(default)]
    pub display_name: String,
}

/// Body of `GET /groups`.
#[derive(Debug, Deserialize)]
pub struct GroupList {
    #[serde(rename = "value")]
    pub groups: Vec<Group>,
}

/// Body of `POST /users/{id}/getMemberGroups`.
#[derive(Debug, Deserialize)]
pub struct MemberGroups {
    #[serde(rename = "value")]
    pub group_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberGroupsRequest {
    pub security_enabled_only: bool,
}

/// Inner join of the membership ids against the group listing. Output follows
/// the membership order; ids without a listed group are dropped. Matched
/// groups leave the index, so a repeated id only counts once. When the listing
/// holds the same id twice the first entry wins.
#[must_use]
pub fn resolve_memberships(groups: Vec<Group>, group_ids: &[String]) -> Vec<Group> {
    let mut by_id: HashMap<String, Group> = HashMap::with_capacity(groups.len());
    for group in groups {
        by_id.entry(group.object_id.clone()).or_insert(group);
    }

    group_ids
        .iter()
        .filter_map(|id| by_id.remove(id))
        .collect()
}
