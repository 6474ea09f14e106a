//! API models matching the admin workflow backend schema.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A workflow record as returned by the backend.
///
/// Only the fields the admin screens read are typed; anything else the
/// server sends rides along in `extra` so a record survives a fetch and a
/// later re-submit without losing keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One node of the hierarchical workflows view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowTreeNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WorkflowTreeNode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Envelope returned by `GET /admin/workflows/tree`.
#[derive(Debug, Deserialize)]
pub struct WorkflowsTreeResponse {
    pub data: Vec<WorkflowTreeNode>,
}

/// Payload for creating a workflow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Partial update payload for `PATCH /admin/workflows/:id`.
///
/// Unset fields serialize as explicit nulls; the store strips empty-valued
/// keys from the serialized form before the request goes out, so only the
/// fields the caller actually filled in reach the server.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WorkflowUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<u32>,
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Optional key/value constraints forwarded verbatim to the list and tree
/// endpoints as query-string parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkflowQuery(Vec<(String, String)>);

impl WorkflowQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn workflow_keeps_unknown_fields_across_round_trip() {
        let raw = json!({ "id": 3, "name": "Invoices", "owner": "ops", "priority": 2 });
        let workflow: Workflow = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(workflow.id, Some(3));
        assert_eq!(workflow.extra.get("owner"), Some(&json!("ops")));
        assert_eq!(serde_json::to_value(&workflow).unwrap(), raw);
    }

    #[test]
    fn tree_node_children_default_to_empty() {
        let node: WorkflowTreeNode = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert!(node.children.is_empty());
    }

    #[test]
    fn tree_nodes_nest() {
        let node: WorkflowTreeNode = serde_json::from_value(json!({
            "id": 1,
            "children": [{ "id": 2, "children": [{ "id": 3 }] }],
        }))
        .unwrap();

        assert_eq!(node.children[0].id, Some(2));
        assert_eq!(node.children[0].children[0].id, Some(3));
    }

    #[test]
    fn update_serializes_unset_fields_as_null() {
        let update = WorkflowUpdate { name: Some("Renamed".into()), ..Default::default() };
        let value = serde_json::to_value(&update).unwrap();

        assert_eq!(value["name"], json!("Renamed"));
        assert_eq!(value["description"], json!(null));
        assert_eq!(value["status"], json!(null));
    }
}
