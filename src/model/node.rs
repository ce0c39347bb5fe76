// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::NodeId;

/// Level of a node in the plant hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Workshop,
    Zone,
    Station,
    Inspection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeStatus {
    #[default]
    Normal,
    Warning,
    Critical,
    Inactive,
}

/// A single sample of an inspection point's telemetry series.
///
/// The core never interprets these values; they travel with the tree so the detail panel can
/// chart them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub time: String,
    pub value: f64,
    pub expected: f64,
}

/// Presentation and behavior hints attached to a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    layout_span: Option<u32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    is_placeholder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    responsible_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    img_url: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    metrics: Vec<MetricPoint>,
}

impl NodeMeta {
    pub fn placeholder() -> Self {
        Self { is_placeholder: true, ..Self::default() }
    }

    pub fn with_layout_span(mut self, span: u32) -> Self {
        self.layout_span = Some(span);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_metrics(mut self, metrics: Vec<MetricPoint>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Grid cells the node occupies; never less than one.
    pub fn layout_span(&self) -> u32 {
        self.layout_span.unwrap_or(1).max(1)
    }

    pub fn is_placeholder(&self) -> bool {
        self.is_placeholder
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn responsible_person(&self) -> Option<&str> {
        self.responsible_person.as_deref()
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    pub fn img_url(&self) -> Option<&str> {
        self.img_url.as_deref()
    }

    pub fn metrics(&self) -> &[MetricPoint] {
        &self.metrics
    }
}

/// A node of the plant hierarchy (workshop, zone, station or inspection point).
///
/// Child order is production order. Trees are built once per data load and never mutated
/// by the routing core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessNode {
    id: NodeId,
    label: String,
    #[serde(rename = "type", alias = "kind")]
    kind: NodeKind,
    status: NodeStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ProcessNode>,
    #[serde(default, skip_serializing_if = "is_default_meta")]
    meta: NodeMeta,
}

fn is_default_meta(meta: &NodeMeta) -> bool {
    *meta == NodeMeta::default()
}

impl ProcessNode {
    pub fn new(id: NodeId, label: impl Into<String>, kind: NodeKind, status: NodeStatus) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
            status,
            children: Vec::new(),
            meta: NodeMeta::default(),
        }
    }

    pub fn with_children(mut self, children: Vec<ProcessNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_meta(mut self, meta: NodeMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub fn children(&self) -> &[ProcessNode] {
        &self.children
    }

    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn is_placeholder(&self) -> bool {
        self.meta.is_placeholder()
    }

    /// True for a station that only groups other stations (a visual container, not a work
    /// unit).
    pub fn is_group(&self) -> bool {
        self.kind == NodeKind::Station
            && self.children.iter().any(|child| child.kind == NodeKind::Station)
    }

    /// True for a station that is an actual work unit: not a placeholder and not a container.
    pub fn is_leaf_station(&self) -> bool {
        self.kind == NodeKind::Station && !self.is_placeholder() && !self.is_group()
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeKind, NodeMeta, NodeStatus, ProcessNode};
    use crate::model::ids::NodeId;

    fn nid(value: &str) -> NodeId {
        NodeId::new(value).expect("node id")
    }

    #[test]
    fn deserializes_the_camel_case_document_shape() {
        let json = r#"{
            "id": "st-press-A",
            "label": "Press Line A",
            "type": "STATION",
            "status": "WARNING",
            "children": [
                {
                    "id": "insp-pressure",
                    "label": "Pressure Monitor",
                    "type": "INSPECTION",
                    "status": "WARNING",
                    "meta": {
                        "description": "Real-time hydraulic pressure monitoring.",
                        "metrics": [{ "time": "10:00", "value": 81.5, "expected": 85 }]
                    }
                }
            ],
            "meta": { "layoutSpan": 2 }
        }"#;

        let node: ProcessNode = serde_json::from_str(json).expect("node");
        assert_eq!(node.kind(), NodeKind::Station);
        assert_eq!(node.status(), NodeStatus::Warning);
        assert_eq!(node.meta().layout_span(), 2);
        assert!(node.is_leaf_station());

        let inspection = &node.children()[0];
        assert_eq!(inspection.meta().metrics().len(), 1);
        assert_eq!(
            inspection.meta().description(),
            Some("Real-time hydraulic pressure monitoring.")
        );
    }

    #[test]
    fn a_station_with_station_children_is_a_group_not_a_leaf() {
        let group = ProcessNode::new(nid("grp"), "Group", NodeKind::Station, NodeStatus::Normal)
            .with_children(vec![ProcessNode::new(
                nid("grp-1"),
                "Inner",
                NodeKind::Station,
                NodeStatus::Normal,
            )]);

        assert!(group.is_group());
        assert!(!group.is_leaf_station());
        assert!(group.children()[0].is_leaf_station());
    }

    #[test]
    fn placeholder_is_never_a_leaf_station_and_span_is_at_least_one() {
        let slot = ProcessNode::new(nid("slot"), "", NodeKind::Station, NodeStatus::Inactive)
            .with_meta(NodeMeta::placeholder().with_layout_span(0));

        assert!(slot.is_placeholder());
        assert!(!slot.is_leaf_station());
        assert_eq!(slot.meta().layout_span(), 1);
    }
}
