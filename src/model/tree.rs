// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pure queries over a [`ProcessNode`] tree.
//!
//! All traversals are depth-first in child (production) order. Placeholders are transparent:
//! they are never counted and never recursed into. Container stations are recursed into and
//! never counted themselves.

use std::collections::BTreeSet;

use serde::Serialize;

use super::ids::NodeId;
use super::node::{NodeKind, NodeStatus, ProcessNode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node {id} not found")]
    NotFound { id: String },
}

/// Station status tally for a subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub normal: usize,
    pub warning: usize,
    pub critical: usize,
    pub inactive: usize,
}

impl StatusCounts {
    fn record(&mut self, status: NodeStatus) {
        self.total += 1;
        match status {
            NodeStatus::Normal => self.normal += 1,
            NodeStatus::Warning => self.warning += 1,
            NodeStatus::Critical => self.critical += 1,
            NodeStatus::Inactive => self.inactive += 1,
        }
    }
}

/// Finds `id` in the subtree rooted at `root` (the root itself included).
pub fn find_by_id<'a>(root: &'a ProcessNode, id: &str) -> Result<&'a ProcessNode, TreeError> {
    find_in(root, id).ok_or_else(|| TreeError::NotFound { id: id.to_owned() })
}

fn find_in<'a>(node: &'a ProcessNode, id: &str) -> Option<&'a ProcessNode> {
    if node.id().as_str() == id {
        return Some(node);
    }
    node.children().iter().find_map(|child| find_in(child, id))
}

/// True when `id` names a node strictly below `root`.
pub fn is_descendant(root: &ProcessNode, id: &str) -> bool {
    root.children().iter().any(|child| find_in(child, id).is_some())
}

fn visit_leaf_stations<'a>(node: &'a ProcessNode, f: &mut impl FnMut(&'a ProcessNode)) {
    if node.is_placeholder() {
        return;
    }
    match node.kind() {
        NodeKind::Inspection => {}
        NodeKind::Station if !node.is_group() => f(node),
        NodeKind::Station | NodeKind::Zone | NodeKind::Workshop => {
            for child in node.children() {
                visit_leaf_stations(child, f);
            }
        }
    }
}

/// Tallies the statuses of every leaf station in the subtree.
///
/// A workshop's or zone's own `status` is author-set and does not take part.
pub fn aggregate_status_counts(node: &ProcessNode) -> StatusCounts {
    let mut counts = StatusCounts::default();
    visit_leaf_stations(node, &mut |station| counts.record(station.status()));
    counts
}

pub fn count_effective_stations(node: &ProcessNode) -> usize {
    let mut count = 0usize;
    visit_leaf_stations(node, &mut |_| count += 1);
    count
}

/// The leaf stations of the subtree, in production order.
pub fn leaf_stations(node: &ProcessNode) -> Vec<&ProcessNode> {
    let mut out = Vec::new();
    visit_leaf_stations(node, &mut |station| out.push(station));
    out
}

/// A construction-time invariant violation found by [`validate_tree`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeIssue {
    #[error("root {id} is a {kind:?}, expected a workshop")]
    RootNotWorkshop { id: NodeId, kind: NodeKind },
    #[error("id {id} is used by more than one node")]
    DuplicateId { id: NodeId },
    #[error("{parent_kind:?} {parent} cannot contain {child_kind:?} {child}")]
    UnexpectedChild { parent: NodeId, parent_kind: NodeKind, child: NodeId, child_kind: NodeKind },
    #[error("station {id} mixes station and inspection children")]
    MixedStationChildren { id: NodeId },
}

fn allowed_child(parent: NodeKind, child: NodeKind) -> bool {
    matches!(
        (parent, child),
        (NodeKind::Workshop, NodeKind::Zone | NodeKind::Station)
            | (NodeKind::Zone, NodeKind::Station)
            | (NodeKind::Station, NodeKind::Station | NodeKind::Inspection)
    )
}

/// Reports every well-formedness problem of a workshop tree.
///
/// Ingestion is responsible for well-formed trees; the routing core never calls this and
/// behaves deterministically (but not meaningfully) on malformed input.
pub fn validate_tree(root: &ProcessNode, seen: &mut BTreeSet<NodeId>) -> Vec<TreeIssue> {
    let mut issues = Vec::new();
    if root.kind() != NodeKind::Workshop {
        issues.push(TreeIssue::RootNotWorkshop { id: root.id().clone(), kind: root.kind() });
    }
    validate_node(root, seen, &mut issues);
    issues
}

fn validate_node(node: &ProcessNode, seen: &mut BTreeSet<NodeId>, issues: &mut Vec<TreeIssue>) {
    if !seen.insert(node.id().clone()) {
        issues.push(TreeIssue::DuplicateId { id: node.id().clone() });
    }

    let mut has_station = false;
    let mut has_inspection = false;
    for child in node.children() {
        if !allowed_child(node.kind(), child.kind()) {
            issues.push(TreeIssue::UnexpectedChild {
                parent: node.id().clone(),
                parent_kind: node.kind(),
                child: child.id().clone(),
                child_kind: child.kind(),
            });
        }
        has_station |= child.kind() == NodeKind::Station;
        has_inspection |= child.kind() == NodeKind::Inspection;
    }
    if node.kind() == NodeKind::Station && has_station && has_inspection {
        issues.push(TreeIssue::MixedStationChildren { id: node.id().clone() });
    }

    for child in node.children() {
        validate_node(child, seen, issues);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rstest::rstest;

    use super::{
        aggregate_status_counts, count_effective_stations, find_by_id, is_descendant,
        leaf_stations, validate_tree, StatusCounts, TreeError, TreeIssue,
    };
    use crate::model::fixtures::{grouped_workshop, inspection, nid, station};
    use crate::model::node::{NodeKind, NodeStatus};

    #[test]
    fn finds_nodes_at_any_depth_in_document_order() {
        let workshop = grouped_workshop();

        assert_eq!(find_by_id(&workshop, "ws-body").unwrap().kind(), NodeKind::Workshop);
        assert_eq!(find_by_id(&workshop, "grp-2").unwrap().label(), "Group Inner 2");
        assert_eq!(find_by_id(&workshop, "a-insp").unwrap().kind(), NodeKind::Inspection);
    }

    #[test]
    fn missing_id_is_not_found() {
        let workshop = grouped_workshop();

        assert_eq!(
            find_by_id(&workshop, "nope"),
            Err(TreeError::NotFound { id: "nope".to_owned() })
        );
    }

    #[test]
    fn descendant_check_excludes_the_root_itself() {
        let workshop = grouped_workshop();

        assert!(is_descendant(&workshop, "grp-1"));
        assert!(!is_descendant(&workshop, "ws-body"));
        assert!(!is_descendant(&workshop, "elsewhere"));
    }

    #[test]
    fn aggregates_only_leaf_stations_and_skips_placeholders() {
        // ws-body: zone-a[a, slot(placeholder), b], grp[grp-1, grp-2], c(inactive)
        let workshop = grouped_workshop();

        let counts = aggregate_status_counts(&workshop);

        assert_eq!(
            counts,
            StatusCounts { total: 5, normal: 2, warning: 1, critical: 1, inactive: 1 }
        );
        assert_eq!(count_effective_stations(&workshop), 5);
    }

    #[rstest]
    #[case("zone-a", 2)]
    #[case("grp", 2)]
    #[case("grp-1", 1)]
    #[case("slot", 0)]
    #[case("a-insp", 0)]
    fn counts_effective_stations_per_subtree(#[case] id: &str, #[case] expected: usize) {
        let workshop = grouped_workshop();
        let node = find_by_id(&workshop, id).expect("node");

        assert_eq!(count_effective_stations(node), expected);
        assert_eq!(aggregate_status_counts(node).total, expected);
    }

    #[test]
    fn leaf_stations_follow_production_order() {
        let workshop = grouped_workshop();

        let ids = leaf_stations(&workshop).iter().map(|n| n.id().as_str()).collect::<Vec<_>>();

        assert_eq!(ids, vec!["a", "b", "grp-1", "grp-2", "c"]);
    }

    #[test]
    fn validation_accepts_the_fixture() {
        let workshop = grouped_workshop();

        assert_eq!(validate_tree(&workshop, &mut BTreeSet::new()), Vec::new());
    }

    #[test]
    fn validation_reports_mixed_children_and_duplicates() {
        let bad = station("mixed", NodeStatus::Normal).with_children(vec![
            station("dup", NodeStatus::Normal),
            inspection("dup"),
        ]);

        let issues = validate_tree(&bad, &mut BTreeSet::new());

        assert_eq!(
            issues,
            vec![
                TreeIssue::RootNotWorkshop { id: nid("mixed"), kind: NodeKind::Station },
                TreeIssue::MixedStationChildren { id: nid("mixed") },
                TreeIssue::DuplicateId { id: nid("dup") },
            ]
        );
    }

    #[test]
    fn validation_rejects_inspection_directly_under_a_zone() {
        let zone = crate::model::fixtures::zone("z", vec![inspection("i")]);
        let workshop = crate::model::fixtures::workshop("ws", vec![zone]);

        let issues = validate_tree(&workshop, &mut BTreeSet::new());

        assert_eq!(
            issues,
            vec![TreeIssue::UnexpectedChild {
                parent: nid("z"),
                parent_kind: NodeKind::Zone,
                child: nid("i"),
                child_kind: NodeKind::Inspection,
            }]
        );
    }
}
