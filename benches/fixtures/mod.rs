// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Deterministic benchmark plants (no RNG).

use plantflow::model::{NodeId, NodeKind, NodeMeta, NodeStatus, ProcessNode};

fn nid(value: String) -> NodeId {
    NodeId::new(value).expect("bench node id")
}

fn status(seed: usize) -> NodeStatus {
    match seed % 23 {
        0 => NodeStatus::Critical,
        1 | 2 => NodeStatus::Warning,
        3 => NodeStatus::Inactive,
        _ => NodeStatus::Normal,
    }
}

fn station(prefix: &str, n: usize) -> ProcessNode {
    let inspection = ProcessNode::new(
        nid(format!("{prefix}-{n}-insp")),
        "Check",
        NodeKind::Inspection,
        NodeStatus::Normal,
    );
    ProcessNode::new(nid(format!("{prefix}-{n}")), format!("Station {n}"), NodeKind::Station, status(n))
        .with_children(vec![inspection])
}

/// A flat production line of `stations` stations.
pub fn line(stations: usize) -> ProcessNode {
    ProcessNode::new(nid("bench-line".to_owned()), "Line", NodeKind::Workshop, NodeStatus::Normal)
        .with_children((0..stations).map(|n| station("st", n)).collect())
}

/// `zones` zones of `per_zone` slots, interleaving placeholders and two-station containers.
pub fn zoned(zones: usize, per_zone: usize) -> ProcessNode {
    let children = (0..zones)
        .map(|z| {
            let prefix = format!("z{z}");
            let stations = (0..per_zone)
                .map(|n| match n % 35 {
                    5 | 10 | 15 | 20 | 25 | 30 => ProcessNode::new(
                        nid(format!("{prefix}-slot-{n}")),
                        "",
                        NodeKind::Station,
                        NodeStatus::Inactive,
                    )
                    .with_meta(NodeMeta::placeholder()),
                    7 | 14 | 21 | 28 => ProcessNode::new(
                        nid(format!("{prefix}-grp-{n}")),
                        "Group",
                        NodeKind::Station,
                        NodeStatus::Normal,
                    )
                    .with_children(vec![
                        station(&format!("{prefix}-grp-{n}"), 0),
                        station(&format!("{prefix}-grp-{n}"), 1),
                    ]),
                    _ => station(&prefix, n),
                })
                .collect();
            ProcessNode::new(nid(prefix.clone()), format!("Zone {z}"), NodeKind::Zone, NodeStatus::Normal)
                .with_children(stations)
        })
        .collect();

    ProcessNode::new(nid("bench-hall".to_owned()), "Hall", NodeKind::Workshop, NodeStatus::Normal)
        .with_children(children)
}
