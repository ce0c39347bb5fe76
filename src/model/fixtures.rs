// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in plant used by the demo binary, benches and tests.
//!
//! Bulk stations get a deterministic status spread so snapshots stay stable.

use std::collections::BTreeSet;

use super::ids::NodeId;
use super::node::{MetricPoint, NodeKind, NodeMeta, NodeStatus, ProcessNode};
use super::plant::Plant;
use crate::config::RoutingConfig;

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("fixture node id")
}

#[cfg(test)]
pub(crate) fn station(id: &str, status: NodeStatus) -> ProcessNode {
    ProcessNode::new(nid(id), format!("Station {id}"), NodeKind::Station, status)
}

#[cfg(test)]
pub(crate) fn inspection(id: &str) -> ProcessNode {
    ProcessNode::new(nid(id), format!("Inspection {id}"), NodeKind::Inspection, NodeStatus::Normal)
}

pub(crate) fn placeholder(id: &str) -> ProcessNode {
    ProcessNode::new(nid(id), "", NodeKind::Station, NodeStatus::Inactive)
        .with_meta(NodeMeta::placeholder())
}

#[cfg(test)]
pub(crate) fn zone(id: &str, children: Vec<ProcessNode>) -> ProcessNode {
    ProcessNode::new(nid(id), format!("Zone {id}"), NodeKind::Zone, NodeStatus::Normal)
        .with_children(children)
}

#[cfg(test)]
pub(crate) fn workshop(id: &str, children: Vec<ProcessNode>) -> ProcessNode {
    ProcessNode::new(nid(id), format!("Workshop {id}"), NodeKind::Workshop, NodeStatus::Normal)
        .with_children(children)
}

/// Small workshop exercising zones, placeholders and a container station.
///
/// `ws-body: zone-a[a, slot, b], grp[grp-1, grp-2], c`
#[cfg(test)]
pub(crate) fn grouped_workshop() -> ProcessNode {
    let a = station("a", NodeStatus::Normal).with_children(vec![inspection("a-insp")]);
    let b = station("b", NodeStatus::Warning);
    let grp = ProcessNode::new(nid("grp"), "Group", NodeKind::Station, NodeStatus::Normal)
        .with_children(vec![
            station("grp-1", NodeStatus::Critical),
            ProcessNode::new(nid("grp-2"), "Group Inner 2", NodeKind::Station, NodeStatus::Normal),
        ]);
    let c = station("c", NodeStatus::Inactive);

    workshop("ws-body", vec![zone("zone-a", vec![a, placeholder("slot"), b]), grp, c])
}

fn mock_metrics(seed: usize, count: usize, volatility: f64) -> Vec<MetricPoint> {
    (0..count)
        .map(|i| {
            let jitter = ((seed * 31 + i * 17) % 100) as f64 / 100.0;
            MetricPoint {
                time: format!("10:{i:02}"),
                value: 80.0 + jitter * volatility,
                expected: 85.0,
            }
        })
        .collect()
}

fn bulk_status(seed: usize) -> NodeStatus {
    match (seed * 37 + 11) % 100 {
        96..=99 => NodeStatus::Critical,
        86..=95 => NodeStatus::Warning,
        81..=85 => NodeStatus::Inactive,
        _ => NodeStatus::Normal,
    }
}

fn bulk_stations(prefix: &str, range: std::ops::Range<usize>) -> Vec<ProcessNode> {
    range
        .map(|i| {
            let n = i + 1;
            let status = bulk_status(n);
            let volatility = if status == NodeStatus::Critical { 25.0 } else { 5.0 };
            let primary = ProcessNode::new(
                nid(&format!("{prefix}-{n}-insp-1")),
                "Primary AI Check",
                NodeKind::Inspection,
                status,
            )
            .with_meta(
                NodeMeta::default()
                    .with_description("Automated visual inspection point.")
                    .with_metrics(mock_metrics(n, 15, volatility)),
            );
            let telemetry = ProcessNode::new(
                nid(&format!("{prefix}-{n}-insp-2")),
                "Sensor Telemetry",
                NodeKind::Inspection,
                NodeStatus::Normal,
            )
            .with_meta(
                NodeMeta::default()
                    .with_description("IoT sensor data stream.")
                    .with_metrics(mock_metrics(n + 1, 15, 2.0)),
            );

            ProcessNode::new(
                nid(&format!("{prefix}-{n}")),
                format!("Station {}-{n:03}", prefix.to_uppercase()),
                NodeKind::Station,
                status,
            )
            .with_children(vec![primary, telemetry])
        })
        .collect()
}

fn headline_station(
    id: &str,
    label: &str,
    status: NodeStatus,
    inspection_id: &str,
    inspection_label: &str,
    description: &str,
    volatility: f64,
) -> ProcessNode {
    ProcessNode::new(nid(id), label, NodeKind::Station, status).with_children(vec![
        ProcessNode::new(nid(inspection_id), inspection_label, NodeKind::Inspection, status)
            .with_meta(
                NodeMeta::default()
                    .with_description(description)
                    .with_metrics(mock_metrics(id.len(), 20, volatility)),
            ),
    ])
}

/// Four workshops: stamping, welding, painting, and a zoned assembly hall.
pub fn demo_plant() -> Plant {
    let mut stamping = vec![
        headline_station(
            "st-metal-feed",
            "Sheet Metal Feed",
            NodeStatus::Normal,
            "insp-thickness",
            "Thickness Gauge",
            "Laser measurement of sheet metal thickness.",
            5.0,
        ),
        headline_station(
            "st-press-A",
            "Press Line A",
            NodeStatus::Warning,
            "insp-pressure",
            "Pressure Monitor",
            "Real-time hydraulic pressure monitoring.",
            15.0,
        ),
    ];
    stamping.extend(bulk_stations("stamp", 0..18));

    let mut welding = vec![headline_station(
        "st-door-install",
        "Door Frame Install",
        NodeStatus::Normal,
        "insp-gap-check",
        "Gap & Flush AI Check",
        "AI Vision system detecting gap variances.",
        2.0,
    )];
    welding.extend(bulk_stations("weld", 0..45));

    let mut painting = vec![headline_station(
        "st-primer",
        "Electrophoresis",
        NodeStatus::Normal,
        "insp-ph-level",
        "Tank pH Level",
        "Chemical bath acidity monitoring.",
        1.0,
    )];
    painting.extend(bulk_stations("paint", 0..30));

    let mut trim = vec![headline_station(
        "st-engine-mount",
        "Engine Marriage",
        NodeStatus::Critical,
        "insp-torque",
        "Bolt Torque Data",
        "Automated nutrunner torque values.",
        30.0,
    )];
    trim.extend(bulk_stations("asm", 0..12));

    let sub_assembly = ProcessNode::new(
        nid("grp-dashboard"),
        "Dashboard Sub-Assembly",
        NodeKind::Station,
        NodeStatus::Normal,
    )
    .with_meta(NodeMeta::default().with_layout_span(2))
    .with_children(bulk_stations("dash", 0..3));

    let mut fin = bulk_stations("asm", 12..24);
    fin.push(placeholder("asm-final-slot"));

    let named = |id: &str, label: &str, kind: NodeKind, status: NodeStatus| {
        ProcessNode::new(nid(id), label, kind, status)
    };

    Plant::new(vec![
        named("ws-stamping", "Stamping", NodeKind::Workshop, NodeStatus::Normal)
            .with_children(stamping),
        named("ws-welding", "Welding", NodeKind::Workshop, NodeStatus::Normal)
            .with_children(welding),
        named("ws-painting", "Painting", NodeKind::Workshop, NodeStatus::Normal)
            .with_children(painting),
        named("ws-assembly", "Assembly", NodeKind::Workshop, NodeStatus::Critical).with_children(
            vec![
                named("zone-trim", "Trim Line", NodeKind::Zone, NodeStatus::Critical)
                    .with_children(trim),
                named("zone-subassembly", "Sub-Assembly Area", NodeKind::Zone, NodeStatus::Normal)
                    .with_children(vec![sub_assembly]),
                named("zone-final", "Final Line", NodeKind::Zone, NodeStatus::Normal)
                    .with_children(fin),
            ],
        ),
    ])
}

/// Zone roles matching [`demo_plant`]: the sub-assembly island receives no incoming flow and
/// both assembly lines draw intra-zone connectors.
pub fn demo_routing_config() -> RoutingConfig {
    RoutingConfig {
        isolated: BTreeSet::from([nid("zone-subassembly")]),
        flow_zones: BTreeSet::from([nid("zone-trim"), nid("zone-final")]),
        ..RoutingConfig::default()
    }
}
