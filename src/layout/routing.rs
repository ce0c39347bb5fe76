// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use serde::Serialize;
use smallvec::SmallVec;

use super::geometry::{LayoutBox, Point};
use super::snapshot::BoxLookup;
use crate::config::RoutingConfig;
use crate::model::{NodeId, NodeKind, NodeStatus, ProcessNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClass {
    /// A single segment between two stations on the same row.
    Straight,
    /// Orthogonal down/across/down wiring.
    Stepped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteWeight {
    Default,
    /// Touches the selected station.
    Bright,
    /// Touches an inactive node.
    Dimmed,
}

/// Route vertices. Every route the engine emits has at most six.
pub type Polyline = SmallVec<[Point; 6]>;

/// A production-flow connector between two adjacent routable nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    from: NodeId,
    to: NodeId,
    points: Polyline,
    class: RouteClass,
    weight: RouteWeight,
}

impl Route {
    pub fn from(&self) -> &NodeId {
        &self.from
    }

    pub fn to(&self) -> &NodeId {
        &self.to
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn class(&self) -> RouteClass {
        self.class
    }

    pub fn weight(&self) -> RouteWeight {
        self.weight
    }

    pub fn touches(&self, id: &NodeId) -> bool {
        &self.from == id || &self.to == id
    }

    /// SVG path data (`M x y L x y ...`) for the render surface.
    pub fn path_data(&self) -> String {
        let mut out = String::new();
        for (idx, point) in self.points.iter().enumerate() {
            let command = if idx == 0 { 'M' } else { 'L' };
            if idx > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{command} {} {}", point.x(), point.y());
        }
        out
    }
}

/// True when some route leaves `id`; the render layer lights the node's output port.
pub fn has_outgoing(routes: &[Route], id: &NodeId) -> bool {
    routes.iter().any(|route| &route.from == id)
}

/// Routes produced by one recomputation, plus what was left out and why.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RoutingReport {
    pub routes: Vec<Route>,
    /// Pairs dropped because an endpoint had no measured box; retried on the next pass.
    pub dropped_unavailable: usize,
    pub skipped_isolated: usize,
    pub skipped_distant: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Siblings,
    IntraZone,
}

struct Router<'a, B: BoxLookup + ?Sized> {
    boxes: &'a B,
    config: &'a RoutingConfig,
    selected: Option<&'a NodeId>,
    report: RoutingReport,
}

/// Computes every connector of a workshop view.
///
/// First the workshop's routable children are chained in production order, then each flow
/// zone chains its own stations (same-row links only). Output order is deterministic: sibling
/// routes in child order, then intra-zone routes in zone order.
pub fn route_workshop<B: BoxLookup + ?Sized>(
    workshop: &ProcessNode,
    boxes: &B,
    config: &RoutingConfig,
    selected: Option<&NodeId>,
) -> RoutingReport {
    let mut router = Router { boxes, config, selected, report: RoutingReport::default() };

    router.chain(&routable_sequence(workshop, config), Pass::Siblings);

    for zone in workshop.children().iter().filter(|child| child.kind() == NodeKind::Zone) {
        if zone.is_placeholder() || !config.is_flow_zone(zone.id()) {
            continue;
        }
        router.chain(&routable_sequence(zone, config), Pass::IntraZone);
    }

    let report = router.report;
    tracing::debug!(
        workshop = %workshop.id(),
        routes = report.routes.len(),
        dropped_unavailable = report.dropped_unavailable,
        skipped_isolated = report.skipped_isolated,
        skipped_distant = report.skipped_distant,
        "routed workshop"
    );
    report
}

/// Chains the routable children of `parent` with the sibling rules only.
pub fn route_children<B: BoxLookup + ?Sized>(
    parent: &ProcessNode,
    boxes: &B,
    config: &RoutingConfig,
    selected: Option<&NodeId>,
) -> RoutingReport {
    let mut router = Router { boxes, config, selected, report: RoutingReport::default() };
    router.chain(&routable_sequence(parent, config), Pass::Siblings);
    router.report
}

/// Children of `parent` that can carry routes, in production order.
///
/// Placeholders are dropped (their layout slot is irrelevant to endpoints), inspection points
/// never route, and container stations are replaced by their own routable children. An
/// isolated container is kept as-is so that its pairs are skipped rather than bypassed.
fn routable_sequence<'a>(parent: &'a ProcessNode, config: &RoutingConfig) -> Vec<&'a ProcessNode> {
    let mut out = Vec::new();
    push_routable(parent, config, &mut out);
    out
}

fn push_routable<'a>(
    parent: &'a ProcessNode,
    config: &RoutingConfig,
    out: &mut Vec<&'a ProcessNode>,
) {
    for child in parent.children() {
        if child.is_placeholder() {
            continue;
        }
        match child.kind() {
            NodeKind::Station if child.is_group() && !config.is_isolated(child.id()) => {
                push_routable(child, config, out);
            }
            NodeKind::Station | NodeKind::Zone => out.push(child),
            NodeKind::Workshop | NodeKind::Inspection => {}
        }
    }
}

impl<B: BoxLookup + ?Sized> Router<'_, B> {
    fn chain(&mut self, sequence: &[&ProcessNode], pass: Pass) {
        for pair in sequence.windows(2) {
            self.connect(pair[0], pair[1], pass);
        }
    }

    fn connect(&mut self, a: &ProcessNode, b: &ProcessNode, pass: Pass) {
        if self.config.is_isolated(a.id()) || self.config.is_isolated(b.id()) {
            self.report.skipped_isolated += 1;
            return;
        }

        let (Some(box_a), Some(box_b)) = (self.boxes.box_of(a.id()), self.boxes.box_of(b.id()))
        else {
            tracing::trace!(from = %a.id(), to = %b.id(), "geometry unavailable, dropping pair");
            self.report.dropped_unavailable += 1;
            return;
        };

        if box_a.vertical_gap(&box_b) > self.config.max_pair_distance {
            tracing::trace!(from = %a.id(), to = %b.id(), "pair too far apart, skipping");
            self.report.skipped_distant += 1;
            return;
        }

        let (points, class) = if a.kind() == NodeKind::Zone && b.kind() == NodeKind::Zone {
            (zone_step(&box_a, &box_b, self.config), RouteClass::Stepped)
        } else if self.same_row(&box_a, &box_b) && box_b.left > box_a.right() {
            (straight(&box_a, &box_b), RouteClass::Straight)
        } else if pass == Pass::Siblings {
            (wrap_step(&box_a, &box_b, self.config), RouteClass::Stepped)
        } else {
            return;
        };

        self.report.routes.push(Route {
            from: a.id().clone(),
            to: b.id().clone(),
            points,
            class,
            weight: self.weight(a, b),
        });
    }

    fn same_row(&self, a: &LayoutBox, b: &LayoutBox) -> bool {
        (a.top - b.top).abs() < self.config.row_tolerance
    }

    fn weight(&self, a: &ProcessNode, b: &ProcessNode) -> RouteWeight {
        if self.selected.is_some_and(|selected| a.id() == selected || b.id() == selected) {
            return RouteWeight::Bright;
        }
        if a.status() == NodeStatus::Inactive || b.status() == NodeStatus::Inactive {
            return RouteWeight::Dimmed;
        }
        RouteWeight::Default
    }
}

/// Right-edge midpoint of `a` to left-edge midpoint of `b`.
fn straight(a: &LayoutBox, b: &LayoutBox) -> Polyline {
    SmallVec::from_slice(&[
        Point::rounded(a.right(), a.center_y()),
        Point::rounded(b.left, b.center_y()),
    ])
}

/// Out of `a`'s right edge, down to the midpoint between rows, across, down, and into `b`'s
/// left edge. The stubs keep the turn clear of both boxes.
fn wrap_step(a: &LayoutBox, b: &LayoutBox, config: &RoutingConfig) -> Polyline {
    let (sx, sy) = (a.right(), a.center_y());
    let (ex, ey) = (b.left, b.center_y());
    let pad = config.wrap_clearance;
    let mid_y = (sy + ey) / 2.0;

    compress_polyline(&[
        Point::rounded(sx, sy),
        Point::rounded(sx + pad, sy),
        Point::rounded(sx + pad, mid_y),
        Point::rounded(ex - pad, mid_y),
        Point::rounded(ex - pad, ey),
        Point::rounded(ex, ey),
    ])
}

/// Bottom-center of `a` down to the midpoint, across, and down into the top-center of `b`.
/// Nearly aligned anchors are snapped to their average so the connector stays straight.
fn zone_step(a: &LayoutBox, b: &LayoutBox, config: &RoutingConfig) -> Polyline {
    let (mut sx, sy) = (a.center_x(), a.bottom());
    let (mut ex, ey) = (b.center_x(), b.top);
    if (sx - ex).abs() < config.zone_align_tolerance {
        let avg = (sx + ex) / 2.0;
        sx = avg;
        ex = avg;
    }
    let mid_y = (sy + ey) / 2.0;

    compress_polyline(&[
        Point::rounded(sx, sy),
        Point::rounded(sx, mid_y),
        Point::rounded(ex, mid_y),
        Point::rounded(ex, ey),
    ])
}

/// Drops repeated vertices and interior vertices that do not change direction.
fn compress_polyline(path: &[Point]) -> Polyline {
    let mut deduped = Polyline::new();
    for point in path {
        if deduped.last() != Some(point) {
            deduped.push(*point);
        }
    }
    if deduped.len() <= 2 {
        return deduped;
    }

    let dir = |from: Point, to: Point| ((to.x() - from.x()).signum(), (to.y() - from.y()).signum());

    let mut points = Polyline::new();
    points.push(deduped[0]);
    let mut prev_dir = dir(deduped[0], deduped[1]);
    for idx in 1..deduped.len() - 1 {
        let next_dir = dir(deduped[idx], deduped[idx + 1]);
        if next_dir != prev_dir {
            points.push(deduped[idx]);
            prev_dir = next_dir;
        }
    }
    points.push(deduped[deduped.len() - 1]);
    points
}
