// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Synthetic measurement for running routing without a render surface.
//!
//! Mirrors the station grid of the flow canvas: auto-filled columns with a minimum cell width,
//! stations in reading order wrapping at the right edge, zones as full-width blocks holding
//! their own grid. The demo binary and the benches use it in place of real measurements.

use serde::{Deserialize, Serialize};

use super::geometry::LayoutBox;
use super::snapshot::BoxTable;
use crate::model::{NodeKind, ProcessNode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub width: f64,
    pub padding: f64,
    pub min_cell_width: f64,
    pub gap_x: f64,
    pub gap_y: f64,
    pub cell_height: f64,
    pub zone_header: f64,
    pub zone_padding: f64,
    pub zone_gap: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: 1200.0,
            padding: 32.0,
            min_cell_width: 140.0,
            gap_x: 40.0,
            gap_y: 48.0,
            cell_height: 96.0,
            zone_header: 36.0,
            zone_padding: 16.0,
            zone_gap: 48.0,
        }
    }
}

struct GridCursor<'a> {
    spec: &'a GridSpec,
    left: f64,
    columns: u32,
    cell_width: f64,
    row_top: f64,
    column: u32,
    bottom: f64,
}

impl<'a> GridCursor<'a> {
    fn new(spec: &'a GridSpec, left: f64, top: f64, width: f64) -> Self {
        let width = width.max(spec.min_cell_width);
        let columns = ((width + spec.gap_x) / (spec.min_cell_width + spec.gap_x)).floor().max(1.0);
        let cell_width = (width - (columns - 1.0) * spec.gap_x) / columns;
        Self {
            spec,
            left,
            columns: columns as u32,
            cell_width,
            row_top: top,
            column: 0,
            bottom: top,
        }
    }

    fn place(&mut self, span: u32) -> LayoutBox {
        let span = span.clamp(1, self.columns);
        if self.column + span > self.columns {
            self.break_row();
        }
        let left = self.left + f64::from(self.column) * (self.cell_width + self.spec.gap_x);
        let width = f64::from(span) * self.cell_width + f64::from(span - 1) * self.spec.gap_x;
        let placed = LayoutBox::new(left, self.row_top, width, self.spec.cell_height);
        self.column += span;
        self.bottom = self.bottom.max(placed.bottom());
        placed
    }

    fn break_row(&mut self) {
        if self.column > 0 {
            self.row_top += self.spec.cell_height + self.spec.gap_y;
            self.column = 0;
        }
    }

    /// Restarts placement on a fresh row at `top`.
    fn skip_to(&mut self, top: f64) {
        self.row_top = top;
        self.column = 0;
        self.bottom = self.bottom.max(top);
    }
}

/// Lays out a workshop view and returns the box of every node it would render.
pub fn measure_grid(workshop: &ProcessNode, spec: &GridSpec) -> BoxTable {
    let mut table = BoxTable::new();
    let width = spec.width - 2.0 * spec.padding;
    let mut cursor = GridCursor::new(spec, spec.padding, spec.padding, width);

    for child in workshop.children() {
        if child.kind() != NodeKind::Zone {
            place_node(child, &mut cursor, &mut table);
            continue;
        }

        cursor.break_row();
        let zone_top = cursor.row_top;
        let mut inner = GridCursor::new(
            spec,
            spec.padding + spec.zone_padding,
            zone_top + spec.zone_header,
            width - 2.0 * spec.zone_padding,
        );
        for station in child.children() {
            place_node(station, &mut inner, &mut table);
        }
        let zone_bottom = inner.bottom + spec.zone_padding;
        table.insert(
            child.id().clone(),
            LayoutBox::new(spec.padding, zone_top, width, zone_bottom - zone_top),
        );
        cursor.skip_to(zone_bottom + spec.zone_gap);
    }

    table
}

fn place_node(node: &ProcessNode, cursor: &mut GridCursor<'_>, table: &mut BoxTable) {
    if !node.is_group() {
        let placed = cursor.place(node.meta().layout_span());
        table.insert(node.id().clone(), placed);
        return;
    }

    let mut bounds: Option<LayoutBox> = None;
    for child in node.children() {
        place_node(child, cursor, table);
        if let Some(child_box) = table.get(child.id().as_str()).copied() {
            bounds = Some(match bounds {
                None => child_box,
                Some(b) => union(&b, &child_box),
            });
        }
    }
    if let Some(bounds) = bounds {
        table.insert(node.id().clone(), bounds);
    }
}

fn union(a: &LayoutBox, b: &LayoutBox) -> LayoutBox {
    let left = a.left.min(b.left);
    let top = a.top.min(b.top);
    LayoutBox::new(left, top, a.right().max(b.right()) - left, a.bottom().max(b.bottom()) - top)
}
