// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Geometry and connector routing.
//!
//! The render layer measures node boxes; this module turns those boxes plus the process tree
//! into circuit-board style connector polylines.

pub mod geometry;
pub mod grid;
pub mod routing;
pub mod snapshot;

pub use geometry::{LayoutBox, Point};
pub use grid::{measure_grid, GridSpec};
pub use routing::{
    has_outgoing, route_children, route_workshop, Polyline, Route, RouteClass, RouteWeight,
    RoutingReport,
};
pub use snapshot::{BoxLookup, BoxTable, LayoutSignal, LayoutSubscription};
