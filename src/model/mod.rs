// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plant hierarchy data model.
//!
//! A plant is a list of workshop trees (workshop -> zone -> station -> inspection). Child order
//! is production order and is consumed directly by connector routing.

pub mod fixtures;
pub mod ids;
pub mod node;
pub mod plant;
pub mod tree;

pub use ids::{Id, IdError, NodeId};
pub use node::{MetricPoint, NodeKind, NodeMeta, NodeStatus, ProcessNode};
pub use plant::{Plant, PlantLoadError, WorkshopSummary};
pub use tree::{
    aggregate_status_counts, count_effective_stations, find_by_id, is_descendant, leaf_stations,
    validate_tree, StatusCounts, TreeError, TreeIssue,
};
