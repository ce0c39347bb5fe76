// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ids::NodeId;
use super::node::{NodeStatus, ProcessNode};
use super::tree::{
    aggregate_status_counts, count_effective_stations, find_by_id, validate_tree, StatusCounts,
    TreeError, TreeIssue,
};

/// The loaded plant: workshop roots in navigation order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plant {
    workshops: Vec<ProcessNode>,
}

#[derive(Debug, thiserror::Error)]
pub enum PlantLoadError {
    #[error("failed to read plant document {path:?}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid plant document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Navigation-tab summary of one workshop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkshopSummary {
    pub id: NodeId,
    pub label: String,
    pub status: NodeStatus,
    pub stations: usize,
    pub counts: StatusCounts,
}

impl Plant {
    pub fn new(workshops: Vec<ProcessNode>) -> Self {
        Self { workshops }
    }

    pub fn from_json_str(json: &str) -> Result<Self, PlantLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PlantLoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| PlantLoadError::Io { path: path.to_owned(), source })?;
        Self::from_json_str(&json)
    }

    pub fn workshops(&self) -> &[ProcessNode] {
        &self.workshops
    }

    pub fn first_workshop(&self) -> Option<&ProcessNode> {
        self.workshops.first()
    }

    pub fn workshop(&self, id: &str) -> Result<&ProcessNode, TreeError> {
        self.workshops
            .iter()
            .find(|workshop| workshop.id().as_str() == id)
            .ok_or_else(|| TreeError::NotFound { id: id.to_owned() })
    }

    /// Searches every workshop in navigation order.
    pub fn find(&self, id: &str) -> Result<&ProcessNode, TreeError> {
        self.workshops
            .iter()
            .find_map(|workshop| find_by_id(workshop, id).ok())
            .ok_or_else(|| TreeError::NotFound { id: id.to_owned() })
    }

    pub fn summaries(&self) -> Vec<WorkshopSummary> {
        self.workshops
            .iter()
            .map(|workshop| WorkshopSummary {
                id: workshop.id().clone(),
                label: workshop.label().to_owned(),
                status: workshop.status(),
                stations: count_effective_stations(workshop),
                counts: aggregate_status_counts(workshop),
            })
            .collect()
    }

    /// Checks construction-time invariants across the whole plant, including ids that collide
    /// between workshops.
    pub fn validate(&self) -> Vec<TreeIssue> {
        let mut seen = BTreeSet::new();
        self.workshops.iter().flat_map(|workshop| validate_tree(workshop, &mut seen)).collect()
    }
}
