// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Routing tolerances and zone roles.
//!
//! Defaults match the circuit-board layout of the station grid. A JSON document can replace
//! any subset of fields, and `PLANTFLOW_*` environment variables override numeric values on
//! top of that.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::NodeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Zone anchors closer than this on the x axis are snapped to a shared vertical.
    pub zone_align_tolerance: f64,
    /// Stations whose top edges differ by less than this share a visual row.
    pub row_tolerance: f64,
    /// Horizontal stub length used by wrapped (row-changing) station routes.
    pub wrap_clearance: f64,
    /// Pairs separated vertically by more than this are treated as unrelated.
    pub max_pair_distance: f64,
    pub recheck_delay_ms: u64,
    /// Nodes that never receive or emit a route.
    pub isolated: BTreeSet<NodeId>,
    /// Zones whose own stations are chained by the intra-zone pass.
    pub flow_zones: BTreeSet<NodeId>,
    /// Treat every zone as a flow zone.
    pub flow_zone_default: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            zone_align_tolerance: 20.0,
            row_tolerance: 30.0,
            wrap_clearance: 12.0,
            max_pair_distance: 200.0,
            recheck_delay_ms: 150,
            isolated: BTreeSet::new(),
            flow_zones: BTreeSet::new(),
            flow_zone_default: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid config document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: String, value: String },
    #[error("{field} must be a finite non-negative number, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

impl RoutingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_owned(), source })?;
        Self::from_json_str(&json)
    }

    /// Applies `PLANTFLOW_*` overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    pub fn apply_env_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let float = |name: &str, target: &mut f64| -> Result<(), ConfigError> {
            if let Some(raw) = lookup(name) {
                *target = parse_non_negative(name, &raw)?;
            }
            Ok(())
        };

        float("PLANTFLOW_ZONE_ALIGN_TOLERANCE", &mut self.zone_align_tolerance)?;
        float("PLANTFLOW_ROW_TOLERANCE", &mut self.row_tolerance)?;
        float("PLANTFLOW_WRAP_CLEARANCE", &mut self.wrap_clearance)?;
        float("PLANTFLOW_MAX_PAIR_DISTANCE", &mut self.max_pair_distance)?;

        if let Some(raw) = lookup("PLANTFLOW_RECHECK_DELAY_MS") {
            self.recheck_delay_ms = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: "PLANTFLOW_RECHECK_DELAY_MS".to_owned(),
                value: raw.clone(),
            })?;
        }

        Ok(self)
    }

    /// Rejects tolerances that are negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("zone_align_tolerance", self.zone_align_tolerance),
            ("row_tolerance", self.row_tolerance),
            ("wrap_clearance", self.wrap_clearance),
            ("max_pair_distance", self.max_pair_distance),
        ];
        match fields.into_iter().find(|(_, value)| !(value.is_finite() && *value >= 0.0)) {
            Some((field, value)) => Err(ConfigError::OutOfRange { field, value }),
            None => Ok(()),
        }
    }

    pub fn is_isolated(&self, id: &NodeId) -> bool {
        self.isolated.contains(id)
    }

    pub fn is_flow_zone(&self, id: &NodeId) -> bool {
        self.flow_zone_default || self.flow_zones.contains(id)
    }

    pub fn recheck_delay(&self) -> Duration {
        Duration::from_millis(self.recheck_delay_ms)
    }
}

fn parse_non_negative(name: &str, raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidEnv { name: name.to_owned(), value: raw.to_owned() }),
    }
}
