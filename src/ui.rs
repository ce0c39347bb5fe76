// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection state shared between the navigation, the flow canvas and the detail panel.
//!
//! The selected station, when set, always belongs to the selected workshop: switching the
//! workshop clears it.

use crate::model::{is_descendant, NodeId, NodeStatus, Plant, ProcessNode};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    rev: u64,
    workshop_id: Option<NodeId>,
    station_id: Option<NodeId>,
}

impl SelectionState {
    /// Starts on the first workshop of the plant with no station selected.
    pub fn new(plant: &Plant) -> Self {
        Self {
            rev: 0,
            workshop_id: plant.first_workshop().map(|workshop| workshop.id().clone()),
            station_id: None,
        }
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn workshop_id(&self) -> Option<&NodeId> {
        self.workshop_id.as_ref()
    }

    pub fn station_id(&self) -> Option<&NodeId> {
        self.station_id.as_ref()
    }

    /// Returns whether the selection changed. The station selection is always cleared.
    pub fn select_workshop(&mut self, id: NodeId) -> bool {
        if self.workshop_id.as_ref() == Some(&id) && self.station_id.is_none() {
            return false;
        }
        self.workshop_id = Some(id);
        self.station_id = None;
        self.rev = self.rev.wrapping_add(1);
        true
    }

    /// Selects a station. The caller guarantees it belongs to the current workshop; see
    /// [`Self::select_station_checked`] for the guarded variant.
    pub fn select_station(&mut self, id: NodeId) -> bool {
        if self.station_id.as_ref() == Some(&id) {
            return false;
        }
        self.station_id = Some(id);
        self.rev = self.rev.wrapping_add(1);
        true
    }

    /// Moves to the first workshop of `plant` (or to nothing for an empty plant), clearing the
    /// station. Returns whether the selected workshop changed.
    pub fn select_first_workshop(&mut self, plant: &Plant) -> bool {
        let first = plant.first_workshop().map(|workshop| workshop.id().clone());
        if first == self.workshop_id {
            self.clear_station();
            return false;
        }
        self.workshop_id = first;
        self.station_id = None;
        self.rev = self.rev.wrapping_add(1);
        true
    }

    pub fn clear_station(&mut self) -> bool {
        if self.station_id.take().is_none() {
            return false;
        }
        self.rev = self.rev.wrapping_add(1);
        true
    }

    /// Selects `id` only if it lies inside the current workshop and is not inactive; inactive
    /// stations cannot be opened.
    pub fn select_station_checked(&mut self, plant: &Plant, id: &NodeId) -> bool {
        let Some(workshop) = self.selected_workshop(plant) else {
            return false;
        };
        if !is_descendant(workshop, id.as_str()) {
            return false;
        }
        match crate::model::find_by_id(workshop, id.as_str()) {
            Ok(node) if node.status() != NodeStatus::Inactive => self.select_station(id.clone()),
            _ => false,
        }
    }

    /// Resolves the workshop; an unknown id reads as "nothing selected".
    pub fn selected_workshop<'a>(&self, plant: &'a Plant) -> Option<&'a ProcessNode> {
        let id = self.workshop_id.as_ref()?;
        plant.workshop(id.as_str()).ok()
    }

    /// Resolves the station within the selected workshop only.
    pub fn selected_station<'a>(&self, plant: &'a Plant) -> Option<&'a ProcessNode> {
        let workshop = self.selected_workshop(plant)?;
        let id = self.station_id.as_ref()?;
        if !is_descendant(workshop, id.as_str()) {
            return None;
        }
        crate::model::find_by_id(workshop, id.as_str()).ok()
    }
}
