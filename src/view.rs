// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The workshop flow view: one plant, one selection, one scheduler.
//!
//! The render layer owns geometry and hands a [`BoxLookup`] to [`FlowView::frame`] once per
//! visual frame. Everything else (clicks, tree reloads, layout notifications) only records a
//! trigger.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;

use crate::config::RoutingConfig;
use crate::layout::{route_workshop, BoxLookup, LayoutSignal, Route, RoutingReport};
use crate::model::{NodeId, Plant, ProcessNode};
use crate::schedule::{RecomputeScheduler, Trigger};
use crate::ui::SelectionState;

#[derive(Debug)]
pub struct FlowView {
    plant: Plant,
    config: RoutingConfig,
    selection: SelectionState,
    scheduler: RecomputeScheduler,
}

impl FlowView {
    pub fn new(plant: Plant, config: RoutingConfig) -> Self {
        let selection = SelectionState::new(&plant);
        let scheduler = RecomputeScheduler::from_config(&config);
        Self { plant, config, selection, scheduler }
    }

    pub fn plant(&self) -> &Plant {
        &self.plant
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn scheduler(&self) -> &RecomputeScheduler {
        &self.scheduler
    }

    pub fn active_workshop(&self) -> Option<&ProcessNode> {
        self.selection.selected_workshop(&self.plant)
    }

    pub fn mount(&mut self, now: Instant) {
        self.scheduler.request(Trigger::Mount, now);
    }

    pub fn watch_layout(&mut self, signal: &LayoutSignal) {
        self.scheduler.watch_layout(signal);
    }

    /// Re-selecting the active workshop only drops the station selection; it is not a switch.
    pub fn select_workshop(&mut self, id: NodeId, now: Instant) -> bool {
        let switched = self.selection.workshop_id() != Some(&id);
        let changed = self.selection.select_workshop(id);
        if switched {
            self.scheduler.request(Trigger::WorkshopSwitched, now);
        } else if changed {
            self.scheduler.request(Trigger::SelectionChanged, now);
        }
        changed
    }

    /// Applies a station click. Stations outside the active workshop and inactive stations are
    /// ignored.
    pub fn select_station(&mut self, id: &NodeId, now: Instant) -> bool {
        let changed = self.selection.select_station_checked(&self.plant, id);
        if changed {
            self.scheduler.request(Trigger::SelectionChanged, now);
        }
        changed
    }

    pub fn clear_station(&mut self, now: Instant) -> bool {
        let changed = self.selection.clear_station();
        if changed {
            self.scheduler.request(Trigger::SelectionChanged, now);
        }
        changed
    }

    /// Swaps in a reloaded plant.
    ///
    /// The selection survives when its workshop still exists; otherwise it falls back to the
    /// first workshop of the new plant, which counts as a workshop switch.
    pub fn replace_plant(&mut self, plant: Plant, now: Instant) {
        self.plant = plant;
        let switched = if self.selection.selected_workshop(&self.plant).is_none() {
            self.selection.select_first_workshop(&self.plant)
        } else {
            if self.selection.station_id().is_some()
                && self.selection.selected_station(&self.plant).is_none()
            {
                self.selection.clear_station();
            }
            false
        };
        let trigger = if switched { Trigger::WorkshopSwitched } else { Trigger::TreeChanged };
        self.scheduler.request(trigger, now);
    }

    /// Runs at most one routing pass over the active workshop and publishes the result.
    pub fn frame<B: BoxLookup + ?Sized>(
        &mut self,
        now: Instant,
        boxes: &B,
    ) -> Option<RoutingReport> {
        let plant = &self.plant;
        let config = &self.config;
        let selection = &self.selection;
        self.scheduler.on_frame(now, || match selection.selected_workshop(plant) {
            Some(workshop) => route_workshop(workshop, boxes, config, selection.station_id()),
            None => RoutingReport::default(),
        })
    }

    pub fn routes(&self) -> Arc<[Route]> {
        self.scheduler.publisher().current()
    }

    pub fn subscribe_routes(&self) -> watch::Receiver<Arc<[Route]>> {
        self.scheduler.publisher().subscribe()
    }
}
