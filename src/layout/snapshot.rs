// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Geometry handed to routing by the render layer.
//!
//! The render layer owns measurement. Routing only asks for a box by id and is told, through
//! a [`LayoutSignal`], that some box may have moved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::geometry::LayoutBox;
use crate::model::NodeId;

/// Current box of a rendered node, or `None` while it is not mounted or not yet measured.
pub trait BoxLookup {
    fn box_of(&self, id: &NodeId) -> Option<LayoutBox>;
}

impl<F> BoxLookup for F
where
    F: Fn(&NodeId) -> Option<LayoutBox>,
{
    fn box_of(&self, id: &NodeId) -> Option<LayoutBox> {
        self(id)
    }
}

/// Id to box table filled by the render layer after each layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxTable {
    boxes: BTreeMap<NodeId, LayoutBox>,
}

impl BoxTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NodeId, layout_box: LayoutBox) -> Option<LayoutBox> {
        self.boxes.insert(id, layout_box)
    }

    pub fn remove(&mut self, id: &NodeId) -> Option<LayoutBox> {
        self.boxes.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&LayoutBox> {
        self.boxes.get(id)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &LayoutBox)> {
        self.boxes.iter()
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl BoxLookup for BoxTable {
    fn box_of(&self, id: &NodeId) -> Option<LayoutBox> {
        self.boxes.get(id).copied()
    }
}

impl FromIterator<(NodeId, LayoutBox)> for BoxTable {
    fn from_iter<I: IntoIterator<Item = (NodeId, LayoutBox)>>(iter: I) -> Self {
        Self { boxes: iter.into_iter().collect() }
    }
}

/// Push side of the layout-change notification.
///
/// Notifications carry no payload; a generation counter lets any number of notifications
/// between two polls collapse into a single observed change.
#[derive(Debug)]
pub struct LayoutSignal {
    tx: watch::Sender<u64>,
}

impl Default for LayoutSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Announces that some observed box may have changed.
    pub fn notify(&self) {
        self.tx.send_modify(|generation| *generation = generation.wrapping_add(1));
    }

    pub fn generation(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Subscribes to change notifications. Dropping the subscription unsubscribes.
    pub fn subscribe(&self) -> LayoutSubscription {
        LayoutSubscription { rx: self.tx.subscribe() }
    }
}

#[derive(Debug)]
pub struct LayoutSubscription {
    rx: watch::Receiver<u64>,
}

impl LayoutSubscription {
    /// True when at least one notification arrived since the previous call.
    ///
    /// A closed signal reports no further changes.
    pub fn take_changed(&mut self) -> bool {
        match self.rx.has_changed() {
            Ok(true) => {
                self.rx.borrow_and_update();
                true
            }
            Ok(false) | Err(_) => false,
        }
    }
}
