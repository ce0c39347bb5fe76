// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Recomputation scheduling and route publication.
//!
//! Triggers arrive at arbitrary frequency (resize bursts, content reflow, selection clicks).
//! The scheduler collapses them into at most one routing run per frame and publishes the result
//! as a whole-value replacement that any number of readers can observe.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::watch;

use crate::config::RoutingConfig;
use crate::layout::{LayoutSignal, LayoutSubscription, Route, RoutingReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    PendingRecompute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A workshop view was mounted for the first time.
    Mount,
    LayoutChanged,
    /// The active workshop's tree was replaced.
    TreeChanged,
    WorkshopSwitched,
    SelectionChanged,
    /// The delayed re-check armed by a mount or workshop switch came due.
    Recheck,
}

/// Publishes the latest route set. Each publish replaces the whole value.
#[derive(Debug)]
pub struct RoutePublisher {
    tx: watch::Sender<Arc<[Route]>>,
}

impl Default for RoutePublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutePublisher {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::from(Vec::new()));
        Self { tx }
    }

    pub fn publish(&self, routes: Vec<Route>) {
        self.tx.send_replace(Arc::from(routes));
    }

    pub fn current(&self) -> Arc<[Route]> {
        Arc::clone(&self.tx.borrow())
    }

    /// A reader that wakes on every publish.
    pub fn subscribe(&self) -> watch::Receiver<Arc<[Route]>> {
        self.tx.subscribe()
    }
}

#[derive(Debug)]
pub struct RecomputeScheduler {
    state: SchedulerState,
    recheck_delay: Duration,
    recheck_at: Option<Instant>,
    layout: Option<LayoutSubscription>,
    publisher: RoutePublisher,
    runs: u64,
    coalesced: u64,
}

impl RecomputeScheduler {
    pub fn new(recheck_delay: Duration) -> Self {
        Self {
            state: SchedulerState::Idle,
            recheck_delay,
            recheck_at: None,
            layout: None,
            publisher: RoutePublisher::new(),
            runs: 0,
            coalesced: 0,
        }
    }

    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(config.recheck_delay())
    }

    /// Follows layout-change notifications from `signal`, replacing any previous subscription.
    pub fn watch_layout(&mut self, signal: &LayoutSignal) {
        self.layout = Some(signal.subscribe());
    }

    pub fn unwatch_layout(&mut self) {
        self.layout = None;
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Triggers absorbed by an already pending recompute.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }

    pub fn recheck_at(&self) -> Option<Instant> {
        self.recheck_at
    }

    pub fn publisher(&self) -> &RoutePublisher {
        &self.publisher
    }

    /// Records a trigger. Returns true when it moved the scheduler out of `Idle`.
    ///
    /// Mounting or switching workshop also arms a one-shot re-check `recheck_delay` after
    /// `now`, replacing any earlier one.
    pub fn request(&mut self, trigger: Trigger, now: Instant) -> bool {
        if matches!(trigger, Trigger::Mount | Trigger::WorkshopSwitched) {
            self.recheck_at = Some(now + self.recheck_delay);
        }

        match self.state {
            SchedulerState::Idle => {
                tracing::debug!(?trigger, "recompute scheduled");
                self.state = SchedulerState::PendingRecompute;
                true
            }
            SchedulerState::PendingRecompute => {
                self.coalesced = self.coalesced.saturating_add(1);
                false
            }
        }
    }

    /// Runs once per visual frame.
    ///
    /// Collects pending layout notifications and a due re-check, then, if a recompute is
    /// pending, calls `recompute` exactly once, publishes its routes and returns the report.
    pub fn on_frame(
        &mut self,
        now: Instant,
        recompute: impl FnOnce() -> RoutingReport,
    ) -> Option<RoutingReport> {
        if self.layout.as_mut().is_some_and(LayoutSubscription::take_changed) {
            self.request(Trigger::LayoutChanged, now);
        }
        if self.recheck_at.is_some_and(|due| due <= now) {
            self.recheck_at = None;
            self.request(Trigger::Recheck, now);
        }

        if self.state == SchedulerState::Idle {
            return None;
        }

        let report = recompute();
        self.runs = self.runs.saturating_add(1);
        self.state = SchedulerState::Idle;
        tracing::debug!(
            run = self.runs,
            routes = report.routes.len(),
            dropped_unavailable = report.dropped_unavailable,
            "recompute published"
        );
        self.publisher.publish(report.routes.clone());
        Some(report)
    }
}
