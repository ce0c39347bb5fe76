// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plantflow: plant process-tree model and circuit-board style flow connector routing.
//!
//! The crate is rendering-agnostic. A render surface supplies measured node boxes through
//! [`layout::BoxLookup`], drives [`view::FlowView`] once per frame, and draws the published
//! [`layout::Route`] list.

pub mod config;
pub mod layout;
pub mod model;
pub mod schedule;
pub mod ui;
pub mod view;
