// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Criterion settings for the routing benches.
//!
//! A routing pass over even the largest synthetic workshop finishes well under a millisecond,
//! so runs use many samples over short windows and a noise threshold wide enough to ignore
//! allocator jitter. `PLANTFLOW_BENCH_QUICK=1` shrinks everything for CI smoke runs.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

#[derive(Debug, Clone, Copy)]
struct BenchSettings {
    /// Sampling frequency in Hz; `0` leaves the profiler detached.
    profile_freq: i32,
    sample_size: usize,
    warm_up: Duration,
    measurement: Duration,
    noise_threshold: f64,
}

impl BenchSettings {
    const FULL: Self = Self {
        profile_freq: 997,
        sample_size: 120,
        warm_up: Duration::from_millis(800),
        measurement: Duration::from_secs(3),
        noise_threshold: 0.03,
    };

    const QUICK: Self = Self {
        profile_freq: 0,
        sample_size: 10,
        warm_up: Duration::from_millis(100),
        measurement: Duration::from_millis(500),
        noise_threshold: 0.10,
    };

    fn from_env() -> Self {
        let base = if env_flag("PLANTFLOW_BENCH_QUICK") { Self::QUICK } else { Self::FULL };
        Self {
            profile_freq: env_parse("PLANTFLOW_PROFILE_FREQ").map_or(base.profile_freq, |hz: i32| {
                hz.clamp(0, 4000)
            }),
            sample_size: env_parse("PLANTFLOW_BENCH_SAMPLES")
                .map_or(base.sample_size, |n: usize| n.clamp(10, 500)),
            warm_up: env_parse("PLANTFLOW_BENCH_WARMUP_MS")
                .map_or(base.warm_up, |ms: u64| Duration::from_millis(ms.clamp(50, 10_000))),
            measurement: env_parse("PLANTFLOW_BENCH_MEASURE_MS")
                .map_or(base.measurement, |ms: u64| Duration::from_millis(ms.clamp(100, 60_000))),
            noise_threshold: base.noise_threshold,
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse().ok())
}

fn env_flag(name: &str) -> bool {
    matches!(std::env::var(name).as_deref(), Ok("1" | "true" | "yes"))
}

/// Criterion tuned for routing passes. A pprof flamegraph is written per bench when run with
/// `--profile-time <secs>` and the sampling frequency is non-zero.
pub fn criterion() -> Criterion {
    let settings = BenchSettings::from_env();

    let criterion = Criterion::default()
        .sample_size(settings.sample_size)
        .warm_up_time(settings.warm_up)
        .measurement_time(settings.measurement)
        .noise_threshold(settings.noise_threshold);

    if settings.profile_freq > 0 {
        criterion.with_profiler(PProfProfiler::new(settings.profile_freq, Output::Flamegraph(None)))
    } else {
        criterion
    }
}
