// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Instant;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use plantflow::config::RoutingConfig;
use plantflow::layout::{measure_grid, route_workshop, GridSpec, LayoutSignal};
use plantflow::model::fixtures::{demo_plant, demo_routing_config};
use plantflow::model::{Plant, ProcessNode};
use plantflow::view::FlowView;

mod fixtures;
mod profiler;

fn flow_all_zones() -> RoutingConfig {
    RoutingConfig { flow_zone_default: true, ..RoutingConfig::default() }
}

fn cases() -> Vec<(&'static str, ProcessNode, RoutingConfig)> {
    let demo = demo_plant();
    let assembly = demo.workshop("ws-assembly").expect("demo assembly").clone();
    let welding = demo.workshop("ws-welding").expect("demo welding").clone();

    vec![
        ("demo_welding", welding, demo_routing_config()),
        ("demo_assembly", assembly, demo_routing_config()),
        ("line_500", fixtures::line(500), RoutingConfig::default()),
        ("zoned_12x60", fixtures::zoned(12, 60), flow_all_zones()),
    ]
}

// Group names (`routing.grid`, `routing.workshop`, `routing.frame`) and case ids are stable so
// results stay comparable across refactors.
fn benches_routing(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("routing.grid");

        for (case_id, workshop, _) in cases() {
            let spec = GridSpec::default();
            group.throughput(Throughput::Elements(workshop.children().len() as u64));
            group.bench_function(case_id, move |b| {
                b.iter(|| black_box(measure_grid(black_box(&workshop), &spec).len()))
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("routing.workshop");

        for (case_id, workshop, config) in cases() {
            let boxes = measure_grid(&workshop, &GridSpec::default());
            let routes = route_workshop(&workshop, &boxes, &config, None).routes.len() as u64;

            group.throughput(Throughput::Elements(routes.max(1)));
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let report =
                        route_workshop(black_box(&workshop), black_box(&boxes), &config, None);
                    let mut acc = 0u64;
                    for route in &report.routes {
                        for point in route.points() {
                            acc = acc.wrapping_add(point.x().unsigned_abs() as u64);
                            acc = acc.wrapping_add(point.y().unsigned_abs() as u64);
                        }
                    }
                    black_box(acc)
                })
            });
        }

        group.finish();
    }

    {
        // A burst of layout notifications followed by one frame: the cost a resize pays.
        let mut group = c.benchmark_group("routing.frame");

        for (case_id, workshop, config) in cases() {
            let boxes = measure_grid(&workshop, &GridSpec::default());
            let mut view = FlowView::new(Plant::new(vec![workshop]), config);
            let signal = LayoutSignal::new();
            view.watch_layout(&signal);

            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    for _ in 0..16 {
                        signal.notify();
                    }
                    let report = view.frame(Instant::now(), black_box(&boxes));
                    black_box(report.map(|report| report.routes.len()))
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_routing
}
criterion_main!(benches);
