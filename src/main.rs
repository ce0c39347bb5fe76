// SPDX-FileCopyrightText: 2026 Plantflow Authors
// SPDX-License-Identifier: LicenseRef-Plantflow-Proprietary
//
// All rights reserved.
//
// This file is part of Plantflow and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plantflow CLI entrypoint.
//!
//! Loads a plant (or the built-in demo plant), routes one workshop over either a measured box
//! table or the synthetic station grid, and prints workshop summaries plus routes as JSON.
//!
//! Logs go to stderr; set `PLANTFLOW_LOG` (e.g. `debug`) to see recompute details.

use std::error::Error;
use std::time::Instant;

use plantflow::config::RoutingConfig;
use plantflow::layout::{measure_grid, BoxTable, GridSpec, RoutingReport};
use plantflow::model::{NodeId, Plant};
use plantflow::view::FlowView;
use serde_json::json;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PLANTFLOW_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--demo] [--workshop <id>] [--station <id>] [--config <file>] [--boxes <file>] [--width <units>]\n  {program} --plant <file> [--workshop <id>] [--station <id>] [--config <file>] [--boxes <file>] [--width <units>]\n\nWithout --plant the built-in demo plant is used (and --demo is implied).\n--boxes reads an id -> {{left, top, width, height}} JSON table; otherwise the synthetic\nstation grid of --width units (default 1200) is measured.\n\nNumeric routing settings can be overridden with PLANTFLOW_* environment variables.\nLogging is controlled by {LOG_ENV} (default `warn`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    demo: bool,
    plant: Option<String>,
    boxes: Option<String>,
    config: Option<String>,
    workshop: Option<String>,
    station: Option<String>,
    width: Option<f64>,
}

fn set_once(slot: &mut Option<String>, value: Option<String>) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value.ok_or(())?);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--plant" => set_once(&mut options.plant, args.next())?,
            "--boxes" => set_once(&mut options.boxes, args.next())?,
            "--config" => set_once(&mut options.config, args.next())?,
            "--workshop" => set_once(&mut options.workshop, args.next())?,
            "--station" => set_once(&mut options.station, args.next())?,
            "--width" => {
                if options.width.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let width: f64 = raw.parse().map_err(|_| ())?;
                if !width.is_finite() || width <= 0.0 {
                    return Err(());
                }
                options.width = Some(width);
            }
            _ => return Err(()),
        }
    }

    if options.demo && options.plant.is_some() {
        return Err(());
    }
    if options.boxes.is_some() && options.width.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn report_json(workshop: Option<&NodeId>, report: &RoutingReport) -> serde_json::Value {
    let routes = report
        .routes
        .iter()
        .map(|route| {
            json!({
                "from": route.from(),
                "to": route.to(),
                "class": route.class(),
                "weight": route.weight(),
                "points": route.points(),
                "path": route.path_data(),
            })
        })
        .collect::<Vec<_>>();

    json!({
        "workshop": workshop,
        "routes": routes,
        "droppedUnavailable": report.dropped_unavailable,
        "skippedIsolated": report.skipped_isolated,
        "skippedDistant": report.skipped_distant,
    })
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "plantflow".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        let demo = options.demo || options.plant.is_none();
        let plant = match options.plant.as_deref() {
            Some(path) => Plant::from_json_file(path)?,
            None => plantflow::model::fixtures::demo_plant(),
        };
        for issue in plant.validate() {
            tracing::warn!(%issue, "malformed plant tree");
        }

        let config = match options.config.as_deref() {
            Some(path) => RoutingConfig::from_json_file(path)?,
            None if demo => plantflow::model::fixtures::demo_routing_config(),
            None => RoutingConfig::default(),
        };
        let config = config.apply_env()?;

        let now = Instant::now();
        let mut view = FlowView::new(plant, config);
        if let Some(id) = options.workshop.as_deref() {
            view.plant().workshop(id)?;
            view.select_workshop(NodeId::new(id)?, now);
        }
        if let Some(id) = options.station.as_deref() {
            if !view.select_station(&NodeId::new(id)?, now) {
                tracing::warn!(station = id, "station not selectable in the active workshop");
            }
        }
        view.mount(now);

        let boxes = match options.boxes.as_deref() {
            Some(path) => BoxTable::from_json_str(&std::fs::read_to_string(path)?)?,
            None => {
                let spec = GridSpec {
                    width: options.width.unwrap_or(GridSpec::default().width),
                    ..GridSpec::default()
                };
                view.active_workshop().map(|ws| measure_grid(ws, &spec)).unwrap_or_default()
            }
        };

        let report = view.frame(now, &boxes).unwrap_or_default();
        let output = json!({
            "workshops": view.plant().summaries(),
            "selection": {
                "workshop": view.selection().workshop_id(),
                "station": view.selection().station_id(),
            },
            "routing": report_json(view.selection().workshop_id(), &report),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("plantflow: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_options, CliOptions};

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values.iter().map(|value| (*value).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
    }

    #[test]
    fn parses_demo_with_selection() {
        let options = parse_options(args(&["--demo", "--workshop", "ws-assembly", "--station", "asm-3"]))
            .expect("parse options");
        assert!(options.demo);
        assert_eq!(options.workshop.as_deref(), Some("ws-assembly"));
        assert_eq!(options.station.as_deref(), Some("asm-3"));
    }

    #[test]
    fn parses_plant_config_and_boxes() {
        let options = parse_options(args(&[
            "--plant",
            "plant.json",
            "--config",
            "routing.json",
            "--boxes",
            "boxes.json",
        ]))
        .expect("parse options");
        assert_eq!(options.plant.as_deref(), Some("plant.json"));
        assert_eq!(options.config.as_deref(), Some("routing.json"));
        assert_eq!(options.boxes.as_deref(), Some("boxes.json"));
        assert!(!options.demo);
    }

    #[test]
    fn parses_width() {
        let options = parse_options(args(&["--width", "800"])).expect("parse options");
        assert_eq!(options.width, Some(800.0));
    }

    #[test]
    fn rejects_invalid_width() {
        parse_options(args(&["--width", "wide"])).unwrap_err();
        parse_options(args(&["--width", "0"])).unwrap_err();
        parse_options(args(&["--width", "-5"])).unwrap_err();
    }

    #[test]
    fn rejects_demo_with_plant() {
        parse_options(args(&["--demo", "--plant", "plant.json"])).unwrap_err();
    }

    #[test]
    fn rejects_width_with_boxes() {
        parse_options(args(&["--boxes", "boxes.json", "--width", "800"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_and_positional_args() {
        parse_options(args(&["--nope"])).unwrap_err();
        parse_options(args(&["plant.json"])).unwrap_err();
    }

    #[test]
    fn rejects_duplicate_flags_and_missing_values() {
        parse_options(args(&["--demo", "--demo"])).unwrap_err();
        parse_options(args(&["--station", "a", "--station", "b"])).unwrap_err();
        parse_options(args(&["--workshop"])).unwrap_err();
    }
}
