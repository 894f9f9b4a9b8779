//! Prints the capture plan for a camera path configuration.
//!
//! Usage:
//!   cargo run --example path_preview [config.json] [--json]
//!
//! Without a config file every built-in path is previewed with default
//! parameters. `--json` prints the full plan (poses included) as JSON.

use std::process::ExitCode;

use viewsweep::*;

fn print_plan(plan: &CapturePlan) {
    println!("== {} ({} frames)", plan.path_kind(), plan.len());
    for frame in plan {
        let p = frame.pose.position;
        println!(
            "{}  position=({:+.3}, {:+.3}, {:+.3})",
            frame.file_name, p.x, p.y, p.z
        );
    }
}

fn run(
    config_path: Option<&str>,
    as_json: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let configs = match config_path {
        Some(path) => vec![PathConfig::from_json(&std::fs::read_to_string(path)?)?],
        None => PathKind::ALL
            .into_iter()
            .map(|kind| {
                PathConfigParams::new()
                    .with_path_kind(kind)
                    .with_distance(2.0)
                    .with_density(12)
                    .with_angular_step(60.0)
                    .validate()
            })
            .collect::<Result<Vec<_>>>()?,
    };

    for config in &configs {
        let plan = CapturePlan::build(config)?;
        if as_json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            print_plan(&plan);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|a| a == "--json");
    let config_path = args.iter().find(|a| !a.starts_with("--")).map(String::as_str);

    match run(config_path, as_json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
