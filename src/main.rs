//! Revenue stacking explorer entry point — CLI wiring over the store and estimator.

use std::path::Path;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use revstack::config::ScenarioConfig;
use revstack::data::CompatibilityStore;
use revstack::estimator;
use revstack::events::{EventRecord, append_event};
use revstack::io::export::export_csv;
use revstack::reporting;

/// Default location of the stacking dataset.
const DEFAULT_DATA_PATH: &str = "data/stacking_data.json";

/// Parsed CLI arguments.
struct CliArgs {
    data_path: Option<String>,
    services: Vec<String>,
    scenario_path: Option<String>,
    preset: Option<String>,
    export_out: Option<String>,
    events_log: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("revstack — UK energy-flexibility revenue stacking explorer");
    eprintln!();
    eprintln!("Usage: revstack [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data <path>        Stacking dataset JSON (default: data/stacking_data.json)");
    eprintln!("  --services <list>    Comma-separated service names for a stacking check");
    eprintln!("  --scenario <path>    Load estimator scenario from TOML config file");
    eprintln!(
        "  --preset <name>      Use a built-in preset ({})",
        ScenarioConfig::PRESETS.join(", ")
    );
    eprintln!("  --export <path>      Export the estimate summary to CSV");
    eprintln!("  --events-log <path>  Append run events to a CSV log");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve              Start REST API server");
        eprintln!("  --port <u16>         API server port (default: 3000)");
    }
    eprintln!("  --help               Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the commercial_baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        data_path: None,
        services: Vec::new(),
        scenario_path: None,
        preset: None,
        export_out: None,
        events_log: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--data" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --data requires a path argument");
                    process::exit(1);
                }
                cli.data_path = Some(args[i].clone());
            }
            "--services" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --services requires a comma-separated list");
                    process::exit(1);
                }
                cli.services = args[i]
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_out = Some(args[i].clone());
            }
            "--events-log" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --events-log requires a path argument");
                    process::exit(1);
                }
                cli.events_log = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn log_event(log_path: Option<&str>, event: &str, payload: String) {
    // Analytics are best-effort and must never abort the run.
    if let Some(path) = log_path {
        let record = EventRecord {
            timestamp_unix: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            event: event.to_string(),
            payload,
        };
        if let Err(e) = append_event(Path::new(path), &record) {
            eprintln!("warning: failed to append event log: {e}");
        }
    }
}

fn main() {
    let cli = parse_args();

    // The dataset is loaded exactly once; a missing or malformed file is
    // fatal to startup.
    let data_path = cli.data_path.as_deref().unwrap_or(DEFAULT_DATA_PATH);
    let store = match CompatibilityStore::from_json_file(Path::new(data_path)) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    reporting::print_metadata(store.metadata());

    // Stacking check across the selected services, all pairs, all modes.
    if !cli.services.is_empty() {
        if cli.services.len() < 2 {
            eprintln!("error: --services needs at least 2 service names");
            process::exit(1);
        }
        for name in &cli.services {
            if !store.services().iter().any(|s| s == name) {
                eprintln!("warning: \"{name}\" is not in the dataset service list");
            }
        }
        let pairs = store.check_multi_compatibility(&cli.services);
        reporting::print_compatibility_report(&pairs);
        for name in &cli.services {
            let reqs = store.technical_requirements(name);
            reporting::print_requirements(name, &reqs);
        }
        log_event(
            cli.events_log.as_deref(),
            "stacking_check",
            format!("services={}", cli.services.len()),
        );
    }

    // Load the estimator scenario: --scenario takes priority, then --preset,
    // then the commercial baseline.
    let scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::commercial_baseline()
    };

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let input = scenario.to_input();
    let result = estimator::estimate(&input);
    reporting::print_estimate_report(&result);
    log_event(
        cli.events_log.as_deref(),
        "estimator_submit",
        format!(
            "capacity_kw={} flex_hours={} programs={}",
            input.capacity_kw,
            input.flex_hours_per_day,
            input.programs.len()
        ),
    );

    if let Some(ref path) = cli.export_out {
        if let Err(e) = export_csv(&input, &result, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Estimate summary written to {path}");
        log_event(cli.events_log.as_deref(), "result_export", String::new());
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(revstack::api::AppState { store, scenario });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(revstack::api::serve(state, addr));
    }
}
