//! Generator entry point — CLI wiring and config-driven pipeline invocation.

use std::path::Path;
use std::process;

use edco_bidgen::catalog::Catalog;
use edco_bidgen::config::GeneratorConfig;
use edco_bidgen::io::export::{export_curves_csv, export_records_csv};
use edco_bidgen::runner::run_generation;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    catalog_path: Option<String>,
    records_out: Option<String>,
    curves_out: Option<String>,
}

fn print_help() {
    eprintln!("edco-bidgen — synthetic appliance populations and tariff bid curves");
    eprintln!();
    eprintln!("Usage: edco-bidgen [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>     Load generator config from TOML file");
    eprintln!("  --preset <name>       Use a built-in preset (baseline, dense, sparse)");
    eprintln!("  --seed <u64>          Override random seed");
    eprintln!("  --catalog <path>      Load appliance catalog from CSV (default: built-in)");
    eprintln!("  --records-out <path>  Export appliance records to CSV");
    eprintln!("  --curves-out <path>   Export consolidated curves to CSV");
    eprintln!("  --help                Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        seed_override: None,
        catalog_path: None,
        records_out: None,
        curves_out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
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
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--catalog" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --catalog requires a path argument");
                    process::exit(1);
                }
                cli.catalog_path = Some(args[i].clone());
            }
            "--records-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --records-out requires a path argument");
                    process::exit(1);
                }
                cli.records_out = Some(args[i].clone());
            }
            "--curves-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --curves-out requires a path argument");
                    process::exit(1);
                }
                cli.curves_out = Some(args[i].clone());
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

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline default
    let mut config = if let Some(ref path) = cli.scenario_path {
        match GeneratorConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match GeneratorConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        GeneratorConfig::baseline()
    };

    // Apply seed override
    if let Some(seed) = cli.seed_override {
        config.generation.seed = seed;
    }

    // Validate before any sampling; no partial output on failure
    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Catalog load is fatal on failure
    let catalog = if let Some(ref path) = cli.catalog_path {
        match Catalog::from_csv_path(Path::new(path)) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        Catalog::builtin()
    };

    let result = run_generation(&config, &catalog);

    // Per-subarea curves
    for curve in &result.curves {
        println!("{curve}");
    }

    // Parallel rounded vectors, one row per subarea
    println!("cumulative power demand bids (W):");
    for curve in &result.curves {
        println!("  subarea {}: {:?}", curve.subarea_id, curve.cumulative_power());
    }
    println!("cumulative revenues:");
    for curve in &result.curves {
        println!("  subarea {}: {:?}", curve.subarea_id, curve.cumulative_revenue());
    }
    println!(
        "{} appliances across {} subareas",
        result.records.len(),
        result.curves.len()
    );

    // Export CSVs if requested
    if let Some(ref path) = cli.records_out {
        if let Err(e) = export_records_csv(&result.records, Path::new(path)) {
            eprintln!("error: failed to write records CSV: {e}");
            process::exit(1);
        }
        eprintln!("Appliance records written to {path}");
    }
    if let Some(ref path) = cli.curves_out {
        if let Err(e) = export_curves_csv(&result.curves, Path::new(path)) {
            eprintln!("error: failed to write curves CSV: {e}");
            process::exit(1);
        }
        eprintln!("Consolidated curves written to {path}");
    }
}
