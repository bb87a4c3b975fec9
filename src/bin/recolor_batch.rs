//! Batch CLI for recolor_drinks
//!
//! Generates the product image set from a JSON configuration or one of
//! the built-in menu catalogs.

use std::{env, path::Path, process};

use recolor_drinks::{run_batch, BatchConfig, ItemOutcome};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config_arg = None;
    let mut builtin = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--drinks" => builtin = Some(BatchConfig::drink_menu()),
            "--cups" => builtin = Some(BatchConfig::paper_cup_menu()),
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if config_arg.is_none() {
                    config_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple config paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match (builtin, config_arg) {
        (Some(_), Some(_)) => {
            eprintln!("Error: Pass either a config file or a built-in catalog, not both");
            process::exit(1);
        }
        (Some(config), None) => config,
        (None, Some(path)) => match BatchConfig::from_json_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config file: {}", e);
                process::exit(1);
            }
        },
        (None, None) => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    eprintln!("Recoloring {} products", config.products.len());
    eprintln!("Output directory: {}", config.output_dir.display());
    eprintln!();

    let summary = match run_batch(&config) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    for (code, outcome) in summary.outcomes() {
        match outcome {
            ItemOutcome::Generated => eprintln!("  [ok]   {}.jpg", code),
            ItemOutcome::Skipped => eprintln!("  [skip] {}.jpg exists", code),
            ItemOutcome::Failed(message) => eprintln!("  [fail] {}: {}", code, message),
        }
    }

    eprintln!();
    eprintln!("Batch complete:");
    eprintln!("  Generated: {}", summary.generated());
    eprintln!("  Failed:    {}", summary.failed());
    eprintln!("  Skipped:   {}", summary.skipped());

    if summary.failed() > 0 {
        process::exit(1);
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [--drinks | --cups | <config.json>]", program_name);
    eprintln!();
    eprintln!("Generate recolored product images for the menu.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json    JSON file with templates, output dir and product catalog");
    eprintln!("  --drinks       Use the built-in drink catalog");
    eprintln!("  --cups         Use the built-in paper cup catalog");
    eprintln!();
    eprintln!("Existing outputs are skipped; delete a file to regenerate it.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --drinks", program_name);
    eprintln!("  {} menu-config.json", program_name);
}
