//! Generate a default batch configuration file
//!
//! Writes one of the built-in catalogs as JSON, ready to be edited and
//! fed back to the batch runner.

use std::{env, path::Path, process};

use recolor_drinks::BatchConfig;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json> [--cups]", args[0]);
        eprintln!();
        eprintln!("Writes the built-in drink catalog by default, or the");
        eprintln!("paper cup catalog with --cups.");
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);
    let use_cups = args.iter().skip(2).any(|a| a == "--cups");

    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = if use_cups {
        BatchConfig::paper_cup_menu()
    } else {
        BatchConfig::drink_menu()
    };

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!("  Products: {}", config.products.len());
            eprintln!("  Output:   {}", config.output_dir.display());
            match config.output_size {
                Some(size) => eprintln!("  Size:     {}x{}", size, size),
                None => eprintln!("  Size:     template dimensions"),
            }
            eprintln!("  Quality:  {}", config.jpeg_quality);
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
