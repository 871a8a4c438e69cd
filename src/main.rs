// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{Context, Result};
use screensets::{SetManager, SetNumber, SetsConfig};
use std::env;
use tracing::Level;

fn print_usage() {
    println!("SCREENSETS - Screen-set manager for live pattern looping");
    println!();
    println!("Usage: screensets [--verbose] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --layout                  Show the set-number grid");
    println!("  --show [FILE]             List the sets of a layout file (or the default layout)");
    println!("  --show-patterns [FILE]    List the sets with their patterns");
    println!("  --swap <A> <B> [FILE]     Swap sets A and B, then list the sets");
    println!("  --play <N> [FILE]         Make set N the play-screen, then list the sets");
    println!("  --help                    Show this help message");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_manager(path: Option<&String>) -> Result<SetManager> {
    match path {
        Some(path) => SetsConfig::load(path)?
            .build()
            .with_context(|| format!("Failed to build sets from {}", path)),
        None => Ok(SetManager::new()),
    }
}

fn parse_set(arg: Option<&String>, option: &str) -> Result<SetNumber> {
    let arg = arg.with_context(|| format!("{} requires a set number", option))?;
    arg.parse()
        .map_err(|_| anyhow::anyhow!("Invalid set number: {}", arg))
}

fn print_layout(manager: &SetManager) {
    println!("Set layout ({} rows x {} columns):", manager.rows(), manager.columns());
    for row in 0..manager.rows() {
        let line: Vec<String> = (0..manager.columns())
            .map(|column| format!("{:>4}", manager.calculate_set(row, column)))
            .collect();
        println!("{}", line.join(""));
    }
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    args.retain(|a| a != "--verbose" && a != "-v");
    init_logging(verbose);

    if args.is_empty() {
        println!("SCREENSETS - Screen-set manager for live pattern looping");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[0].as_str() {
        "--layout" => {
            print_layout(&SetManager::new());
        }
        "--show" => {
            load_manager(args.get(1))?.show(false);
        }
        "--show-patterns" => {
            load_manager(args.get(1))?.show(true);
        }
        "--swap" => {
            let set0 = parse_set(args.get(1), "--swap")?;
            let set1 = parse_set(args.get(2), "--swap")?;
            let mut manager = load_manager(args.get(3))?;
            if !manager.swap_sets(set0, set1) {
                eprintln!("Error: could not swap sets {} and {}", set0, set1);
                std::process::exit(1);
            }
            manager.show(false);
        }
        "--play" => {
            let setno = parse_set(args.get(1), "--play")?;
            let mut manager = load_manager(args.get(2))?;
            if !manager.set_playscreen(setno) {
                eprintln!("Error: set {} cannot be the play-screen", setno);
                std::process::exit(1);
            }
            manager.show(false);
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[0]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
