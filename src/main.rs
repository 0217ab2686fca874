//! Orebot -- an ore mining agent for the Unleash the Geek referee.
//!
//! This binary reads the referee's turn input from stdin and writes one
//! command per robot to stdout. Diagnostics go to stderr through
//! `env_logger` (set `RUST_LOG=debug` for per-robot traces).
//!
//! Usage:
//!   orebot [--config FILE] [--seed N]

use std::env;
use std::io::{self, BufWriter};
use std::process;

use log::{error, info};

use orebot::config::AgentConfig;
use orebot::engine::Engine;
use orebot::protocol::TurnReader;

fn main() {
    env_logger::init();

    let config = match parse_args(env::args().skip(1).collect()) {
        Ok(Some(config)) => config,
        Ok(None) => {
            print_usage();
            return;
        }
        Err(msg) => {
            eprintln!("{}", msg);
            print_usage();
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let (mut reader, width, height) = match TurnReader::from_header(stdin.lock()) {
        Ok(header) => header,
        Err(e) => {
            error!("failed to read header: {}", e);
            process::exit(1);
        }
    };
    let mut engine = Engine::new(config, width, height);

    loop {
        match reader.next_turn() {
            Ok(Some(report)) => {
                if let Err(e) = engine.handle_turn(&report, &mut out) {
                    error!("failed to write actions: {}", e);
                    process::exit(1);
                }
            }
            Ok(None) => break,
            Err(e) => {
                error!("turn {}: {}", engine.state.turn + 1, e);
                process::exit(1);
            }
        }
    }
    info!("input closed after {} turns", engine.state.turn);
}

/// Parses command-line flags. Returns `None` when help was requested.
fn parse_args(args: Vec<String>) -> Result<Option<AgentConfig>, String> {
    let mut config = AgentConfig::default();
    let mut seed: Option<u64> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path = args.get(i).ok_or("missing --config value")?;
                config = AgentConfig::from_path(path).map_err(|e| format!("{}: {}", path, e))?;
            }
            "--seed" => {
                i += 1;
                let value = args.get(i).ok_or("missing --seed value")?;
                seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {}", value))?,
                );
            }
            "--help" | "-h" => return Ok(None),
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    if seed.is_some() {
        config.seed = seed;
    }
    Ok(Some(config))
}

fn print_usage() {
    eprintln!("Usage: orebot [OPTIONS] < turns");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE  JSON configuration (missing fields use defaults)");
    eprintln!("  --seed N       Fixed random seed (default: entropy)");
    eprintln!("  --help         Show this help");
}
