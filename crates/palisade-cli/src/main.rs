//! zone-advisor binary
//!
//! Decision support for Palisade zone formation and protocol selection.

use std::io;
use std::path::PathBuf;

use palisade_cli::{run_select, run_zones, Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "zone-advisor zones <max_zones> [--seed <u64>] | zone-advisor select [--model <path>]";

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zone_advisor=info,palisade=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("zone-advisor: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run(args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("zones") => {
            let max_zones = args
                .get(1)
                .ok_or_else(|| Error::Usage(format!("missing <max_zones>\nusage: {USAGE}")))?
                .parse::<usize>()
                .map_err(|_| Error::Usage("max_zones must be a positive integer".into()))?;
            let seed = parse_flag(&args[2..], "--seed")?
                .map(|raw| {
                    raw.parse::<u64>()
                        .map_err(|_| Error::Usage("--seed expects an unsigned integer".into()))
                })
                .transpose()?;
            run_zones(max_zones, seed, io::stdin().lock(), io::stdout().lock())
        }
        Some("select") => {
            let model = parse_flag(&args[1..], "--model")?.map(PathBuf::from);
            run_select(model.as_deref(), io::stdin().lock(), io::stdout().lock())
        }
        _ => Err(Error::Usage(format!("usage: {USAGE}"))),
    }
}

/// Find `flag <value>` in the remaining arguments.
fn parse_flag(args: &[String], flag: &str) -> Result<Option<String>> {
    match args.iter().position(|a| a == flag) {
        Some(pos) => args
            .get(pos + 1)
            .cloned()
            .map(Some)
            .ok_or_else(|| Error::Usage(format!("{flag} expects a value"))),
        None => Ok(None),
    }
}
