//! Drive a full facility placement run from the command line
//!
//! Reads an optional TOML configuration, then runs the configured number of
//! assign/update rounds and prints the metrics after each one.
//!
//! Usage: `facility-sim [config.toml]`
//!
//! Set `RUST_LOG=facility_kmeans=debug` to trace every phase transition.

use facility_kmeans::{OptimizationSession, SessionConfig};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let config = match args.len() {
        1 => SessionConfig::default(),
        2 => SessionConfig::from_toml_file(&args[1])?,
        _ => {
            eprintln!("Usage: {} [config.toml]", args[0]);
            std::process::exit(1);
        }
    };
    config.validate()?;

    eprintln!(
        "Running with m={}, n={}, A={}, seed={}, iterations={}",
        config.grid_size, config.n_points, config.n_facilities, config.seed, config.iterations
    );

    let mut session = OptimizationSession::with_config(config.clone());
    session.configure_grid(config.grid_size)?;
    session.generate_points(config.n_points)?;
    session.generate_facilities(config.n_facilities)?;

    println!("iteration\taverage_distance\tinertia\tshift");
    for _ in 0..config.iterations {
        session.assign()?;
        let report = session.update()?;
        let metrics = session.metrics();
        println!(
            "{}\t{:.4}\t{:.4}\t{:.4}",
            report.iteration, metrics.average_distance, metrics.inertia, report.shift
        );
    }

    println!();
    let sizes = session.cluster_sizes();
    for facility in session.snapshot().facilities {
        println!(
            "facility {} at ({}, {}) serves {} residences",
            facility.id, facility.x, facility.y, sizes[facility.id]
        );
    }

    Ok(())
}
