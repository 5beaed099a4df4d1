//! Basic example demonstrating a step-by-step facility placement session
//!
//! Run with: cargo run --example basic

use facility_kmeans::{OptimizationSession, SessionConfig};

fn main() {
    println!("=== facility-kmeans example ===\n");

    let config = SessionConfig::new(42)
        .with_grid_size(20)
        .with_points(60)
        .with_facilities(3);

    let mut session = OptimizationSession::with_config(config.clone());

    session
        .configure_grid(config.grid_size)
        .expect("Grid configuration failed");
    let residences = session
        .generate_points(config.n_points)
        .expect("Point generation failed");
    let facilities = session
        .generate_facilities(config.n_facilities)
        .expect("Facility generation failed");

    println!(
        "Generated {} residences on a {}x{} grid",
        residences.len(),
        config.grid_size,
        config.grid_size
    );
    println!("Initial facilities:");
    for facility in &facilities {
        println!("  Facility {}: ({}, {})", facility.id, facility.x, facility.y);
    }
    println!();

    for _ in 0..6 {
        session.assign().expect("Assignment failed");
        let assigned = session.metrics();
        let report = session.update().expect("Update failed");

        println!(
            "  Iteration {}: avg distance = {:.3}, inertia = {:.1}, shift = {:.3}",
            report.iteration, assigned.average_distance, assigned.inertia, report.shift
        );
    }

    println!("\nFinal facilities:");
    session.assign().expect("Assignment failed");
    let sizes = session.cluster_sizes();
    for facility in session.snapshot().facilities {
        println!(
            "  Facility {}: ({}, {}) serving {} residences",
            facility.id, facility.x, facility.y, sizes[facility.id]
        );
    }

    let coverage = session.coverage();
    println!(
        "\nCoverage: {} of {} residences ({:.0}%)",
        coverage.assigned,
        coverage.total,
        coverage.ratio() * 100.0
    );

    println!("\n=== Done! ===");
}
