//! Orbit model demonstration
//!
//! Walks the simplified planets through a year and shows how the
//! Earth-Mars distance and the pair confidence come out.
//!
//! Usage: cargo run --example orbit_demo

use simplesol::calendar;
use simplesol::constants::AU_KM;
use simplesol::{Catalog, MetricsEngine, OrbitalModel};

fn main() -> simplesol::Result<()> {
    let catalog = Catalog::solar_system()?;
    let model = OrbitalModel::new(&catalog);
    let engine = MetricsEngine::new(&catalog);

    println!("Simplified orbital periods:");
    for entry in catalog.entries() {
        println!(
            "  {:<8} a = {:>6.3} AU  period = {:>8.2} days (wraps after {} days)",
            entry.name,
            entry.semi_major_axis_au,
            entry.orbital_period_days(),
            entry.truncated_period_days()
        );
    }

    let date = calendar::parse_date("2024-01-01")?;
    println!("\nPositions on {}:", date);
    for (name, pos) in model.positions(date) {
        println!("  {:<8} {}", name, pos);
    }

    println!("\nEarth-Mars distance over 2024:");
    let start = calendar::days_since_epoch(date);
    for month in 0..12 {
        let day = calendar::date_from_epoch(start + month * 30)?;
        let dist_au = engine.compute_distance("Earth", "Mars", day)?;
        println!(
            "  {}: {:.4} AU ({:.0} million km)",
            day,
            dist_au,
            dist_au * AU_KM / 1e6
        );
    }

    println!(
        "\nEarth-Mars confidence: {:.2}",
        engine.compute_confidence("Earth", "Mars")?
    );

    Ok(())
}
