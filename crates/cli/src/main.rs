use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geohull::rand::{draw_cloud, CloudCfg, ReplayToken};
use geohull::{GeoPoint, GrahamScan, Tolerance};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{read_points_csv, write_points_csv, HullReport};
use provenance::Provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex-hull pruning of geographic point sets")]
struct Cmd {
    /// Optional run label; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Keep only the convex-hull vertices of a longitude/latitude CSV
    Prune {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// "auto" or a non-negative dead-zone width
        #[arg(long, default_value_t = Tolerance::default())]
        tolerance: Tolerance,
    },
    /// Write a replayable random cloud as CSV
    Sample {
        #[arg(long, default_value_t = 12)]
        boundary: usize,
        #[arg(long, default_value_t = 200)]
        interior: usize,
        /// Circle radius in degrees
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        #[arg(long, default_value_t = 7.0)]
        lon: f64,
        #[arg(long, default_value_t = 47.0)]
        lat: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Prune {
            input,
            out,
            tolerance,
        } => prune(&input, &out, tolerance, cmd.tag),
        Action::Sample {
            boundary,
            interior,
            radius,
            lon,
            lat,
            seed,
            index,
            out,
        } => {
            let cfg = CloudCfg {
                center: GeoPoint::from_degrees(lon, lat),
                radius_deg: radius,
                boundary_count: boundary,
                interior_count: interior,
            };
            sample(&cfg, ReplayToken { seed, index }, &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn prune(input: &Path, out: &Path, tolerance: Tolerance, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "prune");
    let mut pts = read_points_csv(input)?;
    let input_count = pts.len();

    let mut scan = GrahamScan::new(tolerance);
    let pruned = scan.prune_interior(&mut pts);
    let tolerance = scan.tolerance();
    tracing::info!(input_count, kept = pts.len(), pruned, %tolerance, "hull");

    let report = HullReport::new(pruned, input_count, tolerance.to_string(), &pts);
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let prov = Provenance::new(
        "prune",
        json!({
            "input": input.to_string_lossy(),
            "tolerance": tolerance.to_string(),
            "input_count": input_count,
            "kept": pts.len(),
        }),
    )
    .with_tag(tag);
    prov.write_sidecar(out)?;
    Ok(())
}

fn sample(cfg: &CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(
        boundary = cfg.boundary_count,
        interior = cfg.interior_count,
        radius = cfg.radius_deg,
        seed = tok.seed,
        index = tok.index,
        out = %out.display(),
        "sample"
    );
    let pts = draw_cloud(cfg, tok)?;
    ensure_parent(out)?;
    write_points_csv(out, &pts)?;

    let prov = Provenance::new(
        "sample",
        json!({
            "center_deg": [cfg.center.longitude.to_degrees(), cfg.center.latitude.to_degrees()],
            "radius_deg": cfg.radius_deg,
            "boundary_count": cfg.boundary_count,
            "interior_count": cfg.interior_count,
            "seed": tok.seed,
            "index": tok.index,
        }),
    )
    .with_tag(tag);
    prov.write_sidecar(out)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = Provenance::new("report", json!({})).with_tag(tag).to_json(&[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn sample_then_prune_keeps_the_ring() {
        let dir = tempdir().unwrap();
        let csv = dir.path().join("cloud.csv");
        let hull = dir.path().join("out").join("hull.json");
        let cfg = CloudCfg {
            boundary_count: 9,
            interior_count: 150,
            ..CloudCfg::default()
        };
        sample(&cfg, ReplayToken { seed: 5, index: 1 }, &csv, None).unwrap();
        assert!(dir.path().join("cloud.provenance.json").exists());

        prune(&csv, &hull, Tolerance::Fixed(0.0), Some("t".into())).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&hull).unwrap()).unwrap();
        assert_eq!(parsed["pruned"], true);
        assert_eq!(parsed["input_count"], 159);
        assert_eq!(parsed["points"].as_array().unwrap().len(), 9);
        assert_eq!(parsed["tolerance"], "0");
        assert!(dir.path().join("out").join("hull.provenance.json").exists());
    }

    #[test]
    fn tolerance_flag_parses() {
        let cmd = Cmd::try_parse_from([
            "cli", "prune", "--input", "a.csv", "--out", "b.json", "--tolerance", "auto",
        ])
        .unwrap();
        match cmd.action {
            Action::Prune { tolerance, .. } => assert_eq!(tolerance, Tolerance::Auto),
            _ => panic!("expected prune"),
        }
        assert!(Cmd::try_parse_from([
            "cli", "prune", "--input", "a.csv", "--out", "b.json", "--tolerance", "-3",
        ])
        .is_err());
    }
}
