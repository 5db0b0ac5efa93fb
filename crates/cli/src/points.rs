//! CSV point tables in and out (polars), plus the JSON hull report.

use anyhow::{bail, Context, Result};
use geohull::{GeoPoint, SearchPoint};
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

pub const LONGITUDE: &str = "longitude";
pub const LATITUDE: &str = "latitude";

/// Read `longitude,latitude` columns (degrees). Payload is the row index.
pub fn read_points_csv(path: &Path) -> Result<Vec<SearchPoint<usize>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([col(LONGITUDE), col(LATITUDE)])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;

    let lon = df.column(LONGITUDE)?.cast(&DataType::Float64)?;
    let lat = df.column(LATITUDE)?.cast(&DataType::Float64)?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in lon.f64()?.into_iter().zip(lat.f64()?.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => {
                out.push(SearchPoint::new(GeoPoint::from_degrees(x, y), row));
            }
            _ => bail!("row {row}: missing or non-finite coordinate"),
        }
    }
    Ok(out)
}

/// Write points as a `longitude,latitude` CSV (degrees).
pub fn write_points_csv<P>(path: &Path, points: &[SearchPoint<P>]) -> Result<()> {
    let lon: Vec<f64> = points
        .iter()
        .map(|p| p.location.longitude.to_degrees())
        .collect();
    let lat: Vec<f64> = points
        .iter()
        .map(|p| p.location.latitude.to_degrees())
        .collect();
    let mut df = df!(LONGITUDE => lon, LATITUDE => lat)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct HullRow {
    pub index: usize,
    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Serialize)]
pub struct HullReport {
    pub pruned: bool,
    pub input_count: usize,
    pub tolerance: String,
    pub points: Vec<HullRow>,
}

impl HullReport {
    pub fn new(
        pruned: bool,
        input_count: usize,
        tolerance: String,
        points: &[SearchPoint<usize>],
    ) -> Self {
        let points = points
            .iter()
            .map(|p| HullRow {
                index: p.payload,
                longitude: p.location.longitude.to_degrees(),
                latitude: p.location.latitude.to_degrees(),
            })
            .collect();
        Self {
            pruned,
            input_count,
            tolerance,
            points,
        }
    }
}
