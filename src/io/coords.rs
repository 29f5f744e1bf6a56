use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::geometry::primitives::Point;

/// Loosely structured coordinate input as it arrives in JSON payloads: bare numbers,
/// `{x, y}` or `{lon, lat}` records, or arbitrarily nested sequences of any of these.
/// Anything else fails to deserialize.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Coords {
    Scalar(f64),
    Xy { x: f64, y: f64 },
    LonLat { lon: f64, lat: f64 },
    Seq(Vec<Coords>),
}

impl Coords {
    pub fn parse(value: &serde_json::Value) -> Result<Coords> {
        serde_json::from_value(value.clone()).context("unrecognised coordinate structure")
    }

    /// Flatten to a run of coordinates, axis order x (lon) before y (lat).
    /// An odd-length run cannot pair into points and is rejected.
    pub fn flatten(&self) -> Result<Vec<f64>> {
        let mut run = Vec::new();
        self.collect(&mut run);
        ensure!(
            run.len() % 2 == 0,
            "odd number of coordinates: {}",
            run.len()
        );
        Ok(run)
    }

    fn collect(&self, run: &mut Vec<f64>) {
        match self {
            Coords::Scalar(v) => run.push(*v),
            Coords::Xy { x, y } => run.extend([*x, *y]),
            Coords::LonLat { lon, lat } => run.extend([*lon, *lat]),
            Coords::Seq(items) => items.iter().for_each(|c| c.collect(run)),
        }
    }

    pub fn to_points(&self) -> Result<Vec<Point>> {
        Ok(self
            .flatten()?
            .chunks(2)
            .map(|c| Point(c[0], c[1]))
            .collect())
    }

    /// Exactly one point's worth of coordinates.
    pub fn to_point(&self) -> Result<Point> {
        let run = self.flatten()?;
        ensure!(
            run.len() == 2,
            "expected exactly 2 coordinates, got {}",
            run.len()
        );
        Ok(Point(run[0], run[1]))
    }
}

impl TryFrom<&Coords> for Point {
    type Error = anyhow::Error;

    fn try_from(coords: &Coords) -> Result<Point> {
        coords.to_point()
    }
}
