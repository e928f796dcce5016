//! File input and output helpers for GeoJSON data.

use std::fs::File;
use std::io::{self, Read, Write};
use std::str::FromStr;

use geojson::{Feature, FeatureCollection, GeoJson, Geometry};
use serde_json::Value;

use crate::feature::FeatureRecord;
use crate::sink::ShapeId;

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing it.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}

/// Reads and parses a GeoJSON document.
pub fn read_geojson(path: &str) -> io::Result<GeoJson> {
    let contents = read_to_string(path)?;
    GeoJson::from_str(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Builds a feature collection of the selected records, in collection order.
///
/// `geometry_of` looks up the geometry behind each shape; records whose
/// geometry is unknown are written with a null geometry.
pub fn selection_to_geojson<'a, I, F>(records: I, key: &str, geometry_of: F) -> GeoJson
where
    I: IntoIterator<Item = &'a FeatureRecord>,
    F: Fn(ShapeId) -> Option<Geometry>,
{
    let features = records
        .into_iter()
        .filter(|r| r.is_selected())
        .map(|r| {
            let mut properties = r.properties().clone();
            properties.insert(key.to_string(), Value::Bool(true));
            Feature {
                bbox: None,
                geometry: geometry_of(r.shape),
                id: r.id().cloned(),
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();
    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// Pretty prints a GeoJSON document to `path`.
pub fn write_geojson(path: &str, geojson: &GeoJson) -> io::Result<()> {
    let json = serde_json::to_string_pretty(geojson).map_err(io::Error::other)?;
    write_string(path, &json)
}
