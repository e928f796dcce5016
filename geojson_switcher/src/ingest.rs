//! Turning GeoJSON documents into features the switcher can draw.

use geo_types::{coord, Rect};
use geojson::feature::Id;
use geojson::{GeoJson, Geometry, JsonObject, Value};

use crate::sink::BoundingBox;

/// Geometry plus attributes of one incoming feature.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFeature {
    pub id: Option<Id>,
    pub geometry: Geometry,
    pub properties: JsonObject,
}

impl RawFeature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            id: None,
            geometry,
            properties: JsonObject::new(),
        }
    }
}

/// Extracts drawable features in document order.
///
/// Features without geometry are skipped. A bare geometry becomes a single
/// feature with empty properties.
pub fn parse_geojson(geojson: &GeoJson) -> Vec<RawFeature> {
    match geojson {
        GeoJson::FeatureCollection(fc) => fc.features.iter().filter_map(from_feature).collect(),
        GeoJson::Feature(f) => from_feature(f).into_iter().collect(),
        GeoJson::Geometry(g) => vec![RawFeature::new(g.clone())],
    }
}

fn from_feature(feature: &geojson::Feature) -> Option<RawFeature> {
    let Some(geometry) = feature.geometry.clone() else {
        log::warn!("skipping feature without geometry (id {:?})", feature.id);
        return None;
    };
    Some(RawFeature {
        id: feature.id.clone(),
        geometry,
        properties: feature.properties.clone().unwrap_or_default(),
    })
}

/// Bounds over every position of `geometry`, `None` if it has none.
pub fn geometry_bounds(geometry: &Geometry) -> Option<BoundingBox> {
    let mut bounds: Option<(f64, f64, f64, f64)> = None;
    visit_positions(&geometry.value, &mut |pos: &[f64]| {
        if pos.len() < 2 {
            return;
        }
        let (x, y) = (pos[0], pos[1]);
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    });
    bounds.map(|(min_x, min_y, max_x, max_y)| {
        Rect::new(coord! { x: min_x, y: min_y }, coord! { x: max_x, y: max_y })
    })
}

fn visit_positions(value: &Value, f: &mut dyn FnMut(&[f64])) {
    match value {
        Value::Point(p) => f(&p[..]),
        Value::MultiPoint(ps) | Value::LineString(ps) => ps.iter().for_each(|p| f(&p[..])),
        Value::MultiLineString(lines) | Value::Polygon(lines) => {
            lines.iter().flatten().for_each(|p| f(&p[..]))
        }
        Value::MultiPolygon(polys) => polys.iter().flatten().flatten().for_each(|p| f(&p[..])),
        Value::GeometryCollection(geoms) => {
            for g in geoms {
                visit_positions(&g.value, f);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn collection_skips_null_geometry() {
        let gj = GeoJson::from_str(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","id":"a-1","geometry":{"type":"Point","coordinates":[1,2]},"properties":{"name":"a"}},
                {"type":"Feature","geometry":null,"properties":{"name":"b"}},
                {"type":"Feature","geometry":{"type":"Point","coordinates":[3,4]},"properties":null}
            ]}"#,
        )
        .unwrap();
        let raw = parse_geojson(&gj);
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].properties.get("name").and_then(|v| v.as_str()), Some("a"));
        assert_eq!(raw[0].id, Some(Id::String("a-1".to_string())));
        assert!(raw[1].properties.is_empty());
        assert_eq!(raw[1].id, None);
    }

    #[test]
    fn bare_geometry_is_one_feature() {
        let gj = GeoJson::from_str(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#).unwrap();
        assert_eq!(parse_geojson(&gj).len(), 1);
    }

    #[test]
    fn bounds_cover_all_positions() {
        let g = Geometry::new(Value::GeometryCollection(vec![
            Geometry::new(Value::LineString(vec![vec![0.0, 5.0], vec![2.0, -1.0]])),
            Geometry::new(Value::Point(vec![-3.0, 1.0])),
        ]));
        let b = geometry_bounds(&g).unwrap();
        assert_eq!(b.min(), coord! { x: -3.0, y: -1.0 });
        assert_eq!(b.max(), coord! { x: 2.0, y: 5.0 });
    }

    #[test]
    fn empty_geometry_has_no_bounds() {
        let g = Geometry::new(Value::MultiPoint(Vec::new()));
        assert!(geometry_bounds(&g).is_none());
    }
}
