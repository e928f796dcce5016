use std::str::FromStr;

use geojson::GeoJson;
use geojson_switcher::{
    memory::{MemoryDialog, MemoryMap},
    style::{PatternSpec, PatternSymbol, Spacing, StyleVariant},
    Color, Switcher, SwitcherOptions,
};

fn lines() -> GeoJson {
    GeoJson::from_str(
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]},"properties":{}},
            {"type":"Feature","geometry":{"type":"LineString","coordinates":[[2,2],[3,3]]},"properties":{"selected":true}}
        ]}"#,
    )
    .unwrap()
}

fn arrow_options() -> SwitcherOptions {
    let arrows = vec![PatternSpec {
        offset: Spacing::Percent(50.0),
        repeat: Spacing::Pixels(0.0),
        symbol: PatternSymbol::ArrowHead {
            pixel_size: 15.0,
            color: None,
        },
    }];
    SwitcherOptions {
        selected: StyleVariant::new(Color::rgb(0, 255, 0)).with_patterns(arrows),
        ..SwitcherOptions::default()
    }
}

#[test]
fn selected_features_get_decorated() {
    let mut sw = Switcher::new(MemoryMap::with_decorations(), MemoryDialog::new(), arrow_options());
    sw.activate();
    sw.load(&lines());
    let first = sw.collection().get(0).shape;
    let second = sw.collection().get(1).shape;
    assert!(sw.map().decoration(first).is_none());
    assert!(sw.map().decoration(second).is_some());
    assert!(sw.collection().get(1).is_decorated());

    sw.toggle();
    assert!(sw.map().decoration(first).is_some());
    sw.toggle();
    assert!(sw.map().decoration(first).is_none());
    assert!(!sw.collection().get(0).is_decorated());
}

#[test]
fn missing_capability_falls_back_to_plain_style() {
    let mut sw = Switcher::new(MemoryMap::new(), MemoryDialog::new(), arrow_options());
    sw.activate();
    sw.load(&lines());
    sw.toggle();
    let first = sw.collection().get(0).shape;
    assert_eq!(sw.map().decoration_count(), 0);
    assert!(!sw.collection().get(0).is_decorated());
    assert_eq!(sw.map().shape(first).unwrap().style.color, Color::rgb(0, 255, 0));
}

#[test]
fn deactivate_detaches_decorations() {
    let mut sw = Switcher::new(MemoryMap::with_decorations(), MemoryDialog::new(), arrow_options());
    sw.activate();
    sw.load(&lines());
    sw.toggle();
    assert_eq!(sw.map().decoration_count(), 2);
    sw.deactivate();
    assert_eq!(sw.map().decoration_count(), 0);
    assert_eq!(sw.map().shape_count(), 0);
}

#[test]
fn reload_removes_previous_decorations() {
    let mut sw = Switcher::new(MemoryMap::with_decorations(), MemoryDialog::new(), arrow_options());
    sw.activate();
    sw.load(&lines());
    sw.toggle();
    assert_eq!(sw.map().decoration_count(), 2);

    let plain = GeoJson::from_str(
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":{"type":"LineString","coordinates":[[9,9],[8,8]]},"properties":{}}
        ]}"#,
    )
    .unwrap();
    sw.load(&plain);
    assert_eq!(sw.map().decoration_count(), 0);
    assert_eq!(sw.map().shape_count(), 1);
    assert!(!sw.collection().get(0).is_decorated());

    sw.load(&lines());
    assert_eq!(sw.map().decoration_count(), 1);
    assert_eq!(sw.map().shape_count(), 2);
}
