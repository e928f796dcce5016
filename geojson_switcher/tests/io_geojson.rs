use assert_fs::prelude::*;
use predicates::prelude::*;

use geojson::{feature::Id, GeoJson};
use geojson_switcher::{
    io::{read_geojson, selection_to_geojson, write_geojson},
    memory::{MemoryDialog, MemoryMap},
    options::{read_options_json, write_options_json},
    Color, Switcher, SwitcherOptions,
};

#[test]
fn selection_round_trip_through_files() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("roads.geojson");
    input
        .write_str(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]},"properties":{"name":"a"}},
                {"type":"Feature","geometry":{"type":"LineString","coordinates":[[5,5],[6,7]]},"properties":{"name":"b"}}
            ]}"#,
        )
        .unwrap();

    let gj = read_geojson(input.path().to_str().unwrap()).unwrap();
    let mut sw = Switcher::new(MemoryMap::new(), MemoryDialog::new(), SwitcherOptions::default());
    sw.activate();
    sw.load(&gj);
    sw.next();
    sw.toggle();

    let out = selection_to_geojson(sw.collection().all(), "selected", |id| {
        sw.map().geometry(id).cloned()
    });
    let output = dir.child("selected.geojson");
    write_geojson(output.path().to_str().unwrap(), &out).unwrap();

    output.assert(predicate::str::contains("\"b\""));
    output.assert(predicate::str::contains("\"a\"").not());
    let GeoJson::FeatureCollection(fc) = read_geojson(output.path().to_str().unwrap()).unwrap()
    else {
        panic!("expected a feature collection");
    };
    assert_eq!(fc.features.len(), 1);
    assert!(fc.features[0].geometry.is_some());
    dir.close().unwrap();
}

#[test]
fn invalid_geojson_is_invalid_data() {
    let file = assert_fs::NamedTempFile::new("broken.geojson").unwrap();
    file.write_str("{ not json").unwrap();
    let err = read_geojson(file.path().to_str().unwrap()).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn options_file_round_trip() {
    let file = assert_fs::NamedTempFile::new("options.json").unwrap();
    let mut opts = SwitcherOptions::default();
    opts.property_key = "keep".to_string();
    opts.selected.color = Color::rgb(0, 0, 255);
    write_options_json(file.path().to_str().unwrap(), &opts).unwrap();
    file.assert(predicate::str::contains("#0000ff"));
    let back = read_options_json(file.path().to_str().unwrap()).unwrap();
    assert_eq!(back, opts);
}

#[test]
fn exported_selection_keeps_feature_ids() {
    let dir = assert_fs::TempDir::new().unwrap();
    let input = dir.child("roads.geojson");
    input
        .write_str(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","id":"road-7","geometry":{"type":"LineString","coordinates":[[0,0],[1,1]]},"properties":{}},
                {"type":"Feature","id":8,"geometry":{"type":"LineString","coordinates":[[5,5],[6,7]]},"properties":{}}
            ]}"#,
        )
        .unwrap();

    let gj = read_geojson(input.path().to_str().unwrap()).unwrap();
    let mut sw = Switcher::new(MemoryMap::new(), MemoryDialog::new(), SwitcherOptions::default());
    sw.activate();
    sw.load(&gj);
    sw.toggle();

    let out = selection_to_geojson(sw.collection().all(), "selected", |id| {
        sw.map().geometry(id).cloned()
    });
    let output = dir.child("selected.geojson");
    write_geojson(output.path().to_str().unwrap(), &out).unwrap();

    let GeoJson::FeatureCollection(fc) = read_geojson(output.path().to_str().unwrap()).unwrap()
    else {
        panic!("expected a feature collection");
    };
    assert_eq!(fc.features.len(), 1);
    assert_eq!(fc.features[0].id, Some(Id::String("road-7".to_string())));
    dir.close().unwrap();
}
