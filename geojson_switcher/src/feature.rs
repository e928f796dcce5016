//! Feature records and the ordered collection the switcher pages through.

use geojson::feature::Id;
use geojson::JsonObject;
use serde_json::Value;

use crate::sink::ShapeId;

/// Reads the selection flag stored under `key`, writing `false` into the
/// properties when the key is missing or does not hold a boolean.
pub fn normalize_flag(properties: &mut JsonObject, key: &str) -> bool {
    match properties.get(key) {
        Some(Value::Bool(flag)) => *flag,
        _ => {
            properties.insert(key.to_string(), Value::Bool(false));
            false
        }
    }
}

/// A loaded feature: the handle of its drawn shape plus its attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    /// Shape owned by the render sink.
    pub shape: ShapeId,
    id: Option<Id>,
    properties: JsonObject,
    selected: bool,
    pub(crate) decorated: bool,
}

impl FeatureRecord {
    /// Creates a record, defaulting a missing selection flag to `false`.
    pub fn new(shape: ShapeId, mut properties: JsonObject, key: &str) -> Self {
        let selected = normalize_flag(&mut properties, key);
        Self::from_normalized(shape, properties, selected)
    }

    /// Creates a record from properties already passed through [`normalize_flag`].
    pub(crate) fn from_normalized(shape: ShapeId, properties: JsonObject, selected: bool) -> Self {
        Self {
            shape,
            id: None,
            properties,
            selected,
            decorated: false,
        }
    }

    /// Sets the source feature's identifier.
    pub fn with_id(mut self, id: Option<Id>) -> Self {
        self.id = id;
        self
    }

    /// Identifier of the source feature, if it had one.
    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    /// Attribute map, always holding the flag under the configured key.
    pub fn properties(&self) -> &JsonObject {
        &self.properties
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether a decoration is currently attached to the shape.
    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    /// Flips the flag, keeping the property map in sync. Returns the new value.
    pub(crate) fn flip(&mut self, key: &str) -> bool {
        self.selected = !self.selected;
        self.properties
            .insert(key.to_string(), Value::Bool(self.selected));
        self.selected
    }
}

/// Ordered features; insertion order is navigation order.
#[derive(Debug, Default, Clone)]
pub struct FeatureCollection {
    records: Vec<FeatureRecord>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Replaces the whole collection.
    pub fn load(&mut self, records: Vec<FeatureRecord>) {
        self.records = records;
    }

    /// Retrieves the record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> &FeatureRecord {
        &self.records[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut FeatureRecord {
        &mut self.records[index]
    }

    pub fn all(&self) -> &[FeatureRecord] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes every record, returning them.
    pub fn clear(&mut self) -> Vec<FeatureRecord> {
        std::mem::take(&mut self.records)
    }

    /// Returns all records matching `predicate`, in collection order.
    pub fn filter<F>(&self, predicate: F) -> Vec<&FeatureRecord>
    where
        F: Fn(&FeatureRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Records whose selection flag is set.
    pub fn selected(&self) -> Vec<&FeatureRecord> {
        self.filter(|r| r.is_selected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn missing_flag_defaults_to_false() {
        let rec = FeatureRecord::new(ShapeId(1), props(json!({"name": "a"})), "selected");
        assert!(!rec.is_selected());
        assert_eq!(rec.properties().get("selected"), Some(&Value::Bool(false)));
        assert_eq!(rec.properties().get("name"), Some(&json!("a")));
    }

    #[test]
    fn existing_flag_is_kept() {
        let rec = FeatureRecord::new(ShapeId(1), props(json!({"picked": true})), "picked");
        assert!(rec.is_selected());
    }

    #[test]
    fn non_boolean_flag_is_replaced() {
        let rec = FeatureRecord::new(ShapeId(1), props(json!({"selected": "yes"})), "selected");
        assert!(!rec.is_selected());
        assert_eq!(rec.properties().get("selected"), Some(&Value::Bool(false)));
    }

    #[test]
    fn id_is_carried() {
        let rec = FeatureRecord::new(ShapeId(1), JsonObject::new(), "selected")
            .with_id(Some(Id::String("road-7".to_string())));
        assert_eq!(rec.id(), Some(&Id::String("road-7".to_string())));
        assert_eq!(FeatureRecord::new(ShapeId(2), JsonObject::new(), "selected").id(), None);
    }

    #[test]
    fn flip_updates_properties() {
        let mut rec = FeatureRecord::new(ShapeId(1), JsonObject::new(), "selected");
        assert!(rec.flip("selected"));
        assert_eq!(rec.properties().get("selected"), Some(&Value::Bool(true)));
        assert!(!rec.flip("selected"));
    }

    #[test]
    fn collection_filter_keeps_order() {
        let mut coll = FeatureCollection::new();
        coll.load(vec![
            FeatureRecord::new(ShapeId(0), props(json!({"selected": true})), "selected"),
            FeatureRecord::new(ShapeId(1), JsonObject::new(), "selected"),
            FeatureRecord::new(ShapeId(2), props(json!({"selected": true})), "selected"),
        ]);
        assert_eq!(coll.count(), 3);
        let shapes: Vec<ShapeId> = coll.selected().iter().map(|r| r.shape).collect();
        assert_eq!(shapes, vec![ShapeId(0), ShapeId(2)]);
        assert_eq!(coll.clear().len(), 3);
        assert!(coll.is_empty());
        assert!(coll.selected().is_empty());
    }

    #[test]
    #[should_panic]
    fn out_of_range_get_panics() {
        let coll = FeatureCollection::new();
        coll.get(0);
    }
}
