//! Controller tying the cursor, selection and dialog to a host map.

use geojson::GeoJson;

use crate::cursor::Cursor;
use crate::feature::{normalize_flag, FeatureCollection, FeatureRecord};
use crate::ingest::{parse_geojson, RawFeature};
use crate::options::SwitcherOptions;
use crate::presentation::{self, PresentationState};
use crate::sink::{PresentationSink, RenderSink};
use crate::style::{StyleDescriptor, StyleResolver};

/// Lets a user page through loaded features and toggle their selection.
///
/// Intents (`load`, `previous`, `next`, `toggle`) are ignored while the
/// switcher is inactive. Each intent ends with exactly one dialog update.
pub struct Switcher<R, P> {
    options: SwitcherOptions,
    resolver: StyleResolver,
    map: R,
    dialog: P,
    active: bool,
    decorations_supported: bool,
    collection: FeatureCollection,
    cursor: Cursor,
}

impl<R: RenderSink, P: PresentationSink> Switcher<R, P> {
    pub fn new(map: R, dialog: P, options: SwitcherOptions) -> Self {
        let resolver = options.resolver();
        Self {
            options,
            resolver,
            map,
            dialog,
            active: false,
            decorations_supported: false,
            collection: FeatureCollection::new(),
            cursor: Cursor::Empty,
        }
    }

    /// Attaches the dialog chrome. Data is loaded separately.
    pub fn activate(&mut self) {
        if self.active {
            return;
        }
        self.decorations_supported = self.map.decorations().is_some();
        self.dialog.attach(&self.options.dialog);
        self.active = true;
        log::info!(
            "switcher activated (decorations {})",
            if self.decorations_supported { "on" } else { "off" }
        );
    }

    /// Removes every shape and decoration and detaches the dialog.
    /// Selection flags are discarded with the features.
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }
        self.remove_shapes();
        self.cursor = Cursor::Empty;
        self.dialog.close();
        self.dialog.detach();
        self.active = false;
        log::info!("switcher deactivated");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Replaces the features with those found in `geojson`.
    pub fn load(&mut self, geojson: &GeoJson) -> &mut Self {
        self.load_features(parse_geojson(geojson))
    }

    /// Replaces the features, focuses the first one and opens the dialog.
    pub fn load_features(&mut self, features: Vec<RawFeature>) -> &mut Self {
        if !self.active {
            log::warn!("load ignored, switcher is not active");
            return self;
        }
        self.remove_shapes();
        let key = self.options.property_key.clone();
        let mut records = Vec::with_capacity(features.len());
        for raw in features {
            let mut properties = raw.properties;
            let selected = normalize_flag(&mut properties, &key);
            let style = self.resolver.style_for(selected);
            let shape = self.map.add_shape(&raw.geometry, style);
            let mut record =
                FeatureRecord::from_normalized(shape, properties, selected).with_id(raw.id);
            if self.decorations_supported {
                if let (Some(patterns), Some(deco)) = (style.decoration(), self.map.decorations()) {
                    deco.attach_decoration(shape, patterns);
                    record.decorated = true;
                }
            }
            records.push(record);
        }
        self.collection.load(records);
        self.cursor.reset(self.collection.count());
        log::info!("loaded {} features", self.collection.count());
        self.focus_current();
        self.dialog.open();
        self.sync(true);
        self
    }

    pub fn previous(&mut self) {
        if !self.active || !self.cursor.previous() {
            log::debug!("previous ignored");
            return;
        }
        self.focus_current();
        self.sync(true);
    }

    pub fn next(&mut self) {
        if !self.active || !self.cursor.next() {
            log::debug!("next ignored");
            return;
        }
        self.focus_current();
        self.sync(true);
    }

    /// Flips the focused feature's flag and restyles it.
    pub fn toggle(&mut self) {
        if !self.active {
            log::debug!("toggle ignored");
            return;
        }
        let Some(style) = crate::selection::toggle(
            &self.cursor,
            &mut self.collection,
            &self.resolver,
            &self.options.property_key,
        ) else {
            log::debug!("toggle ignored");
            return;
        };
        if let Some(index) = self.cursor.index() {
            self.apply_style(index, &style);
        }
        self.sync(false);
    }

    /// Selected features in collection order.
    pub fn selection(&self) -> Vec<&FeatureRecord> {
        self.collection.selected()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn collection(&self) -> &FeatureCollection {
        &self.collection
    }

    pub fn options(&self) -> &SwitcherOptions {
        &self.options
    }

    /// What the dialog currently shows.
    pub fn presentation(&self) -> PresentationState {
        presentation::render(&self.cursor, &self.collection, &self.options.buttons)
    }

    pub fn map(&self) -> &R {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut R {
        &mut self.map
    }

    pub fn dialog(&self) -> &P {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut P {
        &mut self.dialog
    }

    pub fn into_parts(self) -> (R, P) {
        (self.map, self.dialog)
    }

    fn focus_current(&mut self) {
        let Some(index) = self.cursor.index() else {
            return;
        };
        let shape = self.collection.get(index).shape;
        if let Some(bounds) = self.map.bounds(shape) {
            self.map.focus(bounds);
        }
    }

    fn apply_style(&mut self, index: usize, style: &StyleDescriptor) {
        let record = self.collection.get_mut(index);
        self.map.set_style(record.shape, style);
        if !self.decorations_supported {
            return;
        }
        if let Some(deco) = self.map.decorations() {
            if record.decorated {
                deco.detach_decoration(record.shape);
                record.decorated = false;
            }
            if let Some(patterns) = style.decoration() {
                deco.attach_decoration(record.shape, patterns);
                record.decorated = true;
            }
        }
    }

    fn remove_shapes(&mut self) {
        let supported = self.decorations_supported;
        for record in self.collection.clear() {
            if supported && record.decorated {
                if let Some(deco) = self.map.decorations() {
                    deco.detach_decoration(record.shape);
                }
            }
            self.map.remove_shape(record.shape);
        }
    }

    /// Pushes the presentation state to the dialog. `full` also updates the
    /// title; toggling leaves it untouched.
    fn sync(&mut self, full: bool) {
        match self.presentation() {
            PresentationState::Hidden => self.dialog.close(),
            PresentationState::Visible { title, toggle } => {
                if full {
                    self.dialog.set_title(&title);
                }
                self.dialog.set_toggle_visual(&toggle);
            }
        }
    }
}
