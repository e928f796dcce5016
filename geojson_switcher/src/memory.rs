//! Headless sinks that keep everything in memory. Used by the command line
//! front end and handy for hosts without a real map.

use std::collections::BTreeMap;

use geojson::Geometry;

use crate::ingest::geometry_bounds;
use crate::presentation::ButtonPreset;
use crate::sink::{
    BoundingBox, DecorationSink, DialogLayout, PresentationSink, RenderSink, ShapeId,
};
use crate::style::{PatternSpec, StyleDescriptor};

/// A shape drawn on a [`MemoryMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnShape {
    pub geometry: Geometry,
    pub style: StyleDescriptor,
}

/// Render sink storing shapes, decorations and the last focused bounds.
#[derive(Debug, Default)]
pub struct MemoryMap {
    shapes: BTreeMap<ShapeId, DrawnShape>,
    decorations: BTreeMap<ShapeId, Vec<PatternSpec>>,
    supports_decorations: bool,
    focus: Option<BoundingBox>,
    next_id: u64,
}

impl MemoryMap {
    /// Creates a map without decoration support.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map that can draw line decorations.
    pub fn with_decorations() -> Self {
        Self {
            supports_decorations: true,
            ..Self::default()
        }
    }

    pub fn shape(&self, id: ShapeId) -> Option<&DrawnShape> {
        self.shapes.get(&id)
    }

    pub fn geometry(&self, id: ShapeId) -> Option<&Geometry> {
        self.shapes.get(&id).map(|s| &s.geometry)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn decoration(&self, id: ShapeId) -> Option<&[PatternSpec]> {
        self.decorations.get(&id).map(|p| p.as_slice())
    }

    pub fn decoration_count(&self) -> usize {
        self.decorations.len()
    }

    /// Bounds passed to the most recent `focus` call.
    pub fn focused(&self) -> Option<BoundingBox> {
        self.focus
    }
}

impl RenderSink for MemoryMap {
    fn add_shape(&mut self, geometry: &Geometry, style: &StyleDescriptor) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(
            id,
            DrawnShape {
                geometry: geometry.clone(),
                style: style.clone(),
            },
        );
        id
    }

    fn remove_shape(&mut self, shape: ShapeId) {
        self.shapes.remove(&shape);
    }

    fn set_style(&mut self, shape: ShapeId, style: &StyleDescriptor) {
        if let Some(s) = self.shapes.get_mut(&shape) {
            s.style = style.clone();
        }
    }

    fn bounds(&self, shape: ShapeId) -> Option<BoundingBox> {
        self.shapes.get(&shape).and_then(|s| geometry_bounds(&s.geometry))
    }

    fn focus(&mut self, bounds: BoundingBox) {
        log::debug!("focus {:?} - {:?}", bounds.min(), bounds.max());
        self.focus = Some(bounds);
    }

    fn decorations(&mut self) -> Option<&mut dyn DecorationSink> {
        if self.supports_decorations {
            Some(self)
        } else {
            None
        }
    }
}

impl DecorationSink for MemoryMap {
    fn attach_decoration(&mut self, shape: ShapeId, patterns: &[PatternSpec]) {
        self.decorations.insert(shape, patterns.to_vec());
    }

    fn detach_decoration(&mut self, shape: ShapeId) {
        self.decorations.remove(&shape);
    }
}

/// One call received by a [`MemoryDialog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    Attach(DialogLayout),
    Detach,
    Title(String),
    Toggle(ButtonPreset),
    Open,
    Close,
}

/// Presentation sink recording what a dialog would show.
#[derive(Debug, Default)]
pub struct MemoryDialog {
    pub layout: Option<DialogLayout>,
    pub title: Option<String>,
    pub toggle: Option<ButtonPreset>,
    pub open: bool,
    pub events: Vec<DialogEvent>,
}

impl MemoryDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of toggle button updates received so far.
    pub fn toggle_updates(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, DialogEvent::Toggle(_)))
            .count()
    }
}

impl PresentationSink for MemoryDialog {
    fn attach(&mut self, layout: &DialogLayout) {
        self.layout = Some(*layout);
        self.events.push(DialogEvent::Attach(*layout));
    }

    fn detach(&mut self) {
        self.layout = None;
        self.events.push(DialogEvent::Detach);
    }

    fn set_title(&mut self, text: &str) {
        self.title = Some(text.to_string());
        self.events.push(DialogEvent::Title(text.to_string()));
    }

    fn set_toggle_visual(&mut self, visual: &ButtonPreset) {
        self.toggle = Some(visual.clone());
        self.events.push(DialogEvent::Toggle(visual.clone()));
    }

    fn open(&mut self) {
        self.open = true;
        self.events.push(DialogEvent::Open);
    }

    fn close(&mut self) {
        self.open = false;
        self.events.push(DialogEvent::Close);
    }
}
