//! Capabilities the host map environment supplies to a switcher.

use geojson::Geometry;
use serde::{Deserialize, Serialize};

use crate::presentation::ButtonPreset;
use crate::style::{PatternSpec, StyleDescriptor};

/// Axis aligned bounds in the map's coordinate space.
pub type BoundingBox = geo_types::Rect<f64>;

/// Handle to a shape owned by a [`RenderSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

/// Surface that draws shapes and moves the viewport.
pub trait RenderSink {
    /// Adds a shape drawn with `style` and returns its handle.
    fn add_shape(&mut self, geometry: &Geometry, style: &StyleDescriptor) -> ShapeId;

    fn remove_shape(&mut self, shape: ShapeId);

    fn set_style(&mut self, shape: ShapeId, style: &StyleDescriptor);

    /// Bounds of the shape, or `None` when it has no positions.
    fn bounds(&self, shape: ShapeId) -> Option<BoundingBox>;

    /// Fits the viewport to `bounds`.
    fn focus(&mut self, bounds: BoundingBox);

    /// Optional line decoration capability.
    fn decorations(&mut self) -> Option<&mut dyn DecorationSink> {
        None
    }
}

/// Draws decorative patterns (arrows, dashes) along shapes.
pub trait DecorationSink {
    fn attach_decoration(&mut self, shape: ShapeId, patterns: &[PatternSpec]);

    fn detach_decoration(&mut self, shape: ShapeId);
}

/// Placement of the navigation dialog relative to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogLayout {
    /// Pixel offset of the dialog from the map's top left corner.
    pub anchor: [i32; 2],
    /// Width and height in pixels.
    pub size: [u32; 2],
}

impl Default for DialogLayout {
    fn default() -> Self {
        Self {
            anchor: [10, 60],
            size: [300, 160],
        }
    }
}

/// Dialog showing the `i/n` title and the select/deselect button.
pub trait PresentationSink {
    /// Builds the navigation chrome. Called on activation.
    fn attach(&mut self, _layout: &DialogLayout) {}

    /// Tears the chrome down. Called on deactivation after `close`.
    fn detach(&mut self) {}

    fn set_title(&mut self, text: &str);

    fn set_toggle_visual(&mut self, visual: &ButtonPreset);

    fn open(&mut self);

    fn close(&mut self);
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn add_shape(&mut self, geometry: &Geometry, style: &StyleDescriptor) -> ShapeId {
        (**self).add_shape(geometry, style)
    }

    fn remove_shape(&mut self, shape: ShapeId) {
        (**self).remove_shape(shape)
    }

    fn set_style(&mut self, shape: ShapeId, style: &StyleDescriptor) {
        (**self).set_style(shape, style)
    }

    fn bounds(&self, shape: ShapeId) -> Option<BoundingBox> {
        (**self).bounds(shape)
    }

    fn focus(&mut self, bounds: BoundingBox) {
        (**self).focus(bounds)
    }

    fn decorations(&mut self) -> Option<&mut dyn DecorationSink> {
        (**self).decorations()
    }
}

impl<T: PresentationSink + ?Sized> PresentationSink for &mut T {
    fn attach(&mut self, layout: &DialogLayout) {
        (**self).attach(layout)
    }

    fn detach(&mut self) {
        (**self).detach()
    }

    fn set_title(&mut self, text: &str) {
        (**self).set_title(text)
    }

    fn set_toggle_visual(&mut self, visual: &ButtonPreset) {
        (**self).set_toggle_visual(visual)
    }

    fn open(&mut self) {
        (**self).open()
    }

    fn close(&mut self) {
        (**self).close()
    }
}
