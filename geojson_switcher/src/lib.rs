//! Paging through GeoJSON features on a map and toggling which of them are
//! selected.
//!
//! The [`Switcher`] owns a wrapping [`Cursor`] over a [`FeatureCollection`],
//! restyles features through a [`StyleResolver`] when their flag flips, and
//! keeps a small navigation dialog in sync. Drawing and the dialog itself are
//! supplied by the host through the traits in [`sink`].

pub mod cursor;
pub mod feature;
pub mod ingest;
pub mod io;
pub mod memory;
pub mod options;
pub mod presentation;
pub mod selection;
pub mod sink;
pub mod style;
pub mod switcher;

pub use cursor::Cursor;
pub use feature::{FeatureCollection, FeatureRecord};
pub use options::SwitcherOptions;
pub use presentation::{ButtonPreset, PresentationState, ToggleButtons};
pub use sink::{BoundingBox, DecorationSink, DialogLayout, PresentationSink, RenderSink, ShapeId};
pub use style::{Color, StyleDescriptor, StyleResolver};
pub use switcher::Switcher;
