//! Flipping the selection flag of the focused feature.

use crate::cursor::Cursor;
use crate::feature::FeatureCollection;
use crate::style::{StyleDescriptor, StyleResolver};

/// Flips the flag of the feature under `cursor` and returns its new style.
///
/// Returns `None` without touching anything when the cursor is empty.
pub fn toggle(
    cursor: &Cursor,
    collection: &mut FeatureCollection,
    resolver: &StyleResolver,
    key: &str,
) -> Option<StyleDescriptor> {
    let index = cursor.index()?;
    let selected = collection.get_mut(index).flip(key);
    log::debug!("feature {} selected: {}", index, selected);
    Some(resolver.style_for(selected).clone())
}
