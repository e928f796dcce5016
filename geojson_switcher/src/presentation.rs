//! Dialog state derived from the cursor and the focused feature's flag.

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::feature::FeatureCollection;
use crate::style::Color;

/// Icon and background color of the toggle button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonPreset {
    pub icon: String,
    pub color: Color,
}

impl ButtonPreset {
    pub fn new(icon: &str, color: Color) -> Self {
        Self {
            icon: icon.to_string(),
            color,
        }
    }
}

/// The two looks of the toggle button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleButtons {
    /// Shown while the focused feature is unselected.
    pub select: ButtonPreset,
    /// Shown while the focused feature is selected.
    pub deselect: ButtonPreset,
}

impl Default for ToggleButtons {
    fn default() -> Self {
        Self {
            select: ButtonPreset::new("fa-plus", Color::rgb(0x4c, 0xaf, 0x50)),
            deselect: ButtonPreset::new("fa-minus", Color::rgb(255, 0, 0)),
        }
    }
}

/// The button offers the action a press would perform, not the current state.
pub fn visual_for(selected: bool, buttons: &ToggleButtons) -> &ButtonPreset {
    if selected {
        &buttons.deselect
    } else {
        &buttons.select
    }
}

/// What the navigation dialog should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationState {
    Hidden,
    Visible { title: String, toggle: ButtonPreset },
}

/// Projects the cursor and collection onto the dialog.
pub fn render(
    cursor: &Cursor,
    collection: &FeatureCollection,
    buttons: &ToggleButtons,
) -> PresentationState {
    match (cursor.index(), cursor.title()) {
        (Some(index), Some(title)) => {
            let selected = collection.get(index).is_selected();
            PresentationState::Visible {
                title,
                toggle: visual_for(selected, buttons).clone(),
            }
        }
        _ => PresentationState::Hidden,
    }
}
