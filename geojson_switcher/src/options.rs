use serde::{Deserialize, Serialize};

use crate::presentation::ToggleButtons;
use crate::sink::DialogLayout;
use crate::style::{Color, StrokeShape, StyleResolver, StyleVariant};

/// Recognized switcher options. Every field has a default, so options files
/// only need the keys they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitcherOptions {
    /// Property holding the selection flag.
    pub property_key: String,
    pub stroke: StrokeShape,
    pub unselected: StyleVariant,
    pub selected: StyleVariant,
    pub buttons: ToggleButtons,
    pub dialog: DialogLayout,
}

impl SwitcherOptions {
    pub fn new() -> Self {
        Self {
            property_key: "selected".to_string(),
            stroke: StrokeShape::default(),
            unselected: StyleVariant::new(Color::rgb(255, 0, 0)),
            selected: StyleVariant::new(Color::rgb(0, 255, 0)),
            buttons: ToggleButtons::default(),
            dialog: DialogLayout::default(),
        }
    }

    pub fn resolver(&self) -> StyleResolver {
        StyleResolver::new(&self.stroke, &self.unselected, &self.selected)
    }
}

impl Default for SwitcherOptions {
    fn default() -> Self {
        Self::new()
    }
}

pub fn read_options_json(path: &str) -> std::io::Result<SwitcherOptions> {
    let contents = crate::io::read_to_string(path)?;
    let options: SwitcherOptions = serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(options)
}

pub fn write_options_json(path: &str, options: &SwitcherOptions) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(options).map_err(std::io::Error::other)?;
    crate::io::write_string(path, &json)
}
