//! Selected/unselected text style interpolation
//!
//! Pure functions of a slot's proximity; nothing here holds state.

use crate::config::{PickerConfig, TextStyle};
use crate::scroll::timing::lerp_f32;

/// Which configured colour a slot is drawn with (colours are never blended)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Selected,
    Unselected,
}

/// Resolved look of one slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotStyle {
    pub font_weight: f32,
    pub text_size: f32,
    pub color: ColorRole,
}

/// The two end points of the interpolation, with sizes resolved
#[derive(Debug, Clone, PartialEq)]
pub struct StylePair {
    selected: TextStyle,
    unselected: TextStyle,
    default_size: f32,
}

impl Default for StylePair {
    fn default() -> Self {
        Self::from_config(&PickerConfig::default())
    }
}

impl StylePair {
    pub fn new(selected: TextStyle, unselected: TextStyle, default_size: f32) -> Self {
        Self {
            selected,
            unselected,
            default_size,
        }
    }

    pub fn from_config(config: &PickerConfig) -> Self {
        Self::new(
            config.selected_text.clone(),
            config.unselected_text.clone(),
            config.default_text_size,
        )
    }

    pub fn selected(&self) -> &TextStyle {
        &self.selected
    }

    pub fn unselected(&self) -> &TextStyle {
        &self.unselected
    }

    pub fn selected_size(&self) -> f32 {
        self.selected.text_size.unwrap_or(self.default_size)
    }

    pub fn unselected_size(&self) -> f32 {
        self.unselected.text_size.unwrap_or(self.default_size)
    }

    /// Style of a slot at `proximity` (clamped to [0, 1])
    ///
    /// Weight and size move linearly from the unselected to the selected
    /// style. Only the slot on the current page gets the selected colour.
    pub fn interpolate(&self, proximity: f32, is_current: bool) -> SlotStyle {
        let t = if proximity.is_nan() {
            0.0
        } else {
            proximity.clamp(0.0, 1.0)
        };
        SlotStyle {
            font_weight: lerp_f32(
                f32::from(self.unselected.font_weight),
                f32::from(self.selected.font_weight),
                t,
            ),
            text_size: lerp_f32(self.unselected_size(), self.selected_size(), t),
            color: if is_current {
                ColorRole::Selected
            } else {
                ColorRole::Unselected
            },
        }
    }
}
