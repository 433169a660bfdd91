//! Playback color configuration.

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::adjustment::ColorAdjustment;
use crate::color_management::color_space::ColorSpace;
use crate::color_management::range::ColorRange;
use crate::transform::compose::derive_transform;

/// Environment variable holding the adjustment in string form.
const ADJUSTMENT_ENV: &str = "VIDCOLOR_ADJUSTMENT";
/// Environment variable holding the range override name.
const RANGE_ENV: &str = "VIDCOLOR_RANGE";

/// User-facing color settings: the equalizer sliders and the range
/// override applied to every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Brightness/contrast/saturation/hue sliders.
    pub adjustment: ColorAdjustment,
    /// Range override. `Auto` uses the range each frame declares.
    #[serde(default)]
    pub range: ColorRange,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            adjustment: std::env::var(ADJUSTMENT_ENV)
                .ok()
                .map(|s| ColorAdjustment::from_settings_str(&s))
                .unwrap_or_default(),
            range: std::env::var(RANGE_ENV)
                .ok()
                .and_then(|s| match ColorRange::from_name(&s) {
                    Ok(range) => Some(range),
                    Err(e) => {
                        tracing::warn!("Ignoring {RANGE_ENV}: {e}");
                        None
                    }
                })
                .unwrap_or_default(),
        }
    }
}

impl ColorConfig {
    /// Range to use for a frame that declares `declared`.
    pub fn effective_range(&self, declared: ColorRange) -> ColorRange {
        let range = self.range.resolve(declared);
        if range != declared {
            tracing::debug!("Range override: {declared} -> {range}");
        }
        range
    }

    /// Transform for a frame tagged with `space` and `declared` range.
    pub fn transform(&self, space: ColorSpace, declared: ColorRange) -> Mat4 {
        derive_transform(&self.adjustment, space, self.effective_range(declared))
    }
}
