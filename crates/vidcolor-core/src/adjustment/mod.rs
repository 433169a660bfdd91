//! User color adjustments (brightness, contrast, saturation, hue).
//!
//! `ColorAdjustment` is the persisted form of the four video equalizer
//! sliders. Every field is an integer percentage in `[-100, 100]` where
//! `0` is neutral. The BSHC matrix built here is one factor of the
//! composite transform in [`crate::transform::compose`].

pub mod codec;
pub mod text;

use std::f64::consts::PI;

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::transform::matrix;

/// Lowest accepted slider value.
pub const MIN_VALUE: i32 = -100;
/// Highest accepted slider value.
pub const MAX_VALUE: i32 = 100;

/// Identifies one of the four sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentKind {
    Brightness,
    Contrast,
    Saturation,
    Hue,
}

impl AdjustmentKind {
    /// Fixed field order used by every serialized form.
    pub const ALL: [Self; 4] = [Self::Brightness, Self::Contrast, Self::Saturation, Self::Hue];

    /// Key used in settings strings and JSON objects.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Saturation => "saturation",
            Self::Hue => "hue",
        }
    }

    /// Reverse of [`name`](Self::name). Exact match only.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    const fn index(self) -> usize {
        match self {
            Self::Brightness => 0,
            Self::Contrast => 1,
            Self::Saturation => 2,
            Self::Hue => 3,
        }
    }
}

/// Brightness/contrast/saturation/hue settings applied on top of the
/// colorspace conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawAdjustment")]
pub struct ColorAdjustment {
    brightness: i32,
    contrast: i32,
    saturation: i32,
    hue: i32,
}

/// Unclamped mirror used for deserialization.
#[derive(Deserialize)]
struct RawAdjustment {
    brightness: i32,
    contrast: i32,
    saturation: i32,
    hue: i32,
}

impl From<RawAdjustment> for ColorAdjustment {
    fn from(raw: RawAdjustment) -> Self {
        Self::new(raw.brightness, raw.contrast, raw.saturation, raw.hue)
    }
}

fn clamp_value(value: i32) -> i32 {
    value.clamp(MIN_VALUE, MAX_VALUE)
}

impl ColorAdjustment {
    /// Build an adjustment; out-of-range values are clamped.
    pub fn new(brightness: i32, contrast: i32, saturation: i32, hue: i32) -> Self {
        Self {
            brightness: clamp_value(brightness),
            contrast: clamp_value(contrast),
            saturation: clamp_value(saturation),
            hue: clamp_value(hue),
        }
    }

    pub fn brightness(&self) -> i32 {
        self.brightness
    }

    pub fn contrast(&self) -> i32 {
        self.contrast
    }

    pub fn saturation(&self) -> i32 {
        self.saturation
    }

    pub fn hue(&self) -> i32 {
        self.hue
    }

    pub fn set_brightness(&mut self, value: i32) {
        self.brightness = clamp_value(value);
    }

    pub fn set_contrast(&mut self, value: i32) {
        self.contrast = clamp_value(value);
    }

    pub fn set_saturation(&mut self, value: i32) {
        self.saturation = clamp_value(value);
    }

    pub fn set_hue(&mut self, value: i32) {
        self.hue = clamp_value(value);
    }

    /// Value of the slider identified by `kind`.
    pub fn get(&self, kind: AdjustmentKind) -> i32 {
        self.values()[kind.index()]
    }

    /// Set the slider identified by `kind`, clamping to `[-100, 100]`.
    pub fn set(&mut self, kind: AdjustmentKind, value: i32) {
        match kind {
            AdjustmentKind::Brightness => self.set_brightness(value),
            AdjustmentKind::Contrast => self.set_contrast(value),
            AdjustmentKind::Saturation => self.set_saturation(value),
            AdjustmentKind::Hue => self.set_hue(value),
        }
    }

    /// Copy of `self` with one slider moved by `delta` (e.g. a hotkey step).
    pub fn adjusted(&self, kind: AdjustmentKind, delta: i32) -> Self {
        let mut out = *self;
        out.set(kind, self.get(kind).saturating_add(delta));
        out
    }

    /// Fields in [`AdjustmentKind::ALL`] order.
    pub fn values(&self) -> [i32; 4] {
        [self.brightness, self.contrast, self.saturation, self.hue]
    }

    /// True when every slider is neutral.
    pub fn is_zero(&self) -> bool {
        self.values() == [0; 4]
    }

    /// The brightness/saturation/hue/contrast matrix.
    ///
    /// Acts on luma-chroma samples centered on zero. Contrast scales luma,
    /// contrast × saturation scales chroma, hue rotates the chroma plane and
    /// brightness offsets luma.
    ///
    /// ```text
    /// b = clamp(brightness / 100, -1, 1)
    /// c = clamp(1 + contrast / 100, 0, 2)
    /// s = clamp(1 + saturation / 100, 0, 2)
    /// h = clamp(hue / 100 × π, -π, π)
    ///
    /// | c   0            0           b |
    /// | 0   c·s·cos h    c·s·sin h   0 |
    /// | 0  -c·s·sin h    c·s·cos h   0 |
    /// | 0   0            0           1 |
    /// ```
    pub fn bshc_matrix(&self) -> Mat4 {
        let b = (f64::from(self.brightness) * 1e-2).clamp(-1.0, 1.0);
        let s = (f64::from(self.saturation) * 1e-2 + 1.0).clamp(0.0, 2.0);
        let c = (f64::from(self.contrast) * 1e-2 + 1.0).clamp(0.0, 2.0);
        let h = (f64::from(self.hue) * 1e-2 * PI).clamp(-PI, PI);

        let (sin, cos) = h.sin_cos();
        let cs_cos = (c * s * cos) as f32;
        let cs_sin = (c * s * sin) as f32;
        let c = c as f32;

        matrix::from_rows([
            [c, 0.0, 0.0, b as f32],
            [0.0, cs_cos, cs_sin, 0.0],
            [0.0, -cs_sin, cs_cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}
