//! Sample value ranges and their normalized bounds.
//!
//! Every range maps coded sample values to a `[low, high]` window inside
//! `[0, 1]`. Luma and chroma have separate windows because studio-range
//! chroma extends to 240/255 while luma stops at 235/255.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Declared value range of a frame, or the user's override of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRange {
    /// Use whatever the frame declares.
    #[default]
    Auto,
    /// Studio (TV) range: Y in 16..=235, C in 16..=240.
    Limited,
    /// Full (PC) range: 0..=255 for every channel.
    Full,
    /// Expand limited-range samples to full range, luma and chroma scaled
    /// independently.
    Remap,
    /// Expand limited-range samples to full range with the luma ratio
    /// applied to all three channels.
    Extended,
}

/// Normalized `(y_low, y_high, c_low, c_high)` window of a [`ColorRange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeBounds {
    pub y_low: f32,
    pub y_high: f32,
    pub c_low: f32,
    pub c_high: f32,
}

impl RangeBounds {
    /// 0..=255 on every channel.
    pub const FULL: Self = Self {
        y_low: 0.0 / 255.0,
        y_high: 255.0 / 255.0,
        c_low: 0.0 / 255.0,
        c_high: 255.0 / 255.0,
    };

    /// 16..=235 luma, 16..=240 chroma.
    pub const LIMITED: Self = Self {
        y_low: 16.0 / 255.0,
        y_high: 235.0 / 255.0,
        c_low: 16.0 / 255.0,
        c_high: 240.0 / 255.0,
    };

    /// Width of the luma window.
    pub fn luma_span(&self) -> f32 {
        self.y_high - self.y_low
    }

    /// Width of the chroma window.
    pub fn chroma_span(&self) -> f32 {
        self.c_high - self.c_low
    }

    /// Neutral point `(y_low, mid, mid)` where `mid` is the chroma center.
    ///
    /// Subtracting this from a sample puts black at the origin and centers
    /// both chroma channels on zero.
    pub fn base(&self) -> Vec3 {
        let mid = (self.c_low + self.c_high) * 0.5;
        Vec3::new(self.y_low, mid, mid)
    }
}

impl ColorRange {
    /// Normalized bounds for this range. Everything except `Limited` uses
    /// the full window.
    pub const fn bounds(self) -> RangeBounds {
        match self {
            Self::Limited => RangeBounds::LIMITED,
            Self::Auto | Self::Full | Self::Remap | Self::Extended => RangeBounds::FULL,
        }
    }

    /// Shorthand for `self.bounds().base()`.
    pub fn base(self) -> Vec3 {
        self.bounds().base()
    }

    /// Whether samples must be expanded from studio to full range before
    /// the colorspace conversion.
    pub const fn rescales(self) -> bool {
        matches!(self, Self::Remap | Self::Extended)
    }

    /// Apply this range as a user override on top of the frame's declared
    /// range. `Auto` defers to the frame.
    pub const fn resolve(self, declared: ColorRange) -> ColorRange {
        match self {
            Self::Auto => declared,
            other => other,
        }
    }

    /// Lowercase identifier used in settings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Limited => "limited",
            Self::Full => "full",
            Self::Remap => "remap",
            Self::Extended => "extended",
        }
    }

    /// Human-readable label for menus and OSD text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Limited => "Limited Range",
            Self::Full => "Full Range",
            Self::Remap => "Remap Range",
            Self::Extended => "Extended Range",
        }
    }

    /// Parse a settings identifier (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        Self::all()
            .iter()
            .copied()
            .find(|range| range.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ColorError::UnknownRange(name.to_string()))
    }

    pub fn all() -> &'static [Self] {
        const ALL: [ColorRange; 5] = [
            ColorRange::Auto,
            ColorRange::Limited,
            ColorRange::Full,
            ColorRange::Remap,
            ColorRange::Extended,
        ];
        &ALL
    }
}

impl fmt::Display for ColorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
