//! vidcolor core — color matrices for video playback.
//!
//! Derives the single 4x4 matrix a renderer applies to decoded samples:
//! range expansion, user brightness/contrast/saturation/hue and the
//! colorspace conversion folded into one transform. Also carries the
//! settings encodings for the adjustment sliders. No I/O, no pixels.

pub mod adjustment;
pub mod color_management;
pub mod config;
pub mod error;
pub mod transform;

// Re-exports for convenience.
pub use adjustment::{AdjustmentKind, ColorAdjustment};
pub use color_management::color_space::{ColorSpace, LumaWeights};
pub use color_management::range::{ColorRange, RangeBounds};
pub use config::ColorConfig;
pub use error::ColorError;
pub use transform::compose::{derive_transform, try_derive_transform};
