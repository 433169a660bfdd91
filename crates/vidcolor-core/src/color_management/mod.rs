//! Color management — sample ranges and colorspace constants.

pub mod color_space;
pub mod range;
