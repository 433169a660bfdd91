//! Frame colorspace tags and luma weighting constants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Colorspace tag delivered by the decoder alongside each frame.
///
/// Only the three luma-chroma standards, RGB and YCgCo can be converted.
/// The remaining tags are forwarded by decoders but have no conversion
/// path and fall back to identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpace {
    /// Decoder did not resolve a colorspace.
    Auto,
    /// ITU-R BT.601 (SD).
    Bt601,
    /// ITU-R BT.709 (HD).
    Bt709,
    /// SMPTE 240M (early HDTV).
    Smpte240m,
    /// ITU-R BT.2020 non-constant luminance.
    Bt2020Ncl,
    /// ITU-R BT.2020 constant luminance.
    Bt2020Cl,
    /// Samples are already RGB.
    Rgb,
    /// CIE XYZ.
    Xyz,
    /// YCgCo (luma, chroma green, chroma orange).
    YCgCo,
}

/// Blue and red luma weights of a Y'CbCr standard. Green is implied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumaWeights {
    pub kb: f32,
    pub kr: f32,
}

impl LumaWeights {
    pub const BT601: Self = Self { kb: 0.1140, kr: 0.2990 };
    pub const BT709: Self = Self { kb: 0.0722, kr: 0.2126 };
    pub const SMPTE240M: Self = Self { kb: 0.0870, kr: 0.2120 };

    /// `1 − kb − kr`.
    pub fn kg(&self) -> f32 {
        1.0 - self.kb - self.kr
    }
}

impl ColorSpace {
    /// Luma weights for Y'CbCr standards, `None` for everything else.
    pub const fn weights(self) -> Option<LumaWeights> {
        match self {
            Self::Bt601 => Some(LumaWeights::BT601),
            Self::Bt709 => Some(LumaWeights::BT709),
            Self::Smpte240m => Some(LumaWeights::SMPTE240M),
            Self::Auto | Self::Bt2020Ncl | Self::Bt2020Cl | Self::Rgb | Self::Xyz | Self::YCgCo => {
                None
            }
        }
    }

    /// Display name, as shown in the player's colorspace menu.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Autoselect",
            Self::Bt601 => "BT.601 (SD)",
            Self::Bt709 => "BT.709 (HD)",
            Self::Smpte240m => "SMPTE-240M",
            Self::Bt2020Ncl => "BT.2020-NCL (UHD)",
            Self::Bt2020Cl => "BT.2020-CL (UHD)",
            Self::Rgb => "RGB",
            Self::Xyz => "XYZ",
            Self::YCgCo => "YCgCo",
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [ColorSpace; 9] = [
            ColorSpace::Auto,
            ColorSpace::Bt601,
            ColorSpace::Bt709,
            ColorSpace::Smpte240m,
            ColorSpace::Bt2020Ncl,
            ColorSpace::Bt2020Cl,
            ColorSpace::Rgb,
            ColorSpace::Xyz,
            ColorSpace::YCgCo,
        ];
        &ALL
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
