//! Composite sample-to-RGB transform.
//!
//! For Y'CbCr sources the renderer applies one matrix built as
//!
//! ```text
//! result = coefficients · bshc · base_sub · rescale
//! ```
//!
//! read right to left: expand studio range if requested, move black and
//! neutral chroma to the origin, apply the user's adjustments, then convert
//! to RGB. Matrix products do not commute; keep the order.
//!
//! RGB and YCgCo sources are pushed through a BT.601 full-range Y'CbCr round
//! trip so the same adjustments apply to them.

use glam::{Mat4, Vec3};

use crate::adjustment::ColorAdjustment;
use crate::color_management::color_space::{ColorSpace, LumaWeights};
use crate::color_management::range::{ColorRange, RangeBounds};
use crate::error::ColorError;
use crate::transform::matrix;

/// Derive the matrix mapping raw samples of `space`/`range` to display RGB
/// with `adjustment` applied.
///
/// Unsupported colorspaces log a warning and yield identity so playback
/// continues with unconverted samples.
pub fn derive_transform(adjustment: &ColorAdjustment, space: ColorSpace, range: ColorRange) -> Mat4 {
    match try_derive_transform(adjustment, space, range) {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!("{e}; using identity transform");
            Mat4::IDENTITY
        }
    }
}

/// Like [`derive_transform`] but reports unsupported colorspaces to the
/// caller instead of falling back.
pub fn try_derive_transform(
    adjustment: &ColorAdjustment,
    space: ColorSpace,
    range: ColorRange,
) -> Result<Mat4, ColorError> {
    match space {
        ColorSpace::Bt601 | ColorSpace::Bt709 | ColorSpace::Smpte240m => {
            ycbcr_to_rgb(adjustment, space, range)
        }
        ColorSpace::Rgb | ColorSpace::YCgCo if adjustment.is_zero() => Ok(match space {
            ColorSpace::YCgCo => ycgco_to_rgb(),
            _ => Mat4::IDENTITY,
        }),
        ColorSpace::Rgb | ColorSpace::YCgCo => {
            let rgb_from_ycbcr = ycbcr_to_rgb(adjustment, ColorSpace::Bt601, ColorRange::Full)?;
            let mut to_ycbcr = rgb_to_ycbcr(ColorSpace::Bt601, ColorRange::Full)?;
            if space == ColorSpace::YCgCo {
                to_ycbcr *= ycgco_to_rgb();
            }
            Ok(rgb_from_ycbcr * to_ycbcr)
        }
        ColorSpace::Auto | ColorSpace::Bt2020Ncl | ColorSpace::Bt2020Cl | ColorSpace::Xyz => {
            Err(ColorError::UnsupportedColorSpace(space.label()))
        }
    }
}

fn weights(space: ColorSpace) -> Result<LumaWeights, ColorError> {
    space
        .weights()
        .ok_or(ColorError::UnsupportedColorSpace(space.label()))
}

/// Studio-to-full expansion applied to raw samples before anything else.
///
/// `Remap` scales luma and chroma by their own ratios. `Extended` uses the
/// luma ratio and luma offset for all three channels. Other ranges need no
/// expansion.
pub fn range_rescale(range: ColorRange) -> Mat4 {
    let tv = RangeBounds::LIMITED;
    let pc = RangeBounds::FULL;
    match range {
        ColorRange::Remap => {
            let mul_y = pc.luma_span() / tv.luma_span();
            let mul_c = pc.chroma_span() / tv.chroma_span();
            let offset_y = pc.y_low - tv.y_low * mul_y;
            let offset_c = pc.c_low - tv.c_low * mul_c;
            matrix::scale_offset(
                Vec3::new(mul_y, mul_c, mul_c),
                Vec3::new(offset_y, offset_c, offset_c),
            )
        }
        ColorRange::Extended => {
            let mul = pc.luma_span() / tv.luma_span();
            let offset = pc.y_low - tv.y_low * mul;
            matrix::scale_offset(Vec3::splat(mul), Vec3::splat(offset))
        }
        ColorRange::Auto | ColorRange::Limited | ColorRange::Full => Mat4::IDENTITY,
    }
}

/// Y'CbCr → RGB coefficients for zero-centered samples of `range`.
///
/// ```text
/// R = dy·Y                          + (1−kr)·dc·Cr
/// G = dy·Y − dc·(1−kb)·kb/kg·Cb     − dc·(1−kr)·kr/kg·Cr
/// B = dy·Y + dc·(1−kb)·Cb
/// ```
///
/// with `dy = 1/(y_high−y_low)` and `dc = 2/(c_high−c_low)`.
pub fn ycbcr_coefficients(w: LumaWeights, range: ColorRange) -> Mat4 {
    let bounds = range.bounds();
    let dy = 1.0 / bounds.luma_span();
    let dc = 2.0 / bounds.chroma_span();
    let (kb, kr, kg) = (w.kb, w.kr, w.kg());

    matrix::from_rows3([
        [dy, 0.0, (1.0 - kr) * dc],
        [dy, -dc * (1.0 - kb) * kb / kg, -dc * (1.0 - kr) * kr / kg],
        [dy, dc * (1.0 - kb), 0.0],
    ])
}

fn ycbcr_to_rgb(
    adjustment: &ColorAdjustment,
    space: ColorSpace,
    range: ColorRange,
) -> Result<Mat4, ColorError> {
    let coef = ycbcr_coefficients(weights(space)?, range);
    let base_sub = matrix::translation(-range.base());
    Ok(coef * adjustment.bshc_matrix() * base_sub * range_rescale(range))
}

/// RGB → Y'CbCr for `space` encoded in `range`, including the offset back
/// to the range's black level and chroma center.
pub fn rgb_to_ycbcr(space: ColorSpace, range: ColorRange) -> Result<Mat4, ColorError> {
    let w = weights(space)?;
    let bounds = range.bounds();
    let dy = bounds.luma_span();
    let dc = bounds.chroma_span() * 0.5;
    let (kb, kr, kg) = (w.kb, w.kr, w.kg());

    let m = matrix::from_rows3([
        [dy * kr, dy * kg, dy * kb],
        [-dc * kr / (1.0 - kb), -dc * kg / (1.0 - kb), dc],
        [dc, -dc * kg / (1.0 - kr), -dc * kb / (1.0 - kr)],
    ]);
    Ok(matrix::translation(range.base()) * m)
}

/// YCgCo → RGB, chroma centered at 0.5.
///
/// ```text
/// | 1 -1  1 |   | Y        |
/// | 1  1  0 | · | Cg − 0.5 |
/// | 1 -1 -1 |   | Co − 0.5 |
/// ```
pub fn ycgco_to_rgb() -> Mat4 {
    let m = matrix::from_rows3([[1.0, -1.0, 1.0], [1.0, 1.0, 0.0], [1.0, -1.0, -1.0]]);
    m * matrix::translation(Vec3::new(0.0, -0.5, -0.5))
}

impl ColorAdjustment {
    /// Shorthand for [`derive_transform`] with this adjustment.
    pub fn matrix(&self, space: ColorSpace, range: ColorRange) -> Mat4 {
        derive_transform(self, space, range)
    }
}
