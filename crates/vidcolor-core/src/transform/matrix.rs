//! Row-major construction helpers over `glam::Mat4`.
//!
//! glam stores columns; colorimetry formulas are written as rows acting on
//! column vectors. These helpers keep the formulas readable in the
//! `(row, column)` form they are published in.

use glam::{Mat4, Vec3, Vec4};

/// Build a matrix from four rows.
pub fn from_rows(rows: [[f32; 4]; 4]) -> Mat4 {
    Mat4::from_cols_array_2d(&rows).transpose()
}

/// Embed a 3x3 block (rows) into the upper-left of an otherwise identity
/// matrix.
pub fn from_rows3(rows: [[f32; 3]; 3]) -> Mat4 {
    let [r0, r1, r2] = rows;
    from_rows([
        [r0[0], r0[1], r0[2], 0.0],
        [r1[0], r1[1], r1[2], 0.0],
        [r2[0], r2[1], r2[2], 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Identity with `offset` in the translation column.
pub fn translation(offset: Vec3) -> Mat4 {
    Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::Z, offset.extend(1.0))
}

/// Identity with `scale` on the diagonal and `offset` in the translation
/// column: `out = in * scale + offset` per channel.
pub fn scale_offset(scale: Vec3, offset: Vec3) -> Mat4 {
    Mat4::from_cols(
        Vec4::X * scale.x,
        Vec4::Y * scale.y,
        Vec4::Z * scale.z,
        offset.extend(1.0),
    )
}

/// Element at `(row, col)`.
pub fn at(m: &Mat4, row: usize, col: usize) -> f32 {
    m.col(col)[row]
}

/// Apply `m` to a three-channel sample in homogeneous coordinates.
pub fn apply(m: &Mat4, sample: Vec3) -> Vec3 {
    m.mul_vec4(sample.extend(1.0)).truncate()
}
