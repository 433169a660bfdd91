use glam::{Mat4, Vec3, Vec4};
use vidcolor_core::{
    AdjustmentKind, ColorAdjustment, ColorConfig, ColorRange, ColorSpace, derive_transform,
};

const EPSILON: f32 = 1e-4;

/// 8-bit code values to a normalized sample.
fn sample(y: u8, cb: u8, cr: u8) -> Vec4 {
    Vec4::new(
        f32::from(y) / 255.0,
        f32::from(cb) / 255.0,
        f32::from(cr) / 255.0,
        1.0,
    )
}

fn rgb(m: Mat4, s: Vec4) -> Vec3 {
    (m * s).truncate()
}

#[test]
fn studio_range_bars_decode_to_expected_rgb() {
    let m = derive_transform(
        &ColorAdjustment::default(),
        ColorSpace::Bt709,
        ColorRange::Limited,
    );

    let white = rgb(m, sample(235, 128, 128));
    let black = rgb(m, sample(16, 128, 128));
    assert!(white.abs_diff_eq(Vec3::ONE, EPSILON), "{white:?}");
    assert!(black.abs_diff_eq(Vec3::ZERO, EPSILON), "{black:?}");

    // BT.709 75% red bar: Y=51, Cb=109, Cr=212 (rounded code values).
    let red = rgb(m, sample(51, 109, 212));
    assert!((red.x - 0.75).abs() < 0.01, "{red:?}");
    assert!(red.y.abs() < 0.01 && red.z.abs() < 0.01, "{red:?}");
}

#[test]
fn remap_expands_studio_range_to_full() {
    let m = derive_transform(&ColorAdjustment::default(), ColorSpace::Bt601, ColorRange::Remap);
    let white = rgb(m, sample(235, 128, 128));
    let black = rgb(m, sample(16, 128, 128));
    assert!(black.abs_diff_eq(Vec3::ZERO, EPSILON), "{black:?}");
    assert!(white.abs_diff_eq(Vec3::ONE, EPSILON), "{white:?}");
}

#[test]
fn extended_stretches_chroma_with_the_luma_ratio() {
    let m = derive_transform(
        &ColorAdjustment::default(),
        ColorSpace::Bt601,
        ColorRange::Extended,
    );
    // Studio chroma center 128 lands slightly above the full-range center,
    // so gray picks up a blue/red cast that Remap does not produce.
    let gray = rgb(m, sample(126, 128, 128));
    assert!((gray.y - 0.5).abs() < 0.02, "{gray:?}");
    assert!(gray.x > gray.y && gray.z > gray.y, "{gray:?}");
}

#[test]
fn settings_survive_every_encoding() {
    let adj = ColorAdjustment::default()
        .adjusted(AdjustmentKind::Brightness, 12)
        .adjusted(AdjustmentKind::Contrast, -30)
        .adjusted(AdjustmentKind::Hue, 45);

    assert_eq!(ColorAdjustment::from_packed(adj.packed()), adj);
    assert_eq!(ColorAdjustment::from_settings_str(&adj.to_string()), adj);
    assert_eq!(ColorAdjustment::from_json(&adj.to_json()), Ok(adj));

    let decoded = ColorAdjustment::from_packed(adj.packed());
    assert_eq!(
        decoded.matrix(ColorSpace::Bt709, ColorRange::Full),
        adj.matrix(ColorSpace::Bt709, ColorRange::Full)
    );
}

#[test]
fn config_override_changes_the_matrix() {
    let cfg = ColorConfig {
        adjustment: ColorAdjustment::default(),
        range: ColorRange::Full,
    };
    let declared = ColorRange::Limited;
    let black = rgb(cfg.transform(ColorSpace::Bt709, declared), sample(16, 128, 128));
    // Interpreted as full range, studio black is lifted above zero.
    assert!(black.x > 0.05, "{black:?}");
}

#[test]
fn transforms_are_shareable_across_threads() {
    let adj = ColorAdjustment::new(10, 20, -30, 40);
    let expected = adj.matrix(ColorSpace::Smpte240m, ColorRange::Limited);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || adj.matrix(ColorSpace::Smpte240m, ColorRange::Limited))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
