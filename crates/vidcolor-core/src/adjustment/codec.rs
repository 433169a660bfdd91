//! Settings encodings for [`ColorAdjustment`].
//!
//! Three forms are supported:
//!
//! - **packed**: one byte per slider in a 64-bit integer,
//!   `(b+100)<<24 | (c+100)<<16 | (s+100)<<8 | (h+100)`.
//! - **string**: `brightness=0|contrast=0|saturation=0|hue=0`.
//! - **JSON**: `{"brightness":0,"contrast":0,"saturation":0,"hue":0}`.
//!
//! Decoding is all-or-nothing. A string with one bad token or a JSON object
//! with one missing key is rejected as a whole.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::{AdjustmentKind, ColorAdjustment, MAX_VALUE, MIN_VALUE};
use crate::error::ColorError;

/// Token separator of the string form.
const SEPARATOR: char = '|';

/// Shift of each slider's byte in the packed form, in field order.
const PACK_SHIFTS: [u32; 4] = [24, 16, 8, 0];

/// Bias added to each slider so `[-100, 100]` fits in an unsigned byte.
const PACK_BIAS: i32 = 100;

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"^(\w+)=([+-]?\d+)$").expect("token pattern is a valid regex")
    })
}

impl ColorAdjustment {
    /// Compact integer form.
    pub fn packed(&self) -> i64 {
        AdjustmentKind::ALL
            .into_iter()
            .zip(PACK_SHIFTS)
            .fold(0, |acc, (kind, shift)| {
                let byte = (self.get(kind) + PACK_BIAS) as i64 & 0xff;
                acc | (byte << shift)
            })
    }

    /// Inverse of [`packed`](Self::packed). Bits above bit 31 are ignored.
    pub fn from_packed(packed: i64) -> Self {
        let mut out = Self::default();
        for (kind, shift) in AdjustmentKind::ALL.into_iter().zip(PACK_SHIFTS) {
            let byte = ((packed >> shift) & 0xff) as i32;
            out.set(kind, byte - PACK_BIAS);
        }
        out
    }

    /// Parse the string form, falling back to neutral settings on any error.
    pub fn from_settings_str(s: &str) -> Self {
        match s.parse() {
            Ok(adjustment) => adjustment,
            Err(e) => {
                tracing::warn!("Discarding color adjustment {s:?}: {e}");
                Self::default()
            }
        }
    }

    /// JSON object with one integer per slider.
    pub fn to_json(&self) -> Value {
        let object: Map<String, Value> = AdjustmentKind::ALL
            .into_iter()
            .map(|kind| (kind.name().to_string(), Value::from(self.get(kind))))
            .collect();
        Value::Object(object)
    }

    /// Read all four sliders from a JSON object. Unknown keys are ignored.
    pub fn from_json(json: &Value) -> Result<Self, ColorError> {
        let mut out = Self::default();
        for kind in AdjustmentKind::ALL {
            let value = json.get(kind.name()).ok_or(ColorError::MissingField(kind.name()))?;
            let number = value.as_i64().ok_or_else(|| ColorError::InvalidValue {
                field: kind.name(),
                value: value.to_string(),
            })?;
            let clamped = number.clamp(i64::from(MIN_VALUE), i64::from(MAX_VALUE));
            out.set(kind, clamped as i32);
        }
        Ok(out)
    }
}

impl fmt::Display for ColorAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in AdjustmentKind::ALL.into_iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{}={}", kind.name(), self.get(kind))?;
        }
        Ok(())
    }
}

impl FromStr for ColorAdjustment {
    type Err = ColorError;

    /// Parse `name=value` tokens separated by `|`. Missing sliders stay
    /// neutral; repeated sliders keep the last value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = Self::default();
        for token in s.split(SEPARATOR) {
            let caps = token_regex()
                .captures(token)
                .ok_or_else(|| ColorError::MalformedToken(token.to_string()))?;
            let kind = AdjustmentKind::from_name(&caps[1])
                .ok_or_else(|| ColorError::UnknownField(caps[1].to_string()))?;
            let value: i64 = caps[2].parse().map_err(|_| ColorError::InvalidValue {
                field: kind.name(),
                value: caps[2].to_string(),
            })?;
            let clamped = value.clamp(i64::from(MIN_VALUE), i64::from(MAX_VALUE));
            out.set(kind, clamped as i32);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn samples() -> Vec<ColorAdjustment> {
        vec![
            ColorAdjustment::default(),
            ColorAdjustment::new(10, -5, 0, 0),
            ColorAdjustment::new(-100, 100, -100, 100),
            ColorAdjustment::new(37, -64, 12, -1),
        ]
    }

    #[test]
    fn test_pack_layout() {
        let adj = ColorAdjustment::new(10, -5, 0, 0);
        assert_eq!(adj.packed(), (110 << 24) | (95 << 16) | (100 << 8) | 100);
    }

    #[test]
    fn test_pack_roundtrip_every_value() {
        for v in MIN_VALUE..=MAX_VALUE {
            let adj = ColorAdjustment::new(v, -v, v / 2, -v / 3);
            assert_eq!(ColorAdjustment::from_packed(adj.packed()), adj, "value {v}");
        }
    }

    #[test]
    fn test_unpack_clamps_out_of_range_bytes() {
        let adj = ColorAdjustment::from_packed(0xff << 24);
        assert_eq!(adj.brightness(), 100);
        assert_eq!(adj.hue(), -100);
    }

    #[test]
    fn test_to_string_field_order() {
        assert_eq!(
            ColorAdjustment::default().to_string(),
            "brightness=0|contrast=0|saturation=0|hue=0"
        );
        assert_eq!(
            ColorAdjustment::new(10, -5, 0, 3).to_string(),
            "brightness=10|contrast=-5|saturation=0|hue=3"
        );
    }

    #[test]
    fn test_string_roundtrip() {
        for adj in samples() {
            let parsed: ColorAdjustment = adj.to_string().parse().unwrap();
            assert_eq!(parsed, adj);
        }
    }

    #[test]
    fn test_partial_string_keeps_other_fields_neutral() {
        let adj: ColorAdjustment = "hue=20|brightness=5".parse().unwrap();
        assert_eq!(adj, ColorAdjustment::new(5, 0, 0, 20));
    }

    #[test]
    fn test_bad_string_rejects_everything() {
        let cases = [
            ("brightness=10|gamma=3", ColorError::UnknownField("gamma".into())),
            ("brightness=10|contrast=abc", ColorError::MalformedToken("contrast=abc".into())),
            ("brightness=10|", ColorError::MalformedToken(String::new())),
            ("brightness = 10", ColorError::MalformedToken("brightness = 10".into())),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<ColorAdjustment>(), Err(expected), "{input:?}");
            assert_eq!(ColorAdjustment::from_settings_str(input), ColorAdjustment::default());
        }
    }

    #[test]
    fn test_string_values_are_clamped() {
        let adj: ColorAdjustment = "saturation=250|hue=-99999999999".parse().unwrap();
        assert_eq!(adj.saturation(), 100);
        assert_eq!(adj.hue(), -100);
    }

    #[test]
    fn test_json_roundtrip() {
        for adj in samples() {
            assert_eq!(ColorAdjustment::from_json(&adj.to_json()), Ok(adj));
        }
    }

    #[test]
    fn test_json_shape() {
        let json = ColorAdjustment::new(1, 2, 3, 4).to_json();
        assert_eq!(json, json!({"brightness": 1, "contrast": 2, "saturation": 3, "hue": 4}));
    }

    #[test]
    fn test_json_missing_key_fails() {
        for kind in AdjustmentKind::ALL {
            let mut json = ColorAdjustment::new(5, 5, 5, 5).to_json();
            json.as_object_mut().unwrap().remove(kind.name());
            assert_eq!(
                ColorAdjustment::from_json(&json),
                Err(ColorError::MissingField(kind.name()))
            );
        }
    }

    #[test]
    fn test_json_ignores_extra_keys() {
        let json = json!({
            "brightness": -3, "contrast": 0, "saturation": 7, "hue": 0, "gamma": 12
        });
        assert_eq!(ColorAdjustment::from_json(&json), Ok(ColorAdjustment::new(-3, 0, 7, 0)));
    }

    #[test]
    fn test_json_rejects_non_integer() {
        let json = json!({"brightness": "high", "contrast": 0, "saturation": 0, "hue": 0});
        assert!(matches!(
            ColorAdjustment::from_json(&json),
            Err(ColorError::InvalidValue { field: "brightness", .. })
        ));
    }
}
