//! On-screen labels for the equalizer sliders.

use super::{AdjustmentKind, ColorAdjustment};

/// Placeholder replaced by the slider value in a label template.
const VALUE_PLACEHOLDER: &str = "%1";

impl AdjustmentKind {
    /// Label template with a `%1` placeholder for the percentage.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Brightness => "Brightness %1%",
            Self::Contrast => "Contrast %1%",
            Self::Saturation => "Saturation %1%",
            Self::Hue => "Hue %1%",
        }
    }
}

impl ColorAdjustment {
    /// Label template for a slider, or `"Reset"` for the reset action
    /// (`None`).
    pub fn format_text(kind: Option<AdjustmentKind>) -> &'static str {
        kind.map_or("Reset", AdjustmentKind::label)
    }

    /// OSD text for a slider with its current signed value filled in,
    /// e.g. `"Brightness +10%"`. `None` yields `"Reset"`.
    pub fn text(&self, kind: Option<AdjustmentKind>) -> String {
        let format = Self::format_text(kind);
        match kind {
            Some(kind) => format.replace(VALUE_PLACEHOLDER, &signed(self.get(kind))),
            None => format.to_string(),
        }
    }
}

fn signed(value: i32) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}
