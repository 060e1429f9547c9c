//! One-click margin presets.

/// Preset margins offered next to the margin slider, in percent.
pub const MARGIN_PRESETS: [f64; 3] = [15.0, 25.0, 35.0];

/// Chip label for a preset, e.g. "25%".
pub fn chip_label(preset: f64) -> String {
    format!("{}%", preset)
}
