//! Shared numeric constants.

/// Default stroke width for a fresh engine, in canvas pixels.
pub const DEFAULT_STROKE_WIDTH: u32 = 5;

/// Radius of a remote participant's cursor dot, in canvas pixels.
pub const CURSOR_RADIUS: f64 = 6.0;

/// Dash on/off length for shape previews, in canvas pixels.
pub const PREVIEW_DASH: f64 = 5.0;

/// Text font size is `stroke_width * TEXT_FONT_SCALE` pixels.
pub const TEXT_FONT_SCALE: u32 = 3;
