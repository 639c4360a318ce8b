// Chunk: docs/chunks/font_zoom - Clamped font scale
//! Font scale arithmetic for the zoom chords.

/// Smallest scale a zoom step can reach.
pub const MIN_SCALE: f64 = 0.5;
/// Largest scale a zoom step can reach.
pub const MAX_SCALE: f64 = 3.0;
/// The natural font size.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Applies `delta` to `current`, clamped to `[MIN_SCALE, MAX_SCALE]`.
pub fn adjust(current: f64, delta: f64) -> f64 {
    clamp_scale(current + delta)
}

/// The scale a reset returns to.
pub fn reset() -> f64 {
    DEFAULT_SCALE
}

/// Clamps a scale into range. NaN falls back to the default.
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.is_nan() {
        return DEFAULT_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// The window's current font scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    scale: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

impl ZoomState {
    /// Starts at `scale`, clamped.
    pub fn new(scale: f64) -> Self {
        Self {
            scale: clamp_scale(scale),
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Moves the scale by `delta` and returns the new value.
    pub fn adjust(&mut self, delta: f64) -> f64 {
        self.scale = adjust(self.scale, delta);
        self.scale
    }

    /// Returns the scale to 1.0.
    pub fn reset(&mut self) -> f64 {
        self.scale = reset();
        self.scale
    }
}
