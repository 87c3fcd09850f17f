#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
}

/// Narrows a floating-point channel value to a byte by truncating to an
/// integer and keeping the low eight bits. Values outside [0, 255] wrap
/// around; the wraparound is an accepted visual artifact of the renderer,
/// so this must not be replaced with a clamp.
#[must_use]
pub fn channel(value: f64) -> u8 {
    (value as i64) as u8
}
