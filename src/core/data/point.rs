/// A point in display-window coordinates (pixels, but fractional positions
/// are allowed for pointer events).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
