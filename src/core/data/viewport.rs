use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// The fixed factor applied by a wheel-zoom step.
pub const WHEEL_ZOOM_FACTOR: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    DegenerateScale { scale_u: f64, scale_v: f64 },
    DegenerateRect { from: Point, to: Point },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateScale { scale_u, scale_v } => {
                write!(
                    f,
                    "viewport scales must be nonzero and finite: ({}, {})",
                    scale_u, scale_v
                )
            }
            Self::DegenerateRect { from, to } => {
                write!(
                    f,
                    "zoom rectangle from (x: {}, y: {}) to (x: {}, y: {}) has zero width",
                    from.x, from.y, to.x, to.y
                )
            }
        }
    }
}

impl Error for ViewportError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// An immutable scale-and-offset transform from normalized image space
/// `[0, 1]²` into the sample plane a kernel evaluates over.
///
/// Viewports are never mutated in place; navigation derives a new value from
/// the current one and the stack records the history.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    scale_u: f64,
    scale_v: f64,
    offset_u: f64,
    offset_v: f64,
}

impl Viewport {
    pub fn new(
        scale_u: f64,
        scale_v: f64,
        offset_u: f64,
        offset_v: f64,
    ) -> Result<Self, ViewportError> {
        if scale_u == 0.0 || scale_v == 0.0 || !scale_u.is_finite() || !scale_v.is_finite() {
            return Err(ViewportError::DegenerateScale { scale_u, scale_v });
        }

        Ok(Self {
            scale_u,
            scale_v,
            offset_u,
            offset_v,
        })
    }

    /// The root view: scale 1, offset 0.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            scale_u: 1.0,
            scale_v: 1.0,
            offset_u: 0.0,
            offset_v: 0.0,
        }
    }

    #[must_use]
    pub fn scale_u(&self) -> f64 {
        self.scale_u
    }

    #[must_use]
    pub fn scale_v(&self) -> f64 {
        self.scale_v
    }

    #[must_use]
    pub fn offset_u(&self) -> f64 {
        self.offset_u
    }

    #[must_use]
    pub fn offset_v(&self) -> f64 {
        self.offset_v
    }

    /// Maps a normalized pixel coordinate to a sample coordinate.
    #[must_use]
    pub fn map(&self, u: f64, v: f64) -> (f64, f64) {
        (
            u * self.scale_u + self.offset_u,
            v * self.scale_v + self.offset_v,
        )
    }

    /// Derives the view for a drag from `from` to `to` inside a window of
    /// `window_width` by `window_height` pixels.
    ///
    /// The horizontal drag extent is reused for both axes so the zoomed view
    /// keeps the window's aspect ratio. A drag with zero horizontal extent
    /// would produce a zero scale and is rejected.
    pub fn zoomed_to_rect(
        &self,
        from: Point,
        to: Point,
        window_width: f64,
        window_height: f64,
    ) -> Result<Self, ViewportError> {
        if to.x == from.x {
            return Err(ViewportError::DegenerateRect { from, to });
        }

        let extent = (to.x - from.x) / window_width;

        Self::new(
            self.scale_u * extent,
            self.scale_v * extent,
            self.offset_u + (from.x / window_width) * self.scale_u,
            self.offset_v + (from.y / window_height) * self.scale_v,
        )
    }

    /// Derives the view for a wheel-zoom step centred on `point`, halving or
    /// doubling both scales and recentring the offsets on the sample under
    /// the pointer.
    ///
    /// Deep enough zoom sequences underflow the halved scale to zero (or
    /// overflow it to infinity on the way out), so the result goes through
    /// the validated constructor and the caller drops a failing step.
    pub fn zoomed_at(
        &self,
        point: Point,
        window_width: f64,
        window_height: f64,
        direction: ZoomDirection,
    ) -> Result<Self, ViewportError> {
        let factor = match direction {
            ZoomDirection::In => 1.0 / WHEEL_ZOOM_FACTOR,
            ZoomDirection::Out => WHEEL_ZOOM_FACTOR,
        };

        let scale_u = self.scale_u * factor;
        let scale_v = self.scale_v * factor;
        let (centre_u, centre_v) = self.map(point.x / window_width, point.y / window_height);

        Self::new(
            scale_u,
            scale_v,
            centre_u - scale_u / 2.0,
            centre_v - scale_v / 2.0,
        )
    }

    /// Derives a view shifted by `step_u`/`step_v` fractions of the current
    /// scale. Used by the pan commands, which replace the stack top rather
    /// than growing the history.
    #[must_use]
    pub fn panned(&self, step_u: f64, step_v: f64) -> Self {
        Self {
            scale_u: self.scale_u,
            scale_v: self.scale_v,
            offset_u: self.offset_u + step_u * self.scale_u,
            offset_v: self.offset_v + step_v * self.scale_v,
        }
    }
}
