//! Non-escaping "function" kernels: fixed compositions of coordinate warps
//! over `[-1, 1]²`, coloured directly from the warped coordinates. These
//! bypass the iteration/intensity path entirely.

use crate::core::data::colour::{channel, Colour};
use std::f64::consts::PI;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FunctionVariant {
    SinusoidalSwirl,
    SphericalBloom,
    TangentWeave,
}

impl FunctionVariant {
    pub const ALL: &'static [Self] = &[
        Self::SinusoidalSwirl,
        Self::SphericalBloom,
        Self::TangentWeave,
    ];

    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SinusoidalSwirl => "Sinusoidal swirl",
            Self::SphericalBloom => "Spherical bloom",
            Self::TangentWeave => "Tangent weave",
        }
    }
}

fn sinusoidal(x: f64, y: f64) -> (f64, f64) {
    (x.sin(), y.sin())
}

fn swirl(x: f64, y: f64) -> (f64, f64) {
    let r2 = x * x + y * y;
    (
        x * r2.sin() - y * r2.cos(),
        x * r2.cos() + y * r2.sin(),
    )
}

fn spherical(x: f64, y: f64) -> (f64, f64) {
    // Keep the pole at the origin finite.
    let r2 = (x * x + y * y).max(1e-9);
    (x / r2, y / r2)
}

fn tangent(x: f64, y: f64) -> (f64, f64) {
    (x.sin() / y.cos(), y.tan())
}

/// Evaluates one variant at a `[-1, 1]²` coordinate and derives the RGB
/// channels from trigonometric combinations of the warped coordinates.
#[must_use]
pub fn warp_colour(variant: FunctionVariant, x: f64, y: f64) -> Colour {
    let (wx, wy) = match variant {
        FunctionVariant::SinusoidalSwirl => {
            let (sx, sy) = sinusoidal(x, y);
            swirl(sx, sy)
        }
        FunctionVariant::SphericalBloom => {
            let (sx, sy) = sinusoidal(x, y);
            let (rx, ry) = swirl(sx, sy);
            spherical(rx, ry)
        }
        FunctionVariant::TangentWeave => {
            let (rx, ry) = swirl(x, y);
            tangent(rx, ry)
        }
    };

    let sum = wx + wy;

    Colour {
        r: channel(((sum * PI).sin() * 0.5 + 0.5) * 255.0),
        g: channel(((wx * 3.0).cos() * 0.5 + 0.5) * 255.0),
        b: channel(((wy * 5.0).sin() * 0.5 + 0.5) * 255.0),
    }
}
