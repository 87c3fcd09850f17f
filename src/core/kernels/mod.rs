pub mod escape_time;
pub mod warps;

use crate::core::data::colour::channel;

/// Outcome of one escape-time evaluation.
///
/// `escaped` is true when the iteration stopped before the budget ran out;
/// `intensity` is the banded brightness derived from the iteration count.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KernelResult {
    pub iterations: u32,
    pub escaped: bool,
    pub intensity: u8,
}

impl KernelResult {
    /// Derives the result from an iteration count.
    ///
    /// The intensity wraps through `fract`, so a point that exhausts the
    /// budget lands back on zero brightness. The banding this produces is
    /// part of the visual design.
    #[must_use]
    pub fn from_iterations(iterations: u32, max_iterations: u32) -> Self {
        let ratio = f64::from(iterations) / f64::from(max_iterations);

        Self {
            iterations,
            escaped: iterations < max_iterations,
            intensity: channel(ratio.fract() * 255.0),
        }
    }
}

/// The closed set of per-pixel evaluation formulas. The render job carries
/// one of these and the dispatcher matches on it once per pixel; no trait
/// objects or function pointers sit inside the hot loop.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KernelKind {
    /// Plain `(u, v)` gradient, doubling as the startup/help screen.
    UvGrid,
    /// `z ← z² + c`, escape radius 2.
    Mandelbrot,
    /// `z ← z³ + c`, escape radius 3.
    Cubic,
    /// Non-escaping warp composition; colours come straight from the warped
    /// coordinates rather than from an iteration count.
    Function(warps::FunctionVariant),
}

impl KernelKind {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::UvGrid => "UV grid",
            Self::Mandelbrot => "Mandelbrot",
            Self::Cubic => "Cubic",
            Self::Function(variant) => variant.display_name(),
        }
    }
}
