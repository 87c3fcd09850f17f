use crate::core::data::complex::Complex;
use crate::core::kernels::KernelResult;

const MANDELBROT_ESCAPE_RADIUS_SQUARED: f64 = 4.0; // radius 2
const CUBIC_ESCAPE_RADIUS_SQUARED: f64 = 9.0; // radius 3

fn iterate<F>(c: Complex, escape_radius_squared: f64, max_iterations: u32, step: F) -> u32
where
    F: Fn(Complex) -> Complex,
{
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() >= escape_radius_squared {
            return iteration;
        }
        z = step(z) + c;
    }

    max_iterations
}

/// Mandelbrot evaluation at sample coordinate `(u, v)`.
///
/// The sample is remapped to `c = (2u - 1.5, 2v - 1)` so the identity
/// viewport frames the classic set.
#[must_use]
pub fn mandelbrot(u: f64, v: f64, max_iterations: u32) -> KernelResult {
    let c = Complex {
        real: 2.0 * u - 1.5,
        imag: 2.0 * v - 1.0,
    };
    let iterations = iterate(c, MANDELBROT_ESCAPE_RADIUS_SQUARED, max_iterations, |z| z * z);

    KernelResult::from_iterations(iterations, max_iterations)
}

/// Cubic (`z ← z³ + c`) evaluation with `c = (4u - 2, 4v - 2)`.
#[must_use]
pub fn cubic(u: f64, v: f64, max_iterations: u32) -> KernelResult {
    let c = Complex {
        real: 4.0 * u - 2.0,
        imag: 4.0 * v - 2.0,
    };
    let iterations = iterate(c, CUBIC_ESCAPE_RADIUS_SQUARED, max_iterations, |z| z * z * z);

    KernelResult::from_iterations(iterations, max_iterations)
}
