use crate::core::colorizers::colorize;
use crate::core::data::colour::{channel, Colour};
use crate::core::kernels::escape_time::{cubic, mandelbrot};
use crate::core::kernels::warps::warp_colour;
use crate::core::kernels::KernelKind;
use crate::core::render::render_job::RenderJob;

/// Evaluates one pixel of a job: linear index to normalized `(u, v)`, through
/// the viewport snapshot into the sample plane, then kernel and colorizer.
///
/// Pure function of the job and the index; the serial and tiled renderers
/// share it, which is what makes their outputs comparable.
#[must_use]
pub fn shade_pixel(job: &RenderJob, index: usize) -> Colour {
    let x = index % job.width() as usize;
    let y = index / job.width() as usize;
    let u = x as f64 / f64::from(job.width());
    let v = y as f64 / f64::from(job.height());
    let (sample_u, sample_v) = job.viewport().map(u, v);

    match job.kernel() {
        // The UV screen ignores both viewport and colorizer: it paints the
        // raw pixel position.
        KernelKind::UvGrid => Colour {
            r: channel(u * 255.0),
            g: channel(v * 255.0),
            b: 0,
        },
        KernelKind::Mandelbrot => {
            let result = mandelbrot(sample_u, sample_v, job.max_iterations());
            colorize(job.colorizer(), u, v, result, job.max_iterations())
        }
        KernelKind::Cubic => {
            let result = cubic(sample_u, sample_v, job.max_iterations());
            colorize(job.colorizer(), u, v, result, job.max_iterations())
        }
        // Function kernels hand colours over directly; remap the sample from
        // [0, 1] into the [-1, 1] square the warps are defined over.
        KernelKind::Function(variant) => {
            warp_colour(variant, 2.0 * sample_u - 1.0, 2.0 * sample_v - 1.0)
        }
    }
}
