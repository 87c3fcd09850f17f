use crate::core::data::canvas::{Canvas, BYTES_PER_PIXEL};
use crate::core::render::shade::shade_pixel;
use crate::core::render::tiled::{check_canvas, RenderError};
use crate::core::render::render_job::RenderJob;

/// Single-threaded reference renderer. Unlike the tiled dispatcher it covers
/// every pixel, including the trailing remainder the batch partition drops,
/// so it doubles as the ground truth in tests and benches.
pub fn render_serial(job: &RenderJob, canvas: &mut Canvas) -> Result<(), RenderError> {
    check_canvas(job, canvas)?;

    let data = canvas.data_mut();
    for index in 0..job.pixel_count() {
        let colour = shade_pixel(job, index);
        let byte = index * BYTES_PER_PIXEL;
        data[byte] = colour.r;
        data[byte + 1] = colour.g;
        data[byte + 2] = colour.b;
    }

    Ok(())
}
