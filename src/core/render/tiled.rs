use crate::core::data::canvas::{Canvas, BYTES_PER_PIXEL};
use crate::core::render::render_job::RenderJob;
use crate::core::render::shade::shade_pixel;
use std::error::Error;
use std::fmt;
use std::thread;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderError {
    CanvasMismatch {
        job_width: u32,
        job_height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanvasMismatch {
                job_width,
                job_height,
                canvas_width,
                canvas_height,
            } => {
                write!(
                    f,
                    "render job is {}x{} but canvas is {}x{}",
                    job_width, job_height, canvas_width, canvas_height
                )
            }
        }
    }
}

impl Error for RenderError {}

/// How much of the canvas a pass actually wrote.
///
/// The batch partition floors `pixel_count / worker_count`, so when the
/// division is uneven the trailing remainder is never assigned to a worker
/// and `skipped` is nonzero. That truncation is inherited renderer behavior;
/// it is reported here instead of being silently corrected.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderCoverage {
    pub rendered: usize,
    pub skipped: usize,
}

impl RenderCoverage {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}

pub(crate) fn check_canvas(job: &RenderJob, canvas: &Canvas) -> Result<(), RenderError> {
    if job.width() != canvas.width() || job.height() != canvas.height() {
        return Err(RenderError::CanvasMismatch {
            job_width: job.width(),
            job_height: job.height(),
            canvas_width: canvas.width(),
            canvas_height: canvas.height(),
        });
    }

    Ok(())
}

/// One fork-join render pass.
///
/// The linear pixel range is split into `worker_count` contiguous batches of
/// `batch_size` pixels. Each worker receives its own disjoint `&mut` slice
/// of the canvas buffer, so writes need no locks or atomics; the borrow
/// split is the disjointness proof. The call blocks until every worker has
/// joined.
pub fn render_tiled(job: &RenderJob, canvas: &mut Canvas) -> Result<RenderCoverage, RenderError> {
    check_canvas(job, canvas)?;

    let batch_size = job.batch_size();
    let pixel_count = job.pixel_count();
    let covered = batch_size * job.worker_count() as usize;
    let coverage = RenderCoverage {
        rendered: covered,
        skipped: pixel_count - covered,
    };

    // More workers than pixels floors the batch to zero; nothing to spawn.
    if batch_size == 0 {
        return Ok(coverage);
    }

    let (assigned, _remainder) = canvas.data_mut().split_at_mut(covered * BYTES_PER_PIXEL);

    thread::scope(|scope| {
        for (batch_index, batch) in assigned.chunks_mut(batch_size * BYTES_PER_PIXEL).enumerate() {
            scope.spawn(move || {
                let first_pixel = batch_index * batch_size;

                for offset in 0..batch_size {
                    let colour = shade_pixel(job, first_pixel + offset);
                    let byte = offset * BYTES_PER_PIXEL;
                    batch[byte] = colour.r;
                    batch[byte + 1] = colour.g;
                    batch[byte + 2] = colour.b;
                }
            });
        }
    });

    Ok(coverage)
}
