use crate::core::colorizers::ColorizerKind;
use crate::core::data::viewport::Viewport;
use crate::core::kernels::KernelKind;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderJobError {
    ZeroMaxIterations,
    ZeroDimension { width: u32, height: u32 },
    ZeroWorkerCount,
}

impl fmt::Display for RenderJobError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "iteration budget must be greater than zero")
            }
            Self::ZeroDimension { width, height } => {
                write!(f, "image dimensions must be positive: {}x{}", width, height)
            }
            Self::ZeroWorkerCount => {
                write!(f, "worker count must be at least one")
            }
        }
    }
}

impl Error for RenderJobError {}

/// Everything one render pass needs, snapshotted up front: kernel and
/// colorizer selection, iteration budget, the viewport as it was when the
/// pass was requested, image dimensions, and the worker count.
///
/// A job is built fresh for every pass and discarded afterwards; it is never
/// mutated, so workers can share it by reference without synchronization,
/// and rendering the same job twice yields the same canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderJob {
    kernel: KernelKind,
    colorizer: ColorizerKind,
    max_iterations: u32,
    viewport: Viewport,
    width: u32,
    height: u32,
    worker_count: u32,
}

impl RenderJob {
    pub fn new(
        kernel: KernelKind,
        colorizer: ColorizerKind,
        max_iterations: u32,
        viewport: Viewport,
        width: u32,
        height: u32,
        worker_count: u32,
    ) -> Result<Self, RenderJobError> {
        if max_iterations == 0 {
            return Err(RenderJobError::ZeroMaxIterations);
        }
        if width == 0 || height == 0 {
            return Err(RenderJobError::ZeroDimension { width, height });
        }
        if worker_count == 0 {
            return Err(RenderJobError::ZeroWorkerCount);
        }

        Ok(Self {
            kernel,
            colorizer,
            max_iterations,
            viewport,
            width,
            height,
            worker_count,
        })
    }

    #[must_use]
    pub fn kernel(&self) -> KernelKind {
        self.kernel
    }

    #[must_use]
    pub fn colorizer(&self) -> ColorizerKind {
        self.colorizer
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn worker_count(&self) -> u32 {
        self.worker_count
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Pixels per worker batch: the floor of an even split. The remainder of
    /// the division is not assigned to any batch (see the tiled dispatcher).
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.pixel_count() / self.worker_count as usize
    }
}
