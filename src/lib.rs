mod adapters;
mod controllers;
mod core;
mod storage;

pub use controllers::commands::{Command, PanDirection, Screen};
pub use controllers::explorer::{
    Explorer, ExplorerError, DEFAULT_ITERATIONS, MAX_ITERATIONS_CAP, MIN_ITERATIONS,
};

pub use crate::core::colorizers::ColorizerKind;
pub use crate::core::data::canvas::{Canvas, CanvasError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError, ZoomDirection};
pub use crate::core::data::viewport_stack::ViewportStack;
pub use crate::core::kernels::warps::FunctionVariant;
pub use crate::core::kernels::{KernelKind, KernelResult};
pub use crate::core::render::render_job::{RenderJob, RenderJobError};
pub use crate::core::render::serial::render_serial;
pub use crate::core::render::tiled::{render_tiled, RenderCoverage, RenderError};

pub use adapters::hsv::hsv_to_rgb_in_place;
pub use storage::write_png::write_png;
pub use storage::write_ppm::write_ppm;
