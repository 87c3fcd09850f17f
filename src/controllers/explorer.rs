use crate::adapters::hsv::hsv_to_rgb_in_place;
use crate::controllers::commands::{Command, PanDirection, Screen};
use crate::core::colorizers::ColorizerKind;
use crate::core::data::canvas::{Canvas, CanvasError};
use crate::core::data::viewport::Viewport;
use crate::core::data::viewport_stack::ViewportStack;
use crate::core::render::render_job::{RenderJob, RenderJobError};
use crate::core::render::tiled::{render_tiled, RenderCoverage, RenderError};
use std::error::Error;
use std::fmt;

pub const MIN_ITERATIONS: u32 = 1;
pub const MAX_ITERATIONS_CAP: u32 = 1024;
pub const DEFAULT_ITERATIONS: u32 = 32;

/// Fraction of the current scale a single pan step moves the view by.
const PAN_STEP: f64 = 0.1;

#[derive(Debug)]
pub enum ExplorerError {
    Canvas(CanvasError),
    Job(RenderJobError),
    Render(RenderError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {}", err),
            Self::Job(err) => write!(f, "render job error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
            Self::Job(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<CanvasError> for ExplorerError {
    fn from(err: CanvasError) -> Self {
        Self::Canvas(err)
    }
}

impl From<RenderJobError> for ExplorerError {
    fn from(err: RenderJobError) -> Self {
        Self::Job(err)
    }
}

impl From<RenderError> for ExplorerError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

/// The boundary state machine that owns everything a render pass reads:
/// the active screen, the iteration budget, the function-variant index, the
/// viewport history, and the canvas.
///
/// Input commands mutate this state and raise the dirty flag; nothing is
/// recomputed until `render_if_dirty` runs, so a burst of commands between
/// renders coalesces into a single pass.
pub struct Explorer {
    screen: Screen,
    max_iterations: u32,
    function_variant: usize,
    viewport_stack: ViewportStack,
    worker_count: u32,
    canvas: Canvas,
    dirty: bool,
}

impl Explorer {
    pub fn new(width: u32, height: u32, worker_count: u32) -> Result<Self, ExplorerError> {
        if worker_count == 0 {
            return Err(ExplorerError::Job(RenderJobError::ZeroWorkerCount));
        }

        Ok(Self {
            screen: Screen::default(),
            max_iterations: DEFAULT_ITERATIONS,
            function_variant: 0,
            viewport_stack: ViewportStack::default(),
            worker_count,
            canvas: Canvas::new(width, height)?,
            // Start dirty so the first render pass paints the initial screen.
            dirty: true,
        })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn function_variant(&self) -> usize {
        self.function_variant
    }

    #[must_use]
    pub fn current_viewport(&self) -> Viewport {
        self.viewport_stack.current()
    }

    #[must_use]
    pub fn zoom_depth(&self) -> usize {
        self.viewport_stack.depth()
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SelectScreen(screen) => {
                if screen != self.screen {
                    self.screen = screen;
                    self.dirty = true;
                }
            }
            Command::IncreaseIterations => {
                if self.max_iterations < MAX_ITERATIONS_CAP {
                    self.max_iterations *= 2;
                    self.dirty = true;
                }
            }
            Command::DecreaseIterations => {
                if self.max_iterations > MIN_ITERATIONS {
                    self.max_iterations /= 2;
                    self.dirty = true;
                }
            }
            Command::CycleFunctionVariant(delta) => {
                let count = crate::core::kernels::warps::FunctionVariant::ALL.len() as i32;
                let next = (self.function_variant as i32 + delta).rem_euclid(count) as usize;
                if next != self.function_variant {
                    self.function_variant = next;
                    self.dirty = true;
                }
            }
            Command::ZoomToRect { from, to } => {
                if !self.screen.supports_navigation() {
                    return;
                }

                let window_width = f64::from(self.canvas.width());
                let window_height = f64::from(self.canvas.height());

                // A degenerate drag never reaches the stack.
                if let Ok(zoomed) = self.viewport_stack.current().zoomed_to_rect(
                    from,
                    to,
                    window_width,
                    window_height,
                ) {
                    self.viewport_stack.push(zoomed);
                    self.dirty = true;
                }
            }
            Command::ZoomAt { point, direction } => {
                if !self.screen.supports_navigation() {
                    return;
                }

                // A step that under- or overflows the scale never reaches
                // the stack.
                if let Ok(zoomed) = self.viewport_stack.current().zoomed_at(
                    point,
                    f64::from(self.canvas.width()),
                    f64::from(self.canvas.height()),
                    direction,
                ) {
                    self.viewport_stack.push(zoomed);
                    self.dirty = true;
                }
            }
            Command::ZoomOut => {
                if !self.screen.supports_navigation() {
                    return;
                }

                if self.viewport_stack.pop() {
                    self.dirty = true;
                }
            }
            Command::ResetZoom => {
                if !self.screen.supports_navigation() {
                    return;
                }

                if self.viewport_stack.depth() > 1 {
                    self.viewport_stack.reset();
                    self.dirty = true;
                }
            }
            Command::Pan(direction) => {
                if !self.screen.supports_navigation() {
                    return;
                }

                let (step_u, step_v) = match direction {
                    PanDirection::Left => (-PAN_STEP, 0.0),
                    PanDirection::Right => (PAN_STEP, 0.0),
                    PanDirection::Up => (0.0, -PAN_STEP),
                    PanDirection::Down => (0.0, PAN_STEP),
                };

                let panned = self.viewport_stack.current().panned(step_u, step_v);
                self.viewport_stack.replace_top(panned);
                self.dirty = true;
            }
        }
    }

    /// Runs one full render pass if any state changed since the last pass,
    /// clearing the dirty flag afterwards. Returns `None` when clean.
    ///
    /// The viewport is snapshotted into the job before dispatch, so commands
    /// arriving after this call starts cannot race the in-flight workers.
    pub fn render_if_dirty(&mut self) -> Result<Option<RenderCoverage>, ExplorerError> {
        if !self.dirty {
            return Ok(None);
        }

        let job = RenderJob::new(
            self.screen.kernel(self.function_variant),
            self.screen.colorizer(),
            self.max_iterations,
            self.viewport_stack.current(),
            self.canvas.width(),
            self.canvas.height(),
            self.worker_count,
        )?;

        let coverage = render_tiled(&job, &mut self.canvas)?;

        if job.colorizer() == ColorizerKind::HueCycle {
            hsv_to_rgb_in_place(&mut self.canvas);
        }

        self.dirty = false;

        Ok(Some(coverage))
    }
}
