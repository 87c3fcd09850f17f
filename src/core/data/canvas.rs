use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CanvasError {
    ZeroDimension { width: u32, height: u32 },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "canvas dimensions must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for CanvasError {}

/// The mutable pixel buffer a render pass writes into: `width * height` RGB
/// triples in row-major order, so index `i` is the pixel at
/// `(i % width, i / width)`.
///
/// Outside a render pass the controller owns the canvas exclusively; during
/// a pass the dispatcher hands disjoint sub-slices of the buffer to the
/// workers and reclaims them at the join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroDimension { width, height });
        }

        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        })
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
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The RGB triple at linear pixel index `index`, or `None` past the end.
    #[must_use]
    pub fn pixel(&self, index: usize) -> Option<(u8, u8, u8)> {
        let byte = index.checked_mul(BYTES_PER_PIXEL)?;
        let triple = self.data.get(byte..byte + BYTES_PER_PIXEL)?;

        Some((triple[0], triple[1], triple[2]))
    }
}
