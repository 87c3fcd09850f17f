use crate::core::colorizers::ColorizerKind;
use crate::core::data::point::Point;
use crate::core::data::viewport::ZoomDirection;
use crate::core::kernels::warps::FunctionVariant;
use crate::core::kernels::KernelKind;

/// The selectable screens. Each pairs a kernel with a colorizer; only the
/// escape-time screens respond to viewport navigation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    UvGrid,
    MandelbrotGreyscale,
    MandelbrotTinted,
    MandelbrotHue,
    Cubic,
    Functions,
}

impl Screen {
    pub const ALL: &'static [Self] = &[
        Self::UvGrid,
        Self::MandelbrotGreyscale,
        Self::MandelbrotTinted,
        Self::MandelbrotHue,
        Self::Cubic,
        Self::Functions,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::UvGrid => "UV grid",
            Self::MandelbrotGreyscale => "Mandelbrot (greyscale)",
            Self::MandelbrotTinted => "Mandelbrot (tinted)",
            Self::MandelbrotHue => "Mandelbrot (hue)",
            Self::Cubic => "Cubic",
            Self::Functions => "Functions",
        }
    }

    /// Whether zoom and pan commands apply on this screen.
    #[must_use]
    pub const fn supports_navigation(self) -> bool {
        matches!(
            self,
            Self::MandelbrotGreyscale | Self::MandelbrotTinted | Self::MandelbrotHue | Self::Cubic
        )
    }

    #[must_use]
    pub fn kernel(self, function_variant: usize) -> KernelKind {
        match self {
            Self::UvGrid => KernelKind::UvGrid,
            Self::MandelbrotGreyscale | Self::MandelbrotTinted | Self::MandelbrotHue => {
                KernelKind::Mandelbrot
            }
            Self::Cubic => KernelKind::Cubic,
            Self::Functions => KernelKind::Function(FunctionVariant::from_index(function_variant)),
        }
    }

    #[must_use]
    pub const fn colorizer(self) -> ColorizerKind {
        match self {
            Self::MandelbrotTinted => ColorizerKind::CoordinateTint,
            Self::MandelbrotHue => ColorizerKind::HueCycle,
            // The remaining screens either colour directly in the kernel or
            // use the plain intensity ramp.
            _ => ColorizerKind::Greyscale,
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Discrete input vocabulary understood by the explorer. The input layer
/// translates raw key and pointer events into these; the explorer is the
/// sole mutator of engine-visible state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    SelectScreen(Screen),
    /// Zoom into the rectangle dragged from `from` to `to`, in window
    /// coordinates.
    ZoomToRect { from: Point, to: Point },
    /// Wheel zoom centred on a window point.
    ZoomAt {
        point: Point,
        direction: ZoomDirection,
    },
    ZoomOut,
    ResetZoom,
    IncreaseIterations,
    DecreaseIterations,
    Pan(PanDirection),
    /// Step the function-variant index by a signed delta, wrapping.
    CycleFunctionVariant(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_support_per_screen() {
        assert!(!Screen::UvGrid.supports_navigation());
        assert!(Screen::MandelbrotGreyscale.supports_navigation());
        assert!(Screen::MandelbrotTinted.supports_navigation());
        assert!(Screen::MandelbrotHue.supports_navigation());
        assert!(Screen::Cubic.supports_navigation());
        assert!(!Screen::Functions.supports_navigation());
    }

    #[test]
    fn test_screen_kernel_pairing() {
        assert_eq!(Screen::UvGrid.kernel(0), KernelKind::UvGrid);
        assert_eq!(Screen::MandelbrotHue.kernel(0), KernelKind::Mandelbrot);
        assert_eq!(Screen::Cubic.kernel(0), KernelKind::Cubic);
        assert_eq!(
            Screen::Functions.kernel(1),
            KernelKind::Function(FunctionVariant::SphericalBloom)
        );
    }

    #[test]
    fn test_screen_colorizer_pairing() {
        assert_eq!(Screen::MandelbrotGreyscale.colorizer(), ColorizerKind::Greyscale);
        assert_eq!(Screen::MandelbrotTinted.colorizer(), ColorizerKind::CoordinateTint);
        assert_eq!(Screen::MandelbrotHue.colorizer(), ColorizerKind::HueCycle);
    }

    #[test]
    fn test_default_screen_is_uv_grid() {
        assert_eq!(Screen::default(), Screen::UvGrid);
    }

    #[test]
    fn test_screen_roster_has_unique_display_names() {
        assert_eq!(Screen::ALL.len(), 6);

        for (index, screen) in Screen::ALL.iter().enumerate() {
            for other in &Screen::ALL[index + 1..] {
                assert_ne!(screen.display_name(), other.display_name());
            }
        }
    }
}
