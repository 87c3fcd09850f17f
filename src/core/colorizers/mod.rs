use crate::core::data::colour::{channel, Colour};
use crate::core::kernels::KernelResult;

/// The closed set of iteration-count-to-colour mappings for the escape-time
/// kernels. `(u, v)` here is the pixel's normalized position in the image,
/// not the viewport-transformed sample coordinate, so the tint stays pinned
/// to the window while the fractal zooms underneath it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorizerKind {
    Greyscale,
    CoordinateTint,
    HueCycle,
}

impl ColorizerKind {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Greyscale => "Greyscale",
            Self::CoordinateTint => "Coordinate tint",
            Self::HueCycle => "Hue cycle",
        }
    }
}

/// Rescales a 0-255 intensity into the 0-180 hue convention used by the
/// HSV post-pass.
const HUE_RESCALE: f64 = 0.705;

#[must_use]
pub fn colorize(
    kind: ColorizerKind,
    u: f64,
    v: f64,
    result: KernelResult,
    max_iterations: u32,
) -> Colour {
    match kind {
        ColorizerKind::Greyscale => Colour {
            r: result.intensity,
            g: result.intensity,
            b: result.intensity,
        },
        ColorizerKind::CoordinateTint => {
            if result.iterations == max_iterations {
                // Points judged inside the set go hard black regardless of
                // their position tint.
                return Colour::BLACK;
            }

            Colour {
                r: result.intensity,
                g: channel(u * 255.0),
                b: channel(v * 255.0),
            }
        }
        // Stored as (H, S, V); the whole canvas is converted to RGB in one
        // post-pass after the render join, never per pixel.
        ColorizerKind::HueCycle => Colour {
            r: channel(f64::from(result.intensity) * HUE_RESCALE),
            g: 255,
            b: 255,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernels::KernelResult;

    #[test]
    fn test_greyscale_repeats_intensity_on_all_channels() {
        let result = KernelResult::from_iterations(16, 32);
        let colour = colorize(ColorizerKind::Greyscale, 0.2, 0.8, result, 32);

        assert_eq!(colour.r, result.intensity);
        assert_eq!(colour.g, result.intensity);
        assert_eq!(colour.b, result.intensity);
    }

    #[test]
    fn test_coordinate_tint_mixes_position_into_channels() {
        let result = KernelResult::from_iterations(8, 32);
        let colour = colorize(ColorizerKind::CoordinateTint, 0.5, 0.25, result, 32);

        assert_eq!(colour.r, result.intensity);
        assert_eq!(colour.g, 127); // 0.5 * 255, truncated
        assert_eq!(colour.b, 63); // 0.25 * 255, truncated
    }

    #[test]
    fn test_coordinate_tint_forces_black_inside_the_set() {
        let result = KernelResult::from_iterations(32, 32);

        for (u, v) in [(0.0, 0.0), (0.5, 0.5), (1.0, 1.0), (0.9, 0.1)] {
            let colour = colorize(ColorizerKind::CoordinateTint, u, v, result, 32);
            assert_eq!(colour, Colour::BLACK, "expected black at ({}, {})", u, v);
        }
    }

    #[test]
    fn test_hue_cycle_writes_full_saturation_and_value() {
        let result = KernelResult::from_iterations(16, 32);
        let colour = colorize(ColorizerKind::HueCycle, 0.0, 0.0, result, 32);

        assert_eq!(colour.g, 255);
        assert_eq!(colour.b, 255);
    }

    #[test]
    fn test_hue_cycle_rescales_intensity_into_hue_range() {
        // Maximum pre-wrap intensity maps just under 180.
        let result = KernelResult {
            iterations: 31,
            escaped: true,
            intensity: 255,
        };
        let colour = colorize(ColorizerKind::HueCycle, 0.0, 0.0, result, 32);

        assert_eq!(colour.r, 179); // 255 * 0.705, truncated
        assert!(colour.r < 180);
    }
}
