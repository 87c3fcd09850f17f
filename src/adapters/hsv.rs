use crate::core::data::canvas::{Canvas, BYTES_PER_PIXEL};
use rayon::prelude::*;

/// Converts a whole canvas written as (H, S, V) triples into RGB in place.
///
/// Hue is stored in the compact 0-180 convention (half degrees) so it fits a
/// byte; saturation and value are 0-255. This runs once after the render
/// join for the hue-cycle colorizer, never per pixel inside the hot loop.
pub fn hsv_to_rgb_in_place(canvas: &mut Canvas) {
    canvas
        .data_mut()
        .par_chunks_exact_mut(BYTES_PER_PIXEL)
        .for_each(|pixel| {
            let (r, g, b) = hsv_to_rgb(pixel[0], pixel[1], pixel[2]);
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        });
}

fn hsv_to_rgb(h: u8, s: u8, v: u8) -> (u8, u8, u8) {
    let hue_degrees = f64::from(h) * 2.0;
    let saturation = f64::from(s) / 255.0;
    let value = f64::from(v) / 255.0;

    let chroma = value * saturation;
    let secondary = chroma * (1.0 - ((hue_degrees / 60.0) % 2.0 - 1.0).abs());
    let base = value - chroma;

    let sextant = (hue_degrees / 60.0) as u32;
    let (r, g, b) = match sextant {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    (
        ((r + base) * 255.0).round() as u8,
        ((g + base) * 255.0).round() as u8,
        ((b + base) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_zero_is_red() {
        assert_eq!(hsv_to_rgb(0, 255, 255), (255, 0, 0));
    }

    #[test]
    fn test_hue_sixty_is_green() {
        // 60 in the 0-180 convention is 120 degrees.
        assert_eq!(hsv_to_rgb(60, 255, 255), (0, 255, 0));
    }

    #[test]
    fn test_hue_one_twenty_is_blue() {
        assert_eq!(hsv_to_rgb(120, 255, 255), (0, 0, 255));
    }

    #[test]
    fn test_zero_value_is_black() {
        assert_eq!(hsv_to_rgb(90, 255, 0), (0, 0, 0));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(hsv_to_rgb(47, 0, 128), (128, 128, 128));
    }

    #[test]
    fn test_post_pass_converts_every_pixel() {
        let mut canvas = Canvas::new(4, 2).unwrap();
        for pixel in canvas.data_mut().chunks_exact_mut(3) {
            pixel[0] = 0; // red hue
            pixel[1] = 255;
            pixel[2] = 255;
        }

        hsv_to_rgb_in_place(&mut canvas);

        for index in 0..canvas.pixel_count() {
            assert_eq!(canvas.pixel(index), Some((255, 0, 0)));
        }
    }

    #[test]
    fn test_post_pass_matches_scalar_conversion() {
        let mut canvas = Canvas::new(16, 16).unwrap();
        let mut expected = Vec::new();
        for (index, pixel) in canvas.data_mut().chunks_exact_mut(3).enumerate() {
            pixel[0] = (index % 180) as u8;
            pixel[1] = 255;
            pixel[2] = 255;
            let (r, g, b) = hsv_to_rgb(pixel[0], pixel[1], pixel[2]);
            expected.extend_from_slice(&[r, g, b]);
        }

        hsv_to_rgb_in_place(&mut canvas);

        assert_eq!(canvas.data(), expected.as_slice());
    }
}
