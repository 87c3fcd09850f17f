use crate::core::data::canvas::Canvas;
use std::path::Path;

pub fn write_png(canvas: &Canvas, filepath: impl AsRef<Path>) -> image::ImageResult<()> {
    image::save_buffer(
        filepath,
        canvas.data(),
        canvas.width(),
        canvas.height(),
        image::ExtendedColorType::Rgb8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_png_round_trips_dimensions() {
        let canvas = Canvas::new(6, 3).unwrap();
        let dir = std::env::temp_dir();
        let path = dir.join("fractal_canvas_write_png_test.png");

        write_png(&canvas, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), 6);
        assert_eq!(decoded.height(), 3);

        std::fs::remove_file(&path).unwrap();
    }
}
