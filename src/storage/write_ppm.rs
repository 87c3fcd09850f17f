use crate::core::data::canvas::Canvas;
use std::io::Write;
use std::path::Path;

pub fn write_ppm(canvas: &Canvas, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", canvas.width(), canvas.height())?;
    writeln!(file, "255")?;
    file.write_all(canvas.data())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_ppm_emits_header_and_payload() {
        let canvas = Canvas::new(4, 2).unwrap();
        let dir = std::env::temp_dir();
        let path = dir.join("fractal_canvas_write_ppm_test.ppm");

        write_ppm(&canvas, &path).unwrap();

        let contents = std::fs::read(&path).unwrap();
        let expected_header = b"P6\n4 2\n255\n";
        assert_eq!(&contents[..expected_header.len()], expected_header);
        assert_eq!(contents.len(), expected_header.len() + 4 * 2 * 3);

        std::fs::remove_file(&path).unwrap();
    }
}
