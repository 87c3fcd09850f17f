pub mod write_png;
pub mod write_ppm;
