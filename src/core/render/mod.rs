pub mod render_job;
pub mod serial;
pub mod shade;
pub mod tiled;
