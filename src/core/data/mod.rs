pub mod canvas;
pub mod colour;
pub mod complex;
pub mod point;
pub mod viewport;
pub mod viewport_stack;
