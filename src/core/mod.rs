pub mod colorizers;
pub mod data;
pub mod kernels;
pub mod render;
