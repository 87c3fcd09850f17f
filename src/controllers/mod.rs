pub mod commands;
pub mod explorer;
