//! Application service layer - config, scenario resolution, display data

pub mod app;
pub mod config;
pub mod display;
