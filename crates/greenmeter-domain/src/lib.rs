//! Domain models and services for carbon emission estimation

pub mod model;
pub mod service;
