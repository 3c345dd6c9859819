pub mod cli;
pub mod config;
pub mod core;
pub mod headless;
pub mod math;

pub use crate::core::{generate_discrete_sphere, render, PixelBuffer, Polyhedron};
pub use crate::math::{rotate, Quaternion, Vector3};
