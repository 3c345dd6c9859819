mod grid;
mod quaternion;
mod vector;

pub use grid::world_to_cell;
pub use quaternion::{rotate, Quaternion};
pub use vector::{any_close_xy, is_close_xy, snorm, Vector3};
