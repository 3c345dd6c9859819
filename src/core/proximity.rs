use glam::DVec2;

use crate::math::{is_close_xy, world_to_cell, Vector3};

/// Upper bound on cells along either axis
///
/// Tiny epsilons or widely spread vertices coarsen the cells instead of
/// growing the grid. Any cell at least `2 * epsilon` wide keeps the 3×3
/// neighbour search exact.
pub const MAX_CELLS_PER_AXIS: usize = 512;

/// Uniform XY bucket grid over a vertex cloud
///
/// Cells are at least `2 * epsilon` wide, so any vertex within `epsilon` of a
/// query lands in the query's cell or one of its eight neighbours. Candidates still
/// go through the exact `is_close_xy` test, which keeps the hit set identical
/// to a linear scan.
#[derive(Debug, Clone)]
pub struct ProximityGrid {
    epsilon: f64,
    cell_size: f64,
    bounds_min: DVec2,
    grid_size: [usize; 2],
    /// Each cell holds the vertices that fall inside it
    cells: Vec<Vec<Vector3>>,
}

impl ProximityGrid {
    /// Index every finite vertex
    pub fn new(vertices: &[Vector3], epsilon: f64) -> Self {
        Self::build(vertices, epsilon, |v| v.x.is_finite() && v.y.is_finite())
    }

    /// Index only vertices that can hit a query inside `[-half_extent, half_extent]`
    pub fn within(vertices: &[Vector3], epsilon: f64, half_extent: f64) -> Self {
        let limit = half_extent + epsilon;
        Self::build(vertices, epsilon, |v| v.x.abs() < limit && v.y.abs() < limit)
    }

    fn build<F>(vertices: &[Vector3], epsilon: f64, keep: F) -> Self
    where
        F: Fn(&Vector3) -> bool,
    {
        let empty = Self {
            epsilon,
            cell_size: 0.0,
            bounds_min: DVec2::ZERO,
            grid_size: [0, 0],
            cells: Vec::new(),
        };

        // Nothing is strictly closer than a non-positive or NaN epsilon
        if epsilon.is_nan() || epsilon <= 0.0 {
            return empty;
        }

        let kept = || vertices.iter().filter(|v| keep(*v));

        let (bounds_min, bounds_max) = kept().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(min, max), v| (min.min(v.truncate()), max.max(v.truncate())),
        );

        if bounds_min.x > bounds_max.x {
            return empty;
        }

        let extent = bounds_max - bounds_min;
        let cell_size = (epsilon * 2.0).max(extent.max_element() / (MAX_CELLS_PER_AXIS - 1) as f64);
        let grid_size = [
            (extent.x / cell_size).floor() as usize + 1,
            (extent.y / cell_size).floor() as usize + 1,
        ];

        let mut grid = Self {
            epsilon,
            cell_size,
            bounds_min,
            grid_size,
            cells: vec![Vec::new(); grid_size[0] * grid_size[1]],
        };

        for v in kept() {
            let (cx, cy) = world_to_cell(v.truncate(), bounds_min, cell_size);
            let idx = grid.cell_index(
                (cx.max(0) as usize).min(grid_size[0] - 1),
                (cy.max(0) as usize).min(grid_size[1] - 1),
            );
            grid.cells[idx].push(*v);
        }

        grid
    }

    pub fn grid_size(&self) -> [usize; 2] {
        self.grid_size
    }

    pub fn cell_index(&self, x: usize, y: usize) -> usize {
        x + y * self.grid_size[0]
    }

    /// Same answer as `any_close_xy` over the indexed vertices
    pub fn any_close(&self, query: Vector3) -> bool {
        if self.cells.is_empty() {
            return false;
        }

        let (cx, cy) = world_to_cell(query.truncate(), self.bounds_min, self.cell_size);
        let max_x = self.grid_size[0] as i64 - 1;
        let max_y = self.grid_size[1] as i64 - 1;

        if cx < -1 || cy < -1 || cx > max_x + 1 || cy > max_y + 1 {
            return false;
        }

        for y in (cy - 1).max(0)..=(cy + 1).min(max_y) {
            for x in (cx - 1).max(0)..=(cx + 1).min(max_x) {
                let cell = &self.cells[self.cell_index(x as usize, y as usize)];
                if cell.iter().any(|v| is_close_xy(*v, query, self.epsilon)) {
                    return true;
                }
            }
        }

        false
    }
}
