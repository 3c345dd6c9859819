use glam::DVec2;

/// Map a planar position to integer cell coordinates relative to `bounds_min`
pub fn world_to_cell(pos: DVec2, bounds_min: DVec2, cell_size: f64) -> (i64, i64) {
    let rel_pos = pos - bounds_min;
    (
        (rel_pos.x / cell_size).floor() as i64,
        (rel_pos.y / cell_size).floor() as i64,
    )
}
