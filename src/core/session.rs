use super::polyhedron::{generate_discrete_sphere, Polyhedron};
use super::raster::{render_with, PixelBuffer, RasterSettings};
use crate::config::SceneConfig;
use crate::math::{Quaternion, Vector3};

/// Spinning sphere state owned by the main loop
///
/// Each frame the loop calls `advance` once and then `draw` once.
#[derive(Debug, Clone)]
pub struct Session {
    polyhedron: Polyhedron,
    versor: Quaternion,
    settings: RasterSettings,
    frame: u64,
}

impl Session {
    /// `axis` must be unit length; it is both the sphere pole and the spin axis
    pub fn new(axis: Vector3, angle: f64, depth: u32, settings: RasterSettings) -> Self {
        Self {
            polyhedron: generate_discrete_sphere(axis, depth),
            versor: Quaternion::versor(axis, angle),
            settings,
            frame: 0,
        }
    }

    /// Build from a validated scene configuration
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(config.unit_axis(), config.angle, config.depth, config.raster)
    }

    /// Rotate the vertex cloud by one increment
    pub fn advance(&mut self) {
        self.polyhedron.rotate(&self.versor);
        self.frame += 1;
    }

    /// Rasterize the current vertex positions. Returns the foreground pixel count.
    pub fn draw(&self, buffer: &mut PixelBuffer<'_>) -> usize {
        render_with(buffer, &self.polyhedron, &self.settings)
    }

    pub fn polyhedron(&self) -> &Polyhedron {
        &self.polyhedron
    }

    /// Number of rotation steps applied so far
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrameBuffer;

    #[test]
    fn test_advance_counts_frames() {
        let mut session = Session::new(Vector3::Y, 0.05, 1, RasterSettings::default());
        assert_eq!(session.frame(), 0);
        session.advance();
        session.advance();
        assert_eq!(session.frame(), 2);
        assert_eq!(session.polyhedron().len(), 18);
    }

    #[test]
    fn test_zero_angle_keeps_vertices() {
        let mut session = Session::new(Vector3::X, 0.0, 2, RasterSettings::default());
        let before = session.polyhedron().clone();
        session.advance();
        assert_eq!(session.polyhedron(), &before);
    }

    #[test]
    fn test_draw_hits_something() {
        let session = Session::from_config(&SceneConfig {
            depth: 3,
            ..SceneConfig::default()
        });
        let mut frame = FrameBuffer::new(200, 100);
        let hits = session.draw(&mut frame.as_pixel_buffer());
        assert!(hits > 0);
        assert!(hits < 200 * 100);
    }
}
