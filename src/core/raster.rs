//! Proximity rasterizer
//!
//! Every pixel `(X, Y)` maps to the query point
//! `(2·n·X/width − n, 2·n·Y/height − n, 0)` with `n` the viewport half
//! extent. The pixel is foreground when some vertex lies within `epsilon`
//! of that point on both the x and y axes. Vertex depth is ignored.

use serde::{Deserialize, Serialize};

use super::polyhedron::Polyhedron;
use super::proximity::ProximityGrid;
use crate::math::{any_close_xy, Vector3};

pub const BYTES_PER_PIXEL: usize = 4;

/// 0xAARRGGBB
pub const FOREGROUND: u32 = 0x0000_11EE;
pub const BACKGROUND: u32 = 0x0000_0000;
pub const DEFAULT_EPSILON: f64 = 0.02;
pub const DEFAULT_HALF_EXTENT: f64 = 2.0;

/// Tunables for the proximity test and output colours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterSettings {
    /// Half-width of the XY hit box
    pub epsilon: f64,
    /// Logical viewport spans `[-half_extent, half_extent)` on both axes
    pub half_extent: f64,
    pub foreground: u32,
    pub background: u32,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            half_extent: DEFAULT_HALF_EXTENT,
            foreground: FOREGROUND,
            background: BACKGROUND,
        }
    }
}

impl RasterSettings {
    /// Query point for pixel `(x, y)` of a `width` × `height` buffer
    #[inline]
    pub fn query_point(&self, x: usize, y: usize, width: usize, height: usize) -> Vector3 {
        let n = self.half_extent;
        let nx = x as f64 / width as f64;
        let ny = y as f64 / height as f64;
        Vector3::new(2.0 * n * nx - n, 2.0 * n * ny - n, 0.0)
    }
}

/// Borrowed view of a 32-bit BGRA pixel buffer owned by the display layer
///
/// Rows start `pitch` bytes apart. Bytes between `width * 4` and `pitch`
/// are padding and are never written.
pub struct PixelBuffer<'a> {
    memory: &'a mut [u8],
    width: usize,
    height: usize,
    pitch: usize,
}

impl<'a> PixelBuffer<'a> {
    /// # Panics
    ///
    /// Panics if `pitch < width * 4` or `memory` cannot hold `height` rows.
    pub fn new(memory: &'a mut [u8], width: usize, height: usize, pitch: usize) -> Self {
        assert!(
            pitch >= width * BYTES_PER_PIXEL,
            "pitch {} is smaller than a {} pixel row",
            pitch,
            width
        );
        let required = if height == 0 {
            0
        } else {
            pitch * (height - 1) + width * BYTES_PER_PIXEL
        };
        assert!(
            memory.len() >= required,
            "pixel memory holds {} bytes, {}x{} with pitch {} needs {}",
            memory.len(),
            width,
            height,
            pitch,
            required
        );

        Self {
            memory,
            width,
            height,
            pitch,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// Writable pixel bytes of row `y`, padding excluded
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.pitch;
        &mut self.memory[start..start + self.width * BYTES_PER_PIXEL]
    }

    /// Read back the pixel at `(x, y)`
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        let start = y * self.pitch + x * BYTES_PER_PIXEL;
        let bytes = &self.memory[start..start + BYTES_PER_PIXEL];
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    fn fill_rows<F>(&mut self, settings: &RasterSettings, mut is_hit: F) -> usize
    where
        F: FnMut(Vector3) -> bool,
    {
        let (width, height) = (self.width, self.height);
        let foreground = settings.foreground.to_le_bytes();
        let background = settings.background.to_le_bytes();
        let mut hits = 0;

        for y in 0..height {
            let row = self.row_mut(y);
            for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                let query = settings.query_point(x, y, width, height);
                if is_hit(query) {
                    pixel.copy_from_slice(&foreground);
                    hits += 1;
                } else {
                    pixel.copy_from_slice(&background);
                }
            }
        }

        hits
    }
}

/// Render with default settings. Returns the number of foreground pixels.
pub fn render(buffer: &mut PixelBuffer<'_>, polyhedron: &Polyhedron) -> usize {
    render_with(buffer, polyhedron, &RasterSettings::default())
}

/// Grid-accelerated render. Output is identical to `render_brute_force`.
pub fn render_with(
    buffer: &mut PixelBuffer<'_>,
    polyhedron: &Polyhedron,
    settings: &RasterSettings,
) -> usize {
    let grid = ProximityGrid::within(&polyhedron.vertices, settings.epsilon, settings.half_extent);
    buffer.fill_rows(settings, |query| grid.any_close(query))
}

/// Reference render: tests every vertex for every pixel
pub fn render_brute_force(
    buffer: &mut PixelBuffer<'_>,
    polyhedron: &Polyhedron,
    settings: &RasterSettings,
) -> usize {
    buffer.fill_rows(settings, |query| {
        any_close_xy(&polyhedron.vertices, query, settings.epsilon)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = RasterSettings::default();
        assert_eq!(settings.epsilon, 0.02);
        assert_eq!(settings.half_extent, 2.0);
        assert_eq!(settings.foreground, 0x000011EE);
        assert_eq!(settings.background, 0);
    }

    #[test]
    fn test_query_point_corners() {
        let settings = RasterSettings::default();
        assert_eq!(settings.query_point(0, 0, 4, 4), Vector3::new(-2.0, -2.0, 0.0));
        assert_eq!(settings.query_point(2, 2, 4, 4), Vector3::ZERO);
        assert_eq!(settings.query_point(3, 1, 4, 4), Vector3::new(1.0, -1.0, 0.0));
    }

    #[test]
    fn test_foreground_byte_order() {
        let mut memory = vec![0u8; 4];
        let mut buffer = PixelBuffer::new(&mut memory, 1, 1, 4);
        let polyhedron = Polyhedron::new(vec![Vector3::new(-2.0, -2.0, 0.0)]);
        assert_eq!(render(&mut buffer, &polyhedron), 1);
        assert_eq!(buffer.pixel(0, 0), FOREGROUND);
        // B, G, R, A
        assert_eq!(memory, vec![0xEE, 0x11, 0x00, 0x00]);
    }

    #[test]
    fn test_zero_sized_buffer() {
        let mut memory: Vec<u8> = Vec::new();
        let mut buffer = PixelBuffer::new(&mut memory, 0, 0, 0);
        let polyhedron = Polyhedron::new(vec![Vector3::ZERO]);
        assert_eq!(render(&mut buffer, &polyhedron), 0);
    }

    #[test]
    #[should_panic]
    fn test_pitch_too_small_panics() {
        let mut memory = vec![0u8; 64];
        PixelBuffer::new(&mut memory, 4, 2, 8);
    }

    #[test]
    #[should_panic]
    fn test_memory_too_small_panics() {
        let mut memory = vec![0u8; 15];
        PixelBuffer::new(&mut memory, 2, 2, 8);
    }
}
