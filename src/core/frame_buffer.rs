use super::raster::{PixelBuffer, BYTES_PER_PIXEL};

/// Owned BGRA back buffer, reallocated whenever the window changes size
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    memory: Vec<u8>,
    width: u32,
    height: u32,
    pitch: usize,
}

impl FrameBuffer {
    /// Tightly packed buffer (`pitch = width * 4`)
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_pitch(width, height, width as usize * BYTES_PER_PIXEL)
    }

    /// Buffer whose rows are `pitch` bytes apart
    ///
    /// # Panics
    ///
    /// Panics if `pitch` cannot hold a full row.
    pub fn with_pitch(width: u32, height: u32, pitch: usize) -> Self {
        assert!(
            pitch >= width as usize * BYTES_PER_PIXEL,
            "pitch {} cannot hold {} pixels",
            pitch,
            width
        );
        Self {
            memory: vec![0; pitch * height as usize],
            width,
            height,
            pitch,
        }
    }

    /// Drop the old memory and allocate a fresh zeroed buffer
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!(
            "Reallocating frame buffer {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        *self = Self::new(width, height);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw bytes, including row padding
    pub fn bytes(&self) -> &[u8] {
        &self.memory
    }

    /// Lend the memory to the rasterizer for one frame
    pub fn as_pixel_buffer(&mut self) -> PixelBuffer<'_> {
        PixelBuffer::new(
            &mut self.memory,
            self.width as usize,
            self.height as usize,
            self.pitch,
        )
    }
}
