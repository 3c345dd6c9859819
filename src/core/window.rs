use super::frame_buffer::FrameBuffer;

/// Window dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Display seam - something that can show a finished frame buffer
pub trait WindowContext {
    /// Current drawable size in physical pixels
    fn dimensions(&self) -> WindowDimensions;

    /// Present the frame buffer
    fn present(&mut self, frame: &FrameBuffer) -> anyhow::Result<()>;

    /// Surface changed size
    fn resize(&mut self, dimensions: WindowDimensions);
}

/// In-memory display used by headless runs and tests
#[derive(Debug, Default)]
pub struct HeadlessWindow {
    dims: Option<WindowDimensions>,
    presented: u64,
    last_frame: Option<Vec<u8>>,
}

impl HeadlessWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            dims: Some(WindowDimensions::new(width, height)),
            ..Default::default()
        }
    }

    /// Number of frames presented so far
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Bytes of the most recent frame
    pub fn last_frame(&self) -> Option<&[u8]> {
        self.last_frame.as_deref()
    }
}

impl WindowContext for HeadlessWindow {
    fn dimensions(&self) -> WindowDimensions {
        self.dims.unwrap_or(WindowDimensions::new(0, 0))
    }

    fn present(&mut self, frame: &FrameBuffer) -> anyhow::Result<()> {
        let dims = self.dimensions();
        anyhow::ensure!(
            frame.dimensions() == (dims.width, dims.height),
            "frame {}x{} does not match window {}x{}",
            frame.width(),
            frame.height(),
            dims.width,
            dims.height
        );

        self.presented += 1;
        let bytes = self.last_frame.get_or_insert_with(Vec::new);
        bytes.clear();
        bytes.extend_from_slice(frame.bytes());
        Ok(())
    }

    fn resize(&mut self, dimensions: WindowDimensions) {
        self.dims = Some(dimensions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_dimensions_new() {
        let dims = WindowDimensions::new(1288, 720);
        assert_eq!(dims.width, 1288);
        assert_eq!(dims.height, 720);
    }

    #[test]
    fn test_headless_present_counts() {
        let mut window = HeadlessWindow::new(4, 4);
        let frame = FrameBuffer::new(4, 4);

        assert_eq!(window.presented(), 0);
        assert!(window.last_frame().is_none());

        window.present(&frame).unwrap();
        window.present(&frame).unwrap();
        assert_eq!(window.presented(), 2);
        assert_eq!(window.last_frame().unwrap().len(), 64);
    }

    #[test]
    fn test_headless_rejects_mismatched_frame() {
        let mut window = HeadlessWindow::new(4, 4);
        let frame = FrameBuffer::new(8, 4);
        assert!(window.present(&frame).is_err());
        assert_eq!(window.presented(), 0);
    }

    #[test]
    fn test_headless_resize() {
        let mut window = HeadlessWindow::new(4, 4);
        window.resize(WindowDimensions::new(8, 2));
        assert_eq!(window.dimensions(), WindowDimensions::new(8, 2));
        assert!(window.present(&FrameBuffer::new(8, 2)).is_ok());
    }
}
