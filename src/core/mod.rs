pub mod clock;
pub mod frame_buffer;
pub mod gpu_context;
pub mod polyhedron;
pub mod proximity;
pub mod raster;
pub mod session;
pub mod surface_renderer;
pub mod window;

pub use clock::{Clock, FpsCounter};
pub use frame_buffer::FrameBuffer;
pub use gpu_context::GpuContext;
pub use polyhedron::{generate_discrete_sphere, vertex_count, Polyhedron};
pub use proximity::ProximityGrid;
pub use raster::{
    render, render_brute_force, render_with, PixelBuffer, RasterSettings, BACKGROUND, BYTES_PER_PIXEL,
    DEFAULT_EPSILON, DEFAULT_HALF_EXTENT, FOREGROUND,
};
pub use session::Session;
pub use surface_renderer::SurfaceRenderer;
pub use window::{HeadlessWindow, WindowContext, WindowDimensions};
