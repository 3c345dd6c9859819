use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use sphere_spin::cli::Cli;
use sphere_spin::config::SceneConfig;
use sphere_spin::core::{
    Clock, FpsCounter, FrameBuffer, Session, SurfaceRenderer, WindowContext, WindowDimensions,
};
use sphere_spin::headless::run_headless;

// === Constants ===

const WINDOW_TITLE: &str = "3DMotor";
const FPS_UPDATE_INTERVAL: f32 = 1.0;

// === Application ===

struct App {
    config: SceneConfig,
    window: Option<Arc<Window>>,
    renderer: Option<SurfaceRenderer>,
    session: Session,
    frame: FrameBuffer,
    clock: Clock,
    fps: FpsCounter,
}

impl App {
    fn new(config: SceneConfig) -> Self {
        let session = Session::from_config(&config);
        let frame = FrameBuffer::new(config.width, config.height);
        Self {
            config,
            window: None,
            renderer: None,
            session,
            frame,
            clock: Clock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(WindowDimensions::new(width, height));
        }
        self.frame.resize(width, height);
    }

    /// One loop iteration: rotate, rasterize, present
    fn redraw(&mut self) {
        if let Some(fps) = self.fps.tick(self.clock.tick()) {
            log::info!("FPS: {:.1} (frame {})", fps, self.session.frame());
        }

        self.session.advance();
        self.session.draw(&mut self.frame.as_pixel_buffer());

        if let Some(renderer) = &mut self.renderer {
            if let Err(e) = renderer.present(&self.frame) {
                log::error!("Present error: {:#}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    self.config.width,
                    self.config.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match SurfaceRenderer::new(window.clone()) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize surface renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        // The platform may not honour the requested size
        let dims = renderer.dimensions();
        if self.frame.dimensions() != (dims.width, dims.height) {
            self.frame.resize(dims.width, dims.height);
        }

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                log::info!("Exiting after {} frames", self.session.frame());
                event_loop.exit();
            }
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.scene_config()?;
    log::info!(
        "Scene: axis {:?}, angle {} rad/frame, depth {}, epsilon {}",
        config.axis,
        config.angle,
        config.depth,
        config.raster.epsilon
    );

    if cli.headless {
        run_headless(&config, cli.frames)?;
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    println!("{} - Escape to quit", WINDOW_TITLE);
    event_loop.run_app(&mut app)?;

    Ok(())
}
