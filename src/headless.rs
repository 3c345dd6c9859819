use std::time::Instant;

use anyhow::Result;

use crate::config::SceneConfig;
use crate::core::{FrameBuffer, HeadlessWindow, Session, WindowContext};

/// Running foreground-pixel statistics, constant size regardless of frame count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitStats {
    pub frames: u64,
    pub total: u64,
    pub min: usize,
    pub max: usize,
    pub last: usize,
}

impl HitStats {
    pub fn record(&mut self, hits: usize) {
        if self.frames == 0 {
            self.min = hits;
            self.max = hits;
        } else {
            self.min = self.min.min(hits);
            self.max = self.max.max(hits);
        }
        self.frames += 1;
        self.total = self.total.saturating_add(hits as u64);
        self.last = hits;
    }

    pub fn mean(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.total as f64 / self.frames as f64
        }
    }
}

/// Summary of a windowless run
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    /// Frames actually rendered
    pub frames: u64,
    pub hits: HitStats,
    pub elapsed_secs: f64,
}

impl HeadlessReport {
    pub fn average_fps(&self) -> f64 {
        if self.elapsed_secs > 0.0 {
            self.frames as f64 / self.elapsed_secs
        } else {
            0.0
        }
    }
}

/// Drive the same rotate → render → present loop as the window, in memory
pub fn run_headless(config: &SceneConfig, frames: u64) -> Result<HeadlessReport> {
    run_headless_with(config, frames, |_, _| true)
}

/// Like `run_headless`, calling `on_frame(frame, hits)` after every present.
/// The run stops early once `on_frame` returns `false`.
pub fn run_headless_with<F>(config: &SceneConfig, frames: u64, mut on_frame: F) -> Result<HeadlessReport>
where
    F: FnMut(u64, usize) -> bool,
{
    config.validate()?;

    let mut session = Session::from_config(config);
    let mut frame = FrameBuffer::new(config.width, config.height);
    let mut window = HeadlessWindow::new(config.width, config.height);

    log::info!(
        "Headless run: {} frames at {}x{}, {} vertices",
        frames,
        config.width,
        config.height,
        session.polyhedron().len()
    );

    let start = Instant::now();
    let mut hits = HitStats::default();

    for _ in 0..frames {
        session.advance();
        let count = session.draw(&mut frame.as_pixel_buffer());
        window.present(&frame)?;

        log::debug!("Frame {}: {} foreground pixels", session.frame(), count);
        hits.record(count);

        if !on_frame(session.frame(), count) {
            log::info!("Headless run stopped after {} frames", session.frame());
            break;
        }
    }

    let report = HeadlessReport {
        frames: hits.frames,
        hits,
        elapsed_secs: start.elapsed().as_secs_f64(),
    };

    log::info!(
        "Rendered {} frames in {:.3}s ({:.1} FPS), foreground pixels min {} max {} mean {:.1}",
        report.frames,
        report.elapsed_secs,
        report.average_fps(),
        report.hits.min,
        report.hits.max,
        report.hits.mean()
    );

    Ok(report)
}
