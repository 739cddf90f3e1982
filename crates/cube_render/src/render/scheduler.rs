//! Frame scheduling capability
//!
//! The host owns the real "next frame" primitive (vsync'd buffer swap,
//! requestAnimationFrame, a test loop). The renderer only ever asks for
//! the next tick through this trait, which keeps the loop injectable and
//! deterministic under test.

/// Host-provided per-frame scheduling primitive
///
/// [`Renderer::run`](super::Renderer::run) calls this before every tick;
/// returning `false` declines the frame and ends the loop. There is no
/// other cancellation mechanism.
pub trait FrameScheduler {
    /// Request the next frame; `false` stops the render loop
    fn request_next_frame(&mut self) -> bool;
}

/// Synchronous scheduler granting a fixed number of frames
///
/// Stands in for a display-driven scheduler in tests and headless runs:
/// every grant is immediate, so N requested frames produce exactly N
/// back-to-back ticks.
#[derive(Debug, Clone)]
pub struct SteppedScheduler {
    remaining: u32,
}

impl SteppedScheduler {
    /// A scheduler that grants exactly `frames` frames
    pub fn new(frames: u32) -> Self {
        Self { remaining: frames }
    }

    /// Frames not yet granted
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl FrameScheduler for SteppedScheduler {
    fn request_next_frame(&mut self) -> bool {
        if self.remaining > 0 {
            self.remaining -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_exactly_the_configured_frame_count() {
        let mut scheduler = SteppedScheduler::new(3);
        let mut ticks = 0;
        while scheduler.request_next_frame() {
            ticks += 1;
        }
        assert_eq!(ticks, 3);
        assert_eq!(scheduler.remaining(), 0);

        // Further requests keep being declined.
        assert!(!scheduler.request_next_frame());
    }

    #[test]
    fn zero_frames_never_ticks() {
        let mut scheduler = SteppedScheduler::new(0);
        assert!(!scheduler.request_next_frame());
    }
}
