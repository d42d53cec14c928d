//! Per-frame driver with the running/suspended state machine.

use crate::scene::Scene;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Suspended,
}

/// Clamp a raw frame gap to `[0, max_dt]`; garbage gaps count as zero.
#[inline]
pub fn clamp_dt(raw: f64, max_dt: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, max_dt)
}

pub struct FrameDriver {
    pub scene: Scene,
    state: DriverState,
    last_timestamp: Option<f64>,
    frames: u64,
}

impl FrameDriver {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            state: DriverState::Running,
            last_timestamp: None,
            frames: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Frames actually drawn (suspended ticks excluded).
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The dt a running tick at `now` would use.
    pub fn frame_dt(&self, now: f64) -> f64 {
        match self.last_timestamp {
            Some(prev) => clamp_dt(now - prev, self.scene.config.max_dt),
            None => self.scene.config.first_frame_dt,
        }
    }

    /// One host frame at monotonic time `now` (seconds). While `visible` is
    /// false nothing advances or draws, but the timestamp is tracked so the
    /// suspension gap never reaches the clocks.
    pub fn tick<S: Surface>(&mut self, now: f64, visible: bool, surface: &mut S) -> DriverState {
        if !visible {
            if self.state == DriverState::Running {
                log::info!("[driver] suspended after {} frames", self.frames);
                self.state = DriverState::Suspended;
            }
            if self.last_timestamp.is_some() {
                self.last_timestamp = Some(now);
            }
            return self.state;
        }
        if self.state == DriverState::Suspended {
            log::info!("[driver] resumed at t={:.2}", self.scene.t);
            self.state = DriverState::Running;
        }

        let dt = self.frame_dt(now);
        self.last_timestamp = Some(now);
        self.scene.step(dt);
        self.scene.render(surface);
        self.frames += 1;
        self.state
    }

    /// Forwarded from the host's resize notification.
    #[inline]
    pub fn resize(&mut self, width: f64, height: f64) {
        self.scene.resize(width, height);
    }
}
