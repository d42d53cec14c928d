//! Fixed-camera perspective projection from world space to screen space.

use crate::config::SceneConfig;
use glam::DVec2;

/// Screen position plus the perspective scale at that depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub pos: DVec2,
    pub scale: f64,
}

impl Projected {
    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }
}

/// Virtual camera looking down +Z, lifted `camera_y` off the floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub fov: f64,
    pub camera_y: f64,
    pub center: DVec2,
}

impl Projector {
    pub fn new(fov: f64, camera_y: f64, width: f64, height: f64) -> Self {
        Self {
            fov,
            camera_y,
            center: DVec2::new(width * 0.5, height * 0.5),
        }
    }

    pub fn from_config(config: &SceneConfig, width: f64, height: f64) -> Self {
        Self::new(config.fov, config.camera_y, width, height)
    }

    /// Project a world point. `z` is already scroll-adjusted (distance from
    /// the camera). Returns `None` at or behind the camera plane.
    #[inline]
    pub fn project(&self, x: f64, y: f64, z: f64) -> Option<Projected> {
        let depth = z + self.fov;
        if !(depth > 1.0) {
            return None;
        }
        let scale = self.fov / depth;
        Some(Projected {
            pos: DVec2::new(
                self.center.x + x * scale,
                self.center.y + (y - self.camera_y) * scale,
            ),
            scale,
        })
    }
}
