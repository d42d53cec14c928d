//! Explicit owner of everything the animation mutates.

use crate::candle::CandlePool;
use crate::config::{ConfigError, SceneConfig};
use crate::projector::Projector;
use crate::render::{self, Floaters, MatrixRain};
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Scene {
    pub config: SceneConfig,
    pub pool: CandlePool,
    pub matrix: MatrixRain,
    pub floaters: Floaters,
    /// Animation clock in seconds; only advances while running.
    pub t: f64,
    pub scroll_z: f64,
    width: f64,
    height: f64,
    projector: Projector,
    rng: StdRng,
}

impl Scene {
    pub fn new(
        config: SceneConfig,
        width: f64,
        height: f64,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(config, width, height, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(
        config: SceneConfig,
        width: f64,
        height: f64,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height) = sanitize_size(width, height);
        let pool = CandlePool::build(&config, &mut rng);
        let matrix = MatrixRain::new(width, height, config.matrix_column_width, &mut rng);
        let floaters = Floaters::new(width, height, &mut rng);
        let projector = Projector::from_config(&config, width, height);
        Ok(Self {
            config,
            pool,
            matrix,
            floaters,
            t: 0.0,
            scroll_z: 0.0,
            width,
            height,
            projector,
            rng,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// New viewport size: rebuilds the width-dependent matrix columns and
    /// recentres the projection. Candles and floaters are kept.
    pub fn resize(&mut self, width: f64, height: f64) {
        let (width, height) = sanitize_size(width, height);
        self.width = width;
        self.height = height;
        self.projector = Projector::from_config(&self.config, width, height);
        self.matrix
            .rebuild(width, height, self.config.matrix_column_width, &mut self.rng);
        log::debug!("[scene] resized to {:.0}x{:.0}", width, height);
    }

    /// Advance the clocks by `dt` seconds and recycle candles behind the camera.
    pub fn step(&mut self, dt: f64) {
        self.t += dt;
        self.scroll_z += self.config.scroll_speed * dt;
        self.pool.recycle_all(self.scroll_z, &self.config, &mut self.rng);
    }

    /// Compose one frame: backdrop, matrix, scanline, floor, candles far to
    /// near, floaters, vignette.
    pub fn render<S: Surface>(&mut self, surface: &mut S) {
        let (w, h) = (self.width, self.height);
        render::draw_background(surface, w, h);
        self.matrix.draw_and_advance(surface, h, &mut self.rng);
        render::draw_scanline(surface, self.t, w, h);
        render::draw_floor(surface, self.scroll_z, &self.projector, &self.config);

        self.pool.sort_back_to_front();
        for c in self.pool.iter_draw_order() {
            render::draw_candle(surface, c, self.t, self.scroll_z, &self.projector, &self.config);
        }

        self.floaters.advance(w, h, &mut self.rng);
        self.floaters.draw(surface);
        render::draw_vignette(surface, w, h);
    }
}

// Zero, negative or NaN sizes collapse to a 1x1 viewport.
#[inline]
fn sanitize_size(width: f64, height: f64) -> (f64, f64) {
    let fix = |v: f64| if v.is_finite() && v >= 1.0 { v } else { 1.0 };
    (fix(width), fix(height))
}
