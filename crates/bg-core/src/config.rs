use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("field of view must be positive (got {0})")]
    NonPositiveFov(f64),
    #[error("candle grid needs at least one column and one candle")]
    EmptyGrid,
    #[error("candle spacing must be positive (got {0})")]
    NonPositiveSpacing(f64),
    #[error("depth band is empty: near={near} far={far}")]
    EmptyDepthBand { near: f64, far: f64 },
    #[error("max frame dt must be positive (got {0})")]
    NonPositiveMaxDt(f64),
    #[error("{name} must lie in [0, 1] (got {value})")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("matrix column width must be positive (got {0})")]
    NonPositiveColumnWidth(f64),
}

/// Every tunable of the scene in one place.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub fov: f64,
    pub camera_y: f64,
    pub floor_y: f64,
    pub depth_min: f64,
    pub depth_max: f64,
    pub draw_near: f64,
    pub recycle_z: f64,
    pub candle_count: usize,
    pub columns: usize,
    pub spacing: f64,
    pub price_scale: f64,
    pub body_half_width: f64,
    pub scroll_speed: f64,
    pub max_dt: f64,
    pub first_frame_dt: f64,
    pub drift_bias: f64,
    pub neutral_probability: f64,
    pub matrix_column_width: f64,
    pub floor_columns: usize,
    pub floor_rows: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            fov: FOV,
            camera_y: CAMERA_Y,
            floor_y: FLOOR_Y,
            depth_min: DEPTH_MIN,
            depth_max: DEPTH_MAX,
            draw_near: DRAW_NEAR,
            recycle_z: RECYCLE_Z,
            candle_count: CANDLE_COUNT,
            columns: COLUMNS,
            spacing: CANDLE_SPACING,
            price_scale: PRICE_SCALE,
            body_half_width: BODY_HALF_WIDTH,
            scroll_speed: SCROLL_SPEED,
            max_dt: MAX_DT,
            first_frame_dt: FIRST_FRAME_DT,
            drift_bias: DRIFT_BIAS,
            neutral_probability: NEUTRAL_PROBABILITY,
            matrix_column_width: MATRIX_COLUMN_WIDTH,
            floor_columns: FLOOR_COLUMNS,
            floor_rows: FLOOR_ROWS,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov > 0.0) {
            return Err(ConfigError::NonPositiveFov(self.fov));
        }
        if self.columns == 0 || self.candle_count == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if !(self.spacing > 0.0) {
            return Err(ConfigError::NonPositiveSpacing(self.spacing));
        }
        if self.depth_max <= self.depth_min || self.draw_near >= self.depth_max {
            return Err(ConfigError::EmptyDepthBand {
                near: self.draw_near.min(self.depth_min),
                far: self.depth_max,
            });
        }
        if !(self.max_dt > 0.0) {
            return Err(ConfigError::NonPositiveMaxDt(self.max_dt));
        }
        for (name, value) in [
            ("neutral_probability", self.neutral_probability),
            ("drift_bias", self.drift_bias),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        if !(self.matrix_column_width > 0.0) {
            return Err(ConfigError::NonPositiveColumnWidth(self.matrix_column_width));
        }
        Ok(())
    }

    /// Rows in the candle grid: `ceil(candle_count / columns)`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.candle_count.div_ceil(self.columns.max(1))
    }

    /// Depth covered by the pool; a recycled candle jumps back by this much.
    #[inline]
    pub fn depth_period(&self) -> f64 {
        self.rows() as f64 * self.spacing
    }
}
