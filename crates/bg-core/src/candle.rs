//! Fixed pool of candle entities laid out on a grid and recycled in place.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::palette::CandleColor;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Candle {
    pub col: usize,
    pub row: usize,
    pub wx: f64,
    pub wz: f64,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub is_up: bool,
    pub color: CandleColor,
    pub rise_offset: f64,
    pub rise_speed: f64,
    pub float_amp: f64,
    pub float_speed: f64,
}

impl Candle {
    fn new(col: usize, row: usize, config: &SceneConfig, rng: &mut impl Rng) -> Self {
        let half = (config.columns as f64 - 1.0) * 0.5;
        let mut c = Self {
            col,
            row,
            wx: (col as f64 - half) * config.spacing,
            wz: config.depth_min + row as f64 * config.spacing,
            open: 0.0,
            close: 0.0,
            high: 0.0,
            low: 0.0,
            is_up: true,
            color: CandleColor::Bull,
            rise_offset: 0.0,
            rise_speed: 0.0,
            float_amp: 0.0,
            float_speed: 0.0,
        };
        c.randomize(config, rng);
        c
    }

    /// Draw fresh prices, colour and bobbing phase.
    pub fn randomize(&mut self, config: &SceneConfig, rng: &mut impl Rng) {
        let open = OPEN_MIN + rng.gen::<f64>() * OPEN_SPAN;
        let close = open + (rng.gen::<f64>() - config.drift_bias) * CLOSE_SWING;
        self.open = open;
        self.close = close;
        self.high = open.max(close) + rng.gen::<f64>() * HIGH_EXTRA_MAX;
        self.low = open.min(close) - rng.gen::<f64>() * LOW_EXTRA_MAX;
        self.is_up = close >= open;
        self.color = if self.is_up {
            CandleColor::Bull
        } else if rng.gen::<f64>() < config.neutral_probability {
            CandleColor::Neutral
        } else {
            CandleColor::Bear
        };
        self.rise_offset = rng.gen::<f64>() * TAU;
        self.rise_speed = 0.5 + rng.gen::<f64>() * 0.8;
        self.float_amp = 6.0 + rng.gen::<f64>() * 10.0;
        self.float_speed = 0.3 + rng.gen::<f64>() * 0.5;
    }

    /// Depth from the camera at the given scroll offset.
    #[inline]
    pub fn depth(&self, scroll_z: f64) -> f64 {
        self.wz - scroll_z
    }

    /// Vertical bob applied to every y of this candle at time `t`.
    #[inline]
    pub fn float_y(&self, t: f64) -> f64 {
        (t * self.float_speed + self.rise_offset).sin() * self.float_amp
    }
}

/// Index-stable candle arena. The length never changes after construction.
#[derive(Clone, Debug)]
pub struct CandlePool {
    candles: Vec<Candle>,
    rows: usize,
    draw_order: Vec<usize>,
}

impl CandlePool {
    /// `columns × ceil(candle_count / columns)` candles, column-major.
    pub fn build(config: &SceneConfig, rng: &mut impl Rng) -> Self {
        let rows = config.rows();
        let mut candles = Vec::with_capacity(config.columns * rows);
        for col in 0..config.columns {
            for row in 0..rows {
                candles.push(Candle::new(col, row, config, rng));
            }
        }
        log::debug!(
            "[pool] built {} candles ({} cols x {} rows)",
            candles.len(),
            config.columns,
            rows
        );
        let draw_order = (0..candles.len()).collect();
        Self {
            candles,
            rows,
            draw_order,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Candle> {
        self.candles.get_mut(index)
    }

    /// Send the candle at `index` to the back of the depth range if it has
    /// passed the camera. Returns whether it was recycled; a candle still in
    /// front of `recycle_z` is left untouched.
    pub fn recycle(
        &mut self,
        index: usize,
        scroll_z: f64,
        config: &SceneConfig,
        rng: &mut impl Rng,
    ) -> bool {
        match self.candles.get_mut(index) {
            Some(c) => recycle_candle(c, scroll_z, config, rng),
            None => false,
        }
    }

    /// Recycle pass over the whole pool; returns how many candles moved.
    pub fn recycle_all(
        &mut self,
        scroll_z: f64,
        config: &SceneConfig,
        rng: &mut impl Rng,
    ) -> usize {
        let mut moved = 0;
        for c in &mut self.candles {
            if recycle_candle(c, scroll_z, config, rng) {
                moved += 1;
            }
        }
        moved
    }

    /// Re-sort the draw order far-to-near for back-to-front blending.
    pub fn sort_back_to_front(&mut self) {
        let candles = &self.candles;
        self.draw_order
            .sort_unstable_by(|&a, &b| candles[b].wz.total_cmp(&candles[a].wz));
    }

    /// Candles in the order left by the last [`Self::sort_back_to_front`].
    pub fn iter_draw_order(&self) -> impl Iterator<Item = &Candle> + '_ {
        self.draw_order.iter().map(move |&i| &self.candles[i])
    }
}

fn recycle_candle(
    c: &mut Candle,
    scroll_z: f64,
    config: &SceneConfig,
    rng: &mut impl Rng,
) -> bool {
    if c.depth(scroll_z) >= config.recycle_z {
        return false;
    }
    let period = config.depth_period();
    c.wz += period;
    // Frame gaps longer than one period: jump whole periods.
    let behind = config.recycle_z - c.depth(scroll_z);
    if behind > 0.0 {
        c.wz += (behind / period).ceil() * period;
        if c.depth(scroll_z) < config.recycle_z {
            c.wz += period;
        }
    }
    c.randomize(config, rng);
    true
}
