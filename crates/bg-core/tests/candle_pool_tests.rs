// Pool layout and in-place recycling.

use rand::rngs::StdRng;
use rand::SeedableRng;
use trading_bg_core::{CandleColor, CandlePool, SceneConfig};

fn make_pool(seed: u64) -> (CandlePool, SceneConfig, StdRng) {
    let config = SceneConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let pool = CandlePool::build(&config, &mut rng);
    (pool, config, rng)
}

fn ohlc_ok(c: &trading_bg_core::Candle) -> bool {
    c.low <= c.open.min(c.close) && c.open.max(c.close) <= c.high
}

#[test]
fn pool_is_columns_times_ceil_rows() {
    let (pool, config, _) = make_pool(1);
    assert_eq!(pool.rows(), 10);
    assert_eq!(pool.len(), config.columns * 10);

    let odd = SceneConfig {
        candle_count: 61,
        ..SceneConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(2);
    let pool = CandlePool::build(&odd, &mut rng);
    assert_eq!(pool.len(), 6 * 11);
}

#[test]
fn grid_is_centered_in_x_and_stacked_from_depth_min() {
    let (pool, config, _) = make_pool(3);
    let sum_x: f64 = pool.candles().iter().map(|c| c.wx).sum();
    assert!(sum_x.abs() < 1e-9, "grid not centred: {sum_x}");
    for c in pool.candles() {
        let expected_z = config.depth_min + c.row as f64 * config.spacing;
        assert!((c.wz - expected_z).abs() < 1e-9);
        let expected_x = (c.col as f64 - 2.5) * config.spacing;
        assert!((c.wx - expected_x).abs() < 1e-9);
    }
}

#[test]
fn fresh_candles_respect_price_ranges() {
    let (pool, _, _) = make_pool(4);
    for c in pool.candles() {
        assert!((200.0..1000.0).contains(&c.open));
        assert!((c.close - c.open).abs() <= 0.54 * 300.0 + 1e-9);
        assert!(ohlc_ok(c));
        assert_eq!(c.is_up, c.close >= c.open);
        if c.is_up {
            assert_eq!(c.color, CandleColor::Bull);
        } else {
            assert_ne!(c.color, CandleColor::Bull);
        }
        assert!((6.0..16.0).contains(&c.float_amp));
        assert!((0.3..0.8).contains(&c.float_speed));
        assert!((0.5..1.3).contains(&c.rise_speed));
    }
}

#[test]
fn recycle_moves_candle_behind_the_camera_to_the_back() {
    let (mut pool, config, mut rng) = make_pool(5);
    let scroll_z = 1_000.0;
    let old_wz = scroll_z + config.recycle_z - 50.0;
    pool.get_mut(7).unwrap().wz = old_wz;

    assert!(pool.recycle(7, scroll_z, &config, &mut rng));
    let c = pool.get(7).unwrap();
    assert!(c.depth(scroll_z) >= config.recycle_z);
    assert!((c.wz - old_wz - config.depth_period()).abs() < 1e-9);
    assert!(ohlc_ok(c));
}

#[test]
fn recycle_is_a_noop_for_candles_in_front() {
    let (mut pool, config, mut rng) = make_pool(6);
    let before = pool.get(3).unwrap().clone();
    assert!(!pool.recycle(3, 0.0, &config, &mut rng));
    assert_eq!(pool.get(3).unwrap(), &before);

    // second call in the same frame after a real recycle changes nothing
    let scroll_z = before.wz - config.recycle_z + 1.0;
    assert!(pool.recycle(3, scroll_z, &config, &mut rng));
    let once = pool.get(3).unwrap().clone();
    assert!(!pool.recycle(3, scroll_z, &config, &mut rng));
    assert_eq!(pool.get(3).unwrap(), &once);
}

#[test]
fn recycle_out_of_range_index_is_ignored() {
    let (mut pool, config, mut rng) = make_pool(7);
    let n = pool.len();
    assert!(!pool.recycle(n + 5, 1e9, &config, &mut rng));
    assert_eq!(pool.len(), n);
}

#[test]
fn huge_scroll_jump_keeps_whole_period_spacing() {
    let (mut pool, config, mut rng) = make_pool(8);
    let period = config.depth_period();
    let old_wz = pool.get(0).unwrap().wz;
    let scroll_z = old_wz + 10_000.0;

    assert!(pool.recycle(0, scroll_z, &config, &mut rng));
    let c = pool.get(0).unwrap();
    assert!(c.depth(scroll_z) >= config.recycle_z);
    let periods = (c.wz - old_wz) / period;
    assert!((periods - periods.round()).abs() < 1e-9, "not whole periods: {periods}");
}

#[test]
fn recycle_all_preserves_identity_and_count() {
    let (mut pool, config, mut rng) = make_pool(9);
    let ids: Vec<(usize, usize)> = pool.candles().iter().map(|c| (c.col, c.row)).collect();
    let mut scroll_z = 0.0;
    let mut moved = 0;
    for _ in 0..5_000 {
        scroll_z += 4.0;
        moved += pool.recycle_all(scroll_z, &config, &mut rng);
        for c in pool.candles() {
            assert!(c.depth(scroll_z) >= config.recycle_z);
            assert!(ohlc_ok(c));
        }
    }
    assert!(moved > pool.len(), "expected several laps, got {moved} recycles");
    let after: Vec<(usize, usize)> = pool.candles().iter().map(|c| (c.col, c.row)).collect();
    assert_eq!(ids, after);
}

#[test]
fn neutral_only_ever_replaces_bear() {
    let config = SceneConfig {
        neutral_probability: 1.0,
        ..SceneConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(10);
    let pool = CandlePool::build(&config, &mut rng);
    for c in pool.candles() {
        let expected = if c.is_up {
            CandleColor::Bull
        } else {
            CandleColor::Neutral
        };
        assert_eq!(c.color, expected);
    }
}

#[test]
fn draw_order_is_far_to_near() {
    let (mut pool, _, _) = make_pool(11);
    pool.sort_back_to_front();
    let depths: Vec<f64> = pool.iter_draw_order().map(|c| c.wz).collect();
    assert_eq!(depths.len(), pool.len());
    assert!(depths.windows(2).all(|w| w[0] >= w[1]));
}
