// Tuning constants for the candlestick scene. `SceneConfig::default()` is built from these.

// Camera
pub const FOV: f64 = 700.0;
pub const CAMERA_Y: f64 = -320.0; // camera height (negative = above floor)
pub const FLOOR_Y: f64 = 0.0; // world Y of the reflective floor

// Depth bands (world units, scroll-adjusted)
pub const DEPTH_MIN: f64 = 600.0; // alpha reaches 1 at and before this depth
pub const DEPTH_MAX: f64 = 5000.0; // far cull
pub const DRAW_NEAR: f64 = 20.0; // near cull
pub const RECYCLE_Z: f64 = -200.0; // candles behind this are sent to the back

// Candle grid
pub const CANDLE_COUNT: usize = 60;
pub const COLUMNS: usize = 6;
pub const CANDLE_SPACING: f64 = 160.0;
pub const PRICE_SCALE: f64 = 0.28; // world height per price unit
pub const BODY_HALF_WIDTH: f64 = 28.0;

// Motion
pub const SCROLL_SPEED: f64 = 80.0; // world units per second
pub const MAX_DT: f64 = 0.05;
pub const FIRST_FRAME_DT: f64 = 0.016;

// Synthetic prices
pub const OPEN_MIN: f64 = 200.0;
pub const OPEN_SPAN: f64 = 800.0;
pub const CLOSE_SWING: f64 = 300.0;
pub const DRIFT_BIAS: f64 = 0.46; // < 0.5 skews closes upward
pub const HIGH_EXTRA_MAX: f64 = 120.0;
pub const LOW_EXTRA_MAX: f64 = 80.0;
pub const NEUTRAL_PROBABILITY: f64 = 0.15; // share of down candles drawn in indigo

// Candle styling
pub const GLOW_PER_SCALE: f64 = 18.0;
pub const REFLECTION_OPACITY: f64 = 0.08;
pub const MIN_BODY_HEIGHT_PX: f64 = 0.5;

// Floor grid
pub const FLOOR_COLUMNS: usize = 20;
pub const FLOOR_ROWS: usize = 30;
pub const FLOOR_MAJOR_EVERY: usize = 4;

// Matrix rain
pub const MATRIX_COLUMN_WIDTH: f64 = 20.0;
pub const MAX_MATRIX_COLUMNS: usize = 8_192; // upper bound for any viewport width
pub const MATRIX_GLYPHS: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "%", "₹", "▲", "▼", "+", "-",
];
pub const MATRIX_FONT: &str = "12px \"JetBrains Mono\", monospace";

// Floating tickers
pub const FLOATER_LABELS: &[&str] = &[
    "RELIANCE  ▲ +1.84%",
    "TCS  ▼ -0.51%",
    "NIFTY 50  ▲ +1.2%",
    "SENSEX  ▼ -0.3%",
    "GOLD  ▲ +0.8%",
    "HDFC  ▲ +2.1%",
    "INFY  ▲ +0.9%",
    "WIPRO  ▼ -1.2%",
    "BTC  ▲ +3.4%",
    "ETH  ▲ +2.1%",
];
pub const UP_GLYPH: char = '▲';
pub const FLOATER_WRAP_MARGIN: f64 = 20.0;
pub const FLOATER_GLOW: f64 = 6.0;

// Scanline
pub const SCANLINE_SPEED: f64 = 0.15;
pub const SCANLINE_SWEEP: f64 = 0.45; // fraction of height either side of centre
pub const SCANLINE_HALF_HEIGHT: f64 = 2.0;
