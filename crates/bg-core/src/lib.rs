//! Platform-free engine for the neon candlestick background: projection,
//! the recycled candle pool, layer renderers and the frame driver.

pub mod candle;
pub mod config;
pub mod constants;
pub mod driver;
pub mod palette;
pub mod projector;
pub mod render;
pub mod scene;
pub mod surface;

pub use candle::*;
pub use config::*;
pub use driver::*;
pub use palette::CandleColor;
pub use projector::*;
pub use scene::*;
pub use surface::*;
