//! Draw passes. Each pass only reads scene state and issues `Surface` calls,
//! except the matrix and floater passes which also step their particles.

mod background;
mod candle;
mod floaters;
mod floor;
mod matrix;
mod scanline;

pub use background::{draw_background, draw_vignette};
pub use candle::{candle_geometry, depth_alpha, draw_candle, CandleGeometry};
pub use floaters::{label_color, Floater, Floaters};
pub use floor::{draw_floor, floor_phase};
pub use matrix::{column_count, MatrixColumn, MatrixRain};
pub use scanline::{draw_scanline, scanline_y};
