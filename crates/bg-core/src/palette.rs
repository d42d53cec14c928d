use crate::surface::Rgba;

/// Candle hue, fixed when the candle is (re)generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandleColor {
    Bull,
    Bear,
    Neutral,
}

const CANDLE_RGB: [[u8; 3]; 3] = [
    [0, 255, 140], // bull green
    [239, 68, 68], // bear red
    [99, 102, 241], // neutral indigo
];

impl CandleColor {
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        CANDLE_RGB[self as usize]
    }

    #[inline]
    pub fn rgba(self, a: f64) -> Rgba {
        let [r, g, b] = self.rgb();
        Rgba::new(r, g, b, a)
    }
}

// Scene accents
pub const NEON_GREEN: Rgba = Rgba::new(0, 255, 140, 1.0);
pub const INDIGO: Rgba = Rgba::new(99, 102, 241, 1.0);
pub const TEAL: Rgba = Rgba::new(0, 200, 180, 1.0);
pub const BACKDROP: Rgba = Rgba::new(6, 8, 16, 1.0);
pub const VIGNETTE_EDGE: Rgba = Rgba::new(0, 0, 0, 0.65);
pub const FLOATER_UP: Rgba = Rgba::new(0, 255, 140, 1.0);
pub const FLOATER_DOWN: Rgba = Rgba::new(239, 68, 68, 1.0);
