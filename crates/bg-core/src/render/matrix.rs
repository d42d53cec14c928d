use crate::constants::{MATRIX_FONT, MATRIX_GLYPHS, MAX_MATRIX_COLUMNS};
use crate::palette::NEON_GREEN;
use crate::surface::Surface;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct MatrixColumn {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub alpha: f64,
}

/// Falling ticker glyphs, one column per `column_width` pixels.
#[derive(Clone, Debug, Default)]
pub struct MatrixRain {
    columns: Vec<MatrixColumn>,
}

impl MatrixRain {
    pub fn new(width: f64, height: f64, column_width: f64, rng: &mut impl Rng) -> Self {
        let mut rain = Self::default();
        rain.rebuild(width, height, column_width, rng);
        rain
    }

    /// Replace every column for a new viewport size.
    pub fn rebuild(&mut self, width: f64, height: f64, column_width: f64, rng: &mut impl Rng) {
        let count = column_count(width, column_width);
        self.columns.clear();
        self.columns.extend((0..count).map(|i| MatrixColumn {
            x: i as f64 * column_width + column_width * 0.5,
            y: rng.gen::<f64>() * height.max(0.0),
            speed: 0.5 + rng.gen::<f64>() * 1.2,
            alpha: 0.04 + rng.gen::<f64>() * 0.06,
        }));
        self.columns.shrink_to_fit();
        log::debug!("[matrix] {} columns for width {:.0}", count, width);
    }

    #[inline]
    pub fn columns(&self) -> &[MatrixColumn] {
        &self.columns
    }

    /// Draw a random glyph per column, then let each column fall.
    pub fn draw_and_advance<S: Surface>(
        &mut self,
        surface: &mut S,
        height: f64,
        rng: &mut impl Rng,
    ) {
        surface.set_font(MATRIX_FONT);
        for col in &mut self.columns {
            let glyph = MATRIX_GLYPHS[rng.gen_range(0..MATRIX_GLYPHS.len())];
            surface.set_fill(&NEON_GREEN.with_alpha(col.alpha).into());
            surface.fill_text(glyph, col.x, col.y);
            col.y += col.speed * 2.0;
            if col.y > height {
                col.y = 0.0;
            }
        }
    }
}

/// `ceil(width / column_width)`, at least one column for any positive width
/// and never more than `MAX_MATRIX_COLUMNS`.
#[inline]
pub fn column_count(width: f64, column_width: f64) -> usize {
    if !(width > 0.0) || !(column_width > 0.0) {
        return 0;
    }
    (width / column_width).ceil().min(MAX_MATRIX_COLUMNS as f64) as usize
}
