use crate::constants::{SCANLINE_HALF_HEIGHT, SCANLINE_SPEED, SCANLINE_SWEEP};
use crate::palette::NEON_GREEN;
use crate::surface::{Gradient, Paint, Rgba, Surface};
use glam::DVec2;

#[inline]
pub fn scanline_y(t: f64, height: f64) -> f64 {
    height * 0.5 + (t * SCANLINE_SPEED).sin() * (height * SCANLINE_SWEEP)
}

pub fn draw_scanline<S: Surface>(surface: &mut S, t: f64, width: f64, height: f64) {
    let y = scanline_y(t, height);
    let g = Gradient::linear(
        DVec2::new(0.0, y - SCANLINE_HALF_HEIGHT),
        DVec2::new(0.0, y + SCANLINE_HALF_HEIGHT),
    )
    .stop(0.0, Rgba::TRANSPARENT)
    .stop(0.5, NEON_GREEN.with_alpha(0.04))
    .stop(1.0, Rgba::TRANSPARENT);
    surface.set_fill(&Paint::Gradient(g));
    surface.fill_rect(0.0, y - SCANLINE_HALF_HEIGHT, width, SCANLINE_HALF_HEIGHT * 2.0);
}
