use crate::palette::{BACKDROP, INDIGO, NEON_GREEN, TEAL, VIGNETTE_EDGE};
use crate::surface::{Gradient, Paint, Rgba, Surface};
use glam::DVec2;

/// Near-black base with three soft colour glows.
pub fn draw_background<S: Surface>(surface: &mut S, width: f64, height: f64) {
    surface.set_fill(&BACKDROP.into());
    surface.fill_rect(0.0, 0.0, width, height);

    let glows = [
        // horizon
        (
            DVec2::new(width * 0.5, height * 0.5 + 40.0),
            width * 0.6,
            NEON_GREEN.with_alpha(0.07),
        ),
        (
            DVec2::new(width * 0.1, height * 0.3),
            width * 0.4,
            INDIGO.with_alpha(0.1),
        ),
        (
            DVec2::new(width * 0.9, height * 0.7),
            width * 0.35,
            TEAL.with_alpha(0.07),
        ),
    ];
    for (center, radius, color) in glows {
        let g = Gradient::radial(center, 0.0, radius)
            .stop(0.0, color)
            .stop(1.0, Rgba::TRANSPARENT);
        surface.set_fill(&Paint::Gradient(g));
        surface.fill_rect(0.0, 0.0, width, height);
    }
}

/// Edge darkening, recomputed from the current size each frame.
pub fn draw_vignette<S: Surface>(surface: &mut S, width: f64, height: f64) {
    let g = Gradient::radial(DVec2::new(width * 0.5, height * 0.5), height * 0.3, height * 0.85)
        .stop(0.0, Rgba::TRANSPARENT)
        .stop(1.0, VIGNETTE_EDGE);
    surface.set_fill(&Paint::Gradient(g));
    surface.fill_rect(0.0, 0.0, width, height);
}
