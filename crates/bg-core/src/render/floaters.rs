use crate::constants::{FLOATER_GLOW, FLOATER_LABELS, FLOATER_WRAP_MARGIN, UP_GLYPH};
use crate::palette::{FLOATER_DOWN, FLOATER_UP};
use crate::surface::{Rgba, Surface};
use rand::Rng;

/// Drifting ticker label. Pool-allocated once, wrapped instead of dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Floater {
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub alpha: f64,
    pub size: f64,
    pub color: Rgba,
}

impl Floater {
    fn new(label: &'static str, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        Self {
            label,
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            vx: (rng.gen::<f64>() - 0.5) * 0.3,
            vy: -(0.2 + rng.gen::<f64>() * 0.4),
            alpha: 0.25 + rng.gen::<f64>() * 0.4,
            size: 11.0 + rng.gen::<f64>() * 4.0,
            color: label_color(label),
        }
    }

    #[inline]
    pub fn font(&self) -> String {
        format!("{:.1}px \"JetBrains Mono\", monospace", self.size)
    }
}

#[inline]
pub fn label_color(label: &str) -> Rgba {
    if label.contains(UP_GLYPH) {
        FLOATER_UP
    } else {
        FLOATER_DOWN
    }
}

#[derive(Clone, Debug, Default)]
pub struct Floaters {
    items: Vec<Floater>,
}

impl Floaters {
    pub fn new(width: f64, height: f64, rng: &mut impl Rng) -> Self {
        Self {
            items: FLOATER_LABELS
                .iter()
                .map(|&label| Floater::new(label, width, height, rng))
                .collect(),
        }
    }

    #[inline]
    pub fn items(&self) -> &[Floater] {
        &self.items
    }

    #[inline]
    pub fn items_mut(&mut self) -> &mut [Floater] {
        &mut self.items
    }

    /// Move every label one step; labels leaving the top re-enter below the
    /// viewport at a random x.
    pub fn advance(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        for f in &mut self.items {
            f.x += f.vx;
            f.y += f.vy;
            if f.y < -FLOATER_WRAP_MARGIN {
                f.y = height + FLOATER_WRAP_MARGIN;
                f.x = rng.gen::<f64>() * width;
            }
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        for f in &self.items {
            surface.set_font(&f.font());
            surface.set_global_alpha(f.alpha);
            surface.set_fill(&f.color.into());
            surface.set_shadow(f.color, FLOATER_GLOW);
            surface.fill_text(f.label, f.x, f.y);
            surface.clear_shadow();
            surface.set_global_alpha(1.0);
        }
    }
}
