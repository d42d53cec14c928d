//! Drawing seam between the scene and whatever 2D surface hosts it.
//!
//! Renderers only issue calls through [`Surface`]; the browser frontend
//! implements it over a canvas 2D context and tests record the calls.

use glam::DVec2;
use smallvec::SmallVec;

/// Straight (non-premultiplied) RGBA colour; `a` in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS colour string, e.g. `rgba(0,255,140,0.5)`.
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a.clamp(0.0, 1.0))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientShape {
    Linear {
        from: DVec2,
        to: DVec2,
    },
    Radial {
        inner: DVec2,
        inner_radius: f64,
        outer: DVec2,
        outer_radius: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub shape: GradientShape,
    pub stops: SmallVec<[ColorStop; 3]>,
}

impl Gradient {
    pub fn linear(from: DVec2, to: DVec2) -> Self {
        Self {
            shape: GradientShape::Linear { from, to },
            stops: SmallVec::new(),
        }
    }

    /// Concentric radial gradient from `inner_radius` to `outer_radius`.
    pub fn radial(center: DVec2, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            shape: GradientShape::Radial {
                inner: center,
                inner_radius,
                outer: center,
                outer_radius,
            },
            stops: SmallVec::new(),
        }
    }

    pub fn stop(mut self, offset: f64, color: Rgba) -> Self {
        self.stops.push(ColorStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Gradient(Gradient),
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self {
        Paint::Solid(c)
    }
}

impl From<Gradient> for Paint {
    fn from(g: Gradient) -> Self {
        Paint::Gradient(g)
    }
}

/// Minimal immediate-mode 2D API, modelled on the canvas 2D context.
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);

    fn set_global_alpha(&mut self, alpha: f64);
    fn set_shadow(&mut self, color: Rgba, blur: f64);
    fn set_fill(&mut self, paint: &Paint);
    fn set_stroke(&mut self, paint: &Paint);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    /// Fill a closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[DVec2]);
    /// Stroke a polyline through `points`, closing it when `closed`.
    fn stroke_path(&mut self, points: &[DVec2], closed: bool);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    #[inline]
    fn clear_shadow(&mut self) {
        self.set_shadow(Rgba::TRANSPARENT, 0.0);
    }
}
