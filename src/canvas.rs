use glam::DVec2;
use trading_bg_core::{Gradient, GradientShape, Paint, Rgba, Surface};
use web_sys as web;

/// `Surface` over a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn gradient(&self, g: &Gradient) -> Option<web::CanvasGradient> {
        let cg = match g.shape {
            GradientShape::Linear { from, to } => {
                self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y)
            }
            GradientShape::Radial {
                inner,
                inner_radius,
                outer,
                outer_radius,
            } => self
                .ctx
                .create_radial_gradient(
                    inner.x,
                    inner.y,
                    inner_radius.max(0.0),
                    outer.x,
                    outer.y,
                    outer_radius.max(0.0),
                )
                .ok()?,
        };
        for s in &g.stops {
            // non-finite offsets throw; skip the stop rather than the gradient
            _ = cg.add_color_stop(s.offset as f32, &s.color.css());
        }
        Some(cg)
    }

    fn trace(&self, points: &[DVec2], closed: bool) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        if closed {
            self.ctx.close_path();
        }
        true
    }
}

impl Surface for CanvasSurface {
    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0));
    }

    fn set_shadow(&mut self, color: Rgba, blur: f64) {
        self.ctx.set_shadow_color(&color.css());
        self.ctx.set_shadow_blur(blur.max(0.0));
    }

    fn set_fill(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.css()),
            Paint::Gradient(g) => match self.gradient(g) {
                Some(cg) => self.ctx.set_fill_style_canvas_gradient(&cg),
                None => self.ctx.set_fill_style_str(&Rgba::TRANSPARENT.css()),
            },
        }
    }

    fn set_stroke(&mut self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_stroke_style_str(&c.css()),
            Paint::Gradient(g) => match self.gradient(g) {
                Some(cg) => self.ctx.set_stroke_style_canvas_gradient(&cg),
                None => self.ctx.set_stroke_style_str(&Rgba::TRANSPARENT.css()),
            },
        }
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_polygon(&mut self, points: &[DVec2]) {
        if self.trace(points, true) {
            self.ctx.fill();
        }
    }

    fn stroke_path(&mut self, points: &[DVec2], closed: bool) {
        if self.trace(points, closed) {
            self.ctx.stroke();
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        _ = self.ctx.fill_text(text, x, y);
    }
}
