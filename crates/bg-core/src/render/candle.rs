use crate::candle::Candle;
use crate::config::SceneConfig;
use crate::constants::{GLOW_PER_SCALE, MIN_BODY_HEIGHT_PX, REFLECTION_OPACITY};
use crate::projector::{Projected, Projector};
use crate::surface::{Gradient, Paint, Surface};
use glam::DVec2;

/// Projected outline of one candle for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandleGeometry {
    pub depth: f64,
    pub alpha: f64,
    pub body_top_left: Projected,
    pub body_top_right: Projected,
    pub body_bottom_left: Projected,
    pub body_bottom_right: Projected,
    pub wick_top: Projected,
    pub wick_bottom: Projected,
    /// Body mirrored under the floor; `None` when it does not project.
    pub reflection: Option<[DVec2; 4]>,
}

impl CandleGeometry {
    #[inline]
    pub fn body_height(&self) -> f64 {
        (self.body_top_left.y() - self.body_bottom_left.y()).abs()
    }

    /// Body corners clockwise from top-left.
    #[inline]
    pub fn body(&self) -> [DVec2; 4] {
        [
            self.body_top_left.pos,
            self.body_top_right.pos,
            self.body_bottom_right.pos,
            self.body_bottom_left.pos,
        ]
    }

    #[inline]
    fn glow(&self) -> f64 {
        self.body_bottom_left.scale * GLOW_PER_SCALE
    }

    #[inline]
    fn scale(&self) -> f64 {
        self.body_bottom_left.scale
    }
}

/// Depth fade: full opacity at `depth_min` and nearer, 0.15 at `depth_max`.
#[inline]
pub fn depth_alpha(depth: f64, config: &SceneConfig) -> f64 {
    let proximity = 1.0 - (depth - config.depth_min) / (config.depth_max - config.depth_min);
    (proximity * 1.8 + 0.15).clamp(0.0, 1.0)
}

/// Project a candle. `None` when it is culled by depth or any vertex fails
/// to project.
pub fn candle_geometry(
    c: &Candle,
    t: f64,
    scroll_z: f64,
    projector: &Projector,
    config: &SceneConfig,
) -> Option<CandleGeometry> {
    let depth = c.depth(scroll_z);
    if depth < config.draw_near || depth > config.depth_max {
        return None;
    }

    let float_y = c.float_y(t);
    // negative Y is up
    let lift = |price: f64| config.floor_y - price * config.price_scale + float_y;
    let body_bottom = lift(c.open.min(c.close));
    let body_top = lift(c.open.max(c.close));
    let wick_top = lift(c.high);
    let wick_bottom = lift(c.low);

    let left = c.wx - config.body_half_width;
    let right = c.wx + config.body_half_width;

    let body_bottom_left = projector.project(left, body_bottom, depth)?;
    let body_bottom_right = projector.project(right, body_bottom, depth)?;
    let body_top_left = projector.project(left, body_top, depth)?;
    let body_top_right = projector.project(right, body_top, depth)?;
    let wick_top = projector.project(c.wx, wick_top, depth)?;
    let wick_bottom = projector.project(c.wx, wick_bottom, depth)?;

    let reflection = (|| {
        Some([
            projector.project(left, -body_top, depth)?.pos,
            projector.project(right, -body_top, depth)?.pos,
            projector.project(right, -body_bottom, depth)?.pos,
            projector.project(left, -body_bottom, depth)?.pos,
        ])
    })();

    Some(CandleGeometry {
        depth,
        alpha: depth_alpha(depth, config),
        body_top_left,
        body_top_right,
        body_bottom_left,
        body_bottom_right,
        wick_top,
        wick_bottom,
        reflection,
    })
}

/// Wick, gradient body, neon outline, top-edge highlight and floor reflection.
pub fn draw_candle<S: Surface>(
    surface: &mut S,
    c: &Candle,
    t: f64,
    scroll_z: f64,
    projector: &Projector,
    config: &SceneConfig,
) {
    let Some(g) = candle_geometry(c, t, scroll_z, projector, config) else {
        return;
    };
    let alpha = g.alpha;
    let glow = g.glow();
    let s = g.scale();
    let color = c.color;

    // wick
    let wick_x = (g.body_top_left.x() + g.body_top_right.x()) * 0.5;
    surface.save();
    surface.set_shadow(color.rgba(0.9), glow * 0.6);
    surface.set_stroke(&color.rgba(alpha * 0.9).into());
    surface.set_line_width((s * 3.0).max(1.0));
    surface.stroke_path(
        &[
            DVec2::new(wick_x, g.wick_top.y()),
            DVec2::new(wick_x, g.wick_bottom.y()),
        ],
        false,
    );
    surface.restore();

    if g.body_height() < MIN_BODY_HEIGHT_PX {
        return;
    }
    let body = g.body();

    // body fill
    surface.save();
    surface.set_shadow(color.rgba(0.8), glow);
    let fill = Gradient::linear(
        DVec2::new(0.0, g.body_top_left.y()),
        DVec2::new(0.0, g.body_bottom_left.y()),
    )
    .stop(0.0, color.rgba(alpha * 0.95))
    .stop(0.5, color.rgba(alpha * 0.6))
    .stop(1.0, color.rgba(alpha * 0.2));
    surface.set_fill(&Paint::Gradient(fill));
    surface.fill_polygon(&body);
    surface.restore();

    // neon outline
    surface.save();
    surface.set_shadow(color.rgba(1.0), glow * 1.2);
    surface.set_stroke(&color.rgba(alpha).into());
    surface.set_line_width((s * 2.0).max(0.8));
    surface.stroke_path(&body, true);
    surface.restore();

    // top edge
    surface.save();
    surface.set_shadow(color.rgba(1.0), glow * 0.8);
    surface.set_stroke(&color.rgba(alpha * 0.7).into());
    surface.set_line_width((s * 1.5).max(0.5));
    surface.stroke_path(&body[..2], false);
    surface.restore();

    if let Some(reflection) = g.reflection {
        surface.save();
        surface.set_global_alpha(REFLECTION_OPACITY * alpha);
        surface.set_fill(&color.rgba(1.0).into());
        surface.fill_polygon(&reflection);
        surface.restore();
    }
}
