use crate::config::SceneConfig;
use crate::constants::FLOOR_MAJOR_EVERY;
use crate::palette::{INDIGO, NEON_GREEN};
use crate::projector::Projector;
use crate::surface::{Gradient, Paint, Rgba, Surface};

/// Depth of the nearest latitude line. Decreases as `scroll_z` grows so the
/// grid travels toward the camera, wrapping every cell.
#[inline]
pub fn floor_phase(scroll_z: f64, cell_depth: f64) -> f64 {
    cell_depth - scroll_z.rem_euclid(cell_depth)
}

/// Perspective floor grid: longitude lines across the full depth, latitude
/// lines scrolling with `scroll_z`.
pub fn draw_floor<S: Surface>(
    surface: &mut S,
    scroll_z: f64,
    projector: &Projector,
    config: &SceneConfig,
) {
    let cols = config.floor_columns;
    let rows = config.floor_rows;
    let cell = config.spacing;
    let x0 = -(cols as f64 * 0.5) * cell;
    let z0 = floor_phase(scroll_z, cell);
    let z1 = z0 + rows as f64 * cell;
    let y = config.floor_y;

    surface.save();
    surface.set_line_width(0.5);

    for c in 0..=cols {
        let wx = x0 + c as f64 * cell;
        let (Some(p1), Some(p2)) = (projector.project(wx, y, z0), projector.project(wx, y, z1))
        else {
            continue;
        };
        let (near, mid) = if c % FLOOR_MAJOR_EVERY == 0 {
            (0.15, 0.06)
        } else {
            (0.04, 0.02)
        };
        let g = Gradient::linear(p1.pos, p2.pos)
            .stop(0.0, NEON_GREEN.with_alpha(near))
            .stop(0.5, NEON_GREEN.with_alpha(mid))
            .stop(1.0, Rgba::TRANSPARENT);
        surface.set_stroke(&Paint::Gradient(g));
        surface.stroke_path(&[p1.pos, p2.pos], false);
    }

    for r in 0..=rows {
        let wz = z0 + r as f64 * cell;
        let (Some(p1), Some(p2)) = (projector.project(x0, y, wz), projector.project(-x0, y, wz))
        else {
            continue;
        };
        let fade = 1.0 - r as f64 / rows.max(1) as f64;
        let g = Gradient::linear(p1.pos, p2.pos)
            .stop(0.0, Rgba::TRANSPARENT)
            .stop(0.5, INDIGO.with_alpha(0.1 * fade))
            .stop(1.0, Rgba::TRANSPARENT);
        surface.set_stroke(&Paint::Gradient(g));
        surface.stroke_path(&[p1.pos, p2.pos], false);
    }

    surface.restore();
}
