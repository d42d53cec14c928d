// Viewport -> canvas backing-store sizing, kept free of DOM types.

/// Round an inner window size to canvas pixels, never below 1x1.
#[inline]
pub fn backing_size(inner_width: f64, inner_height: f64) -> (u32, u32) {
    (to_px(inner_width), to_px(inner_height))
}

#[inline]
fn to_px(v: f64) -> u32 {
    if v.is_finite() && v >= 1.0 {
        v.round().min(u32::MAX as f64) as u32
    } else {
        1
    }
}
