use crate::viewport::backing_size;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Match the canvas backing store to the window's inner size. Returns the
/// applied size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let Some(w) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let inner_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let inner_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let (w_px, h_px) = backing_size(inner_w, inner_h);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
