use crate::canvas::CanvasSurface;
use crate::overlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use trading_bg_core::FrameDriver;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: FrameDriver,
    pub surface: CanvasSurface,
    pub document: web::Document,
    pub clock: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.elapsed().as_secs_f64();
        let visible = overlay::scene_visible(&self.document);
        self.driver.tick(now, visible, &mut self.surface);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.driver.resize(width as f64, height as f64);
    }
}

/// requestAnimationFrame chain: one callback, re-registered after each frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
