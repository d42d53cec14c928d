#![cfg(target_arch = "wasm32")]
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use trading_bg_core::{FrameDriver, Scene, SceneConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod overlay;
mod viewport;

use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trading-bg starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Decorative layer: a page without the canvas simply has no background.
    let Some(canvas_el) = document.get_element_by_id(CANVAS_ID) else {
        log::info!("no #{} on this page; background disabled", CANVAS_ID);
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let Some(ctx) = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
    else {
        log::info!("#{} has no 2d context; background disabled", CANVAS_ID);
        return Ok(());
    };

    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let scene = Scene::with_rng(
        SceneConfig::default(),
        w as f64,
        h as f64,
        StdRng::from_entropy(),
    )?;
    log::info!(
        "[scene] {} candles, {} matrix columns at {}x{}",
        scene.pool.len(),
        scene.matrix.columns().len(),
        w,
        h
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver: FrameDriver::new(scene),
        surface: canvas::CanvasSurface::new(ctx),
        document,
        clock: Instant::now(),
    }));

    let resize_ctx = frame_ctx.clone();
    dom::add_window_listener("resize", move || {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        resize_ctx.borrow_mut().resize(w, h);
    });

    frame::start_loop(frame_ctx);
    Ok(())
}
