#![cfg(target_arch = "wasm32")]

mod audio;
mod board;
mod dom;
mod effects;
mod events;
mod sketch;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sticker-pop starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let app = document
        .get_element_by_id("app")
        .ok_or_else(|| anyhow::anyhow!("missing #app"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let canvas = document
        .get_element_by_id("drawing-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #drawing-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mut rng = StdRng::from_entropy();
    let sketch = Rc::new(RefCell::new(sketch::Sketch::new(canvas.clone(), &mut rng)?));

    // Keep the canvas backing store in sync with CSS size * devicePixelRatio.
    // The sync goes through Sketch: resizing resets the 2D context, so the
    // stroke settings must be re-applied with it.
    {
        let sketch_resize = sketch.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            sketch_resize.borrow_mut().sync_backing_size();
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    let wiring = events::Wiring {
        document,
        app,
        canvas,
        board: Rc::new(RefCell::new(sticker_core::Board::new())),
        drag: Rc::new(RefCell::new(sticker_core::DragController::new())),
        sketch,
        audio: Rc::new(RefCell::new(audio::AudioFeedback::new())),
        rng: Rc::new(RefCell::new(rng)),
    };
    events::wire_input_handlers(&wiring);
    events::wire_buttons(&wiring);

    log::info!("sticker-pop ready");
    Ok(())
}
