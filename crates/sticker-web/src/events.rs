use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use rand::rngs::StdRng;
use sticker_core::{Board, DragController, SurfaceError, ITEM_SIZE};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::AudioFeedback;
use crate::board;
use crate::dom;
use crate::effects;
use crate::sketch::Sketch;

/// Everything the event handlers share. Cloned into each closure; all
/// mutation happens synchronously inside one callback at a time.
#[derive(Clone)]
pub struct Wiring {
    pub document: web::Document,
    pub app: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub board: Rc<RefCell<Board>>,
    pub drag: Rc<RefCell<DragController>>,
    pub sketch: Rc<RefCell<Sketch>>,
    pub audio: Rc<RefCell<AudioFeedback>>,
    pub rng: Rc<RefCell<StdRng>>,
}

pub fn wire_input_handlers(w: &Wiring) {
    wire_sketch_pointerdown(w);
    wire_sketch_pointermove(w);
    wire_sketch_pointerend(w);
    wire_drag_pointerdown(w);
    wire_drag_pointermove(w);
    wire_drag_end(w);
}

pub fn wire_buttons(w: &Wiring) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, "clear-button", move || {
        w2.sketch.borrow_mut().reset(&mut *w2.rng.borrow_mut());
        log::info!("[sketch] cleared");
    });
    let w2 = w.clone();
    dom::add_click_listener(&w.document, "done-button", move || finish_drawing(&w2));
}

/// Done: validate non-blank, turn the drawing into a sticker, reset the
/// surface. Blank surfaces get a prompt and mutate nothing.
fn finish_drawing(w: &Wiring) {
    let mut sketch = w.sketch.borrow_mut();
    let mask_url = match sketch.export_image() {
        Ok(url) => url,
        Err(SurfaceError::Blank) => {
            if let Some(win) = web::window() {
                _ = win.alert_with_message("Draw something first, then press Done!");
            }
            return;
        }
    };
    let color = sketch.color();

    let rect = w.app.get_bounding_client_rect();
    let container = Vec2::new(rect.width() as f32, rect.height() as f32);
    let mut rng = w.rng.borrow_mut();
    let id = w
        .board
        .borrow_mut()
        .spawn(container, mask_url, color, &mut *rng);
    if let Some(item) = w.board.borrow().get(id) {
        if board::create_element(&w.document, &w.app, item).is_none() {
            log::warn!("[board] element creation failed for item {id}");
        }
    }
    sketch.reset(&mut *rng);
    log::info!("[sketch] item {id} created");
}

// --- stroke capture ------------------------------------------------------

fn wire_sketch_pointerdown(w: &Wiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        ev.prevent_default();
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        let mut sketch = w.sketch.borrow_mut();
        let pos = sketch.pointer_px(&ev);
        sketch.begin(pos);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_sketch_pointermove(w: &Wiring) {
    let w = w.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let mut sketch = w.sketch.borrow_mut();
        if !sketch.is_drawing() {
            return;
        }
        ev.prevent_default();
        let pos = sketch.pointer_px(&ev);
        sketch.extend(pos);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_sketch_pointerend(w: &Wiring) {
    for event in ["pointerup", "pointercancel"] {
        let w = w.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            w.sketch.borrow_mut().end();
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// --- drag lifecycle ------------------------------------------------------

fn wire_drag_pointerdown(w: &Wiring) {
    let w = w.clone();
    let app = w.app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let Some(target) = ev.target() else {
            return;
        };
        let Some((id, el)) = board::item_id_of(&target) else {
            return;
        };
        ev.prevent_default();
        // Inside the user gesture: construct/resume audio while we may
        w.audio.borrow_mut().warm_up();

        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        if w.drag.borrow_mut().begin(&mut w.board.borrow_mut(), id, pointer) {
            _ = el.class_list().add_1(board::DRAGGING_CLASS);
            log::info!("[drag] begin item {id}");
        }
    }) as Box<dyn FnMut(_)>);
    _ = app.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_drag_pointermove(w: &Wiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let mut drag = w.drag.borrow_mut();
        let Some(id) = drag.active_item() else {
            return;
        };
        ev.prevent_default();

        let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let el = board::element_of(&w.document, id);
        // Live rendered size: scale effects change the footprint
        let item_size = el
            .as_ref()
            .map(|el| el.offset_width() as f32)
            .unwrap_or(ITEM_SIZE);
        let viewport = dom::viewport_size();
        if let Some(pos) = drag.update(&mut w.board.borrow_mut(), pointer, viewport, item_size) {
            if let Some(el) = el {
                board::set_position(&el, pos);
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_drag_end(w: &Wiring) {
    // pointerup/pointercancel anywhere, or the pointer leaving the play
    // area, all end the session
    for (target, event) in [
        (None, "pointerup"),
        (None, "pointercancel"),
        (Some(w.app.clone()), "pointerleave"),
    ] {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            finish_drag(&w);
        }) as Box<dyn FnMut(_)>);
        match target {
            Some(el) => {
                _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            }
            None => {
                if let Some(wnd) = web::window() {
                    _ = wnd
                        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
                }
            }
        }
        closure.forget();
    }
}

/// Release: clear the flag, then apply exactly one effect to the released
/// sticker. A release with nothing held does nothing.
fn finish_drag(w: &Wiring) {
    let released = w.drag.borrow_mut().end(&mut w.board.borrow_mut());
    let Some(id) = released else {
        return;
    };
    log::info!("[drag] release item {id}");
    let Some(el) = board::element_of(&w.document, id) else {
        return;
    };
    _ = el.class_list().remove_1(board::DRAGGING_CLASS);
    effects::apply(
        &w.document,
        &w.app,
        &el,
        id,
        &w.board,
        &mut *w.rng.borrow_mut(),
        &mut *w.audio.borrow_mut(),
    );
}
