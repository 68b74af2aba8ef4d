use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use rand::Rng;
use sticker_core::{
    particle_offsets, pick, split_offsets, Board, EffectKind, ItemId, ParticleStyle,
    COLOR_EFFECT_MS, PARTICLE_LIFETIME_MS, SPLIT_LIFETIME_MS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::AudioFeedback;
use crate::dom;

/// Apply one randomly chosen effect to a just-released sticker. Plays a tone
/// every time, regardless of which kind was drawn.
pub fn apply(
    document: &web::Document,
    app: &web::HtmlElement,
    el: &web::HtmlElement,
    id: ItemId,
    board: &Rc<RefCell<Board>>,
    rng: &mut impl Rng,
    audio: &mut AudioFeedback,
) {
    let spec = pick(rng);
    log::info!("[effect] {} on item {}", spec.name, id);
    audio.play_tone(rng);

    clear_all(el, board, id);
    // Synchronous reflow: re-adding a just-removed class must restart its
    // animation from the beginning.
    let _ = el.offset_width();

    match spec.kind {
        EffectKind::Animation => {
            _ = el.class_list().add_1(spec.name);
            record(board, id, spec.name);
            remove_on_animation_end(el, board, id, spec.name);
        }
        EffectKind::Color => {
            _ = el.class_list().add_1(spec.name);
            record(board, id, spec.name);
            // No animation to end; remove after a fixed delay instead
            let el = el.clone();
            let board = board.clone();
            let name = spec.name;
            dom::set_timeout(COLOR_EFFECT_MS, move || {
                if el.is_connected() {
                    _ = el.class_list().remove_1(name);
                }
                unrecord(&board, id, name);
            });
        }
        EffectKind::Particles(style) => spawn_particles(document, app, el, style, rng),
        EffectKind::Split(count) => spawn_split(document, app, el, count),
    }
}

/// Strip every catalogue class from the element and the item record.
/// Idempotent: removing classes that are not present is a no-op.
fn clear_all(el: &web::HtmlElement, board: &Rc<RefCell<Board>>, id: ItemId) {
    let list = el.class_list();
    for spec in sticker_core::CATALOG {
        _ = list.remove_1(spec.name);
    }
    if let Some(item) = board.borrow_mut().get_mut(id) {
        item.clear_effect();
    }
}

fn record(board: &Rc<RefCell<Board>>, id: ItemId, name: &'static str) {
    if let Some(item) = board.borrow_mut().get_mut(id) {
        item.set_effect(name);
    }
}

/// Clear the record only if this effect is still the active one; a newer
/// application may have replaced it already.
fn unrecord(board: &Rc<RefCell<Board>>, id: ItemId, name: &'static str) {
    if let Some(item) = board.borrow_mut().get_mut(id) {
        if item.active_effect == Some(name) {
            item.clear_effect();
        }
    }
}

/// One-shot animationend listener returning the sticker to its base state
/// after a single playthrough.
fn remove_on_animation_end(
    el: &web::HtmlElement,
    board: &Rc<RefCell<Board>>,
    id: ItemId,
    name: &'static str,
) {
    let target = el.clone();
    let board = board.clone();
    let cb = Closure::once_into_js(move |_ev: web::AnimationEvent| {
        if target.is_connected() {
            _ = target.class_list().remove_1(name);
        }
        unrecord(&board, id, name);
    });
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = el.add_event_listener_with_callback_and_add_event_listener_options(
        "animationend",
        cb.unchecked_ref(),
        &opts,
    );
}

/// Decorative burst from the sticker's center; the sticker itself is
/// untouched. Particles self-remove after their lifetime.
fn spawn_particles(
    document: &web::Document,
    app: &web::HtmlElement,
    el: &web::HtmlElement,
    style: ParticleStyle,
    rng: &mut impl Rng,
) {
    let rect = el.get_bounding_client_rect();
    let origin = Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    );
    for offset in particle_offsets(rng) {
        let Ok(node) = document.create_element("div") else {
            continue;
        };
        _ = node.class_list().add_2("particle", style.class());
        let Ok(particle) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let css = particle.style();
        _ = css.set_property("left", &format!("{}px", origin.x));
        _ = css.set_property("top", &format!("{}px", origin.y));
        _ = css.set_property("--tx", &format!("{}px", offset.x));
        _ = css.set_property("--ty", &format!("{}px", offset.y));
        _ = css.set_property(
            "animation",
            &format!("particle-anim {PARTICLE_LIFETIME_MS}ms ease-out forwards"),
        );
        _ = app.append_child(&particle);

        dom::set_timeout(PARTICLE_LIFETIME_MS, move || {
            if particle.is_connected() {
                particle.remove();
            }
        });
    }
}

/// Hide the sticker and scatter evenly-spaced clones of it; restore the
/// original once all clones have expired.
fn spawn_split(
    document: &web::Document,
    app: &web::HtmlElement,
    el: &web::HtmlElement,
    count: u32,
) {
    let rect = el.get_bounding_client_rect();
    let style = el.style();
    let mask = style.get_property_value("mask-image").unwrap_or_default();
    let mask_webkit = style
        .get_property_value("-webkit-mask-image")
        .unwrap_or_default();
    let background = style
        .get_property_value("background-color")
        .unwrap_or_default();
    _ = style.set_property("opacity", "0");

    for offset in split_offsets(count) {
        let Ok(node) = document.create_element("div") else {
            continue;
        };
        _ = node.class_list().add_1("split-clone");
        let Ok(clone) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let css = clone.style();
        _ = css.set_property("left", &format!("{}px", rect.left()));
        _ = css.set_property("top", &format!("{}px", rect.top()));
        _ = css.set_property("mask-image", &mask);
        _ = css.set_property("-webkit-mask-image", &mask_webkit);
        _ = css.set_property("background-color", &background);
        _ = css.set_property("--tx", &format!("{}px", offset.x));
        _ = css.set_property("--ty", &format!("{}px", offset.y));
        _ = css.set_property(
            "animation",
            &format!("split-anim {SPLIT_LIFETIME_MS}ms ease-out forwards"),
        );
        _ = app.append_child(&clone);

        dom::set_timeout(SPLIT_LIFETIME_MS, move || {
            if clone.is_connected() {
                clone.remove();
            }
        });
    }

    let original = el.clone();
    dom::set_timeout(SPLIT_LIFETIME_MS, move || {
        if original.is_connected() {
            _ = original.style().set_property("opacity", "1");
        }
    });
}
