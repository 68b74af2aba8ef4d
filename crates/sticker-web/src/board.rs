use glam::Vec2;
use sticker_core::{Item, ItemId, ITEM_SIZE};
use wasm_bindgen::JsCast;
use web_sys as web;

pub const ITEM_CLASS: &str = "user-item";
pub const DRAGGING_CLASS: &str = "dragging";
const ITEM_ID_ATTR: &str = "data-item-id";

/// Materialize a sticker as a DOM element: a colored square masked by the
/// exported drawing, absolutely positioned inside the play area.
pub fn create_element(
    document: &web::Document,
    app: &web::HtmlElement,
    item: &Item,
) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    el.class_list().add_1(ITEM_CLASS).ok()?;
    el.set_attribute(ITEM_ID_ATTR, &item.id.to_string()).ok()?;
    let html: web::HtmlElement = el.dyn_into().ok()?;

    let style = html.style();
    _ = style.set_property("width", &format!("{ITEM_SIZE}px"));
    _ = style.set_property("height", &format!("{ITEM_SIZE}px"));
    _ = style.set_property("background-color", &item.color.css());
    if !item.mask_url.is_empty() {
        let mask = format!("url({})", item.mask_url);
        _ = style.set_property("-webkit-mask-image", &mask);
        _ = style.set_property("mask-image", &mask);
    }
    set_position(&html, item.pos);

    _ = app.append_child(&html);
    Some(html)
}

pub fn set_position(el: &web::HtmlElement, pos: Vec2) {
    let style = el.style();
    _ = style.set_property("left", &format!("{}px", pos.x));
    _ = style.set_property("top", &format!("{}px", pos.y));
}

/// Resolve an event target to a sticker, if it is one.
pub fn item_id_of(target: &web::EventTarget) -> Option<(ItemId, web::HtmlElement)> {
    let el = target.dyn_ref::<web::Element>()?;
    if !el.class_list().contains(ITEM_CLASS) {
        return None;
    }
    let id = el.get_attribute(ITEM_ID_ATTR)?.parse().ok()?;
    Some((id, el.clone().dyn_into().ok()?))
}

/// Look a sticker's element back up by id. `None` once it has been detached.
pub fn element_of(document: &web::Document, id: ItemId) -> Option<web::HtmlElement> {
    document
        .query_selector(&format!("[{ITEM_ID_ATTR}=\"{id}\"]"))
        .ok()
        .flatten()?
        .dyn_into()
        .ok()
}
