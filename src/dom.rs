// src/dom.rs
//! Thin boundary to the page: typed element queries, geometry reads, CSS
//! pixel writes, and image-load notification. Absent elements are a normal
//! outcome everywhere here, never an error.

use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

/// First match for `selector` in the document, as an `HtmlElement`.
pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// First match for `selector` under `root`.
pub fn query_within(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn offset_width(el: &HtmlElement) -> f64 {
    el.offset_width() as f64
}

pub fn offset_height(el: &HtmlElement) -> f64 {
    el.offset_height() as f64
}

/// A computed-style pixel value, e.g. the stylesheet's resting `left` for
/// an arrow. `None` for `auto`, keywords, or anything non-pixel.
pub fn computed_px(el: &HtmlElement, property: &str) -> Option<f64> {
    let style = web_sys::window()?.get_computed_style(el).ok().flatten()?;
    let raw = style.get_property_value(property).ok()?;
    parse_px(&raw)
}

/// Parse `"280px"`-style values.
pub fn parse_px(raw: &str) -> Option<f64> {
    raw.trim().strip_suffix("px")?.trim().parse().ok()
}

pub fn set_px(el: &HtmlElement, property: &str, value: f64) {
    let _ = el.style().set_property(property, &format!("{}px", value));
}

/// Every `img` descendant of `root`.
pub fn images_under(root: &Element) -> Vec<HtmlImageElement> {
    let mut images = Vec::new();
    if let Ok(list) = root.query_selector_all("img") {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(img) = node.dyn_into::<HtmlImageElement>() {
                    images.push(img);
                }
            }
        }
    }
    images
}

/// Invoke `callback` once every image under `root` has settled. Images
/// that are already complete count immediately; the rest settle on either
/// `load` or `error`. With nothing pending the callback runs synchronously.
pub fn when_images_loaded<F>(root: &Element, callback: F)
where
    F: Fn() + 'static,
{
    let pending: Vec<HtmlImageElement> = images_under(root)
        .into_iter()
        .filter(|img| !img.complete())
        .collect();

    if pending.is_empty() {
        callback();
        return;
    }

    let callback = Rc::new(callback);
    let remaining = Rc::new(Cell::new(pending.len()));

    for img in pending {
        // An image fires load or error, never both, so each one settles
        // the counter exactly once.
        for event in ["load", "error"] {
            let callback = Rc::clone(&callback);
            let remaining = Rc::clone(&remaining);
            EventListener::once(&img, event, move |_| {
                remaining.set(remaining.get().saturating_sub(1));
                if remaining.get() == 0 {
                    callback();
                }
            })
            .forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_px_accepts_pixel_values() {
        assert_eq!(parse_px("280px"), Some(280.0));
        assert_eq!(parse_px("0px"), Some(0.0));
        assert_eq!(parse_px(" -310.5px "), Some(-310.5));
    }

    #[test]
    fn parse_px_rejects_non_pixel_values() {
        assert_eq!(parse_px(""), None);
        assert_eq!(parse_px("auto"), None);
        assert_eq!(parse_px("50%"), None);
        assert_eq!(parse_px("px"), None);
    }
}
