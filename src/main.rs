// src/main.rs
mod animate;
mod behaviors;
mod dom;
mod geometry;
mod page_config;

use std::cell::RefCell;

use gloo::events::EventListener;
use gloo_utils::{document, window};

use behaviors::Page;
use page_config::BehaviorConfig;

thread_local! {
    // The page's behaviors live here from attach until teardown.
    static PAGE: RefCell<Option<Page>> = RefCell::new(None);
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    // Module scripts can execute before the parser has produced the anchor
    // elements; wait for DOMContentLoaded when that happens.
    if document().ready_state() == "loading" {
        EventListener::once(&document(), "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    let doc = document();
    let config = BehaviorConfig::load(&doc);
    let page = Page::attach(&doc, &config);
    log::info!("windowbox behaviors attached: {}", page.behavior_count());
    PAGE.with(|slot| *slot.borrow_mut() = Some(page));

    // Dropping the page releases every listener, cancels the arrow
    // re-centering interval, and aborts in-flight slides.
    EventListener::once(&window(), "pagehide", |_| {
        PAGE.with(|slot| slot.borrow_mut().take());
    })
    .forget();
}
