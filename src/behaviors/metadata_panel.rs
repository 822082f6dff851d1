// src/behaviors/metadata_panel.rs
//! The collapsible metadata side-drawer: parked off-canvas behind its pull
//! tab, slid partially in while the post is hovered, and pinned fully open
//! by clicking the tab.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::animate::PropertyTween;
use crate::dom;
use crate::geometry::PanelPositions;
use crate::page_config::BehaviorConfig;

pub const ANCHOR: &str = "#metadata";

/// Pin/hover state machine, separated from the DOM so the transition table
/// is testable on its own.
#[derive(Debug)]
pub struct PanelModel {
    positions: PanelPositions,
    is_open: bool,
}

impl PanelModel {
    pub fn new(positions: PanelPositions) -> Self {
        Self {
            positions,
            is_open: false,
        }
    }

    /// Target offset for a hover transition. `None` while pinned open:
    /// the pin overrides hover entirely.
    pub fn hover_target(&self, entering: bool) -> Option<f64> {
        if self.is_open {
            None
        } else if entering {
            Some(self.positions.hover_in)
        } else {
            Some(self.positions.hidden)
        }
    }

    /// Flip the pin and return the offset to animate toward.
    pub fn toggle(&mut self) -> f64 {
        self.is_open = !self.is_open;
        if self.is_open {
            self.positions.open
        } else {
            self.positions.hover_in
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

struct PanelShared {
    model: RefCell<PanelModel>,
    tween: PropertyTween,
}

/// A live panel controller. Dropping it detaches the hover and click
/// listeners and cancels any in-flight slide.
pub struct MetadataPanel {
    _shared: Rc<PanelShared>,
    _listeners: Vec<EventListener>,
}

/// Wire the panel up, or `None` when the page has no `#metadata` anchor.
pub fn attach(document: &Document, config: &BehaviorConfig) -> Option<MetadataPanel> {
    let panel = dom::query(document, ANCHOR)?;
    let parent = panel
        .parent_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())?;
    let pull_tab = dom::query_within(&panel, ".pull-tab");
    let scroll_wrap = dom::query_within(&panel, ".scroll-wrap");

    // A missing pull tab contributes no width; the panel then simply
    // cannot be pinned.
    let pull_tab_width = pull_tab.as_ref().map(dom::offset_width).unwrap_or(0.0);
    let positions = PanelPositions::compute(
        dom::offset_width(&panel),
        pull_tab_width,
        config.shadow_allowance,
    );

    let tween = PropertyTween::new(panel, "right", config.slide_duration_ms);
    tween.jump_to(positions.hidden);

    // Match the scroll region to the post once its images settle, so the
    // whole metadata table is reachable when the panel is pinned open.
    if let Some(scroll_wrap) = scroll_wrap {
        let parent_for_sync = parent.clone();
        dom::when_images_loaded(&parent, move || {
            dom::set_px(&scroll_wrap, "height", dom::offset_height(&parent_for_sync));
        });
    }

    let shared = Rc::new(PanelShared {
        model: RefCell::new(PanelModel::new(positions)),
        tween,
    });

    let mut listeners = Vec::new();
    for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
        let shared = Rc::clone(&shared);
        listeners.push(EventListener::new(&parent, event, move |_| {
            if let Some(target) = shared.model.borrow().hover_target(entering) {
                shared.tween.animate_to(target);
            }
        }));
    }

    if let Some(pull_tab) = pull_tab {
        let shared = Rc::clone(&shared);
        listeners.push(EventListener::new(&pull_tab, "click", move |_| {
            let target = shared.model.borrow_mut().toggle();
            shared.tween.animate_to(target);
        }));
    }

    log::debug!(
        "metadata panel attached: hover {} / hidden {}",
        positions.hover_in,
        positions.hidden
    );

    Some(MetadataPanel {
        _shared: shared,
        _listeners: listeners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> PanelModel {
        PanelModel::new(PanelPositions::compute(300.0, 40.0, 10.0))
    }

    #[test]
    fn hover_slides_between_in_and_out() {
        let model = model();
        assert_eq!(model.hover_target(true), Some(-310.0));
        assert_eq!(model.hover_target(false), Some(-350.0));
    }

    #[test]
    fn pinned_open_overrides_hover() {
        let mut model = model();
        model.toggle();
        assert!(model.is_open());
        assert_eq!(model.hover_target(true), None);
        assert_eq!(model.hover_target(false), None);
    }

    #[test]
    fn toggling_twice_is_a_full_cycle() {
        let mut model = model();
        let was_open = model.is_open();

        assert_eq!(model.toggle(), 0.0);
        assert_eq!(model.toggle(), -310.0);

        assert_eq!(model.is_open(), was_open);
        // Back to hover-driven targets.
        assert_eq!(model.hover_target(false), Some(-350.0));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_utils::{body, document};
    use wasm_bindgen_test::wasm_bindgen_test;

    fn mount(html: &str) -> HtmlElement {
        let container = document()
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        container.set_inner_html(html);
        body().append_child(&container).unwrap();
        container
    }

    #[wasm_bindgen_test]
    fn absent_panel_is_a_no_op() {
        let container = mount("<article><p>no panel here</p></article>");
        assert!(attach(&document(), &BehaviorConfig::default()).is_none());
        container.remove();
    }

    #[wasm_bindgen_test]
    fn attach_parks_the_panel_hidden_and_click_pins_it() {
        let container = mount(
            "<article>\
               <div id=\"metadata\" style=\"position:absolute; width:300px;\">\
                 <div class=\"pull-tab\" style=\"width:40px;\"></div>\
                 <div class=\"scroll-wrap\"></div>\
               </div>\
             </article>",
        );

        let panel = attach(&document(), &BehaviorConfig::default()).unwrap();
        assert_eq!(panel._shared.tween.current(), -350.0);

        let pull_tab = dom::query(&document(), ".pull-tab").unwrap();
        pull_tab
            .dispatch_event(&web_sys::Event::new("click").unwrap())
            .unwrap();
        assert!(panel._shared.model.borrow().is_open());
        assert_eq!(panel._shared.tween.target(), 0.0);

        pull_tab
            .dispatch_event(&web_sys::Event::new("click").unwrap())
            .unwrap();
        assert!(!panel._shared.model.borrow().is_open());
        assert_eq!(panel._shared.tween.target(), -310.0);

        container.remove();
    }
}
