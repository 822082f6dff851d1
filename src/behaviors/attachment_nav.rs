// src/behaviors/attachment_nav.rs
//! Directional navigation arrows on a single-post attachment: parked
//! off-canvas, slid in while the attachment is hovered, and kept vertically
//! centered against the attachment's live height.

use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use web_sys::{Document, HtmlElement};

use crate::animate::PropertyTween;
use crate::dom;
use crate::geometry::{arrow_out_pos, centered_top, first_measure};
use crate::page_config::BehaviorConfig;

pub const ANCHOR: &str = "#single-post";

/// Hover targets for both arrows. The arrows move in lockstep, so a single
/// pair of offsets covers them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavModel {
    pub x_in: f64,
    pub x_out: f64,
}

impl NavModel {
    pub fn new(resting_in: f64, arrow_width: f64) -> Self {
        Self {
            x_in: resting_in,
            x_out: arrow_out_pos(arrow_width),
        }
    }

    pub fn target(&self, hovering: bool) -> f64 {
        if hovering {
            self.x_in
        } else {
            self.x_out
        }
    }
}

/// One arrow and the tween driving its edge property (`left` for the newer
/// arrow, `right` for the older one).
struct Arrow {
    el: HtmlElement,
    tween: PropertyTween,
}

struct NavShared {
    attachment: HtmlElement,
    arrows: Vec<Arrow>,
    arrow_height: f64,
}

impl NavShared {
    /// Vertically center both arrows against the attachment's current
    /// height. Runs at attach time and on every poll tick thereafter,
    /// because responsive image sources can change the final height well
    /// after the script runs.
    fn recenter(&self) {
        let height = self.attachment.get_bounding_client_rect().height();
        let top = centered_top(height, self.arrow_height);
        for arrow in &self.arrows {
            dom::set_px(&arrow.el, "top", top);
        }
    }
}

/// A live arrow controller. Dropping it detaches the hover listeners and
/// cancels the re-centering interval along with any in-flight slide.
pub struct AttachmentNav {
    _shared: Rc<NavShared>,
    _listeners: Vec<EventListener>,
    _recenter: Interval,
}

/// Wire the arrows up, or `None` when the page has no attachment.
pub fn attach(document: &Document, config: &BehaviorConfig) -> Option<AttachmentNav> {
    let attachment = dom::query(document, "#attachment")?;
    let newer = dom::query(document, ".arrow.newer");
    let older = dom::query(document, ".arrow.older");

    // Either arrow variant may be missing from the markup; geometry falls
    // back to whichever exists, and with neither present the offsets
    // degrade to zero-width no-ops.
    let arrow_width = first_measure(
        newer.as_ref().map(dom::offset_width),
        older.as_ref().map(dom::offset_width),
    );
    let arrow_height = first_measure(
        newer.as_ref().map(dom::offset_height),
        older.as_ref().map(dom::offset_height),
    );
    // The stylesheet's resting inward offset, read before the jump below
    // overrides it.
    let resting_in = first_measure(
        newer.as_ref().and_then(|el| dom::computed_px(el, "left")),
        older.as_ref().and_then(|el| dom::computed_px(el, "right")),
    );

    let model = NavModel::new(resting_in, arrow_width);

    let mut arrows = Vec::new();
    for (el, edge) in [(newer, "left"), (older, "right")] {
        if let Some(el) = el {
            let tween = PropertyTween::new(el.clone(), edge, config.slide_duration_ms);
            // Park off-canvas immediately so the arrows never flash in the
            // wrong position while images are still loading.
            tween.jump_to(model.x_out);
            arrows.push(Arrow { el, tween });
        }
    }

    let shared = Rc::new(NavShared {
        attachment,
        arrows,
        arrow_height,
    });
    shared.recenter();

    let recenter = {
        let shared = Rc::clone(&shared);
        Interval::new(config.recenter_interval_ms, move || shared.recenter())
    };

    let mut listeners = Vec::new();
    let hover_el = shared.attachment.clone();
    for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
        let shared = Rc::clone(&shared);
        listeners.push(EventListener::new(&hover_el, event, move |_| {
            let target = model.target(hovering);
            for arrow in &shared.arrows {
                arrow.tween.animate_to(target);
            }
        }));
    }

    log::debug!(
        "attachment nav attached: {} arrow(s), in {} / out {}",
        shared.arrows.len(),
        model.x_in,
        model.x_out
    );

    Some(AttachmentNav {
        _shared: shared,
        _listeners: listeners,
        _recenter: recenter,
    })
}
