// src/behaviors/mod.rs
//! Page behaviors and the registry that activates them.

pub mod attachment_nav;
pub mod metadata_panel;
pub mod time_display;

use web_sys::Document;

use crate::page_config::BehaviorConfig;

use attachment_nav::AttachmentNav;
use metadata_panel::MetadataPanel;

/// A live behavior, retained so its listeners and timers stay registered
/// until page teardown.
pub enum Behavior {
    Panel(MetadataPanel),
    Nav(AttachmentNav),
}

type AttachFn = fn(&Document, &BehaviorConfig) -> Option<Behavior>;

/// Anchor-gated attach table, evaluated exactly once at page-ready. An
/// entry whose anchor matches nothing on the current page is skipped.
const REGISTRY: &[(&str, AttachFn)] = &[
    (attachment_nav::ANCHOR, attach_nav),
    (metadata_panel::ANCHOR, attach_panel),
];

fn attach_nav(document: &Document, config: &BehaviorConfig) -> Option<Behavior> {
    attachment_nav::attach(document, config).map(Behavior::Nav)
}

fn attach_panel(document: &Document, config: &BehaviorConfig) -> Option<Behavior> {
    metadata_panel::attach(document, config).map(Behavior::Panel)
}

/// Everything attached to the current page. Dropping it detaches every
/// listener and cancels every timer and in-flight animation.
pub struct Page {
    behaviors: Vec<Behavior>,
}

impl Page {
    pub fn attach(document: &Document, config: &BehaviorConfig) -> Self {
        time_display::localize_all(document, &config.locale);

        let mut behaviors = Vec::new();
        for (anchor, attach) in REGISTRY {
            if document.query_selector(anchor).ok().flatten().is_none() {
                log::debug!("no {} on this page", anchor);
                continue;
            }
            if let Some(behavior) = attach(document, config) {
                behaviors.push(behavior);
            }
        }
        Self { behaviors }
    }

    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }
}
