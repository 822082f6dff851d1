// src/page_config.rs
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional embedded JSON block a page can use to tune the
/// behaviors: `<script type="application/json" id="behavior-config">`.
pub const CONFIG_ELEMENT_ID: &str = "behavior-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Box-shadow bleed kept off-screen along with the panel body.
    pub shadow_allowance: f64,
    /// Duration of panel and arrow slides.
    pub slide_duration_ms: f64,
    /// Period of the arrow re-centering poll.
    pub recenter_interval_ms: u32,
    /// Locale used when rewriting `time` elements.
    pub locale: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            shadow_allowance: 10.0,
            slide_duration_ms: 400.0,
            recenter_interval_ms: 1_000,
            locale: String::from("en-US"),
        }
    }
}

impl BehaviorConfig {
    /// Read the page's embedded config block, falling back to defaults when
    /// the block is absent or malformed. Never fatal.
    pub fn load(document: &Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        match raw {
            Some(text) if !text.trim().is_empty() => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}
