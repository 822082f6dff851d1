// src/behaviors/time_display.rs
//! Rewrites machine-readable `time` elements into localized text, mainly
//! for the side effect of converting timestamps to the viewer's time zone.

use js_sys::{Date, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

/// Rewrite every `time[datetime]` on the page as
/// `"Month D, YYYY at H:MM TZ"`. Elements whose attribute does not parse
/// as a date are left untouched.
pub fn localize_all(document: &Document, locale: &str) {
    let list = match document.query_selector_all("time[datetime]") {
        Ok(list) => list,
        Err(_) => return,
    };

    let mut rewritten = 0u32;
    for i in 0..list.length() {
        let el = match list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            Some(el) => el,
            None => continue,
        };
        let stamp = match el.get_attribute("datetime") {
            Some(stamp) => stamp,
            None => continue,
        };

        let date = Date::new(&JsValue::from_str(&stamp));
        if date.get_time().is_nan() {
            continue;
        }

        let day = String::from(date.to_locale_string(locale, &date_options()));
        let time = String::from(date.to_locale_string(locale, &time_options()));
        el.set_text_content(Some(&format!("{} at {}", day, time)));
        rewritten += 1;
    }

    if rewritten > 0 {
        log::debug!("localized {} timestamp(s)", rewritten);
    }
}

fn date_options() -> JsValue {
    options(&[("month", "long"), ("day", "numeric"), ("year", "numeric")])
}

fn time_options() -> JsValue {
    options(&[
        ("hour", "numeric"),
        ("minute", "2-digit"),
        ("timeZoneName", "short"),
    ])
}

fn options(pairs: &[(&str, &str)]) -> JsValue {
    let object = Object::new();
    for (key, value) in pairs {
        let _ = Reflect::set(&object, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    object.into()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_utils::{body, document};
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn valid_timestamps_are_rewritten_and_invalid_left_alone() {
        let container = document().create_element("div").unwrap();
        container.set_inner_html(
            "<time datetime=\"2015-06-01T12:00:00Z\">raw</time>\
             <time datetime=\"not a date\">untouched</time>",
        );
        body().append_child(&container).unwrap();

        localize_all(&document(), "en-US");

        let list = document().query_selector_all("time").unwrap();
        let first = list.item(0).unwrap().text_content().unwrap();
        let second = list.item(1).unwrap().text_content().unwrap();
        assert!(first.contains("June") && first.contains("2015") && first.contains(" at "));
        assert_eq!(second, "untouched");

        container.remove();
    }
}
