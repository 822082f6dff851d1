// src/animate.rs
//! Minimal slide animation over the browser's frame scheduler: one CSS
//! pixel property per element, `swing` easing, and cancel-then-retarget
//! semantics so rapid event bursts never queue motion.

use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::{Rc, Weak};

use gloo::render::{request_animation_frame, AnimationFrame};
use web_sys::HtmlElement;

/// Tweens a single CSS pixel property on a single element.
///
/// The tween tracks the property's logical value itself, so geometry never
/// has to be read back from layout mid-flight. Dropping the tween drops the
/// pending `AnimationFrame` handle, which cancels the scheduled callback.
pub struct PropertyTween {
    inner: Rc<TweenInner>,
}

struct TweenInner {
    el: HtmlElement,
    property: &'static str,
    duration_ms: f64,
    current: Cell<f64>,
    from: Cell<f64>,
    target: Cell<f64>,
    begun_at: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl PropertyTween {
    pub fn new(el: HtmlElement, property: &'static str, duration_ms: f64) -> Self {
        Self {
            inner: Rc::new(TweenInner {
                el,
                property,
                duration_ms,
                current: Cell::new(0.0),
                from: Cell::new(0.0),
                target: Cell::new(0.0),
                begun_at: Cell::new(None),
                frame: RefCell::new(None),
            }),
        }
    }

    /// Cancel any in-flight animation and place the element immediately.
    pub fn jump_to(&self, value: f64) {
        self.inner.frame.borrow_mut().take();
        self.inner.current.set(value);
        self.inner.target.set(value);
        write_px(&self.inner, value);
    }

    /// Animate from the current value to `target`.
    ///
    /// The in-flight frame is dropped before the new one is scheduled, so
    /// the most recent call always determines the final resting position.
    pub fn animate_to(&self, target: f64) {
        let inner = &self.inner;
        inner.frame.borrow_mut().take();

        if inner.duration_ms <= 0.0 || (target - inner.current.get()).abs() < f64::EPSILON {
            self.jump_to(target);
            return;
        }

        inner.from.set(inner.current.get());
        inner.target.set(target);
        inner.begun_at.set(None);
        schedule(inner);
    }

    /// The property's value as of the last written frame.
    pub fn current(&self) -> f64 {
        self.inner.current.get()
    }

    /// Where the tween is headed (equal to `current` when at rest).
    pub fn target(&self) -> f64 {
        self.inner.target.get()
    }
}

fn schedule(inner: &Rc<TweenInner>) {
    // The frame callback holds only a weak reference; dropping the tween
    // mid-flight cancels the animation instead of letting it run detached.
    let weak: Weak<TweenInner> = Rc::downgrade(inner);
    let handle = request_animation_frame(move |timestamp| {
        if let Some(inner) = weak.upgrade() {
            step(&inner, timestamp);
        }
    });
    *inner.frame.borrow_mut() = Some(handle);
}

fn step(inner: &Rc<TweenInner>, timestamp: f64) {
    inner.frame.borrow_mut().take();

    let begun_at = match inner.begun_at.get() {
        Some(t) => t,
        None => {
            inner.begun_at.set(Some(timestamp));
            timestamp
        }
    };

    let progress = ((timestamp - begun_at) / inner.duration_ms).clamp(0.0, 1.0);
    let value = lerp(inner.from.get(), inner.target.get(), swing(progress));
    inner.current.set(value);
    write_px(inner, value);

    if progress < 1.0 {
        schedule(inner);
    }
}

fn write_px(inner: &TweenInner, value: f64) {
    let _ = inner
        .el
        .style()
        .set_property(inner.property, &format!("{}px", value));
}

/// The classic `swing` ease: slow in, slow out.
pub fn swing(progress: f64) -> f64 {
    0.5 - (progress * PI).cos() / 2.0
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
