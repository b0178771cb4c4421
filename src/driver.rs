//! DOM half of the animation driver.
//!
//! Owns the element registry and feeds the target-independent tween core
//! (`crate::motion`) with frame timestamps. Time-driven tweens sample once
//! per display refresh via `requestAnimationFrame`; scroll-bound bindings
//! recompute on every window scroll/resize signal instead. Controllers hold
//! a `TargetHandle` per element and release it on unmount, which cancels
//! everything tied to the target.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::{Element, HtmlElement};

use crate::motion::{scrub_progress, Property, TargetId, Tween, TweenBank, TweenSpec, Update, Value};

/// Whether the device has a fine, hover-capable pointer. Absence of the
/// media-query mechanism reads as `false`: no cursor enhancement rather than
/// a crash on exotic hosts.
pub fn supports_hover() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(hover: hover)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

struct TargetEntry {
    element: HtmlElement,
    current: HashMap<Property, Value>,
}

struct ScrubBinding {
    target: TargetId,
    property: Property,
    from: Value,
    to: Value,
    trigger: Element,
}

struct Inner {
    bank: RefCell<TweenBank>,
    targets: RefCell<HashMap<TargetId, TargetEntry>>,
    scrubs: RefCell<Vec<ScrubBinding>>,
    next_id: Cell<u64>,
    frame: RefCell<Option<AnimationFrame>>,
    scroll_listeners: RefCell<Vec<EventListener>>,
}

/// Shared driver handle, provided to components through Yew context.
#[derive(Clone)]
pub struct Motion {
    inner: Rc<Inner>,
}

impl PartialEq for Motion {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Motion {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                bank: RefCell::new(TweenBank::new()),
                targets: RefCell::new(HashMap::new()),
                scrubs: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                frame: RefCell::new(None),
                scroll_listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn register(&self, element: &HtmlElement) -> TargetHandle {
        self.register_seeded(element, &[])
    }

    /// Registers an element, immediately applying `seeds` so the target
    /// starts in its pre-animation visual state (hidden, shifted, tinted).
    pub fn register_seeded(&self, element: &HtmlElement, seeds: &[(Property, Value)]) -> TargetHandle {
        let id = TargetId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);

        let mut entry = TargetEntry {
            element: element.clone(),
            current: HashMap::new(),
        };
        for (property, value) in seeds {
            entry.current.insert(*property, *value);
        }
        write_styles(&entry);
        self.inner.targets.borrow_mut().insert(id, entry);

        TargetHandle {
            id,
            driver: self.clone(),
        }
    }

    fn play(&self, id: TargetId, spec: TweenSpec) {
        let now = now_ms();
        {
            let targets = self.inner.targets.borrow();
            // Released or never-mounted target: the request is a no-op.
            let Some(entry) = targets.get(&id) else { return };
            let mut bank = self.inner.bank.borrow_mut();
            for (property, to) in &spec.properties {
                let from = entry
                    .current
                    .get(property)
                    .copied()
                    .unwrap_or_else(|| property.resting());
                bank.play(id, *property, Tween::from_spec(from, *to, now, &spec));
            }
        }
        self.ensure_frame();
    }

    fn scrub(&self, id: TargetId, property: Property, to: Value, trigger: &Element) {
        {
            let targets = self.inner.targets.borrow();
            let Some(entry) = targets.get(&id) else { return };
            let from = entry
                .current
                .get(&property)
                .copied()
                .unwrap_or_else(|| property.resting());
            let mut scrubs = self.inner.scrubs.borrow_mut();
            scrubs.retain(|binding| !(binding.target == id && binding.property == property));
            scrubs.push(ScrubBinding {
                target: id,
                property,
                from,
                to,
                trigger: trigger.clone(),
            });
        }
        self.ensure_scroll_listeners();
        self.apply_scrubs();
    }

    fn release(&self, id: TargetId) {
        self.inner.bank.borrow_mut().cancel_target(id);
        self.inner.scrubs.borrow_mut().retain(|binding| binding.target != id);
        self.inner.targets.borrow_mut().remove(&id);
        if self.inner.scrubs.borrow().is_empty() {
            self.inner.scroll_listeners.borrow_mut().clear();
        }
    }

    fn ensure_frame(&self) {
        if self.inner.frame.borrow().is_some() {
            return;
        }
        let driver = self.clone();
        *self.inner.frame.borrow_mut() = Some(request_animation_frame(move |timestamp| {
            driver.on_frame(timestamp);
        }));
    }

    fn on_frame(&self, timestamp: f64) {
        self.inner.frame.borrow_mut().take();
        let updates = self.inner.bank.borrow_mut().advance(timestamp);
        self.apply_updates(&updates);
        if !self.inner.bank.borrow().is_idle() {
            self.ensure_frame();
        }
    }

    fn apply_updates(&self, updates: &[Update]) {
        if updates.is_empty() {
            return;
        }
        let mut targets = self.inner.targets.borrow_mut();
        for update in updates {
            if let Some(entry) = targets.get_mut(&update.target) {
                entry.current.insert(update.property, update.value);
            }
        }
        let mut touched: Vec<TargetId> = updates.iter().map(|update| update.target).collect();
        touched.sort_unstable();
        touched.dedup();
        for id in touched {
            if let Some(entry) = targets.get(&id) {
                write_styles(entry);
            }
        }
    }

    fn apply_scrubs(&self) {
        let viewport = viewport_height();
        let mut targets = self.inner.targets.borrow_mut();
        let scrubs = self.inner.scrubs.borrow();
        for binding in scrubs.iter() {
            let rect = binding.trigger.get_bounding_client_rect();
            let progress = scrub_progress(rect.top(), rect.height(), viewport);
            let value = binding.from.lerp(binding.to, progress);
            if let Some(entry) = targets.get_mut(&binding.target) {
                entry.current.insert(binding.property, value);
                write_styles(entry);
            }
        }
    }

    fn ensure_scroll_listeners(&self) {
        if !self.inner.scroll_listeners.borrow().is_empty() {
            return;
        }
        let Some(window) = web_sys::window() else { return };
        let mut listeners = Vec::with_capacity(2);
        for event in ["scroll", "resize"] {
            let driver = self.clone();
            listeners.push(EventListener::new(&window, event, move |_event| {
                driver.apply_scrubs();
            }));
        }
        *self.inner.scroll_listeners.borrow_mut() = listeners;
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one registered animation target.
#[derive(Clone)]
pub struct TargetHandle {
    id: TargetId,
    driver: Motion,
}

impl TargetHandle {
    /// Starts (or supersedes) a time-driven interpolation toward the
    /// request's destination values, from wherever the properties currently
    /// are.
    pub fn play(&self, spec: TweenSpec) {
        self.driver.play(self.id, spec);
    }

    /// Binds a property to scroll progress of `trigger` instead of time.
    pub fn scrub(&self, property: Property, to: Value, trigger: &Element) {
        self.driver.scrub(self.id, property, to, trigger);
    }

    /// Cancels every animation tied to this target and forgets the element.
    pub fn release(&self) {
        self.driver.release(self.id);
    }
}

fn write_styles(entry: &TargetEntry) {
    let style = entry.element.style();

    let drives_transform = entry.current.keys().any(|property| {
        matches!(
            property,
            Property::TranslateX | Property::TranslateY | Property::Scale | Property::Rotate
        )
    });
    if drives_transform {
        let scalar = |property: Property, default: f64| match entry.current.get(&property) {
            Some(Value::Scalar(value)) => *value,
            _ => default,
        };
        let transform = format!(
            "translate3d({}px, {}px, 0) scale({}) rotate({}deg)",
            scalar(Property::TranslateX, 0.0),
            scalar(Property::TranslateY, 0.0),
            scalar(Property::Scale, 1.0),
            scalar(Property::Rotate, 0.0),
        );
        let _ = style.set_property("transform", &transform);
    }

    if let Some(Value::Scalar(opacity)) = entry.current.get(&Property::Opacity) {
        let _ = style.set_property("opacity", &format!("{}", opacity.clamp(0.0, 1.0)));
    }
    if let Some(Value::Scalar(width)) = entry.current.get(&Property::Width) {
        let _ = style.set_property("width", &format!("{}%", width.max(0.0)));
    }
    if let Some(Value::Color(color)) = entry.current.get(&Property::Background) {
        let _ = style.set_property("background-color", &color.css());
    }
    if let Some(Value::Color(color)) = entry.current.get(&Property::BorderColor) {
        let _ = style.set_property("border-color", &color.css());
    }
}
