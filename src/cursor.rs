//! Custom cursor overlay: a dot that snaps to the pointer and a ring that
//! trails it. Only mounts on hover-capable devices; touch-only hosts render
//! nothing and attach no listeners.

/// Latest pointer coordinates and button/hover state. Owned by the cursor
/// overlay for its lifetime and overwritten in place on every device event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub pressed: bool,
    pub hovering: bool,
}

impl PointerState {
    pub fn moved(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Returns true when the pressed flag actually changed.
    pub fn set_pressed(&mut self, pressed: bool) -> bool {
        let changed = self.pressed != pressed;
        self.pressed = pressed;
        changed
    }

    /// Returns true when the hover flag actually changed.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        let changed = self.hovering != hovering;
        self.hovering = hovering;
        changed
    }
}

#[cfg(target_arch = "wasm32")]
mod overlay {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, Event, HtmlElement, MouseEvent};
    use yew::prelude::*;

    use super::PointerState;
    use crate::driver::{self, Motion, TargetHandle};
    use crate::motion::{Easing, Property, Rgba, TweenSpec, Value};

    const PRIMARY: Rgba = Rgba::new(255.0, 46.0, 99.0, 1.0);
    const DOT_HOVER_TINT: Rgba = Rgba::new(255.0, 255.0, 255.0, 1.0);
    const RING_REST_BORDER: Rgba = Rgba::new(255.0, 46.0, 99.0, 0.3);

    const RING_LAG_SECS: f64 = 0.15;
    const HOVER_SECS: f64 = 0.3;
    const PRESS_SECS: f64 = 0.1;
    const DOT_HOVER_SCALE: f64 = 2.0;
    const RING_HOVER_SCALE: f64 = 1.5;
    const PRESS_SCALE: f64 = 0.8;

    /// Hover signals are delegated: one document listener plus an ancestor
    /// query, instead of wiring every interactive node.
    const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, [role=\"button\"]";

    struct CursorRuntime {
        dot: TargetHandle,
        ring: TargetHandle,
        _listeners: Vec<EventListener>,
    }

    impl Drop for CursorRuntime {
        fn drop(&mut self) {
            self.dot.release();
            self.ring.release();
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                let _ = body.class_list().remove_1("custom-cursor-active");
            }
        }
    }

    fn interactive_ancestor(event: &Event) -> Option<Element> {
        let element = event.target()?.dyn_into::<Element>().ok()?;
        element.closest(INTERACTIVE_SELECTOR).ok().flatten()
    }

    fn hover_enter(dot: &TargetHandle, ring: &TargetHandle) {
        dot.play(TweenSpec::to(
            vec![
                (Property::Scale, Value::Scalar(DOT_HOVER_SCALE)),
                (Property::Background, Value::Color(DOT_HOVER_TINT)),
            ],
            HOVER_SECS,
        ));
        ring.play(TweenSpec::to(
            vec![
                (Property::Scale, Value::Scalar(RING_HOVER_SCALE)),
                (Property::BorderColor, Value::Color(PRIMARY)),
            ],
            HOVER_SECS,
        ));
    }

    fn hover_leave(dot: &TargetHandle, ring: &TargetHandle) {
        dot.play(TweenSpec::to(
            vec![
                (Property::Scale, Value::Scalar(1.0)),
                (Property::Background, Value::Color(PRIMARY)),
            ],
            HOVER_SECS,
        ));
        ring.play(TweenSpec::to(
            vec![
                (Property::Scale, Value::Scalar(1.0)),
                (Property::BorderColor, Value::Color(RING_REST_BORDER)),
            ],
            HOVER_SECS,
        ));
    }

    fn press(dot: &TargetHandle, ring: &TargetHandle) {
        for handle in [dot, ring] {
            handle.play(TweenSpec::to(
                vec![(Property::Scale, Value::Scalar(PRESS_SCALE))],
                PRESS_SECS,
            ));
        }
    }

    fn release_press(dot: &TargetHandle, ring: &TargetHandle) {
        for handle in [dot, ring] {
            handle.play(TweenSpec::to(
                vec![(Property::Scale, Value::Scalar(1.0))],
                PRESS_SECS,
            ));
        }
    }

    fn attach(motion: &Motion, dot_el: HtmlElement, ring_el: HtmlElement) -> Option<CursorRuntime> {
        let document = web_sys::window()?.document()?;
        if let Some(body) = document.body() {
            let _ = body.class_list().add_1("custom-cursor-active");
        }

        let dot = motion.register_seeded(&dot_el, &[(Property::Background, Value::Color(PRIMARY))]);
        let ring = motion.register_seeded(
            &ring_el,
            &[(Property::BorderColor, Value::Color(RING_REST_BORDER))],
        );
        let state = Rc::new(RefCell::new(PointerState::default()));

        let mut listeners = Vec::with_capacity(5);

        {
            let dot = dot.clone();
            let ring = ring.clone();
            let state = Rc::clone(&state);
            listeners.push(EventListener::new(&document, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let pointer = {
                    let mut state = state.borrow_mut();
                    state.moved(f64::from(event.client_x()), f64::from(event.client_y()));
                    *state
                };

                // Dot snaps to the tracked coordinates; the ring chases them
                // with a short lag for the trailing feel.
                dot.play(
                    TweenSpec::to(
                        vec![
                            (Property::TranslateX, Value::Scalar(pointer.x)),
                            (Property::TranslateY, Value::Scalar(pointer.y)),
                        ],
                        0.0,
                    )
                    .with_easing(Easing::Linear),
                );
                ring.play(TweenSpec::to(
                    vec![
                        (Property::TranslateX, Value::Scalar(pointer.x)),
                        (Property::TranslateY, Value::Scalar(pointer.y)),
                    ],
                    RING_LAG_SECS,
                ));
            }));
        }

        {
            let dot = dot.clone();
            let ring = ring.clone();
            let state = Rc::clone(&state);
            listeners.push(EventListener::new(&document, "mousedown", move |_event| {
                if state.borrow_mut().set_pressed(true) {
                    press(&dot, &ring);
                }
            }));
        }

        {
            let dot = dot.clone();
            let ring = ring.clone();
            let state = Rc::clone(&state);
            listeners.push(EventListener::new(&document, "mouseup", move |_event| {
                if state.borrow_mut().set_pressed(false) {
                    release_press(&dot, &ring);
                }
            }));
        }

        {
            let dot = dot.clone();
            let ring = ring.clone();
            let state = Rc::clone(&state);
            listeners.push(EventListener::new(&document, "mouseover", move |event| {
                let inside = interactive_ancestor(event).is_some();
                if state.borrow_mut().set_hovering(inside) {
                    if inside {
                        hover_enter(&dot, &ring);
                    } else {
                        hover_leave(&dot, &ring);
                    }
                }
            }));
        }

        {
            let dot = dot.clone();
            let ring = ring.clone();
            let state = Rc::clone(&state);
            listeners.push(EventListener::new(&document, "mouseout", move |event| {
                // relatedTarget is absent when the pointer leaves the page.
                let left_page = event
                    .dyn_ref::<MouseEvent>()
                    .is_some_and(|event| event.related_target().is_none());
                if left_page && state.borrow_mut().set_hovering(false) {
                    hover_leave(&dot, &ring);
                }
            }));
        }

        Some(CursorRuntime {
            dot,
            ring,
            _listeners: listeners,
        })
    }

    #[function_component(CustomCursor)]
    pub fn custom_cursor() -> Html {
        let motion = use_context::<Motion>();
        // Capability is queried synchronously once per mount and never
        // re-evaluated; a mid-session input change is out of scope.
        let enabled = use_state(driver::supports_hover);
        let dot_ref = use_node_ref();
        let ring_ref = use_node_ref();

        {
            let dot_ref = dot_ref.clone();
            let ring_ref = ring_ref.clone();
            use_effect_with((motion.clone(), *enabled), move |(motion, enabled)| {
                let mut runtime = None;
                if *enabled {
                    if let (Some(motion), Some(dot), Some(ring)) = (
                        motion.clone(),
                        dot_ref.cast::<HtmlElement>(),
                        ring_ref.cast::<HtmlElement>(),
                    ) {
                        runtime = attach(&motion, dot, ring);
                    }
                } else {
                    log::info!("hover-capable pointer unavailable, custom cursor disabled");
                }
                move || drop(runtime)
            });
        }

        if !*enabled {
            return Html::default();
        }

        html! {
            <>
                <div ref={dot_ref} class="cursor-dot" aria-hidden="true"></div>
                <div ref={ring_ref} class="cursor-ring" aria-hidden="true"></div>
            </>
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use overlay::CustomCursor;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moved_overwrites_coordinates_in_place() {
        let mut state = PointerState::default();
        state.moved(120.0, 48.0);
        state.moved(90.0, 300.0);
        assert_eq!((state.x, state.y), (90.0, 300.0));
    }

    #[test]
    fn set_pressed_reports_transitions_only() {
        let mut state = PointerState::default();
        assert!(state.set_pressed(true));
        assert!(!state.set_pressed(true));
        assert!(state.set_pressed(false));
        assert!(!state.set_pressed(false));
    }

    #[test]
    fn set_hovering_reports_transitions_only() {
        let mut state = PointerState::default();
        assert!(state.set_hovering(true));
        assert!(!state.set_hovering(true));
        assert!(state.set_hovering(false));
    }
}
