//! Scroll-triggered reveals. Each section transitions from its hidden preset
//! to rest the first time its trigger region intersects the viewport, and
//! never re-hides: re-animating on every scroll pass is jarring, so the
//! transition is a one-shot latch per section instance.

/// Visibility of a revealable section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// One-shot latch over [`RevealState`]: `Hidden -> Visible` is the only
/// transition and it happens at most once.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    /// Trips the latch. Returns true only on the transition.
    pub fn fire(&mut self) -> bool {
        match self.state {
            RevealState::Hidden => {
                self.state = RevealState::Visible;
                true
            }
            RevealState::Visible => false,
        }
    }
}

#[cfg(test)]
impl RevealLatch {
    fn state(&self) -> RevealState {
        self.state
    }

    fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }
}

/// Seconds a section takes to settle into view.
pub const REVEAL_SECS: f64 = 0.8;
/// Hidden preset: shifted down and transparent.
pub const HIDDEN_SHIFT_PX: f64 = 60.0;
/// Delay step between staggered children of one reveal.
pub const STAGGER_STEP_SECS: f64 = 0.2;

/// Delay offset for the `index`-th child of a staggered reveal.
pub fn stagger_delay(index: usize, step: f64) -> f64 {
    index as f64 * step
}

#[cfg(target_arch = "wasm32")]
mod observer {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{
        Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use super::RevealLatch;

    /// RAII wrapper around an `IntersectionObserver`; dropping it disconnects.
    pub struct RevealObserver {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    }

    impl Drop for RevealObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    /// Watches `element` and invokes `on_enter` the first time it intersects
    /// the viewport, then disconnects. If the observer mechanism is
    /// unavailable the content reveals immediately: decoration degrades,
    /// the page never breaks.
    pub fn observe_once(
        element: &Element,
        root_margin: &str,
        mut on_enter: impl FnMut() + 'static,
    ) -> Option<RevealObserver> {
        let mut latch = RevealLatch::default();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_ref::<IntersectionObserverEntry>()
                        .is_some_and(|entry| entry.is_intersecting())
                });
                if intersecting && latch.fire() {
                    observer.disconnect();
                    on_enter();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init);
        match observer {
            Ok(observer) => {
                observer.observe(element);
                Some(RevealObserver {
                    observer,
                    _callback: callback,
                })
            }
            Err(_) => {
                on_enter();
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use observer::{observe_once, RevealObserver};

#[cfg(target_arch = "wasm32")]
mod components {
    use web_sys::HtmlElement;
    use yew::prelude::*;

    use super::{observe_once, RevealObserver, HIDDEN_SHIFT_PX, REVEAL_SECS};
    use crate::driver::{self, Motion, TargetHandle};
    use crate::motion::{Property, TweenSpec, Value};

    #[derive(Properties, PartialEq)]
    pub struct RevealProps {
        #[prop_or_default]
        pub id: Option<AttrValue>,
        #[prop_or_default]
        pub class: Classes,
        #[prop_or(AttrValue::Static("section"))]
        pub tag: AttrValue,
        #[prop_or_default]
        pub delay: f64,
        #[prop_or(REVEAL_SECS)]
        pub duration: f64,
        #[prop_or_default]
        pub shift_x: f64,
        #[prop_or(HIDDEN_SHIFT_PX)]
        pub shift_y: f64,
        /// Trigger inset; negative values hold the reveal until the section
        /// is well inside the viewport.
        #[prop_or(AttrValue::Static("-100px"))]
        pub margin: AttrValue,
        #[prop_or_default]
        pub children: Html,
    }

    /// Wraps a block that stays hidden until it first scrolls into view.
    #[function_component(Reveal)]
    pub fn reveal(props: &RevealProps) -> Html {
        let motion = use_context::<Motion>();
        let node_ref = use_node_ref();
        let animate = use_state(|| !driver::prefers_reduced_motion());

        {
            let node_ref = node_ref.clone();
            let delay = props.delay;
            let duration = props.duration;
            let shift_x = props.shift_x;
            let shift_y = props.shift_y;
            let margin = props.margin.clone();
            use_effect_with((motion.clone(), *animate), move |(motion, animate)| {
                let mut runtime: Option<(TargetHandle, Option<RevealObserver>)> = None;
                if *animate {
                    if let (Some(motion), Some(element)) =
                        (motion.clone(), node_ref.cast::<HtmlElement>())
                    {
                        let handle = motion.register_seeded(
                            &element,
                            &[
                                (Property::Opacity, Value::Scalar(0.0)),
                                (Property::TranslateX, Value::Scalar(shift_x)),
                                (Property::TranslateY, Value::Scalar(shift_y)),
                            ],
                        );
                        let play = handle.clone();
                        let observer = observe_once(&element, &margin, move || {
                            play.play(
                                TweenSpec::to(
                                    vec![
                                        (Property::Opacity, Value::Scalar(1.0)),
                                        (Property::TranslateX, Value::Scalar(0.0)),
                                        (Property::TranslateY, Value::Scalar(0.0)),
                                    ],
                                    duration,
                                )
                                .with_delay(delay),
                            );
                        });
                        runtime = Some((handle, observer));
                    }
                }
                move || {
                    if let Some((handle, _observer)) = runtime {
                        handle.release();
                    }
                }
            });
        }

        html! {
            <@{props.tag.to_string()}
                ref={node_ref}
                id={props.id.clone()}
                class={classes!("reveal", props.class.clone())}
            >
                { props.children.clone() }
            </@>
        }
    }

    #[derive(Properties, PartialEq)]
    pub struct ImageRevealProps {
        #[prop_or_default]
        pub class: Classes,
        #[prop_or_default]
        pub delay: f64,
        #[prop_or_default]
        pub children: Html,
    }

    const IMAGE_HIDDEN_SCALE: f64 = 0.8;
    const IMAGE_REVEAL_SECS: f64 = 0.8;

    /// Scale-and-fade reveal for imagery, triggered slightly before the
    /// image fully enters the viewport.
    #[function_component(ImageReveal)]
    pub fn image_reveal(props: &ImageRevealProps) -> Html {
        let motion = use_context::<Motion>();
        let node_ref = use_node_ref();
        let animate = use_state(|| !driver::prefers_reduced_motion());

        {
            let node_ref = node_ref.clone();
            let delay = props.delay;
            use_effect_with((motion.clone(), *animate), move |(motion, animate)| {
                let mut runtime: Option<(TargetHandle, Option<RevealObserver>)> = None;
                if *animate {
                    if let (Some(motion), Some(element)) =
                        (motion.clone(), node_ref.cast::<HtmlElement>())
                    {
                        let handle = motion.register_seeded(
                            &element,
                            &[
                                (Property::Opacity, Value::Scalar(0.0)),
                                (Property::Scale, Value::Scalar(IMAGE_HIDDEN_SCALE)),
                            ],
                        );
                        let play = handle.clone();
                        let observer = observe_once(&element, "-50px", move || {
                            play.play(
                                TweenSpec::to(
                                    vec![
                                        (Property::Opacity, Value::Scalar(1.0)),
                                        (Property::Scale, Value::Scalar(1.0)),
                                    ],
                                    IMAGE_REVEAL_SECS,
                                )
                                .with_delay(delay),
                            );
                        });
                        runtime = Some((handle, observer));
                    }
                }
                move || {
                    if let Some((handle, _observer)) = runtime {
                        handle.release();
                    }
                }
            });
        }

        html! {
            <div ref={node_ref} class={classes!("image-reveal", props.class.clone())}>
                { props.children.clone() }
            </div>
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use components::{ImageReveal, ImageRevealProps, Reveal, RevealProps};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_exactly_once() {
        let mut latch = RevealLatch::default();
        assert_eq!(latch.state(), RevealState::Hidden);
        assert!(latch.fire());
        assert!(latch.is_visible());
        assert!(!latch.fire());
        assert!(!latch.fire());
        assert!(latch.is_visible());
    }

    #[test]
    fn visible_state_never_reverts() {
        let mut latch = RevealLatch::default();
        latch.fire();
        for _ in 0..10 {
            latch.fire();
            assert_eq!(latch.state(), RevealState::Visible);
        }
    }

    #[test]
    fn stagger_delays_step_linearly() {
        assert_eq!(stagger_delay(0, STAGGER_STEP_SECS), 0.0);
        assert!((stagger_delay(1, STAGGER_STEP_SECS) - 0.2).abs() < 1e-9);
        assert!((stagger_delay(4, STAGGER_STEP_SECS) - 0.8).abs() < 1e-9);
    }
}
