//! Decorative background motion: glass shapes drifting on an endless yoyo
//! float, each with a scroll-scrubbed parallax shift, plus the floating
//! wrapper used for portrait imagery. All of it is skipped when the visitor
//! prefers reduced motion.

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::driver::{self, Motion, TargetHandle};
use crate::motion::{Easing, Property, TweenSpec, Value};

const FLOAT_RISE_PX: f64 = -30.0;
const FLOAT_BASE_SECS: f64 = 3.0;
const PARALLAX_BASE_SPEED: f64 = 0.5;
const PARALLAX_SPEED_STEP: f64 = 0.3;

/// Appearance class and resting tilt per shape; the float and parallax
/// tweens are attached per index on top of these. Tilt is seeded through the
/// driver because it owns the inline transform.
const SHAPES: [(&str, f64); 5] = [
    ("glass-shape shape-sphere-1", 0.0),
    ("glass-shape shape-square-1", 45.0),
    ("glass-shape shape-sphere-2", 0.0),
    ("glass-shape shape-square-2", 12.0),
    ("glass-shape shape-sphere-3", 0.0),
];

#[function_component(FloatingShapes)]
pub fn floating_shapes() -> Html {
    let motion = use_context::<Motion>();
    let animate = use_state(|| !driver::prefers_reduced_motion());
    // Outer layer carries the parallax shift, inner layer the yoyo float, so
    // the two never contend for the same transform channel.
    let outer_refs = use_memo((), |_| {
        (0..SHAPES.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });
    let inner_refs = use_memo((), |_| {
        (0..SHAPES.len())
            .map(|_| NodeRef::default())
            .collect::<Vec<_>>()
    });

    {
        let outer_refs = outer_refs.clone();
        let inner_refs = inner_refs.clone();
        use_effect_with((motion.clone(), *animate), move |(motion, animate)| {
            let mut handles: Vec<TargetHandle> = Vec::new();
            if *animate {
                if let Some(motion) = motion.clone() {
                    for (index, (_, tilt)) in SHAPES.iter().enumerate() {
                        if let Some(inner) = inner_refs[index].cast::<HtmlElement>() {
                            let float = motion
                                .register_seeded(&inner, &[(Property::Rotate, Value::Scalar(*tilt))]);
                            float.play(
                                TweenSpec::to(
                                    vec![(Property::TranslateY, Value::Scalar(FLOAT_RISE_PX))],
                                    FLOAT_BASE_SECS + index as f64,
                                )
                                .with_easing(Easing::CubicInOut)
                                .looped(true),
                            );
                            handles.push(float);
                        }
                        if let Some(outer) = outer_refs[index].cast::<HtmlElement>() {
                            let speed = PARALLAX_BASE_SPEED + PARALLAX_SPEED_STEP * index as f64;
                            let shift = -0.5 * speed * outer.get_bounding_client_rect().height();
                            let parallax = motion.register(&outer);
                            parallax.scrub(Property::TranslateY, Value::Scalar(shift), &outer);
                            handles.push(parallax);
                        }
                    }
                }
            }
            move || {
                for handle in handles {
                    handle.release();
                }
            }
        });
    }

    html! {
        <div class="floating-shapes" aria-hidden="true">
            { for SHAPES.iter().enumerate().map(|(index, (class, _))| html! {
                <div ref={outer_refs[index].clone()} class="shape-anchor">
                    <div ref={inner_refs[index].clone()} class={*class}></div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingImageProps {
    #[prop_or(1.0)]
    pub intensity: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

const IMAGE_RISE_PX: f64 = -20.0;
const IMAGE_FLOAT_SECS: f64 = 3.0;
const IMAGE_TILT_DEG: f64 = 2.0;
const IMAGE_TILT_SECS: f64 = 4.0;

/// Gives its children a gentle endless bob and tilt.
#[function_component(FloatingImage)]
pub fn floating_image(props: &FloatingImageProps) -> Html {
    let motion = use_context::<Motion>();
    let node_ref = use_node_ref();
    let animate = use_state(|| !driver::prefers_reduced_motion());

    {
        let node_ref = node_ref.clone();
        let intensity = props.intensity;
        use_effect_with((motion.clone(), *animate), move |(motion, animate)| {
            let mut runtime: Option<TargetHandle> = None;
            if *animate {
                if let (Some(motion), Some(element)) =
                    (motion.clone(), node_ref.cast::<HtmlElement>())
                {
                    let handle = motion.register(&element);
                    handle.play(
                        TweenSpec::to(
                            vec![(Property::TranslateY, Value::Scalar(IMAGE_RISE_PX * intensity))],
                            IMAGE_FLOAT_SECS,
                        )
                        .with_easing(Easing::CubicInOut)
                        .looped(true),
                    );
                    handle.play(
                        TweenSpec::to(
                            vec![(Property::Rotate, Value::Scalar(IMAGE_TILT_DEG * intensity))],
                            IMAGE_TILT_SECS,
                        )
                        .with_easing(Easing::CubicInOut)
                        .looped(true),
                    );
                    runtime = Some(handle);
                }
            }
            move || {
                if let Some(handle) = runtime {
                    handle.release();
                }
            }
        });
    }

    html! {
        <div ref={node_ref} class={classes!("floating-image", props.class.clone())}>
            { props.children.clone() }
        </div>
    }
}
