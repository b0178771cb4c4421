//! Magnetic buttons: while the pointer is over the element it is pulled
//! toward the pointer, and it springs back to rest on exit.

/// Standard attraction multiplier.
pub const STANDARD_STRENGTH: f64 = 0.4;
/// Stronger pull for call-to-action buttons.
pub const EMPHASIZED_STRENGTH: f64 = 0.6;

/// Seconds to chase the pointer while hovering.
pub const ATTRACT_SECS: f64 = 0.3;
/// Seconds for the elastic return to rest.
pub const SETTLE_SECS: f64 = 0.5;

/// Displacement of the element toward the pointer: the pointer's offset from
/// the element's center, scaled by `strength`. A pure function of the latest
/// pointer position and the element's own bounds; nothing accumulates
/// across events.
pub fn displacement(
    pointer_x: f64,
    pointer_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
    strength: f64,
) -> (f64, f64) {
    let offset_x = pointer_x - rect_left - rect_width / 2.0;
    let offset_y = pointer_y - rect_top - rect_height / 2.0;
    (offset_x * strength, offset_y * strength)
}

#[cfg(target_arch = "wasm32")]
mod button {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::HtmlElement;
    use yew::prelude::*;

    use super::{displacement, ATTRACT_SECS, EMPHASIZED_STRENGTH, SETTLE_SECS, STANDARD_STRENGTH};
    use crate::driver::{self, Motion, TargetHandle};
    use crate::motion::{Easing, Property, TweenSpec, Value};

    #[derive(Properties, PartialEq)]
    pub struct MagneticButtonProps {
        #[prop_or_default]
        pub class: Classes,
        #[prop_or_default]
        pub onclick: Option<Callback<MouseEvent>>,
        #[prop_or_default]
        pub emphasized: bool,
        #[prop_or(AttrValue::Static("button"))]
        pub kind: AttrValue,
        #[prop_or_default]
        pub disabled: bool,
        #[prop_or_default]
        pub aria_label: Option<AttrValue>,
        #[prop_or_default]
        pub children: Html,
    }

    #[function_component(MagneticButton)]
    pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
        let motion = use_context::<Motion>();
        let button_ref = use_node_ref();
        let handle: Rc<RefCell<Option<TargetHandle>>> = use_mut_ref(|| None);
        // Touch-only devices get a plain button; the magnet needs a pointer.
        let magnetic = use_state(driver::supports_hover);

        {
            let handle = Rc::clone(&handle);
            let button_ref = button_ref.clone();
            use_effect_with((motion.clone(), *magnetic), move |(motion, magnetic)| {
                if *magnetic {
                    if let (Some(motion), Some(button)) =
                        (motion.clone(), button_ref.cast::<HtmlElement>())
                    {
                        *handle.borrow_mut() = Some(motion.register(&button));
                    }
                }
                move || {
                    if let Some(handle) = handle.borrow_mut().take() {
                        handle.release();
                    }
                }
            });
        }

        let strength = if props.emphasized {
            EMPHASIZED_STRENGTH
        } else {
            STANDARD_STRENGTH
        };

        let onmousemove = (*magnetic).then(|| {
            let handle = Rc::clone(&handle);
            let button_ref = button_ref.clone();
            Callback::from(move |event: MouseEvent| {
                let Some(button) = button_ref.cast::<HtmlElement>() else {
                    return;
                };
                let guard = handle.borrow();
                let Some(handle) = guard.as_ref() else {
                    return;
                };
                let rect = button.get_bounding_client_rect();
                let (dx, dy) = displacement(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                    strength,
                );
                handle.play(TweenSpec::to(
                    vec![
                        (Property::TranslateX, Value::Scalar(dx)),
                        (Property::TranslateY, Value::Scalar(dy)),
                    ],
                    ATTRACT_SECS,
                ));
            })
        });

        let onmouseleave = (*magnetic).then(|| {
            let handle = Rc::clone(&handle);
            Callback::from(move |_event: MouseEvent| {
                let guard = handle.borrow();
                let Some(handle) = guard.as_ref() else {
                    return;
                };
                handle.play(
                    TweenSpec::to(
                        vec![
                            (Property::TranslateX, Value::Scalar(0.0)),
                            (Property::TranslateY, Value::Scalar(0.0)),
                        ],
                        SETTLE_SECS,
                    )
                    .with_easing(Easing::ElasticOut {
                        amplitude: 1.0,
                        period: 0.3,
                    }),
                );
            })
        });

        html! {
            <button
                ref={button_ref}
                type={props.kind.clone()}
                class={classes!("magnetic", props.class.clone())}
                disabled={props.disabled}
                aria-label={props.aria_label.clone()}
                onclick={props.onclick.clone()}
                onmousemove={onmousemove}
                onmouseleave={onmouseleave}
            >
                { props.children.clone() }
            </button>
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use button::{MagneticButton, MagneticButtonProps};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_produces_no_displacement() {
        let (dx, dy) = displacement(150.0, 60.0, 100.0, 40.0, 100.0, 40.0, STANDARD_STRENGTH);
        assert_eq!((dx, dy), (0.0, 0.0));
    }

    #[test]
    fn displacement_scales_with_strength() {
        let (standard_x, standard_y) =
            displacement(180.0, 80.0, 100.0, 40.0, 100.0, 40.0, STANDARD_STRENGTH);
        let (emphasized_x, emphasized_y) =
            displacement(180.0, 80.0, 100.0, 40.0, 100.0, 40.0, EMPHASIZED_STRENGTH);
        assert!((standard_x - 30.0 * 0.4).abs() < 1e-9);
        assert!((standard_y - 20.0 * 0.4).abs() < 1e-9);
        assert!((emphasized_x - 30.0 * 0.6).abs() < 1e-9);
        assert!((emphasized_y - 20.0 * 0.6).abs() < 1e-9);
    }

    #[test]
    fn displacement_is_history_free() {
        let first = displacement(132.0, 55.0, 100.0, 40.0, 100.0, 40.0, EMPHASIZED_STRENGTH);
        let _elsewhere = displacement(900.0, 900.0, 100.0, 40.0, 100.0, 40.0, EMPHASIZED_STRENGTH);
        let second = displacement(132.0, 55.0, 100.0, 40.0, 100.0, 40.0, EMPHASIZED_STRENGTH);
        assert_eq!(first, second);
    }

    #[test]
    fn displacement_points_toward_the_pointer() {
        let (dx, dy) = displacement(90.0, 30.0, 100.0, 40.0, 100.0, 40.0, STANDARD_STRENGTH);
        assert!(dx < 0.0);
        assert!(dy < 0.0);
    }
}
