//! Frame interpolation core for the page's animation layer.
//!
//! This half of the animation driver is target-independent: it knows nothing
//! about the DOM. It owns easing curves, value interpolation, and the shared
//! tween registry keyed by `(TargetId, Property)`. The wasm half
//! (`crate::driver`) feeds it frame timestamps and writes the resulting
//! values to element styles.

use std::collections::HashMap;
use std::f64::consts::TAU;

/// Opaque handle to a registered animation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub(crate) u64);

/// Animatable properties. Transform components are composed into a single
/// CSS `transform` by the DOM driver; the rest map to one declaration each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
    Opacity,
    Width,
    Background,
    BorderColor,
}

impl Property {
    /// Value a target holds for this property before anything animates it.
    pub fn resting(self) -> Value {
        match self {
            Property::Scale | Property::Opacity => Value::Scalar(1.0),
            Property::Background | Property::BorderColor => Value::Color(Rgba::TRANSPARENT),
            Property::TranslateX | Property::TranslateY | Property::Rotate | Property::Width => {
                Value::Scalar(0.0)
            }
        }
    }
}

/// RGBA color with componentwise interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn lerp(self, to: Self, t: f64) -> Self {
        let mix = |from: f64, to: f64| from + (to - from) * t;
        Self {
            r: mix(self.r, to.r),
            g: mix(self.g, to.g),
            b: mix(self.b, to.b),
            a: mix(self.a, to.a),
        }
    }

    /// CSS `rgba(...)` form. Components are clamped so overshooting easings
    /// (elastic) cannot produce out-of-range colors.
    pub fn css(self) -> String {
        let channel = |v: f64| v.round().clamp(0.0, 255.0);
        let alpha = (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            alpha
        )
    }
}

/// A property value: plain scalar (px, %, deg, unitless) or color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Scalar(f64),
    Color(Rgba),
}

impl Value {
    pub fn lerp(self, to: Self, t: f64) -> Self {
        match (self, to) {
            (Value::Scalar(from), Value::Scalar(to)) => Value::Scalar(from + (to - from) * t),
            (Value::Color(from), Value::Color(to)) => Value::Color(from.lerp(to, t)),
            // Mismatched kinds cannot interpolate; land on the destination.
            (_, to) => to,
        }
    }
}

/// Named easing curves applied to normalized progress in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    CubicOut,
    CubicInOut,
    /// Overshoots past the destination and settles, like a released spring.
    ElasticOut { amplitude: f64, period: f64 },
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let amplitude = amplitude.max(1.0);
    let shift = period / TAU * (1.0 / amplitude).asin();
    amplitude * 2.0_f64.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
}

/// Repetition policy for a tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Never finishes. With `yoyo`, alternate cycles run in reverse so the
    /// value oscillates endlessly between the start and end values.
    Forever,
}

/// An animation request: drive the listed properties of one target to their
/// destinations over `duration` seconds.
#[derive(Clone, Debug)]
pub struct TweenSpec {
    pub properties: Vec<(Property, Value)>,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
    pub repeat: Repeat,
    pub yoyo: bool,
}

impl TweenSpec {
    pub fn to(properties: Vec<(Property, Value)>, duration: f64) -> Self {
        Self {
            properties,
            duration,
            delay: 0.0,
            easing: Easing::CubicOut,
            repeat: Repeat::Once,
            yoyo: false,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Repeat forever; with `yoyo` the interpolation ping-pongs instead of
    /// restarting each cycle.
    pub fn looped(mut self, yoyo: bool) -> Self {
        self.repeat = Repeat::Forever;
        self.yoyo = yoyo;
        self
    }
}

/// One live interpolation of a single `(target, property)` pair.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: Value,
    to: Value,
    started_at: f64,
    delay_ms: f64,
    duration_ms: f64,
    easing: Easing,
    repeat: Repeat,
    yoyo: bool,
}

impl Tween {
    pub fn from_spec(from: Value, to: Value, started_at: f64, spec: &TweenSpec) -> Self {
        Self {
            from,
            to,
            started_at,
            delay_ms: spec.delay * 1000.0,
            duration_ms: spec.duration * 1000.0,
            easing: spec.easing,
            repeat: spec.repeat,
            yoyo: spec.yoyo,
        }
    }

    /// Samples the tween at `now` (milliseconds, same clock as `started_at`).
    /// Returns the current value and whether the tween has finished.
    pub fn sample(&self, now: f64) -> (Value, bool) {
        let elapsed = now - self.started_at - self.delay_ms;
        if elapsed < 0.0 {
            return (self.from, false);
        }
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }

        let cycles = elapsed / self.duration_ms;
        match self.repeat {
            Repeat::Once => {
                if cycles >= 1.0 {
                    (self.to, true)
                } else {
                    (self.from.lerp(self.to, self.easing.apply(cycles)), false)
                }
            }
            Repeat::Forever => {
                let phase = cycles.fract();
                let reversed = self.yoyo && (cycles as u64) % 2 == 1;
                let progress = if reversed { 1.0 - phase } else { phase };
                (self.from.lerp(self.to, self.easing.apply(progress)), false)
            }
        }
    }
}

/// A sampled property value ready to be applied to its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Update {
    pub target: TargetId,
    pub property: Property,
    pub value: Value,
}

/// The shared interpolation registry. At most one tween drives a given
/// `(target, property)` pair; a new request for the pair supersedes the old
/// one immediately, so no orphaned tween can keep pulling on the property.
#[derive(Default)]
pub struct TweenBank {
    active: HashMap<(TargetId, Property), Tween>,
}

impl TweenBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `tween` for the pair, replacing any active interpolation.
    pub fn play(&mut self, target: TargetId, property: Property, tween: Tween) {
        self.active.insert((target, property), tween);
    }

    /// Samples every active tween once and drops the finished ones.
    pub fn advance(&mut self, now: f64) -> Vec<Update> {
        let mut updates = Vec::with_capacity(self.active.len());
        self.active.retain(|&(target, property), tween| {
            let (value, done) = tween.sample(now);
            updates.push(Update {
                target,
                property,
                value,
            });
            !done
        });
        updates
    }

    /// Cancels every interpolation tied to `target`.
    pub fn cancel_target(&mut self, target: TargetId) {
        self.active.retain(|&(id, _), _| id != target);
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
impl TweenBank {
    fn len(&self) -> usize {
        self.active.len()
    }

    fn is_driving(&self, target: TargetId, property: Property) -> bool {
        self.active.contains_key(&(target, property))
    }
}

/// Progress of a scroll-scrubbed animation: 0 while the trigger's top is
/// below the viewport, 1 once its bottom has passed the top edge, linear in
/// between. Mirrors a "top bottom" → "bottom top" trigger window.
pub fn scrub_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let total = viewport_height + rect_height;
    if total <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / total).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn target(n: u64) -> TargetId {
        TargetId(n)
    }

    fn scalar_of(value: Value) -> f64 {
        match value {
            Value::Scalar(v) => v,
            Value::Color(_) => panic!("expected scalar value"),
        }
    }

    #[test]
    fn easing_endpoints_are_identity() {
        let curves = [
            Easing::Linear,
            Easing::CubicOut,
            Easing::CubicInOut,
            Easing::ElasticOut {
                amplitude: 1.0,
                period: 0.3,
            },
        ];
        for easing in curves {
            assert!((easing.apply(0.0)).abs() < EPSILON);
            assert!((easing.apply(1.0) - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn cubic_curves_are_monotonic() {
        for easing in [Easing::CubicOut, Easing::CubicInOut] {
            let mut last = 0.0;
            for step in 1..=100 {
                let value = easing.apply(f64::from(step) / 100.0);
                assert!(value >= last);
                last = value;
            }
        }
    }

    #[test]
    fn cubic_in_out_hits_midpoint() {
        assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn elastic_out_overshoots_past_destination() {
        let easing = Easing::ElasticOut {
            amplitude: 1.0,
            period: 0.3,
        };
        let overshoots = (1..100).any(|step| easing.apply(f64::from(step) / 100.0) > 1.0);
        assert!(overshoots);
    }

    #[test]
    fn rgba_lerp_midpoint_mixes_components() {
        let from = Rgba::new(0.0, 0.0, 0.0, 0.0);
        let to = Rgba::new(255.0, 46.0, 99.0, 1.0);
        let mid = from.lerp(to, 0.5);
        assert!((mid.r - 127.5).abs() < EPSILON);
        assert!((mid.g - 23.0).abs() < EPSILON);
        assert!((mid.b - 49.5).abs() < EPSILON);
        assert!((mid.a - 0.5).abs() < EPSILON);
    }

    #[test]
    fn rgba_css_clamps_overshoot() {
        let overshot = Rgba::new(280.0, -12.0, 99.0, 1.4);
        assert_eq!(overshot.css(), "rgba(255, 0, 99, 1)");
    }

    #[test]
    fn rgba_css_formats_fractional_alpha() {
        assert_eq!(Rgba::new(255.0, 46.0, 99.0, 0.3).css(), "rgba(255, 46, 99, 0.3)");
    }

    #[test]
    fn mismatched_value_kinds_land_on_destination() {
        let from = Value::Scalar(3.0);
        let to = Value::Color(Rgba::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(from.lerp(to, 0.25), to);
    }

    fn simple_tween(from: f64, to: f64, duration: f64) -> Tween {
        Tween::from_spec(
            Value::Scalar(from),
            Value::Scalar(to),
            0.0,
            &TweenSpec::to(vec![], duration).with_easing(Easing::Linear),
        )
    }

    #[test]
    fn tween_holds_start_value_during_delay() {
        let spec = TweenSpec::to(vec![], 1.0)
            .with_delay(0.5)
            .with_easing(Easing::Linear);
        let tween = Tween::from_spec(Value::Scalar(2.0), Value::Scalar(8.0), 0.0, &spec);
        let (value, done) = tween.sample(250.0);
        assert_eq!(value, Value::Scalar(2.0));
        assert!(!done);
    }

    #[test]
    fn zero_duration_lands_exactly_on_destination() {
        let tween = simple_tween(0.0, 640.0, 0.0);
        let (value, done) = tween.sample(0.0);
        assert_eq!(value, Value::Scalar(640.0));
        assert!(done);
    }

    #[test]
    fn finished_tween_reports_exact_destination() {
        let tween = simple_tween(0.0, 70.0, 1.2);
        let (value, done) = tween.sample(5_000.0);
        assert_eq!(value, Value::Scalar(70.0));
        assert!(done);
    }

    #[test]
    fn tween_interpolates_linearly_in_flight() {
        let tween = simple_tween(0.0, 100.0, 1.0);
        let (value, done) = tween.sample(250.0);
        assert!((scalar_of(value) - 25.0).abs() < EPSILON);
        assert!(!done);
    }

    #[test]
    fn forever_yoyo_mirrors_alternate_cycles() {
        let spec = TweenSpec::to(vec![], 1.0)
            .with_easing(Easing::Linear)
            .looped(true);
        let tween = Tween::from_spec(Value::Scalar(0.0), Value::Scalar(-30.0), 0.0, &spec);

        let (forward, _) = tween.sample(250.0);
        let (mirrored, _) = tween.sample(1_750.0);
        assert!((scalar_of(forward) - scalar_of(mirrored)).abs() < EPSILON);

        let (peak, done) = tween.sample(1_000.0);
        assert!((scalar_of(peak) - -30.0).abs() < EPSILON);
        assert!(!done);
    }

    #[test]
    fn forever_tween_never_finishes() {
        let spec = TweenSpec::to(vec![], 1.0).looped(true);
        let tween = Tween::from_spec(Value::Scalar(0.0), Value::Scalar(1.0), 0.0, &spec);
        for now in [0.0, 999.0, 10_000.0, 1e7] {
            let (_, done) = tween.sample(now);
            assert!(!done);
        }
    }

    #[test]
    fn new_request_supersedes_active_pair() {
        let mut bank = TweenBank::new();
        bank.play(target(1), Property::TranslateX, simple_tween(0.0, 100.0, 1.0));
        bank.play(target(1), Property::TranslateX, simple_tween(0.0, -40.0, 1.0));

        assert_eq!(bank.len(), 1);
        let updates = bank.advance(1_000.0);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].value, Value::Scalar(-40.0));
    }

    #[test]
    fn advance_drops_finished_and_keeps_live() {
        let mut bank = TweenBank::new();
        bank.play(target(1), Property::TranslateX, simple_tween(0.0, 10.0, 0.5));
        bank.play(target(1), Property::Opacity, simple_tween(0.0, 1.0, 2.0));

        let updates = bank.advance(1_000.0);
        assert_eq!(updates.len(), 2);
        assert_eq!(bank.len(), 1);
        assert!(bank.is_driving(target(1), Property::Opacity));
        assert!(!bank.is_driving(target(1), Property::TranslateX));
    }

    #[test]
    fn cancel_target_removes_only_that_target() {
        let mut bank = TweenBank::new();
        bank.play(target(1), Property::TranslateX, simple_tween(0.0, 1.0, 1.0));
        bank.play(target(1), Property::TranslateY, simple_tween(0.0, 1.0, 1.0));
        bank.play(target(2), Property::Scale, simple_tween(1.0, 2.0, 1.0));

        bank.cancel_target(target(1));
        assert_eq!(bank.len(), 1);
        assert!(bank.is_driving(target(2), Property::Scale));
    }

    #[test]
    fn superseded_tween_contributes_no_further_samples() {
        let mut bank = TweenBank::new();
        bank.play(target(1), Property::TranslateX, simple_tween(0.0, 100.0, 1.0));
        let _ = bank.advance(250.0);
        bank.play(target(1), Property::TranslateX, {
            let spec = TweenSpec::to(vec![], 1.0).with_easing(Easing::Linear);
            Tween::from_spec(Value::Scalar(25.0), Value::Scalar(0.0), 250.0, &spec)
        });

        let updates = bank.advance(1_250.0);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].value, Value::Scalar(0.0));
        assert!(bank.is_idle());
    }

    #[test]
    fn dot_snaps_and_ring_converges_to_the_last_move() {
        let mut bank = TweenBank::new();
        let dot = target(1);
        let ring = target(2);

        // Two moves in quick succession; the second supersedes the first for
        // both targets.
        for (start, x) in [(0.0, 300.0), (16.0, 420.0)] {
            let snap = TweenSpec::to(vec![], 0.0).with_easing(Easing::Linear);
            bank.play(
                dot,
                Property::TranslateX,
                Tween::from_spec(Value::Scalar(0.0), Value::Scalar(x), start, &snap),
            );
            let lag = TweenSpec::to(vec![], 0.15);
            bank.play(
                ring,
                Property::TranslateX,
                Tween::from_spec(Value::Scalar(0.0), Value::Scalar(x), start, &lag),
            );
        }

        // One smoothing duration after the last event both targets rest on
        // its exact coordinates.
        let updates = bank.advance(16.0 + 150.0);
        assert_eq!(updates.len(), 2);
        for update in updates {
            assert_eq!(update.value, Value::Scalar(420.0));
        }
        assert!(bank.is_idle());
    }

    #[test]
    fn skill_bar_reveal_completes_within_its_window() {
        let mut bank = TweenBank::new();
        let bar = target(1);
        let label = target(2);

        let fill = TweenSpec::to(vec![], 1.2).with_delay(0.3);
        bank.play(
            bar,
            Property::Width,
            Tween::from_spec(Value::Scalar(0.0), Value::Scalar(70.0), 0.0, &fill),
        );
        let fade = TweenSpec::to(vec![], 0.5).with_delay(0.8);
        bank.play(
            label,
            Property::Opacity,
            Tween::from_spec(Value::Scalar(0.0), Value::Scalar(1.0), 0.0, &fade),
        );

        // Mid-flight the bar is partially filled and still owned by the bank.
        let mid = bank.advance(900.0);
        let bar_mid = mid
            .iter()
            .find(|update| update.target == bar)
            .expect("bar update present");
        match bar_mid.value {
            Value::Scalar(width) => assert!(width > 0.0 && width < 70.0),
            Value::Color(_) => panic!("bar width is a scalar"),
        }

        // Past delay + duration both land exactly on their destinations.
        let done = bank.advance(1_600.0);
        for update in done {
            match update.target {
                id if id == bar => assert_eq!(update.value, Value::Scalar(70.0)),
                id if id == label => assert_eq!(update.value, Value::Scalar(1.0)),
                _ => panic!("unexpected target"),
            }
        }
        assert!(bank.is_idle());
    }

    #[test]
    fn scrub_progress_is_zero_below_viewport() {
        assert!((scrub_progress(900.0, 100.0, 900.0)).abs() < EPSILON);
        assert!((scrub_progress(2_000.0, 100.0, 900.0)).abs() < EPSILON);
    }

    #[test]
    fn scrub_progress_is_one_above_viewport() {
        assert!((scrub_progress(-100.0, 100.0, 900.0) - 1.0).abs() < EPSILON);
        assert!((scrub_progress(-5_000.0, 100.0, 900.0) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn scrub_progress_is_linear_between_edges() {
        let progress = scrub_progress(400.0, 100.0, 900.0);
        assert!((progress - 0.5).abs() < EPSILON);
    }

    #[test]
    fn scrub_progress_degenerate_geometry_is_zero() {
        assert!((scrub_progress(0.0, 0.0, 0.0)).abs() < EPSILON);
    }
}
