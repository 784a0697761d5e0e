//! Reveal and hover animations described as data.
//!
//! A [`Variant`] is a pair of poses plus a transition; components never
//! sequence animations imperatively, they only pick a [`RevealState`] and
//! render the inline style the variant produces for it. CSS transitions do
//! the interpolation.

use std::fmt::Write as _;

/// Reveals start this far before the element strictly intersects.
pub const ROOT_MARGIN: &str = "50px";
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    const fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Self::REST
        }
    }

    fn is_identity_transform(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.scale == 1.0 && self.rotate == 0.0
    }

    fn transform(&self) -> String {
        if self.is_identity_transform() {
            return "none".to_string();
        }
        format!(
            "translate3d({}px, {}px, 0) scale({}) rotate({}deg)",
            self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
    /// Unit-mass spring; mapped onto a CSS curve and a settle time.
    Spring { stiffness: f32, damping: f32 },
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Self::EaseOut => "cubic-bezier(0.22, 1, 0.36, 1)",
            Self::EaseInOut => "cubic-bezier(0.65, 0, 0.35, 1)",
            Self::Spring { stiffness, damping } => {
                if damping_ratio(stiffness, damping) < 1.0 {
                    "cubic-bezier(0.34, 1.56, 0.64, 1)"
                } else {
                    "cubic-bezier(0.22, 1, 0.36, 1)"
                }
            }
        }
    }
}

fn damping_ratio(stiffness: f32, damping: f32) -> f32 {
    damping / (2.0 * stiffness.max(f32::EPSILON).sqrt())
}

/// Approximate 2% settle time of a unit-mass spring: 4 / (zeta * omega) = 8 / c.
fn spring_settle_seconds(damping: f32) -> f32 {
    (8.0 / damping.max(1.0)).clamp(0.2, 1.2)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
    /// Per-child delay step when the variant is used as a stagger container.
    pub stagger: f32,
}

impl Transition {
    const fn ease_out(duration: f32) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing: Easing::EaseOut,
            stagger: 0.0,
        }
    }

    const fn spring(stiffness: f32, damping: f32) -> Self {
        Self {
            duration: 0.0,
            delay: 0.0,
            easing: Easing::Spring { stiffness, damping },
            stagger: 0.0,
        }
    }

    pub fn seconds(&self) -> f32 {
        match self.easing {
            Easing::Spring { damping, .. } => spring_settle_seconds(damping),
            _ => self.duration,
        }
    }
}

/// Where the animation controller currently points an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    /// Visible, arrived at through the variant's transition.
    Visible,
    /// Visible with no transition at all (reduced motion).
    Settled,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    pub name: &'static str,
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
}

impl Variant {
    /// Inline style for `state`; `extra_delay` (seconds) is added to the
    /// variant's own delay and ignored when settled.
    pub fn style(&self, state: RevealState, extra_delay: f32) -> String {
        match state {
            RevealState::Settled => pose_style(&self.visible, None),
            RevealState::Hidden => pose_style(&self.hidden, Some((self.transition, 0.0))),
            RevealState::Visible => {
                pose_style(&self.visible, Some((self.transition, extra_delay.max(0.0))))
            }
        }
    }

    /// Delay for the `index`th child of a stagger container using this variant.
    pub fn child_delay(&self, index: usize) -> f32 {
        self.transition.delay + self.transition.stagger * index as f32
    }
}

fn pose_style(pose: &Pose, transition: Option<(Transition, f32)>) -> String {
    let mut style = format!("opacity:{};transform:{};", pose.opacity, pose.transform());

    match transition {
        None => style.push_str("transition:none;"),
        Some((transition, extra_delay)) => {
            let seconds = transition.seconds();
            let delay = transition.delay + extra_delay;
            let easing = transition.easing.css();
            let _ = write!(
                style,
                "transition:opacity {seconds}s {easing} {delay}s, transform {seconds}s {easing} {delay}s;\
                 will-change:opacity, transform;"
            );
        }
    }

    style
}

pub const FADE_IN_UP: Variant = Variant {
    name: "fade-in-up",
    hidden: Pose {
        y: 20.0,
        ..Pose::hidden()
    },
    visible: Pose::REST,
    transition: Transition::ease_out(0.6),
};

pub const SLIDE_IN_LEFT: Variant = Variant {
    name: "slide-in-left",
    hidden: Pose {
        x: -50.0,
        ..Pose::hidden()
    },
    visible: Pose::REST,
    transition: Transition::ease_out(0.6),
};

pub const SLIDE_IN_RIGHT: Variant = Variant {
    name: "slide-in-right",
    hidden: Pose {
        x: 50.0,
        ..Pose::hidden()
    },
    visible: Pose::REST,
    transition: Transition::ease_out(0.6),
};

pub const FADE_IN_UP_LARGE: Variant = Variant {
    name: "fade-in-up-large",
    hidden: Pose {
        y: 40.0,
        ..Pose::hidden()
    },
    visible: Pose::REST,
    transition: Transition::ease_out(0.8),
};

pub const SCALE_IN: Variant = Variant {
    name: "scale-in",
    hidden: Pose {
        scale: 0.8,
        ..Pose::hidden()
    },
    visible: Pose::REST,
    transition: Transition::spring(100.0, 15.0),
};

pub const STAGGER_CONTAINER: Variant = Variant {
    name: "stagger-container",
    hidden: Pose::hidden(),
    visible: Pose::REST,
    transition: Transition {
        duration: 0.3,
        delay: 0.2,
        easing: Easing::EaseOut,
        stagger: 0.1,
    },
};

pub const STAGGER_CHILD: Variant = Variant {
    name: "stagger-child",
    hidden: Pose {
        y: 20.0,
        ..Pose::hidden()
    },
    visible: Pose::REST,
    transition: Transition::ease_out(0.5),
};

pub const OVERLAY_FADE: Variant = Variant {
    name: "overlay-fade",
    hidden: Pose::hidden(),
    visible: Pose::REST,
    transition: Transition::ease_out(0.25),
};

pub const CLOSE_SPRING_ROTATE: Variant = Variant {
    name: "close-spring-rotate",
    hidden: Pose {
        scale: 0.5,
        rotate: -90.0,
        ..Pose::hidden()
    },
    visible: Pose::REST,
    transition: Transition::spring(300.0, 20.0),
};

pub const IMAGE_SPRING_SCALE: Variant = Variant {
    name: "image-spring-scale",
    hidden: Pose {
        scale: 0.8,
        ..Pose::hidden()
    },
    visible: Pose::REST,
    transition: Transition::spring(260.0, 25.0),
};

/// Pointer-hover transforms. The wiggle plays the `hover-wiggle` keyframes
/// declared in `index.html`, parameterised through `--wiggle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverVariant {
    pub lift: f32,
    pub scale: f32,
    pub wiggle: f32,
}

pub const HOVER_SUBTLE: HoverVariant = HoverVariant {
    lift: -2.0,
    scale: 1.05,
    wiggle: 0.0,
};

pub const CARD_HOVER: HoverVariant = HoverVariant {
    lift: -5.0,
    scale: 1.02,
    wiggle: 0.0,
};

pub const BUTTON_HOVER: HoverVariant = HoverVariant {
    lift: -2.0,
    scale: 1.05,
    wiggle: 2.0,
};

pub const NAV_HOVER: HoverVariant = HoverVariant {
    lift: 0.0,
    scale: 1.05,
    wiggle: 1.5,
};

pub const TAP_SCALE: f32 = 0.95;

impl HoverVariant {
    /// Empty under reduced motion: hover is a no-op.
    pub fn style(&self, hovered: bool, pressed: bool, reduce_motion: bool) -> String {
        if reduce_motion {
            return String::new();
        }

        let scale = match (hovered, pressed) {
            (_, true) => TAP_SCALE,
            (true, false) => self.scale,
            (false, false) => 1.0,
        };
        let lift = if hovered { self.lift } else { 0.0 };

        let mut style = if lift == 0.0 && scale == 1.0 {
            "transform:none;".to_string()
        } else {
            format!("transform:translateY({lift}px) scale({scale});")
        };
        style.push_str("transition:transform 0.2s cubic-bezier(0.22, 1, 0.36, 1);");

        if hovered && !pressed && self.wiggle != 0.0 {
            let _ = write!(
                style,
                "--wiggle:{}deg;animation:hover-wiggle 0.3s ease-in-out 1;",
                self.wiggle
            );
        }

        style
    }
}

/// Parameters of the scroll trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerOptions {
    pub threshold: f64,
    pub delay_ms: u32,
    pub trigger_once: bool,
    pub reduce_motion: bool,
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            delay_ms: 0,
            trigger_once: true,
            reduce_motion: false,
        }
    }
}

impl TriggerOptions {
    pub fn with_delay_seconds(mut self, seconds: f32) -> Self {
        self.delay_ms = seconds_to_ms(seconds);
        self
    }
}

pub fn seconds_to_ms(seconds: f32) -> u32 {
    (seconds.max(0.0) * 1000.0).round() as u32
}

/// What the controller should do after an observation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Ignore,
    /// Go visible after `delay_ms`; a pending reveal is replaced.
    Reveal { delay_ms: u32 },
    /// Jump to the terminal state without a transition.
    Settle,
    /// Back to hidden, cancelling any pending reveal.
    Hide,
}

/// One element's reveal bookkeeping: its current state and whether the
/// one-shot reveal has already been scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealTracker {
    pub state: RevealState,
    fired: bool,
}

impl RevealTracker {
    pub fn new(options: &TriggerOptions, os_reduce: bool) -> Self {
        let state = if options.reduce_motion || os_reduce {
            RevealState::Settled
        } else {
            RevealState::Hidden
        };
        Self {
            state,
            fired: false,
        }
    }

    pub fn observe(
        &mut self,
        intersecting: bool,
        options: &TriggerOptions,
        os_reduce: bool,
    ) -> RevealAction {
        if options.reduce_motion || os_reduce {
            if self.state == RevealState::Settled {
                return RevealAction::Ignore;
            }
            self.state = RevealState::Settled;
            self.fired = true;
            return RevealAction::Settle;
        }

        if intersecting {
            if self.fired && (options.trigger_once || self.state.is_visible()) {
                return RevealAction::Ignore;
            }
            self.fired = true;
            return RevealAction::Reveal {
                delay_ms: options.delay_ms,
            };
        }

        if options.trigger_once || !self.fired {
            return RevealAction::Ignore;
        }

        self.fired = false;
        self.state = RevealState::Hidden;
        RevealAction::Hide
    }

    /// Called when a scheduled reveal's delay has elapsed.
    pub fn delay_elapsed(&mut self) {
        if self.fired && self.state == RevealState::Hidden {
            self.state = RevealState::Visible;
        }
    }

    /// Drops a scheduled reveal that has not run yet. The element stays
    /// hidden and the next intersection schedules it again.
    pub fn cancel(&mut self) {
        if self.state == RevealState::Hidden {
            self.fired = false;
        }
    }
}

/// Mount/unmount lifecycle for elements with exit animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Absent,
    /// Mounted in the hidden pose; becomes `Present` on the next frame.
    Entering,
    Present,
    /// Still mounted in the hidden pose until the exit transition ends.
    Exiting,
}

impl Presence {
    pub fn initial(present: bool) -> Self {
        if present {
            Self::Entering
        } else {
            Self::Absent
        }
    }

    pub fn update(self, present: bool) -> Self {
        match (self, present) {
            (Self::Absent | Self::Exiting, true) => Self::Entering,
            (Self::Entering | Self::Present, false) => Self::Exiting,
            (other, _) => other,
        }
    }

    pub fn settle(self) -> Self {
        match self {
            Self::Entering => Self::Present,
            Self::Exiting => Self::Absent,
            other => other,
        }
    }

    pub fn is_mounted(self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub fn reveal_state(self, reduce_motion: bool) -> RevealState {
        match (self, reduce_motion) {
            (_, true) => RevealState::Settled,
            (Self::Present, false) => RevealState::Visible,
            _ => RevealState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduced() -> TriggerOptions {
        TriggerOptions {
            reduce_motion: true,
            ..TriggerOptions::default()
        }
    }

    #[test]
    fn hidden_style_uses_variant_offset() {
        let style = FADE_IN_UP.style(RevealState::Hidden, 0.0);
        assert!(style.starts_with("opacity:0;"));
        assert!(style.contains("translate3d(0px, 20px, 0)"));
    }

    #[test]
    fn visible_style_carries_requested_delay() {
        let style = FADE_IN_UP.style(RevealState::Visible, 0.4);
        assert!(style.starts_with("opacity:1;transform:none;"));
        assert!(style.contains("opacity 0.6s"));
        assert!(style.contains(" 0.4s,"));
    }

    #[test]
    fn settled_style_has_no_transition() {
        for variant in [FADE_IN_UP, SLIDE_IN_LEFT, SCALE_IN, STAGGER_CHILD, IMAGE_SPRING_SCALE] {
            let style = variant.style(RevealState::Settled, 1.0);
            assert_eq!(style, "opacity:1;transform:none;transition:none;", "{}", variant.name);
        }
    }

    #[test]
    fn spring_maps_to_overshoot_curve_when_underdamped() {
        let style = SCALE_IN.style(RevealState::Visible, 0.0);
        assert!(style.contains("cubic-bezier(0.34, 1.56, 0.64, 1)"));
        assert!((SCALE_IN.transition.seconds() - 8.0 / 15.0).abs() < 1e-6);
    }

    #[test]
    fn stagger_container_spaces_children() {
        assert!((STAGGER_CONTAINER.child_delay(0) - 0.2).abs() < 1e-6);
        assert!((STAGGER_CONTAINER.child_delay(3) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn hover_is_noop_under_reduced_motion() {
        for hover in [HOVER_SUBTLE, CARD_HOVER, BUTTON_HOVER, NAV_HOVER] {
            assert_eq!(hover.style(true, false, true), "");
            assert_eq!(hover.style(true, true, true), "");
        }
    }

    #[test]
    fn button_hover_lifts_and_wiggles() {
        let style = BUTTON_HOVER.style(true, false, false);
        assert!(style.contains("translateY(-2px) scale(1.05)"));
        assert!(style.contains("--wiggle:2deg"));

        let rest = BUTTON_HOVER.style(false, false, false);
        assert!(rest.starts_with("transform:none;"));
        assert!(!rest.contains("animation"));
    }

    #[test]
    fn reveal_fires_once_with_delay() {
        let options = TriggerOptions {
            delay_ms: 400,
            ..TriggerOptions::default()
        };
        let mut tracker = RevealTracker::new(&options, false);
        assert_eq!(tracker.state, RevealState::Hidden);

        assert_eq!(tracker.observe(false, &options, false), RevealAction::Ignore);
        assert_eq!(
            tracker.observe(true, &options, false),
            RevealAction::Reveal { delay_ms: 400 }
        );
        assert_eq!(tracker.state, RevealState::Hidden);

        tracker.delay_elapsed();
        assert_eq!(tracker.state, RevealState::Visible);

        assert_eq!(tracker.observe(false, &options, false), RevealAction::Ignore);
        assert_eq!(tracker.observe(true, &options, false), RevealAction::Ignore);
        assert_eq!(tracker.state, RevealState::Visible);
    }

    #[test]
    fn cancelled_reveal_never_completes() {
        let options = TriggerOptions {
            delay_ms: 600,
            ..TriggerOptions::default()
        };
        let mut tracker = RevealTracker::new(&options, false);
        assert_eq!(
            tracker.observe(true, &options, false),
            RevealAction::Reveal { delay_ms: 600 }
        );

        tracker.cancel();
        tracker.delay_elapsed();
        assert_eq!(tracker.state, RevealState::Hidden);

        assert_eq!(
            tracker.observe(true, &options, false),
            RevealAction::Reveal { delay_ms: 600 }
        );
    }

    #[test]
    fn cancel_keeps_a_finished_reveal() {
        let options = TriggerOptions::default();
        let mut tracker = RevealTracker::new(&options, false);
        tracker.observe(true, &options, false);
        tracker.delay_elapsed();

        tracker.cancel();
        assert_eq!(tracker.state, RevealState::Visible);
        assert_eq!(tracker.observe(true, &options, false), RevealAction::Ignore);
    }

    #[test]
    fn subtle_hover_lifts_slightly() {
        let style = HOVER_SUBTLE.style(true, false, false);
        assert!(style.starts_with("transform:translateY(-2px) scale(1.05);"));
        assert!(!style.contains("animation"));
    }

    #[test]
    fn repeating_trigger_hides_when_leaving() {
        let options = TriggerOptions {
            trigger_once: false,
            ..TriggerOptions::default()
        };
        let mut tracker = RevealTracker::new(&options, false);

        assert_eq!(
            tracker.observe(true, &options, false),
            RevealAction::Reveal { delay_ms: 0 }
        );
        tracker.delay_elapsed();
        assert_eq!(tracker.observe(false, &options, false), RevealAction::Hide);
        assert_eq!(tracker.state, RevealState::Hidden);
        assert_eq!(
            tracker.observe(true, &options, false),
            RevealAction::Reveal { delay_ms: 0 }
        );
    }

    #[test]
    fn reduced_motion_settles_immediately_and_ignores_delay() {
        let options = reduced().with_delay_seconds(1.0);
        let tracker = RevealTracker::new(&options, false);
        assert_eq!(tracker.state, RevealState::Settled);

        let options = TriggerOptions::default().with_delay_seconds(1.0);
        let mut tracker = RevealTracker::new(&options, true);
        assert_eq!(tracker.state, RevealState::Settled);
        assert_eq!(tracker.observe(true, &options, true), RevealAction::Ignore);
    }

    #[test]
    fn os_preference_turning_on_mid_flight_settles() {
        let options = TriggerOptions::default();
        let mut tracker = RevealTracker::new(&options, false);
        assert_eq!(tracker.observe(false, &options, true), RevealAction::Settle);
        assert_eq!(tracker.state, RevealState::Settled);
    }

    #[test]
    fn presence_runs_enter_and_exit() {
        let mut presence = Presence::initial(false);
        assert!(!presence.is_mounted());

        presence = presence.update(true);
        assert_eq!(presence, Presence::Entering);
        assert_eq!(presence.reveal_state(false), RevealState::Hidden);

        presence = presence.settle();
        assert_eq!(presence.reveal_state(false), RevealState::Visible);

        presence = presence.update(false);
        assert_eq!(presence, Presence::Exiting);
        assert!(presence.is_mounted());

        presence = presence.settle();
        assert_eq!(presence, Presence::Absent);
    }

    #[test]
    fn presence_reopens_during_exit() {
        let presence = Presence::Exiting.update(true);
        assert_eq!(presence, Presence::Entering);
        assert_eq!(Presence::Present.reveal_state(true), RevealState::Settled);
    }

    #[test]
    fn seconds_convert_to_whole_milliseconds() {
        assert_eq!(seconds_to_ms(0.4), 400);
        assert_eq!(seconds_to_ms(-1.0), 0);
    }
}
