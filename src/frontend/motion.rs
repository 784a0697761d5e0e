use crate::motion::{
    HoverVariant, RevealAction, RevealState, RevealTracker, TriggerOptions, Variant, FADE_IN_UP,
    ROOT_MARGIN,
};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use js_sys::Array;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MediaQueryList,
};
use yew::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReducedMotion(pub bool);

fn reduced_motion_query() -> Option<MediaQueryList> {
    window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

pub fn prefers_reduced_motion() -> bool {
    reduced_motion_query()
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct ReducedMotionProviderProps {
    pub children: Html,
}

/// Tracks the OS reduced-motion preference once for the whole page.
#[function_component(ReducedMotionProvider)]
pub fn reduced_motion_provider(props: &ReducedMotionProviderProps) -> Html {
    let reduce = use_state(prefers_reduced_motion);

    {
        let reduce = reduce.clone();
        use_effect_with((), move |_| {
            let listener = reduced_motion_query().map(|query| {
                let source = query.clone();
                EventListener::new(&query, "change", move |_| reduce.set(source.matches()))
            });
            move || drop(listener)
        });
    }

    html! {
        <ContextProvider<ReducedMotion> context={ReducedMotion(*reduce)}>
            {props.children.clone()}
        </ContextProvider<ReducedMotion>>
    }
}

#[hook]
pub fn use_reduced_motion() -> bool {
    use_context::<ReducedMotion>().map_or_else(prefers_reduced_motion, |reduce| reduce.0)
}

/// Element binding plus the state the animation controller is in.
pub struct ScrollTrigger {
    pub node: NodeRef,
    pub state: RevealState,
}

/// Reveals the bound element the first time it crosses `options.threshold`.
///
/// A pending delayed reveal is cancelled when the element unmounts. Under
/// reduced motion the element settles immediately and no observer is made.
#[hook]
pub fn use_scroll_trigger(options: TriggerOptions) -> ScrollTrigger {
    let os_reduce = use_reduced_motion();
    let node = use_node_ref();
    let tracker = use_mut_ref(|| RevealTracker::new(&options, os_reduce));
    let state = use_state_eq(|| tracker.borrow().state);
    let pending: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let node = node.clone();
        let tracker = tracker.clone();
        let state = state.clone();
        let pending = pending.clone();
        use_effect_with((options, os_reduce), move |(options, os_reduce)| {
            let options = *options;
            let os_reduce = *os_reduce;
            let cleanup_tracker = tracker.clone();

            let apply = {
                let tracker = tracker.clone();
                let state = state.clone();
                let pending = pending.clone();
                move |action: RevealAction| match action {
                    RevealAction::Ignore => {}
                    RevealAction::Settle => {
                        pending.borrow_mut().take();
                        state.set(RevealState::Settled);
                    }
                    RevealAction::Hide => {
                        pending.borrow_mut().take();
                        state.set(RevealState::Hidden);
                    }
                    RevealAction::Reveal { delay_ms: 0 } => {
                        tracker.borrow_mut().delay_elapsed();
                        state.set(tracker.borrow().state);
                    }
                    RevealAction::Reveal { delay_ms } => {
                        let tracker = tracker.clone();
                        let state = state.clone();
                        let timeout = Timeout::new(delay_ms, move || {
                            tracker.borrow_mut().delay_elapsed();
                            state.set(tracker.borrow().state);
                        });
                        *pending.borrow_mut() = Some(timeout);
                    }
                }
            };

            let mut observer = None;
            if options.reduce_motion || os_reduce {
                let action = tracker.borrow_mut().observe(false, &options, os_reduce);
                apply(action);
            } else if let Some(element) = node.cast::<web_sys::Element>() {
                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    move |entries: Array, _observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            let action = tracker.borrow_mut().observe(
                                entry.is_intersecting(),
                                &options,
                                os_reduce,
                            );
                            apply(action);
                        }
                    },
                );

                let init = IntersectionObserverInit::new();
                init.set_root_margin(ROOT_MARGIN);
                init.set_threshold(&JsValue::from_f64(options.threshold));

                match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                {
                    Ok(created) => {
                        created.observe(&element);
                        observer = Some((created, callback));
                    }
                    Err(_) => {
                        tracing::warn!("intersection observer unavailable; revealing immediately");
                        state.set(RevealState::Settled);
                    }
                }
            }

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
                pending.borrow_mut().take();
                cleanup_tracker.borrow_mut().cancel();
            }
        });
    }

    ScrollTrigger {
        node,
        state: *state,
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or(FADE_IN_UP)]
    pub variant: Variant,
    /// Seconds before the reveal starts once the threshold is crossed.
    #[prop_or_default]
    pub delay: f32,
    #[prop_or(crate::motion::DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub reduce_motion: bool,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let options = TriggerOptions {
        threshold: props.threshold,
        reduce_motion: props.reduce_motion,
        ..TriggerOptions::default()
    }
    .with_delay_seconds(props.delay);
    let trigger = use_scroll_trigger(options);

    html! {
        <div
            ref={trigger.node}
            class={props.class.clone()}
            style={props.variant.style(trigger.state, 0.0)}
            role={props.aria_label.as_ref().map(|_| AttrValue::from("region"))}
            aria-label={props.aria_label.clone()}
        >
            {props.children.clone()}
        </div>
    }
}

/// Pointer handlers plus the inline style of a hover variant.
pub struct HoverBinding {
    pub style: String,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
    pub onmousedown: Callback<MouseEvent>,
    pub onmouseup: Callback<MouseEvent>,
    pub hovered: bool,
}

#[hook]
pub fn use_hover(variant: HoverVariant) -> HoverBinding {
    let reduce = use_reduced_motion();
    let hovered = use_state_eq(|| false);
    let pressed = use_state_eq(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(false);
            pressed.set(false);
        })
    };
    let onmousedown = {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| pressed.set(true))
    };
    let onmouseup = {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| pressed.set(false))
    };

    HoverBinding {
        style: variant.style(*hovered, *pressed, reduce),
        onmouseenter,
        onmouseleave,
        onmousedown,
        onmouseup,
        hovered: *hovered,
    }
}
