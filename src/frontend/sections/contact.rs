use crate::{
    content::{ContactAction, Icon, SectionId, CONTACT_ACTIONS},
    frontend::{
        motion::{use_hover, use_reduced_motion, AnimatedSection},
        section::SectionFrame,
    },
    motion::{BUTTON_HOVER, SCALE_IN},
    state::FlipLabels,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FlipButtonProps {
    pub action: &'static ContactAction,
}

/// Link whose label slides out on hover while the alternate label slides in.
/// Only the visible label is exposed to assistive technology.
#[function_component(FlipButton)]
pub fn flip_button(props: &FlipButtonProps) -> Html {
    let action = props.action;
    let reduce = use_reduced_motion();
    let hover = use_hover(BUTTON_HOVER);
    let labels = FlipLabels::for_hover(hover.hovered);

    let slide = if reduce {
        "transition-none"
    } else {
        "transition-transform duration-300 ease-out"
    };
    let label_class = |translate: &'static str| {
        classes!(
            "absolute", "inset-0", "flex", "items-center", "justify-center", "gap-2",
            slide,
            translate
        )
    };

    html! {
        <a
            href={action.href}
            target={action.is_external.then(|| AttrValue::from("_blank"))}
            rel={action.is_external.then(|| AttrValue::from("noopener noreferrer"))}
            aria-label={action.aria_label}
            class={classes!(
                "relative", "block", "h-14", "w-full", "overflow-hidden", "rounded-lg",
                "font-semibold", "text-white", "shadow", "transition-colors",
                if hover.hovered { action.hover_color } else { action.initial_color }
            )}
            style={hover.style}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
            onmousedown={hover.onmousedown}
            onmouseup={hover.onmouseup}
        >
            <span
                class={label_class(labels.initial_translate())}
                aria-hidden={labels.initial_hidden.to_string()}
            >
                <i class={action.icon.class()} aria-hidden="true"></i>
                {action.initial_label}
            </span>
            <span
                class={label_class(labels.hover_translate())}
                aria-hidden={labels.hover_hidden.to_string()}
            >
                {action.hover_label}
                <i class="fa-solid fa-arrow-right" aria-hidden="true"></i>
            </span>
        </a>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <SectionFrame id={SectionId::Contact} icon={Icon::Envelope} class="bg-white dark:bg-gray-900">
            <p class="mx-auto mb-10 max-w-2xl text-center text-gray-700 dark:text-gray-300">
                {"Questions about a paper, a render or a tool? Pick whichever channel suits you."}
            </p>
            <ul class="mx-auto grid max-w-4xl gap-4 sm:grid-cols-2 lg:grid-cols-3">
                { for CONTACT_ACTIONS.iter().enumerate().map(|(index, action)| html! {
                    <li key={action.href}>
                        <AnimatedSection variant={SCALE_IN} delay={index as f32 * 0.08}>
                            <FlipButton action={action} />
                        </AnimatedSection>
                    </li>
                }) }
            </ul>
        </SectionFrame>
    }
}
