use crate::{
    content::{Icon, Milestone, SectionId, MILESTONES},
    frontend::{motion::AnimatedSection, section::SectionFrame},
    motion::SLIDE_IN_LEFT,
    state::MilestoneExpansion,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct MilestoneCardProps {
    milestone: &'static Milestone,
    expanded: bool,
    on_toggle: Callback<u32>,
}

#[function_component(MilestoneCard)]
fn milestone_card(props: &MilestoneCardProps) -> Html {
    let milestone = props.milestone;
    let details_id = format!("milestone-{}-details", milestone.id);

    let toggle = milestone.more_details.map(|_| {
        let id = milestone.id;
        let on_toggle = props.on_toggle.clone();
        html! {
            <button
                type="button"
                class="mt-4 inline-flex items-center gap-2 text-sm font-semibold text-sky-700 hover:underline dark:text-sky-400"
                aria-expanded={props.expanded.to_string()}
                aria-controls={details_id.clone()}
                onclick={Callback::from(move |_: MouseEvent| on_toggle.emit(id))}
            >
                {if props.expanded { "View Less" } else { "View More" }}
                <i
                    class={if props.expanded { "fa-solid fa-chevron-up" } else { "fa-solid fa-chevron-down" }}
                    aria-hidden="true"
                ></i>
            </button>
        }
    });

    html! {
        <article class="relative rounded-xl border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800">
            <div class="flex items-start gap-4">
                <span class="flex h-12 w-12 shrink-0 items-center justify-center rounded-full bg-sky-100 text-sky-700 dark:bg-sky-900/50 dark:text-sky-300">
                    <i class={milestone.icon.class()} aria-hidden="true"></i>
                </span>
                <div class="flex-1">
                    <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{milestone.role}</h3>
                    <p class="text-gray-700 dark:text-gray-300">{milestone.institution}</p>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{milestone.duration}</p>
                    <p class="mt-3 text-gray-700 dark:text-gray-300">{milestone.description}</p>
                    {toggle.unwrap_or_default()}
                    if let Some(details) = milestone.more_details {
                        <div
                            id={details_id.clone()}
                            hidden={!props.expanded}
                            class="mt-4 rounded-lg bg-gray-50 p-4 text-gray-700 dark:bg-gray-900/60 dark:text-gray-300"
                        >
                            {details}
                        </div>
                    }
                </div>
            </div>
        </article>
    }
}

#[function_component(Career)]
pub fn career() -> Html {
    let expansion = use_state_eq(MilestoneExpansion::default);

    let on_toggle = {
        let expansion = expansion.clone();
        Callback::from(move |id: u32| expansion.set(expansion.toggle(id)))
    };

    html! {
        <SectionFrame id={SectionId::Scientist} icon={Icon::GraduationCap} class="bg-gray-50 dark:bg-gray-950">
            <ol class="mx-auto max-w-3xl space-y-6">
                { for MILESTONES.iter().enumerate().map(|(index, milestone)| html! {
                    <li key={milestone.id}>
                        <AnimatedSection variant={SLIDE_IN_LEFT} delay={index as f32 * 0.1}>
                            <MilestoneCard
                                milestone={milestone}
                                expanded={expansion.is_expanded(milestone.id)}
                                on_toggle={on_toggle.clone()}
                            />
                        </AnimatedSection>
                    </li>
                }) }
            </ol>
        </SectionFrame>
    }
}
