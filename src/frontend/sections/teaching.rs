use crate::{
    content::{Icon, SectionId, TEACHING},
    frontend::{motion::AnimatedSection, section::SectionFrame},
    motion::{FADE_IN_UP, FADE_IN_UP_LARGE},
};
use yew::prelude::*;

#[function_component(Teaching)]
pub fn teaching() -> Html {
    html! {
        <SectionFrame id={SectionId::Teaching} icon={Icon::Chalkboard} class="bg-gray-50 dark:bg-gray-950">
            <div class="mx-auto max-w-3xl">
                <AnimatedSection variant={FADE_IN_UP_LARGE}>
                    <p class="text-lg leading-relaxed text-gray-700 dark:text-gray-300">{TEACHING.narrative}</p>
                </AnimatedSection>
                <AnimatedSection variant={FADE_IN_UP} delay={0.2}>
                    <ul class="mt-6 list-disc space-y-2 pl-6 text-gray-700 dark:text-gray-300">
                        { for TEACHING.bullets.iter().map(|bullet| html! { <li>{*bullet}</li> }) }
                    </ul>
                    <a
                        href={TEACHING.link_href}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="mt-6 inline-flex items-center gap-2 font-semibold text-sky-700 hover:underline dark:text-sky-400"
                    >
                        {TEACHING.link_label}
                        <i class="fa-solid fa-arrow-up-right-from-square" aria-hidden="true"></i>
                        <span class="sr-only">{" (opens in a new tab)"}</span>
                    </a>
                </AnimatedSection>
            </div>
        </SectionFrame>
    }
}
