use crate::{
    content::{Icon, SectionId, ABOUT},
    frontend::{motion::AnimatedSection, section::SectionFrame},
    motion::{FADE_IN_UP, SLIDE_IN_RIGHT},
};
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <SectionFrame id={SectionId::About} icon={Icon::User} class="bg-white dark:bg-gray-900">
            <div class="mx-auto max-w-3xl space-y-6">
                { for ABOUT.paragraphs.iter().enumerate().map(|(index, paragraph)| html! {
                    <AnimatedSection variant={FADE_IN_UP} delay={index as f32 * 0.15}>
                        <p class="text-lg leading-relaxed text-gray-700 dark:text-gray-300">{*paragraph}</p>
                    </AnimatedSection>
                }) }
                <AnimatedSection variant={SLIDE_IN_RIGHT} delay={0.3}>
                    <ul class="flex flex-wrap gap-2 pt-2" aria-label="Research interests">
                        { for ABOUT.interests.iter().map(|interest| html! {
                            <li class="rounded-full bg-sky-100 px-3 py-1 text-sm font-medium text-sky-800 dark:bg-sky-900/40 dark:text-sky-300">
                                {*interest}
                            </li>
                        }) }
                    </ul>
                </AnimatedSection>
            </div>
        </SectionFrame>
    }
}
