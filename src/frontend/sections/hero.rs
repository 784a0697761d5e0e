use crate::{
    content::{Icon, SectionId, HERO},
    frontend::{image::LazyImage, motion::AnimatedSection},
    motion::{FADE_IN_UP, SCALE_IN},
};
use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let title_id = SectionId::Home.title_id();

    html! {
        <section
            id={SectionId::Home.anchor()}
            aria-labelledby={title_id.clone()}
            class="bg-gradient-to-b from-sky-50 to-white py-20 dark:from-gray-900 dark:to-gray-900 md:py-28"
        >
            <div class="container mx-auto flex max-w-6xl flex-col items-center gap-12 px-4 md:flex-row">
                <AnimatedSection variant={SCALE_IN} class="shrink-0">
                    <LazyImage
                        image_name={HERO.profile_image}
                        alt={HERO.profile_alt}
                        priority={true}
                        sizes="(min-width: 768px) 18rem, 12rem"
                        class="h-48 w-48 rounded-full shadow-xl ring-4 ring-white dark:ring-gray-800 md:h-72 md:w-72"
                    />
                </AnimatedSection>
                <div class="text-center md:text-left">
                    <AnimatedSection variant={FADE_IN_UP} delay={0.4}>
                        <h1 id={title_id} class="text-4xl font-extrabold text-gray-900 dark:text-white md:text-5xl">
                            {HERO.name}
                        </h1>
                        <p class="mt-2 text-xl font-semibold text-sky-700 dark:text-sky-400">{HERO.title}</p>
                    </AnimatedSection>
                    <AnimatedSection variant={FADE_IN_UP} delay={0.6}>
                        <p class="mt-4 text-lg text-gray-600 dark:text-gray-300">{HERO.subtitle}</p>
                    </AnimatedSection>
                    <AnimatedSection variant={FADE_IN_UP} delay={0.8}>
                        <p class="mt-4 max-w-2xl text-gray-700 dark:text-gray-300">{HERO.body}</p>
                    </AnimatedSection>
                    <AnimatedSection variant={FADE_IN_UP} delay={1.0}>
                        <a
                            href={HERO.cv_href}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="mt-8 inline-flex items-center gap-2 rounded-lg bg-sky-600 px-6 py-3 font-semibold text-white shadow transition-colors hover:bg-sky-700"
                        >
                            <i class={Icon::FilePdf.class()} aria-hidden="true"></i>
                            {HERO.cv_label}
                            <span class="sr-only">{" (opens in a new tab)"}</span>
                        </a>
                    </AnimatedSection>
                </div>
            </div>
        </section>
    }
}
