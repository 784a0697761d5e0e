use crate::{
    assets,
    content::{Icon, Project, SectionId, PROJECTS},
    frontend::{
        image::{LazyImage, ResponsiveImage},
        motion::{use_hover, use_reduced_motion, AnimatedSection},
        section::SectionFrame,
    },
    motion::{
        seconds_to_ms, Presence, CARD_HOVER, CLOSE_SPRING_ROTATE, FADE_IN_UP, IMAGE_SPRING_SCALE,
        OVERLAY_FADE,
    },
    state::{
        gallery_caption, has_gallery_controls, needs_show_more, truncate_description,
        GalleryCursor, Lightbox as LightboxSlot, MasterToggle,
    },
};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

/// One frame; enough for the entering pose to paint before transitioning.
const ENTER_FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: &'static Project,
    pub galleries_open: bool,
    /// Master-toggle session; a cursor from an older session reads as 0.
    pub session: u32,
    pub on_open_image: Callback<String>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let hover = use_hover(CARD_HOVER);
    let show_full = use_state_eq(|| false);
    let cursor = use_state_eq(GalleryCursor::default);

    let len = project.gallery_images.len();
    let index = cursor.index(props.session, len);
    let collapsible = needs_show_more(project.description, project.artistic_statement);

    let on_prev = {
        let cursor = cursor.clone();
        let session = props.session;
        Callback::from(move |_: MouseEvent| cursor.set(cursor.prev(session, len)))
    };
    let on_next = {
        let cursor = cursor.clone();
        let session = props.session;
        Callback::from(move |_: MouseEvent| cursor.set(cursor.next(session, len)))
    };
    let on_show_more = {
        let show_full = show_full.clone();
        Callback::from(move |_: MouseEvent| show_full.set(!*show_full))
    };

    let description = if collapsible && !*show_full {
        truncate_description(project.description).into_owned()
    } else {
        project.description.to_string()
    };
    let statement = project
        .artistic_statement
        .filter(|_| !collapsible || *show_full);
    let details_id = format!("project-{}-description", project.id);

    html! {
        <article
            class="flex flex-col overflow-hidden rounded-xl border border-gray-200 bg-white shadow-sm dark:border-gray-700 dark:bg-gray-800"
            style={hover.style}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            <LazyImage
                image_name={project.main_image}
                alt={format!("{} main render", project.title)}
                priority={true}
                sizes="(min-width: 768px) 50vw, 100vw"
                class="aspect-video w-full"
                on_select={props.on_open_image.clone()}
            />
            <div class="flex flex-1 flex-col p-6">
                <h3 class="text-xl font-semibold text-gray-900 dark:text-white">{project.title}</h3>
                <div id={details_id.clone()} class="mt-2 space-y-2 text-gray-700 dark:text-gray-300">
                    <p>{description}</p>
                    if let Some(statement) = statement {
                        <p class="italic text-gray-600 dark:text-gray-400">{statement}</p>
                    }
                </div>
                if collapsible {
                    <button
                        type="button"
                        class="mt-2 self-start text-sm font-semibold text-sky-700 hover:underline dark:text-sky-400"
                        aria-expanded={show_full.to_string()}
                        aria-controls={details_id}
                        onclick={on_show_more}
                    >
                        {if *show_full { "Show Less" } else { "Show More" }}
                    </button>
                }
                if props.galleries_open && len > 0 {
                    <div class="mt-6" role="group" aria-label={format!("{} gallery", project.title)}>
                        <div class="relative">
                            <LazyImage
                                image_name={project.gallery_images[index]}
                                should_load={props.galleries_open}
                                alt={format!("{} image {}", project.title, index + 1)}
                                class="aspect-video w-full rounded-lg"
                                on_select={props.on_open_image.clone()}
                            />
                            if has_gallery_controls(len) {
                                <button
                                    type="button"
                                    class="absolute left-2 top-1/2 flex h-10 w-10 -translate-y-1/2 items-center justify-center rounded-full bg-black/50 text-white hover:bg-black/70"
                                    aria-label="Previous image"
                                    onclick={on_prev}
                                >
                                    <i class="fa-solid fa-chevron-left" aria-hidden="true"></i>
                                </button>
                                <button
                                    type="button"
                                    class="absolute right-2 top-1/2 flex h-10 w-10 -translate-y-1/2 items-center justify-center rounded-full bg-black/50 text-white hover:bg-black/70"
                                    aria-label="Next image"
                                    onclick={on_next}
                                >
                                    <i class="fa-solid fa-chevron-right" aria-hidden="true"></i>
                                </button>
                            }
                        </div>
                        if has_gallery_controls(len) {
                            <p class="mt-2 text-center text-sm text-gray-500 dark:text-gray-400" aria-live="polite">
                                {gallery_caption(index, len)}
                            </p>
                        }
                    </div>
                }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub target: Option<AttrValue>,
    pub on_close: Callback<()>,
}

/// Modal image viewer. Stays mounted through its exit transition.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let reduce = use_reduced_motion();
    let presence = use_state_eq(|| Presence::initial(props.target.is_some()));
    let shown = use_mut_ref(|| props.target.clone());
    let settle_timer = use_mut_ref(|| None::<Timeout>);

    if props.target.is_some() {
        *shown.borrow_mut() = props.target.clone();
    }

    {
        let presence = presence.clone();
        let settle_timer = settle_timer.clone();
        use_effect_with(props.target.is_some(), move |present| {
            let next = presence.update(*present);
            presence.set(next);

            let wait_ms = match next {
                Presence::Entering => Some(ENTER_FRAME_MS),
                Presence::Exiting if reduce => Some(0),
                Presence::Exiting => Some(seconds_to_ms(OVERLAY_FADE.transition.seconds())),
                _ => None,
            };
            *settle_timer.borrow_mut() = wait_ms.map(|ms| {
                let presence = presence.clone();
                Timeout::new(ms, move || presence.set(next.settle()))
            });

            move || {
                settle_timer.borrow_mut().take();
            }
        });
    }

    {
        let on_close = props.on_close.clone();
        use_effect_with(props.target.is_some(), move |open| {
            let listener = open
                .then(|| window().and_then(|w| w.document()))
                .flatten()
                .map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .is_some_and(|event| event.key() == "Escape");
                        if escape {
                            on_close.emit(());
                        }
                    })
                });
            move || drop(listener)
        });
    }

    if !presence.is_mounted() {
        return Html::default();
    }
    let Some(target) = shown.borrow().clone() else {
        return Html::default();
    };

    let state = presence.reveal_state(reduce);
    let resolved = assets::resolve_url(&target);
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4"
            role="dialog"
            aria-modal="true"
            aria-label="Image preview"
            style={OVERLAY_FADE.style(state, 0.0)}
            onclick={close.clone()}
        >
            <button
                type="button"
                class="absolute right-4 top-4 flex h-11 w-11 items-center justify-center rounded-full bg-white/10 text-2xl text-white hover:bg-white/20"
                aria-label="Close image preview"
                style={CLOSE_SPRING_ROTATE.style(state, 0.0)}
                onclick={close}
            >
                <i class="fa-solid fa-xmark" aria-hidden="true"></i>
            </button>
            <div
                class="max-h-full max-w-6xl overflow-auto"
                style={IMAGE_SPRING_SCALE.style(state, 0.0)}
                onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
            >
                <ResponsiveImage
                    src={resolved.as_ref().map_or_else(|| target.clone(), |asset| AttrValue::from(asset.src))}
                    modern_src={resolved.as_ref().and_then(|asset| asset.modern_src).map(AttrValue::from)}
                    derive_modern={resolved.is_none()}
                    alt="Enlarged render"
                    priority={true}
                    img_class="object-contain"
                    class="rounded-lg"
                />
            </div>
        </div>
    }
}

#[function_component(Blender)]
pub fn blender() -> Html {
    let master = use_state_eq(MasterToggle::default);
    let lightbox = use_state_eq(LightboxSlot::default);

    let on_master = {
        let master = master.clone();
        Callback::from(move |_: MouseEvent| master.set(master.toggled()))
    };
    let on_open_image = {
        let lightbox = lightbox.clone();
        Callback::from(move |url: String| {
            let mut next = LightboxSlot::default();
            next.open(url);
            lightbox.set(next);
        })
    };
    let on_close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: ()| lightbox.set(LightboxSlot::default()))
    };

    html! {
        <SectionFrame id={SectionId::Blender} icon={Icon::Cube} class="bg-gray-50 dark:bg-gray-950">
            <div class="mb-8 flex justify-center">
                <button
                    type="button"
                    class="inline-flex items-center gap-2 rounded-lg bg-sky-600 px-5 py-2.5 font-semibold text-white shadow transition-colors hover:bg-sky-700"
                    aria-pressed={master.open.to_string()}
                    onclick={on_master}
                >
                    <i class={if master.open { "fa-solid fa-eye-slash" } else { "fa-solid fa-images" }} aria-hidden="true"></i>
                    {master.label()}
                </button>
            </div>
            <div class="grid gap-8 md:grid-cols-2">
                { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                    <AnimatedSection key={project.id} variant={FADE_IN_UP} delay={index as f32 * 0.1}>
                        <ProjectCard
                            project={project}
                            galleries_open={master.open}
                            session={master.session}
                            on_open_image={on_open_image.clone()}
                        />
                    </AnimatedSection>
                }) }
            </div>
            <Lightbox
                target={lightbox.target().map(|url| AttrValue::from(url.to_string()))}
                on_close={on_close}
            />
        </SectionFrame>
    }
}
