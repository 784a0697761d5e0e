mod image;
mod motion;
mod nav;
mod section;
mod sections;
mod telemetry;
mod theme;

use crate::{
    content::SectionId,
    state::{initial_section, resolve_scroll, scroll_target_top, ScrollTarget},
};
use motion::{use_reduced_motion, ReducedMotionProvider};
use nav::{NavBar, NAV_ELEMENT_ID};
use sections::{About, Blender, Career, CliTools, Contact, Footer, Hero, Publications, Teaching};
use theme::{use_theme, ThemeHandle};
use wasm_bindgen::JsValue;
use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

const MOUNT_ID: &str = "app";
const EXPLAIN_ENDPOINT_ATTRIBUTE: &str = "data-explain-endpoint";

/// A navigation request. `seq` changes on every click so re-selecting the
/// current section scrolls again.
#[derive(Clone, Copy, PartialEq, Eq)]
struct ActiveSection {
    id: SectionId,
    seq: u32,
}

fn location_hash() -> Option<String> {
    window()?
        .location()
        .hash()
        .ok()
        .filter(|hash| !hash.is_empty())
}

fn replace_hash(id: SectionId) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", id.anchor())));
}

fn scroll_to(target: ScrollTarget, smooth: bool) {
    let Some(win) = window() else {
        return;
    };

    let top = match target {
        ScrollTarget::Stay => {
            tracing::info!(hash = ?location_hash(), "hash names no section");
            return;
        }
        ScrollTarget::Top => 0.0,
        ScrollTarget::Section(id) => {
            let Some(document) = win.document() else {
                return;
            };
            let Some(element) = document.get_element_by_id(id.anchor()) else {
                tracing::warn!(section = id.anchor(), "section element missing");
                return;
            };
            let nav_height = document
                .get_element_by_id(NAV_ELEMENT_ID)
                .map(|nav| nav.get_bounding_client_rect().height())
                .unwrap_or(0.0);
            let scroll_y = win.scroll_y().unwrap_or(0.0);
            scroll_target_top(element.get_bounding_client_rect().top(), scroll_y, nav_height)
        }
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(if smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    win.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
struct PageProps {
    explain_endpoint: Option<AttrValue>,
}

fn render_section(id: SectionId, props: &PageProps) -> Html {
    match id {
        SectionId::Home => html! { <Hero key={id.anchor()} /> },
        SectionId::About => html! { <About key={id.anchor()} /> },
        SectionId::Scientist => html! { <Career key={id.anchor()} /> },
        SectionId::Publications => html! {
            <Publications key={id.anchor()} explain_endpoint={props.explain_endpoint.clone()} />
        },
        SectionId::Blender => html! { <Blender key={id.anchor()} /> },
        SectionId::Cli => html! { <CliTools key={id.anchor()} /> },
        SectionId::Teaching => html! { <Teaching key={id.anchor()} /> },
        SectionId::Contact => html! { <Contact key={id.anchor()} /> },
    }
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let reduce = use_reduced_motion();
    let active = use_state_eq(|| {
        let hash = location_hash();
        let id = initial_section(hash.as_deref());
        tracing::info!(hash = ?hash, section = id.anchor(), "initial section resolved");
        ActiveSection { id, seq: 0 }
    });

    {
        use_effect_with(*active, move |active| {
            // The location hash only drives the first scroll; later requests
            // come from the navigation bar.
            let hash = (active.seq == 0).then(location_hash).flatten();
            scroll_to(resolve_scroll(active.id, hash.as_deref()), !reduce);
            || ()
        });
    }

    let on_navigate = {
        let active = active.clone();
        Callback::from(move |id: SectionId| {
            replace_hash(id);
            active.set(ActiveSection {
                id,
                seq: active.seq.wrapping_add(1),
            });
        })
    };

    html! {
        <>
            <a
                href="#main-content"
                class="sr-only focus:not-sr-only focus:fixed focus:left-4 focus:top-4 focus:z-50 focus:rounded focus:bg-white focus:px-4 focus:py-2 focus:text-gray-900"
            >
                {"Skip to main content"}
            </a>
            <NavBar active={active.id} on_navigate={on_navigate} />
            <main id="main-content">
                { for SectionId::ALL.into_iter().map(|id| render_section(id, props)) }
            </main>
            <Footer />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub explain_endpoint: Option<AttrValue>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let theme = use_theme();

    html! {
        <ContextProvider<ThemeHandle> context={theme}>
            <ReducedMotionProvider>
                <div class="min-h-screen bg-white text-gray-900 transition-colors dark:bg-gray-900 dark:text-gray-100">
                    <Page explain_endpoint={props.explain_endpoint.clone()} />
                </div>
            </ReducedMotionProvider>
        </ContextProvider<ThemeHandle>>
    }
}

pub fn run() {
    telemetry::init();

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
        .expect("missing #app mount point");
    let explain_endpoint = root
        .get_attribute(EXPLAIN_ENDPOINT_ATTRIBUTE)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(AttrValue::from);

    yew::Renderer::<App>::with_root_and_props(root, AppProps { explain_endpoint }).render();
}
