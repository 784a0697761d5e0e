use super::{motion::use_hover, theme::ThemeHandle};
use crate::{
    content::{NavLink, SectionId, HERO, NAV_LINKS},
    motion::NAV_HOVER,
    state::MobileMenu,
};
use yew::prelude::*;

/// Element id the root measures to offset smooth scrolling.
pub const NAV_ELEMENT_ID: &str = "site-nav";
const MOBILE_PANEL_ID: &str = "mobile-nav";

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: SectionId,
    pub on_navigate: Callback<SectionId>,
}

#[derive(Properties, PartialEq)]
struct NavItemProps {
    link: NavLink,
    active: bool,
    #[prop_or_default]
    stacked: bool,
    on_select: Callback<SectionId>,
}

#[function_component(NavItem)]
fn nav_item(props: &NavItemProps) -> Html {
    let hover = use_hover(NAV_HOVER);
    let onclick = {
        let id = props.link.id;
        let on_select = props.on_select.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_select.emit(id);
        })
    };

    let class = classes!(
        "inline-block", "rounded-md", "px-3", "py-2", "text-sm", "font-medium",
        "transition-colors",
        props.stacked.then_some("w-full"),
        if props.active {
            "text-sky-600 dark:text-sky-400"
        } else {
            "text-gray-700 hover:text-sky-600 dark:text-gray-300 dark:hover:text-sky-400"
        }
    );

    html! {
        <a
            href={format!("#{}", props.link.id.anchor())}
            class={class}
            style={hover.style}
            aria-current={props.active.then(|| AttrValue::from("location"))}
            onclick={onclick}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
            onmousedown={hover.onmousedown}
            onmouseup={hover.onmouseup}
        >
            {props.link.label}
        </a>
    }
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let menu = use_state_eq(MobileMenu::default);
    let theme = use_context::<ThemeHandle>();

    let on_select = {
        let menu = menu.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |id: SectionId| {
            menu.set(menu.after_select());
            on_navigate.emit(id);
        })
    };

    let on_toggle_mobile = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };

    let theme_toggle = theme.map(|theme| {
        let toggle = theme.toggle.clone();
        html! {
            <button
                type="button"
                class="rounded-full p-2 text-gray-700 transition-colors hover:bg-gray-100 dark:text-gray-300 dark:hover:bg-gray-800"
                aria-label={theme.theme.toggle_label()}
                aria-pressed={theme.is_dark().to_string()}
                onclick={Callback::from(move |_: MouseEvent| toggle.emit(()))}
            >
                <i class={theme.theme.icon()} aria-hidden="true"></i>
            </button>
        }
    });

    let links = |stacked: bool| -> Html {
        NAV_LINKS
            .iter()
            .map(|link| {
                html! {
                    <li key={link.id.anchor()}>
                        <NavItem
                            link={*link}
                            active={link.id == props.active}
                            stacked={stacked}
                            on_select={on_select.clone()}
                        />
                    </li>
                }
            })
            .collect()
    };

    html! {
        <nav
            id={NAV_ELEMENT_ID}
            class="sticky top-0 z-40 border-b border-gray-200 bg-white/90 backdrop-blur dark:border-gray-800 dark:bg-gray-900/90"
            aria-label="Main navigation"
        >
            <div class="container mx-auto flex max-w-6xl items-center justify-between px-4 py-3">
                <a
                    href="#home"
                    class="text-lg font-bold text-gray-900 dark:text-white"
                    onclick={{
                        let on_select = on_select.clone();
                        Callback::from(move |event: MouseEvent| {
                            event.prevent_default();
                            on_select.emit(SectionId::Home);
                        })
                    }}
                >
                    {HERO.name}
                </a>
                <ul class="hidden items-center gap-1 lg:flex">
                    {links(false)}
                </ul>
                <div class="flex items-center gap-2">
                    {theme_toggle.unwrap_or_default()}
                    <button
                        type="button"
                        class="rounded-md p-2 text-gray-700 dark:text-gray-300 lg:hidden"
                        aria-label={menu.button_label()}
                        aria-expanded={menu.is_open().to_string()}
                        aria-controls={MOBILE_PANEL_ID}
                        onclick={on_toggle_mobile}
                    >
                        <i
                            class={menu.button_icon()}
                            aria-hidden="true"
                        ></i>
                    </button>
                </div>
            </div>
            <ul
                id={MOBILE_PANEL_ID}
                hidden={menu.panel_hidden()}
                class={classes!(
                    menu.is_open().then_some("flex"),
                    "flex-col", "gap-1", "border-t", "border-gray-200", "px-4", "py-3",
                    "dark:border-gray-800", "lg:hidden"
                )}
            >
                {links(true)}
            </ul>
        </nav>
    }
}
