use crate::theme::{follows_system, Theme, DARK_CLASS, THEME_KEY};
use gloo_events::EventListener;
use web_sys::{window, MediaQueryList, Storage};
use yew::prelude::*;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// What components see of the theme controller.
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

impl ThemeHandle {
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn read_stored_theme() -> Option<Theme> {
    let value = local_storage()?.get_item(THEME_KEY).ok().flatten()?;
    Theme::from_stored(&value)
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_stored());
    }
}

fn dark_query() -> Option<MediaQueryList> {
    window()?.match_media(DARK_QUERY).ok().flatten()
}

fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
}

/// Theme controller: resolves the initial theme, mirrors it onto the root
/// element and follows the OS preference until the user picks one.
#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| {
        Theme::resolve(
            read_stored_theme(),
            dark_query().map(|query| query.matches()),
        )
    });

    {
        let current = *theme;
        use_effect_with(current, move |current| {
            apply_theme(*current);
            || ()
        });
    }

    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let listener = dark_query().map(|query| {
                let source = query.clone();
                EventListener::new(&query, "change", move |_| {
                    // Applied but not stored: only an explicit toggle persists.
                    if follows_system(read_stored_theme()) {
                        let next = Theme::from_dark(source.matches());
                        apply_theme(next);
                        theme.set(next);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = (*theme).toggled();
            persist_theme(next);
            apply_theme(next);
            theme.set(next);
        })
    };

    ThemeHandle {
        theme: *theme,
        toggle,
    }
}
