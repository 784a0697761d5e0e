use crate::assets;
use yew::prelude::*;

#[function_component(Skeleton)]
pub fn skeleton() -> Html {
    html! {
        <div
            class="absolute inset-0 animate-pulse bg-gray-200 dark:bg-gray-700"
            aria-hidden="true"
        />
    }
}

#[derive(Properties, PartialEq)]
struct UnavailableProps {
    alt: AttrValue,
    class: Classes,
}

#[function_component(ImageUnavailable)]
fn image_unavailable(props: &UnavailableProps) -> Html {
    html! {
        <div
            class={classes!(
                "flex", "flex-col", "items-center", "justify-center", "gap-2",
                "bg-gray-100", "dark:bg-gray-800", "text-gray-400", "dark:text-gray-500",
                props.class.clone()
            )}
            role="img"
            aria-label={props.alt.clone()}
        >
            <i class="fa-regular fa-image text-2xl" aria-hidden="true"></i>
            <span class="text-sm">{"Image unavailable"}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResponsiveImageProps {
    pub src: AttrValue,
    /// Modern-format source. When absent it is derived from `src` unless
    /// `derive_modern` is off.
    #[prop_or_default]
    pub modern_src: Option<AttrValue>,
    #[prop_or(true)]
    pub derive_modern: bool,
    pub alt: AttrValue,
    #[prop_or_default]
    pub sizes: Option<AttrValue>,
    #[prop_or_default]
    pub priority: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub img_class: Classes,
    #[prop_or_default]
    pub on_error: Callback<()>,
    #[prop_or_default]
    pub on_load: Callback<()>,
    #[prop_or_default]
    pub on_click: Option<Callback<MouseEvent>>,
}

/// `<picture>` with a modern source ahead of the legacy one, a skeleton
/// until the load event and a neutral slot if loading fails.
#[function_component(ResponsiveImage)]
pub fn responsive_image(props: &ResponsiveImageProps) -> Html {
    let loaded = use_state_eq(|| false);
    let failed = use_state_eq(|| false);

    {
        let loaded = loaded.clone();
        let failed = failed.clone();
        use_effect_with(props.src.clone(), move |_| {
            loaded.set(false);
            failed.set(false);
            || ()
        });
    }

    if *failed {
        return html! { <ImageUnavailable alt={props.alt.clone()} class={props.class.clone()} /> };
    }

    let modern_src = props.modern_src.clone().or_else(|| {
        props
            .derive_modern
            .then(|| assets::modern_variant(&props.src))
            .flatten()
            .map(AttrValue::from)
    });

    let onload = {
        let loaded = loaded.clone();
        let on_load = props.on_load.clone();
        Callback::from(move |_: Event| {
            loaded.set(true);
            on_load.emit(());
        })
    };

    let onerror = {
        let failed = failed.clone();
        let on_error = props.on_error.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            tracing::warn!(src = %src, "image_load_failed");
            failed.set(true);
            on_error.emit(());
        })
    };

    let img_class = classes!(
        "h-full", "w-full", "transition-opacity", "duration-500",
        props.img_class.is_empty().then_some("object-cover"),
        if *loaded { "opacity-100" } else { "opacity-0" },
        props.on_click.is_some().then_some("cursor-zoom-in"),
        props.img_class.clone()
    );

    html! {
        <div class={classes!("relative", "overflow-hidden", props.class.clone())}>
            if !*loaded {
                <Skeleton />
            }
            <picture>
                if let Some(modern_src) = modern_src {
                    <source srcset={modern_src} type="image/webp" sizes={props.sizes.clone()} />
                }
                <img
                    src={props.src.clone()}
                    alt={props.alt.clone()}
                    sizes={props.sizes.clone()}
                    loading={if props.priority { "eager" } else { "lazy" }}
                    decoding="async"
                    class={img_class}
                    onload={onload}
                    onerror={onerror}
                    onclick={props.on_click.clone()}
                />
            </picture>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    /// Logical asset name, without extension.
    pub image_name: AttrValue,
    /// Nothing is resolved or requested while this is off.
    #[prop_or(true)]
    pub should_load: bool,
    pub alt: AttrValue,
    #[prop_or_default]
    pub priority: bool,
    #[prop_or_default]
    pub sizes: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub img_class: Classes,
    /// Receives the resolved URL of the clicked image.
    #[prop_or_default]
    pub on_select: Option<Callback<String>>,
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let resolved = use_memo(
        (props.image_name.clone(), props.should_load),
        |(name, should_load)| {
            let result = assets::resolve_gated(name, *should_load);
            if let Some(Err(error)) = &result {
                tracing::warn!(error = %error, "asset_resolution_failed");
            }
            result
        },
    );

    match resolved.as_ref() {
        None => html! {
            <div class={classes!("relative", "overflow-hidden", props.class.clone())}>
                <Skeleton />
            </div>
        },
        Some(Err(_)) => html! {
            <ImageUnavailable alt={props.alt.clone()} class={props.class.clone()} />
        },
        Some(Ok(asset)) => {
            let on_click = props.on_select.clone().map(|on_select| {
                let src = asset.src.to_string();
                Callback::from(move |_: MouseEvent| on_select.emit(src.clone()))
            });
            html! {
                <ResponsiveImage
                    src={asset.src}
                    modern_src={asset.modern_src.map(AttrValue::from)}
                    derive_modern={false}
                    alt={props.alt.clone()}
                    sizes={props.sizes.clone()}
                    priority={props.priority}
                    class={props.class.clone()}
                    img_class={props.img_class.clone()}
                    on_click={on_click}
                />
            }
        }
    }
}
