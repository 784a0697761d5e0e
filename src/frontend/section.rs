use crate::content::{Icon, SectionId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionFrameProps {
    pub id: SectionId,
    /// Defaults to the section's navigation label.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<Icon>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SectionFrame)]
pub fn section_frame(props: &SectionFrameProps) -> Html {
    let title_id = props.id.title_id();
    let title = props
        .title
        .clone()
        .unwrap_or_else(|| AttrValue::from(props.id.label()));

    html! {
        <section
            id={props.id.anchor()}
            aria-labelledby={title_id.clone()}
            class={classes!("py-16", "md:py-24", props.class.clone())}
        >
            <div class="container mx-auto max-w-6xl px-4">
                <h2
                    id={title_id}
                    class="mb-10 flex items-center justify-center gap-3 text-3xl font-bold text-gray-900 dark:text-white md:text-4xl"
                >
                    if let Some(icon) = props.icon {
                        <i class={classes!(icon.class(), "text-sky-600", "dark:text-sky-400")} aria-hidden="true"></i>
                    }
                    {title}
                </h2>
                {props.children.clone()}
            </div>
        </section>
    }
}
