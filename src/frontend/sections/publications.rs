use crate::{
    content::{Icon, Publication, SectionId, PUBLICATIONS},
    explain::{ExplainError, ExplainRequest, ExplainResponse, SummaryState},
    frontend::{motion::AnimatedSection, section::SectionFrame},
    motion::FADE_IN_UP,
};
use gloo_net::http::Request;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

enum SummaryAction {
    Begin,
    Succeed(String),
    Fail(ExplainError),
    ToggleVisible,
}

impl Reducible for SummaryState {
    type Action = SummaryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SummaryAction::Begin => {
                if !next.begin() {
                    return self;
                }
            }
            SummaryAction::Succeed(text) => next.succeed(text),
            SummaryAction::Fail(error) => next.fail(&error),
            SummaryAction::ToggleVisible => next.toggle_visible(),
        }
        Rc::new(next)
    }
}

async fn request_explanation(
    endpoint: &str,
    request: &ExplainRequest,
) -> Result<String, ExplainError> {
    let response = Request::post(endpoint)
        .json(request)
        .map_err(|_| ExplainError::Invalid("publication could not be encoded"))?
        .send()
        .await
        .map_err(|_| ExplainError::Network)?;

    let status = response.status();
    match response.json::<ExplainResponse>().await {
        Ok(payload) => payload.into_result(),
        Err(_) if !response.ok() => Err(ExplainError::Status(status)),
        Err(_) => Err(ExplainError::Decode),
    }
}

#[derive(Properties, PartialEq)]
struct ExplainPanelProps {
    publication: &'static Publication,
    endpoint: AttrValue,
}

#[function_component(ExplainPanel)]
fn explain_panel(props: &ExplainPanelProps) -> Html {
    let summary = use_reducer_eq(SummaryState::default);
    let panel_id = format!("publication-{}-summary", props.publication.id);

    let onclick = {
        let summary = summary.clone();
        let endpoint = props.endpoint.clone();
        let publication = props.publication;
        Callback::from(move |_: MouseEvent| {
            if summary.loading {
                return;
            }
            if summary.has_answer() {
                summary.dispatch(SummaryAction::ToggleVisible);
                return;
            }

            summary.dispatch(SummaryAction::Begin);
            let summary = summary.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                let request = ExplainRequest::from_publication(publication);
                match request_explanation(&endpoint, &request).await {
                    Ok(text) => summary.dispatch(SummaryAction::Succeed(text)),
                    Err(error) => {
                        tracing::warn!(
                            publication = publication.id,
                            error_class = error.error_class(),
                            "explain_request_failed"
                        );
                        summary.dispatch(SummaryAction::Fail(error));
                    }
                }
            });
        })
    };

    html! {
        <div class="mt-4">
            <button
                type="button"
                class="inline-flex items-center gap-2 rounded-lg bg-violet-600 px-4 py-2 text-sm font-semibold text-white transition-colors hover:bg-violet-700 disabled:cursor-wait disabled:opacity-60"
                disabled={summary.loading}
                aria-expanded={(summary.visible && (summary.text.is_some() || summary.error.is_some())).to_string()}
                aria-controls={panel_id.clone()}
                onclick={onclick}
            >
                <i
                    class={if summary.loading { "fa-solid fa-spinner fa-spin" } else { "fa-solid fa-wand-magic-sparkles" }}
                    aria-hidden="true"
                ></i>
                {summary.button_label()}
            </button>
            <div id={panel_id} aria-live="polite">
                if summary.visible {
                    if let Some(error) = summary.error.as_deref() {
                        <p class="mt-3 rounded-lg bg-red-50 p-3 text-sm text-red-700 dark:bg-red-900/30 dark:text-red-300">
                            {error.to_string()}
                        </p>
                    } else if let Some(text) = summary.text.as_deref() {
                        <p class="mt-3 rounded-lg bg-violet-50 p-3 text-gray-800 dark:bg-violet-900/30 dark:text-gray-200">
                            {text.to_string()}
                        </p>
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PublicationCardProps {
    publication: &'static Publication,
    explain_endpoint: Option<AttrValue>,
}

#[function_component(PublicationCard)]
fn publication_card(props: &PublicationCardProps) -> Html {
    let publication = props.publication;

    html! {
        <article class="rounded-xl border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800">
            <h3 class="text-lg font-semibold text-gray-900 dark:text-white">{publication.title}</h3>
            <p class="mt-1 italic text-gray-700 dark:text-gray-300">{publication.authors}</p>
            <p class="mt-1 text-sm text-gray-500 dark:text-gray-400">
                {format!("{} ({})", publication.journal, publication.year)}
            </p>
            if let Some(note) = publication.note {
                <p class="mt-2 text-sm font-medium text-sky-700 dark:text-sky-400">{note}</p>
            }
            <a
                href={publication.link}
                target="_blank"
                rel="noopener noreferrer"
                class="mt-3 inline-flex items-center gap-2 text-sm font-semibold text-sky-700 hover:underline dark:text-sky-400"
            >
                {format!("DOI: {}", publication.doi)}
                <i class="fa-solid fa-arrow-up-right-from-square" aria-hidden="true"></i>
                <span class="sr-only">{" (opens in a new tab)"}</span>
            </a>
            if let Some(endpoint) = props.explain_endpoint.clone() {
                <ExplainPanel publication={publication} endpoint={endpoint} />
            }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct PublicationsProps {
    /// Relay URL for plain-language summaries; the button is absent without it.
    #[prop_or_default]
    pub explain_endpoint: Option<AttrValue>,
}

#[function_component(Publications)]
pub fn publications(props: &PublicationsProps) -> Html {
    html! {
        <SectionFrame id={SectionId::Publications} icon={Icon::Book} class="bg-white dark:bg-gray-900">
            <ol class="mx-auto max-w-4xl space-y-6">
                { for PUBLICATIONS.iter().enumerate().map(|(index, publication)| html! {
                    <li key={publication.id}>
                        <AnimatedSection variant={FADE_IN_UP} delay={index as f32 * 0.1}>
                            <PublicationCard
                                publication={publication}
                                explain_endpoint={props.explain_endpoint.clone()}
                            />
                        </AnimatedSection>
                    </li>
                }) }
            </ol>
        </SectionFrame>
    }
}
