use crate::{
    content::{CliTool, Icon, SectionId, CLI_TOOLS},
    frontend::{
        motion::{use_hover, use_scroll_trigger},
        section::SectionFrame,
    },
    motion::{RevealState, TriggerOptions, HOVER_SUBTLE, STAGGER_CHILD, STAGGER_CONTAINER},
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct CliCardProps {
    tool: &'static CliTool,
    reveal: RevealState,
    index: usize,
}

#[function_component(CliCard)]
fn cli_card(props: &CliCardProps) -> Html {
    let tool = props.tool;
    let hover = use_hover(HOVER_SUBTLE);
    let reveal_style = STAGGER_CHILD.style(props.reveal, STAGGER_CONTAINER.child_delay(props.index));

    html! {
        <li style={reveal_style}>
            <article
                class="flex h-full flex-col rounded-xl border border-gray-200 bg-white p-6 shadow-sm dark:border-gray-700 dark:bg-gray-800"
                style={hover.style}
                onmouseenter={hover.onmouseenter}
                onmouseleave={hover.onmouseleave}
            >
                <div class="mb-3 flex items-center gap-3">
                    <span class="flex h-10 w-10 items-center justify-center rounded-lg bg-gray-900 text-emerald-400 dark:bg-black">
                        <i class={tool.icon.class()} aria-hidden="true"></i>
                    </span>
                    <h3 class="font-mono text-lg font-semibold text-gray-900 dark:text-white">{tool.title}</h3>
                </div>
                <p class="text-gray-700 dark:text-gray-300">{tool.description}</p>
                <ul class="mt-4 flex flex-wrap gap-2" aria-label="Tags">
                    { for tool.tags.iter().map(|tag| html! {
                        <li class="rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-medium text-gray-700 dark:bg-gray-700 dark:text-gray-200">
                            {*tag}
                        </li>
                    }) }
                </ul>
                if let Some(code) = tool.code_example {
                    <pre class="mt-4 overflow-x-auto rounded-lg bg-gray-900 p-4 text-sm text-emerald-300"><code>{code}</code></pre>
                }
                <a
                    href={tool.github_link}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mt-auto inline-flex items-center gap-2 self-start pt-4 text-sm font-semibold text-sky-700 hover:underline dark:text-sky-400"
                >
                    <i class={Icon::Github.class()} aria-hidden="true"></i>
                    {"View on GitHub"}
                    <span class="sr-only">{format!(" ({} opens in a new tab)", tool.title)}</span>
                </a>
            </article>
        </li>
    }
}

#[function_component(CliTools)]
pub fn cli_tools() -> Html {
    let trigger = use_scroll_trigger(TriggerOptions::default());

    html! {
        <SectionFrame id={SectionId::Cli} icon={Icon::Terminal} class="bg-white dark:bg-gray-900">
            <ul
                ref={trigger.node}
                class="grid gap-6 md:grid-cols-2"
                style={STAGGER_CONTAINER.style(trigger.state, 0.0)}
            >
                { for CLI_TOOLS.iter().enumerate().map(|(index, tool)| html! {
                    <CliCard key={tool.id} tool={tool} reveal={trigger.state} index={index} />
                }) }
            </ul>
        </SectionFrame>
    }
}
