use tecnicas_java_shared::highlight::{highlight_code, HighlightedLine, Token, DEFAULT_LANGUAGE};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    hooks::use_copy_feedback,
    i18n::current::code_block as t,
};

#[derive(Properties, PartialEq)]
pub struct CodeBlockProps {
    pub code: AttrValue,

    #[prop_or(AttrValue::Static(DEFAULT_LANGUAGE))]
    pub language: AttrValue,

    #[prop_or(true)]
    pub show_line_numbers: bool,
}

/// Line-numbered, highlighted snippet in a window frame with a copy button.
/// The copy button always copies `code` itself, never the rendered markup.
#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    let CodeBlockProps {
        code,
        language,
        show_line_numbers,
    } = props;

    let lines = use_memo((code.clone(), language.clone()), |(code, language)| {
        highlight_code(language, code)
    });
    let (copied, on_copy) = use_copy_feedback(code.clone());

    let last_line = lines.len();
    let body = lines
        .iter()
        .map(|line| render_line(line, *show_line_numbers, line.number == last_line))
        .collect::<Html>();

    html! {
        <div class={classes!("relative", "group")}>
            <div class={classes!(
                "absolute",
                "-inset-0.5",
                "bg-gradient-to-r",
                "from-primary/60",
                "via-accent/40",
                "to-secondary/60",
                "rounded-xl",
                "opacity-70",
                "blur-lg",
                "group-hover:opacity-100",
                "transition-all",
                "duration-500",
                "animate-pulse-slow"
            )}></div>

            <div class={classes!(
                "relative",
                "bg-gray-900/95",
                "border",
                "border-gray-700",
                "rounded-xl",
                "overflow-hidden",
                "backdrop-blur-sm",
                "transition-all",
                "duration-300",
                "group-hover:border-primary/30"
            )}>
                <div class={classes!(
                    "flex",
                    "items-center",
                    "justify-between",
                    "px-4",
                    "py-3",
                    "border-b",
                    "border-gray-700",
                    "bg-gray-800/80"
                )}>
                    <div class={classes!("flex", "items-center", "space-x-2")}>
                        <div class={classes!("flex", "space-x-1.5")} aria-hidden="true">
                            <div class={classes!("w-3", "h-3", "rounded-full", "bg-red-500")}></div>
                            <div class={classes!("w-3", "h-3", "rounded-full", "bg-yellow-500")}></div>
                            <div class={classes!("w-3", "h-3", "rounded-full", "bg-green-500")}></div>
                        </div>
                        <span class={classes!(
                            "text-xs",
                            "font-mono",
                            "text-gray-300",
                            "bg-gray-700",
                            "px-2",
                            "py-1",
                            "rounded-md",
                            "border",
                            "border-gray-600"
                        )}>
                            { language.clone() }
                        </span>
                    </div>

                    <button
                        type="button"
                        class={classes!(
                            "flex",
                            "items-center",
                            "space-x-1.5",
                            "px-3",
                            "py-1.5",
                            "text-xs",
                            "font-medium",
                            "rounded-lg",
                            "border",
                            "border-gray-600",
                            "bg-gray-700/50",
                            "text-gray-300",
                            "hover:bg-primary/20",
                            "hover:text-primary",
                            "hover:border-primary/50",
                            "transition-all",
                            "duration-200",
                            "active:scale-95"
                        )}
                        aria-label={t::COPY_ARIA}
                        onclick={on_copy}
                    >
                        <Icon name={if copied { IconName::Check } else { IconName::Copy }} size={16} />
                        <span>{ if copied { t::COPIED } else { t::COPY } }</span>
                    </button>
                </div>

                <pre class={classes!("code-viewer", "m-0", "p-4", "overflow-x-auto", "text-sm", "leading-6")}>
                    <code class={classes!("font-mono", format!("language-{language}"))}>
                        { body }
                    </code>
                </pre>
            </div>
        </div>
    }
}

fn render_line(line: &HighlightedLine, show_line_numbers: bool, is_last: bool) -> Html {
    html! {
        <>
            if show_line_numbers {
                <span class="line-number" aria-hidden="true">{ line.number }</span>
            }
            { for line.tokens.iter().map(render_token) }
            if !is_last {
                { "\n" }
            }
        </>
    }
}

fn render_token(token: &Token) -> Html {
    match token.css_style() {
        Some(style) => html! { <span style={style}>{ token.text.clone() }</span> },
        None => html! { { token.text.clone() } },
    }
}
