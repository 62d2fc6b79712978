use tecnicas_java_shared::navigation::{is_activation_key, NavTag};
use yew::prelude::*;

use crate::{
    config::{asset_path, JAVA_LOGO},
    i18n::{current::hero as t, fill_one},
    navigation::navigate_to_tag,
};

fn tag_palette(index: usize) -> Classes {
    match index % 4 {
        0 | 3 => classes!(
            "bg-primary/20",
            "border-primary/50",
            "text-primary",
            "hover:bg-primary/30",
            "hover:border-primary/70",
            "focus:ring-primary"
        ),
        1 => classes!(
            "bg-secondary/20",
            "border-secondary/50",
            "text-secondary",
            "hover:bg-secondary/30",
            "hover:border-secondary/70",
            "focus:ring-secondary"
        ),
        _ => classes!(
            "bg-accent/20",
            "border-accent/50",
            "text-accent",
            "hover:bg-accent/30",
            "hover:border-accent/70",
            "focus:ring-accent"
        ),
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let tags = NavTag::ALL.into_iter().enumerate().map(|(index, tag)| {
        let onclick = Callback::from(move |_: MouseEvent| navigate_to_tag(tag.label()));
        let onkeydown = Callback::from(move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) {
                event.prevent_default();
                navigate_to_tag(tag.label());
            }
        });

        html! {
            <button
                key={tag.label()}
                type="button"
                class={classes!(
                    "px-4",
                    "py-2",
                    "border",
                    "rounded-full",
                    "text-sm",
                    "transition-all",
                    "duration-300",
                    "hover:scale-105",
                    "hover:shadow-lg",
                    "cursor-pointer",
                    "focus:outline-none",
                    "focus:ring-2",
                    "focus:ring-offset-2",
                    tag_palette(index)
                )}
                aria-label={fill_one(t::TAG_ARIA_TEMPLATE, tag.label())}
                onclick={onclick}
                onkeydown={onkeydown}
            >
                { tag.label() }
            </button>
        }
    });

    html! {
        <header class={classes!("relative", "overflow-hidden", "border-b", "border-border")}>
            <div class={classes!(
                "absolute",
                "inset-0",
                "bg-gradient-to-br",
                "from-primary/10",
                "via-transparent",
                "to-secondary/10"
            )}></div>
            <div class={classes!("absolute", "inset-0", "hero-dots")}></div>

            <section class={classes!("relative", "max-w-7xl", "mx-auto", "px-4", "py-24", "sm:px-6", "lg:px-8")}>
                <div class={classes!("text-center", "space-y-6")}>
                    <h1 class={classes!("text-5xl", "sm:text-7xl", "font-bold", "text-balance")}>
                        <span class="text-foreground">{ t::TITLE_PREFIX }</span>
                        <span class={classes!("text-primary", "glow-text")}>{ t::TITLE_HIGHLIGHT }</span>
                        <img
                            src={asset_path(JAVA_LOGO)}
                            alt={t::LOGO_ALT}
                            width="60"
                            height="60"
                            class={classes!("inline-block", "ml-8", "align-middle")}
                        />
                    </h1>
                    <p class={classes!(
                        "text-xl",
                        "sm:text-2xl",
                        "text-muted-foreground",
                        "max-w-3xl",
                        "mx-auto",
                        "text-balance"
                    )}>
                        { t::TAGLINE }
                    </p>
                    <nav class={classes!("flex", "gap-2", "justify-center", "flex-wrap")}>
                        { for tags }
                    </nav>
                </div>
            </section>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::tag_palette;

    #[test]
    fn tag_palette_cycles_primary_secondary_accent_primary() {
        let colours: Vec<_> = (0..4)
            .map(|index| {
                let classes = tag_palette(index);
                ["primary", "secondary", "accent"]
                    .into_iter()
                    .find(|colour| classes.contains(format!("text-{colour}")))
                    .unwrap_or("none")
            })
            .collect();
        assert_eq!(colours, ["primary", "secondary", "accent", "primary"]);
    }
}
