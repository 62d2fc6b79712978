use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    config::{asset_path, DOCUMENT_PDF},
    i18n::current::footer as t,
};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={classes!("border-t", "border-border", "mt-20", "bg-gradient-to-b", "from-background", "to-muted/20")}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8", "py-12", "sm:py-16", "lg:py-20")}>
                <div class={classes!("text-center", "space-y-6", "sm:space-y-8", "lg:space-y-10")}>
                    <div class={classes!("space-y-3", "sm:space-y-4")}>
                        <h3 class={classes!("text-2xl", "sm:text-3xl", "lg:text-4xl", "font-bold", "leading-tight")}>
                            <span class={classes!("text-primary", "glow-text")}>{ t::TITLE_HIGHLIGHT }</span>
                            <span class="text-foreground">{ t::TITLE_REST }</span>
                        </h3>
                        <p class={classes!(
                            "text-muted-foreground",
                            "text-base",
                            "sm:text-lg",
                            "lg:text-xl",
                            "max-w-2xl",
                            "mx-auto",
                            "px-4"
                        )}>
                            { t::SUBTITLE }
                        </p>
                    </div>

                    <div class={classes!("flex", "justify-center", "px-2")}>
                        // 静态文档，新标签页打开
                        <a
                            href={asset_path(DOCUMENT_PDF)}
                            target="_blank"
                            rel="noopener noreferrer"
                            class={classes!(
                                "group",
                                "relative",
                                "inline-flex",
                                "items-center",
                                "justify-center",
                                "w-full",
                                "sm:w-auto",
                                "px-4",
                                "sm:px-6",
                                "lg:px-8",
                                "py-3",
                                "sm:py-4",
                                "font-semibold",
                                "text-foreground",
                                "bg-gradient-to-r",
                                "from-primary/20",
                                "to-secondary/20",
                                "border",
                                "border-primary/30",
                                "rounded-xl",
                                "shadow-lg",
                                "hover:shadow-xl",
                                "transition-all",
                                "duration-300",
                                "hover:scale-105",
                                "focus:outline-none",
                                "focus:ring-2",
                                "focus:ring-primary"
                            )}
                        >
                            <span class={classes!("relative", "z-10", "flex", "items-center", "space-x-2", "sm:space-x-3")}>
                                <Icon name={IconName::Document} size={22} class={classes!("text-primary", "group-hover:scale-110")} />
                                <span class={classes!(
                                    "bg-gradient-to-r",
                                    "from-primary",
                                    "to-secondary",
                                    "bg-clip-text",
                                    "text-transparent",
                                    "whitespace-nowrap"
                                )}>
                                    { t::DOCUMENT_LINK }
                                </span>
                                <Icon name={IconName::ExternalLink} size={18} class={classes!("text-secondary", "group-hover:translate-x-1")} />
                            </span>
                        </a>
                    </div>

                    <div class={classes!("pt-4", "sm:pt-6")}>
                        <p class={classes!("text-muted-foreground/80", "italic", "text-sm", "sm:text-base")}>
                            { t::CLOSING_NOTE }
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
