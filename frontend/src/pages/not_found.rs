use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("min-h-screen", "flex", "flex-col", "items-center", "justify-center", "gap-4")}>
            <h2 class={classes!("text-3xl", "font-bold", "text-primary")}>{ t::TITLE }</h2>
            <p class="text-muted-foreground">{ t::BODY }</p>
            <Link<Route> to={Route::Home} classes={classes!("underline", "text-secondary")}>
                { t::BACK_HOME }
            </Link<Route>>
        </main>
    }
}
