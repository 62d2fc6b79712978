use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "gh-pages"))]
    #[at("/")]
    Home,
    #[cfg(feature = "gh-pages")]
    #[at("/tecnicas_java/")]
    Home,

    #[not_found]
    #[cfg(not(feature = "gh-pages"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "gh-pages")]
    #[at("/tecnicas_java/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::home::HomePage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class={classes!("flex", "flex-col", "bg-background", "text-foreground")} style="min-height: 100vh; min-height: 100svh;">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}
