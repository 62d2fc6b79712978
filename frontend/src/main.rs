mod clipboard;
mod components;
mod config;
pub mod hooks;
mod i18n;
mod logging;
mod navigation;
mod pages;
mod router;

use tecnicas_java_shared::content::{sections, validate};
use yew::prelude::*;

use crate::i18n::current::content as t;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    if cfg!(debug_assertions) {
        match validate(sections()) {
            Ok(()) => logging::debug(&format!("{} sections loaded", sections().len())),
            Err(err) => logging::error(t::INVALID_LOG, err),
        }
    }
    yew::Renderer::<App>::new().render();
}
