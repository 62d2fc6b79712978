use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use tecnicas_java_shared::clipboard::{copy_with_feedback, CopyAction, CopyFeedback};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Window};
use yew::prelude::*;

use crate::{
    clipboard::BrowserClipboard,
    i18n::current::code_block as t,
    logging,
    navigation::{follow_current_fragment, millis},
};

const FRAGMENT_EVENTS: [&str; 2] = ["hashchange", "load"];

/// A window event listener that is removed when dropped.
struct WindowListener {
    window: Window,
    event: &'static str,
    closure: Closure<dyn Fn()>,
}

impl WindowListener {
    fn attach(window: &Window, event: &'static str, handler: fn()) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn()>);
        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            window: window.clone(),
            event,
            closure,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Scroll to the section named in the URL fragment on mount, on `load` and on
/// every `hashchange`, for as long as the calling component is mounted.
///
/// ```rust
/// #[function_component(HomePage)]
/// fn home_page() -> Html {
///     use crate::hooks::use_fragment_navigation;
///     use_fragment_navigation();
///     html! { <main /> }
/// }
/// ```
#[hook]
pub fn use_fragment_navigation() {
    use_effect_with((), move |_| {
        follow_current_fragment();

        let listeners: Vec<WindowListener> = window()
            .map(|win| {
                FRAGMENT_EVENTS
                    .into_iter()
                    .filter_map(|event| WindowListener::attach(&win, event, follow_current_fragment))
                    .collect()
            })
            .unwrap_or_default();

        move || drop(listeners)
    });
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CopyFeedbackState(CopyFeedback);

impl Reducible for CopyFeedbackState {
    type Action = CopyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.apply(action)))
    }
}

/// Copy `code` on click and expose whether the confirmation is showing.
#[hook]
pub fn use_copy_feedback(code: AttrValue) -> (bool, Callback<MouseEvent>) {
    let feedback = use_reducer(CopyFeedbackState::default);

    let on_copy = {
        let dispatcher = feedback.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let dispatcher = dispatcher.clone();
            let code = code.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = copy_with_feedback(
                    &BrowserClipboard,
                    &code,
                    |action| dispatcher.dispatch(action),
                    |delay| TimeoutFuture::new(millis(delay)),
                )
                .await;
                if let Err(err) = result {
                    logging::error(t::COPY_FAILED_LOG, err);
                }
            });
        })
    };

    (feedback.0.is_copied(), on_copy)
}
