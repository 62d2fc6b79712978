//! Browser side of section navigation.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use tecnicas_java_shared::navigation::{NavError, NavOutcome, NavigationController, Viewport};
use wasm_bindgen::JsValue;
use web_sys::{window, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::{i18n::current::navigation as t, logging};

pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new() -> Result<Self, NavError> {
        window()
            .map(|window| Self {
                window,
            })
            .ok_or(NavError::NoWindow)
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.window.document()?.get_element_by_id(id)
    }
}

impl Viewport for BrowserViewport {
    fn element_top(&self, id: &str) -> Result<Option<f64>, NavError> {
        Ok(self
            .element(id)
            .map(|element| element.get_bounding_client_rect().top()))
    }

    fn scroll_y(&self) -> Result<f64, NavError> {
        self.window.scroll_y().map_err(dom_error)
    }

    fn set_fragment(&self, id: &str) -> Result<(), NavError> {
        // pushState does not fire hashchange, so the listener will not scroll twice.
        let history = self.window.history().map_err(dom_error)?;
        history
            .push_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")))
            .map_err(dom_error)
    }

    fn smooth_scroll_to(&self, top: f64) -> Result<(), NavError> {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    fn jump_to(&self, id: &str) {
        if let Some(element) = self.element(id) {
            element.scroll_into_view();
        }
    }
}

fn dom_error(value: JsValue) -> NavError {
    NavError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn controller() -> Option<NavigationController<BrowserViewport>> {
    match BrowserViewport::new() {
        Ok(viewport) => Some(NavigationController::new(viewport)),
        Err(err) => {
            logging::error(t::FAILED_LOG, err);
            None
        },
    }
}

fn report(outcome: &NavOutcome) {
    match outcome {
        NavOutcome::Fallback {
            id,
            reason,
        } => logging::error(t::FAILED_LOG, format!("{id}: {reason}")),
        NavOutcome::UnknownLabel(label) => logging::warn(&format!("{}: {label}", t::UNKNOWN_TAG_LOG)),
        other => logging::debug(&format!("{other:?}")),
    }
}

/// Activation of a hero tag.
pub fn navigate_to_tag(label: &str) {
    if let Some(controller) = controller() {
        report(&controller.navigate_to_tag(label));
    }
}

/// Follow `location.hash` once layout has settled. Used on mount, `load` and
/// `hashchange`.
pub fn follow_current_fragment() {
    let Some(controller) = controller() else {
        return;
    };
    let hash = controller.viewport().window.location().hash().unwrap_or_default();
    if hash.is_empty() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = controller
            .follow_fragment_after_settle(&hash, |delay| TimeoutFuture::new(millis(delay)))
            .await;
        report(&outcome);
    });
}

pub fn millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}
