//! Anchor navigation between sections.
//!
//! The controller is written against the [`Viewport`] trait so the same flow
//! drives the browser and the in-memory viewport used by the tests. Every
//! failure is absorbed here and reported as a [`NavOutcome`]; navigation is
//! never fatal to the page.

use std::{future::Future, time::Duration};

use thiserror::Error;

/// Clearance left above a section for the page header.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Delay before following a fragment on load/hashchange, so layout settles.
pub const SETTLE_DELAY_MS: u64 = 100;

/// Navigation tags offered by the hero, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTag {
    Enums,
    Formato,
    Random,
    Recursividad,
}

impl NavTag {
    pub const ALL: [NavTag; 4] = [NavTag::Enums, NavTag::Formato, NavTag::Random, NavTag::Recursividad];

    pub const fn label(self) -> &'static str {
        match self {
            NavTag::Enums => "Enums",
            NavTag::Formato => "Formato",
            NavTag::Random => "Random",
            NavTag::Recursividad => "Recursividad",
        }
    }

    pub const fn section_id(self) -> &'static str {
        match self {
            NavTag::Enums => "enum",
            NavTag::Formato => "formato",
            NavTag::Random => "random",
            NavTag::Recursividad => "recursividad",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.label() == label)
    }
}

/// Map a tag label to its section id. Unknown labels resolve to nothing.
pub fn resolve_label(label: &str) -> Option<&'static str> {
    NavTag::from_label(label).map(NavTag::section_id)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// The slice of the browser the controller needs.
pub trait Viewport {
    /// Top edge of the element with `id`, relative to the viewport.
    /// `Ok(None)` when no such element is mounted.
    fn element_top(&self, id: &str) -> Result<Option<f64>, NavError>;

    fn scroll_y(&self) -> Result<f64, NavError>;

    /// Write the URL fragment without reloading and without scrolling.
    fn set_fragment(&self, id: &str) -> Result<(), NavError>;

    fn smooth_scroll_to(&self, top: f64) -> Result<(), NavError>;

    /// Instant jump to the element, ignoring the header offset. No-op when the
    /// element is absent.
    fn jump_to(&self, id: &str);
}

impl<V: Viewport + ?Sized> Viewport for &V {
    fn element_top(&self, id: &str) -> Result<Option<f64>, NavError> {
        (**self).element_top(id)
    }

    fn scroll_y(&self) -> Result<f64, NavError> {
        (**self).scroll_y()
    }

    fn set_fragment(&self, id: &str) -> Result<(), NavError> {
        (**self).set_fragment(id)
    }

    fn smooth_scroll_to(&self, top: f64) -> Result<(), NavError> {
        (**self).smooth_scroll_to(top)
    }

    fn jump_to(&self, id: &str) {
        (**self).jump_to(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavOutcome {
    Scrolled { id: String, top: f64 },
    /// The target is not mounted; nothing was scrolled.
    Missing { id: String },
    /// The animated path failed and the plain jump was used instead.
    Fallback { id: String, reason: NavError },
    UnknownLabel(String),
    NoFragment,
}

/// Document offset that puts an element [`HEADER_OFFSET_PX`] below the
/// viewport top.
pub fn scroll_target(rect_top: f64, scroll_y: f64) -> f64 {
    rect_top + scroll_y - HEADER_OFFSET_PX
}

/// Section id addressed by a `location.hash` value, percent-decoded.
pub fn parse_fragment(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let fragment = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if fragment.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(fragment)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| fragment.to_string());
    Some(decoded)
}

/// Keys that activate a focused navigation tag.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

pub struct NavigationController<V> {
    viewport: V,
}

impl<V: Viewport> NavigationController<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
        }
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn navigate_to_tag(&self, label: &str) -> NavOutcome {
        match resolve_label(label) {
            Some(id) => self.navigate_to_section(id),
            None => {
                tracing::warn!(label, "ignoring unknown navigation tag");
                NavOutcome::UnknownLabel(label.to_string())
            },
        }
    }

    /// Point the URL at `id` and smooth-scroll the section under the header.
    pub fn navigate_to_section(&self, id: &str) -> NavOutcome {
        let outcome = match self.viewport.set_fragment(id).and_then(|()| self.scroll_into_place(id)) {
            Ok(outcome) => outcome,
            Err(reason) => {
                tracing::warn!(id, %reason, "smooth navigation failed, jumping instead");
                if let Err(err) = self.viewport.set_fragment(id) {
                    tracing::warn!(id, %err, "could not update the URL fragment");
                }
                self.viewport.jump_to(id);
                NavOutcome::Fallback {
                    id: id.to_string(),
                    reason,
                }
            },
        };
        tracing::debug!(?outcome, "navigated to section");
        outcome
    }

    /// Scroll to the section named by an already-current URL fragment.
    pub fn follow_fragment(&self, raw_hash: &str) -> NavOutcome {
        let Some(id) = parse_fragment(raw_hash) else {
            return NavOutcome::NoFragment;
        };
        match self.scroll_into_place(&id) {
            Ok(outcome) => outcome,
            Err(reason) => {
                tracing::warn!(id = %id, %reason, "smooth scroll to fragment failed, jumping instead");
                self.viewport.jump_to(&id);
                NavOutcome::Fallback {
                    id,
                    reason,
                }
            },
        }
    }

    /// [`Self::follow_fragment`] after [`SETTLE_DELAY_MS`]. Returns at once
    /// when there is no fragment to follow.
    pub async fn follow_fragment_after_settle<S, F>(&self, raw_hash: &str, sleep: S) -> NavOutcome
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        if parse_fragment(raw_hash).is_none() {
            return NavOutcome::NoFragment;
        }
        sleep(Duration::from_millis(SETTLE_DELAY_MS)).await;
        self.follow_fragment(raw_hash)
    }

    fn scroll_into_place(&self, id: &str) -> Result<NavOutcome, NavError> {
        let Some(rect_top) = self.viewport.element_top(id)? else {
            return Ok(NavOutcome::Missing {
                id: id.to_string(),
            });
        };
        let top = scroll_target(rect_top, self.viewport.scroll_y()?);
        self.viewport.smooth_scroll_to(top)?;
        Ok(NavOutcome::Scrolled {
            id: id.to_string(),
            top,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use tokio::time::{self, Instant};

    use super::*;
    use crate::content::{sections, Example, Section, SectionColor};

    /// Sections stacked vertically, 1000px apart, starting at 600px.
    struct FakeViewport {
        document_tops: HashMap<String, f64>,
        scroll_y: RefCell<f64>,
        fragment: RefCell<Option<String>>,
        fragment_writes: RefCell<usize>,
        jumps: RefCell<Vec<String>>,
        fail_smooth_scroll: bool,
    }

    impl FakeViewport {
        fn with_sections(store: &[Section], scroll_y: f64) -> Self {
            let document_tops = store
                .iter()
                .enumerate()
                .map(|(index, section)| (section.id.to_string(), 600.0 + 1000.0 * index as f64))
                .collect();
            Self {
                document_tops,
                scroll_y: RefCell::new(scroll_y),
                fragment: RefCell::new(None),
                fragment_writes: RefCell::new(0),
                jumps: RefCell::new(Vec::new()),
                fail_smooth_scroll: false,
            }
        }

        fn fragment(&self) -> Option<String> {
            self.fragment.borrow().clone()
        }

        fn current_scroll(&self) -> f64 {
            *self.scroll_y.borrow()
        }
    }

    impl Viewport for FakeViewport {
        fn element_top(&self, id: &str) -> Result<Option<f64>, NavError> {
            Ok(self.document_tops.get(id).map(|top| top - self.current_scroll()))
        }

        fn scroll_y(&self) -> Result<f64, NavError> {
            Ok(self.current_scroll())
        }

        fn set_fragment(&self, id: &str) -> Result<(), NavError> {
            *self.fragment.borrow_mut() = Some(id.to_string());
            *self.fragment_writes.borrow_mut() += 1;
            Ok(())
        }

        fn smooth_scroll_to(&self, top: f64) -> Result<(), NavError> {
            if self.fail_smooth_scroll {
                return Err(NavError::Dom("scrollTo is not a function".into()));
            }
            *self.scroll_y.borrow_mut() = top;
            Ok(())
        }

        fn jump_to(&self, id: &str) {
            if let Some(top) = self.document_tops.get(id) {
                *self.scroll_y.borrow_mut() = *top;
                self.jumps.borrow_mut().push(id.to_string());
            }
        }
    }

    const ONE: &[Example] = &[Example {
        title: "t",
        code: "x",
    }];

    fn two_sections() -> [Section; 2] {
        ["enum", "random"].map(|id| Section {
            id,
            title: id,
            description: "",
            color: SectionColor::Primary,
            examples: ONE,
        })
    }

    #[test]
    fn tags_resolve_to_section_ids() {
        assert_eq!(resolve_label("Enums"), Some("enum"));
        assert_eq!(resolve_label("Formato"), Some("formato"));
        assert_eq!(resolve_label("Random"), Some("random"));
        assert_eq!(resolve_label("Recursividad"), Some("recursividad"));
        assert_eq!(resolve_label("enums"), None);
    }

    #[test]
    fn every_tag_targets_a_shipped_section() {
        for tag in NavTag::ALL {
            assert!(
                sections().iter().any(|section| section.id == tag.section_id()),
                "tag {} has no section",
                tag.label()
            );
        }
    }

    #[test]
    fn scroll_target_leaves_header_clearance() {
        assert_eq!(scroll_target(300.0, 1200.0), 1420.0);
        assert_eq!(scroll_target(-50.0, 0.0), -130.0);
    }

    #[test]
    fn parse_fragment_strips_hash_and_decodes() {
        assert_eq!(parse_fragment("#random").as_deref(), Some("random"));
        assert_eq!(parse_fragment("formato").as_deref(), Some("formato"));
        assert_eq!(parse_fragment("#secci%C3%B3n").as_deref(), Some("sección"));
        assert_eq!(parse_fragment("#"), None);
        assert_eq!(parse_fragment(""), None);
    }

    #[test]
    fn activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("a"));
    }

    #[test]
    fn navigating_to_present_section_updates_fragment_and_scrolls_under_header() {
        let viewport = FakeViewport::with_sections(sections(), 250.0);
        let controller = NavigationController::new(&viewport);

        let outcome = controller.navigate_to_section("random");

        let expected_top = viewport.document_tops["random"] - HEADER_OFFSET_PX;
        assert_eq!(
            outcome,
            NavOutcome::Scrolled {
                id: "random".into(),
                top: expected_top,
            }
        );
        assert_eq!(viewport.fragment().as_deref(), Some("random"));
        let element_top = viewport.element_top("random").expect("dom").expect("mounted");
        assert_eq!(element_top, HEADER_OFFSET_PX);
    }

    #[test]
    fn navigating_to_absent_section_only_updates_fragment() {
        let viewport = FakeViewport::with_sections(&two_sections(), 40.0);
        let controller = NavigationController::new(&viewport);

        let outcome = controller.navigate_to_section("recursividad");

        assert_eq!(
            outcome,
            NavOutcome::Missing {
                id: "recursividad".into(),
            }
        );
        assert_eq!(viewport.fragment().as_deref(), Some("recursividad"));
        assert_eq!(viewport.current_scroll(), 40.0);
        assert!(viewport.jumps.borrow().is_empty());
    }

    #[test]
    fn scroll_failure_falls_back_to_plain_jump() {
        let mut viewport = FakeViewport::with_sections(sections(), 0.0);
        viewport.fail_smooth_scroll = true;
        let controller = NavigationController::new(&viewport);

        let outcome = controller.navigate_to_section("enum");

        assert!(matches!(outcome, NavOutcome::Fallback { ref id, .. } if id == "enum"));
        assert_eq!(viewport.fragment().as_deref(), Some("enum"));
        assert_eq!(*viewport.fragment_writes.borrow(), 2);
        assert_eq!(viewport.jumps.borrow().as_slice(), ["enum".to_string()]);
        assert_eq!(viewport.current_scroll(), viewport.document_tops["enum"]);
    }

    #[test]
    fn unknown_tag_is_a_no_op() {
        let viewport = FakeViewport::with_sections(sections(), 10.0);
        let controller = NavigationController::new(&viewport);

        let outcome = controller.navigate_to_tag("Genericos");

        assert_eq!(outcome, NavOutcome::UnknownLabel("Genericos".into()));
        assert_eq!(viewport.fragment(), None);
        assert_eq!(viewport.current_scroll(), 10.0);
    }

    #[test]
    fn formato_tag_navigates_in_place() {
        let viewport = FakeViewport::with_sections(sections(), 0.0);
        let controller = NavigationController::new(&viewport);

        let outcome = controller.navigate_to_tag("Formato");

        assert!(matches!(outcome, NavOutcome::Scrolled { ref id, .. } if id == "formato"));
        assert_eq!(viewport.fragment().as_deref(), Some("formato"));
        assert_eq!(*viewport.fragment_writes.borrow(), 1);
        assert_eq!(viewport.current_scroll(), viewport.document_tops["formato"] - HEADER_OFFSET_PX);
    }

    #[test]
    fn following_fragment_does_not_rewrite_url() {
        let viewport = FakeViewport::with_sections(sections(), 0.0);
        let controller = NavigationController::new(&viewport);

        let outcome = controller.follow_fragment("#recursividad");

        assert!(matches!(outcome, NavOutcome::Scrolled { .. }));
        assert_eq!(*viewport.fragment_writes.borrow(), 0);
        assert_eq!(controller.follow_fragment(""), NavOutcome::NoFragment);
    }

    #[tokio::test(start_paused = true)]
    async fn page_load_with_fragment_scrolls_after_settle_delay() {
        let store = two_sections();
        let viewport = FakeViewport::with_sections(&store, 0.0);
        let controller = NavigationController::new(&viewport);
        let start = Instant::now();

        let outcome = controller.follow_fragment_after_settle("#random", time::sleep).await;

        assert!(start.elapsed() >= Duration::from_millis(SETTLE_DELAY_MS));
        assert_eq!(
            outcome,
            NavOutcome::Scrolled {
                id: "random".into(),
                top: 1600.0 - HEADER_OFFSET_PX,
            }
        );
        assert_eq!(viewport.current_scroll(), 1520.0);
    }

    #[tokio::test(start_paused = true)]
    async fn page_load_without_fragment_does_not_wait() {
        let viewport = FakeViewport::with_sections(sections(), 0.0);
        let controller = NavigationController::new(&viewport);
        let start = Instant::now();

        let outcome = controller.follow_fragment_after_settle("", time::sleep).await;

        assert_eq!(outcome, NavOutcome::NoFragment);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
