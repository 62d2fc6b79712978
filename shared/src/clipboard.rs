//! Copy-to-clipboard with a transient "copied" confirmation.
//!
//! The confirmation is a counter of outstanding windows rather than a bare
//! flag: every successful copy opens one window and every expiry closes one.
//! An early revert therefore cannot hide the confirmation of a later copy.

use std::{future::Future, time::Duration};

use async_trait::async_trait;
use thiserror::Error;

/// How long the confirmation stays visible after a successful copy.
pub const COPY_FEEDBACK_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard API is unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Denied(String),
}

/// Write-only access to the system clipboard.
#[async_trait(?Send)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyAction {
    Copied,
    Expired,
}

/// Confirmation state owned by a single code viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    pending: u32,
}

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.pending > 0
    }

    #[must_use]
    pub fn apply(self, action: CopyAction) -> Self {
        let pending = match action {
            CopyAction::Copied => self.pending.saturating_add(1),
            CopyAction::Expired => self.pending.saturating_sub(1),
        };
        Self {
            pending,
        }
    }
}

/// Put `code` on the clipboard verbatim and drive the confirmation.
///
/// On success `dispatch` receives [`CopyAction::Copied`], then
/// [`CopyAction::Expired`] once `sleep` has waited [`COPY_FEEDBACK_MS`]. On
/// failure nothing is dispatched and the error is returned for the caller to
/// log; it is never meant to reach the user.
pub async fn copy_with_feedback<C, D, S, F>(
    clipboard: &C,
    code: &str,
    dispatch: D,
    sleep: S,
) -> Result<(), ClipboardError>
where
    C: Clipboard + ?Sized,
    D: Fn(CopyAction),
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    clipboard.write_text(code).await?;
    tracing::debug!(bytes = code.len(), "copied snippet to clipboard");

    dispatch(CopyAction::Copied);
    sleep(Duration::from_millis(COPY_FEEDBACK_MS)).await;
    dispatch(CopyAction::Expired);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use tokio::time::{self, Instant};

    use super::*;

    #[derive(Default)]
    struct RecordingClipboard {
        written: RefCell<Vec<String>>,
        deny: bool,
    }

    #[async_trait(?Send)]
    impl Clipboard for RecordingClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.deny {
                return Err(ClipboardError::Denied("NotAllowedError".into()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn shared_state() -> (Rc<RefCell<CopyFeedback>>, impl Fn(CopyAction)) {
        let state = Rc::new(RefCell::new(CopyFeedback::default()));
        let dispatch = {
            let state = state.clone();
            move |action| {
                let next = state.borrow().apply(action);
                *state.borrow_mut() = next;
            }
        };
        (state, dispatch)
    }

    #[tokio::test(start_paused = true)]
    async fn successful_copy_shows_confirmation_then_reverts() {
        let clipboard = RecordingClipboard::default();
        let (state, dispatch) = shared_state();
        let code = "System.out.printf(\"%-15s%n\", \"ñ\");\n\tfin";
        let start = Instant::now();

        let observed = state.clone();
        copy_with_feedback(&clipboard, code, dispatch, |delay| async move {
            assert!(observed.borrow().is_copied(), "confirmation visible during the window");
            assert_eq!(delay, Duration::from_millis(COPY_FEEDBACK_MS));
            time::sleep(delay).await;
        })
        .await
        .expect("copy succeeds");

        assert!(start.elapsed() >= Duration::from_millis(COPY_FEEDBACK_MS));
        assert!(!state.borrow().is_copied());
        assert_eq!(clipboard.written.borrow().as_slice(), [code.to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn denied_copy_never_sets_the_flag() {
        let clipboard = RecordingClipboard {
            deny: true,
            ..Default::default()
        };
        let (state, dispatch) = shared_state();
        let seen_copied = Rc::new(RefCell::new(false));

        let result = {
            let seen_copied = seen_copied.clone();
            let state = state.clone();
            copy_with_feedback(
                &clipboard,
                "int x;",
                move |action| {
                    dispatch(action);
                    if state.borrow().is_copied() {
                        *seen_copied.borrow_mut() = true;
                    }
                },
                time::sleep,
            )
            .await
        };

        assert!(matches!(result, Err(ClipboardError::Denied(_))));
        assert!(!*seen_copied.borrow());
        assert!(!state.borrow().is_copied());
        assert!(clipboard.written.borrow().is_empty());
    }

    #[test]
    fn overlapping_copies_keep_confirmation_until_last_window_closes() {
        let state = CopyFeedback::default()
            .apply(CopyAction::Copied)
            .apply(CopyAction::Copied)
            .apply(CopyAction::Expired);
        assert!(state.is_copied());
        assert!(!state.apply(CopyAction::Expired).is_copied());
    }

    #[test]
    fn stray_expiry_does_not_underflow() {
        let state = CopyFeedback::default().apply(CopyAction::Expired);
        assert!(!state.is_copied());
        assert!(state.apply(CopyAction::Copied).is_copied());
    }
}
