//! Transient, auto-dismissing user notices (toasts).
//!
//! The core never renders anything itself: every user-visible outcome is
//! emitted as a [`Notice`] through a [`NoticeSink`] owned by the host UI.
//! A notice carries its own dismiss duration so the host does not need to
//! know which message class it belongs to.
//!
//! The three notices required by the save / dictation flows:
//!
//! | Kind    | Message                                               | Default |
//! |---------|-------------------------------------------------------|---------|
//! | Error   | "Type a note before saving"                           | 1 s     |
//! | Error   | "Speech recognition is not supported in this browser" | 2 s     |
//! | Success | "Note saved"                                          | 4 s     |

use std::sync::mpsc::Sender;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Notice
// ---------------------------------------------------------------------------

/// Visual class of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Recoverable problem the user can retry (red toast).
    Error,
    /// Confirmation of a completed action (green toast).
    Success,
}

/// A single transient message for the host UI to display and auto-dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Visual class.
    pub kind: NoticeKind,
    /// Human-readable message text.
    pub message: String,
    /// How long the host should keep the notice on screen.
    pub dismiss_after: Duration,
}

impl Notice {
    /// Build an error notice.
    pub fn error(message: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            dismiss_after,
        }
    }

    /// Build a success notice.
    pub fn success(message: impl Into<String>, dismiss_after: Duration) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            dismiss_after,
        }
    }
}

// ---------------------------------------------------------------------------
// NoticeSink
// ---------------------------------------------------------------------------

/// Destination for notices.
///
/// Object-safe and `Send + Sync` so the composer and the app controller can
/// share one sink behind an `Arc<dyn NoticeSink>`. Delivery is best-effort:
/// a sink whose consumer is gone must not panic.
pub trait NoticeSink: Send + Sync {
    /// Deliver one notice.
    fn notify(&self, notice: Notice);
}

// Compile-time assertion: Box<dyn NoticeSink> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn NoticeSink>) {}
};

/// Channel-backed sink: the host UI drains the receiver once per frame, the
/// same way it drains dictation events.
impl NoticeSink for Sender<Notice> {
    fn notify(&self, notice: Notice) {
        // The host dropping its receiver just means nobody is watching.
        let _ = self.send(notice);
    }
}

// ---------------------------------------------------------------------------
// MemorySink  (test-only)
// ---------------------------------------------------------------------------

/// A sink that collects every notice for later assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    notices: std::sync::Mutex<Vec<Notice>>,
}

#[cfg(test)]
impl MemorySink {
    /// Remove and return everything delivered so far.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap())
    }

    /// Number of notices delivered so far.
    pub fn len(&self) -> usize {
        self.notices.lock().unwrap().len()
    }
}

#[cfg(test)]
impl NoticeSink for MemorySink {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn error_constructor_sets_kind_and_duration() {
        let n = Notice::error("boom", Duration::from_millis(1_000));
        assert_eq!(n.kind, NoticeKind::Error);
        assert_eq!(n.message, "boom");
        assert_eq!(n.dismiss_after, Duration::from_millis(1_000));
    }

    #[test]
    fn success_constructor_sets_kind() {
        let n = Notice::success("saved", Duration::from_secs(4));
        assert_eq!(n.kind, NoticeKind::Success);
    }

    #[test]
    fn sender_sink_delivers_to_receiver() {
        let (tx, rx) = mpsc::channel::<Notice>();
        tx.notify(Notice::success("ok", Duration::from_secs(1)));
        let got = rx.try_recv().expect("notice delivered");
        assert_eq!(got.message, "ok");
    }

    #[test]
    fn sender_sink_with_dropped_receiver_does_not_panic() {
        let (tx, rx) = mpsc::channel::<Notice>();
        drop(rx);
        tx.notify(Notice::error("nobody home", Duration::from_secs(1)));
    }

    #[test]
    fn memory_sink_collects_in_order() {
        let sink = MemorySink::default();
        sink.notify(Notice::error("a", Duration::from_secs(1)));
        sink.notify(Notice::success("b", Duration::from_secs(1)));
        let all = sink.drain();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].message, "a");
        assert_eq!(all[1].message, "b");
        assert_eq!(sink.len(), 0);
    }
}
