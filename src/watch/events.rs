use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{Event, EventKind};
use tracing::{debug, warn};

/// Create, modify and remove events trigger a run; access events do not.
#[must_use]
pub const fn is_relevant(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

/// Call `on_burst` once per burst of relevant events, after the burst has
/// been quiet for `debounce`.
///
/// `on_burst` runs on this thread, so events that arrive while it runs
/// queue up and lead to at most one more call. Returns once the sending side
/// of `rx` is gone, flushing a pending burst first.
pub fn debounce_events<F>(
    rx: &Receiver<notify::Result<Event>>,
    debounce: Duration,
    mut on_burst: F,
) where
    F: FnMut(),
{
    let mut pending: Option<Instant> = None;

    loop {
        let received = match pending {
            Some(last) => {
                let remaining = debounce.saturating_sub(last.elapsed());
                rx.recv_timeout(remaining)
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(Ok(event)) => {
                if is_relevant(&event.kind) {
                    debug!(kind = ?event.kind, paths = ?event.paths, "change");
                    pending = Some(Instant::now());
                }
            }
            Ok(Err(err)) => warn!(%err, "watcher error"),
            Err(RecvTimeoutError::Timeout) => {
                pending = None;
                on_burst();
            }
            Err(RecvTimeoutError::Disconnected) => {
                if pending.is_some() {
                    on_burst();
                }
                return;
            }
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
