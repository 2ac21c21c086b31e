//! Debounced value propagation
//!
//! Wraps a fast-changing input (keystrokes) and emits only after the value
//! has been stable for a quiescence window. One pending slot per source:
//! each `queue` displaces the previous value and restarts the window, so
//! only the last value within a window is ever propagated.

use dioxus::core::Task;
use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Default quiescence window for text inputs
pub const DEBOUNCE_WINDOW_MS: u64 = 300;

/// Latest-ticket slot shared by all queued emissions of one source.
///
/// Each `queue` takes a fresh ticket; once the window has elapsed, only
/// the holder of the newest ticket may emit. Superseded tickets go stale
/// the moment a newer one is taken.
#[derive(Clone, Debug, Default)]
struct EmitSlot {
    latest: Arc<AtomicU64>,
}

impl EmitSlot {
    fn take_ticket(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }

    fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::Relaxed);
    }
}

/// Handle for a debounced input source.
///
/// Created by [`use_debounce`]. Call `queue` on every input event; the
/// wrapped callback fires once per quiet window with the latest value.
pub struct Debounce<T: 'static> {
    window_ms: u64,
    slot: Signal<EmitSlot>,
    pending: Signal<Option<Task>>,
    on_emit: Callback<T>,
}

// Manual impls: every field is Copy whatever T is, the derives would
// demand T: Copy.
impl<T: 'static> Clone for Debounce<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Debounce<T> {}

impl<T: Clone + 'static> Debounce<T> {
    /// Schedule `value` for emission, displacing any pending value.
    pub fn queue(&mut self, value: T) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
        let slot = self.slot.peek().clone();
        let ticket = slot.take_ticket();
        let window_ms = self.window_ms;
        let on_emit = self.on_emit;
        let mut pending = self.pending;
        let task = spawn(async move {
            sleep_ms(window_ms).await;
            if slot.is_current(ticket) {
                pending.set(None);
                on_emit.call(value);
            }
        });
        self.pending.set(Some(task));
    }

    /// Drop the pending value, if any, without emitting it.
    pub fn cancel(&mut self) {
        self.slot.peek().invalidate();
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    /// Whether a value is waiting out its quiescence window.
    pub fn is_pending(&self) -> bool {
        self.pending.read().is_some()
    }
}

/// Hook creating a [`Debounce`] that calls `on_emit` after `window_ms` of
/// input silence.
pub fn use_debounce<T: Clone + 'static>(
    window_ms: u64,
    on_emit: impl FnMut(T) + 'static,
) -> Debounce<T> {
    let on_emit = use_callback(on_emit);
    let pending = use_signal(|| None);
    let slot = use_signal(EmitSlot::default);
    Debounce {
        window_ms,
        slot,
        pending,
        on_emit,
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Replay a series of (queue time, value) events against one slot and
    /// collect what survives its window, exactly as `Debounce::queue`
    /// races its spawned emissions.
    async fn run_burst(events: &[(u64, &'static str)], window_ms: u64) -> Vec<&'static str> {
        let slot = EmitSlot::default();
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let mut handles = Vec::new();
        for &(at_ms, value) in events {
            let slot = slot.clone();
            let emitted = emitted.clone();
            handles.push(tokio::spawn(async move {
                sleep_ms(at_ms).await;
                let ticket = slot.take_ticket();
                sleep_ms(window_ms).await;
                if slot.is_current(ticket) {
                    emitted.lock().unwrap().push(value);
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        let collected = emitted.lock().unwrap().clone();
        collected
    }

    #[tokio::test(start_paused = true)]
    async fn burst_propagates_only_the_last_value() {
        let events = [(0, "r"), (50, "ro"), (100, "ros"), (150, "rose")];
        assert_eq!(
            run_burst(&events, DEBOUNCE_WINDOW_MS).await,
            vec!["rose"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn values_in_separate_windows_each_emit() {
        let events = [(0, "rose"), (500, "tulip")];
        assert_eq!(
            run_burst(&events, DEBOUNCE_WINDOW_MS).await,
            vec!["rose", "tulip"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn invalidate_drops_the_pending_ticket() {
        let slot = EmitSlot::default();
        let ticket = slot.take_ticket();
        sleep_ms(100).await;
        slot.invalidate();
        sleep_ms(DEBOUNCE_WINDOW_MS).await;
        assert!(!slot.is_current(ticket));
    }

    #[test]
    fn newer_tickets_supersede_older_ones() {
        let slot = EmitSlot::default();
        let first = slot.take_ticket();
        let second = slot.take_ticket();
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }
}
