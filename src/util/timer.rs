//! Cancellable one-shot timers.
//!
//! A `TimerSlot` holds at most one pending timeout. Scheduling a new one
//! cancels the previous instance, so a slot never fires twice for stale work.
//! Without `csr` there is no event loop and scheduling drops the callback.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

#[derive(Default)]
pub struct TimerSlot {
    #[cfg(feature = "csr")]
    pending: Option<gloo_timers::callback::Timeout>,
}

impl std::fmt::Debug for TimerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerSlot").field("pending", &self.is_pending()).finish()
    }
}

impl TimerSlot {
    /// Run `callback` after `delay_ms`, replacing any pending timeout.
    pub fn schedule(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.cancel();
        #[cfg(feature = "csr")]
        {
            self.pending = Some(gloo_timers::callback::Timeout::new(delay_ms, callback));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay_ms, callback);
        }
    }

    /// Cancel the pending timeout, if any.
    pub fn cancel(&mut self) {
        #[cfg(feature = "csr")]
        {
            // Dropping a gloo `Timeout` clears it.
            self.pending = None;
        }
    }

    /// Whether a timeout is held. It may already have fired.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        #[cfg(feature = "csr")]
        {
            self.pending.is_some()
        }
        #[cfg(not(feature = "csr"))]
        {
            false
        }
    }
}
