//! Debounced refit scheduling
//!
//! Only one refit is ever pending. Scheduling replaces the stored timeout;
//! dropping a gloo `Timeout` clears it, so a burst of edits yields one refit
//! after the last of them.

use std::cell::RefCell;

use gloo::timers::callback::Timeout;

thread_local! {
    static PENDING_REFIT: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

pub fn debounce_refit<F>(delay_ms: u32, run: F)
where
    F: FnOnce() + 'static,
{
    let timeout = Timeout::new(delay_ms, run);
    PENDING_REFIT.with(|pending| {
        pending.borrow_mut().replace(timeout);
    });
}

pub fn cancel_pending_refit() {
    PENDING_REFIT.with(|pending| {
        pending.borrow_mut().take();
    });
}
