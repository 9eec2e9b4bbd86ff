use leptos::prelude::*;

use xray_common::{ActivePart, RevealTiming, StatusMessage, ViewState};

use crate::context::{CompanionConnection, CompanionContext};

/// Hook to access the companion context.
///
/// # Panics
///
/// Panics if called outside of a `CompanionProvider`.
pub fn use_companion() -> CompanionContext {
    expect_context::<CompanionContext>()
}

/// Read-only view of the whole page state.
pub fn use_view_state() -> ReadSignal<ViewState> {
    use_companion().state.read_only()
}

/// Connection control for the relay socket.
pub fn use_connection() -> CompanionConnection {
    use_companion().connection()
}

/// The selected part, re-evaluated only when it changes.
pub fn use_active_part() -> Memo<Option<ActivePart>> {
    let state = use_companion().state;
    Memo::new(move |_| state.with(|s| s.active_part().cloned()))
}

pub fn use_status() -> Memo<Option<StatusMessage>> {
    let state = use_companion().state;
    Memo::new(move |_| state.with(|s| s.status))
}

/// Drive the typewriter reveal of `state`.
///
/// One timer is pending at most. Any change to the reveal progress cancels it
/// and schedules the next step with the phase's delay; teardown cancels it too.
pub fn use_reveal_animator(state: RwSignal<ViewState>, timing: RevealTiming) {
    let pending: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);
    let progress = Memo::new(move |_| state.with(|s| s.reveal().cloned()));

    Effect::new(move |_| {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        pending.set_value(None);

        let Some(delay) = progress.with(|reveal| {
            reveal.as_ref().and_then(|reveal| reveal.next_delay(&timing))
        }) else {
            return;
        };

        let step = move || {
            pending.set_value(None);
            let _ = state.try_update(ViewState::advance_reveal);
        };
        match set_timeout_with_handle(step, delay) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(e) => log::error!("Failed to schedule reveal step: {:?}", e),
        }
    });

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });
}
