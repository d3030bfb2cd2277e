//! Transient notification, auto-cleared after three seconds.
//!
//! Each screen owns one `(message, is_error)` signal and sets it after
//! mutations; the component renders and expires it. Expiry timers carry a
//! generation token so a timer armed for an earlier toast cannot cut short
//! one raised after it.

use leptos::prelude::*;

/// Generation counter shared between the visible toast and its expiry
/// timers. Arming for a new toast invalidates every timer still pending
/// from an earlier one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ToastGuard {
    generation: u64,
}

impl ToastGuard {
    fn arm(&mut self) {
        self.generation += 1;
    }

    /// The token the freshly armed timer must present to clear.
    fn token(&self) -> u64 {
        self.generation
    }

    fn may_clear(&self, token: u64) -> bool {
        self.generation == token
    }
}

#[component]
pub fn Toast(notification: RwSignal<Option<(String, bool)>>) -> impl IntoView {
    let guard = RwSignal::new(ToastGuard::default());

    Effect::new(move |_| {
        if notification.get().is_some() {
            guard.update_untracked(|g| g.arm());
            let token = guard.with_untracked(|g| g.token());
            set_timeout(
                move || {
                    if guard.with_untracked(|g| g.may_clear(token)) {
                        notification.set(None);
                    }
                },
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || notification.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_error = notification.get().map(|(_, e)| e).unwrap_or(false);
                    if is_error {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests;
