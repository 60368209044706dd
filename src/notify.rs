//! Toast Notifications
//!
//! Shared notification runtime used by every page, with timed dismissal.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotifyKind,
    pub text: String,
}

/// Handle for pushing toasts; provided via context by the app shell.
#[derive(Clone, Copy)]
pub struct Notifier {
    entries: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u32>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NotifyKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NotifyKind::Error, text.into());
    }

    fn push(&self, kind: NotifyKind, text: String) {
        let id = self.next_id.try_update(|n| {
            *n += 1;
            *n
        });
        let Some(id) = id else { return };
        let entries = self.entries;
        entries.update(|list| list.push(Notification { id, kind, text }));
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            // The page may have been torn down meanwhile.
            let _ = entries.try_update(|list| list.retain(|n| n.id != id));
        });
    }

    fn entries(&self) -> RwSignal<Vec<Notification>> {
        self.entries
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

#[component]
pub fn NotificationArea() -> impl IntoView {
    let notifier = use_notifier();
    let entries = notifier.entries();
    view! {
        <div class="notification-area">
            <For
                each=move || entries.get()
                key=|n| n.id
                children=move |n| {
                    let class = match n.kind {
                        NotifyKind::Success => "notification success",
                        NotifyKind::Error => "notification error",
                    };
                    view! { <div class=class>{n.text.clone()}</div> }
                }
            />
        </div>
    }
}
