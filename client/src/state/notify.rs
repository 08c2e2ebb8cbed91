//! Transient toast notifications.
//!
//! Success toasts stay for two seconds, errors for three. Expiry is driven by
//! a timer task per toast; the state itself is plain data.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::time::Duration;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn duration(self) -> Duration {
        match self {
            Self::Success => Duration::from_secs(2),
            Self::Error => Duration::from_secs(3),
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, text: text.into() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

/// Show a toast and schedule its removal.
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, text: impl Into<String>) {
    let text = text.into();
    match kind {
        NoticeKind::Success => log::info!("{text}"),
        NoticeKind::Error => log::warn!("{text}"),
    }
    let Some(id) = notices.try_update(|n| n.push(kind, text)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(kind.duration()).await;
        notices.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn notify_success(notices: RwSignal<NoticeState>, text: impl Into<String>) {
    notify(notices, NoticeKind::Success, text);
}

pub fn notify_error(notices: RwSignal<NoticeState>, text: impl Into<String>) {
    notify(notices, NoticeKind::Error, text);
}
