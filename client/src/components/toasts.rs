//! Stack of transient notices in the corner of every page.

use leptos::prelude::*;

use crate::state::notify::NoticeState;

#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class=notice.kind.css_class()>
                                <span class="toast__text">{notice.text}</span>
                                <button
                                    class="toast__close"
                                    title="Close"
                                    on:click=move |_| notices.update(|n| n.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
