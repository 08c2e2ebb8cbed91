//! Confirmation step in front of destructive actions.

use leptos::prelude::*;

/// Modal asking the user to confirm `message`. `on_confirm` runs before the
/// dialog is dismissed.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[prop(default = "Delete")] confirm_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__danger">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| {
                            on_confirm.run(());
                            on_cancel.run(());
                        }
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// What a pending confirmation will do once accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAction {
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    /// Record the action applies to.
    pub target: String,
}

impl PendingAction {
    pub fn delete(noun: &str, target: String) -> Self {
        Self {
            title: format!("Delete {noun}"),
            message: format!("Are you sure you want to delete this {noun}?"),
            confirm_label: "Delete",
            target,
        }
    }
}
