//! Modal frame shared by the create/edit dialogs.

use leptos::prelude::*;

/// Backdrop, title, body and Cancel/Save actions. Clicking the backdrop or
/// pressing Escape cancels.
#[component]
pub fn FormDialog(
    #[prop(into)] title: Signal<String>,
    #[prop(default = "Save")] submit_label: &'static str,
    #[prop(optional, into)] busy: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--form"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{move || title.get()}</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_save.run(());
                    }
                >
                    {children()}
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
