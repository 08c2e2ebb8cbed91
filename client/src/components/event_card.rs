//! Card for one event in the listing and on the home page.

use leptos::prelude::*;
use records::Event;
use records::display::short_date;

/// Event summary with the actions the current session may take.
///
/// Action callbacks that are not passed hide their button.
#[component]
pub fn EventCard(
    event: Event,
    #[prop(default = None)] on_enroll: Option<Callback<String>>,
    #[prop(default = None)] on_edit: Option<Callback<Event>>,
    #[prop(default = None)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let id = event.id.clone().unwrap_or_default();
    let places = match event.available_places {
        Some(left) => format!("{left} / {} places left", event.max_participants),
        None => format!("{} places", event.max_participants),
    };
    let dates = format!("{} to {}", short_date(&event.start_date), short_date(&event.end_date));
    let status_class = format!("badge badge--{}", event.status.to_ascii_lowercase());
    let image = event.image_path.clone().or_else(|| event.image.clone()).filter(|s| !s.is_empty());
    let edit_target = event.clone();

    view! {
        <article class="card event-card">
            {image.map(|src| view! { <img class="card__image" src=src alt="" /> })}
            <header class="card__header">
                <h3 class="card__title">{event.event_name}</h3>
                <span class=status_class>{event.status}</span>
            </header>
            <p class="card__meta">{dates}</p>
            <p class="card__meta">{event.location}</p>
            <p class="card__meta">{format!("Budget: {}", event.budget)}" · "{places}</p>
            <p class="card__body">{event.description}</p>
            <div class="card__actions">
                {on_enroll.map(|cb| {
                    let id = id.clone();
                    view! { <button class="btn btn--primary" on:click=move |_| cb.run(id.clone())>"Enroll"</button> }
                })}
                {on_edit.map(|cb| {
                    view! { <button class="btn" on:click=move |_| cb.run(edit_target.clone())>"Edit"</button> }
                })}
                {on_delete.map(|cb| {
                    let id = id.clone();
                    view! { <button class="btn btn--danger" on:click=move |_| cb.run(id.clone())>"Delete"</button> }
                })}
            </div>
        </article>
    }
}
