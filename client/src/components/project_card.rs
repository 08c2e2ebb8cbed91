//! Card for one project in the listing.

use leptos::prelude::*;
use records::Project;
use records::display::short_date;

#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(default = None)] on_start: Option<Callback<Project>>,
    #[prop(default = None)] on_join: Option<Callback<String>>,
    #[prop(default = None)] on_edit: Option<Callback<Project>>,
    #[prop(default = None)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let show_details = RwSignal::new(false);
    let id = project.id.clone().unwrap_or_default();
    let members = project.team_members.as_ref().map_or(0, Vec::len);
    let spots = project.available_spots.map_or_else(
        || format!("{members} / {} members", project.max_team_members),
        |left| format!("{left} spots left of {}", project.max_team_members),
    );
    let dates = format!("{} to {}", short_date(&project.start_date), short_date(&project.end_date));
    let details = format!(
        "Project: {}\nStatus: {}\nBudget: {}",
        project.project_name, project.status, project.budget
    );
    let status_class = format!("badge badge--{}", project.status.to_ascii_lowercase());
    let image = project.image_path.clone().or_else(|| project.image.clone()).filter(|s| !s.is_empty());
    let start_target = project.clone();
    let edit_target = project.clone();

    view! {
        <article class="card project-card">
            {image.map(|src| view! { <img class="card__image" src=src alt="" /> })}
            <header class="card__header">
                <h3 class="card__title">{project.project_name}</h3>
                <span class=status_class>{project.status}</span>
            </header>
            <p class="card__meta">{dates}</p>
            <p class="card__meta">{spots}</p>
            <p class="card__body">{project.description}</p>
            <Show when=move || show_details.get()>
                <pre class="card__details">{details.clone()}</pre>
            </Show>
            <div class="card__actions">
                {on_start.map(|cb| {
                    view! { <button class="btn" on:click=move |_| cb.run(start_target.clone())>"Start"</button> }
                })}
                {on_join.map(|cb| {
                    let id = id.clone();
                    view! { <button class="btn btn--primary" on:click=move |_| cb.run(id.clone())>"Join"</button> }
                })}
                <button class="btn" on:click=move |_| show_details.update(|v| *v = !*v)>"Details"</button>
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
