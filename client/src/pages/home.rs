//! Landing page: short lists of ongoing and upcoming events plus the
//! documents uploaded during the last week.

use leptos::prelude::*;
use records::{Event, FileDocument};

use crate::components::event_card::EventCard;
use crate::components::file_card::FileCard;
use crate::state::notify::{NoticeState, notify_error};
use crate::util::download::download_document;
use crate::util::task::spawn_browser;

/// Events shown per home page section.
pub const HOME_SECTION_SIZE: usize = 3;

/// Look-back window for the recent uploads section.
pub const RECENT_UPLOAD_DAYS: u32 = 7;

#[component]
pub fn HomePage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let ongoing = RwSignal::new(Vec::<Event>::new());
    let upcoming = RwSignal::new(Vec::<Event>::new());
    let recent = RwSignal::new(Vec::<FileDocument>::new());
    let loading = RwSignal::new(true);

    spawn_browser(async move {
        let (now, next) =
            futures::future::join(crate::net::events::by_status("ONGOING"), crate::net::events::upcoming()).await;
        match now {
            Ok(mut list) => {
                list.truncate(HOME_SECTION_SIZE);
                ongoing.set(list);
            }
            Err(e) => notify_error(notices, e.user_message("load ongoing events")),
        }
        match next {
            Ok(mut list) => {
                list.truncate(HOME_SECTION_SIZE);
                upcoming.set(list);
            }
            Err(e) => notify_error(notices, e.user_message("load upcoming events")),
        }
        loading.set(false);

        match crate::net::users::recent_uploads(RECENT_UPLOAD_DAYS).await {
            Ok(mut list) => {
                list.truncate(HOME_SECTION_SIZE);
                recent.set(list);
            }
            Err(e) => log::warn!("recent uploads unavailable: {e}"),
        }
    });

    let download = Callback::new(move |doc: FileDocument| download_document(doc, notices));

    let section = move |title: &'static str, list: RwSignal<Vec<Event>>, empty: &'static str| {
        view! {
            <section class="home-page__section">
                <h2>{title}</h2>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p>"Loading events..."</p> }
                >
                    <Show
                        when=move || !list.get().is_empty()
                        fallback=move || view! { <p class="home-page__empty">{empty}</p> }
                    >
                        <div class="card-grid">
                            {move || {
                                list.get()
                                    .into_iter()
                                    .map(|event| view! { <EventCard event=event /> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>
        }
    };

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Research Portal"</h1>
                <p>"Events, projects and publications of the research community."</p>
                <a class="btn btn--primary" href="/events">"Browse events"</a>
            </section>
            {section("Ongoing events", ongoing, "No ongoing events right now.")}
            {section("Upcoming events", upcoming, "No upcoming events scheduled.")}
            <Show when=move || !recent.get().is_empty()>
                <section class="home-page__section">
                    <h2>"Recent uploads"</h2>
                    <div class="card-grid">
                        {move || {
                            recent
                                .get()
                                .into_iter()
                                .map(|doc| view! { <FileCard doc=doc on_download=download /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
            </Show>
        </div>
    }
}
