//! Dashboard page showing usage stats and the creation gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Stats and gallery contents are
//! local placeholders until a metering backend exists; the auth gate and
//! the filter/like/delete interactions are real.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::preview_dialog::PreviewDialog;
use crate::state::auth::AuthState;
use crate::state::history::PLACEHOLDER_IMAGE;
use crate::util::auth::install_unauth_redirect;

struct StatCard {
    label: &'static str,
    value: &'static str,
    hint: &'static str,
}

static STATS: [StatCard; 4] = [
    StatCard {
        label: "Total generations",
        value: "132",
        hint: "+9% this week",
    },
    StatCard {
        label: "Available credits",
        value: "868",
        hint: "232 used this month",
    },
    StatCard {
        label: "Liked creations",
        value: "41",
        hint: "4 new likes",
    },
    StatCard {
        label: "Shared works",
        value: "23",
        hint: "Last shared 3h ago",
    },
];

/// One gallery entry. Seeded locally; survives only as long as the page.
#[derive(Clone, Debug, PartialEq)]
struct GalleryItem {
    id: String,
    prompt: String,
    image_url: String,
    liked: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum GalleryFilter {
    #[default]
    All,
    Liked,
}

fn seeded_gallery() -> Vec<GalleryItem> {
    let prompts = [
        ("g1", "A coastal city at dusk with glowing lanterns", true),
        ("g2", "A snow fox in a birch forest at first light", false),
        ("g3", "Portrait of an astronaut in baroque style", true),
        ("g4", "Overgrown greenhouse with stained glass panels", false),
        ("g5", "Paper-craft mountain range under a full moon", false),
        ("g6", "Retro diner interior rendered in watercolor", true),
    ];
    prompts
        .into_iter()
        .map(|(id, prompt, liked)| GalleryItem {
            id: id.to_owned(),
            prompt: prompt.to_owned(),
            image_url: PLACEHOLDER_IMAGE.to_owned(),
            liked,
        })
        .collect()
}

fn visible_items(items: &[GalleryItem], filter: GalleryFilter) -> Vec<GalleryItem> {
    items
        .iter()
        .filter(|item| filter == GalleryFilter::All || item.liked)
        .cloned()
        .collect()
}

fn toggle_liked(items: &mut [GalleryItem], id: &str) {
    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
        item.liked = !item.liked;
    }
}

fn remove_item(items: &mut Vec<GalleryItem>, id: &str) {
    items.retain(|item| item.id != id);
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate);

    let gallery = RwSignal::new(seeded_gallery());
    let filter = RwSignal::new(GalleryFilter::default());
    let preview = RwSignal::new(None::<String>);

    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Welcome back, {}", user.display_name()))
            .unwrap_or_default()
    };

    let filter_class = move |target: GalleryFilter| {
        if filter.get() == target {
            "dashboard__filter dashboard__filter--active"
        } else {
            "dashboard__filter"
        }
    };

    view! {
        <div class="dashboard-page">
            <Navbar/>
            <Show
                when=move || !auth.get().loading && auth.get().user.is_some()
                fallback=move || {
                    view! {
                        <main class="dashboard__main">
                            <p class="dashboard__loading">
                                {move || {
                                    if auth.get().loading {
                                        "Loading your studio..."
                                    } else {
                                        "Redirecting to sign in..."
                                    }
                                }}
                            </p>
                        </main>
                    }
                }
            >
                <main class="dashboard__main">
                    <header class="dashboard__header">
                        <div>
                            <h1 class="dashboard__title">{greeting}</h1>
                            <p class="dashboard__sub">"Here is what your studio has been up to."</p>
                        </div>
                        <a class="btn btn--primary" href="/generation">
                            "New creation"
                        </a>
                    </header>

                    <section class="dashboard__stats">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat-card">
                                        <span class="stat-card__value">{stat.value}</span>
                                        <span class="stat-card__label">{stat.label}</span>
                                        <span class="stat-card__hint">{stat.hint}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </section>

                    <section class="dashboard__gallery">
                        <div class="dashboard__gallery-head">
                            <h2>"Recent creations"</h2>
                            <div class="dashboard__filters">
                                <button
                                    class=move || filter_class(GalleryFilter::All)
                                    on:click=move |_| filter.set(GalleryFilter::All)
                                >
                                    "All"
                                </button>
                                <button
                                    class=move || filter_class(GalleryFilter::Liked)
                                    on:click=move |_| filter.set(GalleryFilter::Liked)
                                >
                                    "Liked"
                                </button>
                            </div>
                        </div>
                        <div class="dashboard__grid">
                            <For
                                each=move || visible_items(&gallery.get(), filter.get())
                                key=|item| (item.id.clone(), item.liked)
                                children=move |item| {
                                    let like_id = item.id.clone();
                                    let delete_id = item.id.clone();
                                    let preview_url = item.image_url.clone();
                                    let like_class = if item.liked {
                                        "gallery-card__like gallery-card__like--on"
                                    } else {
                                        "gallery-card__like"
                                    };
                                    view! {
                                        <div class="gallery-card">
                                            <button
                                                class="gallery-card__view"
                                                on:click=move |_| preview.set(Some(preview_url.clone()))
                                                aria-label="Open preview"
                                            >
                                                <img class="gallery-card__image" src=item.image_url.clone() alt=item.prompt.clone()/>
                                            </button>
                                            <p class="gallery-card__prompt">{item.prompt.clone()}</p>
                                            <div class="gallery-card__actions">
                                                <button
                                                    class=like_class
                                                    on:click=move |_| gallery.update(|items| toggle_liked(items, &like_id))
                                                    aria-label="Toggle like"
                                                >
                                                    "♥"
                                                </button>
                                                <button
                                                    class="gallery-card__delete"
                                                    on:click=move |_| gallery.update(|items| remove_item(items, &delete_id))
                                                    aria-label="Delete creation"
                                                >
                                                    "✕"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                            <a class="gallery-card gallery-card--new" href="/generation">
                                <span class="gallery-card__plus">"+"</span>
                                <span>"Start a new creation"</span>
                            </a>
                        </div>
                        <Show when=move || visible_items(&gallery.get(), filter.get()).is_empty()>
                            <p class="dashboard__empty">"Nothing here yet. Like a creation or generate a new one."</p>
                        </Show>
                    </section>
                </main>
            </Show>
            <PreviewDialog preview=preview/>
        </div>
    }
}
