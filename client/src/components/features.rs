//! Feature sections for the landing page.

use leptos::prelude::*;

struct FeatureItem {
    title: &'static str,
    blurb: &'static str,
    tag: Option<&'static str>,
}

struct FeatureGroup {
    heading: &'static str,
    tagline: &'static str,
    items: [FeatureItem; 2],
}

static FEATURE_GROUPS: [FeatureGroup; 3] = [
    FeatureGroup {
        heading: "Start from what you already have",
        tagline: "Reference-guided",
        items: [
            FeatureItem {
                title: "Reference uploads",
                blurb: "Drop in any photo and Lumina keeps its composition while restyling the rest.",
                tag: Some("Popular"),
            },
            FeatureItem {
                title: "Guided wizard",
                blurb: "Background, style, and lighting picked step by step, with nothing to memorize.",
                tag: None,
            },
        ],
    },
    FeatureGroup {
        heading: "Direct every detail",
        tagline: "Full control",
        items: [
            FeatureItem {
                title: "Prompt studio",
                blurb: "Describe the scene in up to 500 characters and keep a history of what worked.",
                tag: None,
            },
            FeatureItem {
                title: "Style presets",
                blurb: "Photoreal to watercolor, each preset tuned so results stay consistent.",
                tag: Some("New"),
            },
        ],
    },
    FeatureGroup {
        heading: "From draft to delivery",
        tagline: "Built to ship",
        items: [
            FeatureItem {
                title: "Creation gallery",
                blurb: "Every run lands in your dashboard, ready to revisit, like, or reuse.",
                tag: None,
            },
            FeatureItem {
                title: "High-res export",
                blurb: "Download in resolutions fit for print and campaign work.",
                tag: Some("Premium"),
            },
        ],
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <h2 class="features__title">"Everything you need to create"</h2>
            {FEATURE_GROUPS
                .iter()
                .enumerate()
                .map(|(index, group)| {
                    let group_class = if index % 2 == 1 {
                        "features__group features__group--flipped"
                    } else {
                        "features__group"
                    };
                    view! {
                        <div class=group_class>
                            <div class="features__intro">
                                <span class="features__tagline">{group.tagline}</span>
                                <h3 class="features__heading">{group.heading}</h3>
                            </div>
                            <div class="features__items">
                                {group
                                    .items
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <div class="feature-card">
                                                <div class="feature-card__top">
                                                    <span class="feature-card__title">{item.title}</span>
                                                    {item
                                                        .tag
                                                        .map(|tag| {
                                                            view! {
                                                                <span class="feature-card__tag">{tag}</span>
                                                            }
                                                        })}
                                                </div>
                                                <p class="feature-card__blurb">{item.blurb}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}
