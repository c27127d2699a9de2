//! Pricing tiers for the landing page.
//!
//! Checkout URLs come from the payment provider and are injected at build
//! time; until they are configured the buttons link nowhere.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use leptos::prelude::*;

struct PricingTier {
    name: &'static str,
    price: &'static str,
    cadence: &'static str,
    blurb: &'static str,
    highlights: [&'static str; 4],
    cta: &'static str,
    checkout_url: Option<&'static str>,
    featured: bool,
}

static TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        price: "$9",
        cadence: "per month",
        blurb: "For trying ideas and sharing with friends.",
        highlights: [
            "200 credits a month",
            "Standard queue",
            "Personal license",
            "Community support",
        ],
        cta: "Start creating",
        checkout_url: option_env!("CHECKOUT_URL_STARTER"),
        featured: false,
    },
    PricingTier {
        name: "Pro",
        price: "$19",
        cadence: "per month",
        blurb: "For creators shipping work every week.",
        highlights: [
            "1,000 credits a month",
            "Priority queue",
            "4K export",
            "Commercial license",
        ],
        cta: "Go Pro",
        checkout_url: option_env!("CHECKOUT_URL_PRO"),
        featured: true,
    },
    PricingTier {
        name: "Studio",
        price: "$49",
        cadence: "per month",
        blurb: "For teams with a production pipeline.",
        highlights: [
            "5,000 credits a month",
            "Fastest queue",
            "API access",
            "Team seats",
        ],
        cta: "Scale up",
        checkout_url: option_env!("CHECKOUT_URL_STUDIO"),
        featured: false,
    },
];

fn checkout_href(tier: &PricingTier) -> &'static str {
    tier.checkout_url.unwrap_or("#")
}

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <h2 class="pricing__title">"Simple pricing"</h2>
            <p class="pricing__sub">"Pick a plan now or join the waitlist for founding rates."</p>
            <div class="pricing__grid">
                {TIERS
                    .iter()
                    .map(|tier| {
                        let card_class = if tier.featured {
                            "pricing-card pricing-card--featured"
                        } else {
                            "pricing-card"
                        };
                        view! {
                            <div class=card_class>
                                <Show when=move || tier.featured>
                                    <span class="pricing-card__ribbon">"Most popular"</span>
                                </Show>
                                <span class="pricing-card__name">{tier.name}</span>
                                <div class="pricing-card__price">
                                    <span class="pricing-card__amount">{tier.price}</span>
                                    <span class="pricing-card__cadence">{tier.cadence}</span>
                                </div>
                                <p class="pricing-card__blurb">{tier.blurb}</p>
                                <ul class="pricing-card__highlights">
                                    {tier
                                        .highlights
                                        .iter()
                                        .map(|highlight| view! { <li>{*highlight}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <a href=checkout_href(tier) class="btn btn--primary pricing-card__cta">
                                    {tier.cta}
                                </a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
