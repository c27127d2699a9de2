use super::*;

#[test]
fn checkout_href_falls_back_to_a_dead_link() {
    let tier = PricingTier {
        name: "Test",
        price: "$0",
        cadence: "per month",
        blurb: "",
        highlights: ["", "", "", ""],
        cta: "Go",
        checkout_url: None,
        featured: false,
    };
    assert_eq!(checkout_href(&tier), "#");
}

#[test]
fn checkout_href_uses_the_configured_url() {
    let tier = PricingTier {
        name: "Test",
        price: "$0",
        cadence: "per month",
        blurb: "",
        highlights: ["", "", "", ""],
        cta: "Go",
        checkout_url: Some("https://pay.example.com/starter"),
        featured: false,
    };
    assert_eq!(checkout_href(&tier), "https://pay.example.com/starter");
}

#[test]
fn tier_table_has_unique_names_and_one_featured_plan() {
    let mut names: Vec<&str> = TIERS.iter().map(|t| t.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TIERS.len());
    assert_eq!(TIERS.iter().filter(|t| t.featured).count(), 1);
}
