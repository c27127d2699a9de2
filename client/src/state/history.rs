//! Client-side generation history.
//!
//! DESIGN
//! ======
//! No persistence yet: the list is seeded with a few sample creations and
//! extended in memory as simulated runs finish.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use uuid::Uuid;

/// Placeholder art used for seeded and simulated creations.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// One generated or seeded creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Creation {
    pub id: String,
    pub prompt: String,
    pub image_url: String,
    /// Human label like "2 hours ago"; purely presentational.
    pub created_label: String,
}

/// Recent creations, newest first.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryState {
    pub items: Vec<Creation>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self {
            items: vec![
                sample("A coastal city at dusk with glowing lanterns", "2 hours ago"),
                sample("A snow fox in a birch forest at first light", "6 hours ago"),
                sample("Portrait of an astronaut in baroque style", "1 day ago"),
            ],
        }
    }
}

fn sample(prompt: &str, created_label: &str) -> Creation {
    Creation {
        id: Uuid::new_v4().to_string(),
        prompt: prompt.to_owned(),
        image_url: PLACEHOLDER_IMAGE.to_owned(),
        created_label: created_label.to_owned(),
    }
}

impl HistoryState {
    /// Prepend a finished run.
    pub fn record(&mut self, prompt: &str) {
        self.items.insert(
            0,
            Creation {
                id: Uuid::new_v4().to_string(),
                prompt: prompt.to_owned(),
                image_url: PLACEHOLDER_IMAGE.to_owned(),
                created_label: "Just now".to_owned(),
            },
        );
    }
}
