//! Generation wizard draft: step sequencing, option selection, reference
//! image, and prompt.
//!
//! DESIGN
//! ======
//! One plain struct mutated through an `RwSignal` provided from the app
//! root, so the landing-page teaser, the wizard page, and the navbar all
//! see the same draft. Selections are keyed by section id; a missing key
//! means nothing is selected in that section.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::collections::HashMap;

/// Upper bound on prompt length, enforced on every write.
pub const PROMPT_MAX_CHARS: usize = 500;

/// One configurable section of the wizard.
pub struct WizardStep {
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub options: [&'static str; 4],
}

/// Wizard sections in presentation order.
pub static WIZARD_STEPS: [WizardStep; 3] = [
    WizardStep {
        id: "background",
        title: "Background",
        blurb: "Pick the backdrop your subject sits in.",
        options: ["Studio", "Outdoor", "Abstract", "Gradient"],
    },
    WizardStep {
        id: "style",
        title: "Style",
        blurb: "Pick the artistic direction for the render.",
        options: ["Photoreal", "Illustration", "3D Render", "Watercolor"],
    },
    WizardStep {
        id: "lighting",
        title: "Lighting",
        blurb: "Set the mood with the right light.",
        options: ["Soft", "Dramatic", "Neon", "Golden Hour"],
    },
];

/// Draft state for one generation run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardState {
    /// Current step index, always within `0..WIZARD_STEPS.len()`.
    pub step: usize,
    /// Selected option index per section id; an absent key means unselected.
    pub selections: HashMap<&'static str, usize>,
    /// Reference image as a data URL, once one is uploaded.
    pub reference_image: Option<String>,
    /// Prompt text, capped at `PROMPT_MAX_CHARS`.
    pub prompt: String,
    /// True while a simulated run is in flight.
    pub generating: bool,
}

impl WizardState {
    #[must_use]
    pub fn last_step() -> usize {
        WIZARD_STEPS.len() - 1
    }

    /// Advance one step, clamped at the last step.
    pub fn next_step(&mut self) {
        if self.step < Self::last_step() {
            self.step += 1;
        }
    }

    /// Go back one step, clamped at the first step.
    pub fn prev_step(&mut self) {
        if self.step > 0 {
            self.step -= 1;
        }
    }

    /// Jump straight to a step from the indicator. Only honored once a
    /// reference image exists; out-of-range targets are ignored.
    pub fn jump_to(&mut self, target: usize) {
        if self.reference_image.is_some() && target <= Self::last_step() {
            self.step = target;
        }
    }

    #[must_use]
    pub fn selected(&self, section: &str) -> Option<usize> {
        self.selections.get(section).copied()
    }

    /// Select an option, or deselect it when it is already selected.
    pub fn toggle_option(&mut self, section: &'static str, option: usize) {
        if self.selected(section) == Some(option) {
            self.selections.remove(section);
        } else {
            self.selections.insert(section, option);
        }
    }

    /// Store the uploaded reference image.
    pub fn set_reference_image(&mut self, data_url: String) {
        self.reference_image = Some(data_url);
    }

    /// Drop the reference image and restart from the first step.
    pub fn clear_reference_image(&mut self) {
        self.reference_image = None;
        self.step = 0;
    }

    /// Replace the prompt, truncating at `PROMPT_MAX_CHARS` characters.
    pub fn set_prompt(&mut self, text: &str) {
        self.prompt = text.chars().take(PROMPT_MAX_CHARS).collect();
    }

    #[must_use]
    pub fn prompt_chars(&self) -> usize {
        self.prompt.chars().count()
    }

    /// A run needs a reference image, a non-blank prompt, and no run
    /// already in flight.
    #[must_use]
    pub fn can_generate(&self) -> bool {
        self.reference_image.is_some() && !self.prompt.trim().is_empty() && !self.generating
    }
}
