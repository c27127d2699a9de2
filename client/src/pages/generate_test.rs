use super::*;

// =============================================================
// Run gating
// =============================================================

fn ready_draft() -> WizardState {
    let mut draft = WizardState::default();
    draft.set_reference_image("data:image/png;base64,AAAA".to_owned());
    draft.set_prompt("a fox in the snow");
    draft
}

#[test]
fn generate_blocker_reports_missing_reference_first() {
    let mut draft = WizardState::default();
    draft.set_prompt("a fox in the snow");
    assert_eq!(generate_blocker(&draft), Some("Upload a reference image first."));
}

#[test]
fn generate_blocker_reports_missing_prompt() {
    let mut draft = WizardState::default();
    draft.set_reference_image("data:image/png;base64,AAAA".to_owned());
    assert_eq!(generate_blocker(&draft), Some("Describe what you want to create."));
}

#[test]
fn generate_blocker_reports_in_flight_runs() {
    let mut draft = ready_draft();
    draft.generating = true;
    assert_eq!(generate_blocker(&draft), Some("A run is already in flight."));
}

#[test]
fn generate_blocker_clears_when_ready() {
    assert_eq!(generate_blocker(&ready_draft()), None);
}

// =============================================================
// Step indicator
// =============================================================

#[test]
fn step_pip_class_marks_current_done_and_upcoming() {
    assert_eq!(step_pip_class(1, 0), "step-indicator__pip step-indicator__pip--done");
    assert_eq!(step_pip_class(1, 1), "step-indicator__pip step-indicator__pip--current");
    assert_eq!(step_pip_class(1, 2), "step-indicator__pip");
}
