use super::*;

#[test]
fn default_stack_is_empty() {
    assert!(ToastStack::default().items.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut stack = ToastStack::default();
    let first = stack.push(ToastKind::Info, "one");
    let second = stack.push(ToastKind::Info, "two");
    assert!(second > first);
    assert_eq!(stack.items.len(), 2);
}

#[test]
fn push_preserves_kind_and_message() {
    let mut stack = ToastStack::default();
    stack.push(ToastKind::Error, "upload failed");
    assert_eq!(stack.items[0].kind, ToastKind::Error);
    assert_eq!(stack.items[0].message, "upload failed");
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut stack = ToastStack::default();
    let first = stack.push(ToastKind::Success, "one");
    let second = stack.push(ToastKind::Success, "two");
    stack.dismiss(first);
    assert_eq!(stack.items.len(), 1);
    assert_eq!(stack.items[0].id, second);
}

#[test]
fn dismissing_an_unknown_id_is_a_no_op() {
    let mut stack = ToastStack::default();
    stack.push(ToastKind::Info, "one");
    stack.dismiss(999);
    assert_eq!(stack.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut stack = ToastStack::default();
    let first = stack.push(ToastKind::Info, "one");
    stack.dismiss(first);
    let second = stack.push(ToastKind::Info, "two");
    assert!(second > first);
}
