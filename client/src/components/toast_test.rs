use super::*;

#[test]
fn kind_class_maps_every_kind() {
    assert_eq!(kind_class(ToastKind::Success), "toast--success");
    assert_eq!(kind_class(ToastKind::Error), "toast--error");
    assert_eq!(kind_class(ToastKind::Info), "toast--info");
}
