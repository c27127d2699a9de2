//! Toast notification state.
//!
//! DESIGN
//! ======
//! A plain stack with monotonically increasing ids, so timed dismissal can
//! target the exact toast it scheduled even after newer pushes.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// One visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Active toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    /// Push a toast, returning its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}
