use std::time::Duration;

use dioxus::prelude::*;

const TOAST_SECS: u64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Warning => "toast toast--warning",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
    seq: u64,
}

/// Transient notification shared by every screen.
///
/// A newer toast replaces the current one; each toast clears itself after a
/// few seconds unless it has already been replaced.
#[derive(Clone, Copy)]
pub struct Toaster {
    current: Signal<Option<Toast>>,
    seq: Signal<u64>,
}

impl Toaster {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            seq: Signal::new(0),
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<Toast> {
        self.current.read().clone()
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(ToastKind::Success, text.into());
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.show(ToastKind::Warning, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(ToastKind::Error, text.into());
    }

    fn show(&self, kind: ToastKind, text: String) {
        let mut current = self.current;
        let mut seq = self.seq;
        let id = seq() + 1;
        seq.set(id);
        current.set(Some(Toast { kind, text, seq: id }));
        spawn(async move {
            tokio::time::sleep(Duration::from_secs(TOAST_SECS)).await;
            if current.read().as_ref().is_some_and(|toast| toast.seq == id) {
                current.set(None);
            }
        });
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toaster = use_context::<Toaster>();
    let Some(toast) = toaster.current() else {
        return rsx! {};
    };

    rsx! {
        div { class: toast.kind.class(), role: "status", "{toast.text}" }
    }
}
