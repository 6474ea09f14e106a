//! Transient toast notifications rendered into the host document.
//!
//! A `#wf-toast-root` container and its stylesheet are created on first use;
//! each toast is appended there and removed again after a timeout.

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::constants::TOAST_DISMISS_MS;

/// Success-message collaborator the workflow store notifies through.
pub trait Notifier {
    fn success(&self, message: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "wf-toast--success",
            ToastKind::Error => "wf-toast--error",
            ToastKind::Info => "wf-toast--info",
        }
    }
}

/// DOM-backed [`Notifier`]. Missing `window`/`document` (headless test runs)
/// turns every call into a no-op rather than a panic.
#[derive(Default)]
pub struct Toaster;

impl Toaster {
    pub fn show(&self, message: &str, kind: ToastKind) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        ensure_styles(&document);
        let Some(root) = toast_root(&document) else {
            return;
        };

        let Ok(toast) = document.create_element("div") else {
            return;
        };
        toast.set_class_name("wf-toast");
        let _ = toast.class_list().add_1(kind.class());
        toast.set_text_content(Some(message));
        let _ = root.append_child(&toast);

        let element = toast.clone();
        Timeout::new(TOAST_DISMISS_MS, move || {
            if let Some(parent) = element.parent_node() {
                let _ = parent.remove_child(&element);
            }
        })
        .forget();
    }

    pub fn error(&self, message: &str) {
        self.show(message, ToastKind::Error);
    }

    pub fn info(&self, message: &str) {
        self.show(message, ToastKind::Info);
    }
}

impl Notifier for Toaster {
    fn success(&self, message: &str) {
        self.show(message, ToastKind::Success);
    }
}

fn toast_root(document: &Document) -> Option<Element> {
    if let Some(existing) = document.get_element_by_id("wf-toast-root") {
        return Some(existing);
    }

    let root = document.create_element("div").ok()?;
    root.set_id("wf-toast-root");
    document.body()?.append_child(&root).ok()?;
    Some(root)
}

fn ensure_styles(document: &Document) {
    if document.get_element_by_id("wf-toast-styles").is_some() {
        return;
    }

    let css = "\
#wf-toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999}\
.wf-toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.15)}\
.wf-toast--success{background:#16a34a}\
.wf-toast--error{background:#dc2626}\
.wf-toast--info{background:#2563eb}";

    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id("wf-toast-styles");
    style.set_text_content(Some(css));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}
