//! Toast notifications with auto-dismissal.

use dioxus::prelude::*;

const AUTO_DISMISS_MS: u32 = 4_000;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

/// One on-screen notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue shared through context.
#[derive(Clone, Copy)]
pub struct ToastState {
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastState {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(ToastKind::Warning, message);
    }

    pub fn dismiss(&self, id: u64) {
        let items: Vec<Toast> = self
            .toasts
            .peek()
            .iter()
            .filter(|toast| toast.id != id)
            .cloned()
            .collect();
        let mut toasts = self.toasts;
        toasts.set(items);
    }

    fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.peek().wrapping_add(1);
        let mut next_id = self.next_id;
        next_id.set(id);

        let mut items = self.toasts.peek().clone();
        items.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        let mut toasts = self.toasts;
        toasts.set(items);

        // Schedule removal
        let state = *self;
        spawn(async move {
            sleep_ms(AUTO_DISMISS_MS).await;
            state.dismiss(id);
        });
    }
}

#[allow(unused_variables)]
async fn sleep_ms(ms: u32) {
    #[cfg(feature = "web")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(all(feature = "server", not(feature = "web")))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
    }
}

/// Provider component for the toast queue
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);

    use_context_provider(|| ToastState { toasts, next_id });

    children
}

/// Hook to access the toast queue
pub fn use_toasts() -> ToastState {
    use_context::<ToastState>()
}
