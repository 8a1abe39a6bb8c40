use std::time::Duration;
use tokio::time::Instant;

const SUCCESS_TTL: Duration = Duration::from_secs(2);
const ERROR_TTL: Duration = Duration::from_secs(4);

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Success,
    Error,
}

impl ToastKind {
    /// How long a toast of this kind stays up. Loading never expires on its own.
    fn ttl(self) -> Option<Duration> {
        match self {
            Self::Loading => None,
            Self::Success => Some(SUCCESS_TTL),
            Self::Error => Some(ERROR_TTL),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    fn expired(&self, now: Instant) -> bool {
        self.kind
            .ttl()
            .is_some_and(|ttl| now.saturating_duration_since(self.shown_at) >= ttl)
    }
}

/// Transient notifications. A toast can be replaced in place by id,
/// which is how pending turns into success or failure.
#[derive(Debug, Default)]
pub struct Notifier {
    toasts: Vec<Toast>,
    next_id: ToastId,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a spinner-style toast. Returns the id used to resolve it.
    pub fn loading(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Loading, message.into())
    }

    /// Replace toast `id` with a success message.
    pub fn success(&mut self, id: ToastId, message: impl Into<String>) {
        self.replace(id, ToastKind::Success, message.into());
    }

    /// Replace toast `id` with an error message.
    pub fn error(&mut self, id: ToastId, message: impl Into<String>) {
        self.replace(id, ToastKind::Error, message.into());
    }

    /// Standalone error toast with nothing to replace.
    pub fn alert(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Error, message.into())
    }

    /// Drop expired toasts.
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| !t.expired(now));
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    fn push(&mut self, kind: ToastKind, message: String) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message,
            shown_at: Instant::now(),
        });
        id
    }

    /// Unknown ids are ignored so a stale id can never collide with a later toast.
    fn replace(&mut self, id: ToastId, kind: ToastKind, message: String) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.kind = kind;
            toast.message = message;
            toast.shown_at = Instant::now();
        }
    }
}
