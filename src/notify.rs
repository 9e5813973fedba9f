//! Notifications
//!
//! Short-lived toasts. Each one is independent: shown immediately, starts
//! fading after [`FADE_DELAY_MS`], removed [`REMOVE_DELAY_MS`] later.

use crate::list::AddOutcome;
use crate::models::Product;

/// Time a toast stays fully visible
pub const FADE_DELAY_MS: u32 = 2_700;
/// Fade-out duration before removal
pub const REMOVE_DELAY_MS: u32 = 300;

pub const MSG_ADDED: &str = "Produkt został dodany!";
pub const MSG_DUPLICATE: &str = "Ten produkt już istnieje na liście!";
pub const MSG_REMOVED: &str = "Produkt został usunięty!";

/// What the UI does after an add attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddFeedback {
    /// Toast to show, if any
    pub message: Option<&'static str>,
    /// Whether the input field is cleared
    pub clear_input: bool,
}

pub fn add_feedback(outcome: &AddOutcome) -> AddFeedback {
    match outcome {
        AddOutcome::Added(_) => AddFeedback { message: Some(MSG_ADDED), clear_input: true },
        AddOutcome::Duplicate => AddFeedback { message: Some(MSG_DUPLICATE), clear_input: false },
        AddOutcome::Blank => AddFeedback { message: None, clear_input: false },
    }
}

/// Toast shown after a product is removed
pub fn remove_feedback(_removed: &Product) -> &'static str {
    MSG_REMOVED
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub fading: bool,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a new toast and return its id
    pub fn push(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, message: message.into(), fading: false });
        id
    }

    pub fn begin_fade(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.fading = true;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn is_fading(&self, id: u64) -> bool {
        self.toasts.iter().any(|t| t.id == id && t.fading)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
