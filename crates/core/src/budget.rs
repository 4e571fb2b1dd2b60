//! Token budget configuration.

use serde::{Deserialize, Serialize};

/// Default model context window, in tokens.
pub const DEFAULT_CONTEXT_WINDOW: usize = 8192;

/// Default share of the window reserved for the model's response.
pub const DEFAULT_RESERVED_FOR_RESPONSE: usize = 800;

/// The language model's input budget: its maximum context size minus the
/// tokens reserved for its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBudget {
    /// Total context window of the target model.
    pub context_window: usize,
    /// Tokens reserved for the model's response.
    pub reserved_for_response: usize,
}

impl TokenBudget {
    pub fn new(context_window: usize, reserved_for_response: usize) -> Self {
        Self {
            context_window,
            reserved_for_response,
        }
    }

    /// The effective input limit. Saturates at zero when the reservation
    /// exceeds the window.
    pub fn effective_limit(&self) -> usize {
        self.context_window.saturating_sub(self.reserved_for_response)
    }
}

impl Default for TokenBudget {
    fn default() -> Self {
        Self {
            context_window: DEFAULT_CONTEXT_WINDOW,
            reserved_for_response: DEFAULT_RESERVED_FOR_RESPONSE,
        }
    }
}
