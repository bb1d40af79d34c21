//! Configuration for the dispatcher.

use quickchat_core::Rules;
use serde::{Deserialize, Serialize};

/// Configuration for a [`Dispatcher`](crate::Dispatcher).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Validation rules applied before a message is marked sent.
    pub rules: Rules,
}
