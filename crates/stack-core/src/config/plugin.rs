//! Plugin registry configuration.

use serde::{Deserialize, Serialize};

/// How the registry reacts when a plugin hook fails during dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchPolicy {
    /// The first failing hook aborts the remaining dispatch and is returned.
    #[default]
    FailFast,
    /// Failing hooks are logged and the remaining plugins still run.
    Isolate,
}

impl DispatchPolicy {
    /// Returns the string name of this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FailFast => "fail_fast",
            Self::Isolate => "isolate",
        }
    }
}

impl std::fmt::Display for DispatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plugin registry configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Behaviour when a hook returns an error.
    #[serde(default)]
    pub dispatch_policy: DispatchPolicy,
    /// Treat duplicate plugin ids as an error instead of a logged no-op.
    #[serde(default)]
    pub reject_duplicates: bool,
}
