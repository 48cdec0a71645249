//! Plugin registry errors.

use thiserror::Error;

use stack_core::error::{AppError, ErrorKind};

use crate::hooks::definitions::Hook;

/// Errors raised while registering plugins or dispatching their hooks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    /// A plugin hook returned an error.
    #[error("plugin '{plugin_id}' failed in {hook}: {message}")]
    Hook {
        /// Plugin that failed.
        plugin_id: String,
        /// Hook that was running.
        hook: Hook,
        /// Reason reported by the plugin.
        message: String,
    },
    /// A plugin with the same id is already registered.
    #[error("plugin '{plugin_id}' is already registered")]
    Duplicate {
        /// The conflicting id.
        plugin_id: String,
    },
}

impl PluginError {
    /// Creates a hook failure error.
    pub fn hook(plugin_id: &str, hook: Hook, message: impl Into<String>) -> Self {
        Self::Hook {
            plugin_id: plugin_id.to_string(),
            hook,
            message: message.into(),
        }
    }

    /// Returns the id of the plugin involved.
    pub fn plugin_id(&self) -> &str {
        match self {
            Self::Hook { plugin_id, .. } | Self::Duplicate { plugin_id } => plugin_id,
        }
    }
}

impl From<PluginError> for AppError {
    fn from(err: PluginError) -> Self {
        let kind = match err {
            PluginError::Hook { .. } => ErrorKind::Plugin,
            PluginError::Duplicate { .. } => ErrorKind::Conflict,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}

/// A specialized `Result` type for plugin registry operations.
pub type PluginResult<T> = Result<T, PluginError>;
