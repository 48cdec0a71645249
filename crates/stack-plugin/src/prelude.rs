//! Prelude for convenient imports.

pub use stack_core::config::plugin::{DispatchPolicy, PluginConfig};

pub use crate::closure::ClosurePlugin;
pub use crate::error::{PluginError, PluginResult};
pub use crate::hooks::definitions::{Hook, HookResult, Plugin, PluginInfo};
pub use crate::hooks::dispatcher::{BoxedPlugin, DispatchReport};
pub use crate::markers::{Marker, MarkerSeverity};
pub use crate::registry::PluginRegistry;
