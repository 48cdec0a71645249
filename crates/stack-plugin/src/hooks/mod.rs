//! Lifecycle hook definitions and the ordered dispatcher.

pub mod definitions;
pub mod dispatcher;

pub use definitions::{Hook, HookResult, Plugin, PluginInfo};
pub use dispatcher::{BoxedPlugin, DispatchReport};
