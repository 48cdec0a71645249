//! # stack-plugin
//!
//! Plugin framework for design-stack editor surfaces. Provides:
//!
//! - The [`Plugin`] trait with optional lifecycle hooks
//! - An ordered [`PluginRegistry`] that fans host lifecycle events out to
//!   every registered plugin
//! - Fail-fast or isolating dispatch, selected by configuration
//! - Validation [`Marker`]s passed to `on_validate`
//! - [`ClosurePlugin`] for quick, type-free plugins

pub mod closure;
pub mod error;
pub mod hooks;
pub mod markers;
pub mod prelude;
pub mod registry;

pub use closure::ClosurePlugin;
pub use error::{PluginError, PluginResult};
pub use hooks::definitions::{Hook, HookResult, Plugin, PluginInfo};
pub use hooks::dispatcher::{BoxedPlugin, DispatchReport};
pub use markers::{Marker, MarkerSeverity, MarkerSummary};
pub use registry::PluginRegistry;
