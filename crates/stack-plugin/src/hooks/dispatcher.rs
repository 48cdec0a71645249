//! Hook dispatcher. Walks plugins in registration order and applies the
//! configured dispatch policy.
//!
//! Under [`DispatchPolicy::FailFast`]:
//! - The first failing plugin aborts the walk; later plugins are not called.
//! - The failure is returned to the caller.
//!
//! Under [`DispatchPolicy::Isolate`]:
//! - Failures are logged and collected in the [`DispatchReport`].
//! - Every plugin is visited.

use tracing::{debug, error, warn};

use stack_core::config::plugin::DispatchPolicy;

use crate::error::{PluginError, PluginResult};

use super::definitions::{Hook, HookResult, Plugin};

/// Owned plugin as stored by the registry.
pub type BoxedPlugin<H, C> = Box<dyn Plugin<H, C>>;

/// Outcome of dispatching one event to every registered plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// The event that was dispatched.
    pub hook: Hook,
    /// Number of plugins the event reached.
    pub visited: usize,
    /// Failures that were isolated instead of aborting the dispatch.
    pub failures: Vec<PluginError>,
}

impl DispatchReport {
    /// Creates an empty report.
    pub fn new(hook: Hook) -> Self {
        Self {
            hook,
            visited: 0,
            failures: Vec::new(),
        }
    }

    /// Returns whether every plugin handled the event without error.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Calls `call` for each plugin in order under `policy`.
pub(crate) fn dispatch<H, C, F>(
    plugins: &mut [BoxedPlugin<H, C>],
    hook: Hook,
    policy: DispatchPolicy,
    mut call: F,
) -> PluginResult<DispatchReport>
where
    F: FnMut(&mut BoxedPlugin<H, C>) -> PluginResult<()>,
{
    let mut report = DispatchReport::new(hook);

    if plugins.is_empty() {
        return Ok(report);
    }

    debug!(
        hook = %hook,
        plugin_count = plugins.len(),
        policy = %policy,
        "Dispatching hook"
    );

    for plugin in plugins.iter_mut() {
        report.visited += 1;

        if let Err(err) = call(plugin) {
            match policy {
                DispatchPolicy::FailFast => {
                    error!(
                        hook = %hook,
                        plugin_id = %err.plugin_id(),
                        error = %err,
                        "Hook failed, aborting dispatch"
                    );
                    return Err(err);
                }
                DispatchPolicy::Isolate => {
                    warn!(
                        hook = %hook,
                        plugin_id = %err.plugin_id(),
                        error = %err,
                        "Hook failed, continuing with remaining plugins"
                    );
                    report.failures.push(err);
                }
            }
        }
    }

    Ok(report)
}

/// Attaches the plugin id and hook name to a failed hook result.
pub(crate) fn invoke(plugin_id: &str, hook: Hook, result: HookResult) -> PluginResult<()> {
    result.map_err(|message| PluginError::hook(plugin_id, hook, message))
}
