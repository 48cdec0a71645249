//! Plugin registry. Owns the ordered plugin set of one editor host and
//! fans lifecycle events out to it.
//!
//! Dispatch order is registration order. Each event reaches every plugin
//! before the call returns; nothing is queued or deferred.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use stack_core::config::plugin::{DispatchPolicy, PluginConfig};

use crate::error::{PluginError, PluginResult};
use crate::hooks::definitions::{Hook, Plugin, PluginInfo};
use crate::hooks::dispatcher::{self, BoxedPlugin, DispatchReport, invoke};
use crate::markers::Marker;

/// Registry of the plugins attached to one editor host.
///
/// `H` is the editing surface, which only exists after mount, and `C` the
/// editor controller. Both are shared handles: the registry never decides
/// when they are created or torn down.
pub struct PluginRegistry<H, C> {
    /// Plugins in registration order.
    plugins: Vec<BoxedPlugin<H, C>>,
    /// Live editing surface, set on mount.
    host: Option<Arc<H>>,
    /// Editor controller.
    controller: Arc<C>,
    /// Dispatch settings.
    config: PluginConfig,
}

impl<H, C> PluginRegistry<H, C> {
    /// Creates a registry with default settings and registers `plugins` in
    /// order.
    pub fn new(
        plugins: Vec<BoxedPlugin<H, C>>,
        host: Option<Arc<H>>,
        controller: Arc<C>,
    ) -> PluginResult<Self> {
        Self::with_config(plugins, host, controller, PluginConfig::default())
    }

    /// Creates a registry with explicit settings and registers `plugins` in
    /// order.
    pub fn with_config(
        plugins: Vec<BoxedPlugin<H, C>>,
        host: Option<Arc<H>>,
        controller: Arc<C>,
        config: PluginConfig,
    ) -> PluginResult<Self> {
        let mut registry = Self {
            plugins: Vec::with_capacity(plugins.len()),
            host,
            controller,
            config,
        };

        for plugin in plugins {
            registry.register(plugin)?;
        }

        Ok(registry)
    }

    /// Registers a plugin and runs its `initialize` hook.
    ///
    /// Returns `Ok(false)` without touching the registry when a plugin with
    /// the same id is already registered; the existing registration wins.
    /// With `reject_duplicates` set this is reported as
    /// [`PluginError::Duplicate`] instead.
    ///
    /// The plugin stays registered even if `initialize` fails.
    pub fn register(&mut self, mut plugin: BoxedPlugin<H, C>) -> PluginResult<bool> {
        let plugin_id = plugin.id().to_string();

        if self.contains(&plugin_id) {
            if self.config.reject_duplicates {
                return Err(PluginError::Duplicate { plugin_id });
            }
            warn!(plugin_id = %plugin_id, "Plugin already registered, ignoring duplicate");
            return Ok(false);
        }

        info!(plugin_id = %plugin_id, name = %plugin.name(), "Registering plugin");

        let result = plugin.initialize(self.host.as_deref(), &self.controller);
        self.plugins.push(plugin);

        if let Err(err) = invoke(&plugin_id, Hook::Initialize, result) {
            match self.config.dispatch_policy {
                DispatchPolicy::FailFast => return Err(err),
                DispatchPolicy::Isolate => {
                    warn!(plugin_id = %plugin_id, error = %err, "Plugin initialize failed");
                }
            }
        }

        Ok(true)
    }

    /// Disposes and removes a plugin.
    ///
    /// Returns `Ok(false)` if no plugin has this id. Under fail-fast a
    /// failing `dispose` leaves the plugin registered.
    pub fn unregister(&mut self, plugin_id: &str) -> PluginResult<bool> {
        let Some(index) = self.position(plugin_id) else {
            debug!(plugin_id = %plugin_id, "Unregister requested for unknown plugin");
            return Ok(false);
        };

        let result = self.plugins[index].dispose();
        if let Err(err) = invoke(plugin_id, Hook::Dispose, result) {
            match self.config.dispatch_policy {
                DispatchPolicy::FailFast => return Err(err),
                DispatchPolicy::Isolate => {
                    warn!(plugin_id = %plugin_id, error = %err, "Plugin dispose failed");
                }
            }
        }

        self.plugins.remove(index);
        info!(plugin_id = %plugin_id, "Plugin unregistered");

        Ok(true)
    }

    /// Runs `on_before_mount` on every plugin.
    pub fn handle_before_mount(&mut self) -> PluginResult<DispatchReport> {
        let controller = self.controller.clone();

        self.dispatch(Hook::OnBeforeMount, |plugin| {
            let result = plugin.on_before_mount(&controller);
            invoke(plugin.id(), Hook::OnBeforeMount, result)
        })
    }

    /// Stores the mounted host and controller, then runs the mount hooks.
    ///
    /// Each plugin gets `on_mount`, `contribute_commands`,
    /// `contribute_language` and `contribute_theme` in that order before the
    /// next plugin is visited. A failing hook skips the rest of that
    /// plugin's sequence.
    pub fn handle_mount(
        &mut self,
        host: Arc<H>,
        controller: Arc<C>,
    ) -> PluginResult<DispatchReport> {
        self.host = Some(host.clone());
        self.controller = controller.clone();

        self.dispatch(Hook::OnMount, |plugin| {
            let result = plugin.on_mount(&host, &controller);
            invoke(plugin.id(), Hook::OnMount, result)?;

            let result = plugin.contribute_commands(&host, &controller);
            invoke(plugin.id(), Hook::ContributeCommands, result)?;

            let result = plugin.contribute_language(&controller);
            invoke(plugin.id(), Hook::ContributeLanguage, result)?;

            let result = plugin.contribute_theme(&controller);
            invoke(plugin.id(), Hook::ContributeTheme, result)
        })
    }

    /// Runs `on_change` on every plugin with the new document value.
    pub fn handle_change(&mut self, value: &str) -> PluginResult<DispatchReport> {
        let host = self.host.clone();

        self.dispatch(Hook::OnChange, |plugin| {
            let result = plugin.on_change(value, host.as_deref());
            invoke(plugin.id(), Hook::OnChange, result)
        })
    }

    /// Runs `on_validate` on every plugin with the latest markers.
    pub fn handle_validation(&mut self, markers: &[Marker]) -> PluginResult<DispatchReport> {
        self.dispatch(Hook::OnValidate, |plugin| {
            let result = plugin.on_validate(markers);
            invoke(plugin.id(), Hook::OnValidate, result)
        })
    }

    /// Disposes every plugin, then forgets all of them.
    ///
    /// The registry is emptied even when a `dispose` hook fails, so it can
    /// be reused for a new mount.
    pub fn dispose(&mut self) -> PluginResult<DispatchReport> {
        let result = self.dispatch(Hook::Dispose, |plugin| {
            let result = plugin.dispose();
            invoke(plugin.id(), Hook::Dispose, result)
        });

        let count = self.plugins.len();
        self.plugins.clear();
        info!(plugin_count = count, "All plugins disposed");

        result
    }

    /// Returns the plugin registered under `plugin_id`.
    pub fn get(&self, plugin_id: &str) -> Option<&dyn Plugin<H, C>> {
        self.plugins
            .iter()
            .find(|plugin| plugin.id() == plugin_id)
            .map(|plugin| &**plugin)
    }

    /// Checks whether a plugin is registered.
    pub fn contains(&self, plugin_id: &str) -> bool {
        self.position(plugin_id).is_some()
    }

    /// Returns plugin ids in dispatch order.
    pub fn plugin_ids(&self) -> Vec<&str> {
        self.plugins.iter().map(|plugin| plugin.id()).collect()
    }

    /// Lists plugin metadata in dispatch order.
    pub fn list(&self) -> Vec<PluginInfo> {
        self.plugins.iter().map(|plugin| plugin.info()).collect()
    }

    /// Returns plugin count.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns whether no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Returns the mounted host, if any.
    pub fn host(&self) -> Option<&Arc<H>> {
        self.host.as_ref()
    }

    /// Returns the current controller.
    pub fn controller(&self) -> &Arc<C> {
        &self.controller
    }

    /// Returns the dispatch settings.
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    fn position(&self, plugin_id: &str) -> Option<usize> {
        self.plugins.iter().position(|plugin| plugin.id() == plugin_id)
    }

    fn dispatch<F>(&mut self, hook: Hook, call: F) -> PluginResult<DispatchReport>
    where
        F: FnMut(&mut BoxedPlugin<H, C>) -> PluginResult<()>,
    {
        dispatcher::dispatch(&mut self.plugins, hook, self.config.dispatch_policy, call)
    }
}

impl<H, C> fmt::Debug for PluginRegistry<H, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.plugin_ids())
            .field("mounted", &self.host.is_some())
            .field("config", &self.config)
            .finish()
    }
}
