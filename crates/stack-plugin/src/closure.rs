//! Closure-based plugins for hosts that want to attach a few hooks without
//! declaring a type.

use std::fmt;

use crate::hooks::definitions::{Hook, HookResult, Plugin};
use crate::markers::Marker;

type HostControllerFn<H, C> = Box<dyn FnMut(&H, &C) -> HookResult>;
type ControllerFn<C> = Box<dyn FnMut(&C) -> HookResult>;

/// A plugin assembled from individual hook closures.
///
/// Hooks that were never set behave as no-ops.
///
/// ```rust,ignore
/// let plugin = ClosurePlugin::new("word-count", "Word Count")
///     .on_change(|value, _host| {
///         tracing::debug!(words = value.split_whitespace().count());
///         Ok(())
///     });
/// registry.register(Box::new(plugin))?;
/// ```
pub struct ClosurePlugin<H, C> {
    /// Plugin ID.
    id: String,
    /// Display name.
    name: String,
    initialize: Option<Box<dyn FnMut(Option<&H>, &C) -> HookResult>>,
    before_mount: Option<ControllerFn<C>>,
    mount: Option<HostControllerFn<H, C>>,
    change: Option<Box<dyn FnMut(&str, Option<&H>) -> HookResult>>,
    validate: Option<Box<dyn FnMut(&[Marker]) -> HookResult>>,
    dispose: Option<Box<dyn FnMut() -> HookResult>>,
    commands: Option<HostControllerFn<H, C>>,
    language: Option<ControllerFn<C>>,
    theme: Option<ControllerFn<C>>,
}

impl<H, C> ClosurePlugin<H, C> {
    /// Creates a plugin with no hooks.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            initialize: None,
            before_mount: None,
            mount: None,
            change: None,
            validate: None,
            dispose: None,
            commands: None,
            language: None,
            theme: None,
        }
    }

    /// Sets the `initialize` hook.
    pub fn initialize<F>(mut self, f: F) -> Self
    where
        F: FnMut(Option<&H>, &C) -> HookResult + 'static,
    {
        self.initialize = Some(Box::new(f));
        self
    }

    /// Sets the `on_before_mount` hook.
    pub fn on_before_mount<F>(mut self, f: F) -> Self
    where
        F: FnMut(&C) -> HookResult + 'static,
    {
        self.before_mount = Some(Box::new(f));
        self
    }

    /// Sets the `on_mount` hook.
    pub fn on_mount<F>(mut self, f: F) -> Self
    where
        F: FnMut(&H, &C) -> HookResult + 'static,
    {
        self.mount = Some(Box::new(f));
        self
    }

    /// Sets the `on_change` hook.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(&str, Option<&H>) -> HookResult + 'static,
    {
        self.change = Some(Box::new(f));
        self
    }

    /// Sets the `on_validate` hook.
    pub fn on_validate<F>(mut self, f: F) -> Self
    where
        F: FnMut(&[Marker]) -> HookResult + 'static,
    {
        self.validate = Some(Box::new(f));
        self
    }

    /// Sets the `dispose` hook.
    pub fn on_dispose<F>(mut self, f: F) -> Self
    where
        F: FnMut() -> HookResult + 'static,
    {
        self.dispose = Some(Box::new(f));
        self
    }

    /// Sets the `contribute_commands` hook.
    pub fn contribute_commands<F>(mut self, f: F) -> Self
    where
        F: FnMut(&H, &C) -> HookResult + 'static,
    {
        self.commands = Some(Box::new(f));
        self
    }

    /// Sets the `contribute_language` hook.
    pub fn contribute_language<F>(mut self, f: F) -> Self
    where
        F: FnMut(&C) -> HookResult + 'static,
    {
        self.language = Some(Box::new(f));
        self
    }

    /// Sets the `contribute_theme` hook.
    pub fn contribute_theme<F>(mut self, f: F) -> Self
    where
        F: FnMut(&C) -> HookResult + 'static,
    {
        self.theme = Some(Box::new(f));
        self
    }

    /// Hooks that have a closure attached.
    pub fn hooks(&self) -> Vec<Hook> {
        [
            (Hook::Initialize, self.initialize.is_some()),
            (Hook::OnBeforeMount, self.before_mount.is_some()),
            (Hook::OnMount, self.mount.is_some()),
            (Hook::OnChange, self.change.is_some()),
            (Hook::OnValidate, self.validate.is_some()),
            (Hook::Dispose, self.dispose.is_some()),
            (Hook::ContributeCommands, self.commands.is_some()),
            (Hook::ContributeLanguage, self.language.is_some()),
            (Hook::ContributeTheme, self.theme.is_some()),
        ]
        .into_iter()
        .filter_map(|(hook, set)| set.then_some(hook))
        .collect()
    }
}

impl<H, C> fmt::Debug for ClosurePlugin<H, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosurePlugin")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("hooks", &self.hooks())
            .finish()
    }
}

impl<H, C> Plugin<H, C> for ClosurePlugin<H, C> {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self, host: Option<&H>, controller: &C) -> HookResult {
        self.initialize.as_mut().map_or(Ok(()), |f| f(host, controller))
    }

    fn on_before_mount(&mut self, controller: &C) -> HookResult {
        self.before_mount.as_mut().map_or(Ok(()), |f| f(controller))
    }

    fn on_mount(&mut self, host: &H, controller: &C) -> HookResult {
        self.mount.as_mut().map_or(Ok(()), |f| f(host, controller))
    }

    fn on_change(&mut self, value: &str, host: Option<&H>) -> HookResult {
        self.change.as_mut().map_or(Ok(()), |f| f(value, host))
    }

    fn on_validate(&mut self, markers: &[Marker]) -> HookResult {
        self.validate.as_mut().map_or(Ok(()), |f| f(markers))
    }

    fn dispose(&mut self) -> HookResult {
        self.dispose.as_mut().map_or(Ok(()), |f| f())
    }

    fn contribute_commands(&mut self, host: &H, controller: &C) -> HookResult {
        self.commands.as_mut().map_or(Ok(()), |f| f(host, controller))
    }

    fn contribute_language(&mut self, controller: &C) -> HookResult {
        self.language.as_mut().map_or(Ok(()), |f| f(controller))
    }

    fn contribute_theme(&mut self, controller: &C) -> HookResult {
        self.theme.as_mut().map_or(Ok(()), |f| f(controller))
    }
}
