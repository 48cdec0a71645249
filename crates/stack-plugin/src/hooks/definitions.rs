//! Lifecycle hook definitions and the plugin trait.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::markers::Marker;

/// Value returned by a single hook implementation.
///
/// An `Err` carries a human-readable reason; the registry wraps it with the
/// plugin id and hook name before reporting it.
pub type HookResult = Result<(), String>;

/// Enumeration of all lifecycle hooks a plugin may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hook {
    /// Fired once, right after the plugin is registered.
    Initialize,
    /// Fired before the editing surface is created.
    OnBeforeMount,
    /// Fired once the editing surface exists.
    OnMount,
    /// Fired whenever the document value changes.
    OnChange,
    /// Fired when validation produces a new set of markers.
    OnValidate,
    /// Fired when the plugin is removed or the host unmounts.
    Dispose,
    /// Lets the plugin register editor commands and keybindings.
    ContributeCommands,
    /// Lets the plugin register a language definition.
    ContributeLanguage,
    /// Lets the plugin register a color theme.
    ContributeTheme,
}

impl Hook {
    /// Returns the string name of this hook.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::OnBeforeMount => "on_before_mount",
            Self::OnMount => "on_mount",
            Self::OnChange => "on_change",
            Self::OnValidate => "on_validate",
            Self::Dispose => "dispose",
            Self::ContributeCommands => "contribute_commands",
            Self::ContributeLanguage => "contribute_language",
            Self::ContributeTheme => "contribute_theme",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata about a registered plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin identifier.
    pub id: String,
    /// Human-readable plugin name.
    pub name: String,
}

/// Trait implemented by editor plugins.
///
/// `H` is the live editing surface and `C` the editor controller. Every hook
/// has a no-op default, so a plugin implements only the events it cares
/// about.
pub trait Plugin<H, C>: fmt::Debug {
    /// Unique plugin identifier.
    fn id(&self) -> &str;

    /// Human-readable plugin name.
    fn name(&self) -> &str;

    /// Returns plugin metadata.
    fn info(&self) -> PluginInfo {
        PluginInfo {
            id: self.id().to_string(),
            name: self.name().to_string(),
        }
    }

    /// Called once when the plugin is registered. `host` is `None` if the
    /// surface has not mounted yet.
    fn initialize(&mut self, _host: Option<&H>, _controller: &C) -> HookResult {
        Ok(())
    }

    /// Called before the editing surface is created.
    fn on_before_mount(&mut self, _controller: &C) -> HookResult {
        Ok(())
    }

    /// Called once the editing surface exists.
    fn on_mount(&mut self, _host: &H, _controller: &C) -> HookResult {
        Ok(())
    }

    /// Called with the new document value.
    fn on_change(&mut self, _value: &str, _host: Option<&H>) -> HookResult {
        Ok(())
    }

    /// Called with the latest validation markers.
    fn on_validate(&mut self, _markers: &[Marker]) -> HookResult {
        Ok(())
    }

    /// Releases anything the plugin attached to the host.
    fn dispose(&mut self) -> HookResult {
        Ok(())
    }

    /// Registers commands on the mounted surface.
    fn contribute_commands(&mut self, _host: &H, _controller: &C) -> HookResult {
        Ok(())
    }

    /// Registers a language with the controller.
    fn contribute_language(&mut self, _controller: &C) -> HookResult {
        Ok(())
    }

    /// Registers a theme with the controller.
    fn contribute_theme(&mut self, _controller: &C) -> HookResult {
        Ok(())
    }
}
