//! Shared test helpers for registry integration tests.

use std::sync::{Arc, Mutex};

use stack_plugin::prelude::*;

/// Stand-in for the mounted editing surface.
#[derive(Debug)]
pub struct Editor {
    /// Surface identifier.
    pub id: u32,
    /// Commands registered on this surface.
    pub commands: Mutex<Vec<String>>,
}

impl Editor {
    /// Creates a fresh surface.
    pub fn new(id: u32) -> Arc<Self> {
        Arc::new(Self {
            id,
            commands: Mutex::new(Vec::new()),
        })
    }
}

/// Stand-in for the editor controller.
#[derive(Debug, Default)]
pub struct Controller {
    /// Languages registered through the controller.
    pub languages: Mutex<Vec<String>>,
    /// Themes registered through the controller.
    pub themes: Mutex<Vec<String>>,
}

/// Shared call log; each entry is `"<plugin id>:<hook>"`.
pub type CallLog = Arc<Mutex<Vec<String>>>;

/// Creates an empty call log.
pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Returns a snapshot of the call log.
pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().expect("call log poisoned").clone()
}

/// Plugin that records every hook it receives and can be told to fail one.
#[derive(Debug)]
pub struct RecordingPlugin {
    id: String,
    log: CallLog,
    fail_on: Option<Hook>,
}

impl RecordingPlugin {
    /// Creates a recording plugin.
    pub fn new(id: &str, log: &CallLog) -> Self {
        Self {
            id: id.to_string(),
            log: log.clone(),
            fail_on: None,
        }
    }

    /// Makes `hook` return an error.
    pub fn failing_on(mut self, hook: Hook) -> Self {
        self.fail_on = Some(hook);
        self
    }

    /// Boxes the plugin for registration.
    pub fn boxed(self) -> BoxedPlugin<Editor, Controller> {
        Box::new(self)
    }

    fn record(&self, hook: Hook) -> HookResult {
        self.log
            .lock()
            .expect("call log poisoned")
            .push(format!("{}:{}", self.id, hook));
        match self.fail_on {
            Some(failing) if failing == hook => Err(format!("{hook} exploded")),
            _ => Ok(()),
        }
    }
}

impl Plugin<Editor, Controller> for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        "Recording"
    }

    fn initialize(&mut self, _host: Option<&Editor>, _controller: &Controller) -> HookResult {
        self.record(Hook::Initialize)
    }

    fn on_before_mount(&mut self, _controller: &Controller) -> HookResult {
        self.record(Hook::OnBeforeMount)
    }

    fn on_mount(&mut self, _host: &Editor, _controller: &Controller) -> HookResult {
        self.record(Hook::OnMount)
    }

    fn on_change(&mut self, _value: &str, _host: Option<&Editor>) -> HookResult {
        self.record(Hook::OnChange)
    }

    fn on_validate(&mut self, _markers: &[Marker]) -> HookResult {
        self.record(Hook::OnValidate)
    }

    fn dispose(&mut self) -> HookResult {
        self.record(Hook::Dispose)
    }

    fn contribute_commands(&mut self, host: &Editor, _controller: &Controller) -> HookResult {
        host.commands
            .lock()
            .expect("commands poisoned")
            .push(format!("{}.run", self.id));
        self.record(Hook::ContributeCommands)
    }

    fn contribute_language(&mut self, _controller: &Controller) -> HookResult {
        self.record(Hook::ContributeLanguage)
    }

    fn contribute_theme(&mut self, _controller: &Controller) -> HookResult {
        self.record(Hook::ContributeTheme)
    }
}

/// Builds an unmounted registry with the given plugins and settings.
pub fn registry(
    plugins: Vec<BoxedPlugin<Editor, Controller>>,
    config: PluginConfig,
) -> PluginRegistry<Editor, Controller> {
    PluginRegistry::with_config(plugins, None, Arc::new(Controller::default()), config)
        .expect("registry construction")
}
