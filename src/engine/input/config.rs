// Menu key bindings and remapping

use super::action::{default_bindings, InputSource, MenuAction};
use std::collections::HashMap;

/// Maps input sources (keys) to menu actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, MenuAction>,

    /// Reverse mapping, in bind order (action -> all sources)
    action_to_sources: HashMap<MenuAction, Vec<InputSource>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_sources: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, MenuAction)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind an input source to an action
    pub fn bind(&mut self, source: InputSource, action: MenuAction) {
        // A source drives at most one action
        self.unbind_source(source);

        self.bindings.insert(source, action);
        self.action_to_sources
            .entry(action)
            .or_default()
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<MenuAction> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: MenuAction) -> Vec<InputSource> {
        self.action_to_sources
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Key names for an action as shown in help text, e.g. "UP|W"
    pub fn mapping(&self, action: MenuAction) -> String {
        let labels: Vec<String> = self
            .get_sources(action)
            .iter()
            .map(InputSource::label)
            .collect();

        if labels.is_empty() {
            "UNBOUND".to_string()
        } else {
            labels.join("|")
        }
    }

    /// Reset to the default bindings
    pub fn reset_to_defaults(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
        for (source, action) in default_bindings() {
            self.bind(source, action);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
