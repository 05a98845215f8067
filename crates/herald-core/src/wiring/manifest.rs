use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::event::dispatcher::EventDispatcher;
use crate::event::{ListenerId, Priority};
use crate::wiring::error::WiringError;
use crate::wiring::HandlerMap;

/// Supported wiring manifest formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ManifestFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yaml, .yml) - requires "yaml-config" feature
    #[cfg(feature = "yaml-config")]
    Yaml,
    /// TOML format (.toml) - requires "toml-config" feature
    #[cfg(feature = "toml-config")]
    Toml,
}

impl ManifestFormat {
    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ManifestFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ManifestFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ManifestFormat::Toml => "toml",
        }
    }

    /// Determine format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ManifestFormat::Json),
                #[cfg(feature = "yaml-config")]
                "yaml" | "yml" => Some(ManifestFormat::Yaml),
                #[cfg(feature = "toml-config")]
                "toml" => Some(ManifestFormat::Toml),
                _ => None,
            })
    }
}

/// One declared binding: event name, handler name, optional priority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingSpec {
    pub event: String,
    pub handler: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Declarative wiring document applied at startup.
///
/// The manifest names handlers; the composition root supplies the matching
/// callables through a [`HandlerMap`] when the manifest is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WiringManifest {
    #[serde(default)]
    pub bindings: Vec<BindingSpec>,
}

impl WiringManifest {
    /// Parse a manifest from JSON
    pub fn from_json(content: &str) -> Result<Self, WiringError> {
        serde_json::from_str(content).map_err(|e| WiringError::Parse {
            format: "json",
            message: e.to_string(),
        })
    }

    /// Parse a manifest from TOML
    #[cfg(feature = "toml-config")]
    pub fn from_toml(content: &str) -> Result<Self, WiringError> {
        toml::from_str(content).map_err(|e| WiringError::Parse {
            format: "toml",
            message: e.to_string(),
        })
    }

    /// Parse a manifest from YAML
    #[cfg(feature = "yaml-config")]
    pub fn from_yaml(content: &str) -> Result<Self, WiringError> {
        serde_yaml::from_str(content).map_err(|e| WiringError::Parse {
            format: "yaml",
            message: e.to_string(),
        })
    }

    /// Parse `content` as the given format
    pub fn parse(content: &str, format: ManifestFormat) -> Result<Self, WiringError> {
        match format {
            ManifestFormat::Json => Self::from_json(content),
            #[cfg(feature = "yaml-config")]
            ManifestFormat::Yaml => Self::from_yaml(content),
            #[cfg(feature = "toml-config")]
            ManifestFormat::Toml => Self::from_toml(content),
        }
    }

    /// Shape checks that need no dispatcher: names must be non-empty and
    /// no (event, priority) pair may appear twice among explicit
    /// priorities. Auto-assigned bindings cannot collide, so they pass.
    pub fn validate(&self) -> Result<(), WiringError> {
        let mut seen: HashSet<(&str, Priority)> = HashSet::new();
        for (index, binding) in self.bindings.iter().enumerate() {
            if binding.event.is_empty() {
                return Err(WiringError::EmptyEventName { index });
            }
            if binding.handler.is_empty() {
                return Err(WiringError::EmptyHandlerName { index });
            }
            if let Some(priority) = binding.priority {
                if !seen.insert((binding.event.as_str(), priority)) {
                    return Err(WiringError::DuplicateBinding {
                        event_name: binding.event.clone(),
                        priority,
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolve every binding through `handlers` and register it with
    /// `dispatcher`, in declaration order.
    ///
    /// Validates first, so a manifest that fails shape checks registers
    /// nothing. Registration itself fails fast; bindings registered before
    /// the failure stay registered.
    pub fn apply(
        &self,
        handlers: &HandlerMap,
        dispatcher: &mut EventDispatcher,
    ) -> Result<Vec<ListenerId>, WiringError> {
        self.validate()?;
        let mut ids = Vec::with_capacity(self.bindings.len());
        for binding in &self.bindings {
            let listener =
                handlers
                    .get(&binding.handler)
                    .ok_or_else(|| WiringError::UnknownHandler {
                        handler: binding.handler.clone(),
                    })?;
            let id = match binding.priority {
                Some(priority) => {
                    dispatcher.add_listener_at(binding.event.as_str(), listener, priority)?
                }
                None => dispatcher.add_listener(binding.event.as_str(), listener)?,
            };
            ids.push(id);
        }
        log::debug!("Applied wiring manifest: {} binding(s)", ids.len());
        Ok(ids)
    }
}
