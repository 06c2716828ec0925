// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Template variable sources
//!
//! [`TemplateVariables`] is a plain ordered key/value map. The process-wide
//! default set is what [`Query::get_query`](super::query::Query::get_query)
//! expands with; it starts empty and is filled through
//! [`install_default_variables`] or [`set_default_variable`], usually from a
//! [`TemplateVariablesConfig`].

use crate::catalog::error::{ModelError, ModelResult};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Ordered set of template variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateVariables {
    values: BTreeMap<String, String>,
}

impl TemplateVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, returning the previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build variables from a configuration, reading the process environment
    pub fn from_config(config: &TemplateVariablesConfig) -> Self {
        Self::from_config_and_env(config, std::env::vars())
    }

    /// Build variables from a configuration and an explicit environment
    ///
    /// Configured variables take precedence. Environment entries are used
    /// only when `env_prefix` is set; the prefix is stripped and the rest of
    /// the name lower-cased.
    pub fn from_config_and_env<I>(config: &TemplateVariablesConfig, env: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut variables: Self = config.variables.clone().into_iter().collect();

        if let Some(prefix) = config.env_prefix.as_deref().filter(|p| !p.is_empty()) {
            for (key, value) in env {
                let Some(name) = key.strip_prefix(prefix) else {
                    continue;
                };
                let name = name.to_lowercase();
                if !name.is_empty() && !variables.contains(&name) {
                    log::debug!("Template variable '{}' taken from environment", name);
                    variables.set(name, value);
                }
            }
        }
        variables
    }
}

impl FromIterator<(String, String)> for TemplateVariables {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, String>> for TemplateVariables {
    fn from(values: HashMap<String, String>) -> Self {
        values.into_iter().collect()
    }
}

/// Configuration of the default template variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateVariablesConfig {
    /// Variables set explicitly
    pub variables: HashMap<String, String>,

    /// Prefix of environment variables to import, e.g. `SCHEMALENS_`
    pub env_prefix: Option<String>,
}

impl TemplateVariablesConfig {
    pub fn from_json_str(json: &str) -> ModelResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        if let Some(name) = config.variables.keys().find(|name| name.trim().is_empty()) {
            return Err(ModelError::Configuration(format!(
                "Template variable name '{}' is blank",
                name
            )));
        }
        Ok(config)
    }
}

/// Process-wide default template variables
static DEFAULT_VARIABLES: Lazy<RwLock<TemplateVariables>> =
    Lazy::new(|| RwLock::new(TemplateVariables::new()));

/// Replace the default variables, returning the previous set
pub fn install_default_variables(variables: TemplateVariables) -> TemplateVariables {
    log::debug!("Installing {} default template variables", variables.len());
    std::mem::replace(&mut *DEFAULT_VARIABLES.write(), variables)
}

pub fn set_default_variable(name: impl Into<String>, value: impl Into<String>) -> Option<String> {
    DEFAULT_VARIABLES.write().set(name, value)
}

pub fn remove_default_variable(name: &str) -> Option<String> {
    DEFAULT_VARIABLES.write().remove(name)
}

/// Snapshot of the default variables
pub fn default_variables() -> TemplateVariables {
    DEFAULT_VARIABLES.read().clone()
}

pub(crate) fn with_default_variables<R>(f: impl FnOnce(&TemplateVariables) -> R) -> R {
    f(&DEFAULT_VARIABLES.read())
}
