// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Placeholder substitution for `${name}` templates

use super::variables::TemplateVariables;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::BTreeSet;

static TEMPLATE_VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^${}]+)\}").expect("template variable pattern is valid"));

/// Names of all variables referenced by a template
pub fn extract_template_variables(template: &str) -> BTreeSet<String> {
    TEMPLATE_VARIABLE
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Substitute the variables that are defined; others are left verbatim
pub fn expand_template(template: &str, variables: &TemplateVariables) -> String {
    if variables.is_empty() {
        return template.to_string();
    }
    TEMPLATE_VARIABLE
        .replace_all(template, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Run one substitution pass per variable set, in the given order
pub fn expand_template_layers(template: &str, layers: &[&TemplateVariables]) -> String {
    let expanded = layers
        .iter()
        .fold(template.to_string(), |text, variables| expand_template(&text, variables));

    log::trace!("Expanded template '{}' to '{}'", template, expanded);
    expanded
}
