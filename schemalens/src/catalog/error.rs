// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Error types for the schema model and query generation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Incompatible kinds for comparison - {left} and {right}")]
    TypeMismatch { left: String, right: String },

    #[error("Ambiguous name '{name}', matches: {}", .candidates.join(", "))]
    AmbiguousName {
        name: String,
        candidates: Vec<String>,
    },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ModelError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ModelError::InvalidArgument(message.into())
    }

    pub fn type_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        ModelError::TypeMismatch {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Configuration(err.to_string())
    }
}

pub type ModelResult<T> = Result<T, ModelError>;
