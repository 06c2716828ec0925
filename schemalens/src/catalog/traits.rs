// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Named object trait definition
//!
//! Every entity kept in a [`NamedObjectList`](super::registry::NamedObjectList)
//! implements [`NamedObject`]. The full name is the registry key and must not
//! change once the entity is constructed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime kind of a named object
///
/// Two objects are only comparable by the natural sort comparator when they
/// share the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Schema,
    Table,
    Column,
    Procedure,
    ColumnDataType,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ObjectKind::Schema => "schema",
            ObjectKind::Table => "table",
            ObjectKind::Column => "column",
            ObjectKind::Procedure => "procedure",
            ObjectKind::ColumnDataType => "column data type",
        };
        f.write_str(label)
    }
}

/// Core trait for database objects that are identified by name
pub trait NamedObject {
    /// Unqualified name of the object
    fn name(&self) -> &str;

    /// Fully qualified name, used as the registry key
    fn full_name(&self) -> &str;

    /// Runtime kind of the object
    fn kind(&self) -> ObjectKind;
}
