// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Database operations

use super::message::format_message;
use crate::catalog::error::{ModelError, ModelResult};
use crate::query::query::Query;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A database operation from the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Row count
    Count,
    /// Drop table
    Drop,
    /// Truncate table
    Truncate,
    /// Dump table contents
    Dump,
    /// Run a user query over each table
    QueryOver,
}

impl Operation {
    /// Every operation, in catalog order
    pub const ALL: [Operation; 5] = [
        Operation::Count,
        Operation::Drop,
        Operation::Truncate,
        Operation::Dump,
        Operation::QueryOver,
    ];

    pub fn values() -> &'static [Operation] {
        &Self::ALL
    }

    /// Canonical upper-case name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Count => "COUNT",
            Operation::Drop => "DROP",
            Operation::Truncate => "TRUNCATE",
            Operation::Dump => "DUMP",
            Operation::QueryOver => "QUERYOVER",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::Count => "Row Count",
            Operation::Drop => "Drop Table",
            Operation::Truncate => "Truncate Table",
            Operation::Dump => "Dump",
            Operation::QueryOver => "Query Over Table",
        }
    }

    /// SQL template; empty for QUERYOVER, which runs a user-supplied query
    pub fn query_template(&self) -> &'static str {
        match self {
            Operation::Count => "SELECT COUNT(*) FROM ${table}",
            Operation::Drop => "DROP ${tabletype} ${table}",
            Operation::Truncate => "DELETE FROM ${table}",
            Operation::Dump => "SELECT ${columns} FROM ${table} ORDER BY ${orderbycolumns}",
            Operation::QueryOver => "",
        }
    }

    /// Message pattern taking the affected row count as argument `{0}`
    pub fn count_message_format(&self) -> &'static str {
        match self {
            Operation::Count => "{0,choice,0#empty|0<{0,number,integer} rows}",
            Operation::Drop => "dropped",
            Operation::Truncate => {
                "{0,choice,0#was already empty|0<truncated; had {0,number,integer} rows}"
            }
            Operation::Dump => "",
            Operation::QueryOver => "{0,choice,0#-|0<{0,number,integer}}",
        }
    }

    /// Report a row count using this operation's message pattern
    pub fn count_message(&self, count: i64) -> String {
        format_message(self.count_message_format(), count)
    }

    /// The operation's SQL as a query; QUERYOVER has none
    pub fn to_query(&self) -> Option<Query> {
        let template = self.query_template();
        if template.is_empty() {
            return None;
        }
        Query::new(self.name(), template).ok()
    }

    pub fn is_select_operation(&self) -> bool {
        matches!(self, Operation::Dump | Operation::QueryOver)
    }

    pub fn is_aggregate_operation(&self) -> bool {
        matches!(self, Operation::Count)
    }

    pub fn is_query_over(&self) -> bool {
        matches!(self, Operation::QueryOver)
    }

    pub fn query_over_operation() -> Operation {
        Operation::QueryOver
    }

    /// Resolve an operation by name, ignoring case
    pub fn value_of(name: &str) -> Option<Operation> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|operation| operation.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        Operation::value_of(s).ok_or_else(|| ModelError::UnknownOperation(s.to_string()))
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
