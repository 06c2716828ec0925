// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! SQL query templates
//!
//! Queries are SQL text with `${name}` placeholders. Expansion runs in two
//! passes: table properties (`schema`, `table`, `columns`, `orderbycolumns`,
//! `tabletype`) first, then the process-wide default variables. Placeholders
//! that no pass resolves are left in the text as they are.

pub mod plan;
#[allow(clippy::module_inception)]
pub mod query;
pub mod template;
pub mod variables;
