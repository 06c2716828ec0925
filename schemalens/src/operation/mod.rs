// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Catalog of database operations
//!
//! The set of operations is closed: COUNT, DROP, TRUNCATE, DUMP and
//! QUERYOVER. Each carries its SQL template and the message pattern used to
//! report the affected row count.

pub mod message;
#[allow(clippy::module_inception)]
pub mod operation;

pub use operation::Operation;
