// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Relational schema model
//!
//! A crawler fills a [`Schema`](model::Schema) through its add/remove
//! operations in a single build phase. Afterwards the model is read-only and
//! may be shared between readers; no internal locking is done here.

pub mod database;
pub mod model;
pub mod sql_types;
pub mod types;
