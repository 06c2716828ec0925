// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Named object catalog
//!
//! Generic building blocks shared by every schema entity: the [`NamedObject`]
//! trait, the ordered name-indexed [`NamedObjectList`] registry and the sort
//! orders used to enumerate registries.
//!
//! [`NamedObject`]: traits::NamedObject
//! [`NamedObjectList`]: registry::NamedObjectList

pub mod error;
pub mod registry;
pub mod sort;
pub mod traits;
