// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Named object registry
//!
//! [`NamedObjectList`] is an ordered container of named objects keyed by their
//! case-insensitive full name. Entities are stored once, in insertion order;
//! the configured [`NamedObjectSort`] only affects enumeration through
//! [`NamedObjectList::values`].

use super::error::{ModelError, ModelResult};
use super::sort::NamedObjectSort;
use super::traits::NamedObject;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::HashMap;
use std::fmt;

fn key_of(name: &str) -> String {
    name.to_lowercase()
}

/// Ordered, name-indexed registry of named objects
///
/// Adding an object whose full name is already registered replaces the stored
/// object in place, so a name is never present twice and the replaced object
/// keeps its original insertion slot.
pub struct NamedObjectList<T> {
    /// Objects in insertion order
    entries: Vec<T>,
    /// Lower-cased full name to position in `entries`
    index: HashMap<String, usize>,
    /// Enumeration order for `values()`
    sort: NamedObjectSort,
}

impl<T: NamedObject> NamedObjectList<T> {
    /// Create an empty registry enumerated in natural order
    pub fn new() -> Self {
        Self::with_sort_order(NamedObjectSort::default())
    }

    /// Create an empty registry with the given enumeration order
    pub fn with_sort_order(sort: NamedObjectSort) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            sort,
        }
    }

    /// Insert or replace an object by its full name
    ///
    /// # Returns
    /// * `Ok(Some(previous))` if an object with the same full name was replaced
    /// * `Ok(None)` if the object was newly inserted
    /// * `Err(ModelError::InvalidArgument)` if the full name is blank
    pub fn add(&mut self, object: T) -> ModelResult<Option<T>> {
        if object.full_name().trim().is_empty() {
            return Err(ModelError::invalid_argument(format!(
                "Cannot register {} with a blank name",
                object.kind()
            )));
        }

        let key = key_of(object.full_name());
        match self.index.get(&key) {
            Some(&position) => {
                log::debug!("Replacing {} '{}'", object.kind(), object.full_name());
                Ok(Some(std::mem::replace(&mut self.entries[position], object)))
            }
            None => {
                log::debug!("Adding {} '{}'", object.kind(), object.full_name());
                self.index.insert(key, self.entries.len());
                self.entries.push(object);
                Ok(None)
            }
        }
    }

    /// Insert an object if one is present; absent objects are ignored
    pub fn add_if_present(&mut self, object: Option<T>) -> ModelResult<()> {
        if let Some(object) = object {
            self.add(object)?;
        }
        Ok(())
    }

    /// Look up an object by full name, or by a unique unqualified name
    pub fn lookup(&self, name: &str) -> Option<&T> {
        self.lookup_in(None, name)
    }

    /// Look up an object by name within an enclosing context
    ///
    /// The name is probed as `context.full_name + "." + name` first, then as
    /// given. If neither is registered, a single object whose full name ends
    /// with `"." + name` is returned. Ambiguous matches are logged and
    /// reported as not found; use [`NamedObjectList::resolve_in`] to get the
    /// ambiguity as an error.
    pub fn lookup_in(&self, context: Option<&dyn NamedObject>, name: &str) -> Option<&T> {
        match self.resolve_in(context, name) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    /// Like [`NamedObjectList::lookup`], but reports ambiguous names as errors
    pub fn resolve(&self, name: &str) -> ModelResult<Option<&T>> {
        self.resolve_in(None, name)
    }

    /// Like [`NamedObjectList::lookup_in`], but reports ambiguous names as errors
    pub fn resolve_in(
        &self,
        context: Option<&dyn NamedObject>,
        name: &str,
    ) -> ModelResult<Option<&T>> {
        Ok(self
            .position_of(context, name)?
            .map(|position| &self.entries[position]))
    }

    /// Mutable lookup, with the same resolution rules as [`NamedObjectList::lookup_in`]
    pub fn lookup_mut(&mut self, context: Option<&dyn NamedObject>, name: &str) -> Option<&mut T> {
        match self.position_of(context, name) {
            Ok(Some(position)) => self.entries.get_mut(position),
            Ok(None) => None,
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    fn position_of(
        &self,
        context: Option<&dyn NamedObject>,
        name: &str,
    ) -> ModelResult<Option<usize>> {
        if name.is_empty() {
            return Ok(None);
        }

        if let Some(context) = context {
            let qualified = format!("{}.{}", context.full_name(), name);
            if let Some(&position) = self.index.get(&key_of(&qualified)) {
                return Ok(Some(position));
            }
        }

        let key = key_of(name);
        if let Some(&position) = self.index.get(&key) {
            return Ok(Some(position));
        }

        let suffix = format!(".{}", key);
        let candidates: Vec<usize> = self
            .index
            .iter()
            .filter(|(stored, _)| stored.ends_with(&suffix))
            .map(|(_, &position)| position)
            .collect();

        match candidates.as_slice() {
            [] => Ok(None),
            [position] => Ok(Some(*position)),
            _ => {
                let mut names: Vec<String> = candidates
                    .iter()
                    .map(|&position| self.entries[position].full_name().to_string())
                    .collect();
                names.sort();
                Err(ModelError::AmbiguousName {
                    name: name.to_string(),
                    candidates: names,
                })
            }
        }
    }

    /// Check whether an object with this full name is registered
    pub fn contains(&self, full_name: &str) -> bool {
        self.index.contains_key(&key_of(full_name))
    }

    /// Remove the registered object with the same full name as `object`
    pub fn remove<E: NamedObject + ?Sized>(&mut self, object: &E) -> Option<T> {
        self.remove_by_name(object.full_name())
    }

    /// Remove an object by its full name; the order of the rest is unchanged
    pub fn remove_by_name(&mut self, full_name: &str) -> Option<T> {
        let position = self.index.remove(&key_of(full_name))?;
        let removed = self.entries.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        log::debug!("Removed {} '{}'", removed.kind(), removed.full_name());
        Some(removed)
    }

    /// All objects in the current enumeration order
    ///
    /// Computed on each call; later mutations are not reflected in a
    /// previously returned vector.
    pub fn values(&self) -> Vec<&T> {
        let mut values: Vec<&T> = self.entries.iter().collect();
        let sort = self.sort;
        values.sort_by(|a, b| sort.compare(*a, *b));
        values
    }

    /// All objects in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Replace the enumeration order
    pub fn set_sort_order(&mut self, sort: NamedObjectSort) {
        log::debug!("Registry sort order set to {:?}", sort);
        self.sort = sort;
    }

    pub fn sort_order(&self) -> NamedObjectSort {
        self.sort
    }

    /// Number of distinct full names registered
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: NamedObject> Default for NamedObjectList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for NamedObjectList<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
            sort: self.sort,
        }
    }
}

impl<T: NamedObject> fmt::Debug for NamedObjectList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.full_name()))
            .finish()
    }
}

impl<T: Serialize> Serialize for NamedObjectList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

impl<'de, T: NamedObject + Deserialize<'de>> Deserialize<'de> for NamedObjectList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<T>::deserialize(deserializer)?;
        let mut list = Self::new();
        for entry in entries {
            list.add(entry).map_err(serde::de::Error::custom)?;
        }
        Ok(list)
    }
}
