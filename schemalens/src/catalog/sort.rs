// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Sort orders for named objects
//!
//! The natural order compares full names chunk by chunk: runs of ASCII digits
//! compare by numeric value, everything else compares case-insensitively.
//! Two names that are equal under those rules fall back to a plain byte
//! comparison, so the order is total and only identical names compare equal.

use super::error::{ModelError, ModelResult};
use super::traits::NamedObject;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Number(&'a str),
    Text(&'a str),
}

struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let numeric = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != numeric)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(if numeric {
            Chunk::Number(chunk)
        } else {
            Chunk::Text(chunk)
        })
    }
}

fn compare_chunks(a: Chunk<'_>, b: Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Number(x), Chunk::Number(y)) => {
            let x = x.trim_start_matches('0');
            let y = y.trim_start_matches('0');
            x.len().cmp(&y.len()).then_with(|| x.cmp(y))
        }
        (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
        (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
        (Chunk::Text(x), Chunk::Text(y)) => x
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(y.chars().flat_map(char::to_lowercase)),
    }
}

/// Compare two strings in natural order, so that "table2" sorts before "table10"
pub fn natural_compare(a: &str, b: &str) -> Ordering {
    let mut left = Chunks { rest: a };
    let mut right = Chunks { rest: b };

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => match compare_chunks(x, y) {
                Ordering::Equal => continue,
                other => return other,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return a.cmp(b),
        }
    }
}

fn alphabetical_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// Enumeration order of a registry
///
/// Sorting is stable, so objects that compare equal keep their insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamedObjectSort {
    /// Numeric-aware order by full name
    #[default]
    Natural,
    /// Case-insensitive lexicographic order by full name
    Alphabetical,
}

impl NamedObjectSort {
    /// Compare two objects of the same static type
    pub fn compare<T: NamedObject + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        match self {
            NamedObjectSort::Natural => natural_compare(a.full_name(), b.full_name()),
            NamedObjectSort::Alphabetical => alphabetical_compare(a.full_name(), b.full_name()),
        }
    }
}

/// Compares database objects according to the natural sort order
///
/// Operands must be of the same kind; comparing a table with a procedure is
/// a programming error and is reported as [`ModelError::TypeMismatch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalSortComparator;

impl NaturalSortComparator {
    pub fn new() -> Self {
        Self
    }

    pub fn compare(&self, a: &dyn NamedObject, b: &dyn NamedObject) -> ModelResult<Ordering> {
        if a.kind() != b.kind() {
            return Err(ModelError::type_mismatch(
                format!("{} '{}'", a.kind(), a.full_name()),
                format!("{} '{}'", b.kind(), b.full_name()),
            ));
        }
        Ok(natural_compare(a.full_name(), b.full_name()))
    }
}
