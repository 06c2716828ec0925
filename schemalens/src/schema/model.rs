// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Schema model
//!
//! One [`Schema`] per crawled schema, owning the registries of its tables,
//! procedures and column data types.

use super::sql_types::lookup_sql_data_type;
use super::types::{ColumnDataType, Procedure, SchemaReference, Table};
use crate::catalog::error::ModelResult;
use crate::catalog::registry::NamedObjectList;
use crate::catalog::sort::NamedObjectSort;
use crate::catalog::traits::{NamedObject, ObjectKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Find the column data type for a JDBC type code
///
/// When several types share the code, the one named like the standard JDBC
/// type wins; otherwise the first registered one.
pub(crate) fn find_column_data_type_by_type(
    column_data_types: &NamedObjectList<ColumnDataType>,
    type_code: i32,
) -> Option<&ColumnDataType> {
    let standard_name = lookup_sql_data_type(type_code).name;
    let mut candidates = column_data_types
        .iter()
        .filter(|data_type| data_type.type_code() == type_code);

    let first = candidates.next()?;
    if first.name().eq_ignore_ascii_case(standard_name) {
        return Some(first);
    }
    Some(
        candidates
            .find(|data_type| data_type.name().eq_ignore_ascii_case(standard_name))
            .unwrap_or(first),
    )
}

/// A crawled database schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    schema_ref: SchemaReference,
    tables: NamedObjectList<Table>,
    procedures: NamedObjectList<Procedure>,
    column_data_types: NamedObjectList<ColumnDataType>,
}

impl Schema {
    /// Create an empty schema
    pub fn new(schema_ref: SchemaReference) -> Self {
        Self {
            schema_ref,
            tables: NamedObjectList::new(),
            procedures: NamedObjectList::new(),
            column_data_types: NamedObjectList::new(),
        }
    }

    pub fn schema_ref(&self) -> &SchemaReference {
        &self.schema_ref
    }

    pub fn catalog_name(&self) -> Option<&str> {
        self.schema_ref.catalog_name()
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_ref.schema_name()
    }

    // --- Tables ---

    pub fn add_table(&mut self, table: Table) -> ModelResult<()> {
        self.tables.add(table)?;
        Ok(())
    }

    /// Look up a table by full name, or by name within this schema
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables.lookup_in(Some(self as &dyn NamedObject), name)
    }

    /// Mutable table lookup, for enriching a table after it was added
    pub fn lookup_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        let context = SchemaContext(&self.schema_ref);
        self.tables.lookup_mut(Some(&context), name)
    }

    pub fn remove_table(&mut self, table: &Table) -> Option<Table> {
        self.tables.remove(table)
    }

    /// Tables in the current table sort order
    pub fn get_tables(&self) -> Vec<&Table> {
        self.tables.values()
    }

    pub fn set_tables_sort_order(&mut self, sort: NamedObjectSort) {
        self.tables.set_sort_order(sort);
    }

    // --- Procedures ---

    pub fn add_procedure(&mut self, procedure: Procedure) -> ModelResult<()> {
        self.procedures.add(procedure)?;
        Ok(())
    }

    pub fn get_procedure(&self, name: &str) -> Option<&Procedure> {
        self.procedures.lookup_in(Some(self as &dyn NamedObject), name)
    }

    pub fn remove_procedure(&mut self, procedure: &Procedure) -> Option<Procedure> {
        self.procedures.remove(procedure)
    }

    pub fn get_procedures(&self) -> Vec<&Procedure> {
        self.procedures.values()
    }

    // --- Column data types ---

    /// Register a column data type; an absent type is ignored
    pub fn add_column_data_type(
        &mut self,
        column_data_type: Option<ColumnDataType>,
    ) -> ModelResult<()> {
        self.column_data_types.add_if_present(column_data_type)
    }

    pub fn get_column_data_type(&self, name: &str) -> Option<&ColumnDataType> {
        self.column_data_types.lookup(name)
    }

    /// Reverse lookup of a column data type by JDBC type code
    pub fn lookup_column_data_type_by_type(&self, type_code: i32) -> Option<&ColumnDataType> {
        find_column_data_type_by_type(&self.column_data_types, type_code)
    }

    pub fn get_column_data_types(&self) -> Vec<&ColumnDataType> {
        self.column_data_types.values()
    }
}

impl NamedObject for Schema {
    fn name(&self) -> &str {
        self.schema_ref
            .schema_name()
            .or(self.schema_ref.catalog_name())
            .unwrap_or("")
    }

    fn full_name(&self) -> &str {
        self.schema_ref.full_name()
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Schema
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// Lookup context standing in for a schema while its registries are borrowed
struct SchemaContext<'a>(&'a SchemaReference);

impl NamedObject for SchemaContext<'_> {
    fn name(&self) -> &str {
        self.0.schema_name().unwrap_or("")
    }

    fn full_name(&self) -> &str {
        self.0.full_name()
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Schema
    }
}
