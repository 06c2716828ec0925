// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Database container for crawled schemas

use super::model::{find_column_data_type_by_type, Schema};
use super::types::{ColumnDataType, Table};
use crate::catalog::error::ModelResult;
use crate::catalog::registry::NamedObjectList;
use crate::catalog::sort::NamedObjectSort;
use serde::{Deserialize, Serialize};

/// All schemas crawled from one database, plus the system data types that do
/// not belong to any schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    schemas: NamedObjectList<Schema>,
    system_column_data_types: NamedObjectList<ColumnDataType>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_schema(&mut self, schema: Schema) -> ModelResult<()> {
        self.schemas.add(schema)?;
        Ok(())
    }

    pub fn get_schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.lookup(name)
    }

    pub fn get_schema_mut(&mut self, name: &str) -> Option<&mut Schema> {
        self.schemas.lookup_mut(None, name)
    }

    /// Schemas in the current schema sort order
    pub fn schemas(&self) -> Vec<&Schema> {
        self.schemas.values()
    }

    pub fn set_schemas_sort_order(&mut self, sort: NamedObjectSort) {
        self.schemas.set_sort_order(sort);
    }

    /// Look up a table by schema full name and table name
    pub fn lookup_table(&self, schema_name: &str, table_name: &str) -> Option<&Table> {
        self.get_schema(schema_name)?.get_table(table_name)
    }

    /// Register a system column data type; an absent type is ignored
    pub fn add_system_column_data_type(
        &mut self,
        column_data_type: Option<ColumnDataType>,
    ) -> ModelResult<()> {
        self.system_column_data_types.add_if_present(column_data_type)
    }

    pub fn get_system_column_data_type(&self, name: &str) -> Option<&ColumnDataType> {
        self.system_column_data_types.lookup(name)
    }

    pub fn system_column_data_types(&self) -> Vec<&ColumnDataType> {
        self.system_column_data_types.values()
    }

    pub fn lookup_system_column_data_type_by_type(
        &self,
        type_code: i32,
    ) -> Option<&ColumnDataType> {
        find_column_data_type_by_type(&self.system_column_data_types, type_code)
    }
}
