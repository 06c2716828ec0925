// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! SchemaLens - an in-memory relational schema model
//!
//! SchemaLens keeps the structure of a crawled relational database (schemas,
//! tables, procedures and column data types) in ordered, name-indexed
//! registries, and generates SQL for a fixed catalog of maintenance and
//! reporting operations against that model.
//!
//! # Features
//!
//! - **Named registries**: case-insensitive, context-qualified lookup with
//!   pluggable enumeration order (natural or alphabetical)
//! - **Schema model**: tables, procedures and column data types under one
//!   schema identity, with reverse lookup of data types by JDBC type code
//! - **Query templates**: `${variable}` SQL templates expanded first with
//!   table properties, then with process-wide default variables
//! - **Operation catalog**: COUNT, DROP, TRUNCATE, DUMP and QUERYOVER with
//!   their SQL templates and row-count messages
//!
//! # Usage
//!
//! ```ignore
//! use schemalens::{Column, ColumnDataType, Operation, Schema, SchemaReference, Table, TableType};
//!
//! let schema_ref = SchemaReference::new(Some("shop"), Some("public"));
//! let mut schema = Schema::new(schema_ref.clone());
//!
//! let int_type = ColumnDataType::new("INTEGER", 4);
//! let mut table = Table::new(Some(schema_ref), "orders", TableType::Table);
//! table.add_column(Column::new("id", int_type.clone()));
//! schema.add_column_data_type(Some(int_type))?;
//! schema.add_table(table)?;
//!
//! let count = Operation::Count.to_query().expect("COUNT has SQL");
//! let sql = count.get_query_for_table(schema.get_table("orders"));
//! assert_eq!(sql, "SELECT COUNT(*) FROM shop.public.orders");
//! ```

pub mod catalog;
pub mod operation;
pub mod query;
pub mod schema;

pub use catalog::error::{ModelError, ModelResult};
pub use catalog::registry::NamedObjectList;
pub use catalog::sort::{natural_compare, NamedObjectSort, NaturalSortComparator};
pub use catalog::traits::{NamedObject, ObjectKind};
pub use operation::Operation;
pub use query::plan::{PlannedStatement, QueryPlan};
pub use query::query::Query;
pub use query::variables::{
    default_variables, install_default_variables, remove_default_variable,
    set_default_variable, TemplateVariables, TemplateVariablesConfig,
};
pub use schema::database::Database;
pub use schema::model::Schema;
pub use schema::sql_types::{lookup_sql_data_type, JavaSqlType, JavaSqlTypeGroup};
pub use schema::types::{
    Column, ColumnDataType, Procedure, ProcedureType, SchemaReference, Table, TableType,
};

/// SchemaLens version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// SchemaLens crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
