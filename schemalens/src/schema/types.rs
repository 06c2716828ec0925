// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Schema entity types: tables, columns, procedures and column data types
//!
//! Full names are derived from the owning schema and the object name, computed
//! once on first use and never changed afterwards.

use super::sql_types::{lookup_sql_data_type, JavaSqlType, JavaSqlTypeGroup};
use crate::catalog::traits::{NamedObject, ObjectKind};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

fn join_name_parts<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Catalog and schema names identifying one crawled schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaReference {
    catalog_name: Option<String>,
    schema_name: Option<String>,
    #[serde(skip)]
    full_name: OnceCell<String>,
}

impl SchemaReference {
    pub fn new(catalog_name: Option<&str>, schema_name: Option<&str>) -> Self {
        Self {
            catalog_name: catalog_name.map(str::to_string),
            schema_name: schema_name.map(str::to_string),
            full_name: OnceCell::new(),
        }
    }

    pub fn catalog_name(&self) -> Option<&str> {
        self.catalog_name.as_deref()
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    /// `catalog.schema`, leaving out whichever part is absent
    pub fn full_name(&self) -> &str {
        self.full_name.get_or_init(|| {
            join_name_parts([self.catalog_name.as_deref(), self.schema_name.as_deref()])
        })
    }
}

impl PartialEq for SchemaReference {
    fn eq(&self, other: &Self) -> bool {
        self.catalog_name == other.catalog_name && self.schema_name == other.schema_name
    }
}

impl Eq for SchemaReference {}

impl Hash for SchemaReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.catalog_name.hash(state);
        self.schema_name.hash(state);
    }
}

impl fmt::Display for SchemaReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// Data type of a column, as reported by the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDataType {
    name: String,
    type_code: i32,
    database_specific_type_name: Option<String>,
    user_defined: bool,
}

impl ColumnDataType {
    pub fn new(name: impl Into<String>, type_code: i32) -> Self {
        Self {
            name: name.into(),
            type_code,
            database_specific_type_name: None,
            user_defined: false,
        }
    }

    pub fn with_database_specific_type_name(mut self, name: impl Into<String>) -> Self {
        self.database_specific_type_name = Some(name.into());
        self
    }

    pub fn with_user_defined(mut self, user_defined: bool) -> Self {
        self.user_defined = user_defined;
        self
    }

    /// JDBC type code (`java.sql.Types`)
    pub fn type_code(&self) -> i32 {
        self.type_code
    }

    pub fn database_specific_type_name(&self) -> &str {
        self.database_specific_type_name
            .as_deref()
            .unwrap_or(&self.name)
    }

    pub fn is_user_defined(&self) -> bool {
        self.user_defined
    }

    pub fn java_sql_type(&self) -> &'static JavaSqlType {
        lookup_sql_data_type(self.type_code)
    }

    pub fn type_group(&self) -> JavaSqlTypeGroup {
        self.java_sql_type().group
    }
}

impl NamedObject for ColumnDataType {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::ColumnDataType
    }
}

/// Column of a table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    name: String,
    /// Full name of the owning table, set when the column is added to it
    #[serde(default)]
    parent: String,
    ordinal_position: u32,
    data_type: ColumnDataType,
    nullable: bool,
    #[serde(skip)]
    full_name: OnceCell<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: ColumnDataType) -> Self {
        Self {
            name: name.into(),
            parent: String::new(),
            ordinal_position: 0,
            data_type,
            nullable: true,
            full_name: OnceCell::new(),
        }
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// 1-based position in the table, as declared
    pub fn ordinal_position(&self) -> u32 {
        self.ordinal_position
    }

    pub fn data_type(&self) -> &ColumnDataType {
        &self.data_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether the column can appear in an ORDER BY list
    pub fn is_orderable(&self) -> bool {
        self.data_type.type_group().is_orderable()
    }
}

impl NamedObject for Column {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        self.full_name
            .get_or_init(|| join_name_parts([Some(self.parent.as_str()), Some(self.name.as_str())]))
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Column
    }
}

/// Kind of table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TableType {
    #[default]
    Table,
    View,
    Unknown,
}

impl From<&str> for TableType {
    fn from(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "TABLE" | "BASE TABLE" => TableType::Table,
            "VIEW" => TableType::View,
            _ => TableType::Unknown,
        }
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TableType::Table => "TABLE",
            TableType::View => "VIEW",
            TableType::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// Table or view, with its columns in declared order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    schema: Option<SchemaReference>,
    name: String,
    table_type: TableType,
    columns: Vec<Column>,
    remarks: Option<String>,
    #[serde(skip)]
    full_name: OnceCell<String>,
}

impl Table {
    pub fn new(
        schema: Option<SchemaReference>,
        name: impl Into<String>,
        table_type: TableType,
    ) -> Self {
        Self {
            schema,
            name: name.into(),
            table_type,
            columns: Vec::new(),
            remarks: None,
            full_name: OnceCell::new(),
        }
    }

    pub fn schema(&self) -> Option<&SchemaReference> {
        self.schema.as_ref()
    }

    pub fn table_type(&self) -> TableType {
        self.table_type
    }

    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    pub fn set_remarks(&mut self, remarks: impl Into<String>) {
        self.remarks = Some(remarks.into());
    }

    /// Append a column
    ///
    /// A column without an ordinal position is numbered after the existing
    /// columns.
    pub fn add_column(&mut self, mut column: Column) {
        column.parent = self.full_name().to_string();
        column.full_name = OnceCell::new();
        if column.ordinal_position == 0 {
            column.ordinal_position = self.columns.len() as u32 + 1;
        }
        self.columns.push(column);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    /// Column names in declared order, comma separated
    pub fn columns_list_as_string(&self) -> String {
        self.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Like [`Table::columns_list_as_string`], without binary columns
    pub fn order_by_columns_list_as_string(&self) -> String {
        self.columns
            .iter()
            .filter(|column| column.is_orderable())
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl NamedObject for Table {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        self.full_name.get_or_init(|| {
            join_name_parts([
                self.schema.as_ref().map(SchemaReference::full_name),
                Some(self.name.as_str()),
            ])
        })
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Table
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// Whether a procedure returns a result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcedureType {
    #[default]
    Unknown,
    NoResult,
    ReturnsResult,
}

/// Stored procedure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Procedure {
    schema: Option<SchemaReference>,
    name: String,
    procedure_type: ProcedureType,
    remarks: Option<String>,
    #[serde(skip)]
    full_name: OnceCell<String>,
}

impl Procedure {
    pub fn new(
        schema: Option<SchemaReference>,
        name: impl Into<String>,
        procedure_type: ProcedureType,
    ) -> Self {
        Self {
            schema,
            name: name.into(),
            procedure_type,
            remarks: None,
            full_name: OnceCell::new(),
        }
    }

    pub fn schema(&self) -> Option<&SchemaReference> {
        self.schema.as_ref()
    }

    pub fn procedure_type(&self) -> ProcedureType {
        self.procedure_type
    }

    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    pub fn set_remarks(&mut self, remarks: impl Into<String>) {
        self.remarks = Some(remarks.into());
    }
}

impl NamedObject for Procedure {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        self.full_name.get_or_init(|| {
            join_name_parts([
                self.schema.as_ref().map(SchemaReference::full_name),
                Some(self.name.as_str()),
            ])
        })
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::Procedure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_table(columns: &[(&str, &str, i32)]) -> Table {
        let schema = SchemaReference::new(Some("shop"), Some("public"));
        let mut table = Table::new(Some(schema), "orders", TableType::Table);
        for (name, type_name, code) in columns {
            table.add_column(Column::new(*name, ColumnDataType::new(*type_name, *code)));
        }
        table
    }

    #[test]
    fn test_schema_reference_full_name() {
        assert_eq!(SchemaReference::new(Some("c"), Some("s")).full_name(), "c.s");
        assert_eq!(SchemaReference::new(None, Some("s")).full_name(), "s");
        assert_eq!(SchemaReference::new(Some("c"), None).full_name(), "c");
        assert_eq!(SchemaReference::new(None, None).full_name(), "");
    }

    #[test]
    fn test_table_and_column_full_names() {
        let table = make_test_table(&[("id", "INTEGER", 4)]);
        assert_eq!(table.full_name(), "shop.public.orders");
        assert_eq!(table.columns()[0].full_name(), "shop.public.orders.id");
        assert_eq!(table.columns()[0].ordinal_position(), 1);

        let loose = Table::new(None, "loose", TableType::View);
        assert_eq!(loose.full_name(), "loose");
    }

    #[test]
    fn test_order_by_columns_skip_binary() {
        let table = make_test_table(&[
            ("id", "INTEGER", 4),
            ("name", "VARCHAR", 12),
            ("photo", "BLOB", 2004),
        ]);
        assert_eq!(table.columns_list_as_string(), "id, name, photo");
        assert_eq!(table.order_by_columns_list_as_string(), "id, name");
    }

    #[test]
    fn test_leading_binary_column_has_no_stray_separator() {
        let table = make_test_table(&[("blob", "VARBINARY", -3), ("id", "INTEGER", 4)]);
        assert_eq!(table.order_by_columns_list_as_string(), "id");
    }

    #[test]
    fn test_table_type_labels() {
        assert_eq!(TableType::Table.to_string(), "TABLE");
        assert_eq!(TableType::from("view"), TableType::View);
        assert_eq!(TableType::from("BASE TABLE"), TableType::Table);
        assert_eq!(TableType::from("SYNONYM"), TableType::Unknown);
    }

    #[test]
    fn test_column_lookup_ignores_case() {
        let table = make_test_table(&[("Id", "INTEGER", 4)]);
        assert!(table.column("ID").is_some());
        assert!(table.column("missing").is_none());
    }

    #[test]
    fn test_table_round_trips_through_json() {
        let table = make_test_table(&[("id", "INTEGER", 4)]);
        let json = serde_json::to_string(&table).unwrap();
        let restored: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.full_name(), "shop.public.orders");
        assert_eq!(restored.columns()[0].full_name(), "shop.public.orders.id");
    }
}
