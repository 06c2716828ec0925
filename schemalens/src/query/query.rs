// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Named SQL query, parameterized with `${name}` placeholders

use super::template::{expand_template, expand_template_layers, extract_template_variables};
use super::variables::{with_default_variables, TemplateVariables};
use crate::catalog::error::{ModelError, ModelResult};
use crate::catalog::traits::NamedObject;
use crate::schema::types::Table;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder that makes a query run once per table
pub const TABLE_VARIABLE: &str = "table";

/// Table properties available to query templates
pub fn table_variables(table: Option<&Table>) -> TemplateVariables {
    let mut variables = TemplateVariables::new();
    if let Some(table) = table {
        if let Some(schema) = table.schema() {
            variables.set("schema", schema.full_name());
        }
        variables.set(TABLE_VARIABLE, table.full_name());
        variables.set("columns", table.columns_list_as_string());
        variables.set("orderbycolumns", table.order_by_columns_list_as_string());
        variables.set("tabletype", table.table_type().to_string());
    }
    variables
}

#[derive(Deserialize)]
struct QueryDefinition {
    name: String,
    query: String,
}

impl TryFrom<QueryDefinition> for Query {
    type Error = ModelError;

    fn try_from(definition: QueryDefinition) -> ModelResult<Self> {
        Query::new(definition.name, definition.query)
    }
}

/// A named SQL query template
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "QueryDefinition")]
pub struct Query {
    name: String,
    query: String,
}

impl Query {
    /// Define a query from a name and SQL text
    ///
    /// # Returns
    /// * `Err(ModelError::InvalidArgument)` if the name or the SQL is blank
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> ModelResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::invalid_argument("No name provided for the query"));
        }

        let query = query.into();
        if query.trim().is_empty() {
            return Err(ModelError::invalid_argument(format!(
                "No SQL provided for query '{}'",
                name
            )));
        }

        Ok(Self { name, query })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The SQL template as defined, without any expansion
    pub fn template(&self) -> &str {
        &self.query
    }

    /// SQL with the default variables substituted
    pub fn get_query(&self) -> String {
        with_default_variables(|defaults| self.expand_with(defaults))
    }

    /// SQL with the given variables substituted
    pub fn expand_with(&self, variables: &TemplateVariables) -> String {
        expand_template(&self.query, variables)
    }

    /// Ready-to-execute SQL for a table
    ///
    /// Table properties are substituted first, then the default variables.
    pub fn get_query_for_table(&self, table: Option<&Table>) -> String {
        with_default_variables(|defaults| self.expand_for_table_with(table, defaults))
    }

    /// Like [`Query::get_query_for_table`], with explicit default variables
    pub fn expand_for_table_with(
        &self,
        table: Option<&Table>,
        variables: &TemplateVariables,
    ) -> String {
        let table_variables = table_variables(table);
        let sql = expand_template_layers(&self.query, &[&table_variables, variables]);

        let unresolved = extract_template_variables(&sql);
        if !unresolved.is_empty() {
            log::debug!(
                "Query '{}' has unresolved variables: {:?}",
                self.name,
                unresolved
            );
        }
        sql
    }

    /// Whether the query runs once for each table
    ///
    /// True when the template references `${table}`, whether or not a table
    /// is ever supplied.
    pub fn is_query_over(&self) -> bool {
        extract_template_variables(&self.query).contains(TABLE_VARIABLE)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{Column, ColumnDataType, SchemaReference, TableType};

    fn make_test_table() -> Table {
        let mut table = Table::new(
            Some(SchemaReference::new(Some("shop"), Some("public"))),
            "customers",
            TableType::Table,
        );
        table.add_column(Column::new("id", ColumnDataType::new("INTEGER", 4)));
        table.add_column(Column::new("name", ColumnDataType::new("VARCHAR", 12)));
        table.add_column(Column::new("photo", ColumnDataType::new("BLOB", 2004)));
        table
    }

    #[test]
    fn test_blank_name_or_sql_rejected() {
        assert!(matches!(Query::new("", "SELECT 1"), Err(ModelError::InvalidArgument(_))));
        assert!(matches!(Query::new("  ", "SELECT 1"), Err(ModelError::InvalidArgument(_))));
        assert!(matches!(Query::new("q", ""), Err(ModelError::InvalidArgument(_))));
        assert!(matches!(Query::new("q", "\t\n"), Err(ModelError::InvalidArgument(_))));
    }

    #[test]
    fn test_display() {
        let query = Query::new("count", "SELECT COUNT(*) FROM ${table}").unwrap();
        assert_eq!(query.to_string(), "count:SELECT COUNT(*) FROM ${table}");
    }

    #[test]
    fn test_is_query_over() {
        assert!(Query::new("q", "SELECT * FROM ${table}").unwrap().is_query_over());
        assert!(!Query::new("q", "SELECT 1").unwrap().is_query_over());
        assert!(!Query::new("q", "SELECT ${columns} FROM t").unwrap().is_query_over());
        assert!(!Query::new("q", "SELECT * FROM ${tables}").unwrap().is_query_over());
    }

    #[test]
    fn test_table_properties() {
        let table = make_test_table();
        let variables = table_variables(Some(&table));
        assert_eq!(variables.get("schema"), Some("shop.public"));
        assert_eq!(variables.get("table"), Some("shop.public.customers"));
        assert_eq!(variables.get("columns"), Some("id, name, photo"));
        assert_eq!(variables.get("orderbycolumns"), Some("id, name"));
        assert_eq!(variables.get("tabletype"), Some("TABLE"));

        let loose = Table::new(None, "loose", TableType::View);
        assert!(!table_variables(Some(&loose)).contains("schema"));
        assert!(table_variables(None).is_empty());
    }

    #[test]
    fn test_expand_for_table_mixes_table_and_default_variables() {
        let table = make_test_table();
        let query = Query::new(
            "dump",
            "SELECT ${columns} FROM ${table} ORDER BY ${orderbycolumns} LIMIT ${limit} ${unknown}",
        )
        .unwrap();

        let mut defaults = TemplateVariables::new();
        defaults.set("limit", "10");
        defaults.set("table", "overridden");

        assert_eq!(
            query.expand_for_table_with(Some(&table), &defaults),
            "SELECT id, name, photo FROM shop.public.customers ORDER BY id, name LIMIT 10 ${unknown}"
        );
        assert_eq!(
            query.expand_for_table_with(None, &defaults),
            "SELECT ${columns} FROM overridden ORDER BY ${orderbycolumns} LIMIT 10 ${unknown}"
        );
    }

    #[test]
    fn test_query_deserialization_validates() {
        let query: Query = serde_json::from_str(r#"{"name":"q","query":"SELECT 1"}"#).unwrap();
        assert_eq!(query.name(), "q");
        assert!(serde_json::from_str::<Query>(r#"{"name":"q","query":" "}"#).is_err());
    }
}
