// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Statement planning for queries
//!
//! A query that references `${table}` runs once for each table; any other
//! query runs once. [`QueryPlan`] makes that decision before expansion and
//! produces the SQL statements to hand to an executor.

use super::query::Query;
use super::variables::{with_default_variables, TemplateVariables};
use crate::catalog::traits::NamedObject;
use crate::schema::model::Schema;
use crate::schema::types::Table;
use serde::{Deserialize, Serialize};

/// One SQL statement ready for execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedStatement {
    /// Full name of the table the statement was expanded for, if any
    pub table: Option<String>,
    pub sql: String,
}

/// SQL statements planned for one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPlan {
    query_name: String,
    query_over: bool,
    statements: Vec<PlannedStatement>,
}

impl QueryPlan {
    /// Plan a query over the given tables, using the default variables
    pub fn build<'a>(query: &Query, tables: impl IntoIterator<Item = &'a Table>) -> Self {
        with_default_variables(|defaults| Self::build_with(query, tables, defaults))
    }

    /// Plan a query over the given tables, with explicit default variables
    pub fn build_with<'a>(
        query: &Query,
        tables: impl IntoIterator<Item = &'a Table>,
        variables: &TemplateVariables,
    ) -> Self {
        let query_over = query.is_query_over();
        let statements: Vec<PlannedStatement> = if query_over {
            tables
                .into_iter()
                .map(|table| PlannedStatement {
                    table: Some(table.full_name().to_string()),
                    sql: query.expand_for_table_with(Some(table), variables),
                })
                .collect()
        } else {
            vec![PlannedStatement {
                table: None,
                sql: query.expand_with(variables),
            }]
        };

        log::debug!(
            "Planned {} statement(s) for query '{}'",
            statements.len(),
            query.name()
        );

        Self {
            query_name: query.name().to_string(),
            query_over,
            statements,
        }
    }

    /// Plan a query over every table of a schema, in the schema's table order
    pub fn for_schema(query: &Query, schema: &Schema) -> Self {
        Self::build(query, schema.get_tables())
    }

    pub fn query_name(&self) -> &str {
        &self.query_name
    }

    pub fn is_query_over(&self) -> bool {
        self.query_over
    }

    pub fn statements(&self) -> &[PlannedStatement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl IntoIterator for QueryPlan {
    type Item = PlannedStatement;
    type IntoIter = std::vec::IntoIter<PlannedStatement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{SchemaReference, TableType};

    fn make_tables() -> Vec<Table> {
        let schema = SchemaReference::new(None, Some("s"));
        vec![
            Table::new(Some(schema.clone()), "a", TableType::Table),
            Table::new(Some(schema), "v", TableType::View),
        ]
    }

    #[test]
    fn test_query_over_runs_per_table() {
        let tables = make_tables();
        let query = Query::new("drop", "DROP ${tabletype} ${table}").unwrap();
        let plan = QueryPlan::build_with(&query, &tables, &TemplateVariables::new());

        assert!(plan.is_query_over());
        let sql: Vec<&str> = plan.statements().iter().map(|s| s.sql.as_str()).collect();
        assert_eq!(sql, vec!["DROP TABLE s.a", "DROP VIEW s.v"]);
        assert_eq!(plan.statements()[1].table.as_deref(), Some("s.v"));
    }

    #[test]
    fn test_global_query_runs_once() {
        let tables = make_tables();
        let query = Query::new("version", "SELECT ${fn}()").unwrap();
        let mut variables = TemplateVariables::new();
        variables.set("fn", "version");

        let plan = QueryPlan::build_with(&query, &tables, &variables);
        assert!(!plan.is_query_over());
        assert_eq!(
            plan.into_iter().collect::<Vec<_>>(),
            vec![PlannedStatement {
                table: None,
                sql: "SELECT version()".to_string()
            }]
        );
    }

    #[test]
    fn test_query_over_with_no_tables_is_empty() {
        let query = Query::new("count", "SELECT COUNT(*) FROM ${table}").unwrap();
        let plan = QueryPlan::build_with(&query, Vec::<&Table>::new(), &TemplateVariables::new());
        assert!(plan.is_empty());
        assert_eq!(plan.query_name(), "count");
    }
}
