//! Crawled schema fixture for SchemaLens integration tests

#![allow(dead_code)]

use schemalens::{
    Column, ColumnDataType, Database, Procedure, ProcedureType, Schema, SchemaReference, Table,
    TableType,
};

pub const CATALOG: &str = "shop";
pub const SCHEMA: &str = "public";

/// A schema populated the way a crawler would populate it
pub struct SchemaFixture {
    pub schema: Schema,
}

impl SchemaFixture {
    pub fn schema_ref() -> SchemaReference {
        SchemaReference::new(Some(CATALOG), Some(SCHEMA))
    }

    pub fn data_types() -> Vec<ColumnDataType> {
        vec![
            ColumnDataType::new("INTEGER", 4),
            ColumnDataType::new("VARCHAR", 12),
            ColumnDataType::new("BLOB", 2004),
            ColumnDataType::new("TIMESTAMP", 93),
        ]
    }

    pub fn data_type(name: &str) -> ColumnDataType {
        Self::data_types()
            .into_iter()
            .find(|t| t.database_specific_type_name() == name)
            .unwrap_or_else(|| panic!("No fixture data type {}", name))
    }

    pub fn table(name: &str, table_type: TableType, columns: &[(&str, &str)]) -> Table {
        let mut table = Table::new(Some(Self::schema_ref()), name, table_type);
        for (column, type_name) in columns {
            table.add_column(Column::new(*column, Self::data_type(type_name)));
        }
        table
    }

    /// customers, orders2, orders10 and the customer_summary view
    pub fn new() -> Self {
        let mut schema = Schema::new(Self::schema_ref());

        for data_type in Self::data_types() {
            schema
                .add_column_data_type(Some(data_type))
                .expect("Failed to add data type");
        }

        let tables = [
            Self::table(
                "orders10",
                TableType::Table,
                &[("id", "INTEGER"), ("placed_at", "TIMESTAMP")],
            ),
            Self::table(
                "customers",
                TableType::Table,
                &[("id", "INTEGER"), ("name", "VARCHAR"), ("photo", "BLOB")],
            ),
            Self::table("orders2", TableType::Table, &[("id", "INTEGER")]),
            Self::table(
                "customer_summary",
                TableType::View,
                &[("name", "VARCHAR"), ("orders", "INTEGER")],
            ),
        ];
        for table in tables {
            schema.add_table(table).expect("Failed to add table");
        }

        schema
            .add_procedure(Procedure::new(
                Some(Self::schema_ref()),
                "refresh_summary",
                ProcedureType::NoResult,
            ))
            .expect("Failed to add procedure");

        Self { schema }
    }

    /// A database holding the fixture schema and an empty audit schema
    pub fn database() -> Database {
        let mut database = Database::new();
        database
            .add_schema(Self::new().schema)
            .expect("Failed to add schema");
        database
            .add_schema(Schema::new(SchemaReference::new(Some(CATALOG), Some("audit"))))
            .expect("Failed to add schema");
        database
    }

    pub fn table_names(&self) -> Vec<String> {
        use schemalens::NamedObject;
        self.schema
            .get_tables()
            .into_iter()
            .map(|t| t.name().to_string())
            .collect()
    }
}
