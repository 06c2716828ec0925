// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Standard JDBC data types and their groups

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad classification of a JDBC data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JavaSqlTypeGroup {
    Binary,
    Bit,
    Character,
    Id,
    Integer,
    LargeObject,
    Object,
    Real,
    Reference,
    Temporal,
    Unknown,
    Url,
    Xml,
}

impl JavaSqlTypeGroup {
    /// Binary values cannot be used in an ORDER BY clause on many engines
    pub fn is_orderable(&self) -> bool {
        !matches!(self, JavaSqlTypeGroup::Binary)
    }
}

impl fmt::Display for JavaSqlTypeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JavaSqlTypeGroup::Binary => "binary",
            JavaSqlTypeGroup::Bit => "bit",
            JavaSqlTypeGroup::Character => "character",
            JavaSqlTypeGroup::Id => "id",
            JavaSqlTypeGroup::Integer => "integer",
            JavaSqlTypeGroup::LargeObject => "large_object",
            JavaSqlTypeGroup::Object => "object",
            JavaSqlTypeGroup::Real => "real",
            JavaSqlTypeGroup::Reference => "reference",
            JavaSqlTypeGroup::Temporal => "temporal",
            JavaSqlTypeGroup::Unknown => "unknown",
            JavaSqlTypeGroup::Url => "url",
            JavaSqlTypeGroup::Xml => "xml",
        };
        f.write_str(label)
    }
}

/// A standard JDBC data type (`java.sql.Types`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JavaSqlType {
    pub name: &'static str,
    pub type_code: i32,
    pub group: JavaSqlTypeGroup,
}

const fn sql_type(name: &'static str, type_code: i32, group: JavaSqlTypeGroup) -> JavaSqlType {
    JavaSqlType {
        name,
        type_code,
        group,
    }
}

/// Returned for codes that are not standard JDBC types
pub static UNKNOWN: JavaSqlType = sql_type("<UNKNOWN>", i32::MAX, JavaSqlTypeGroup::Unknown);

use JavaSqlTypeGroup as G;

static JAVA_SQL_TYPES: &[JavaSqlType] = &[
    sql_type("ARRAY", 2003, G::Object),
    sql_type("BIGINT", -5, G::Integer),
    sql_type("BINARY", -2, G::Binary),
    sql_type("BIT", -7, G::Bit),
    sql_type("BLOB", 2004, G::Binary),
    sql_type("BOOLEAN", 16, G::Bit),
    sql_type("CHAR", 1, G::Character),
    sql_type("CLOB", 2005, G::LargeObject),
    sql_type("DATALINK", 70, G::Url),
    sql_type("DATE", 91, G::Temporal),
    sql_type("DECIMAL", 3, G::Real),
    sql_type("DISTINCT", 2001, G::Reference),
    sql_type("DOUBLE", 8, G::Real),
    sql_type("FLOAT", 6, G::Real),
    sql_type("INTEGER", 4, G::Integer),
    sql_type("JAVA_OBJECT", 2000, G::Object),
    sql_type("LONGNVARCHAR", -16, G::Character),
    sql_type("LONGVARBINARY", -4, G::Binary),
    sql_type("LONGVARCHAR", -1, G::Character),
    sql_type("NCHAR", -15, G::Character),
    sql_type("NCLOB", 2011, G::LargeObject),
    sql_type("NULL", 0, G::Unknown),
    sql_type("NUMERIC", 2, G::Real),
    sql_type("NVARCHAR", -9, G::Character),
    sql_type("OTHER", 1111, G::Object),
    sql_type("REAL", 7, G::Real),
    sql_type("REF", 2006, G::Reference),
    sql_type("REF_CURSOR", 2012, G::Reference),
    sql_type("ROWID", -8, G::Id),
    sql_type("SMALLINT", 5, G::Integer),
    sql_type("SQLXML", 2009, G::Xml),
    sql_type("STRUCT", 2002, G::Object),
    sql_type("TIME", 92, G::Temporal),
    sql_type("TIME_WITH_TIMEZONE", 2013, G::Temporal),
    sql_type("TIMESTAMP", 93, G::Temporal),
    sql_type("TIMESTAMP_WITH_TIMEZONE", 2014, G::Temporal),
    sql_type("TINYINT", -6, G::Integer),
    sql_type("VARBINARY", -3, G::Binary),
    sql_type("VARCHAR", 12, G::Character),
];

/// Look up the standard JDBC type for a type code
///
/// Codes that are not part of `java.sql.Types` map to [`UNKNOWN`].
pub fn lookup_sql_data_type(type_code: i32) -> &'static JavaSqlType {
    JAVA_SQL_TYPES
        .iter()
        .find(|t| t.type_code == type_code)
        .unwrap_or(&UNKNOWN)
}

/// Look up a standard JDBC type by its name, ignoring case
pub fn lookup_sql_data_type_by_name(name: &str) -> Option<&'static JavaSqlType> {
    JAVA_SQL_TYPES
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
}
