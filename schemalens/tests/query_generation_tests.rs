//! Query template integration tests: table expansion, default variables and planning

#[path = "testutils/mod.rs"]
mod testutils;

use schemalens::{
    default_variables, install_default_variables, set_default_variable, Operation, Query,
    QueryPlan, TemplateVariables, TemplateVariablesConfig,
};
use serial_test::serial;
use testutils::test_fixture::SchemaFixture;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Run with a fresh default variable set, restoring the previous one afterwards
fn with_defaults<R>(variables: TemplateVariables, f: impl FnOnce() -> R) -> R {
    let previous = install_default_variables(variables);
    let result = f();
    install_default_variables(previous);
    result
}

#[test]
#[serial]
fn test_dump_excludes_binary_columns_from_order_by() {
    init_logging();
    let fixture = SchemaFixture::new();
    let dump = Operation::Dump.to_query().unwrap();

    let sql = with_defaults(TemplateVariables::new(), || {
        dump.get_query_for_table(fixture.schema.get_table("customers"))
    });
    assert_eq!(
        sql,
        "SELECT id, name, photo FROM shop.public.customers ORDER BY id, name"
    );
}

#[test]
#[serial]
fn test_generic_expansion_leaves_table_placeholders() {
    let query = Query::new(
        "recent",
        "SELECT * FROM ${table} WHERE created > '${since}'",
    )
    .unwrap();

    let mut variables = TemplateVariables::new();
    variables.set("since", "2024-01-01");
    let sql = with_defaults(variables, || query.get_query());

    assert_eq!(sql, "SELECT * FROM ${table} WHERE created > '2024-01-01'");
    assert!(query.is_query_over());
}

#[test]
#[serial]
fn test_table_properties_take_precedence_over_defaults() {
    let fixture = SchemaFixture::new();
    let query = Query::new(
        "scoped",
        "SELECT '${schema}', '${tabletype}' FROM ${table} FETCH FIRST ${rows} ROWS ONLY",
    )
    .unwrap();

    let sql = with_defaults(TemplateVariables::new(), || {
        set_default_variable("rows", "5");
        set_default_variable("table", "not_used");
        query.get_query_for_table(fixture.schema.get_table("customer_summary"))
    });
    assert_eq!(
        sql,
        "SELECT 'shop.public', 'VIEW' FROM shop.public.customer_summary FETCH FIRST 5 ROWS ONLY"
    );
}

#[test]
#[serial]
fn test_defaults_loaded_from_configuration() {
    let config = TemplateVariablesConfig::from_json_str(
        r#"{ "variables": { "owner": "reporting" } }"#,
    )
    .unwrap();
    let query = Query::new("grant", "GRANT SELECT ON ${table} TO ${owner}").unwrap();
    let fixture = SchemaFixture::new();

    let (sql, snapshot) = with_defaults(TemplateVariables::from_config(&config), || {
        (
            query.get_query_for_table(fixture.schema.get_table("orders2")),
            default_variables(),
        )
    });
    assert_eq!(sql, "GRANT SELECT ON shop.public.orders2 TO reporting");
    assert_eq!(snapshot.get("owner"), Some("reporting"));
}

#[test]
#[serial]
fn test_operations_plan_one_statement_per_table() {
    let fixture = SchemaFixture::new();
    let drop = Operation::Drop.to_query().unwrap();

    let plan = with_defaults(TemplateVariables::new(), || {
        QueryPlan::for_schema(&drop, &fixture.schema)
    });
    let sql: Vec<&str> = plan.statements().iter().map(|s| s.sql.as_str()).collect();
    assert_eq!(
        sql,
        vec![
            "DROP VIEW shop.public.customer_summary",
            "DROP TABLE shop.public.customers",
            "DROP TABLE shop.public.orders2",
            "DROP TABLE shop.public.orders10",
        ]
    );
}

#[test]
#[serial]
fn test_global_query_plans_a_single_statement() {
    let fixture = SchemaFixture::new();
    let query = Query::new("tables", "SELECT COUNT(*) FROM information_schema.tables").unwrap();

    let plan = with_defaults(TemplateVariables::new(), || {
        QueryPlan::for_schema(&query, &fixture.schema)
    });
    assert!(!plan.is_query_over());
    assert_eq!(plan.len(), 1);
    assert_eq!(plan.statements()[0].table, None);
}

#[test]
fn test_count_and_truncate_templates() {
    let fixture = SchemaFixture::new();
    let table = fixture.schema.get_table("orders10");
    let variables = TemplateVariables::new();

    let count = Operation::Count.to_query().unwrap();
    let truncate = Operation::Truncate.to_query().unwrap();
    assert_eq!(
        count.expand_for_table_with(table, &variables),
        "SELECT COUNT(*) FROM shop.public.orders10"
    );
    assert_eq!(
        truncate.expand_for_table_with(table, &variables),
        "DELETE FROM shop.public.orders10"
    );
}
