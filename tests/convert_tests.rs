// ABOUTME: Integration tests for parameter table conversion
// ABOUTME: Tests the serde parameter file path and table-driven template rendering

use serde_json::json;

use weft::table::{self, Table};

mod common;
use common::TemplateFixture;

const PARAMS_JSON: &str = r#"{
    "columns": [{"name": "key"}, {"name": "value"}],
    "rows": [
        ["title", "Inventory"],
        ["items", {
            "columns": [
                {"name": "sku"},
                {"name": "qty", "kind": "number"},
                {"name": "in_stock", "kind": "bool"}
            ],
            "rows": [
                ["a-1", 3, true],
                ["b-2", 1, false],
                ["c-3", 9, true]
            ]
        }]
    ]
}"#;

#[test]
fn test_params_file_converts_to_context() {
    let table: Table = serde_json::from_str(PARAMS_JSON).unwrap();
    let context = table::convert(&table).unwrap();

    assert_eq!(context["title"], json!("Inventory"));

    let items = context["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["sku"], json!("a-1"));
    assert_eq!(items[0]["qty"], json!(3));
    assert_eq!(items[2]["in_stock"], json!(true));
}

#[test]
fn test_table_driven_render_with_includes() {
    let fixture = TemplateFixture::new()
        .add(
            "report.tpl",
            "{{title}}\n{{#each items}}{{include \"line.tpl\"}}{{/each}}",
        )
        .add("line.tpl", "total: {{title}}\n");

    let table: Table = serde_json::from_str(PARAMS_JSON).unwrap();
    let context = table::convert(&table).unwrap();

    let result = fixture.renderer().render_file("report.tpl", &context).unwrap();

    assert!(result.starts_with("Inventory\n"));
    // One included line per item row, all sharing the root context.
    assert_eq!(result.matches("total: Inventory").count(), 3);
}

#[test]
fn test_yaml_params_round_trip() {
    let yaml = r#"
columns:
  - name: key
  - name: value
rows:
  - [name, Ann]
  - [retries, 3]
"#;

    let table: Table = serde_yaml::from_str(yaml).unwrap();
    let context = table::convert(&table).unwrap();

    assert_eq!(context["name"], json!("Ann"));
    assert_eq!(context["retries"], json!(3));
}
