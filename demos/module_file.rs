//! Generate a CommonJS module whose exported value carries callbacks.
//!
//! Run with: cargo run --example module_file

use serde::Serialize;
use serde_objdump::{attach_object_dump, DumpOptions, Function, ToObjectDump};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Column {
    key: String,
    title: String,
    format: Option<Function>,
}

#[derive(Debug, Serialize)]
struct Table {
    id: String,
    page_size: u32,
    columns: Vec<Column>,
    on_select: Function,
}

attach_object_dump!(Table);

fn main() -> Result<(), Box<dyn Error>> {
    let table = Table {
        id: "orders".to_string(),
        page_size: 25,
        columns: vec![
            Column {
                key: "id".to_string(),
                title: "Order".to_string(),
                format: None,
            },
            Column {
                key: "total".to_string(),
                title: "Total".to_string(),
                format: Some(Function::new(
                    "function (value) {\n  return '$' + value.toFixed(2);\n}",
                )),
            },
        ],
        on_select: Function::new("function (row) {\n  window.location = '/orders/' + row.id;\n}"),
    };

    let options = DumpOptions::new()
        .with_prefix("module.exports = ")
        .with_suffix(";\n");
    print!("{}", table.to_object_dump_with(&options)?);

    Ok(())
}
