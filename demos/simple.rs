//! Dump a value holding data and functions as object-literal source.
//!
//! Run with: cargo run --example simple

use serde_objdump::{objdump, ObjectDump, Value};

fn main() {
    let value = objdump!({
        "a": (Value::function("function(){\n    return 'a';\n  }")),
        "b": { "b1": 1, "b2": 2 },
        "c": [],
        "d": ["a", "b", "c"],
        "e": undefined
    });

    let dump = ObjectDump::new(value);
    println!("{}", dump);

    let assigned = dump.render_with(&objdump!({ "prefix": "var test = ", "suffix": ";" }));
    println!("\n{}", assigned);
}
