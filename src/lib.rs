//! # serde_objdump
//!
//! Dump values, functions included, as JavaScript object-literal source.
//!
//! ## What is it for?
//!
//! JSON cannot carry code. When a generated configuration module, fixture or
//! bundle needs callbacks next to its data, the value has to be written as
//! source text instead. `serde_objdump` writes any [`Value`] (or any
//! `T: Serialize`) as an object-literal expression, with function source
//! copied in verbatim so that evaluating the text gives the functions back.
//!
//! ## Key Features
//!
//! - **Functions preserved**: function source is never quoted, escaped or
//!   re-indented, however deeply it is nested
//! - **Serde Compatible**: any `#[derive(Serialize)]` type can be dumped, with
//!   [`Function`] fields for code
//! - **Configurable**: prefix, suffix and indentation width
//! - **Infallible core**: dumping a [`Value`] cannot fail
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_objdump::{dump, objdump, DumpOptions, Value};
//!
//! let config = objdump!({
//!     "name": "app",
//!     "ports": [80, 443],
//!     "onReady": (Value::function("function(){ return 'ready'; }"))
//! });
//!
//! let options = DumpOptions::new()
//!     .with_prefix("module.exports = ")
//!     .with_suffix(";\n");
//!
//! assert_eq!(
//!     dump(&config, &options),
//!     "module.exports = {\n  \"name\": \"app\",\n  \"ports\": [80,443],\n  \"onReady\": function(){ return 'ready'; }\n};\n"
//! );
//! ```
//!
//! ### From Rust Types
//!
//! ```rust
//! use serde::Serialize;
//! use serde_objdump::{to_string, Function};
//!
//! #[derive(Serialize)]
//! struct Column {
//!     title: String,
//!     width: u32,
//!     format: Function,
//! }
//!
//! let column = Column {
//!     title: "Total".to_string(),
//!     width: 80,
//!     format: Function::new("function (v) { return v.toFixed(2); }"),
//! };
//!
//! let out = to_string(&column).unwrap();
//! assert_eq!(
//!     out,
//!     "{\n  \"title\": \"Total\",\n  \"width\": 80,\n  \"format\": function (v) { return v.toFixed(2); }\n}"
//! );
//! ```
//!
//! ### Rendering Repeatedly
//!
//! ```rust
//! use serde_objdump::{objdump, ObjectDump};
//!
//! let dump = ObjectDump::new(objdump!({ "debug": false }));
//! let as_module = dump.render_with(&objdump!({ "prefix": "export default ", "suffix": ";" }));
//! assert_eq!(as_module, "export default {\n  \"debug\": false\n};");
//! ```
//!
//! ## How it Works
//!
//! The engine builds an intermediate document in which every function body is
//! only a placeholder [`Token`](cache::Token). Object indentation edits the
//! document's text and never sees a function body; one final pass splices the
//! bodies back in. See the [`cache`] and [`dump`](mod@dump) modules.
//!
//! ## Limitations
//!
//! Strings only have `"` escaped, dates are written as `new Date()` unless
//! exact dates are enabled, and strings that begin like a function expression
//! are written unquoted. See [`format`] for the full output description.

pub mod attach;
pub mod cache;
pub mod dump;
pub mod error;
pub mod fields;
pub mod format;
pub mod macros;
pub mod map;
pub mod object_dump;
pub mod options;
pub mod ser;
pub mod value;

pub use attach::ToObjectDump;
pub use dump::{dump, looks_like_function, quote, Dumper};
pub use error::{Error, Result};
pub use fields::{bigint, date};
pub use map::DumpMap;
pub use object_dump::ObjectDump;
pub use options::DumpOptions;
pub use ser::ValueSerializer;
pub use value::{Function, Number, Value};

use serde::Serialize;
use std::io;

/// Dumps `value` with `options`; the one-shot form of [`ObjectDump`].
///
/// # Examples
///
/// ```rust
/// use serde_objdump::{serialize, DumpOptions, Value};
///
/// assert_eq!(serialize(&Value::from(4), &DumpOptions::default()), "4");
/// ```
#[must_use]
pub fn serialize(value: &Value, options: &DumpOptions) -> String {
    dump(value, options)
}

/// Serialize any `T: Serialize` to object-literal text with default options.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`], e.g. a
/// map with composite keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, DumpOptions::default())
}

/// Serialize any `T: Serialize` to object-literal text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_objdump::{to_string_with_options, DumpOptions};
///
/// let out = to_string_with_options(&vec![1, 2, 3], DumpOptions::new().with_suffix(";")).unwrap();
/// assert_eq!(out, "[1,2,3];");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: DumpOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(dump(&value, &options))
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_objdump::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.as_object().and_then(|o| o.get("y")), Some(&Value::from(2)));
/// ```
///
/// # Errors
///
/// Returns an error if a map key is not a string, number or boolean, or if a
/// reserved marker type carries malformed content.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer as object-literal text.
///
/// # Examples
///
/// ```rust
/// use serde_objdump::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec!["a", "b"]).unwrap();
/// assert_eq!(buffer, b"[\"a\",\"b\"]");
/// ```
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, DumpOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: DumpOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Returns `value` with every function, at any depth, replaced by its source
/// as a plain string.
///
/// Only arrays and objects are walked; all other values are returned as they
/// are. This produces a value, not text.
///
/// # Examples
///
/// ```rust
/// use serde_objdump::{deep_stringify, objdump, Value};
///
/// let value = objdump!({ "a": [1, "2", { "3": 3 }, (Value::function("function(){ return 'test'; }"))] });
/// assert_eq!(
///     deep_stringify(value),
///     objdump!({ "a": [1, "2", { "3": 3 }, "function(){ return 'test'; }"] })
/// );
/// ```
#[must_use]
pub fn deep_stringify(value: Value) -> Value {
    value.deep_stringify()
}
