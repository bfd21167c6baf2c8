//! The dump engine.
//!
//! [`Dumper`] walks a [`Value`] and builds a [`Document`], parking function
//! source in its [`PlaceholderCache`] as it goes. Objects indent their values
//! one level deeper than themselves; arrays are written flat. Once the whole
//! document is assembled the fragments are spliced back in one pass, and the
//! configured prefix and suffix are added around the result.
//!
//! ## Output Shapes
//!
//! | Value | Output |
//! |-------|--------|
//! | `Undefined` | `undefined` |
//! | `Null` | `null` |
//! | `Date` | `new Date()` |
//! | `Function` | the source, verbatim |
//! | `Array` | `[1,"a",[]]` |
//! | `String` | `"say \"hi\""`, or verbatim when it looks like a function |
//! | `Object` | `{\n  "a": 1,\n  "b": 2\n}` |
//!
//! ```rust
//! use serde_objdump::{dump, objdump, DumpOptions, Value};
//!
//! let value = objdump!({
//!     "a": (Value::function("function(){\n    return 'a';\n  }")),
//!     "b": { "b1": 1 }
//! });
//!
//! assert_eq!(
//!     dump(&value, &DumpOptions::default()),
//!     "{\n  \"a\": function(){\n    return 'a';\n  },\n  \"b\": {\n    \"b1\": 1\n  }\n}"
//! );
//! ```

use crate::cache::{Document, PlaceholderCache};
use crate::{DumpMap, DumpOptions, Value};
use chrono::SecondsFormat;

/// Literal written for every date when exact dates are off.
pub const LOSSY_DATE: &str = "new Date()";

/// Dumps `value` and wraps it in the configured prefix and suffix.
///
/// Never fails: every [`Value`] has a textual form.
///
/// # Examples
///
/// ```rust
/// use serde_objdump::{dump, objdump, DumpOptions};
///
/// let options = DumpOptions::new().with_prefix("exports.test = ").with_suffix(";");
/// assert_eq!(dump(&objdump!([1, 2]), &options), "exports.test = [1,2];");
/// ```
#[must_use]
pub fn dump(value: &Value, options: &DumpOptions) -> String {
    let body = Dumper::new(options).dump(value);
    let mut output =
        String::with_capacity(options.prefix.len() + body.len() + options.suffix.len());
    output.push_str(&options.prefix);
    output.push_str(&body);
    output.push_str(&options.suffix);
    output
}

/// Returns `true` when `text` reads like a function expression: the keyword
/// `function`, optional whitespace, then `(`.
///
/// Such strings are written without quotes, which lets callers pass
/// pre-stringified functions through. It is a heuristic: a sentence starting
/// with `function (` is treated as code too.
///
/// # Examples
///
/// ```rust
/// use serde_objdump::looks_like_function;
///
/// assert!(looks_like_function("function(){ return 1; }"));
/// assert!(looks_like_function("function  (a, b) { return a + b; }"));
/// assert!(!looks_like_function("function"));
/// assert!(!looks_like_function("a function() call"));
/// ```
#[must_use]
pub fn looks_like_function(text: &str) -> bool {
    text.strip_prefix("function")
        .map(|rest| rest.trim_start().starts_with('('))
        .unwrap_or(false)
}

/// Wraps `text` in double quotes, escaping embedded `"` only.
///
/// Newlines, backslashes and control characters pass through unchanged.
///
/// # Examples
///
/// ```rust
/// use serde_objdump::quote;
///
/// assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
/// assert_eq!(quote("a\\b"), "\"a\\b\"");
/// ```
#[must_use]
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        if ch == '"' {
            quoted.push_str("\\\"");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('"');
    quoted
}

/// Converts one value into object-literal text.
///
/// A `Dumper` owns the fragment table for a single dump and is consumed by
/// [`Dumper::dump`], so fragments can never leak between dumps.
pub struct Dumper<'a> {
    options: &'a DumpOptions,
    // Built on the first object; scalars and arrays never need it.
    indent: Option<String>,
    cache: PlaceholderCache,
}

impl<'a> Dumper<'a> {
    pub fn new(options: &'a DumpOptions) -> Self {
        Dumper {
            options,
            indent: None,
            cache: PlaceholderCache::new(),
        }
    }

    /// Dumps `value` without prefix or suffix.
    pub fn dump(mut self, value: &Value) -> String {
        let doc = self.document(value);
        tracing::debug!(
            fragments = self.cache.len(),
            spacing = self.options.spacing,
            "assembled dump document"
        );
        doc.render(&mut self.cache)
    }

    fn document(&mut self, value: &Value) -> Document {
        match value {
            Value::Undefined => Document::text("undefined"),
            Value::Date(instant) => {
                if self.options.exact_dates {
                    let iso = instant.to_rfc3339_opts(SecondsFormat::Millis, true);
                    Document::text(format!("new Date({})", quote(&iso)))
                } else {
                    Document::text(LOSSY_DATE)
                }
            }
            Value::Function(source) => self.opaque(source),
            Value::Array(items) => self.array(items),
            Value::String(text) => self.string(text),
            Value::Object(map) => self.object(map),
            Value::Null => self.opaque("null"),
            Value::Bool(b) => Document::text(if *b { "true" } else { "false" }),
            Value::Number(n) => Document::text(n.to_string()),
            Value::BigInt(bi) => Document::text(format!("{}n", bi)),
        }
    }

    fn opaque(&mut self, fragment: &str) -> Document {
        Document::fragment(self.cache.register(fragment))
    }

    fn string(&mut self, text: &str) -> Document {
        if looks_like_function(text) {
            self.opaque(text)
        } else {
            Document::text(quote(text))
        }
    }

    fn array(&mut self, items: &[Value]) -> Document {
        let mut doc = Document::text("[");
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                doc.push_str(",");
            }
            let element = self.document(item);
            doc.append(element);
        }
        doc.push_str("]");
        doc
    }

    fn indent(&mut self) -> String {
        self.indent
            .get_or_insert_with(|| self.options.indent())
            .clone()
    }

    fn object(&mut self, map: &DumpMap) -> Document {
        let indent = self.indent();
        let mut doc = Document::text("{\n");
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                doc.push_str(",\n");
            }
            doc.push_str(&indent);
            let key = self.string(key);
            doc.append(key);
            doc.push_str(": ");

            let mut nested = self.document(value);
            nested.indent(&indent);
            doc.append(nested);
        }
        doc.push_str("\n}");
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{objdump, Number};
    use chrono::{TimeZone, Utc};

    fn dump_default(value: &Value) -> String {
        dump(value, &DumpOptions::default())
    }

    #[test]
    fn test_scalars() {
        assert_eq!(dump_default(&Value::Undefined), "undefined");
        assert_eq!(dump_default(&Value::Null), "null");
        assert_eq!(dump_default(&Value::Bool(true)), "true");
        assert_eq!(dump_default(&Value::from(4)), "4");
        assert_eq!(dump_default(&Value::from(-2.5)), "-2.5");
        assert_eq!(dump_default(&Value::Number(Number::NaN)), "NaN");
        assert_eq!(dump_default(&Value::Number(Number::Infinity)), "Infinity");
        assert_eq!(dump_default(&Value::bigint(-9)), "-9n");
        assert_eq!(dump_default(&Value::from("five")), "\"five\"");
    }

    #[test]
    fn test_strings_escape_quotes_only() {
        assert_eq!(
            dump_default(&Value::from("a \"b\"\nc\\d")),
            "\"a \\\"b\\\"\nc\\d\""
        );
    }

    #[test]
    fn test_function_like_string_is_verbatim() {
        let value = objdump!({ "f": "function(){ return 1; }", "g": "function" });
        assert_eq!(
            dump_default(&value),
            "{\n  \"f\": function(){ return 1; },\n  \"g\": \"function\"\n}"
        );
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(dump_default(&objdump!([])), "[]");
        assert_eq!(dump_default(&objdump!({})), "{\n\n}");
    }

    #[test]
    fn test_arrays_are_flat() {
        let value = objdump!([1, "two", [3, []], { "four": 4 }]);
        assert_eq!(dump_default(&value), "[1,\"two\",[3,[]],{\n  \"four\": 4\n}]");
    }

    #[test]
    fn test_nested_spacing() {
        let value = objdump!({ "a": { "b": 1 } });
        assert_eq!(
            dump(&value, &DumpOptions::new().with_spacing(2)),
            "{\n  \"a\": {\n    \"b\": 1\n  }\n}"
        );
        assert_eq!(
            dump(&value, &DumpOptions::new().with_spacing(4)),
            "{\n    \"a\": {\n        \"b\": 1\n    }\n}"
        );
        assert_eq!(
            dump(&value, &DumpOptions::new().with_spacing(0)),
            "{\n\"a\": {\n\"b\": 1\n}\n}"
        );
    }

    #[test]
    fn test_function_body_keeps_its_lines() {
        let source = "function(){\n    return function(){\n      return 'x';\n    };\n  }";
        let value = objdump!({ "outer": { "inner": (Value::function(source)) } });
        let out = dump_default(&value);
        assert!(out.contains(source));
        assert!(out.starts_with("{\n  \"outer\": {\n    \"inner\": function(){\n    return"));
    }

    #[test]
    fn test_multiline_plain_string_is_indented() {
        let value = objdump!({ "a": { "text": "x\ny" } });
        assert_eq!(
            dump_default(&value),
            "{\n  \"a\": {\n    \"text\": \"x\n    y\"\n  }\n}"
        );
    }

    #[test]
    fn test_dates() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let value = Value::date(instant);
        assert_eq!(dump_default(&value), "new Date()");
        assert_eq!(
            dump(&value, &DumpOptions::new().with_exact_dates(true)),
            "new Date(\"2024-01-15T10:30:00.000Z\")"
        );
    }

    #[test]
    fn test_function_like_keys_go_through_the_same_path() {
        let value = objdump!({ "plain": 1, "function(x)": 2 });
        assert_eq!(
            dump_default(&value),
            "{\n  \"plain\": 1,\n  function(x): 2\n}"
        );
    }

    #[test]
    fn test_prefix_and_suffix() {
        let options = DumpOptions::new().with_prefix("var x = ").with_suffix(";\n");
        assert_eq!(dump(&Value::Null, &options), "var x = null;\n");
    }

    #[test]
    fn test_indent_only_built_for_objects() {
        let options = DumpOptions {
            spacing: usize::MAX,
            ..DumpOptions::default()
        };
        assert_eq!(dump(&Value::from(4), &options), "4");
        assert_eq!(dump(&objdump!([1, "a", []]), &options), "[1,\"a\",[]]");
    }
}
