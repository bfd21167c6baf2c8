//! A value paired with its dump.
//!
//! [`ObjectDump`] dumps its value once at construction and keeps the text.
//! Rendering adds the prefix and suffix, optionally with per-call overrides;
//! only overrides that change the dumped text itself (spacing, date mode)
//! cause a fresh dump.

use crate::dump::Dumper;
use crate::{DumpOptions, Value};
use std::fmt;

/// A dumped value, ready to be rendered with a prefix and suffix.
///
/// # Examples
///
/// ```rust
/// use serde_objdump::{objdump, ObjectDump, Value};
///
/// let dump = ObjectDump::new(objdump!({ "a": [1, 2] }));
/// assert_eq!(dump.output(), "{\n  \"a\": [1,2]\n}");
///
/// let module = dump.render_with(&objdump!({ "prefix": "exports.test = ", "suffix": ";" }));
/// assert_eq!(module, "exports.test = {\n  \"a\": [1,2]\n};");
///
/// // A non-object override is ignored.
/// assert_eq!(dump.render_with(&Value::from(4)), dump.render());
/// ```
#[derive(Clone, Debug)]
pub struct ObjectDump {
    value: Value,
    options: DumpOptions,
    output: String,
}

impl ObjectDump {
    /// Dumps `value` with default options.
    pub fn new(value: impl Into<Value>) -> Self {
        Self::with_options(value, DumpOptions::default())
    }

    /// Dumps `value` with `options`.
    pub fn with_options(value: impl Into<Value>, options: DumpOptions) -> Self {
        let value = value.into();
        let output = Dumper::new(&options).dump(&value);
        ObjectDump {
            value,
            options,
            output,
        }
    }

    /// Dumps `value` with options merged from a dynamic option object.
    ///
    /// Unrecognised or mistyped fields are ignored.
    pub fn with_option_value(value: impl Into<Value>, overrides: &Value) -> Self {
        Self::with_options(value, DumpOptions::from_value(overrides))
    }

    /// The dump of the value, without prefix or suffix.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Prefix, dump and suffix, using the stored options.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with_options(&self.options)
    }

    /// Renders with `overrides` merged over the stored options for this call.
    #[must_use]
    pub fn render_with(&self, overrides: &Value) -> String {
        let mut options = self.options.clone();
        options.merge(overrides);
        self.render_with_options(&options)
    }

    /// Renders with `options` in place of the stored options for this call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_objdump::{objdump, DumpOptions, ObjectDump};
    ///
    /// let dump = ObjectDump::new(objdump!({ "a": { "b": 1 } }));
    /// let wide = dump.render_with_options(&DumpOptions::new().with_spacing(4));
    /// assert_eq!(wide, "{\n    \"a\": {\n        \"b\": 1\n    }\n}");
    /// ```
    #[must_use]
    pub fn render_with_options(&self, options: &DumpOptions) -> String {
        let redumped;
        let body = if self.reusable_for(options) {
            self.output.as_str()
        } else {
            tracing::debug!(spacing = options.spacing, "re-dumping for render options");
            redumped = Dumper::new(options).dump(&self.value);
            redumped.as_str()
        };

        let mut rendered =
            String::with_capacity(options.prefix.len() + body.len() + options.suffix.len());
        rendered.push_str(&options.prefix);
        rendered.push_str(body);
        rendered.push_str(&options.suffix);
        rendered
    }

    fn reusable_for(&self, options: &DumpOptions) -> bool {
        options.spacing == self.options.spacing && options.exact_dates == self.options.exact_dates
    }
}

impl fmt::Display for ObjectDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objdump;

    #[test]
    fn test_stored_options_apply() {
        let options = DumpOptions::new().with_prefix("var test = ").with_spacing(4);
        let dump = ObjectDump::with_options(objdump!({ "a": 1 }), options);
        assert_eq!(dump.output(), "{\n    \"a\": 1\n}");
        assert_eq!(dump.render(), "var test = {\n    \"a\": 1\n}");
        assert_eq!(dump.to_string(), dump.render());
    }

    #[test]
    fn test_overrides_are_per_call() {
        let dump = ObjectDump::new(objdump!({ "a": { "b": 1 } }));
        let wide = dump.render_with(&objdump!({ "spacing": 4, "suffix": ";" }));
        assert_eq!(wide, "{\n    \"a\": {\n        \"b\": 1\n    }\n};");
        assert_eq!(dump.render(), "{\n  \"a\": {\n    \"b\": 1\n  }\n}");
        assert_eq!(dump.options(), &DumpOptions::default());
    }

    #[test]
    fn test_with_option_value_ignores_bad_fields() {
        let dump = ObjectDump::with_option_value(
            objdump!([1]),
            &objdump!({ "prefix": "x = ", "spacing": "four" }),
        );
        assert_eq!(dump.options().spacing, 2);
        assert_eq!(dump.render(), "x = [1]");
    }

    #[test]
    fn test_repeated_renders_match() {
        let value = objdump!({
            "f": (Value::function("function(){ return 'a'; }")),
            "g": "function (x) { return x; }"
        });
        let dump = ObjectDump::new(value);
        let first = dump.render_with_options(&DumpOptions::new().with_spacing(3));
        let second = dump.render_with_options(&DumpOptions::new().with_spacing(3));
        assert_eq!(first, second);
        assert!(first.contains("function(){ return 'a'; }"));
        assert!(first.contains("function (x) { return x; }"));
    }

    #[test]
    fn test_oversized_spacing_override_is_ignored() {
        let dump = ObjectDump::new(Value::from(4));
        assert_eq!(dump.render_with(&objdump!({ "spacing": (i64::MAX) })), "4");

        let object = ObjectDump::new(objdump!({ "a": 1 }));
        assert_eq!(
            object.render_with(&objdump!({ "spacing": 1e18 })),
            "{\n  \"a\": 1\n}"
        );
    }

    #[test]
    fn test_into_value() {
        let dump = ObjectDump::new(5);
        assert_eq!(dump.value(), &Value::from(5));
        assert_eq!(dump.into_value(), Value::from(5));
    }
}
