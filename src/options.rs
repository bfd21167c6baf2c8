//! Configuration options for dumping.
//!
//! [`DumpOptions`] controls the text wrapped around a dump (`prefix`,
//! `suffix`), the indentation width of nested objects (`spacing`), and whether
//! dates keep their instant (`exact_dates`).
//!
//! Options can be built with the typed builder methods, or merged from a
//! dynamic [`Value`] the way loosely typed callers pass option hashes. Fields of
//! the wrong type are ignored rather than rejected.
//!
//! ## Examples
//!
//! ```rust
//! use serde_objdump::{objdump, DumpOptions};
//!
//! let options = DumpOptions::new()
//!     .with_prefix("module.exports = ")
//!     .with_suffix(";\n")
//!     .with_spacing(4);
//! assert_eq!(options.spacing, 4);
//!
//! // Wrong types are skipped, the rest is applied.
//! let merged = DumpOptions::from_value(&objdump!({
//!     "prefix": "var config = ",
//!     "spacing": "wide"
//! }));
//! assert_eq!(merged.prefix, "var config = ");
//! assert_eq!(merged.spacing, 2);
//! ```

use crate::Value;

/// Default number of spaces per object nesting level.
pub const DEFAULT_SPACING: usize = 2;

/// Widest accepted indentation step. Wider requests are clamped by
/// [`DumpOptions::with_spacing`] and ignored by [`DumpOptions::merge`].
pub const MAX_SPACING: usize = 1024;

/// Configuration options for a dump.
///
/// # Examples
///
/// ```rust
/// use serde_objdump::DumpOptions;
///
/// let options = DumpOptions::default();
/// assert_eq!(options.prefix, "");
/// assert_eq!(options.suffix, "");
/// assert_eq!(options.spacing, 2);
/// assert!(!options.exact_dates);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpOptions {
    /// Text placed before the dumped value.
    pub prefix: String,
    /// Text placed after the dumped value.
    pub suffix: String,
    /// Spaces added per object nesting level.
    pub spacing: usize,
    /// Emit `new Date("<instant>")` instead of the bare `new Date()`.
    pub exact_dates: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        DumpOptions {
            prefix: String::new(),
            suffix: String::new(),
            spacing: DEFAULT_SPACING,
            exact_dates: false,
        }
    }
}

impl DumpOptions {
    /// Creates default options (no prefix or suffix, 2-space spacing).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from a dynamic option object, starting from the defaults.
    ///
    /// See [`DumpOptions::merge`] for the accepted fields.
    #[must_use]
    pub fn from_value(overrides: &Value) -> Self {
        let mut options = Self::default();
        options.merge(overrides);
        options
    }

    /// Sets the text emitted before the dump.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the text emitted after the dump.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the indentation size (number of spaces per object level), at
    /// most [`MAX_SPACING`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_objdump::options::MAX_SPACING;
    /// use serde_objdump::DumpOptions;
    ///
    /// let options = DumpOptions::new().with_spacing(4);
    /// assert_eq!(options.spacing, 4);
    ///
    /// let clamped = DumpOptions::new().with_spacing(usize::MAX);
    /// assert_eq!(clamped.spacing, MAX_SPACING);
    /// ```
    #[must_use]
    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing.min(MAX_SPACING);
        self
    }

    /// Makes dates keep their instant instead of dumping as `new Date()`.
    #[must_use]
    pub fn with_exact_dates(mut self, exact: bool) -> Self {
        self.exact_dates = exact;
        self
    }

    /// Applies the recognised fields of a dynamic option object.
    ///
    /// - `prefix`, `suffix`: strings
    /// - `spacing`: a whole number from 0 to [`MAX_SPACING`]
    /// - `exactDates` (or `exact_dates`): a boolean
    ///
    /// Anything else, including a field of the wrong type or an `overrides`
    /// value that is not an object at all, leaves the current setting alone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_objdump::{objdump, DumpOptions, Value};
    ///
    /// let mut options = DumpOptions::new().with_prefix("x = ");
    /// options.merge(&Value::from(4));
    /// assert_eq!(options.prefix, "x = ");
    ///
    /// options.merge(&objdump!({ "spacing": 8, "suffix": 1 }));
    /// assert_eq!(options.spacing, 8);
    /// assert_eq!(options.suffix, "");
    /// ```
    pub fn merge(&mut self, overrides: &Value) {
        let Some(fields) = overrides.as_object() else {
            tracing::trace!("ignoring non-object dump options");
            return;
        };

        if let Some(prefix) = fields.get("prefix").and_then(Value::as_str) {
            self.prefix = prefix.to_string();
        }
        if let Some(suffix) = fields.get("suffix").and_then(Value::as_str) {
            self.suffix = suffix.to_string();
        }
        if let Some(spacing) = fields.get("spacing").and_then(spacing_of) {
            self.spacing = spacing;
        }
        if let Some(exact) = fields
            .get("exactDates")
            .or_else(|| fields.get("exact_dates"))
            .and_then(Value::as_bool)
        {
            self.exact_dates = exact;
        }
    }

    /// Returns the indentation string for one nesting level.
    pub(crate) fn indent(&self) -> String {
        " ".repeat(self.spacing)
    }
}

fn spacing_of(value: &Value) -> Option<usize> {
    let spacing = value.as_i64().and_then(|n| usize::try_from(n).ok())?;
    if spacing > MAX_SPACING {
        tracing::debug!(spacing, max = MAX_SPACING, "ignoring oversized spacing");
        return None;
    }
    Some(spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{objdump, Number};

    #[test]
    fn test_builder() {
        let options = DumpOptions::new()
            .with_prefix("a")
            .with_suffix("b")
            .with_spacing(0)
            .with_exact_dates(true);
        assert_eq!(options.prefix, "a");
        assert_eq!(options.suffix, "b");
        assert_eq!(options.spacing, 0);
        assert!(options.exact_dates);
        assert_eq!(options.indent(), "");
    }

    #[test]
    fn test_merge_all_fields() {
        let options = DumpOptions::from_value(&objdump!({
            "prefix": "exports.test = ",
            "suffix": ";",
            "spacing": 4,
            "exactDates": true
        }));
        assert_eq!(options.prefix, "exports.test = ");
        assert_eq!(options.suffix, ";");
        assert_eq!(options.spacing, 4);
        assert!(options.exact_dates);
        assert_eq!(options.indent(), "    ");
    }

    #[test]
    fn test_merge_ignores_wrong_types() {
        let mut options = DumpOptions::new().with_prefix("keep").with_spacing(3);
        options.merge(&objdump!({
            "prefix": 12,
            "suffix": null,
            "spacing": "4",
            "exact_dates": "yes"
        }));
        assert_eq!(options, DumpOptions::new().with_prefix("keep").with_spacing(3));
    }

    #[test]
    fn test_merge_spacing_edge_cases() {
        let mut options = DumpOptions::new();
        options.merge(&objdump!({ "spacing": (-1) }));
        assert_eq!(options.spacing, 2);

        options.merge(&objdump!({ "spacing": 2.5 }));
        assert_eq!(options.spacing, 2);

        options.merge(&objdump!({ "spacing": 6.0 }));
        assert_eq!(options.spacing, 6);

        options.merge(&Value::Object(
            [("spacing".to_string(), Value::Number(Number::Infinity))]
                .into_iter()
                .collect(),
        ));
        assert_eq!(options.spacing, 6);
    }

    #[test]
    fn test_merge_rejects_oversized_spacing() {
        let mut options = DumpOptions::new().with_spacing(3);
        options.merge(&objdump!({ "spacing": (i64::MAX) }));
        assert_eq!(options.spacing, 3);

        options.merge(&objdump!({ "spacing": 1e18 }));
        assert_eq!(options.spacing, 3);

        options.merge(&objdump!({ "spacing": (MAX_SPACING + 1) }));
        assert_eq!(options.spacing, 3);

        options.merge(&objdump!({ "spacing": MAX_SPACING }));
        assert_eq!(options.spacing, MAX_SPACING);
    }

    #[test]
    fn test_with_spacing_clamps() {
        assert_eq!(DumpOptions::new().with_spacing(usize::MAX).spacing, MAX_SPACING);
    }

    #[test]
    fn test_merge_non_object_is_ignored() {
        let mut options = DumpOptions::new().with_suffix(";");
        options.merge(&Value::from(4));
        options.merge(&Value::from("prefix"));
        options.merge(&Value::Undefined);
        assert_eq!(options, DumpOptions::new().with_suffix(";"));
    }
}
