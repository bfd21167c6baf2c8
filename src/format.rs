//! Output Format
//!
//! This module documents the text produced by [`dump`](crate::dump) and the
//! functions built on it.
//!
//! # Overview
//!
//! The output is a JavaScript expression. Assign it, export it, or evaluate it
//! and you get back a value of the same shape, functions included. It is meant
//! for generating configuration modules, fixtures and bundles where a value has
//! to carry code and JSON cannot.
//!
//! ```text
//! {
//!   "a": function(){
//!     return 'a';
//!   },
//!   "b": {
//!     "b1": 1,
//!     "b2": 2
//!   },
//!   "c": [],
//!   "d": ["a","b","c",function(){
//!     return 'a';
//!   }]
//! }
//! ```
//!
//! # Objects
//!
//! - Opened by `{` and a newline, closed by a newline and `}`
//! - One entry per line: indentation, quoted key, `: `, value
//! - Entries separated by `,` and a newline, no trailing comma
//! - Keys appear in insertion order
//! - Each level adds `spacing` spaces (default 2); a nested value has every
//!   line break it contains followed by one more level of indentation
//! - An empty object is `{`, an empty line, `}`
//!
//! # Arrays
//!
//! - `[` elements joined by `,` `]`, with no spaces and no line breaks added
//! - Arrays never indent their elements; an object inside an array is indented
//!   only by the objects enclosing the array
//!
//! # Strings
//!
//! Strings are wrapped in `"` with embedded `"` written as `\"`. Nothing else
//! is escaped:
//!
//! ```text
//! "plain"
//! "say \"hi\""
//! ```
//!
//! A string containing a raw newline is written with that newline, which a
//! JavaScript reader rejects, and a backslash is passed through as an escape
//! of whatever follows it. Callers holding such text should escape it first.
//!
//! Only function source is shielded from indentation. A plain string nested
//! in an object has every line break followed by that object's indentation,
//! so its content changes:
//!
//! ```text
//! {
//!   "a": {
//!     "text": "x
//!     y"
//!   }
//! }
//! ```
//!
//! A string that starts with `function`, optional whitespace and `(` is taken
//! to be function source and written without quotes. The check looks only at
//! that prefix, so prose such as `"function (noun): a purpose"` is written
//! unquoted as well.
//!
//! # Functions
//!
//! Function source is written exactly as given, never quoted or re-indented.
//! Its own line breaks and indentation survive however deeply it is nested.
//!
//! # Scalars
//!
//! | Value | Output |
//! |-------|--------|
//! | undefined | `undefined` |
//! | null | `null` |
//! | booleans | `true`, `false` |
//! | integers | `42`, `-7` |
//! | floats | `3.5`, `0.1`; whole floats print without a fraction (`2`) |
//! | special numbers | `Infinity`, `-Infinity`, `NaN` |
//! | big integers | `123n` |
//! | dates | `new Date()` |
//!
//! # Dates
//!
//! Dates are written as `new Date()`, which evaluates to the moment the output
//! is read, not the stored instant. Enable
//! [`DumpOptions::with_exact_dates`](crate::DumpOptions::with_exact_dates) to
//! write `new Date("2024-01-15T10:30:00.000Z")` instead.
//!
//! A `chrono::DateTime<Utc>` or `num_bigint::BigInt` field in a serde struct
//! needs `#[serde(serialize_with = "serde_objdump::date::serialize")]` (or
//! `bigint::serialize`) to dump as a date or bigint; see [`fields`](crate::fields).
//!
//! # Prefix and Suffix
//!
//! The configured prefix and suffix are added around the finished text as is,
//! e.g. `module.exports = ` and `;\n`.
//!
//! # Limitations
//!
//! - **Escaping**: only `"` is escaped in strings
//! - **Multiline strings**: re-indented along with their enclosing object
//! - **Function detection**: prefix heuristic, see above
//! - **Dates**: lossy unless exact dates are enabled
//! - **Depth**: dumping recurses once per nesting level

// This module contains only documentation; no implementation code
