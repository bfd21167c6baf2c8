//! Dynamic value representation for dumps.
//!
//! This module provides the [`Value`] enum, the closed set of kinds the dump
//! engine knows how to write as object-literal text.
//!
//! ## Core Types
//!
//! - [`Value`]: undefined, null, bool, number, bigint, string, function, date,
//!   array or object
//! - [`Number`]: numeric values including `Infinity`, `-Infinity` and `NaN`
//! - [`Function`]: a field type for serde structs that should dump as code
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_objdump::{objdump, Value};
//!
//! let handler = Value::function("function(){ return 'a'; }");
//! let text = Value::from("hello");
//!
//! let obj = objdump!({
//!     "name": "Alice",
//!     "onLoad": (Value::function("() => 'loaded'"))
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Stringifying Functions
//!
//! ```rust
//! use serde_objdump::{objdump, Value};
//!
//! let value = objdump!([1, (Value::function("() => 2"))]).deep_stringify();
//! assert_eq!(value, objdump!([1, "() => 2"]));
//! ```

use crate::DumpMap;
use chrono::{DateTime, SecondsFormat, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Reserved serde names that let the value serializer recognise kinds serde
// itself has no notion of. Other serializers see plain newtypes.
pub(crate) const FUNCTION_TOKEN: &str = "$serde_objdump::private::Function";
pub(crate) const UNDEFINED_TOKEN: &str = "$serde_objdump::private::Undefined";
pub(crate) const DATE_TOKEN: &str = "$serde_objdump::private::Date";
pub(crate) const BIGINT_TOKEN: &str = "$serde_objdump::private::BigInt";

/// A dynamically-typed value that can be dumped as object-literal text.
///
/// # Examples
///
/// ```rust
/// use serde_objdump::{Number, Value};
///
/// let undefined = Value::Undefined;
/// let num = Value::Number(Number::Integer(42));
/// let code = Value::function("() => 42");
///
/// assert!(undefined.is_undefined());
/// assert!(num.is_number());
/// assert!(code.is_function());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// An absent value; dumps as `undefined`.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    BigInt(BigInt),
    String(String),
    /// Function source text, dumped verbatim.
    Function(String),
    /// A timestamp; dumps as `new Date()` unless exact dates are enabled.
    Date(DateTime<Utc>),
    Array(Vec<Value>),
    Object(DumpMap),
}

/// A numeric value that can be an integer, float, or JavaScript special value.
///
/// # Examples
///
/// ```rust
/// use serde_objdump::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(3.5).to_string(), "3.5");
/// assert_eq!(Number::NegativeInfinity.to_string(), "-Infinity");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Builds a number from an `f64`, mapping non-finite values to the
    /// matching special variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_objdump::Number;
    ///
    /// assert_eq!(Number::from_f64(1.5), Number::Float(1.5));
    /// assert_eq!(Number::from_f64(f64::INFINITY), Number::Infinity);
    /// assert_eq!(Number::from_f64(f64::NAN), Number::NaN);
    /// ```
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Number::NaN
        } else if value == f64::INFINITY {
            Number::Infinity
        } else if value == f64::NEG_INFINITY {
            Number::NegativeInfinity
        } else {
            Number::Float(value)
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if it is a whole number in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_objdump::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Infinity.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
            Number::Infinity => write!(f, "Infinity"),
            Number::NegativeInfinity => write!(f, "-Infinity"),
            Number::NaN => write!(f, "NaN"),
        }
    }
}

/// Function source text as a serde field type.
///
/// Serializing through [`to_value`](crate::to_value) yields
/// [`Value::Function`], so the source is dumped verbatim. Other serde formats
/// see the source as a plain string.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_objdump::{to_string, Function};
///
/// #[derive(Serialize)]
/// struct Route {
///     path: String,
///     handler: Function,
/// }
///
/// let route = Route {
///     path: "/".to_string(),
///     handler: Function::new("function(req){ return 'ok'; }"),
/// };
/// let out = to_string(&route).unwrap();
/// assert!(out.contains("\"handler\": function(req){ return 'ok'; }"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Function(pub String);

impl Function {
    pub fn new(source: impl Into<String>) -> Self {
        Function(source.into())
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.0
    }
}

impl Serialize for Function {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct(FUNCTION_TOKEN, &self.0)
    }
}

impl Value {
    /// Creates a function value from its source text.
    pub fn function(source: impl Into<String>) -> Self {
        Value::Function(source.into())
    }

    /// Creates a date value.
    #[must_use]
    pub fn date(instant: DateTime<Utc>) -> Self {
        Value::Date(instant)
    }

    /// Creates a big integer value.
    pub fn bigint(value: impl Into<BigInt>) -> Self {
        Value::BigInt(value.into())
    }

    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_function(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    ///
    /// Function source is not a string; use [`Value::as_function`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_objdump::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::function("() => 1").as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_function(&self) -> Option<&str> {
        match self {
            Value::Function(source) => Some(source),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&DumpMap> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    /// Replaces every function, at any depth, with its source as a string.
    ///
    /// Only arrays and objects are descended into; every other value keeps
    /// its kind and content.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_objdump::{objdump, Value};
    ///
    /// let mut value = objdump!({ "f": (Value::function("() => 1")), "n": 1 });
    /// value.stringify_functions();
    /// assert_eq!(value, objdump!({ "f": "() => 1", "n": 1 }));
    /// ```
    pub fn stringify_functions(&mut self) {
        match self {
            Value::Function(source) => {
                let source = std::mem::take(source);
                *self = Value::String(source);
            }
            Value::Array(items) => items.iter_mut().for_each(Value::stringify_functions),
            Value::Object(map) => map.values_mut().for_each(Value::stringify_functions),
            _ => {}
        }
    }

    /// Owned form of [`Value::stringify_functions`].
    #[must_use]
    pub fn deep_stringify(mut self) -> Value {
        self.stringify_functions();
        self
    }
}

impl fmt::Display for Value {
    /// Writes the dump of this value with default options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::dump(self, &crate::DumpOptions::default()))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Undefined => serializer.serialize_unit_struct(UNDEFINED_TOKEN),
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(n) => serializer.serialize_f64(n.as_f64()),
            Value::BigInt(bi) => serializer.serialize_newtype_struct(BIGINT_TOKEN, &bi.to_string()),
            Value::String(s) => serializer.serialize_str(s),
            Value::Function(source) => serializer.serialize_newtype_struct(FUNCTION_TOKEN, source),
            Value::Date(dt) => serializer.serialize_newtype_struct(
                DATE_TOKEN,
                &dt.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any self-describing value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::from_f64(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = DumpMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match &value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| crate::Error::custom(format!("cannot convert {} to i64", n))),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) | Value::Function(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! from_small_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::Integer(i64::from(value)))
                }
            }
        )*
    };
}

from_small_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::Number(Number::Float(value as f64)),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::BigInt(BigInt::from(value)),
        }
    }
}

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::BigInt(BigInt::from(value)),
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::from_f64(f64::from(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::from_f64(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value.0)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<DumpMap> for Value {
    fn from(value: DumpMap) -> Self {
        Value::Object(value)
    }
}
