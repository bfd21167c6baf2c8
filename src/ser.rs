//! Conversion from any `T: Serialize` into a [`Value`].
//!
//! [`ValueSerializer`] is the boundary where Rust data is classified, once,
//! into the closed set of kinds the dump engine understands. After that the
//! engine only ever matches on [`Value`] variants.
//!
//! ## Mapping
//!
//! - integers become `Number::Integer` (values outside `i64` become a float
//!   for `u64` and a bigint for 128-bit types)
//! - floats become `Number::Float`, or `Infinity`/`-Infinity`/`NaN`
//! - `None`, `()` and unit structs become `null`
//! - unit variants become their name as a string
//! - newtype, tuple and struct variants become `{ "Variant": ... }`
//! - map keys must be strings, numbers or booleans; the latter two are
//!   stringified as JavaScript would
//!
//! [`Function`](crate::Function) fields and [`Value`] fields survive the trip
//! with their kind intact.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_objdump::{to_value, Value};
//!
//! #[derive(Serialize)]
//! enum Shape {
//!     Circle { r: u32 },
//! }
//!
//! let value = to_value(&Shape::Circle { r: 2 }).unwrap();
//! let inner = value.as_object().unwrap().get("Circle").unwrap();
//! assert_eq!(inner.as_object().unwrap().get("r"), Some(&Value::from(2)));
//! ```

use crate::value::{BIGINT_TOKEN, DATE_TOKEN, FUNCTION_TOKEN, UNDEFINED_TOKEN};
use crate::{DumpMap, Error, Number, Result, Value};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Serializer producing a [`Value`] tree.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    name: String,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: DumpMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: String,
    map: DumpMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::from_f64(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        if name == UNDEFINED_TOKEN {
            Ok(Value::Undefined)
        } else {
            Ok(Value::Null)
        }
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        match name {
            FUNCTION_TOKEN => match to_value(value)? {
                Value::String(source) => Ok(Value::Function(source)),
                other => Ok(other),
            },
            DATE_TOKEN => {
                let text = marker_text(value, "date")?;
                DateTime::parse_from_rfc3339(&text)
                    .map(|dt| Value::Date(dt.with_timezone(&Utc)))
                    .map_err(Error::custom)
            }
            BIGINT_TOKEN => {
                let text = marker_text(value, "bigint")?;
                text.parse::<BigInt>()
                    .map(Value::BigInt)
                    .map_err(Error::custom)
            }
            _ => value.serialize(self),
        }
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut map = DumpMap::with_capacity(1);
        map.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Object(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant.to_string(),
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant.to_string(),
            map: DumpMap::with_capacity(len),
        })
    }
}

impl SerializeVec {
    fn with_capacity(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn with_capacity(capacity: usize) -> Self {
        SerializeMap {
            map: DumpMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut map = DumpMap::with_capacity(1);
        map.insert(self.name, Value::Array(self.vec));
        Ok(Value::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_string(to_value(key)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut outer = DumpMap::with_capacity(1);
        outer.insert(self.name, Value::Object(self.map));
        Ok(Value::Object(outer))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

fn marker_text<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<String> {
    match to_value(value)? {
        Value::String(text) => Ok(text),
        other => Err(Error::unsupported_type(&format!(
            "{} marker holding {}",
            what,
            kind(&other)
        ))),
    }
}

fn key_string(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::BigInt(bi) => Ok(bi.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::key_must_be_string(kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Undefined => "undefined",
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::BigInt(_) => "bigint",
        Value::String(_) => "string",
        Value::Function(_) => "function",
        Value::Date(_) => "date",
        Value::Array(_) => "sequence",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Function;
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    enum Event {
        Ping,
        Message(String),
        Move(i32, i32),
        Resize { w: u32, h: u32 },
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(to_value(&Event::Ping).unwrap(), Value::from("Ping"));

        let message = to_value(&Event::Message("hi".to_string())).unwrap();
        assert_eq!(
            message.as_object().and_then(|m| m.get("Message")),
            Some(&Value::from("hi"))
        );

        let moved = to_value(&Event::Move(1, -1)).unwrap();
        assert_eq!(
            moved.as_object().and_then(|m| m.get("Move")),
            Some(&Value::Array(vec![Value::from(1), Value::from(-1)]))
        );

        let resized = to_value(&Event::Resize { w: 3, h: 4 }).unwrap();
        let inner = resized
            .as_object()
            .and_then(|m| m.get("Resize"))
            .and_then(Value::as_object)
            .unwrap();
        let keys: Vec<_> = inner.keys().cloned().collect();
        assert_eq!(keys, vec!["w", "h"]);
    }

    #[test]
    fn test_map_keys() {
        let mut numbers = BTreeMap::new();
        numbers.insert(1, "one");
        numbers.insert(2, "two");
        let value = to_value(&numbers).unwrap();
        assert_eq!(value.as_object().and_then(|m| m.get("2")), Some(&Value::from("two")));

        let mut bad = BTreeMap::new();
        bad.insert((1, 2), 3);
        assert!(matches!(to_value(&bad), Err(Error::KeyMustBeString(_))));
    }

    #[test]
    fn test_markers_survive() {
        assert_eq!(
            to_value(&Function::new("() => 1")).unwrap(),
            Value::function("() => 1")
        );

        let instant = Utc.with_ymd_and_hms(2020, 2, 29, 12, 0, 0).unwrap();
        let original = Value::Array(vec![
            Value::Undefined,
            Value::date(instant),
            Value::bigint(BigInt::from(u128::MAX)),
            Value::function("function(){}"),
        ]);
        assert_eq!(to_value(&original).unwrap(), original);
    }

    #[test]
    fn test_malformed_marker_payload() {
        struct BadDate;

        impl Serialize for BadDate {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: ser::Serializer,
            {
                serializer.serialize_newtype_struct(DATE_TOKEN, &42)
            }
        }

        let err = to_value(&BadDate).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedType(ref m) if m == "date marker holding number"
        ));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(to_value(&f64::INFINITY).unwrap(), Value::Number(Number::Infinity));
        assert_eq!(to_value(&u64::MAX).unwrap(), Value::from(u64::MAX));
        assert_eq!(
            to_value(&i128::MIN).unwrap(),
            Value::BigInt(BigInt::from(i128::MIN))
        );
        assert_eq!(to_value(&'x').unwrap(), Value::from("x"));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
    }
}
