//! `serialize_with` helpers for native date and bigint fields.
//!
//! `chrono` serializes a `DateTime<Utc>` as a string and `num-bigint` writes a
//! `BigInt` as a sign and digit list, so through [`to_value`](crate::to_value)
//! neither would keep its kind. Pointing the field at one of these helpers
//! makes it dump as `new Date(..)` or `123n`. Other serde formats see the
//! RFC 3339 string or the decimal string.
//!
//! ```rust
//! use chrono::{DateTime, TimeZone, Utc};
//! use num_bigint::BigInt;
//! use serde::Serialize;
//! use serde_objdump::{to_string_with_options, DumpOptions};
//!
//! #[derive(Serialize)]
//! struct Stamped {
//!     #[serde(serialize_with = "serde_objdump::date::serialize")]
//!     at: DateTime<Utc>,
//!     #[serde(serialize_with = "serde_objdump::bigint::serialize")]
//!     n: BigInt,
//! }
//!
//! let stamped = Stamped {
//!     at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
//!     n: BigInt::from(5),
//! };
//! let options = DumpOptions::new().with_exact_dates(true);
//! let out = to_string_with_options(&stamped, options).unwrap();
//! assert_eq!(
//!     out,
//!     "{\n  \"at\": new Date(\"2024-01-15T10:30:00.000Z\"),\n  \"n\": 5n\n}"
//! );
//! ```

/// Date fields.
pub mod date {
    use crate::value::DATE_TOKEN;
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    /// Serializes a `DateTime<Utc>` so it dumps as a date.
    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct(
            DATE_TOKEN,
            &instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }

    /// Same as [`serialize`] for an optional field; `None` dumps as `null`.
    pub fn serialize_option<S>(
        instant: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match instant {
            Some(instant) => serialize(instant, serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Big integer fields.
pub mod bigint {
    use crate::value::BIGINT_TOKEN;
    use num_bigint::BigInt;
    use serde::Serializer;

    /// Serializes a `BigInt` so it dumps as `<digits>n`.
    pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_newtype_struct(BIGINT_TOKEN, &value.to_string())
    }

    /// Same as [`serialize`] for an optional field; `None` dumps as `null`.
    pub fn serialize_option<S>(value: &Option<BigInt>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{to_value, Value};
    use chrono::{DateTime, TimeZone, Utc};
    use num_bigint::BigInt;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Record {
        #[serde(serialize_with = "crate::date::serialize")]
        created: DateTime<Utc>,
        #[serde(serialize_with = "crate::date::serialize_option")]
        deleted: Option<DateTime<Utc>>,
        #[serde(serialize_with = "crate::bigint::serialize")]
        id: BigInt,
        #[serde(serialize_with = "crate::bigint::serialize_option")]
        parent: Option<BigInt>,
    }

    #[test]
    fn test_fields_keep_their_kind() {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let huge = BigInt::from(u128::MAX) * BigInt::from(2);
        let record = Record {
            created,
            deleted: None,
            id: huge.clone(),
            parent: Some(BigInt::from(-3)),
        };

        let value = to_value(&record).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.get("created"), Some(&Value::date(created)));
        assert_eq!(map.get("deleted"), Some(&Value::Null));
        assert_eq!(map.get("id"), Some(&Value::bigint(huge)));
        assert_eq!(map.get("parent"), Some(&Value::bigint(-3)));
    }

    #[test]
    fn test_other_formats_see_strings() {
        #[derive(Serialize)]
        struct Plain {
            #[serde(serialize_with = "crate::bigint::serialize")]
            n: BigInt,
        }

        let json = serde_json::to_string(&Plain { n: BigInt::from(7) }).unwrap();
        assert_eq!(json, r#"{"n":"7"}"#);
    }
}
