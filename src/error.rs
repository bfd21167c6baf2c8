//! Error types for the serde boundary.
//!
//! Dumping a [`Value`](crate::Value) never fails: the engine is a best-effort
//! converter and every variant has a textual form. Errors only arise while
//! classifying an arbitrary `T: Serialize` into a `Value`, or while writing the
//! rendered text to an [`io::Write`](std::io::Write).
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use serde_objdump::{to_value, Error};
//!
//! let mut map = BTreeMap::new();
//! map.insert(vec![1, 2], "composite keys are not object keys");
//!
//! let result = to_value(&map);
//! assert!(matches!(result, Err(Error::KeyMustBeString(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while turning Rust data into a dump.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing the rendered text
    #[error("IO error: {0}")]
    Io(String),

    /// A map key that has no object-literal key form
    #[error("Object keys must be strings, found {0}")]
    KeyMustBeString(String),

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a key error naming the kind of key that was rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_objdump::Error;
    ///
    /// let err = Error::key_must_be_string("sequence");
    /// assert!(err.to_string().contains("sequence"));
    /// ```
    pub fn key_must_be_string(found: &str) -> Self {
        Error::KeyMustBeString(found.to_string())
    }

    /// Creates an unsupported type error.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_objdump::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::key_must_be_string("unit").to_string(),
            "Object keys must be strings, found unit"
        );
        assert_eq!(
            Error::unsupported_type("raw pointers").to_string(),
            "Unsupported type: raw pointers"
        );
        assert_eq!(Error::io("broken pipe").to_string(), "IO error: broken pipe");
    }

    #[test]
    fn test_serde_custom() {
        let err = <Error as serde::ser::Error>::custom("from serializer");
        assert!(matches!(err, Error::Custom(ref m) if m == "from serializer"));
    }
}
