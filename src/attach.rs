//! Giving a type its own dump method.
//!
//! Any type can opt in to [`ToObjectDump`] by saying how it becomes a
//! [`Value`]. For types that already implement `Serialize`, the
//! [`attach_object_dump!`](crate::attach_object_dump) macro writes the impl.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_objdump::{attach_object_dump, ToObjectDump};
//!
//! #[derive(Serialize)]
//! struct Settings {
//!     debug: bool,
//! }
//!
//! attach_object_dump!(Settings);
//!
//! let out = Settings { debug: true }.to_object_dump().unwrap();
//! assert_eq!(out, "{\n  \"debug\": true\n}");
//! ```

use crate::{DumpOptions, ObjectDump, Result, Value};

/// Types that can render themselves as object-literal text.
pub trait ToObjectDump {
    /// Converts `self` into the value to dump.
    fn to_dump_value(&self) -> Result<Value>;

    /// Renders `self` with default options.
    fn to_object_dump(&self) -> Result<String> {
        self.to_object_dump_with(&DumpOptions::default())
    }

    /// Renders `self` with `options`.
    fn to_object_dump_with(&self, options: &DumpOptions) -> Result<String> {
        Ok(ObjectDump::with_options(self.to_dump_value()?, options.clone()).render())
    }
}

impl ToObjectDump for Value {
    fn to_dump_value(&self) -> Result<Value> {
        Ok(self.clone())
    }
}

/// Implements [`ToObjectDump`] for one or more `Serialize` types.
#[macro_export]
macro_rules! attach_object_dump {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ToObjectDump for $ty {
                fn to_dump_value(&self) -> $crate::Result<$crate::Value> {
                    $crate::to_value(self)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Function;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Widget {
        name: String,
        render: Function,
    }

    #[derive(Serialize)]
    struct Empty {}

    attach_object_dump!(Widget, Empty);

    #[test]
    fn test_attached_type_dumps() {
        let widget = Widget {
            name: "button".to_string(),
            render: Function::new("function(){\n  return '<button>';\n}"),
        };
        let options = DumpOptions::new().with_prefix("module.exports = ").with_suffix(";");
        assert_eq!(
            widget.to_object_dump_with(&options).unwrap(),
            "module.exports = {\n  \"name\": \"button\",\n  \"render\": \
             function(){\n  return '<button>';\n}\n};"
        );
    }

    #[test]
    fn test_empty_struct() {
        assert_eq!(Empty {}.to_object_dump().unwrap(), "{\n\n}");
    }

    #[test]
    fn test_value_impl() {
        assert_eq!(Value::Null.to_object_dump().unwrap(), "null");
    }
}
