#[macro_export]
macro_rules! objdump {
    // Handle undefined
    (undefined) => {
        $crate::Value::Undefined
    };

    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::objdump!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::DumpMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::DumpMap::new();
        $(
            object.insert($key.to_string(), $crate::objdump!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything else goes through the serde boundary; wrap multi-token
    // expressions such as `(-1)` or `(Value::function(..))` in parentheses.
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Undefined)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{DumpMap, Number, Value};

    #[test]
    fn test_objdump_macro_primitives() {
        assert_eq!(objdump!(undefined), Value::Undefined);
        assert_eq!(objdump!(null), Value::Null);
        assert_eq!(objdump!(true), Value::Bool(true));
        assert_eq!(objdump!(false), Value::Bool(false));
        assert_eq!(objdump!(42), Value::Number(Number::Integer(42)));
        assert_eq!(objdump!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(objdump!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_objdump_macro_arrays() {
        assert_eq!(objdump!([]), Value::Array(vec![]));
        assert_eq!(
            objdump!([1, "b", null, undefined]),
            Value::Array(vec![
                Value::from(1),
                Value::from("b"),
                Value::Null,
                Value::Undefined,
            ])
        );
    }

    #[test]
    fn test_objdump_macro_objects() {
        assert_eq!(objdump!({}), Value::Object(DumpMap::new()));

        let obj = objdump!({
            "name": "Alice",
            "code": (Value::function("() => 'a'")),
            "age": 30
        });

        match obj {
            Value::Object(map) => {
                let keys: Vec<_> = map.keys().cloned().collect();
                assert_eq!(keys, vec!["name", "code", "age"]);
                assert_eq!(map.get("code"), Some(&Value::function("() => 'a'")));
            }
            _ => panic!("Expected object"),
        }
    }
}
