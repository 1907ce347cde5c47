use std::fmt;
use std::vec;

use crate::descriptor::Name;
use crate::{Stub, StubError};

/// A value of one of the primitive scalar kinds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_json_serializer", derive(serde::Serialize))]
#[cfg_attr(feature = "serde_json_serializer", serde(untagged))]
pub enum ScalarValue {
    F64(f64),
    F32(f32),
    I64(i64),
    I32(i32),
    I16(i16),
    I8(i8),
    Bool(bool),
    Char(char),
    String(String),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F64(x) => write!(f, "{:?}", x),
            Self::F32(x) => write!(f, "{:?}", x),
            Self::I64(x) => write!(f, "{}", x),
            Self::I32(x) => write!(f, "{}", x),
            Self::I16(x) => write!(f, "{}", x),
            Self::I8(x) => write!(f, "{}", x),
            Self::Bool(x) => write!(f, "{}", x),
            Self::Char(x) => write!(f, "{:?}", x),
            Self::String(x) => write!(f, "{:?}", x),
            Self::I128(x) => write!(f, "{}", x),
            Self::Isize(x) => write!(f, "{}", x),
            Self::U8(x) => write!(f, "{}", x),
            Self::U16(x) => write!(f, "{}", x),
            Self::U32(x) => write!(f, "{}", x),
            Self::U64(x) => write!(f, "{}", x),
            Self::U128(x) => write!(f, "{}", x),
            Self::Usize(x) => write!(f, "{}", x),
        }
    }
}

/// A composite built by one of its constructors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_json_serializer", derive(serde::Serialize))]
pub struct CompositeValue {
    pub type_name: Name,
    pub constructor: Name,
    pub fields: Vec<(Name, Value)>,
}

/// A synthesized value, before it is turned into a concrete Rust type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde_json_serializer", derive(serde::Serialize))]
pub enum Value {
    Absent,
    Scalar(ScalarValue),
    Sequence(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
    Composite(CompositeValue),
}

impl Value {
    fn kind(&self) -> String {
        match self {
            Value::Absent => "an absent value".to_string(),
            Value::Scalar(s) => format!("the scalar {}", s),
            Value::Sequence(_) => "a sequence".to_string(),
            Value::Map(_) => "a map".to_string(),
            Value::Set(_) => "a set".to_string(),
            Value::Composite(c) => format!("a value of type `{}`", c.type_name),
        }
    }

    /// Build the error returned when this value cannot become a `expected`.
    pub fn mismatch(&self, expected: &str) -> StubError {
        StubError::mismatch(expected, self.kind())
    }

    /// Split a composite value of type `expected` into its constructor name
    /// and its fields.
    pub fn into_composite(self, expected: &str) -> Result<(Name, Fields), StubError> {
        match self {
            Value::Composite(CompositeValue {
                type_name,
                constructor,
                fields,
            }) if type_name == expected => Ok((
                constructor,
                Fields {
                    expected: expected.to_string(),
                    fields: fields.into_iter(),
                },
            )),
            other => Err(other.mismatch(expected)),
        }
    }

    /// The elements of a sequence or set, in order.
    pub fn into_elements(self, expected: &str) -> Result<Vec<Value>, StubError> {
        match self {
            Value::Sequence(elements) | Value::Set(elements) => Ok(elements),
            other => Err(other.mismatch(expected)),
        }
    }

    pub fn into_entries(self, expected: &str) -> Result<Vec<(Value, Value)>, StubError> {
        match self {
            Value::Map(entries) => Ok(entries),
            other => Err(other.mismatch(expected)),
        }
    }

    #[cfg(feature = "serde_json_serializer")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list<'a>(
            f: &mut fmt::Formatter<'_>,
            open: &str,
            close: &str,
            items: impl Iterator<Item = &'a Value>,
        ) -> fmt::Result {
            write!(f, "{}", open)?;
            for (i, item) in items.enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            write!(f, "{}", close)
        }
        match self {
            Value::Absent => write!(f, "None"),
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Sequence(elements) => list(f, "[", "]", elements.iter()),
            Value::Set(elements) => list(f, "{", "}", elements.iter()),
            Value::Map(entries) if entries.is_empty() => write!(f, "{{:}}"),
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Composite(c) => {
                // a struct's constructor is its own name, without type arguments
                let is_struct = c
                    .type_name
                    .strip_prefix(&*c.constructor)
                    .map_or(false, |rest| rest.is_empty() || rest.starts_with('<'));
                if is_struct {
                    write!(f, "{}", c.type_name)?;
                } else {
                    write!(f, "{}::{}", c.type_name, c.constructor)?;
                }
                if c.fields.is_empty() {
                    return Ok(());
                }
                write!(f, "(")?;
                for (i, (name, value)) in c.fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}={}", name, value)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// The fields of a composite value, consumed in declaration order.
#[derive(Debug)]
pub struct Fields {
    expected: String,
    fields: vec::IntoIter<(Name, Value)>,
}

impl Fields {
    pub fn next_field<T: Stub>(&mut self) -> Result<T, StubError> {
        match self.fields.next() {
            Some((_, value)) => T::from_value(value),
            None => Err(StubError::mismatch(&self.expected, "a composite with too few fields")),
        }
    }

    /// Check that every field was consumed.
    pub fn finish(mut self) -> Result<(), StubError> {
        match self.fields.next() {
            None => Ok(()),
            Some((name, _)) => Err(StubError::mismatch(
                self.expected,
                format!("a composite with an extra field `{}`", name),
            )),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_class() -> Value {
        Value::Composite(CompositeValue {
            type_name: "CustomClass".into(),
            constructor: "CustomClass".into(),
            fields: vec![("i".into(), Value::Scalar(ScalarValue::I32(0)))],
        })
    }

    #[test]
    fn test_display() {
        assert_eq!(custom_class().to_string(), "CustomClass(i=0)");

        let value = Value::Composite(CompositeValue {
            type_name: "Shape".into(),
            constructor: "Circle".into(),
            fields: vec![
                ("radius".into(), Value::Scalar(ScalarValue::F64(0.0))),
                ("label".into(), Value::Scalar(ScalarValue::String("String".into()))),
                ("tag".into(), Value::Scalar(ScalarValue::Char('a'))),
                ("parent".into(), Value::Absent),
                ("points".into(), Value::Sequence(Vec::new())),
                ("index".into(), Value::Map(Vec::new())),
            ],
        });
        assert_eq!(
            value.to_string(),
            r#"Shape::Circle(radius=0.0, label="String", tag='a', parent=None, points=[], index={:})"#
        );
    }

    #[test]
    fn test_into_composite() {
        let (constructor, mut fields) = custom_class().into_composite("CustomClass").unwrap();
        assert_eq!(constructor, "CustomClass");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.next_field::<i32>().unwrap(), 0);
        assert!(fields.is_empty());
        assert!(fields.next_field::<i32>().is_err());

        fields.finish().unwrap();

        let err = Value::Absent.into_composite("CustomClass").unwrap_err();
        assert_eq!(err, StubError::mismatch("CustomClass", "an absent value"));
    }

    #[test]
    fn test_into_composite_rejects_other_types() {
        let err = custom_class().into_composite("OtherClass").unwrap_err();
        assert_eq!(err, StubError::mismatch("OtherClass", "a value of type `CustomClass`"));
    }

    #[test]
    fn test_extra_fields() {
        let value = Value::Composite(CompositeValue {
            type_name: "Meters".into(),
            constructor: "Meters".into(),
            fields: vec![
                ("0".into(), Value::Scalar(ScalarValue::F64(0.0))),
                ("extra".into(), Value::Scalar(ScalarValue::Bool(true))),
            ],
        });
        let (_, mut fields) = value.into_composite("Meters").unwrap();
        assert_eq!(fields.next_field::<f64>().unwrap(), 0.0);
        assert_eq!(
            fields.finish().unwrap_err(),
            StubError::mismatch("Meters", "a composite with an extra field `extra`")
        );
    }

    #[test]
    fn test_display_generic_struct_and_empty_collections() {
        let value = Value::Composite(CompositeValue {
            type_name: "Wrapper<u8>".into(),
            constructor: "Wrapper".into(),
            fields: vec![
                ("set".into(), Value::Set(Vec::new())),
                ("map".into(), Value::Map(Vec::new())),
            ],
        });
        assert_eq!(value.to_string(), "Wrapper<u8>(set={}, map={:})");

        let entries = Value::Map(vec![(Value::Scalar(ScalarValue::I32(1)), Value::Absent)]);
        assert_eq!(entries.to_string(), "{1: None}");
    }

    #[cfg(feature = "serde_json_serializer")]
    #[test]
    fn test_to_json() {
        let json = custom_class().to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["Composite"]["type_name"], "CustomClass");
        assert_eq!(parsed["Composite"]["fields"][0][0], "i");
        assert_eq!(parsed["Composite"]["fields"][0][1]["Scalar"], 0);
    }
}
