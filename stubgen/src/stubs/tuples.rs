use crate::descriptor::{Composite, Constructor, Name, TypeDef, TypeDescriptor, TypeRef};
use crate::value::Value;
use crate::{Stub, StubError};

// Tuples and arrays are composites with a single positional constructor that
// carries the name of the type, e.g. `(u8, bool)` or `[u8; 3]`.

fn single_constructor<T: 'static>(name: Name, params: Vec<TypeRef>) -> TypeDescriptor {
    let constructor = Constructor::positional(name.clone(), params);
    TypeDescriptor::of::<T>(name, TypeDef::Composite(Composite::single(constructor)))
}

fn tuple_name(elements: &[TypeDescriptor]) -> Name {
    let names = elements.iter().map(|ty| ty.to_string()).collect::<Vec<_>>();
    match names.as_slice() {
        [single] => Name::Owned(format!("({},)", single)),
        names => Name::Owned(format!("({})", names.join(", "))),
    }
}

impl Stub for () {
    fn descriptor() -> TypeDescriptor {
        single_constructor::<Self>(Name::Borrowed("()"), Vec::new())
    }

    fn from_value(value: Value) -> Result<Self, StubError> {
        let (_, fields) = value.into_composite("()")?;
        fields.finish()
    }
}

macro_rules! impl_stub_for_tuple {
    ($($t:ident),+) => {
        impl<$($t: Stub),+> Stub for ($($t,)+) {
            fn descriptor() -> TypeDescriptor {
                let name = tuple_name(&[$($t::descriptor()),+]);
                single_constructor::<Self>(name, vec![$(TypeRef::of::<$t>()),+])
            }

            fn from_value(value: Value) -> Result<Self, StubError> {
                let name = tuple_name(&[$($t::descriptor()),+]);
                let (_, mut fields) = value.into_composite(&name)?;
                let tuple = ($(fields.next_field::<$t>()?,)+);
                fields.finish()?;
                Ok(tuple)
            }
        }
    };
}

impl_stub_for_tuple!(T0);
impl_stub_for_tuple!(T0, T1);
impl_stub_for_tuple!(T0, T1, T2);
impl_stub_for_tuple!(T0, T1, T2, T3);
impl_stub_for_tuple!(T0, T1, T2, T3, T4);
impl_stub_for_tuple!(T0, T1, T2, T3, T4, T5);
impl_stub_for_tuple!(T0, T1, T2, T3, T4, T5, T6);
impl_stub_for_tuple!(T0, T1, T2, T3, T4, T5, T6, T7);

fn array_name<T: Stub, const N: usize>() -> Name {
    Name::Owned(format!("[{}; {}]", T::descriptor(), N))
}

/// An array is a composite with `N` positional parameters of type `T`.
impl<T: Stub, const N: usize> Stub for [T; N] {
    fn descriptor() -> TypeDescriptor {
        let params = (0..N).map(|_| TypeRef::of::<T>()).collect();
        single_constructor::<Self>(array_name::<T, N>(), params)
    }

    fn from_value(value: Value) -> Result<Self, StubError> {
        let name = array_name::<T, N>();
        let (_, mut fields) = value.into_composite(&name)?;
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(fields.next_field::<T>()?);
        }
        fields.finish()?;
        match <[T; N]>::try_from(items) {
            Ok(array) => Ok(array),
            Err(_) => unreachable!("exactly {} items were read", N),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::value::{CompositeValue, ScalarValue, Value};
    use crate::{create_stub, Stub, StubError};

    #[test]
    fn test_tuples() {
        create_stub::<()>().unwrap();
        assert_eq!(create_stub::<(i32,)>().unwrap(), (0,));
        assert_eq!(
            create_stub::<(bool, char, String, Option<u8>)>().unwrap(),
            (false, 'a', "String".to_string(), None)
        );
        assert_eq!(
            create_stub::<(u8, u8, u8, u8, u8, u8, u8, Vec<u8>)>().unwrap(),
            (0, 0, 0, 0, 0, 0, 0, vec![])
        );
    }

    #[test]
    fn test_arrays() {
        assert_eq!(create_stub::<[i16; 3]>().unwrap(), [0, 0, 0]);
        assert_eq!(create_stub::<[Option<char>; 2]>().unwrap(), [None, None]);
        let empty: [String; 0] = create_stub().unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_names() {
        assert_eq!(<(i32,)>::descriptor().name(), "(i32,)");
        assert_eq!(<(bool, Option<u8>)>::descriptor().name(), "(bool, u8?)");
        assert_eq!(<[char; 2]>::descriptor().name(), "[char; 2]");
        assert_eq!(create_stub::<(i32, i32)>().unwrap(), (0, 0));
    }

    #[test]
    fn test_from_value_rejects_wrong_arity() {
        let two_fields = |type_name: &str| {
            Value::Composite(CompositeValue {
                type_name: type_name.to_string().into(),
                constructor: type_name.to_string().into(),
                fields: vec![
                    ("0".into(), Value::Scalar(ScalarValue::U8(0))),
                    ("1".into(), Value::Scalar(ScalarValue::U8(0))),
                ],
            })
        };
        let err = <(u8,)>::from_value(two_fields("(u8,)")).unwrap_err();
        assert_eq!(err, StubError::mismatch("(u8,)", "a composite with an extra field `1`"));

        let err = <(u8,)>::from_value(two_fields("(u8, u8)")).unwrap_err();
        assert_eq!(err, StubError::mismatch("(u8,)", "a value of type `(u8, u8)`"));

        let err = <[u8; 1]>::from_value(two_fields("[u8; 1]")).unwrap_err();
        assert_eq!(err, StubError::mismatch("[u8; 1]", "a composite with an extra field `1`"));

        let err = <[u8; 3]>::from_value(two_fields("[u8; 3]")).unwrap_err();
        assert_eq!(err, StubError::mismatch("[u8; 3]", "a composite with too few fields"));
    }
}
