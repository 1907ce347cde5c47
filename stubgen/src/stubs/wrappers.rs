use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use crate::descriptor::{Composite, Constructor, TypeDef, TypeDescriptor};
use crate::value::Value;
use crate::{Stub, StubError};

/// `Option<T>` is `T`, marked as nullable.
impl<T: Stub> Stub for Option<T> {
    fn descriptor() -> TypeDescriptor {
        T::descriptor().nullable()
    }

    fn from_value(value: Value) -> Result<Self, StubError> {
        match value {
            Value::Absent => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}

// Smart pointers are transparent: they share the identity of their content,
// so a `Box<Self>` field is seen as a circular dependency.
macro_rules! impl_stub_for_pointer {
    ($ptr:ident) => {
        impl<T: Stub> Stub for $ptr<T> {
            fn descriptor() -> TypeDescriptor {
                T::descriptor()
            }

            fn from_value(value: Value) -> Result<Self, StubError> {
                T::from_value(value).map($ptr::new)
            }
        }
    };
}

impl_stub_for_pointer!(Box);
impl_stub_for_pointer!(Rc);
impl_stub_for_pointer!(Arc);

impl<T: ?Sized + 'static> Stub for PhantomData<T> {
    fn descriptor() -> TypeDescriptor {
        let constructor = Constructor::new("PhantomData", Vec::new());
        TypeDescriptor::of::<Self>(phantom_name::<T>(), TypeDef::Composite(Composite::single(constructor)))
    }

    fn from_value(value: Value) -> Result<Self, StubError> {
        let (_, fields) = value.into_composite(&phantom_name::<T>())?;
        fields.finish()?;
        Ok(PhantomData)
    }
}

// `T` may be unsized and need not implement `Stub`, so it is named by the compiler.
fn phantom_name<T: ?Sized>() -> String {
    format!("PhantomData<{}>", std::any::type_name::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_stub;

    #[test]
    fn test_option_is_none() {
        assert_eq!(create_stub::<Option<i32>>().unwrap(), None);
        assert_eq!(create_stub::<Option<Vec<String>>>().unwrap(), None);
        assert_eq!(create_stub::<Option<Option<char>>>().unwrap(), None);
    }

    #[test]
    fn test_pointers() {
        assert_eq!(*create_stub::<Box<i8>>().unwrap(), 0);
        assert_eq!(*create_stub::<Rc<String>>().unwrap(), "String");
        assert!(create_stub::<Arc<Vec<u8>>>().unwrap().is_empty());
        assert_eq!(create_stub::<Box<Option<bool>>>().unwrap(), Box::new(None));
    }

    #[test]
    fn test_pointer_shares_identity() {
        assert_eq!(<Box<u32>>::descriptor().key(), u32::descriptor().key());
        assert!(<Option<u32>>::descriptor().is_nullable());
    }

    #[test]
    fn test_phantom_data() {
        let _: PhantomData<dyn Fn()> = create_stub().unwrap();
        assert_eq!(<PhantomData<u8>>::descriptor().name(), "PhantomData<u8>");
    }
}
