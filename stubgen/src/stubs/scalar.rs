use crate::descriptor::{Scalar, TypeDef, TypeDescriptor};
use crate::value::{ScalarValue, Value};
use crate::{Stub, StubError};

macro_rules! impl_stub_for_scalar {
    ($ty:ty, $kind:ident) => {
        impl Stub for $ty {
            fn descriptor() -> TypeDescriptor {
                TypeDescriptor::of::<$ty>(Scalar::$kind.name(), TypeDef::Scalar(Scalar::$kind))
            }

            fn from_value(value: Value) -> Result<Self, StubError> {
                match value {
                    Value::Scalar(ScalarValue::$kind(x)) => Ok(x),
                    other => Err(other.mismatch(Scalar::$kind.name())),
                }
            }
        }
    };
}

impl_stub_for_scalar!(f64, F64);
impl_stub_for_scalar!(f32, F32);
impl_stub_for_scalar!(i64, I64);
impl_stub_for_scalar!(i32, I32);
impl_stub_for_scalar!(i16, I16);
impl_stub_for_scalar!(i8, I8);
impl_stub_for_scalar!(bool, Bool);
impl_stub_for_scalar!(char, Char);
impl_stub_for_scalar!(String, String);
impl_stub_for_scalar!(i128, I128);
impl_stub_for_scalar!(isize, Isize);
impl_stub_for_scalar!(u8, U8);
impl_stub_for_scalar!(u16, U16);
impl_stub_for_scalar!(u32, U32);
impl_stub_for_scalar!(u64, U64);
impl_stub_for_scalar!(u128, U128);
impl_stub_for_scalar!(usize, Usize);
