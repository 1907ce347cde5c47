use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::descriptor::{CollectionKind, TypeDef, TypeDescriptor};
use crate::value::Value;
use crate::{Stub, StubError};

// All the std sequences, maps and sets are classified by their shape, so
// that every implementation of a shape gets the same empty default.

macro_rules! impl_stub_for_elements {
    ($coll:ident, $name:literal, $kind:ident $(, $bound:path)*) => {
        impl<T: Stub $(+ $bound)*> Stub for $coll<T> {
            fn descriptor() -> TypeDescriptor {
                let name = TypeDescriptor::instance_name($name, &[T::descriptor()]);
                TypeDescriptor::of::<Self>(name, TypeDef::Collection(CollectionKind::$kind))
            }

            fn from_value(value: Value) -> Result<Self, StubError> {
                value.into_elements($name)?.into_iter().map(T::from_value).collect()
            }
        }
    };
}

impl_stub_for_elements!(Vec, "Vec", Sequence);
impl_stub_for_elements!(VecDeque, "VecDeque", Sequence);
impl_stub_for_elements!(LinkedList, "LinkedList", Sequence);
impl_stub_for_elements!(BinaryHeap, "BinaryHeap", Sequence, Ord);
impl_stub_for_elements!(BTreeSet, "BTreeSet", Set, Ord);

impl<T, S> Stub for HashSet<T, S>
where
    T: Stub + Eq + Hash,
    S: BuildHasher + Default + 'static,
{
    fn descriptor() -> TypeDescriptor {
        let name = TypeDescriptor::instance_name("HashSet", &[T::descriptor()]);
        TypeDescriptor::of::<Self>(name, TypeDef::Collection(CollectionKind::Set))
    }

    fn from_value(value: Value) -> Result<Self, StubError> {
        value.into_elements("HashSet")?.into_iter().map(T::from_value).collect()
    }
}

impl<K, V, S> Stub for HashMap<K, V, S>
where
    K: Stub + Eq + Hash,
    V: Stub,
    S: BuildHasher + Default + 'static,
{
    fn descriptor() -> TypeDescriptor {
        let name = TypeDescriptor::instance_name("HashMap", &[K::descriptor(), V::descriptor()]);
        TypeDescriptor::of::<Self>(name, TypeDef::Collection(CollectionKind::Map))
    }

    fn from_value(value: Value) -> Result<Self, StubError> {
        value
            .into_entries("HashMap")?
            .into_iter()
            .map(|(k, v)| Ok::<_, StubError>((K::from_value(k)?, V::from_value(v)?)))
            .collect()
    }
}

impl<K, V> Stub for BTreeMap<K, V>
where
    K: Stub + Ord,
    V: Stub,
{
    fn descriptor() -> TypeDescriptor {
        let name = TypeDescriptor::instance_name("BTreeMap", &[K::descriptor(), V::descriptor()]);
        TypeDescriptor::of::<Self>(name, TypeDef::Collection(CollectionKind::Map))
    }

    fn from_value(value: Value) -> Result<Self, StubError> {
        value
            .into_entries("BTreeMap")?
            .into_iter()
            .map(|(k, v)| Ok::<_, StubError>((K::from_value(k)?, V::from_value(v)?)))
            .collect()
    }
}
