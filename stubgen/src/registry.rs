use ahash::AHashMap;

use crate::descriptor::{Name, TypeDescriptor};
use crate::Stub;

/// A table of descriptors indexed by type name.
///
/// Parameters declared with [`TypeRef::named`](crate::TypeRef::named) are
/// resolved against the registry given to the
/// [`Synthesizer`](crate::Synthesizer).
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    types: AHashMap<Name, TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its name, returning the one it replaces.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Option<TypeDescriptor> {
        self.types.insert(descriptor.name().clone(), descriptor)
    }

    pub fn register_stub<T: Stub>(&mut self) -> Option<TypeDescriptor> {
        self.register(T::descriptor())
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
