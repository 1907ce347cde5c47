use crate::descriptor::{Name, TypeDescriptor, TypeKey};
use crate::StubError;

/// The composite types currently being constructed, outermost first.
///
/// A type appears at most once in the path. Entering a type that is already
/// in it fails with [`StubError::CircularType`] instead of recursing forever.
#[derive(Debug, Default)]
pub struct ConstructionPath {
    entries: Vec<(TypeKey, Name)>,
}

impl ConstructionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, ty: &TypeDescriptor) -> Result<(), StubError> {
        if self.contains(ty.key()) {
            let chain = self
                .entries
                .iter()
                .map(|(_, name)| &**name)
                .chain(std::iter::once(&**ty.name()))
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(StubError::CircularType {
                type_name: ty.name().to_string(),
                path: chain,
            });
        }
        self.entries.push((ty.key().clone(), ty.name().clone()));
        Ok(())
    }

    pub fn exit(&mut self) {
        self.entries.pop();
    }

    pub fn contains(&self, key: &TypeKey) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}
