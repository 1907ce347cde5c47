use thiserror::Error;

/// The reasons why a stub cannot be created.
///
/// Every error aborts the whole synthesis: no partially built value is ever
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StubError {
    /// The type has no usable constructor, e.g. an enum without variants or
    /// a registered abstract type.
    #[error("cannot create a stub for `{type_name}`: it has no usable constructor")]
    NoConstructor { type_name: String },

    /// Creating the type would re-enter a type that is already being
    /// constructed.
    #[error("circular type dependency, cannot create a value for `{type_name}` ({path})")]
    CircularType { type_name: String, path: String },

    /// A parameter refers to a type name that was never registered.
    #[error("type `{name}` is not registered")]
    UnknownType { name: String },

    /// A synthesized value does not have the shape expected by `Stub::from_value`.
    #[error("cannot build `{expected}` from {found}")]
    Mismatch { expected: String, found: String },
}

impl StubError {
    pub fn no_constructor(type_name: impl Into<String>) -> Self {
        Self::NoConstructor {
            type_name: type_name.into(),
        }
    }

    pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::Mismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn is_no_constructor(&self) -> bool {
        matches!(self, Self::NoConstructor { .. })
    }

    pub fn is_circular(&self) -> bool {
        matches!(self, Self::CircularType { .. })
    }
}
