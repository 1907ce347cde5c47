/*!
Descriptions of the shape of a type.

A [`TypeDescriptor`] tells the [`Synthesizer`](crate::Synthesizer) everything
it needs to know about a type: whether it is nullable, whether it is a
scalar, a standard collection or a composite, and, for composites, the
ordered parameter lists of its constructors.

Descriptors are produced in two ways:

* by the [`Stub`] trait, usually through `#[derive(Stub)]`. The parameter
  types are then referenced lazily through [`TypeRef::of`], so that describing
  a recursive type does not itself recurse.
* by hand, and stored in a [`TypeRegistry`](crate::TypeRegistry). Parameters
  then refer to other registered types by name with [`TypeRef::named`].
*/

use std::any::TypeId;
use std::borrow::Cow;
use std::fmt;

use crate::registry::TypeRegistry;
use crate::value::{ScalarValue, Value};
use crate::{Stub, StubError};

pub type Name = Cow<'static, str>;

/// The identity of a type, used to detect construction cycles.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Rust(TypeId),
    Named(Name),
}

/// The primitive scalar kinds, each with a canonical default value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scalar {
    F64,
    F32,
    I64,
    I32,
    I16,
    I8,
    Bool,
    Char,
    String,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

impl Scalar {
    /// The value given to every parameter of this kind.
    pub fn default_value(self) -> ScalarValue {
        match self {
            Self::F64 => ScalarValue::F64(0.0),
            Self::F32 => ScalarValue::F32(0.0),
            Self::I64 => ScalarValue::I64(0),
            Self::I32 => ScalarValue::I32(0),
            Self::I16 => ScalarValue::I16(0),
            Self::I8 => ScalarValue::I8(0),
            Self::Bool => ScalarValue::Bool(false),
            Self::Char => ScalarValue::Char('a'),
            Self::String => ScalarValue::String("String".to_owned()),
            Self::I128 => ScalarValue::I128(0),
            Self::Isize => ScalarValue::Isize(0),
            Self::U8 => ScalarValue::U8(0),
            Self::U16 => ScalarValue::U16(0),
            Self::U32 => ScalarValue::U32(0),
            Self::U64 => ScalarValue::U64(0),
            Self::U128 => ScalarValue::U128(0),
            Self::Usize => ScalarValue::Usize(0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::I64 => "i64",
            Self::I32 => "i32",
            Self::I16 => "i16",
            Self::I8 => "i8",
            Self::Bool => "bool",
            Self::Char => "char",
            Self::String => "String",
            Self::I128 => "i128",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::U128 => "u128",
            Self::Usize => "usize",
        }
    }
}

/// The three standard container shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Sequence,
    Map,
    Set,
}

impl CollectionKind {
    /// Classification order when a type declares several collection supertypes.
    pub const ALL: [CollectionKind; 3] = [CollectionKind::Sequence, CollectionKind::Map, CollectionKind::Set];

    pub fn empty(self) -> Value {
        match self {
            Self::Sequence => Value::Sequence(Vec::new()),
            Self::Map => Value::Map(Vec::new()),
            Self::Set => Value::Set(Vec::new()),
        }
    }
}

#[derive(Clone, Debug)]
pub enum TypeDef {
    Scalar(Scalar),
    Collection(CollectionKind),
    Composite(Composite),
}

/// The shape of a type, as seen by the synthesizer.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    name: Name,
    key: TypeKey,
    nullable: bool,
    def: TypeDef,
}

impl TypeDescriptor {
    /// Describe the Rust type `T`. Its identity is its `TypeId`.
    pub fn of<T: ?Sized + 'static>(name: impl Into<Name>, def: TypeDef) -> Self {
        Self {
            name: name.into(),
            key: TypeKey::Rust(TypeId::of::<T>()),
            nullable: false,
            def,
        }
    }

    /// Describe a type that only exists as a descriptor. Its identity is its name.
    pub fn named(name: impl Into<Name>, def: TypeDef) -> Self {
        let name = name.into();
        Self {
            key: TypeKey::Named(name.clone()),
            name,
            nullable: false,
            def,
        }
    }

    pub fn scalar(kind: Scalar) -> Self {
        Self::named(kind.name(), TypeDef::Scalar(kind))
    }

    pub fn collection(name: impl Into<Name>, kind: CollectionKind) -> Self {
        Self::named(name, TypeDef::Collection(kind))
    }

    pub fn composite(name: impl Into<Name>, composite: Composite) -> Self {
        Self::named(name, TypeDef::Composite(composite))
    }

    /// A type that can be named but not constructed, such as an interface.
    pub fn abstract_type(name: impl Into<Name>) -> Self {
        Self::composite(name, Composite::new(Vec::new()))
    }

    /// The name of a generic type instantiated with `args`, e.g. `Pair<u8, String?>`.
    pub fn instance_name(base: &str, args: &[TypeDescriptor]) -> Name {
        if args.is_empty() {
            return Name::Owned(base.to_string());
        }
        let args = args.iter().map(|arg| arg.to_string()).collect::<Vec<_>>();
        Name::Owned(format!("{}<{}>", base, args.join(", ")))
    }

    /// Mark the type as optional: it will be synthesized as [`Value::Absent`].
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn def(&self) -> &TypeDef {
        &self.def
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// The constructors of a composite type.
#[derive(Clone, Debug, Default)]
pub struct Composite {
    constructors: Vec<Constructor>,
    primary: Option<usize>,
    supertypes: Vec<CollectionKind>,
}

impl Composite {
    pub fn new(constructors: Vec<Constructor>) -> Self {
        Self {
            constructors,
            primary: None,
            supertypes: Vec::new(),
        }
    }

    /// A composite whose only constructor is also its primary one.
    pub fn single(constructor: Constructor) -> Self {
        Self::new(vec![constructor]).with_primary(0)
    }

    pub fn with_primary(mut self, index: usize) -> Self {
        self.primary = Some(index);
        self
    }

    /// Declare that the type is also a standard collection of the given kind.
    pub fn with_supertype(mut self, kind: CollectionKind) -> Self {
        if !self.supertypes.contains(&kind) {
            self.supertypes.push(kind);
        }
        self
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    pub fn primary(&self) -> Option<&Constructor> {
        self.primary.and_then(|index| self.constructors.get(index))
    }

    /// The primary constructor if there is one, otherwise the first declared one.
    pub fn select_constructor(&self) -> Option<&Constructor> {
        self.primary().or_else(|| self.constructors.first())
    }

    pub fn collection_supertype(&self) -> Option<CollectionKind> {
        CollectionKind::ALL.into_iter().find(|kind| self.supertypes.contains(kind))
    }
}

#[derive(Clone, Debug)]
pub struct Constructor {
    name: Name,
    params: Vec<Param>,
}

impl Constructor {
    pub fn new(name: impl Into<Name>, params: Vec<Param>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// A constructor whose parameters are named after their position.
    pub fn positional(name: impl Into<Name>, types: Vec<TypeRef>) -> Self {
        let params = types
            .into_iter()
            .enumerate()
            .map(|(i, ty)| Param::new(i.to_string(), ty))
            .collect();
        Self::new(name, params)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }
}

#[derive(Clone, Debug)]
pub struct Param {
    name: Name,
    ty: TypeRef,
}

impl Param {
    pub fn new(name: impl Into<Name>, ty: TypeRef) -> Self {
        Self { name: name.into(), ty }
    }

    pub fn of<T: Stub>(name: impl Into<Name>) -> Self {
        Self::new(name, TypeRef::of::<T>())
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }
}

#[derive(Clone, Debug)]
enum RefTarget {
    Static(fn() -> TypeDescriptor),
    Inline(Box<TypeDescriptor>),
    Named(Name),
}

/// The declared type of a parameter, resolved only when the parameter is synthesized.
#[derive(Clone, Debug)]
pub struct TypeRef {
    target: RefTarget,
    nullable: bool,
}

impl TypeRef {
    pub fn of<T: Stub>() -> Self {
        Self {
            target: RefTarget::Static(T::descriptor),
            nullable: false,
        }
    }

    pub fn inline(descriptor: TypeDescriptor) -> Self {
        Self {
            target: RefTarget::Inline(Box::new(descriptor)),
            nullable: false,
        }
    }

    pub fn scalar(kind: Scalar) -> Self {
        Self::inline(TypeDescriptor::scalar(kind))
    }

    /// A reference to a type registered in a [`TypeRegistry`] under `name`.
    pub fn named(name: impl Into<Name>) -> Self {
        Self {
            target: RefTarget::Named(name.into()),
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn resolve(&self, registry: Option<&TypeRegistry>) -> Result<TypeDescriptor, StubError> {
        let descriptor = match &self.target {
            RefTarget::Static(describe) => describe(),
            RefTarget::Inline(descriptor) => (**descriptor).clone(),
            RefTarget::Named(name) => registry
                .and_then(|registry| registry.get(name))
                .cloned()
                .ok_or_else(|| StubError::UnknownType { name: name.to_string() })?,
        };
        Ok(if self.nullable { descriptor.nullable() } else { descriptor })
    }
}
