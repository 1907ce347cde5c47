use tracing::{debug, debug_span, trace};

use crate::descriptor::{Composite, TypeDef, TypeDescriptor};
use crate::path::ConstructionPath;
use crate::registry::TypeRegistry;
use crate::value::{CompositeValue, Value};
use crate::{Stub, StubError};

/**
Builds values of arbitrary types with default contents.

For each parameter of a constructor, the first matching rule decides its value:

1. a nullable type is [`Value::Absent`]
2. a sequence, map or set is empty
3. a scalar gets its canonical default, see [`Scalar::default_value`](crate::Scalar::default_value)
4. a composite declaring a collection supertype is the empty collection of
   that shape, trying sequence, then map, then set
5. any other composite is built recursively through its selected constructor

```
use stubgen::{Stub, Synthesizer};

#[derive(Debug, PartialEq, Stub)]
struct Point {
    x: i32,
    y: i32,
    label: Option<String>,
}

let point = Synthesizer::new().create::<Point>().unwrap();
assert_eq!(point, Point { x: 0, y: 0, label: None });
```
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct Synthesizer<'r> {
    registry: Option<&'r TypeRegistry>,
    require_primary: bool,
}

impl<'r> Synthesizer<'r> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve [`TypeRef::named`](crate::TypeRef::named) parameters in `registry`.
    pub fn with_registry(mut self, registry: &'r TypeRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Only accept a top-level composite that designates a primary constructor.
    pub fn require_primary(mut self, require: bool) -> Self {
        self.require_primary = require;
        self
    }

    pub fn synthesize(&self, ty: &TypeDescriptor) -> Result<Value, StubError> {
        let span = debug_span!("synthesize", type_name = %ty.name());
        let _enter = span.enter();

        let mut path = ConstructionPath::new();
        let value = self.value_for(ty, &mut path, true)?;
        debug!("stub created");
        Ok(value)
    }

    /// Synthesize the type registered under `name`.
    pub fn synthesize_named(&self, name: &str) -> Result<Value, StubError> {
        let ty = self
            .registry
            .and_then(|registry| registry.get(name))
            .ok_or_else(|| StubError::UnknownType { name: name.to_string() })?;
        self.synthesize(ty)
    }

    pub fn create<T: Stub>(&self) -> Result<T, StubError> {
        let value = self.synthesize(&T::descriptor())?;
        T::from_value(value)
    }

    fn value_for(&self, ty: &TypeDescriptor, path: &mut ConstructionPath, top_level: bool) -> Result<Value, StubError> {
        if ty.is_nullable() {
            return Ok(Value::Absent);
        }
        match ty.def() {
            TypeDef::Collection(kind) => Ok(kind.empty()),
            TypeDef::Scalar(kind) => Ok(Value::Scalar(kind.default_value())),
            TypeDef::Composite(composite) => {
                if let Some(kind) = composite.collection_supertype() {
                    return Ok(kind.empty());
                }
                self.construct(ty, composite, path, top_level)
            }
        }
    }

    fn construct(
        &self,
        ty: &TypeDescriptor,
        composite: &Composite,
        path: &mut ConstructionPath,
        top_level: bool,
    ) -> Result<Value, StubError> {
        if let Err(e) = path.enter(ty) {
            debug!(type_name = %ty.name(), "circular type dependency");
            return Err(e);
        }

        let constructor = if top_level && self.require_primary {
            composite.primary()
        } else {
            composite.select_constructor()
        };
        let constructor = match constructor {
            Some(constructor) => constructor,
            None => {
                debug!(type_name = %ty.name(), "no usable constructor");
                return Err(StubError::no_constructor(ty.name().to_string()));
            }
        };
        trace!(
            type_name = %ty.name(),
            constructor = %constructor.name(),
            depth = path.depth(),
            "constructing"
        );

        let mut fields = Vec::with_capacity(constructor.params().len());
        for param in constructor.params() {
            let param_ty = param.ty().resolve(self.registry)?;
            let value = self.value_for(&param_ty, path, false)?;
            fields.push((param.name().clone(), value));
        }
        path.exit();

        Ok(Value::Composite(CompositeValue {
            type_name: ty.name().clone(),
            constructor: constructor.name().clone(),
            fields,
        }))
    }
}

/// Create a value of type `T` with default contents.
///
/// This is a shortcut for `Synthesizer::new().create::<T>()`.
pub fn create_stub<T: Stub>() -> Result<T, StubError> {
    Synthesizer::new().create::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{CollectionKind, Constructor, Param, Scalar, TypeRef};
    use crate::value::ScalarValue;

    fn custom_class() -> TypeDescriptor {
        TypeDescriptor::composite(
            "CustomClass",
            Composite::single(Constructor::new("CustomClass", vec![Param::new("i", TypeRef::scalar(Scalar::I32))])),
        )
    }

    #[test]
    fn test_nullable_wins() {
        let value = Synthesizer::new().synthesize(&custom_class().nullable()).unwrap();
        assert_eq!(value, Value::Absent);

        let list = TypeDescriptor::collection("List", CollectionKind::Sequence).nullable();
        assert_eq!(Synthesizer::new().synthesize(&list).unwrap(), Value::Absent);
    }

    #[test]
    fn test_scalar_at_top_level() {
        let value = Synthesizer::new().synthesize(&TypeDescriptor::scalar(Scalar::Char)).unwrap();
        assert_eq!(value, Value::Scalar(ScalarValue::Char('a')));
    }

    #[test]
    fn test_composite() {
        let value = Synthesizer::new().synthesize(&custom_class()).unwrap();
        assert_eq!(value.to_string(), "CustomClass(i=0)");
    }

    #[test]
    fn test_supertype_before_constructor() {
        // the constructor would fail, the supertype must be used first
        let names = TypeDescriptor::composite(
            "Names",
            Composite::new(Vec::new()).with_supertype(CollectionKind::Map),
        );
        assert_eq!(Synthesizer::new().synthesize(&names).unwrap(), Value::Map(Vec::new()));
    }

    #[test]
    fn test_require_primary() {
        let shape = TypeDescriptor::composite(
            "Shape",
            Composite::new(vec![
                Constructor::new("Circle", vec![Param::new("radius", TypeRef::scalar(Scalar::F64))]),
                Constructor::new("Dot", Vec::new()),
            ]),
        );
        let value = Synthesizer::new().synthesize(&shape).unwrap();
        assert_eq!(value.to_string(), "Shape::Circle(radius=0.0)");

        let err = Synthesizer::new().require_primary(true).synthesize(&shape).unwrap_err();
        assert!(err.is_no_constructor());

        let mut registry = TypeRegistry::new();
        registry.register(shape);
        registry.register(TypeDescriptor::composite(
            "Drawing",
            Composite::single(Constructor::new("Drawing", vec![Param::new("shape", TypeRef::named("Shape"))])),
        ));
        // nested composites never require a primary constructor
        let value = Synthesizer::new()
            .with_registry(&registry)
            .require_primary(true)
            .synthesize_named("Drawing")
            .unwrap();
        assert_eq!(value.to_string(), "Drawing(shape=Shape::Circle(radius=0.0))");
    }

    #[test]
    fn test_synthesize_named_without_registry() {
        let err = Synthesizer::new().synthesize_named("CustomClass").unwrap_err();
        assert_eq!(err, StubError::UnknownType { name: "CustomClass".to_string() });
    }
}
