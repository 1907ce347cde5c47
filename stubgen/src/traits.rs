use crate::descriptor::TypeDescriptor;
use crate::value::Value;
use crate::StubError;

/**
A type that can describe its own shape and be rebuilt from a synthesized [`Value`].

`Stub` is implemented for the scalar types, the standard collections,
`Option`, `Box`, `Rc`, `Arc`, tuples and arrays. For your own structs and
enums, use `#[derive(Stub)]`:

```
use stubgen::{create_stub, Stub};

#[derive(Debug, PartialEq, Stub)]
struct CustomClass {
    i: i32,
}

#[derive(Debug, PartialEq, Stub)]
enum Event {
    Created { id: u64, owner: CustomClass },
    #[stub(primary)]
    Deleted(u64),
}

assert_eq!(create_stub::<CustomClass>().unwrap(), CustomClass { i: 0 });
assert_eq!(create_stub::<Event>().unwrap(), Event::Deleted(0));
```

A type with no constructor, such as an enum without variants, cannot be
stubbed, and neither can a type that contains itself other than through an
`Option`.

```
use stubgen::{create_stub, Stub};

#[derive(Debug, Stub)]
struct Circular {
    next: Box<Circular>,
}

#[derive(Debug, Stub)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

assert!(create_stub::<Circular>().unwrap_err().is_circular());
assert_eq!(create_stub::<Node>().unwrap().value, 0);
```
*/
pub trait Stub: Sized + 'static {
    /// The shape of `Self`.
    fn descriptor() -> TypeDescriptor;

    /// Rebuild `Self` from a value synthesized from its descriptor.
    /// Constructor arguments come in the order they are declared.
    fn from_value(value: Value) -> Result<Self, StubError>;
}
