//! Implementations of [`Stub`](crate::Stub) for types of the standard library.
//!
//! * scalars: the integers, floats, `bool`, `char` and `String`
//! * collections: `Vec`, `VecDeque`, `LinkedList`, `BinaryHeap`, `HashMap`, `BTreeMap`, `HashSet`, `BTreeSet`
//! * wrappers: `Option`, `Box`, `Rc`, `Arc`, `PhantomData`
//! * `()`, tuples of up to 8 elements, and arrays

mod collections;
mod scalar;
mod tuples;
mod wrappers;
