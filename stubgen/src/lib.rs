//! Stubgen creates instances of arbitrary types filled with default values.
//!
//! It is meant for tests that need a value of some type to satisfy a
//! signature, but do not care about its contents:
//!
//! ```
//! use stubgen::{create_stub, Stub};
//!
//! #[derive(Debug, PartialEq, Stub)]
//! struct Account {
//!     id: u64,
//!     owner: String,
//!     balance: f64,
//!     tags: Vec<String>,
//!     parent: Option<Box<Account>>,
//! }
//!
//! let account = create_stub::<Account>().unwrap();
//! assert_eq!(
//!     account,
//!     Account { id: 0, owner: "String".to_string(), balance: 0.0, tags: vec![], parent: None }
//! );
//! ```
//!
//! The values are chosen by the [`Synthesizer`] from the [`TypeDescriptor`]
//! of the type. Descriptors come from the [`Stub`] trait or can be built by
//! hand and stored in a [`TypeRegistry`].

extern crate self as stubgen;

mod descriptor;
mod error;
mod path;
mod registry;
pub mod stubs;
mod synthesizer;
mod traits;
mod value;

#[doc(inline)]
pub use descriptor::{CollectionKind, Composite, Constructor, Name, Param, Scalar, TypeDef, TypeDescriptor, TypeKey, TypeRef};
#[doc(inline)]
pub use error::StubError;
#[doc(inline)]
pub use path::ConstructionPath;
#[doc(inline)]
pub use registry::TypeRegistry;
#[doc(inline)]
pub use synthesizer::{create_stub, Synthesizer};
#[doc(inline)]
pub use traits::Stub;
#[doc(inline)]
pub use value::{CompositeValue, Fields, ScalarValue, Value};

pub use stubgen_derive::Stub;
